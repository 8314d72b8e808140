//! Type-directed rendering of raw example values into Rust expressions.
//!
//! Dispatch is on the declared `TypeTag` only; the value text is never
//! sniffed to decide what it is. `[1,2]` and `["a","b"]` look the same
//! bracket-wise, the element type tells them apart.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::TypeTag;

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\s*=\s*").unwrap());

pub const STRING_VEC_MACRO: &str = "svec!";
pub const TREE_MACRO: &str = "tree!";
pub const LIST_MACRO: &str = "link!";
const VEC_MACRO: &str = "vec!";

/// Renders one raw value. `is_return` marks the expected-output position,
/// where a `Vec<String>` compares fine against a plain `vec!` of `&str`.
pub fn render_literal(raw: &str, ty: &TypeTag, is_return: bool) -> String {
    let value = strip_assignment(raw.trim());
    let value = if ty.is_char_based() {
        value.replace('"', "'")
    } else {
        value.to_string()
    };

    match ty {
        TypeTag::Vec(elem) => render_sequence(&value, elem, !is_return, is_return),
        TypeTag::String => wrap_call("String::from", &value),
        TypeTag::Tree => wrap_macro(TREE_MACRO, &value),
        TypeTag::List => wrap_macro(LIST_MACRO, &value),
        TypeTag::F64 => float_literal(&value),
        TypeTag::MutRef(inner) => {
            let inner_value = value.strip_prefix("&mut").map(str::trim).unwrap_or(&value);
            format!("&mut {}", render_literal(inner_value, inner, is_return))
        }
        TypeTag::Unit => "()".to_string(),
        TypeTag::I32
        | TypeTag::I64
        | TypeTag::Usize
        | TypeTag::Bool
        | TypeTag::Char
        | TypeTag::Other(_) => value,
    }
}

/// Keeps only the right-hand side of `name = value`.
fn strip_assignment(value: &str) -> &str {
    match ASSIGNMENT.find(value) {
        Some(m) => &value[m.end()..],
        None => value,
    }
}

/// Rewrites `[a,b]` into a sequence constructor chosen by the element type,
/// recursing into nested brackets. Text that is not a bracketed list
/// (already rendered, or malformed) is returned as is.
///
/// An empty expected value spells out its element type: `vec![]` compared
/// against a `Vec<String>` leaves `String: PartialEq<_>` ambiguous.
fn render_sequence(value: &str, elem: &TypeTag, string_macro: bool, is_return: bool) -> String {
    let Some(inner) = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return value.to_string();
    };

    let items: Vec<String> = split_top_level(inner)
        .into_iter()
        .map(|item| render_element(item.trim(), elem, is_return))
        .collect();
    if items.is_empty() && is_return && !elem.is_primitive() {
        return format!("Vec::<{}>::new()", elem);
    }

    let ctor = match elem {
        TypeTag::String if string_macro => STRING_VEC_MACRO,
        _ => VEC_MACRO,
    };
    format!("{}[{}]", ctor, items.join(","))
}

fn render_element(item: &str, ty: &TypeTag, is_return: bool) -> String {
    match ty {
        TypeTag::Vec(elem) => render_sequence(item, elem, true, is_return),
        TypeTag::Tree => wrap_macro(TREE_MACRO, item),
        TypeTag::List => wrap_macro(LIST_MACRO, item),
        TypeTag::F64 => float_literal(item),
        _ => item.to_string(),
    }
}

fn wrap_macro(name: &str, value: &str) -> String {
    if value.starts_with(name) {
        value.to_string()
    } else {
        format!("{}{}", name, value)
    }
}

fn wrap_call(func: &str, value: &str) -> String {
    if value.starts_with(func) {
        value.to_string()
    } else {
        format!("{}({})", func, value)
    }
}

/// `2` is not an `f64` literal, `2.0` is.
fn float_literal(value: &str) -> String {
    if value.parse::<i64>().is_ok() {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}

/// Splits on commas that sit outside brackets, parentheses, braces and
/// string or char literals. An empty input yields no items.
pub fn split_top_level(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::signature::parse_type;

    fn render(raw: &str, ty: &str) -> String {
        render_literal(raw, &parse_type(ty), false)
    }

    fn render_return(raw: &str, ty: &str) -> String {
        render_literal(raw, &parse_type(ty), true)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render("target=9", "i32"), "9");
        assert_eq!(render(" k = -3 ", "i64"), "-3");
        assert_eq!(render("true", "bool"), "true");
        assert_eq!(render("\"a\"", "char"), "'a'");
    }

    #[test]
    fn test_numeric_sequence() {
        assert_eq!(render("nums=[2,7,11,15]", "Vec<i32>"), "vec![2,7,11,15]");
        assert_eq!(render("[]", "Vec<i32>"), "vec![]");
        assert_eq!(
            render("[[1,2],[3]]", "Vec<Vec<i32>>"),
            "vec![vec![1,2],vec![3]]"
        );
    }

    #[test]
    fn test_string_sequence() {
        assert_eq!(render(r#"["a","b"]"#, "Vec<String>"), r#"svec!["a","b"]"#);
        assert_eq!(render_return(r#"["a","b"]"#, "Vec<String>"), r#"vec!["a","b"]"#);
        assert_eq!(
            render(r#"[["a"],["b","c"]]"#, "Vec<Vec<String>>"),
            r#"vec![svec!["a"],svec!["b","c"]]"#
        );
        assert_eq!(
            render_return(r#"[["a"],["b","c"]]"#, "Vec<Vec<String>>"),
            r#"vec![svec!["a"],svec!["b","c"]]"#
        );
    }

    #[test]
    fn test_empty_expected_sequence_is_typed() {
        assert_eq!(render_return("[]", "Vec<String>"), "Vec::<String>::new()");
        assert_eq!(render_return("[]", "Vec<Vec<String>>"), "Vec::<Vec<String>>::new()");
        assert_eq!(
            render_return(r#"[[],["a"]]"#, "Vec<Vec<String>>"),
            r#"vec![Vec::<String>::new(),svec!["a"]]"#
        );
        assert_eq!(render_return("[]", "Vec<i32>"), "vec![]");
        assert_eq!(render("[]", "Vec<String>"), "svec![]");
    }

    #[test]
    fn test_brackets_inside_strings_are_untouched() {
        assert_eq!(
            render(r#"["[a,b]","c"]"#, "Vec<String>"),
            r#"svec!["[a,b]","c"]"#
        );
    }

    #[test]
    fn test_char_grid() {
        assert_eq!(
            render(r#"[["1","0"],["0","1"]]"#, "Vec<Vec<char>>"),
            "vec![vec!['1','0'],vec!['0','1']]"
        );
    }

    #[test]
    fn test_string() {
        assert_eq!(render(r#"s = "abc""#, "String"), r#"String::from("abc")"#);
        assert_eq!(render_return(r#""abc""#, "String"), r#"String::from("abc")"#);
    }

    #[test]
    fn test_tree_and_list() {
        let tree = "Option<Rc<RefCell<TreeNode>>>";
        let list = "Option<Box<ListNode>>";
        assert_eq!(render("root = [1,null,2,3]", tree), "tree![1,null,2,3]");
        assert_eq!(render("head=[1,2]", list), "link![1,2]");
        assert_eq!(
            render("[[1,4,5],[1,3,4]]", "Vec<Option<Box<ListNode>>>"),
            "vec![link![1,4,5],link![1,3,4]]"
        );
        assert_eq!(
            render("[[1],[2,null]]", &format!("Vec<{}>", tree)),
            "vec![tree![1],tree![2,null]]"
        );
    }

    #[test]
    fn test_float() {
        assert_eq!(render_return("2", "f64"), "2.0");
        assert_eq!(render_return("2.50000", "f64"), "2.50000");
        assert_eq!(render("[1,2.5]", "Vec<f64>"), "vec![1.0,2.5]");
    }

    #[test]
    fn test_mut_ref_and_unit() {
        assert_eq!(render("nums1 = [1,2,3]", "&mut Vec<i32>"), "&mut vec![1,2,3]");
        assert_eq!(render_return("[1,2]", "()"), "()");
    }

    #[test]
    fn test_unknown_type_passes_through() {
        assert_eq!(render("x = [1,null]", "Vec<Option<i32>>"), "vec![1,null]");
        assert_eq!(render("{1:2}", "HashMap<i32, i32>"), "{1:2}");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let cases = [
            ("[[1,2],[3]]", "Vec<Vec<i32>>"),
            (r#"[["a"],["b"]]"#, "Vec<Vec<String>>"),
            (r#"["a","b"]"#, "Vec<String>"),
            ("[[1,2],[3]]", "Vec<Option<Box<ListNode>>>"),
            ("[]", "Vec<String>"),
            ("[1,null,2]", "Option<Rc<RefCell<TreeNode>>>"),
            (r#""abc""#, "String"),
            ("[1,2]", "&mut Vec<i32>"),
            ("3", "f64"),
            (r#"["x","y"]"#, "Vec<char>"),
        ];
        for (raw, ty) in cases {
            let once = render(raw, ty);
            assert_eq!(render(&once, ty), once, "double rendering of {} as {}", raw, ty);
        }
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level(r#"nums=[2,7],s="a,b",c=',',t=(1,2)"#),
            vec!["nums=[2,7]", r#"s="a,b""#, "c=','", "t=(1,2)"]
        );
        assert!(split_top_level("").is_empty());
        assert_eq!(split_top_level("9"), vec!["9"]);
    }
}
