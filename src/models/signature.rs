use std::fmt;

use thiserror::Error;

const TREE_TYPE: &str = "Option<Rc<RefCell<TreeNode>>>";
const LIST_TYPE: &str = "Option<Box<ListNode>>";

/// Shape of a value as far as literal rendering is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    I32,
    I64,
    F64,
    Usize,
    Bool,
    Char,
    String,
    Vec(Box<TypeTag>),
    MutRef(Box<TypeTag>),
    Tree,
    List,
    Unit,
    Other(std::string::String),
}

impl TypeTag {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeTag::I32
                | TypeTag::I64
                | TypeTag::F64
                | TypeTag::Usize
                | TypeTag::Bool
                | TypeTag::Char
        )
    }

    /// True when the value is made of characters, which the target writes
    /// with single quotes.
    pub fn is_char_based(&self) -> bool {
        match self {
            TypeTag::Char => true,
            TypeTag::Vec(inner) | TypeTag::MutRef(inner) => inner.is_char_based(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::I32 => write!(f, "i32"),
            TypeTag::I64 => write!(f, "i64"),
            TypeTag::F64 => write!(f, "f64"),
            TypeTag::Usize => write!(f, "usize"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Char => write!(f, "char"),
            TypeTag::String => write!(f, "String"),
            TypeTag::Vec(inner) => write!(f, "Vec<{}>", inner),
            TypeTag::MutRef(inner) => write!(f, "&mut {}", inner),
            TypeTag::Tree => write!(f, "{}", TREE_TYPE),
            TypeTag::List => write!(f, "{}", LIST_TYPE),
            TypeTag::Unit => write!(f, "()"),
            TypeTag::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: std::string::String,
    pub ty: TypeTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: std::string::String,
    pub params: Vec<Param>,
    pub return_type: TypeTag,
}

impl FunctionSignature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Function pointer type with the same parameters and return type,
    /// e.g. `fn(nums: Vec<i32>, target: i32) -> Vec<i32>`.
    pub fn callable_type(&self) -> std::string::String {
        let params: Vec<std::string::String> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect();
        match self.return_type {
            TypeTag::Unit => format!("fn({})", params.join(", ")),
            ref ret => format!("fn({}) -> {}", params.join(", "), ret),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("no `pub fn` declaration in template")]
    NoDeclaration,
    #[error("{} `pub fn` declarations in template", .0.len())]
    MultipleDeclarations(Vec<std::string::String>),
    #[error("malformed declaration: '{0}'")]
    Malformed(std::string::String),
}

/// Finds the single public function declared in a solution template and
/// parses it.
pub fn parse_declaration(template: &str) -> Result<FunctionSignature, SignatureError> {
    let decls: Vec<&str> = template
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("pub fn "))
        .collect();

    match decls.as_slice() {
        [] => Err(SignatureError::NoDeclaration),
        [line] => parse_signature(line),
        many => Err(SignatureError::MultipleDeclarations(
            many.iter().map(|l| l.to_string()).collect(),
        )),
    }
}

pub fn parse_signature(line: &str) -> Result<FunctionSignature, SignatureError> {
    let malformed = || SignatureError::Malformed(line.to_string());
    let line = line.trim();

    let rest = line
        .strip_prefix("pub ")
        .unwrap_or(line)
        .trim_start()
        .strip_prefix("fn ")
        .ok_or_else(malformed)?;

    let paren_open = rest.find('(').ok_or_else(malformed)?;
    let name = rest[..paren_open].trim().to_string();
    if name.is_empty() {
        return Err(malformed());
    }

    let paren_close = find_matching_paren(rest, paren_open).ok_or_else(malformed)?;
    let params = parse_params(&rest[paren_open + 1..paren_close]).ok_or_else(malformed)?;

    // Return clause runs up to the body.
    let after_parens = rest[paren_close + 1..].trim();
    let return_type = match after_parens.strip_prefix("->") {
        Some(ret) => {
            let ret = ret.split('{').next().unwrap_or("").trim();
            parse_type(ret)
        }
        None => TypeTag::Unit,
    };

    Ok(FunctionSignature {
        name,
        params,
        return_type,
    })
}

fn find_matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_params(params_str: &str) -> Option<Vec<Param>> {
    let trimmed = params_str.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let mut params = Vec::new();
    for part in split_respecting_angle_brackets(trimmed) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (name, ty_str) = part.split_once(':')?;
        params.push(Param {
            name: name.trim().trim_start_matches("mut ").trim().to_string(),
            ty: parse_type(ty_str),
        });
    }

    Some(params)
}

fn split_respecting_angle_brackets(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Unknown types are kept verbatim as `TypeTag::Other`.
pub fn parse_type(ty_str: &str) -> TypeTag {
    let compact: std::string::String = ty_str.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(inner) = ty_str.trim().strip_prefix("&mut ") {
        return TypeTag::MutRef(Box::new(parse_type(inner)));
    }

    if let Some(inner) = compact
        .strip_prefix("Vec<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return TypeTag::Vec(Box::new(parse_type(inner)));
    }

    match compact.as_str() {
        "" | "()" => TypeTag::Unit,
        "i32" => TypeTag::I32,
        "i64" => TypeTag::I64,
        "f64" => TypeTag::F64,
        "usize" => TypeTag::Usize,
        "bool" => TypeTag::Bool,
        "char" => TypeTag::Char,
        "String" => TypeTag::String,
        TREE_TYPE => TypeTag::Tree,
        LIST_TYPE => TypeTag::List,
        _ => TypeTag::Other(ty_str.trim().to_string()),
    }
}
