use crate::models::{FunctionSignature, TypeTag};

/// One example after rendering: arguments joined with `,` and the expected
/// value. An empty `expected` means the narrative had no output for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCase {
    pub args: String,
    pub expected: String,
}

/// Builds the body of the generated `main`: a local `test` taking a
/// function pointer with the solution's shape, one assertion per case, and
/// a call binding it to the solution.
///
/// Going through a function pointer lets an alternate implementation be
/// checked by adding another `test(other_name);` line.
pub fn build_harness(
    sig: &FunctionSignature,
    cases: &[RenderedCase],
    unordered: bool,
) -> Vec<String> {
    // A `()` return has nothing to compare; the result is printed instead.
    let returns_unit = sig.return_type == TypeTag::Unit;
    let mut lines = Vec::with_capacity(cases.len() + 3);
    lines.push(format!("fn test(func: {}) {{", sig.callable_type()));

    for case in cases {
        let call = format!("func({})", case.args);
        let stmt = if returns_unit || case.expected.is_empty() {
            format!("println!(\"{{:?}}\", {});", call)
        } else if unordered {
            format!("assert_eq!(unorder({}), unorder({}));", call, case.expected)
        } else {
            format!("assert_eq!({}, {});", call, case.expected)
        };
        lines.push(format!("    {}", stmt));
    }

    lines.push("}".to_string());
    lines.push(format!("test({});", sig.name));
    lines
}
