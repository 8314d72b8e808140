use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::literal::STRING_VEC_MACRO;

static SOLUTION_IMPL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^impl\s+Solution\s*\{$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledTemplate {
    /// Solution code with comments and the `impl Solution` wrapper removed.
    pub body: String,
    /// `use` lines for the harness, which lives inside `main`.
    pub harness_imports: Vec<String>,
}

/// Cleans a raw solution template and works out which helper imports the
/// body and the harness need.
pub fn assemble_template(
    template: &str,
    harness: &[String],
    unordered: bool,
    helper_crate: &str,
) -> AssembledTemplate {
    let lines: Vec<&str> = template
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect();

    let lines = unwrap_solution_impl(lines);
    let cleaned = lines.join("\n");
    let cleaned = cleaned.trim_matches('\n');

    let mut body_imports = Vec::new();
    let mut harness_imports = BTreeSet::new();

    if cleaned.contains("TreeNode") {
        body_imports.push(format!("use {}::treenode::TreeNode;", helper_crate));
        harness_imports.insert(format!("use {}::tree;", helper_crate));
    }
    if cleaned.contains("ListNode") {
        body_imports.push(format!("use {}::linknode::ListNode;", helper_crate));
        harness_imports.insert(format!("use {}::link;", helper_crate));
    }
    if harness.iter().any(|line| line.contains(STRING_VEC_MACRO)) {
        harness_imports.insert(format!("use {}::svec;", helper_crate));
    }
    if unordered {
        harness_imports.insert(format!("use {}::unorder;", helper_crate));
    }

    let body = if body_imports.is_empty() {
        cleaned.to_string()
    } else {
        format!("{}\n\n{}", body_imports.join("\n"), cleaned)
    };

    AssembledTemplate {
        body,
        harness_imports: harness_imports.into_iter().collect(),
    }
}

/// Drops the `impl Solution {` line and its closing brace, and takes one
/// indentation level off what was inside.
fn unwrap_solution_impl(lines: Vec<&str>) -> Vec<String> {
    let Some(open) = lines.iter().position(|l| SOLUTION_IMPL.is_match(l.trim())) else {
        return lines.iter().map(|l| l.to_string()).collect();
    };
    let close = lines
        .iter()
        .rposition(|l| l.trim() == "}")
        .filter(|&close| close > open);

    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.into_iter().enumerate() {
        if i == open || Some(i) == close {
            continue;
        }
        let inside = i > open && close.map_or(true, |c| i < c);
        let line = if inside {
            line.strip_prefix("    ").unwrap_or(line)
        } else {
            line
        };
        out.push(line.to_string());
    }
    out
}
