//! Turns a `ProblemRecord` into a ready-to-compile solution file: the
//! cleaned template plus a `main` that asserts every worked example.

mod error;
mod extract;
mod harness;
mod literal;
mod template;

pub use error::GenerationError;
pub use extract::extract_examples;

use crate::models::{parse_declaration, ExampleCase, FunctionSignature, ProblemRecord};
use harness::{build_harness, RenderedCase};
use literal::{render_literal, split_top_level};
use template::assemble_template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub stem: String,
    pub content: String,
}

/// Holds the few knobs that shape generated code. Owns no state between
/// records, so one instance can serve a whole batch.
#[derive(Debug, Clone)]
pub struct Generator {
    helper_crate: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new("leetcode")
    }
}

impl Generator {
    pub fn new(helper_crate: impl Into<String>) -> Self {
        Self {
            helper_crate: helper_crate.into(),
        }
    }

    pub fn generate(
        &self,
        record: &ProblemRecord,
        lang: &str,
    ) -> Result<GeneratedFile, GenerationError> {
        let template = record
            .templates
            .get(lang)
            .ok_or_else(|| GenerationError::MissingTemplate {
                id: record.id.clone(),
                lang: lang.to_string(),
            })?;

        let sig = parse_declaration(template)
            .map_err(|e| GenerationError::from_signature(&record.id, e))?;

        let examples = extract_examples(&record.content);
        log::debug!(
            "problem {}: {} example(s) for {}",
            record.id,
            examples.len(),
            sig.name
        );

        let cases = examples
            .iter()
            .map(|case| render_case(&record.id, &sig, case))
            .collect::<Result<Vec<_>, _>>()?;

        let harness = build_harness(&sig, &cases, record.any_order);
        let assembled = assemble_template(template, &harness, record.any_order, &self.helper_crate);

        let mut content = format!("//! {}\n\n{}\n\nfn main() {{\n", record.title, assembled.body);
        for line in &assembled.harness_imports {
            content.push_str(&format!("    {}\n", line));
        }
        if !assembled.harness_imports.is_empty() {
            content.push('\n');
        }
        for line in &harness {
            content.push_str(&format!("    {}\n", line));
        }
        content.push_str("}\n");

        Ok(GeneratedFile {
            stem: record.file_stem(),
            content,
        })
    }
}

fn render_case(
    id: &str,
    sig: &FunctionSignature,
    case: &ExampleCase,
) -> Result<RenderedCase, GenerationError> {
    let raw_args = split_top_level(&case.input);
    if raw_args.len() != sig.arity() {
        return Err(GenerationError::ArityMismatch {
            id: id.to_string(),
            input: case.input.clone(),
            expected: sig.arity(),
            actual: raw_args.len(),
        });
    }

    let args: Vec<String> = raw_args
        .iter()
        .zip(&sig.params)
        .map(|(raw, param)| render_literal(raw, &param.ty, false))
        .collect();

    let expected = if case.output.trim().is_empty() {
        String::new()
    } else {
        render_literal(&case.output, &sig.return_type, true)
    };

    Ok(RenderedCase {
        args: args.join(","),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const TWO_SUM_TEMPLATE: &str = indoc! {"
        impl Solution {
            pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {

            }
        }
    "};

    const TWO_SUM_CONTENT: &str = indoc! {"
        <p>Given an array of integers <code>nums</code>...</p>
        <pre>
        <strong>Input:</strong> nums = [2,7,11,15], target = 9
        <strong>Output:</strong> [0,1]
        <strong>Explanation:</strong> Because nums[0] + nums[1] == 9, we return [0, 1].
        </pre>

        <pre>
        <strong>Input:</strong> nums = [3,3], target = 6
        <strong>Output:</strong> [0,1]
        </pre>
    "};

    fn record(id: &str, content: &str, template: &str) -> ProblemRecord {
        let mut templates = BTreeMap::new();
        templates.insert("rust".to_string(), template.to_string());
        ProblemRecord::new(id.to_string(), "Two Sum".to_string(), content.to_string(), templates)
    }

    #[test]
    fn test_two_sum_file() {
        let file = Generator::default()
            .generate(&record("1", TWO_SUM_CONTENT, TWO_SUM_TEMPLATE), "rust")
            .unwrap();
        assert_eq!(file.stem, "1");
        assert_eq!(
            file.content,
            indoc! {"
                //! Two Sum

                pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {

                }

                fn main() {
                    fn test(func: fn(nums: Vec<i32>, target: i32) -> Vec<i32>) {
                        assert_eq!(func(vec![2,7,11,15],9), vec![0,1]);
                        assert_eq!(func(vec![3,3],6), vec![0,1]);
                    }
                    test(two_sum);
                }
            "}
        );
    }

    #[test]
    fn test_any_order_imports_unorder() {
        let content = format!("{}\nReturn the answer in any order.", TWO_SUM_CONTENT);
        let file = Generator::new("lc")
            .generate(&record("1", &content, TWO_SUM_TEMPLATE), "rust")
            .unwrap();
        assert!(file.content.contains("    use lc::unorder;\n"));
        assert!(file
            .content
            .contains("assert_eq!(unorder(func(vec![3,3],6)), unorder(vec![0,1]));"));
    }

    #[test]
    fn test_string_vec_and_tree() {
        let template = indoc! {"
            use std::rc::Rc;
            use std::cell::RefCell;
            impl Solution {
                pub fn label(root: Option<Rc<RefCell<TreeNode>>>, names: Vec<String>) -> Vec<String> {

                }
            }
        "};
        let content = indoc! {r#"
            <strong>Input:</strong> root = [1,null,2], names = ["a","b"]
            <strong>Output:</strong> ["a"]
        "#};
        let file = Generator::default()
            .generate(&record("7", content, template), "rust")
            .unwrap();
        assert!(file.content.contains("use leetcode::treenode::TreeNode;\n"));
        assert!(file.content.contains("    use leetcode::svec;\n    use leetcode::tree;\n"));
        assert!(file
            .content
            .contains(r#"assert_eq!(func(tree![1,null,2],svec!["a","b"]), vec!["a"]);"#));
    }

    #[test]
    fn test_missing_template() {
        let err = Generator::default()
            .generate(&record("1", TWO_SUM_CONTENT, TWO_SUM_TEMPLATE), "python3")
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::MissingTemplate {
                id: "1".to_string(),
                lang: "python3".to_string()
            }
        );
    }

    #[test]
    fn test_no_declaration() {
        let err = Generator::default()
            .generate(&record("9", TWO_SUM_CONTENT, "impl Solution {\n}\n"), "rust")
            .unwrap_err();
        assert_eq!(err, GenerationError::NoDeclarationFound { id: "9".to_string() });
    }

    #[test]
    fn test_design_problem_is_rejected() {
        let template = indoc! {"
            struct MinStack {}
            impl MinStack {
                pub fn new() -> Self {}
                pub fn push(&mut self, val: i32) {}
            }
        "};
        let err = Generator::default()
            .generate(&record("155", "", template), "rust")
            .unwrap_err();
        assert!(matches!(err, GenerationError::MultipleDeclarationsFound { .. }));
    }

    #[test]
    fn test_arity_mismatch() {
        let content = "<strong>Input:</strong> nums = [1,2]\n<strong>Output:</strong> [0,1]\n";
        let err = Generator::default()
            .generate(&record("1", content, TWO_SUM_TEMPLATE), "rust")
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::ArityMismatch {
                id: "1".to_string(),
                input: "nums=[1,2]".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_missing_output_still_generates() {
        let content = "<strong>Input:</strong> nums = [1,2], target = 3\n";
        let file = Generator::default()
            .generate(&record("1", content, TWO_SUM_TEMPLATE), "rust")
            .unwrap();
        assert!(file.content.contains("println!(\"{:?}\", func(vec![1,2],3));"));
    }
}
