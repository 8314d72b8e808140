//! Recovers `Input: ... / Output: ...` example pairs from a problem narrative.
//!
//! Works line by line on the raw (usually HTML) content. Markers are
//! matched on the tag-stripped line so `<strong>Input:</strong>` and plain
//! markdown `> Input: ...` are both recognised.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExampleCase;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<]+?>").unwrap());

const INPUT_MARKERS: &[&str] = &["Input:", "输入:"];
const OUTPUT_MARKERS: &[&str] = &["Output:", "输出:"];
const EXPLANATION_MARKERS: &[&str] = &["Explanation", "解释"];

pub fn extract_examples(content: &str) -> Vec<ExampleCase> {
    let content = normalize_punctuation(content);
    let lines: Vec<&str> = content.lines().collect();
    let n = lines.len();

    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    let mut i = 0;

    while i < n {
        if is_input_line(lines[i]) {
            let mut block = lines[i].to_string();
            i += 1;
            while i < n && !ends_input(lines[i]) {
                let line = strip_quote_marker(lines[i]);
                if line.contains(" = ") && needs_separator(&block) {
                    block.push_str(", ");
                }
                block.push_str(line);
                i += 1;
            }
            inputs.push(clean(&block));
        } else if contains_any(&strip_tags(lines[i]), OUTPUT_MARKERS) {
            let mut block = lines[i].to_string();
            i += 1;
            while i < n && !ends_output(lines[i]) {
                block.push_str(strip_quote_marker(lines[i]));
                i += 1;
            }
            outputs.push(clean(&block));
            // An Input line right after the output opens the next example.
            if i < n && !is_input_line(lines[i]) {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    log::debug!(
        "found {} input and {} output blocks",
        inputs.len(),
        outputs.len()
    );

    outputs.resize(inputs.len(), String::new());
    inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| ExampleCase { input, output })
        .collect()
}

/// A continuation assignment starts a new argument unless nothing has been
/// collected yet or the previous line already ended with a comma.
fn needs_separator(block: &str) -> bool {
    let collected = clean(block);
    !collected.is_empty() && !collected.ends_with(',')
}

fn is_input_line(line: &str) -> bool {
    contains_any(&strip_tags(line), INPUT_MARKERS)
}

fn ends_input(line: &str) -> bool {
    let plain = strip_tags(line);
    let plain = plain.trim();
    plain.is_empty()
        || plain == ">"
        || contains_any(plain, OUTPUT_MARKERS)
        || contains_any(plain, INPUT_MARKERS)
}

fn ends_output(line: &str) -> bool {
    let plain = strip_tags(line);
    let plain = plain.trim();
    plain.is_empty()
        || plain == ">"
        || contains_any(plain, EXPLANATION_MARKERS)
        || contains_any(plain, INPUT_MARKERS)
}

fn contains_any(line: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| line.contains(m))
}

fn strip_tags(line: &str) -> Cow<'_, str> {
    HTML_TAG.replace_all(line, "")
}

fn strip_quote_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix('>').unwrap_or(line)
}

fn normalize_punctuation(text: &str) -> String {
    text.replace('：', ":").replace('，', ",")
}

/// Turns one accumulated block into the bare value text.
fn clean(block: &str) -> String {
    let text = strip_tags(block);
    let text = html_escape::decode_html_entities(&text);
    let mut text = normalize_punctuation(&text);
    for marker in INPUT_MARKERS.iter().chain(OUTPUT_MARKERS) {
        text = text.replace(marker, "");
    }

    let text = text.trim();
    let text = text.strip_prefix('>').unwrap_or(text).trim();
    let text = text.trim_matches('`').trim();
    squeeze_whitespace(text)
}

/// Drops whitespace outside of double-quoted string literals.
fn squeeze_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }
    }

    out
}
