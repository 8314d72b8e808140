use std::collections::BTreeMap;

use serde::Deserialize;

use super::difficulty::Difficulty;

/// One problem as delivered by a `ProblemSource`.
#[derive(Debug, Clone)]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Language tag (`rust`, `python3`, ...) to raw solution template.
    pub templates: BTreeMap<String, String>,
    /// The narrative allows answers in any order.
    pub any_order: bool,
}

impl ProblemRecord {
    pub fn new(
        id: String,
        title: String,
        content: String,
        templates: BTreeMap<String, String>,
    ) -> Self {
        let any_order = mentions_any_order(&content);
        Self {
            id,
            title,
            content,
            templates,
            any_order,
        }
    }

    /// File-name friendly form of the frontend id, e.g. `面试题 17.04` -> `m17_04`.
    pub fn file_stem(&self) -> String {
        normalize_id(&self.id)
    }
}

pub fn normalize_id(id: &str) -> String {
    id.trim()
        .replace("面试题 ", "m")
        .replace("剑指 ", "")
        .replace(['.', ' '], "_")
        .to_lowercase()
}

fn mentions_any_order(content: &str) -> bool {
    content.contains("any order") || content.contains("任意顺序")
}

/// One raw (input, output) example pair as written in the narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCase {
    pub input: String,
    pub output: String,
}

/// Entry of the problem set listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    #[serde(rename = "frontendQuestionId")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub title_cn: Option<String>,
    pub title_slug: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub paid_only: bool,
}

impl ProblemSummary {
    pub fn display_title(&self) -> &str {
        match self.title_cn.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => &self.title,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestQuestion {
    pub title: String,
    pub title_slug: String,
    #[serde(default)]
    pub question_frontend_id: Option<String>,
}
