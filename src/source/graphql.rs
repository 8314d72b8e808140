use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::SourceError;
use crate::models::{ContestQuestion, ProblemRecord, ProblemSummary};

const QUESTION_DETAIL_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionFrontendId
    title
    translatedTitle
    content
    translatedContent
    codeDefinition
  }
}
"#;

const PROBLEM_LIST_QUERY: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList(categorySlug: $categorySlug, limit: $limit, skip: $skip, filters: $filters) {
    hasMore
    total
    questions {
      difficulty
      frontendQuestionId
      paidOnly
      title
      titleCn
      titleSlug
    }
  }
}
"#;

const CONTEST_LIST_QUERY: &str = r#"
query panelQuestionList($currentQuestionSlug: String!, $categorySlug: String, $envId: String, $envType: String, $filters: QuestionListFilterInput) {
  panelQuestionList(currentQuestionSlug: $currentQuestionSlug, categorySlug: $categorySlug, envId: $envId, envType: $envType, filters: $filters) {
    questions {
      questionFrontendId
      title
      titleSlug
    }
  }
}
"#;

const CONTEST_QUESTION_QUERY: &str = r#"
query contestQuestion($contestSlug: String, $questionSlug: String) {
  contestQuestion(contestSlug: $contestSlug, questionSlug: $questionSlug) {
    question {
      questionFrontendId
      title
      translatedTitle
      content
      translatedContent
      codeSnippets {
        code
        langSlug
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<QuestionDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionDetail {
    question_frontend_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    translated_title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    translated_content: Option<String>,
    /// JSON-encoded list of `CodeDefinition`.
    #[serde(default)]
    code_definition: Option<String>,
    #[serde(default)]
    code_snippets: Option<Vec<CodeSnippet>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeDefinition {
    value: String,
    default_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeSnippet {
    lang_slug: String,
    code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemListData {
    problemset_question_list: ProblemList,
}

#[derive(Debug, Deserialize)]
struct ProblemList {
    questions: Vec<ProblemSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContestListData {
    panel_question_list: ContestList,
}

#[derive(Debug, Deserialize)]
struct ContestList {
    questions: Vec<ContestQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContestQuestionData {
    contest_question: ContestQuestionWrapper,
}

#[derive(Debug, Deserialize)]
struct ContestQuestionWrapper {
    question: Option<QuestionDetail>,
}

/// Blocking client for the LeetCode GraphQL API. The session cookie is
/// handed in by the caller; nothing is read from ambient state.
pub struct LeetCodeClient {
    agent: ureq::Agent,
    endpoint: String,
    cookie: Option<String>,
}

impl LeetCodeClient {
    pub fn new(endpoint: impl Into<String>, cookie: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            cookie,
        }
    }

    fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> Result<T, SourceError> {
        let payload = json!({
            "operationName": operation,
            "query": query,
            "variables": variables,
        });

        let mut request = self.agent.post(&self.endpoint);
        if let Some(cookie) = &self.cookie {
            request = request.set("cookie", cookie);
        }

        log::debug!("graphql {} {}", operation, self.endpoint);
        let body = request.send_json(payload)?.into_string()?;
        decode_response(&body)
    }

    /// Problem detail by slug. `None` when the problem has no templates.
    pub fn question_detail(&self, slug: &str) -> Result<Option<ProblemRecord>, SourceError> {
        let data: QuestionData = self.query(
            "getQuestionDetail",
            QUESTION_DETAIL_QUERY,
            json!({ "titleSlug": slug }),
        )?;
        let detail = data
            .question
            .ok_or_else(|| SourceError::NotFound(slug.to_string()))?;
        detail.into_record()
    }

    pub fn search(
        &self,
        keyword: &str,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<ProblemSummary>, SourceError> {
        let mut filters = json!({});
        if !keyword.is_empty() {
            filters["searchKeywords"] = json!(keyword);
        }
        let data: ProblemListData = self.query(
            "problemsetQuestionList",
            PROBLEM_LIST_QUERY,
            json!({
                "categorySlug": "algorithms",
                "skip": skip,
                "limit": limit,
                "filters": filters,
            }),
        )?;
        Ok(data.problemset_question_list.questions)
    }

    /// Slug of the problem whose frontend id is exactly `id`.
    pub fn resolve_slug(&self, id: &str) -> Result<String, SourceError> {
        self.search(id, 0, 50)?
            .into_iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .map(|p| p.title_slug)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    pub fn contest_questions(&self, contest: &str) -> Result<Vec<ContestQuestion>, SourceError> {
        let data: ContestListData = self.query(
            "panelQuestionList",
            CONTEST_LIST_QUERY,
            json!({
                "currentQuestionSlug": "",
                "envId": contest,
                "envType": "contest",
            }),
        )?;
        Ok(data.panel_question_list.questions)
    }

    pub fn contest_question_detail(
        &self,
        contest: &str,
        slug: &str,
    ) -> Result<Option<ProblemRecord>, SourceError> {
        let data: ContestQuestionData = self.query(
            "contestQuestion",
            CONTEST_QUESTION_QUERY,
            json!({ "contestSlug": contest, "questionSlug": slug }),
        )?;
        let detail = data
            .contest_question
            .question
            .ok_or_else(|| SourceError::NotFound(format!("{}/{}", contest, slug)))?;
        detail.into_record()
    }
}

fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    let response: GraphqlResponse<T> = serde_json::from_str(body)?;
    match response.data {
        Some(data) => Ok(data),
        None => {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            Err(SourceError::Graphql(if messages.is_empty() {
                "response has no data".to_string()
            } else {
                messages.join("; ")
            }))
        }
    }
}

/// Localized text when present, the original otherwise.
fn prefer_localized(localized: Option<String>, original: Option<String>) -> String {
    localized
        .filter(|s| !s.trim().is_empty())
        .or(original)
        .unwrap_or_default()
}

impl QuestionDetail {
    fn into_record(self) -> Result<Option<ProblemRecord>, SourceError> {
        let templates: BTreeMap<String, String> = match (self.code_snippets, self.code_definition) {
            (Some(snippets), _) => snippets.into_iter().map(|s| (s.lang_slug, s.code)).collect(),
            (None, Some(raw)) if !raw.trim().is_empty() => {
                let defs: Vec<CodeDefinition> = serde_json::from_str(&raw)?;
                defs.into_iter().map(|d| (d.value, d.default_code)).collect()
            }
            _ => BTreeMap::new(),
        };
        if templates.is_empty() {
            return Ok(None);
        }

        Ok(Some(ProblemRecord::new(
            self.question_frontend_id,
            prefer_localized(self.translated_title, self.title),
            prefer_localized(self.translated_content, self.content),
            templates,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_detail_record() {
        let body = r#"{"data": {"question": {
            "questionFrontendId": "1",
            "title": "Two Sum",
            "translatedTitle": "两数之和",
            "content": "<p>english</p>",
            "translatedContent": "<p>中文，可以按任意顺序返回答案</p>",
            "codeDefinition": "[{\"value\": \"rust\", \"text\": \"Rust\", \"defaultCode\": \"impl Solution {\\n}\"}, {\"value\": \"python3\", \"text\": \"Python3\", \"defaultCode\": \"class Solution:\"}]"
        }}}"#;
        let data: QuestionData = decode_response(body).unwrap();
        let record = data.question.unwrap().into_record().unwrap().unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.title, "两数之和");
        assert!(record.any_order);
        assert_eq!(record.templates["rust"], "impl Solution {\n}");
        assert_eq!(record.templates.len(), 2);
    }

    #[test]
    fn test_untranslated_falls_back() {
        let body = r#"{"data": {"question": {
            "questionFrontendId": "2",
            "title": "Add Two Numbers",
            "translatedTitle": null,
            "content": "<p>english</p>",
            "translatedContent": "",
            "codeDefinition": "[{\"value\": \"rust\", \"defaultCode\": \"x\"}]"
        }}}"#;
        let data: QuestionData = decode_response(body).unwrap();
        let record = data.question.unwrap().into_record().unwrap().unwrap();
        assert_eq!(record.title, "Add Two Numbers");
        assert_eq!(record.content, "<p>english</p>");
    }

    #[test]
    fn test_no_templates_is_none() {
        let body = r#"{"data": {"question": {"questionFrontendId": "3", "codeDefinition": null}}}"#;
        let data: QuestionData = decode_response(body).unwrap();
        assert!(data.question.unwrap().into_record().unwrap().is_none());
    }

    #[test]
    fn test_contest_snippets() {
        let body = r#"{"data": {"contestQuestion": {"question": {
            "questionFrontendId": "3000",
            "title": "Q",
            "content": "c",
            "codeSnippets": [{"code": "impl Solution {}", "lang": "Rust", "langSlug": "rust"}]
        }}}}"#;
        let data: ContestQuestionData = decode_response(body).unwrap();
        let record = data.contest_question.question.unwrap().into_record().unwrap().unwrap();
        assert_eq!(record.templates["rust"], "impl Solution {}");
    }

    #[test]
    fn test_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "bad slug"}]}"#;
        match decode_response::<QuestionData>(body) {
            Err(SourceError::Graphql(msg)) => assert_eq!(msg, "bad slug"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_problem_list() {
        let body = r#"{"data": {"problemsetQuestionList": {"hasMore": true, "total": 1, "questions": [
            {"difficulty": "EASY", "frontendQuestionId": "1", "paidOnly": false,
             "title": "Two Sum", "titleCn": "两数之和", "titleSlug": "two-sum"}
        ]}}}"#;
        let data: ProblemListData = decode_response(body).unwrap();
        assert_eq!(data.problemset_question_list.questions[0].title_slug, "two-sum");
    }
}
