mod graphql;

pub use graphql::LeetCodeClient;

use thiserror::Error;

use crate::models::ProblemRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("failed to read response: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graphql error: {0}")]
    Graphql(String),

    #[error("problem '{0}' not found")]
    NotFound(String),
}

impl From<ureq::Error> for SourceError {
    fn from(err: ureq::Error) -> Self {
        SourceError::Http(Box::new(err))
    }
}

/// Where problem records come from.
///
/// `Ok(None)` means the problem exists but carries no solution templates;
/// callers skip it with a warning.
pub trait ProblemSource {
    fn fetch(&self, slug: &str) -> Result<Option<ProblemRecord>, SourceError>;
}

impl ProblemSource for LeetCodeClient {
    fn fetch(&self, slug: &str) -> Result<Option<ProblemRecord>, SourceError> {
        self.question_detail(slug)
    }
}

/// Fetches problems through a contest's question endpoint.
pub struct ContestSource<'a> {
    client: &'a LeetCodeClient,
    contest: String,
}

impl<'a> ContestSource<'a> {
    pub fn new(client: &'a LeetCodeClient, contest: impl Into<String>) -> Self {
        Self {
            client,
            contest: contest.into(),
        }
    }
}

impl ProblemSource for ContestSource<'_> {
    fn fetch(&self, slug: &str) -> Result<Option<ProblemRecord>, SourceError> {
        self.client.contest_question_detail(&self.contest, slug)
    }
}
