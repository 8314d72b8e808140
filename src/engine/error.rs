use thiserror::Error;

use crate::models::SignatureError;

/// Why a single record could not be turned into a file. None of these stop a
/// batch; the caller logs and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("problem {id}: no `{lang}` template")]
    MissingTemplate { id: String, lang: String },

    #[error("problem {id}: no function declaration found in template")]
    NoDeclarationFound { id: String },

    #[error("problem {id}: multiple function declarations found: {}", .lines.join(" | "))]
    MultipleDeclarationsFound { id: String, lines: Vec<String> },

    #[error("problem {id}: malformed declaration '{line}'")]
    MalformedDeclaration { id: String, line: String },

    #[error("problem {id}: example '{input}' has {actual} argument(s), signature takes {expected}")]
    ArityMismatch {
        id: String,
        input: String,
        expected: usize,
        actual: usize,
    },
}

impl GenerationError {
    pub(super) fn from_signature(id: &str, err: SignatureError) -> Self {
        let id = id.to_string();
        match err {
            SignatureError::NoDeclaration => GenerationError::NoDeclarationFound { id },
            SignatureError::MultipleDeclarations(lines) => {
                GenerationError::MultipleDeclarationsFound { id, lines }
            }
            SignatureError::Malformed(line) => GenerationError::MalformedDeclaration { id, line },
        }
    }
}
