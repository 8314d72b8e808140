pub mod config;
pub mod difficulty;
pub mod problem;
pub mod signature;

pub use difficulty::Difficulty;
pub use problem::{ContestQuestion, ExampleCase, ProblemRecord, ProblemSummary};
pub use signature::{FunctionSignature, SignatureError, TypeTag, parse_declaration};
