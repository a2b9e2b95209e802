//! Casegen Common - shared core for the test case generator front-ends.
//!
//! Prompt construction, the completion client, and response shaping live
//! here. The CLI (`casegenctl`) and the web daemon (`casegend`) are thin
//! shells on top: one description in, one completion call, one report out.

pub mod chat;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;

pub use chat::{ChatMessage, CompletionClient};
pub use config::Config;
pub use error::CasegenError;
pub use report::{parse_report, TestCase, TestCaseReport};
