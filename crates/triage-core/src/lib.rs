//! # triage-core
//!
//! Core types shared across all triage crates.
//!
//! - [`Submission`]: validated email content plus its origin metadata
//! - [`ClassificationResult`]: the outcome returned to the caller
//! - [`HistoryEntry`]: the persisted record of a completed classification
//! - Wire DTOs exchanged with the classification service
//! - Input limits and the [`ValidationError`] raised when they are violated

pub mod enums;
pub mod errors;
pub mod history;
pub mod limits;
pub mod responses;
pub mod result;
pub mod submission;

pub use enums::{Category, Source, Theme};
pub use errors::ValidationError;
pub use history::HistoryEntry;
pub use result::ClassificationResult;
pub use submission::Submission;
