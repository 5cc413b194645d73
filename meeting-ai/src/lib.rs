//! Meeting AI analysis layer for agent-generated meeting insights.
//!
//! This crate turns the free-text output of an upstream meeting-intelligence
//! agent into structured insights:
//! - Keyword-based line classification (suggestions, insights, decisions, ...)
//! - Meeting efficiency scoring from goal completion and decisions made
//! - Agenda drift detection against the current goal
//! - Aggregation of the above into one of three response shapes
//!
//! Everything here is pure and synchronous. Talking to the agent itself is
//! abstracted behind [`traits::agent::Provider`] so applications can plug in
//! any HTTP client without this crate knowing about it.

pub mod aggregator;
pub mod classifier;
pub mod drift;
pub mod error;
pub mod scoring;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use aggregator::{aggregate, AnalysisContext, AnalysisMode};
pub use error::Error;
pub use types::insights::Insights;
