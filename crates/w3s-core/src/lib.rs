//! W3S Core Library
//!
//! Data model, technology catalog and report rendering for the
//! Web3 sentiment analyzer.

pub mod catalog;
pub mod error;
pub mod model;
pub mod report;

pub use error::{W3sError, W3sResult};
pub use model::{SentimentClass, ToolSentimentResult};
