//! MASA API clients and the sentiment orchestration pipeline.
//!
//! The MASA search service is asynchronous: a search is submitted, then
//! its results are polled until the job completes. This crate wraps that
//! lifecycle, the synchronous analysis call, and the orchestrator that
//! composes both into one sentiment result per technology.

pub mod analysis;
pub mod client;
pub mod config;
pub mod search;
pub mod sentiment;

pub use client::MasaClient;
pub use config::MasaConfig;
pub use search::Tweet;
pub use sentiment::{analyze_tool_list, analyze_web3_sentiment, parse_tool_list};
