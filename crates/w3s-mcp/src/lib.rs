//! MCP façade for the Web3 sentiment analyzer.
//!
//! Exposes the `analyze-web3-tech` tool to agentic callers over a
//! line-framed JSON-RPC stdio transport.

pub mod server;

pub use server::run_stdio;
