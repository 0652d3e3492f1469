//! VaultGraph Core Library
//!
//! This library provides the core functionality for extracting a link
//! graph from a vault of markdown notes and persisting it as JSON.

pub mod config;
pub mod discovery;
pub mod graph;
pub mod links;
pub mod snapshot;

// Re-export commonly used types
pub use config::VaultConfig;
pub use graph::{build_graph, Edge, Graph, Node};
pub use snapshot::{refresh, RefreshOutcome};
