//! HTTP serving layer for VaultGraph
//!
//! Thin collaborator around the core: the router and handlers live in
//! [`api`], process concerns (CLI, logging) live in the binary.

pub mod api;
