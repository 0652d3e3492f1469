//! Graph snapshot persistence and the refresh policy
//!
//! The graph is persisted as a pretty-printed JSON document with the
//! fixed shape `{"nodes": [{"id", "label"}], "edges": [{"from", "to"}]}`.
//! On refresh, a freshly built graph is compared against the persisted
//! snapshot; an unchanged vault keeps the file untouched.

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::VaultConfig;
use crate::graph::{self, Graph};

/// Serialize a graph to pretty-printed JSON. Non-ASCII ids and labels
/// are preserved unescaped.
pub fn to_json(graph: &Graph) -> anyhow::Result<String> {
    serde_json::to_string_pretty(graph).context("failed to serialize graph")
}

/// Deserialize a graph from its JSON form.
pub fn from_json(json: &str) -> anyhow::Result<Graph> {
    serde_json::from_str(json).context("failed to deserialize graph")
}

/// Load the persisted snapshot, if there is a usable one.
///
/// A missing, unreadable, or corrupt snapshot all mean the same thing
/// at this boundary: no prior graph, so the caller rebuilds and
/// overwrites. The underlying error is only worth a debug line.
pub fn load(path: &Path) -> Option<Graph> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "no usable snapshot");
            return None;
        }
    };
    match from_json(&json) {
        Ok(graph) => Some(graph),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "corrupt snapshot, rebuilding");
            None
        }
    }
}

/// Write the snapshot to disk.
pub fn store(path: &Path, graph: &Graph) -> anyhow::Result<()> {
    let json = to_json(graph)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write snapshot {}", path.display()))
}

/// Result of a refresh: the graph to serve, and whether the persisted
/// snapshot was rewritten to produce it.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub graph: Graph,
    pub updated: bool,
}

/// Rebuild the vault graph and reconcile it with the persisted
/// snapshot.
///
/// If a prior snapshot exists and has the same shape as the fresh
/// build (same node count, edge count, and node-id set), the persisted
/// copy is returned unchanged and the file is not rewritten. Otherwise
/// the fresh graph is stored and returned with `updated` set.
///
/// # Errors
/// Fails if the vault cannot be read or the snapshot cannot be
/// written. A corrupt prior snapshot is not an error; it is treated as
/// absent.
pub fn refresh(config: &VaultConfig) -> anyhow::Result<RefreshOutcome> {
    let fresh = graph::build_graph(&config.vault)?;

    if let Some(prior) = load(&config.snapshot) {
        if fresh.same_shape(&prior) {
            tracing::debug!(snapshot = %config.snapshot.display(), "vault unchanged, serving persisted graph");
            return Ok(RefreshOutcome {
                graph: prior,
                updated: false,
            });
        }
    }

    store(&config.snapshot, &fresh)?;
    tracing::info!(
        snapshot = %config.snapshot.display(),
        nodes = fresh.nodes.len(),
        edges = fresh.edges.len(),
        "snapshot updated"
    );
    Ok(RefreshOutcome {
        graph: fresh,
        updated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};
    use std::fs;
    use tempfile::TempDir;

    fn sample_graph() -> Graph {
        Graph {
            nodes: vec![
                Node {
                    id: "A".to_string(),
                    label: "A".to_string(),
                },
                Node {
                    id: "Нотатка".to_string(),
                    label: "Нотатка".to_string(),
                },
            ],
            edges: vec![Edge {
                from: "A".to_string(),
                to: "Нотатка".to_string(),
            }],
        }
    }

    #[test]
    fn test_round_trip() {
        let graph = sample_graph();

        let json = to_json(&graph).unwrap();
        let restored = from_json(&json).unwrap();

        assert_eq!(graph, restored);
    }

    #[test]
    fn test_json_shape_and_encoding() {
        let json = to_json(&sample_graph()).unwrap();

        // Fixed key names, pretty printed, non-ASCII left unescaped
        assert!(json.contains("\"nodes\""));
        assert!(json.contains("\"edges\""));
        assert!(json.contains("\"id\""));
        assert!(json.contains("\"label\""));
        assert!(json.contains("\"from\""));
        assert!(json.contains("\"to\""));
        assert!(json.contains('\n'));
        assert!(json.contains("Нотатка"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();

        assert!(load(&temp_dir.path().join("graph.json")).is_none());
    }

    #[test]
    fn test_load_corrupt_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load(&path).is_none());
    }

    #[test]
    fn test_store_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        let graph = sample_graph();

        store(&path, &graph).unwrap();

        assert_eq!(load(&path), Some(graph));
    }

    #[test]
    fn test_refresh_writes_first_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path().join("vault");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("A.md"), "[[B]]").unwrap();
        let config =
            VaultConfig::new(&vault).with_snapshot(temp_dir.path().join("graph.json"));

        let outcome = refresh(&config).unwrap();

        assert!(outcome.updated);
        assert!(config.snapshot.exists());
        assert_eq!(load(&config.snapshot), Some(outcome.graph));
    }

    #[test]
    fn test_refresh_idempotent_on_unchanged_vault() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path().join("vault");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("A.md"), "[[B]]").unwrap();
        let config =
            VaultConfig::new(&vault).with_snapshot(temp_dir.path().join("graph.json"));

        let first = refresh(&config).unwrap();
        let persisted = fs::read_to_string(&config.snapshot).unwrap();

        let second = refresh(&config).unwrap();

        assert!(first.updated);
        assert!(!second.updated);
        assert_eq!(second.graph, first.graph);
        // The file was not rewritten
        assert_eq!(fs::read_to_string(&config.snapshot).unwrap(), persisted);
    }

    #[test]
    fn test_refresh_rewrites_on_vault_change() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path().join("vault");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("A.md"), "[[B]]").unwrap();
        let config =
            VaultConfig::new(&vault).with_snapshot(temp_dir.path().join("graph.json"));

        refresh(&config).unwrap();
        fs::write(vault.join("C.md"), "fresh note").unwrap();

        let outcome = refresh(&config).unwrap();

        assert!(outcome.updated);
        assert!(outcome.graph.nodes.iter().any(|n| n.id == "C"));
        assert_eq!(load(&config.snapshot), Some(outcome.graph));
    }

    #[test]
    fn test_refresh_recovers_from_corrupt_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path().join("vault");
        fs::create_dir(&vault).unwrap();
        fs::write(vault.join("A.md"), "").unwrap();
        let config =
            VaultConfig::new(&vault).with_snapshot(temp_dir.path().join("graph.json"));
        fs::write(&config.snapshot, "garbage").unwrap();

        let outcome = refresh(&config).unwrap();

        assert!(outcome.updated);
        assert!(load(&config.snapshot).is_some());
    }
}
