//! Link-graph data structures and the vault graph builder
//!
//! The graph is a flat, declarative snapshot — plain node and edge
//! lists with string ids — shaped exactly like the JSON document the
//! visualization client consumes. There is no index arithmetic and no
//! derived data; `build_graph` produces it fresh on every call.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::discovery;
use crate::links;

/// Reference targets containing this marker are image attachments and
/// never become nodes (they may still appear as edge targets).
const IMAGE_MARKER: &str = ".png";

/// A node in the link graph. One per discovered note, plus one per
/// referenced-but-absent target that is not an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Note identifier: the file name without the note suffix
    pub id: String,
    /// Display label, always equal to the id
    pub label: String,
}

impl Node {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
        }
    }
}

/// A directed edge, one per raw reference occurrence. Duplicates and
/// self-references are kept, and `to` may name an id with no
/// corresponding node (image targets get edges but never nodes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// The link graph: a snapshot of nodes and edges, serializable as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Equality policy for the snapshot refresh boundary: same node
    /// count, same edge count, same set of node ids. Edge contents and
    /// ordering are deliberately not compared.
    pub fn same_shape(&self, other: &Graph) -> bool {
        if self.nodes.len() != other.nodes.len() || self.edges.len() != other.edges.len() {
            return false;
        }
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let other_ids: HashSet<&str> = other.nodes.iter().map(|n| n.id.as_str()).collect();
        ids == other_ids
    }
}

/// Build the link graph for the vault rooted at `vault`.
///
/// Discovers every note (sorted), reads each one, extracts its wiki
/// links, then assembles nodes and edges:
///
/// - one node per note, in discovery order;
/// - one synthetic node per first-seen reference target that is
///   neither a known node id nor an image reference;
/// - one edge per raw reference occurrence, in order, regardless of
///   whether the target got a node.
///
/// # Errors
/// Any unreadable note (missing permissions, invalid UTF-8) aborts the
/// whole build; no partial graph is returned.
pub fn build_graph(vault: &Path) -> anyhow::Result<Graph> {
    let paths = discovery::discover_notes(vault)?;

    // note id -> reference sequence, preserving discovery order.
    // Duplicate stems (same note name in two directories) keep their
    // first position but the later read wins, so node ids stay unique.
    let mut order: Vec<String> = Vec::new();
    let mut refs_by_note: HashMap<String, Vec<String>> = HashMap::new();

    for path in &paths {
        let Some(id) = discovery::note_id(path) else {
            continue;
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read note {}", path.display()))?;
        let targets = links::extract_links(&text);

        if !refs_by_note.contains_key(&id) {
            order.push(id.clone());
        }
        refs_by_note.insert(id, targets);
    }

    let mut graph = Graph::default();

    // Single ordered set of known ids: note ids seeded first, then
    // extended as synthetic nodes are added during edge processing.
    let mut known: HashSet<String> = order.iter().cloned().collect();
    for id in &order {
        graph.nodes.push(Node::new(id));
    }

    for id in &order {
        for target in &refs_by_note[id] {
            if !known.contains(target) && !target.contains(IMAGE_MARKER) {
                graph.nodes.push(Node::new(target));
                known.insert(target.clone());
            }
            graph.edges.push(Edge {
                from: id.clone(),
                to: target.clone(),
            });
        }
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built vault graph"
    );
    Ok(graph)
}
