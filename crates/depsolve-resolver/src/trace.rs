//! Record of the dependency edges a resolution followed.
//!
//! The trace is observational only. It can be rendered as a Graphviz
//! `digraph` or turned into a [`DependencyGraph`] for tree and path queries.

use depsolve_core::distkey::DistKey;

use crate::graph::DependencyGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEdge {
    pub from: DistKey,
    /// The distribution that satisfied the dependency.
    pub to: DistKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    /// A distribution was chosen.
    Node(DistKey),
    Edge(TraceEdge),
}

/// Append-only sequence of trace entries in the order the search made them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, dist: &DistKey) {
        self.entries.push(TraceEntry::Node(dist.clone()));
    }

    pub fn edge(&mut self, from: &DistKey, to: &DistKey) {
        self.entries.push(TraceEntry::Edge(TraceEdge {
            from: from.clone(),
            to: to.clone(),
        }));
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn edges(&self) -> impl Iterator<Item = &TraceEdge> {
        self.entries.iter().filter_map(|e| match e {
            TraceEntry::Edge(edge) => Some(edge),
            TraceEntry::Node(_) => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DistKey> {
        self.entries.iter().filter_map(|e| match e {
            TraceEntry::Node(dist) => Some(dist),
            TraceEntry::Edge(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The body of the trace as `.dot` statements, one per line.
    pub fn to_dot_body(&self) -> String {
        self.entries
            .iter()
            .map(|entry| match entry {
                TraceEntry::Node(dist) => emit_node(dist),
                TraceEntry::Edge(edge) => emit_edge(edge.from.package(), edge.to.package()),
            })
            .collect()
    }

    /// A complete Graphviz `digraph`.
    pub fn to_dot(&self) -> String {
        format!("digraph G {{\n{}}}\n", self.to_dot_body())
    }

    /// Build a graph rooted at the first recorded node.
    pub fn to_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for entry in &self.entries {
            match entry {
                TraceEntry::Node(dist) => {
                    let idx = graph.add_node(dist.clone());
                    if graph.root.is_none() {
                        graph.set_root(idx);
                    }
                }
                TraceEntry::Edge(edge) => {
                    let from = graph.add_node(edge.from.clone());
                    let to = graph.add_node(edge.to.clone());
                    graph.add_edge(from, to);
                }
            }
        }
        graph
    }
}

/// `.dot` statement declaring `dist`'s package node, labelled with the full key.
pub fn emit_node(dist: &DistKey) -> String {
    format!("{}[label = \"{dist}\"];\n", dot_sanitize(dist.package()))
}

/// `.dot` statement for an edge between two package nodes.
pub fn emit_edge(from_package: &str, to_package: &str) -> String {
    format!("{} -> {};\n", dot_sanitize(from_package), dot_sanitize(to_package))
}

/// Make a package name usable as a `.dot` identifier.
///
/// Lossy: `zope.interface` and `zope-interface` map to the same node.
pub fn dot_sanitize(package: &str) -> String {
    package.replace(['-', '.'], "_")
}
