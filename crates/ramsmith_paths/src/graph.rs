//! Path and hop data model.
//!
//! A [`GraphPath`] is an ordered sequence of [`GraphNode`] hops from a path
//! source (index 0, nearest the ultimate primary input) to the destination
//! net (last index). Construction proceeds from the destination toward the
//! source, so the structural operations *prepend*; paths are persistent
//! values and every operation returns a new path.

use ramsmith_common::{Ident, Interner};
use ramsmith_netlist::{Design, ModuleId};
use serde::{Deserialize, Serialize};

/// One hierarchical hop on a signal path.
///
/// `in_net`/`out_net` are pin names of `module` (the child at this hop);
/// `parent_in_net`/`parent_out_net` are the same two signals expressed in
/// `parent_module`'s net-name space, read off the instance connection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// The net entering the child module at this hop (a pin of `module`).
    pub in_net: Ident,
    /// The net this hop's module drives (a pin of `module`).
    pub out_net: Ident,
    /// The child module owning `in_net`/`out_net`.
    pub module: ModuleId,
    /// `in_net` as seen in the parent module's net-name space.
    pub parent_in_net: Ident,
    /// `out_net` as seen in the parent module's net-name space.
    pub parent_out_net: Ident,
    /// The module in which the instance lives.
    pub parent_module: ModuleId,
}

impl GraphNode {
    /// Renders this hop as
    /// `parent_in_net:in_net -> |module_name| -> out_net:parent_out_net`.
    pub fn render(&self, design: &Design, interner: &Interner) -> String {
        format!(
            "{}:{} -> |{}| -> {}:{}",
            interner.resolve(self.parent_in_net),
            interner.resolve(self.in_net),
            interner.resolve(design.module(self.module).name),
            interner.resolve(self.out_net),
            interner.resolve(self.parent_out_net),
        )
    }
}

/// An ordered, contiguous chain of hops from a source to a destination net.
///
/// Paths never skip a hierarchy level: each node's parent-level input net
/// connects (after hierarchy translation) to the next node's module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPath {
    nodes: Vec<GraphNode>,
}

impl GraphPath {
    /// Creates a single-hop path.
    pub fn from_node(node: GraphNode) -> Self {
        Self { nodes: vec![node] }
    }

    /// Returns the hops in source-to-destination order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Returns the number of hops.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path has no hops.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the source hop (index 0).
    ///
    /// # Panics
    ///
    /// Panics if the path is empty. Paths built by the constructor always
    /// hold at least one hop.
    pub fn source_node(&self) -> &GraphNode {
        &self.nodes[0]
    }

    /// Returns the destination hop (last index).
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn destination_node(&self) -> &GraphNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Returns a new path with `node` inserted before the current source.
    pub fn prepend_node(&self, node: GraphNode) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.push(node);
        nodes.extend_from_slice(&self.nodes);
        Self { nodes }
    }

    /// Returns a new path consisting of all of `other`'s hops followed by
    /// this path's hops.
    pub fn prepend_nodes(&self, other: &GraphPath) -> Self {
        let mut nodes = Vec::with_capacity(other.nodes.len() + self.nodes.len());
        nodes.extend_from_slice(&other.nodes);
        nodes.extend_from_slice(&self.nodes);
        Self { nodes }
    }

    /// Returns this path with the source hop's `parent_in_net` replaced.
    ///
    /// Used during ancestor propagation to re-express the source net in an
    /// enclosing module's net-name space.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn with_source_parent_in_net(mut self, net: Ident) -> Self {
        self.nodes[0].parent_in_net = net;
        self
    }

    /// Renders the path one hop per line, source first.
    pub fn render(&self, design: &Design, interner: &Interner) -> String {
        self.nodes
            .iter()
            .map(|n| n.render(design, interner))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
