use std::sync::Arc;

use config::CONFIG;

use super::{Node, NodeRef, Print};
use crate::TokenStream;

/// Ordered list of nodes, used for parameter and template argument lists.
///
/// The list can only grow while it's owned by the parser. Once turned into a
/// [`NodeRef`] through [`NodeArray::finish`] it can no longer change.
#[derive(Debug, Default)]
pub struct NodeArray {
    nodes: Vec<NodeRef>,
}

impl NodeArray {
    pub fn create() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a node, keeping insertion order.
    pub fn add_node(&mut self, node: NodeRef) {
        self.nodes.push(node);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, idx: usize) -> Option<&NodeRef> {
        self.nodes.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<NodeRef> {
        self.nodes.iter()
    }

    /// Freezes the array so it can be handed to a parent.
    pub fn finish(self) -> NodeRef {
        Arc::new(Node::Array(self))
    }
}

impl Print for NodeArray {
    fn print_left(&self, s: &mut TokenStream) {
        let mut nodes = self.nodes.iter();

        if let Some(node) = nodes.next() {
            node.print(s);
        }

        for node in nodes {
            s.push(", ", CONFIG.colors.delimiter);
            node.print(s);
        }
    }
}

impl<'a> IntoIterator for &'a NodeArray {
    type Item = &'a NodeRef;
    type IntoIter = std::slice::Iter<'a, NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
