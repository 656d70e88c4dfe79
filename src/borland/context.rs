use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{Node, NodeRef, Print};

/// Identity of a shared node, only meaningful while the node is kept alive.
type Identity = usize;

#[inline]
fn identity(node: &NodeRef) -> Identity {
    Arc::as_ptr(node) as Identity
}

/// Interning cache for a single demangled symbol.
///
/// Names and nested names that are structurally identical are handed out as
/// the same [`NodeRef`]. Nested names are keyed on the identity of their
/// children which stays valid as the cache keeps every registered node alive.
#[derive(Debug, Default)]
pub struct Context {
    names: FxHashMap<Arc<str>, NodeRef>,
    nested_names: FxHashMap<(Identity, Identity), NodeRef>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previously interned name with the given text.
    pub fn get_name(&self, name: &str) -> Option<NodeRef> {
        self.names.get(name).cloned()
    }

    /// Registers a [`Node::Name`] under its text.
    pub fn add_name(&mut self, node: NodeRef) {
        let Node::Name(name) = &*node else {
            debug_assert!(false, "only names can be registered, got {:?}", node.kind());
            return;
        };

        let key = name.shared_name();
        log::trace!("[borland::context] interned name '{key}'");
        self.names.insert(key, node);
    }

    /// Previously interned nested name built out of these exact nodes.
    pub fn get_nested_name(&self, scope: &NodeRef, name: &NodeRef) -> Option<NodeRef> {
        self.nested_names
            .get(&(identity(scope), identity(name)))
            .cloned()
    }

    /// Registers a [`Node::NestedName`] under the identity of its children.
    pub fn add_nested_name(&mut self, node: NodeRef) {
        let Node::NestedName(nested) = &*node else {
            debug_assert!(false, "only nested names can be registered, got {:?}", node.kind());
            return;
        };

        let key = (identity(nested.scope()), identity(nested.name()));
        log::trace!("[borland::context] interned nested name '::{}'", nested.name().str());
        self.nested_names.insert(key, node);
    }

    /// Number of interned names.
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Number of interned nested names.
    pub fn nested_name_count(&self) -> usize {
        self.nested_names.len()
    }
}
