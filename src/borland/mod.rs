//! Syntax tree of a demangled Borland C++ symbol.
//!
//! Nodes are immutable once constructed and shared through [`NodeRef`]'s, so
//! the same name may be referenced by several parents. Names and nested names
//! are interned through a [`Context`] that lives for exactly one symbol.
//!
//! ```text
//! <function>    = <function-type>.left <name> <function-type>.right
//! <nested-name> = <name> :: <name>
//! <template>    = <name> < <node-array>? >
//! <node-array>  = <node> {, <node>}*
//! ```

mod array;
mod context;
mod function;
mod names;
mod types;

use std::sync::Arc;

use crate::TokenStream;

pub use array::NodeArray;
pub use context::Context;
pub use function::{CallConv, FunctionNode, FunctionTypeNode};
pub use names::{
    ConversionOperatorNode, NameNode, NestedNameNode, Operator, OperatorNode, TemplateNode,
};
pub use types::{
    ArrayTypeNode, BuiltInType, BuiltInTypeNode, NamedTypeNode, PointerTypeNode, Qualifiers,
    ReferenceKind, ReferenceTypeNode,
};

/// Shared handle to an immutable node.
pub type NodeRef = Arc<Node>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Name,
    NestedName,
    NodeArray,
    Template,
    Function,
    FunctionType,
    ConversionOperator,
    Operator,
    BuiltInType,
    NamedType,
    PointerType,
    ReferenceType,
    ArrayType,
}

/// Converts a node to text.
///
/// Converting a node representing a C++ type to a string is tricky due
/// to the bad grammar of the C++ declaration inherited from C. You have
/// to construct a string from inside to outside. For example, if a type
/// X is a pointer to a function returning int, the order you create a
/// string becomes something like this:
///
///   (1) X is a pointer: *X
///   (2) (1) is a function returning int: int (*X)()
///
/// So you cannot construct a result just by appending strings to a result.
///
/// To deal with this, every node is printed in two halves. [`Print::print_left`]
/// writes whatever precedes an embedded name and [`Print::print_right`] writes
/// whatever follows it. A parent that splices a child around its own content
/// calls both halves itself instead of [`Print::print`].
pub trait Print {
    fn print_left(&self, s: &mut TokenStream);

    fn print_right(&self, _s: &mut TokenStream) {}

    /// Whether [`Print::print`] emits the right half.
    fn has_right(&self) -> bool {
        false
    }

    fn print(&self, s: &mut TokenStream) {
        self.print_left(s);
        if self.has_right() {
            self.print_right(s);
        }
    }

    /// Renders the node into a fresh stream.
    fn str(&self) -> String {
        let mut stream = TokenStream::new();
        self.print(&mut stream);
        stream.to_string()
    }
}

#[derive(Debug)]
pub enum Node {
    Name(NameNode),
    NestedName(NestedNameNode),
    Array(NodeArray),
    Template(TemplateNode),
    Function(FunctionNode),
    FunctionType(FunctionTypeNode),
    ConversionOperator(ConversionOperatorNode),
    Operator(OperatorNode),
    BuiltInType(BuiltInTypeNode),
    NamedType(NamedTypeNode),
    PointerType(PointerTypeNode),
    ReferenceType(ReferenceTypeNode),
    ArrayType(ArrayTypeNode),
}

macro_rules! dispatch {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            Node::Name($inner) => $body,
            Node::NestedName($inner) => $body,
            Node::Array($inner) => $body,
            Node::Template($inner) => $body,
            Node::Function($inner) => $body,
            Node::FunctionType($inner) => $body,
            Node::ConversionOperator($inner) => $body,
            Node::Operator($inner) => $body,
            Node::BuiltInType($inner) => $body,
            Node::NamedType($inner) => $body,
            Node::PointerType($inner) => $body,
            Node::ReferenceType($inner) => $body,
            Node::ArrayType($inner) => $body,
        }
    };
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Name(_) => Kind::Name,
            Node::NestedName(_) => Kind::NestedName,
            Node::Array(_) => Kind::NodeArray,
            Node::Template(_) => Kind::Template,
            Node::Function(_) => Kind::Function,
            Node::FunctionType(_) => Kind::FunctionType,
            Node::ConversionOperator(_) => Kind::ConversionOperator,
            Node::Operator(_) => Kind::Operator,
            Node::BuiltInType(_) => Kind::BuiltInType,
            Node::NamedType(_) => Kind::NamedType,
            Node::PointerType(_) => Kind::PointerType,
            Node::ReferenceType(_) => Kind::ReferenceType,
            Node::ArrayType(_) => Kind::ArrayType,
        }
    }

    pub fn as_name(&self) -> Option<&NameNode> {
        match self {
            Node::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_nested_name(&self) -> Option<&NestedNameNode> {
        match self {
            Node::NestedName(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&NodeArray> {
        match self {
            Node::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_function_type(&self) -> Option<&FunctionTypeNode> {
        match self {
            Node::FunctionType(func_type) => Some(func_type),
            _ => None,
        }
    }
}

impl Print for Node {
    fn print_left(&self, s: &mut TokenStream) {
        dispatch!(self, node => node.print_left(s))
    }

    fn print_right(&self, s: &mut TokenStream) {
        dispatch!(self, node => node.print_right(s))
    }

    fn has_right(&self) -> bool {
        dispatch!(self, node => node.has_right())
    }
}

impl From<NodeArray> for Node {
    fn from(array: NodeArray) -> Self {
        Node::Array(array)
    }
}

impl From<FunctionTypeNode> for Node {
    fn from(func_type: FunctionTypeNode) -> Self {
        Node::FunctionType(func_type)
    }
}
