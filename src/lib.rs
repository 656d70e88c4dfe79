//! Syntax tree for demangling symbols produced by the Borland C++ compiler.
//!
//! An external parser decodes a mangled symbol and assembles a tree out of the
//! nodes in [`borland`], interning repeated names through a per-symbol
//! [`borland::Context`]. Printing the root of that tree into a [`TokenStream`]
//! produces the demangled declaration as a sequence of colored tokens.
//!
//! Token colors come from [`config::CONFIG`], which is read from disk the first
//! time anything prints. Embedders that want printing free of I/O call
//! [`config::init`] beforehand.
//!
//! ```
//! use borland_demangler::borland::{
//!     BuiltInType, BuiltInTypeNode, CallConv, Context, FunctionNode, FunctionTypeNode, NameNode,
//!     NestedNameNode, NodeArray, Print, Qualifiers,
//! };
//!
//! let mut ctx = Context::new();
//!
//! let class = NameNode::create(&mut ctx, "Foo");
//! let method = NameNode::create(&mut ctx, "Bar");
//! let name = NestedNameNode::create(&mut ctx, class, method);
//!
//! let mut params = NodeArray::create();
//! params.add_node(BuiltInTypeNode::create(BuiltInType::Int, Qualifiers::empty()));
//!
//! let func_type = FunctionTypeNode::create(
//!     CallConv::Unknown,
//!     params.finish(),
//!     Some(BuiltInTypeNode::create(BuiltInType::Void, Qualifiers::empty())),
//!     Qualifiers::new(false, true),
//!     false,
//! );
//!
//! let func = FunctionNode::create(name, func_type);
//! assert_eq!(func.str(), "void Foo::Bar(int) const");
//! ```

use std::fmt;

use tokenizing::{Color32, Token};

pub mod borland;

/// Output of printing a node: the demangled text split into colored tokens.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(32),
        }
    }

    #[inline]
    pub fn push(&mut self, text: &'static str, color: Color32) {
        self.tokens.push(Token::from_static(text, color));
    }

    #[inline]
    pub fn push_string(&mut self, text: String, color: Color32) {
        self.tokens.push(Token::from_string(text, color));
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|t| t.text.is_empty())
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens.iter() {
            f.write_str(&token.text)?;
        }

        Ok(())
    }
}
