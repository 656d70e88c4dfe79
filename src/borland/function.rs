use std::sync::Arc;

use config::CONFIG;

use super::{Kind, Node, NodeRef, Print, Qualifiers};
use crate::TokenStream;

/// Calling conventions supported by Borland.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CallConv {
    #[default]
    Unknown,
    Fastcall,
    Stdcall,
    Cdecl,
    Pascal,
}

impl CallConv {
    fn print(self, s: &mut TokenStream) {
        let literal = match self {
            CallConv::Fastcall => "__fastcall",
            CallConv::Stdcall => "__stdcall",
            CallConv::Cdecl => "__cdecl",
            CallConv::Pascal => "__pascal",
            CallConv::Unknown => return,
        };

        s.push(literal, CONFIG.colors.known);
        s.push(" ", CONFIG.colors.spacing);
    }
}

/// Signature of a function without its name.
///
/// ```text
/// <function-type> = <return-type>? <calling-convention> | (<params>) <qualifiers>
/// ```
///
/// Everything before the `|` is the left half, the rest is the right half.
#[derive(Debug)]
pub struct FunctionTypeNode {
    call_conv: CallConv,
    params: NodeRef,
    ret_type: Option<NodeRef>,
    quals: Qualifiers,
    is_var_arg: bool,
}

impl FunctionTypeNode {
    pub fn create(
        call_conv: CallConv,
        params: NodeRef,
        ret_type: Option<NodeRef>,
        quals: Qualifiers,
        is_var_arg: bool,
    ) -> Self {
        debug_assert_eq!(params.kind(), Kind::NodeArray);

        Self {
            call_conv,
            params,
            ret_type,
            quals,
            is_var_arg,
        }
    }

    /// Wraps the signature in a node, e.g. to be the pointee of a function pointer.
    pub fn finish(self) -> NodeRef {
        Arc::new(Node::FunctionType(self))
    }

    pub fn call_conv(&self) -> CallConv {
        self.call_conv
    }

    pub fn params(&self) -> &NodeRef {
        &self.params
    }

    pub fn ret_type(&self) -> Option<&NodeRef> {
        self.ret_type.as_ref()
    }

    pub fn quals(&self) -> Qualifiers {
        self.quals
    }

    pub fn is_var_arg(&self) -> bool {
        self.is_var_arg
    }
}

impl Print for FunctionTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        if let Some(ref ret_type) = self.ret_type {
            ret_type.print_left(s);
            // a returned function pointer already ends in its opening parenthesis
            if !ret_type.has_right() {
                s.push(" ", CONFIG.colors.spacing);
            }
        }

        self.call_conv.print(s);
    }

    fn print_right(&self, s: &mut TokenStream) {
        s.push("(", CONFIG.colors.brackets);
        self.params.print(s);

        if self.is_var_arg {
            let has_params = self.params.as_array().map_or(true, |params| !params.is_empty());
            if has_params {
                s.push(", ", CONFIG.colors.delimiter);
            }
            s.push("...", CONFIG.colors.known);
        }

        s.push(")", CONFIG.colors.brackets);
        self.quals.print_space_l(s);

        if let Some(ref ret_type) = self.ret_type {
            if ret_type.has_right() {
                ret_type.print_right(s);
            }
        }
    }

    fn has_right(&self) -> bool {
        true
    }
}

/// Named function.
///
/// ```text
/// <function> = <return-type> <calling-convention> <name>(<params>) <qualifiers>
/// ```
///
/// The right half of the signature is written inline around the name, so the
/// function node itself has no right half.
#[derive(Debug)]
pub struct FunctionNode {
    name: NodeRef,
    func_type: FunctionTypeNode,
}

impl FunctionNode {
    pub fn create(name: NodeRef, func_type: FunctionTypeNode) -> NodeRef {
        Arc::new(Node::Function(FunctionNode { name, func_type }))
    }

    pub fn name(&self) -> &NodeRef {
        &self.name
    }

    pub fn func_type(&self) -> &FunctionTypeNode {
        &self.func_type
    }
}

impl Print for FunctionNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.func_type.print_left(s);
        self.name.print(s);
        self.func_type.print_right(s);
    }
}
