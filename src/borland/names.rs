use std::sync::Arc;

use config::CONFIG;

use super::{Context, Node, NodeRef, Print};
use crate::TokenStream;

/// Plain identifier such as a namespace, class or function name.
#[derive(Debug, PartialEq, Eq)]
pub struct NameNode {
    name: Arc<str>,
}

impl NameNode {
    /// Returns the interned name matching `name`, creating it on first use.
    pub fn create(ctx: &mut Context, name: &str) -> NodeRef {
        if let Some(node) = ctx.get_name(name) {
            return node;
        }

        let node = Arc::new(Node::Name(NameNode {
            name: Arc::from(name),
        }));

        ctx.add_name(Arc::clone(&node));
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}

impl Print for NameNode {
    fn print_left(&self, s: &mut TokenStream) {
        s.push_string(self.name.to_string(), CONFIG.colors.item);
    }
}

/// ```text
/// <nested-name> = <scope> :: <name>
/// ```
#[derive(Debug)]
pub struct NestedNameNode {
    scope: NodeRef,
    name: NodeRef,
}

impl NestedNameNode {
    /// Returns the interned nested name for this exact pair of nodes, creating it on first use.
    pub fn create(ctx: &mut Context, scope: NodeRef, name: NodeRef) -> NodeRef {
        if let Some(node) = ctx.get_nested_name(&scope, &name) {
            return node;
        }

        let node = Arc::new(Node::NestedName(NestedNameNode { scope, name }));
        ctx.add_nested_name(Arc::clone(&node));
        node
    }

    /// Enclosing scope.
    pub fn scope(&self) -> &NodeRef {
        &self.scope
    }

    /// Inner component.
    pub fn name(&self) -> &NodeRef {
        &self.name
    }
}

impl Print for NestedNameNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.scope.print(s);
        s.push("::", CONFIG.colors.delimiter);
        self.name.print(s);
    }
}

/// ```text
/// <template> = <name> < <params>? >
/// ```
#[derive(Debug)]
pub struct TemplateNode {
    name: NodeRef,
    params: Option<NodeRef>,
}

impl TemplateNode {
    pub fn create(name: NodeRef, params: Option<NodeRef>) -> NodeRef {
        Arc::new(Node::Template(TemplateNode { name, params }))
    }

    pub fn name(&self) -> &NodeRef {
        &self.name
    }

    pub fn params(&self) -> Option<&NodeRef> {
        self.params.as_ref()
    }
}

impl Print for TemplateNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.name.print(s);
        s.push("<", CONFIG.colors.brackets);
        if let Some(ref params) = self.params {
            params.print(s);
        }
        s.push(">", CONFIG.colors.brackets);
    }
}

/// User-defined conversion function.
///
/// ```text
/// operator <type>
/// ```
#[derive(Debug)]
pub struct ConversionOperatorNode {
    tipe: NodeRef,
}

impl ConversionOperatorNode {
    pub fn create(_ctx: &mut Context, tipe: NodeRef) -> NodeRef {
        Arc::new(Node::ConversionOperator(ConversionOperatorNode { tipe }))
    }

    /// Target type of the conversion.
    pub fn tipe(&self) -> &NodeRef {
        &self.tipe
    }
}

impl Print for ConversionOperatorNode {
    fn print_left(&self, s: &mut TokenStream) {
        s.push("operator", CONFIG.colors.known);
        s.push(" ", CONFIG.colors.spacing);
        self.tipe.print(s);
    }
}

/// Overloadable operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Not,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    Shl,
    Shr,
    ShlAssign,
    ShrAssign,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    Inc,
    Dec,
    Comma,
    Arrow,
    ArrowStar,
    Call,
    Index,
    New,
    Delete,
    NewArray,
    DeleteArray,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitNot => "~",
            Operator::Not => "!",
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::MulAssign => "*=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::AndAssign => "&=",
            Operator::OrAssign => "|=",
            Operator::XorAssign => "^=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::ShlAssign => "<<=",
            Operator::ShrAssign => ">>=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Inc => "++",
            Operator::Dec => "--",
            Operator::Comma => ",",
            Operator::Arrow => "->",
            Operator::ArrowStar => "->*",
            Operator::Call => "()",
            Operator::Index => "[]",
            Operator::New => "new",
            Operator::Delete => "delete",
            Operator::NewArray => "new[]",
            Operator::DeleteArray => "delete[]",
        }
    }

    /// Keyword operators are separated from `operator` by a blank.
    fn is_keyword(self) -> bool {
        matches!(
            self,
            Operator::New | Operator::Delete | Operator::NewArray | Operator::DeleteArray
        )
    }
}

/// ```text
/// operator <symbol>
/// ```
#[derive(Debug)]
pub struct OperatorNode {
    op: Operator,
}

impl OperatorNode {
    pub fn create(op: Operator) -> NodeRef {
        Arc::new(Node::Operator(OperatorNode { op }))
    }

    pub fn op(&self) -> Operator {
        self.op
    }
}

impl Print for OperatorNode {
    fn print_left(&self, s: &mut TokenStream) {
        s.push("operator", CONFIG.colors.known);
        if self.op.is_keyword() {
            s.push(" ", CONFIG.colors.spacing);
        }
        s.push(self.op.symbol(), CONFIG.colors.item);
    }
}
