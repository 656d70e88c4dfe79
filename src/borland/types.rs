use std::sync::Arc;

use bitflags::bitflags;
use config::CONFIG;

use super::{Kind, Node, NodeRef, Print};
use crate::TokenStream;

bitflags! {
    /// cv-qualifiers attached to a type.
    ///
    /// Always printed volatile first, then const.
    #[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct Qualifiers: u8 {
        const CONST    = 0b01;
        const VOLATILE = 0b10;
    }
}

impl Qualifiers {
    pub fn new(is_volatile: bool, is_const: bool) -> Self {
        let mut quals = Qualifiers::empty();
        quals.set(Qualifiers::VOLATILE, is_volatile);
        quals.set(Qualifiers::CONST, is_const);
        quals
    }

    #[inline]
    pub fn is_volatile(self) -> bool {
        self.contains(Qualifiers::VOLATILE)
    }

    #[inline]
    pub fn is_const(self) -> bool {
        self.contains(Qualifiers::CONST)
    }

    /// Qualifiers trailing a type: `int * const`.
    pub fn print_space_l(self, s: &mut TokenStream) {
        let color = CONFIG.colors.annotation;

        if self.is_volatile() {
            s.push(" volatile", color);
        }

        if self.is_const() {
            s.push(" const", color);
        }
    }

    /// Qualifiers preceding a type: `const int`.
    pub fn print_space_r(self, s: &mut TokenStream) {
        let color = CONFIG.colors.annotation;

        if self.is_volatile() {
            s.push("volatile ", color);
        }

        if self.is_const() {
            s.push("const ", color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInType {
    Void,
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    WChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    Int64,
    UnsignedInt64,
    Float,
    Double,
    LongDouble,
}

impl BuiltInType {
    pub fn name(self) -> &'static str {
        match self {
            BuiltInType::Void => "void",
            BuiltInType::Bool => "bool",
            BuiltInType::Char => "char",
            BuiltInType::SignedChar => "signed char",
            BuiltInType::UnsignedChar => "unsigned char",
            BuiltInType::WChar => "wchar_t",
            BuiltInType::Short => "short",
            BuiltInType::UnsignedShort => "unsigned short",
            BuiltInType::Int => "int",
            BuiltInType::UnsignedInt => "unsigned int",
            BuiltInType::Long => "long",
            BuiltInType::UnsignedLong => "unsigned long",
            BuiltInType::Int64 => "__int64",
            BuiltInType::UnsignedInt64 => "unsigned __int64",
            BuiltInType::Float => "float",
            BuiltInType::Double => "double",
            BuiltInType::LongDouble => "long double",
        }
    }
}

#[derive(Debug)]
pub struct BuiltInTypeNode {
    tipe: BuiltInType,
    quals: Qualifiers,
}

impl BuiltInTypeNode {
    pub fn create(tipe: BuiltInType, quals: Qualifiers) -> NodeRef {
        Arc::new(Node::BuiltInType(BuiltInTypeNode { tipe, quals }))
    }

    pub fn tipe(&self) -> BuiltInType {
        self.tipe
    }

    pub fn quals(&self) -> Qualifiers {
        self.quals
    }
}

impl Print for BuiltInTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.quals.print_space_r(s);
        s.push(self.tipe.name(), CONFIG.colors.known);
    }
}

/// Class, struct, union or enum referred to by name.
#[derive(Debug)]
pub struct NamedTypeNode {
    name: NodeRef,
    quals: Qualifiers,
}

impl NamedTypeNode {
    pub fn create(name: NodeRef, quals: Qualifiers) -> NodeRef {
        Arc::new(Node::NamedType(NamedTypeNode { name, quals }))
    }

    pub fn name(&self) -> &NodeRef {
        &self.name
    }

    pub fn quals(&self) -> Qualifiers {
        self.quals
    }
}

impl Print for NamedTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.quals.print_space_r(s);
        self.name.print(s);
    }
}

/// Writes the part of a pointer or reference that precedes the embedded name.
///
/// "[]" and "()" (for function parameters) take precedence over "*",
/// so "int *x(int)" means "x is a function returning int *". We need
/// parentheses to supercede the default precedence. (e.g. we want to
/// emit something like "int (*x)(int)".)
fn print_indirection_left(inner: &Node, sigil: &'static str, s: &mut TokenStream) {
    match inner.kind() {
        Kind::FunctionType => {
            inner.print_left(s);
            s.push("(", CONFIG.colors.brackets);
        }
        Kind::ArrayType => {
            inner.print_left(s);
            s.push(" ", CONFIG.colors.spacing);
            s.push("(", CONFIG.colors.brackets);
        }
        // already inside the parentheses of a function or array
        _ if inner.has_right() => inner.print_left(s),
        Kind::PointerType | Kind::ReferenceType => inner.print(s),
        _ => {
            inner.print(s);
            s.push(" ", CONFIG.colors.spacing);
        }
    }

    s.push(sigil, CONFIG.colors.special);
}

fn print_indirection_right(inner: &Node, s: &mut TokenStream) {
    if let Kind::FunctionType | Kind::ArrayType = inner.kind() {
        s.push(")", CONFIG.colors.brackets);
    }

    inner.print_right(s);
}

/// ```text
/// <pointer> = <pointee> * <qualifiers>
///           | <return-type> (* <qualifiers>) (<params>)
///           | <element> (* <qualifiers>)[<len>]
/// ```
#[derive(Debug)]
pub struct PointerTypeNode {
    pointee: NodeRef,
    quals: Qualifiers,
    has_right: bool,
}

impl PointerTypeNode {
    pub fn create(pointee: NodeRef, quals: Qualifiers) -> NodeRef {
        let has_right = pointee.has_right();
        Arc::new(Node::PointerType(PointerTypeNode {
            pointee,
            quals,
            has_right,
        }))
    }

    pub fn pointee(&self) -> &NodeRef {
        &self.pointee
    }

    pub fn quals(&self) -> Qualifiers {
        self.quals
    }
}

impl Print for PointerTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        print_indirection_left(&self.pointee, "*", s);
        self.quals.print_space_l(s);
    }

    fn print_right(&self, s: &mut TokenStream) {
        print_indirection_right(&self.pointee, s);
    }

    fn has_right(&self) -> bool {
        self.has_right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    LValue,
    RValue,
}

impl ReferenceKind {
    fn sigil(self) -> &'static str {
        match self {
            ReferenceKind::LValue => "&",
            ReferenceKind::RValue => "&&",
        }
    }
}

/// ```text
/// <reference> = <referent> &
///             | <referent> &&
/// ```
#[derive(Debug)]
pub struct ReferenceTypeNode {
    referent: NodeRef,
    kind: ReferenceKind,
    has_right: bool,
}

impl ReferenceTypeNode {
    pub fn create(referent: NodeRef, kind: ReferenceKind) -> NodeRef {
        let has_right = referent.has_right();
        Arc::new(Node::ReferenceType(ReferenceTypeNode {
            referent,
            kind,
            has_right,
        }))
    }

    pub fn referent(&self) -> &NodeRef {
        &self.referent
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }
}

impl Print for ReferenceTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        print_indirection_left(&self.referent, self.kind.sigil(), s);
    }

    fn print_right(&self, s: &mut TokenStream) {
        print_indirection_right(&self.referent, s);
    }

    fn has_right(&self) -> bool {
        self.has_right
    }
}

/// Array of a single type which can be on n dimensions.
///
/// ```text
/// int[20][10][5][..]
/// ```
#[derive(Debug)]
pub struct ArrayTypeNode {
    element: NodeRef,
    len: u64,
}

impl ArrayTypeNode {
    pub fn create(element: NodeRef, len: u64) -> NodeRef {
        Arc::new(Node::ArrayType(ArrayTypeNode { element, len }))
    }

    pub fn element(&self) -> &NodeRef {
        &self.element
    }

    /// Number of elements in the outermost dimension.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.len
    }
}

impl Print for ArrayTypeNode {
    fn print_left(&self, s: &mut TokenStream) {
        self.element.print_left(s);
    }

    fn print_right(&self, s: &mut TokenStream) {
        s.push("[", CONFIG.colors.brackets);
        s.push_string(self.len.to_string(), CONFIG.colors.annotation);
        s.push("]", CONFIG.colors.brackets);
        self.element.print_right(s);
    }

    fn has_right(&self) -> bool {
        true
    }
}
