// This is necessary because `salsa::input` structs generate a constructor
// that may take many arguments depending on the number of fields.
#![allow(clippy::too_many_arguments)]

use common::diagnostics::Span;
use smol_str::SmolStr;

use super::{AttrList, ParamDecl, TopModule, Ty};
use crate::HirDb;

/// A top-level nominal type declaration.
///
/// Classes carry an explicit `distributed actor` marker; protocols become
/// distributed-actor protocols by inheriting the well-known one; every other
/// nominal shape is never a distributed actor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::TryInto,
    salsa::Supertype,
    salsa::Update,
)]
pub enum ItemKind {
    Class(ClassDecl),
    Struct(StructDecl),
    Protocol(ProtocolDecl),
}

impl ItemKind {
    pub fn name(self, db: &dyn HirDb) -> SmolStr {
        match self {
            Self::Class(class) => class.name(db).clone(),
            Self::Struct(struct_) => struct_.name(db).clone(),
            Self::Protocol(proto) => proto.name(db).clone(),
        }
    }

    pub fn span(self, db: &dyn HirDb) -> Span {
        match self {
            Self::Class(class) => class.span(db),
            Self::Struct(struct_) => struct_.span(db),
            Self::Protocol(proto) => proto.span(db),
        }
    }

    pub fn module(self, db: &dyn HirDb) -> TopModule {
        match self {
            Self::Class(class) => class.module(db),
            Self::Struct(struct_) => struct_.module(db),
            Self::Protocol(proto) => proto.module(db),
        }
    }

    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Struct(_) => "struct",
            Self::Protocol(_) => "protocol",
        }
    }
}

/// A nominal declaration that can declare protocol conformances.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::TryInto,
    salsa::Supertype,
    salsa::Update,
)]
pub enum AdtRef {
    Class(ClassDecl),
    Struct(StructDecl),
}

impl AdtRef {
    pub fn name(self, db: &dyn HirDb) -> SmolStr {
        ItemKind::from(self).name(db)
    }

    pub fn conformances(self, db: &dyn HirDb) -> &Vec<ProtocolDecl> {
        match self {
            Self::Class(class) => class.conformances(db),
            Self::Struct(struct_) => struct_.conformances(db),
        }
    }
}

impl From<AdtRef> for ItemKind {
    fn from(adt: AdtRef) -> Self {
        match adt {
            AdtRef::Class(class) => ItemKind::Class(class),
            AdtRef::Struct(struct_) => ItemKind::Struct(struct_),
        }
    }
}

/// A member of a class body, in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::TryInto, salsa::Update,
)]
pub enum MemberKind {
    Func(FuncDecl),
    Ctor(CtorDecl),
    Prop(PropDecl),
}

#[salsa::input]
#[derive(Debug)]
pub struct ClassDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
    pub module: TopModule,
    /// Whether the class was declared `distributed actor`.
    pub is_explicit_distributed_actor: bool,
    #[returns(ref)]
    pub conformances: Vec<ProtocolDecl>,
    #[returns(ref)]
    pub members: Vec<MemberKind>,
}

impl ClassDecl {
    pub fn ctors(self, db: &dyn HirDb) -> impl Iterator<Item = CtorDecl> + '_ {
        self.members(db).iter().filter_map(|member| match member {
            MemberKind::Ctor(ctor) => Some(*ctor),
            _ => None,
        })
    }

    pub fn funcs(self, db: &dyn HirDb) -> impl Iterator<Item = FuncDecl> + '_ {
        self.members(db).iter().filter_map(|member| match member {
            MemberKind::Func(func) => Some(*func),
            _ => None,
        })
    }
}

#[salsa::input]
#[derive(Debug)]
pub struct StructDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
    pub module: TopModule,
    #[returns(ref)]
    pub conformances: Vec<ProtocolDecl>,
}

#[salsa::input]
#[derive(Debug)]
pub struct ProtocolDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
    pub module: TopModule,
    /// Directly inherited protocols.
    #[returns(ref)]
    pub supers: Vec<ProtocolDecl>,
}

#[salsa::input]
#[derive(Debug)]
pub struct FuncDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
    #[returns(ref)]
    pub attrs: AttrList,
    #[returns(ref)]
    pub params: Vec<ParamDecl>,
    pub ret_ty: Ty,
    /// The nominal declaration this function is a member of, if any.
    pub parent: Option<AdtRef>,
    /// Compiler-generated functions (e.g. remote thunks) are synthesized;
    /// everything the user wrote is not.
    pub is_synthesized: bool,
}

#[salsa::input]
#[derive(Debug)]
pub struct CtorDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
    #[returns(ref)]
    pub params: Vec<ParamDecl>,
    /// Designated initializers fully initialize the instance; convenience
    /// initializers must delegate to a designated one and are exempt from
    /// the transport-parameter rule.
    pub is_designated: bool,
    pub parent: ClassDecl,
}

#[salsa::input]
#[derive(Debug)]
pub struct PropDecl {
    #[returns(ref)]
    pub name: SmolStr,
    pub span: Span,
}
