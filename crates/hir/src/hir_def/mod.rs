mod attr;
mod item;
mod module;
mod param;
mod types;

pub use attr::{Attr, AttrList};
pub use item::{
    AdtRef, ClassDecl, CtorDecl, FuncDecl, ItemKind, MemberKind, PropDecl, ProtocolDecl,
    StructDecl,
};
pub use module::{TopModule, Workspace};
pub use param::ParamDecl;
pub use types::Ty;
