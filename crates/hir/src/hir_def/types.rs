use super::{AdtRef, ProtocolDecl};
use crate::HirDb;

/// A declared interface type, reduced to what the distributed checks need:
/// identity, unit-ness, and conformance lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, salsa::Update)]
pub enum Ty {
    /// The empty tuple; a function "returning nothing".
    Unit,
    /// A nominal type (class or struct).
    Adt(AdtRef),
    /// A protocol used as a type (existential).
    Proto(ProtocolDecl),
}

impl Ty {
    pub fn is_unit(self) -> bool {
        matches!(self, Self::Unit)
    }

    pub fn pretty_print(self, db: &dyn HirDb) -> String {
        match self {
            Self::Unit => "()".into(),
            Self::Adt(adt) => adt.name(db).to_string(),
            Self::Proto(proto) => proto.name(db).to_string(),
        }
    }
}
