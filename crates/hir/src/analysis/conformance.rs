//! A minimal conformance oracle.
//!
//! The distributed checks only observe the valid/invalid distinction of a
//! conformance lookup, so conformance is modelled as set membership over the
//! declared conformance lists, expanded through protocol inheritance. Witness
//! resolution, conditional conformance and module-scoped visibility are out
//! of scope.

use rustc_hash::FxHashSet;

use super::HirAnalysisDb;
use crate::hir_def::{AdtRef, ProtocolDecl, Ty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformanceResult {
    Valid,
    Invalid,
}

impl ConformanceResult {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// The transitive closure of a protocol's inherited protocols, excluding the
/// protocol itself. Tolerates inheritance cycles in the input tree; cyclic
/// declarations are diagnosed elsewhere.
#[salsa::tracked(returns(ref))]
pub fn super_protocols(db: &dyn HirAnalysisDb, proto: ProtocolDecl) -> Vec<ProtocolDecl> {
    let mut seen = FxHashSet::default();
    let mut order = vec![];
    let mut work: Vec<ProtocolDecl> = proto.supers(db).clone();
    while let Some(current) = work.pop() {
        if current == proto || !seen.insert(current) {
            continue;
        }
        order.push(current);
        work.extend(current.supers(db).iter().copied());
    }
    order
}

/// Every protocol a nominal declaration conforms to: the declared
/// conformances plus everything they inherit.
#[salsa::tracked(returns(ref))]
pub fn conformance_set(db: &dyn HirAnalysisDb, adt: AdtRef) -> Vec<ProtocolDecl> {
    let mut seen = FxHashSet::default();
    let mut order = vec![];
    for &proto in adt.conformances(db) {
        if seen.insert(proto) {
            order.push(proto);
        }
        for &super_proto in super_protocols(db, proto) {
            if seen.insert(super_proto) {
                order.push(super_proto);
            }
        }
    }
    order
}

/// Whether `ty` conforms to `proto`. A protocol-as-type conforms to itself
/// and to everything it inherits.
pub fn conforms_to(db: &dyn HirAnalysisDb, ty: Ty, proto: ProtocolDecl) -> ConformanceResult {
    let holds = match ty {
        Ty::Unit => false,
        Ty::Adt(adt) => conformance_set(db, adt).contains(&proto),
        Ty::Proto(p) => p == proto || super_protocols(db, p).contains(&proto),
    };
    if holds {
        ConformanceResult::Valid
    } else {
        ConformanceResult::Invalid
    }
}
