//! Synthesis of implicit distributed-actor members.
//!
//! Synthesized members are computed views over the declaration tree, not
//! mutations of it: the effective member set of a class is its declared
//! members plus what these queries produce. Memoization makes triggering
//! synthesis idempotent, so the checker may "request" it freely.

use super::HirAnalysisDb;
use super::distributed::is_distributed_func;
use super::known::{
    ID_PROPERTY, TRANSPORT_PROPERTY, known_protocols, remote_counterpart_name,
};
use crate::hir_def::{ClassDecl, FuncDecl, MemberKind, Ty};

/// An implicit, compiler-generated class member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, salsa::Update)]
pub enum ImplicitMember {
    /// A stored property (`id`, `transport`).
    Property { name: String },
    /// The remote counterpart of a distributed function.
    RemoteThunk { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, salsa::Update)]
pub struct SynthesizedParam {
    pub label: String,
    pub ty: Ty,
}

/// A compiler-generated designated initializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, salsa::Update)]
pub struct SynthesizedCtor {
    pub params: Vec<SynthesizedParam>,
}

/// The default `init(transport:)` of a distributed actor, synthesized when
/// the class declares no designated initializer of its own. `None` when the
/// class has one, or when the transport protocol is unavailable.
#[salsa::tracked(returns(ref))]
pub fn default_initializer(db: &dyn HirAnalysisDb, class: ClassDecl) -> Option<SynthesizedCtor> {
    let has_designated = class
        .members(db)
        .iter()
        .any(|&member| matches!(member, MemberKind::Ctor(ctor) if ctor.is_designated(db)));
    if has_designated {
        return None;
    }

    let transport = known_protocols(db, db.workspace()).actor_transport?;
    tracing::debug!(
        class = class.name(db).as_str(),
        "synthesizing default initializer"
    );
    Some(SynthesizedCtor {
        params: vec![SynthesizedParam {
            label: TRANSPORT_PROPERTY.into(),
            ty: Ty::Proto(transport),
        }],
    })
}

/// The implicit members of a distributed actor: the reserved `id` and
/// `transport` properties, plus a `_remote_` thunk for every distributed
/// function that has no declared counterpart.
#[salsa::tracked(returns(ref))]
pub fn implicit_distributed_members(db: &dyn HirAnalysisDb, class: ClassDecl) -> Vec<ImplicitMember> {
    let mut members = vec![
        ImplicitMember::Property {
            name: ID_PROPERTY.into(),
        },
        ImplicitMember::Property {
            name: TRANSPORT_PROPERTY.into(),
        },
    ];

    for func in class.funcs(db) {
        if !is_distributed_func(db, func) {
            continue;
        }
        if lookup_remote_counterpart(db, class, func).is_none() {
            members.push(ImplicitMember::RemoteThunk {
                name: remote_counterpart_name(func.name(db).as_str()),
            });
        }
    }

    members
}

/// Looks up the declared `_remote_` counterpart of a distributed function on
/// its class, by the deterministic naming correspondence.
pub fn lookup_remote_counterpart(
    db: &dyn HirAnalysisDb,
    class: ClassDecl,
    func: FuncDecl,
) -> Option<FuncDecl> {
    let expected = remote_counterpart_name(func.name(db).as_str());
    class
        .funcs(db)
        .find(|&candidate| candidate != func && candidate.name(db).as_str() == expected)
}
