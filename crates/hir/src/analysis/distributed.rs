//! Semantic validation of distributed actor declarations.
//!
//! Every check here is a memoized, read-only query over the declaration
//! tree. Validators return structured [`DistributedDiag`] records in
//! declaration-traversal order; callers decide whether to flush them (error
//! reporting) or only inspect emptiness (silent applicability probing).

use smallvec::SmallVec;

use super::HirAnalysisDb;
use super::conformance::{conforms_to, super_protocols};
use super::diagnostics::DistributedDiag;
use super::known::{
    self, ID_PROPERTY, TRANSPORT_PROPERTY, ensure_distributed_module_loaded, known_protocols,
};
use super::synthesis::{default_initializer, implicit_distributed_members, lookup_remote_counterpart};
use crate::hir_def::{AdtRef, ClassDecl, CtorDecl, FuncDecl, ItemKind, MemberKind, ParamDecl};

/// Whether a nominal type declaration is a distributed actor.
///
/// Protocols are distributed-actor protocols if they are, or transitively
/// inherit, the well-known `DistributedActor` protocol. Classes are
/// distributed actors iff declared `distributed actor`. Nothing else ever
/// classifies. Pure and diagnostic-free.
#[salsa::tracked]
pub fn is_distributed_actor(db: &dyn HirAnalysisDb, nominal: ItemKind) -> bool {
    match nominal {
        ItemKind::Protocol(proto) => {
            let Some(well_known) = known_protocols(db, db.workspace()).distributed_actor else {
                return false;
            };
            proto == well_known || super_protocols(db, proto).contains(&well_known)
        }
        ItemKind::Class(class) => class.is_explicit_distributed_actor(db),
        ItemKind::Struct(_) => false,
    }
}

/// Whether the function carries the explicit `distributed` attribute. No
/// inheritance, no inference.
#[salsa::tracked]
pub fn is_distributed_func(db: &dyn HirAnalysisDb, func: FuncDecl) -> bool {
    func.attrs(db).has_attr(known::DISTRIBUTED_ATTR)
}

/// Validates the signature contract of a distributed function.
///
/// Stops at the first problem so the diagnostic stays targeted: parameters
/// in declaration order, then the result type, then the `_remote_`
/// counterpart. The enclosing class being a distributed actor is a
/// precondition established by the caller, not re-validated here.
#[salsa::tracked(returns(ref))]
pub fn check_distributed_func(db: &dyn HirAnalysisDb, func: FuncDecl) -> Vec<DistributedDiag> {
    let known = known_protocols(db, db.workspace());
    if let (Some(encodable), Some(decodable)) = (known.encodable, known.decodable) {
        // Every parameter must satisfy the codable contract.
        for &param in func.params(db) {
            let param_ty = param.ty(db);
            if conforms_to(db, param_ty, encodable).is_invalid()
                || conforms_to(db, param_ty, decodable).is_invalid()
            {
                return vec![DistributedDiag::NonCodableParam { func, param }];
            }
        }

        // The result type must be unit or codable.
        let ret_ty = func.ret_ty(db);
        if !ret_ty.is_unit()
            && (conforms_to(db, ret_ty, decodable).is_invalid()
                || conforms_to(db, ret_ty, encodable).is_invalid())
        {
            return vec![DistributedDiag::NonCodableResult { func }];
        }
    } else {
        // The counterpart rule below does not depend on the codable
        // protocols, so it still applies.
        tracing::debug!(
            func = func.name(db).as_str(),
            "codable protocols unavailable; skipping signature checks"
        );
    }

    // A `_remote_` counterpart must not be implemented by end users; it must
    // be the implementation synthesized by the compiler.
    let Some(AdtRef::Class(class)) = func.parent(db) else {
        return vec![];
    };
    debug_assert!(is_distributed_actor(db, class.into()));
    if let Some(remote) = lookup_remote_counterpart(db, class, func)
        && !remote.is_synthesized(db)
    {
        let expected = known::remote_counterpart_name(func.name(db).as_str());
        return vec![DistributedDiag::ManualRemoteImpl { func, expected }];
    }

    vec![]
}

/// The silent-probe form of [`check_distributed_func`]: same cached
/// validation, no flushing.
pub fn distributed_func_has_problem(db: &dyn HirAnalysisDb, func: FuncDecl) -> bool {
    !check_distributed_func(db, func).is_empty()
}

/// Validates that a designated initializer of a distributed actor accepts
/// exactly one transport-capable parameter. Convenience initializers are
/// exempt; they must delegate to a designated one, which is validated
/// elsewhere.
#[salsa::tracked(returns(ref))]
pub fn check_distributed_actor_ctor(db: &dyn HirAnalysisDb, ctor: CtorDecl) -> Vec<DistributedDiag> {
    let class = ctor.parent(db);
    if !is_distributed_actor(db, class.into()) {
        return vec![];
    }
    if !ctor.is_designated(db) {
        return vec![];
    }

    let Some(transport) = known_protocols(db, db.workspace()).actor_transport else {
        return vec![];
    };

    // `ActorTransport` used as a type conforms to itself, so this covers both
    // the existential and concrete conforming parameter types.
    let mut transport_params: SmallVec<[ParamDecl; 2]> = SmallVec::new();
    for &param in ctor.params(db) {
        if conforms_to(db, param.ty(db), transport).is_valid() {
            transport_params.push(param);
        }
    }

    match transport_params.len() {
        0 => vec![DistributedDiag::MissingTransportParam { ctor }],
        1 => vec![],
        count => vec![DistributedDiag::AmbiguousTransportParam {
            ctor,
            count,
            second: transport_params[1],
        }],
    }
}

/// Reports every user-declared property whose identifier is reserved for the
/// synthesized identity/transport storage. The full member list is scanned;
/// independent violations are all reported.
#[salsa::tracked(returns(ref))]
pub fn check_distributed_actor_properties(
    db: &dyn HirAnalysisDb,
    class: ClassDecl,
) -> Vec<DistributedDiag> {
    let mut diags = vec![];
    for &member in class.members(db) {
        let MemberKind::Prop(prop) = member else {
            continue;
        };
        let name = prop.name(db).as_str();
        if name == ID_PROPERTY || name == TRANSPORT_PROPERTY {
            diags.push(DistributedDiag::ReservedProperty { prop });
        }
    }
    diags
}

/// The distributed-actor declaration checker.
///
/// Sequences the availability gate, initializer synthesis, constructor and
/// property validation, and implicit member synthesis. Function contracts
/// are deliberately not checked from here; functions are validated lazily
/// wherever they are declared or referenced.
#[salsa::tracked(returns(ref))]
pub fn check_distributed_actor(db: &dyn HirAnalysisDb, class: ClassDecl) -> Vec<DistributedDiag> {
    // Without the supporting module there is no point checking the
    // declaration in more detail.
    if !ensure_distributed_module_loaded(db, class.into()) {
        return vec![DistributedDiag::NeedsExplicitImport { class }];
    }

    // If applicable, this creates the default `init(transport:)`.
    let _ = default_initializer(db, class);

    let mut diags = vec![];
    for ctor in class.ctors(db) {
        diags.extend(check_distributed_actor_ctor(db, ctor).iter().cloned());
    }

    diags.extend(check_distributed_actor_properties(db, class).iter().cloned());

    // Identity and transport storage plus remote thunks.
    let _ = implicit_distributed_members(db, class);

    tracing::debug!(
        class = class.name(db).as_str(),
        diags = diags.len(),
        "checked distributed actor"
    );
    diags
}
