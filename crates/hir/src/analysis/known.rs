//! Well-known names and declarations the distributed checks depend on.
//!
//! The protocols live in library modules; they are resolved by name across
//! the workspace, once, and cached. Resolution never emits diagnostics: a
//! missing protocol simply leaves its slot empty and the dependent checks
//! degrade (the availability gate reports the missing module separately).

use super::HirAnalysisDb;
use crate::hir_def::{ItemKind, ProtocolDecl, Workspace};

/// The module that must be imported before any distributed-actor feature may
/// be used.
pub const DISTRIBUTED_MODULE: &str = "distributed";

pub const DISTRIBUTED_ACTOR_PROTOCOL: &str = "DistributedActor";
pub const ACTOR_TRANSPORT_PROTOCOL: &str = "ActorTransport";
pub const ENCODABLE_PROTOCOL: &str = "Encodable";
pub const DECODABLE_PROTOCOL: &str = "Decodable";

/// The attribute marking a function as remotely invocable.
pub const DISTRIBUTED_ATTR: &str = "distributed";

/// Reserved property identifiers; user code may not redeclare them on a
/// distributed actor.
pub const ID_PROPERTY: &str = "id";
pub const TRANSPORT_PROPERTY: &str = "transport";

/// Prefix of the compiler-synthesized remote counterpart of a distributed
/// function.
pub const REMOTE_FUNC_PREFIX: &str = "_remote_";

pub fn remote_counterpart_name(base: &str) -> String {
    format!("{REMOTE_FUNC_PREFIX}{base}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, salsa::Update)]
pub struct KnownProtocols {
    pub distributed_actor: Option<ProtocolDecl>,
    pub actor_transport: Option<ProtocolDecl>,
    pub encodable: Option<ProtocolDecl>,
    pub decodable: Option<ProtocolDecl>,
}

/// Resolves the well-known protocols by name across the workspace. The first
/// declaration with a matching name wins.
#[salsa::tracked]
pub fn known_protocols(db: &dyn HirAnalysisDb, workspace: Workspace) -> KnownProtocols {
    let mut known = KnownProtocols::default();
    for &module in workspace.modules(db) {
        for &item in module.items(db) {
            let ItemKind::Protocol(proto) = item else {
                continue;
            };
            let slot = match proto.name(db).as_str() {
                DISTRIBUTED_ACTOR_PROTOCOL => &mut known.distributed_actor,
                ACTOR_TRANSPORT_PROTOCOL => &mut known.actor_transport,
                ENCODABLE_PROTOCOL => &mut known.encodable,
                DECODABLE_PROTOCOL => &mut known.decodable,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(proto);
            }
        }
    }
    known
}

/// The availability gate: whether the `distributed` module is loaded.
///
/// Keyed by the anchoring declaration so that repeated checks of the same
/// declaration never re-run; the caller that observes `false` is responsible
/// for reporting [`DistributedDiag::NeedsExplicitImport`] exactly once.
///
/// [`DistributedDiag::NeedsExplicitImport`]: super::diagnostics::DistributedDiag
#[salsa::tracked]
pub fn ensure_distributed_module_loaded(db: &dyn HirAnalysisDb, anchor: ItemKind) -> bool {
    let loaded = db.workspace().contains_module(db, DISTRIBUTED_MODULE);
    if !loaded {
        tracing::debug!(
            anchor = anchor.name(db).as_str(),
            "'{DISTRIBUTED_MODULE}' module is not loaded"
        );
    }
    loaded
}
