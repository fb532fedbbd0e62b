//! Lowering of structured distributed-actor diagnostics into the shared
//! diagnostic model.
//!
//! Validators return [`DistributedDiag`] values; nothing is rendered until a
//! pass flushes them through [`DiagnosticVoucher`]. Message wording cites the
//! declaration the way the user wrote it (argument labels, pretty-printed
//! types), never internal identifiers.

use common::diagnostics::{
    CompleteDiagnostic, DiagnosticPass, ErrorCode, Severity, SubDiagnostic,
};

use super::HirAnalysisDb;
use super::known::DISTRIBUTED_MODULE;
use crate::hir_def::{ClassDecl, CtorDecl, FuncDecl, ParamDecl, PropDecl};

/// A deferred diagnostic that can render itself once a database is at hand.
pub trait DiagnosticVoucher {
    fn to_complete(&self, db: &dyn HirAnalysisDb) -> CompleteDiagnostic;
}

/// A structured diagnostic produced by the distributed-actor checks.
///
/// Carries declaration handles instead of rendered text so that validator
/// results stay comparable and cacheable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, salsa::Update)]
pub enum DistributedDiag {
    /// Distributed-actor syntax used without the supporting module loaded.
    NeedsExplicitImport { class: ClassDecl },
    /// A distributed function parameter that is not both encodable and
    /// decodable.
    NonCodableParam { func: FuncDecl, param: ParamDecl },
    /// A distributed function result type that is not both encodable and
    /// decodable.
    NonCodableResult { func: FuncDecl },
    /// A user-written implementation of a function reserved for compiler
    /// synthesis.
    ManualRemoteImpl { func: FuncDecl, expected: String },
    /// A designated initializer with no transport-capable parameter.
    MissingTransportParam { ctor: CtorDecl },
    /// A designated initializer with more than one transport-capable
    /// parameter.
    AmbiguousTransportParam {
        ctor: CtorDecl,
        count: usize,
        second: ParamDecl,
    },
    /// A user-declared property shadowing synthesized actor storage.
    ReservedProperty { prop: PropDecl },
}

impl DistributedDiag {
    pub fn to_voucher(&self) -> Box<dyn DiagnosticVoucher> {
        Box::new(self.clone())
    }

    fn local_code(&self) -> u16 {
        match self {
            Self::NeedsExplicitImport { .. } => 1,
            Self::NonCodableParam { .. } => 2,
            Self::NonCodableResult { .. } => 3,
            Self::ManualRemoteImpl { .. } => 4,
            Self::MissingTransportParam { .. } => 5,
            Self::AmbiguousTransportParam { .. } => 6,
            Self::ReservedProperty { .. } => 7,
        }
    }
}

impl DiagnosticVoucher for DistributedDiag {
    fn to_complete(&self, db: &dyn HirAnalysisDb) -> CompleteDiagnostic {
        let error_code = ErrorCode::new(DiagnosticPass::Distributed, self.local_code());

        let (message, sub_diagnostics, notes) = match *self {
            Self::NeedsExplicitImport { class } => (
                format!(
                    "'distributed actor' requires the '{DISTRIBUTED_MODULE}' module to be loaded"
                ),
                vec![SubDiagnostic::primary(
                    class.span(db),
                    format!("class `{}` cannot be checked", class.name(db)),
                )],
                vec![format!("add `use {DISTRIBUTED_MODULE}`")],
            ),

            Self::NonCodableParam { func, param } => (
                format!(
                    "distributed function `{}` has a non-codable parameter",
                    func.name(db)
                ),
                vec![SubDiagnostic::primary(
                    param.span(db),
                    format!(
                        "parameter `{}` of type `{}` must conform to both 'Encodable' and 'Decodable'",
                        param.label(db),
                        param.ty(db).pretty_print(db)
                    ),
                )],
                vec![],
            ),

            Self::NonCodableResult { func } => (
                format!(
                    "distributed function `{}` has a non-codable result type",
                    func.name(db)
                ),
                vec![SubDiagnostic::primary(
                    func.span(db),
                    format!(
                        "result type `{}` must conform to both 'Encodable' and 'Decodable'",
                        func.ret_ty(db).pretty_print(db)
                    ),
                )],
                vec![],
            ),

            Self::ManualRemoteImpl { func, ref expected } => (
                format!("`{expected}` may not be implemented manually"),
                vec![SubDiagnostic::primary(
                    func.span(db),
                    format!(
                        "the remote counterpart of `{}` is synthesized by the compiler",
                        func.name(db)
                    ),
                )],
                vec![format!("remove the `{expected}` declaration")],
            ),

            Self::MissingTransportParam { ctor } => (
                "designated initializer of a distributed actor must accept an \
                 'ActorTransport' parameter"
                    .to_string(),
                vec![SubDiagnostic::primary(
                    ctor.span(db),
                    format!("`{}` has no transport parameter", ctor.name(db)),
                )],
                vec![],
            ),

            Self::AmbiguousTransportParam { ctor, count, second } => (
                format!(
                    "designated initializer of a distributed actor must accept exactly one \
                     'ActorTransport' parameter, found {count}"
                ),
                vec![
                    SubDiagnostic::primary(
                        ctor.span(db),
                        format!("`{}` accepts {count} transport parameters", ctor.name(db)),
                    ),
                    SubDiagnostic::secondary(
                        second.span(db),
                        format!("extra transport parameter `{}`", second.label(db)),
                    ),
                ],
                vec![],
            ),

            Self::ReservedProperty { prop } => (
                format!(
                    "property `{}` is reserved on distributed actors",
                    prop.name(db)
                ),
                vec![SubDiagnostic::primary(
                    prop.span(db),
                    "this property is synthesized by the compiler".to_string(),
                )],
                vec![],
            ),
        };

        CompleteDiagnostic::new(Severity::Error, error_code, message, sub_diagnostics, notes)
    }
}
