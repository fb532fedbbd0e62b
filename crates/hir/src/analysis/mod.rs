pub mod analysis_pass;
pub mod conformance;
pub mod diagnostics;
pub mod distributed;
pub mod known;
pub mod synthesis;

use analysis_pass::ModuleAnalysisPass;
use diagnostics::DiagnosticVoucher;
use distributed::{check_distributed_actor, check_distributed_func, is_distributed_func};

use crate::HirDb;
use crate::hir_def::TopModule;

#[salsa::db]
pub trait HirAnalysisDb: HirDb {}

#[salsa::db]
impl<T> HirAnalysisDb for T where T: HirDb {}

/// An analysis pass for distributed actor declarations.
///
/// Flushes, in declaration-traversal order, the diagnostics of every class
/// in the module that classifies as a distributed actor.
pub struct DistributedActorAnalysisPass {}

impl ModuleAnalysisPass for DistributedActorAnalysisPass {
    fn run_on_module(
        &mut self,
        db: &dyn HirAnalysisDb,
        top_mod: TopModule,
    ) -> Vec<Box<dyn DiagnosticVoucher>> {
        let mut diags: Vec<Box<dyn DiagnosticVoucher>> = vec![];
        for class in top_mod.all_classes(db) {
            if !distributed::is_distributed_actor(db, class.into()) {
                continue;
            }
            diags.extend(
                check_distributed_actor(db, class)
                    .iter()
                    .map(|diag| diag.to_voucher()),
            );
        }
        diags
    }
}

/// An analysis pass for `distributed` functions.
///
/// Function contracts are deliberately not validated by the actor checker;
/// they are validated independently, wherever a distributed function is
/// declared or referenced. This pass is that trigger point for whole-module
/// analysis.
pub struct DistributedFuncAnalysisPass {}

impl ModuleAnalysisPass for DistributedFuncAnalysisPass {
    fn run_on_module(
        &mut self,
        db: &dyn HirAnalysisDb,
        top_mod: TopModule,
    ) -> Vec<Box<dyn DiagnosticVoucher>> {
        let mut diags: Vec<Box<dyn DiagnosticVoucher>> = vec![];
        for class in top_mod.all_classes(db) {
            if !distributed::is_distributed_actor(db, class.into()) {
                continue;
            }
            for func in class.funcs(db) {
                if !is_distributed_func(db, func) {
                    continue;
                }
                diags.extend(
                    check_distributed_func(db, func)
                        .iter()
                        .map(|diag| diag.to_voucher()),
                );
            }
        }
        diags
    }
}
