use super::HirAnalysisDb;
use super::diagnostics::DiagnosticVoucher;
use crate::hir_def::TopModule;

/// A module-granularity analysis pass; passes run in registration order and
/// their diagnostics are concatenated, which keeps compiler output stable.
pub trait ModuleAnalysisPass {
    fn run_on_module(
        &mut self,
        db: &dyn HirAnalysisDb,
        top_mod: TopModule,
    ) -> Vec<Box<dyn DiagnosticVoucher>>;
}

#[derive(Default)]
pub struct AnalysisPassManager {
    module_passes: Vec<Box<dyn ModuleAnalysisPass>>,
}

impl AnalysisPassManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module_pass(&mut self, pass: Box<dyn ModuleAnalysisPass>) {
        self.module_passes.push(pass);
    }

    pub fn run_on_module(
        &mut self,
        db: &dyn HirAnalysisDb,
        top_mod: TopModule,
    ) -> Vec<Box<dyn DiagnosticVoucher>> {
        let mut diags = vec![];
        for pass in self.module_passes.iter_mut() {
            diags.extend(pass.run_on_module(db, top_mod));
        }
        diags
    }
}
