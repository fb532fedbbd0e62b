//! Test database utilities for the distributed-actor analyses.
//!
//! This module is only available when the `testutils` feature is enabled.

use std::ops::Range;

use camino::{Utf8Path, Utf8PathBuf};
use codespan_reporting::diagnostic as cs_diag;
use codespan_reporting::files as cs_files;
use codespan_reporting::term::{
    self,
    termcolor::{BufferWriter, ColorChoice},
};
use common::diagnostics::{CompleteDiagnostic, LabelStyle, Severity, Span, TextRange};

use salsa::Setter;

use crate::File;
use crate::HirDb;
use crate::analysis::analysis_pass::AnalysisPassManager;
use crate::analysis::diagnostics::DiagnosticVoucher;
use crate::analysis::{DistributedActorAnalysisPass, DistributedFuncAnalysisPass};
use crate::define_input_db;
use crate::hir_def::TopModule;

define_input_db!(TestDb);

impl TestDb {
    /// Adds a module to the workspace under analysis.
    pub fn install_module(&mut self, module: TopModule) {
        let workspace = self.workspace();
        let mut modules = workspace.modules(self).clone();
        modules.push(module);
        workspace.set_modules(self).to(modules);
    }

    /// Renders diagnostics the way the driver would, without colors, sorted
    /// by error code and then by primary span.
    pub fn render_diags(&self, diags: &[Box<dyn DiagnosticVoucher>]) -> String {
        let mut complete: Vec<_> = diags.iter().map(|diag| diag.to_complete(self)).collect();
        let sort_key = |diag: &CompleteDiagnostic| {
            let range = diag
                .primary_span()
                .map(|span| (span.range.start(), span.range.end()));
            (diag.error_code, range)
        };
        complete.sort_by(|lhs, rhs| sort_key(lhs).cmp(&sort_key(rhs)));

        let writer = BufferWriter::stderr(ColorChoice::Never);
        let mut buffer = writer.buffer();
        let config = term::Config::default();
        for diag in &complete {
            term::emit(&mut buffer, &config, &CsDbWrapper(self), &to_cs(diag)).unwrap();
        }
        std::str::from_utf8(buffer.as_slice()).unwrap().to_string()
    }

    pub fn assert_no_diags(&self, top_mod: TopModule) {
        let mut manager = initialize_analysis_pass();
        let diags = manager.run_on_module(self, top_mod);
        if !diags.is_empty() {
            eprintln!("{}", self.render_diags(&diags));
            panic!("this module contains errors");
        }
    }
}

pub fn initialize_analysis_pass() -> AnalysisPassManager {
    let mut pass_manager = AnalysisPassManager::new();
    pass_manager.add_module_pass(Box::new(DistributedActorAnalysisPass {}));
    pass_manager.add_module_pass(Box::new(DistributedFuncAnalysisPass {}));
    pass_manager
}

/// Builds a fixture file token by token, handing out the span of each token
/// so declarations can point at real source positions.
pub struct SourceBuilder {
    file: File,
    text: String,
}

impl SourceBuilder {
    pub fn new(db: &TestDb, path: &str) -> Self {
        let file = File::new(db, Utf8PathBuf::from(path), String::new());
        Self {
            file,
            text: String::new(),
        }
    }

    pub fn file(&self) -> File {
        self.file
    }

    /// Appends `token` on a line of its own and returns its span.
    pub fn span(&mut self, token: &str) -> Span {
        let start = self.text.len() as u32;
        self.text.push_str(token);
        let end = self.text.len() as u32;
        self.text.push('\n');
        Span::new(self.file, TextRange::new(start, end))
    }

    pub fn finish(self, db: &mut TestDb) {
        self.file.set_text(db).to(self.text);
    }
}

fn to_cs(complete: &CompleteDiagnostic) -> cs_diag::Diagnostic<File> {
    let severity = match complete.severity {
        Severity::Error => cs_diag::Severity::Error,
        Severity::Warning => cs_diag::Severity::Warning,
        Severity::Note => cs_diag::Severity::Note,
    };

    let labels = complete
        .sub_diagnostics
        .iter()
        .filter_map(|sub_diag| {
            let span = sub_diag.span?;
            let style = match sub_diag.style {
                LabelStyle::Primary => cs_diag::LabelStyle::Primary,
                LabelStyle::Secondary => cs_diag::LabelStyle::Secondary,
            };
            Some(
                cs_diag::Label::new(style, span.file, span.range)
                    .with_message(sub_diag.message.clone()),
            )
        })
        .collect();

    cs_diag::Diagnostic {
        severity,
        code: Some(complete.error_code.to_string()),
        message: complete.message.clone(),
        labels,
        notes: complete.notes.clone(),
    }
}

fn file_line_starts(db: &TestDb, file: File) -> Vec<usize> {
    cs_files::line_starts(file.text(db)).collect()
}

struct CsDbWrapper<'a>(&'a TestDb);

impl<'db> cs_files::Files<'db> for CsDbWrapper<'db> {
    type FileId = File;
    type Name = &'db Utf8Path;
    type Source = &'db str;

    fn name(&'db self, file_id: Self::FileId) -> Result<Self::Name, cs_files::Error> {
        Ok(file_id.path(self.0).as_path())
    }

    fn source(&'db self, file_id: Self::FileId) -> Result<Self::Source, cs_files::Error> {
        Ok(file_id.text(self.0))
    }

    fn line_index(
        &'db self,
        file_id: Self::FileId,
        byte_index: usize,
    ) -> Result<usize, cs_files::Error> {
        let starts = file_line_starts(self.0, file_id);
        Ok(starts
            .binary_search(&byte_index)
            .unwrap_or_else(|next_line| next_line - 1))
    }

    fn line_range(
        &'db self,
        file_id: Self::FileId,
        line_index: usize,
    ) -> Result<Range<usize>, cs_files::Error> {
        let line_starts = file_line_starts(self.0, file_id);

        let start = *line_starts
            .get(line_index)
            .ok_or(cs_files::Error::LineTooLarge {
                given: line_index,
                max: line_starts.len() - 1,
            })?;

        let end = if line_index == line_starts.len() - 1 {
            file_id.text(self.0).len()
        } else {
            *line_starts
                .get(line_index + 1)
                .ok_or(cs_files::Error::LineTooLarge {
                    given: line_index,
                    max: line_starts.len() - 1,
                })?
        };

        Ok(Range { start, end })
    }
}
