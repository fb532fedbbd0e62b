//! The diagnostic data model shared by all analysis phases.
//!
//! Validators produce structured diagnostic values; converting them into a
//! [`CompleteDiagnostic`] is deferred until a caller decides to flush, so the
//! same cached check can serve both error reporting and silent probing.

use std::fmt;
use std::ops::Range;

use crate::file::File;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

/// The analysis phase a diagnostic originates from. Together with the local
/// code this forms the stable, user-facing error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticPass {
    Distributed,
}

impl DiagnosticPass {
    fn prefix(self) -> &'static str {
        match self {
            Self::Distributed => "dist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode {
    pub pass: DiagnosticPass,
    pub local_code: u16,
}

impl ErrorCode {
    pub fn new(pass: DiagnosticPass, local_code: u16) -> Self {
        Self { pass, local_code }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.pass.prefix(), self.local_code)
    }
}

/// A half-open byte range into a file's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, salsa::Update)]
pub struct TextRange {
    start: u32,
    end: u32,
}

impl TextRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(self) -> u32 {
        self.start
    }

    pub fn end(self) -> u32 {
        self.end
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.start as usize..range.end as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, salsa::Update)]
pub struct Span {
    pub file: File,
    pub range: TextRange,
}

impl Span {
    pub fn new(file: File, range: TextRange) -> Self {
        Self { file, range }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDiagnostic {
    pub style: LabelStyle,
    pub span: Option<Span>,
    pub message: String,
}

impl SubDiagnostic {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            style: LabelStyle::Primary,
            span: Some(span),
            message: message.into(),
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            style: LabelStyle::Secondary,
            span: Some(span),
            message: message.into(),
        }
    }
}

/// A fully rendered-out diagnostic, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteDiagnostic {
    pub severity: Severity,
    pub error_code: ErrorCode,
    pub message: String,
    pub sub_diagnostics: Vec<SubDiagnostic>,
    pub notes: Vec<String>,
}

impl CompleteDiagnostic {
    pub fn new(
        severity: Severity,
        error_code: ErrorCode,
        message: String,
        sub_diagnostics: Vec<SubDiagnostic>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            severity,
            error_code,
            message,
            sub_diagnostics,
            notes,
        }
    }

    /// The span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.sub_diagnostics
            .iter()
            .find(|sub| sub.style == LabelStyle::Primary)
            .and_then(|sub| sub.span)
    }
}
