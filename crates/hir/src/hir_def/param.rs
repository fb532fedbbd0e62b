use common::diagnostics::Span;
use smol_str::SmolStr;

use super::Ty;

/// A declared function or initializer parameter.
#[salsa::input]
#[derive(Debug)]
pub struct ParamDecl {
    /// The argument label callers use; diagnostics cite it.
    #[returns(ref)]
    pub label: SmolStr,
    pub ty: Ty,
    pub span: Span,
}
