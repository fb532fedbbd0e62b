use camino::Utf8PathBuf;

/// A source file known to the compilation.
///
/// The declaration tree is built elsewhere; files exist so that diagnostics
/// can carry resolvable spans.
#[salsa::input]
#[derive(Debug)]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(ref)]
    pub text: String,
}
