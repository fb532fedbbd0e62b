pub mod diagnostics;
pub mod file;

pub use file::File;
