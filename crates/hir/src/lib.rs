pub mod analysis;
pub mod hir_def;

#[cfg(any(feature = "testutils", test))]
pub mod test_db;

pub use common::{File, diagnostics};

use hir_def::Workspace;

/// Base database trait for everything that reads the declaration tree.
///
/// The declaration tree itself is built by a host (driver, language server,
/// test fixture) before analysis runs; analysis code only reads it through
/// salsa queries, so every check is memoized by declaration identity.
#[salsa::db]
pub trait HirDb: salsa::Database {
    /// The set of modules loaded into the current compilation.
    fn workspace(&self) -> Workspace;
}

/// Defines a concrete salsa database that owns a lazily created, initially
/// empty [`Workspace`].
#[macro_export]
macro_rules! define_input_db {
    ($name:ident) => {
        #[salsa::db]
        #[derive(Clone, Default)]
        pub struct $name {
            storage: salsa::Storage<Self>,
            workspace: std::sync::OnceLock<$crate::hir_def::Workspace>,
        }

        #[salsa::db]
        impl salsa::Database for $name {}

        #[salsa::db]
        impl $crate::HirDb for $name {
            fn workspace(&self) -> $crate::hir_def::Workspace {
                *self
                    .workspace
                    .get_or_init(|| $crate::hir_def::Workspace::new(self, Vec::new()))
            }
        }
    };
}
