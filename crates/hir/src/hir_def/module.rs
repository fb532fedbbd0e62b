use smol_str::SmolStr;

use super::{ClassDecl, ItemKind};
use crate::HirDb;

/// The set of modules loaded into the current compilation. A module is
/// considered loaded iff it appears here.
#[salsa::input]
#[derive(Debug)]
pub struct Workspace {
    #[returns(ref)]
    pub modules: Vec<TopModule>,
}

impl Workspace {
    pub fn module_by_name(self, db: &dyn HirDb, name: &str) -> Option<TopModule> {
        self.modules(db)
            .iter()
            .copied()
            .find(|module| module.name(db).as_str() == name)
    }

    pub fn contains_module(self, db: &dyn HirDb, name: &str) -> bool {
        self.module_by_name(db, name).is_some()
    }
}

/// A loaded module with its top-level nominal declarations.
#[salsa::input]
#[derive(Debug)]
pub struct TopModule {
    #[returns(ref)]
    pub name: SmolStr,
    #[returns(ref)]
    pub items: Vec<ItemKind>,
}

impl TopModule {
    pub fn all_classes(self, db: &dyn HirDb) -> impl Iterator<Item = ClassDecl> + '_ {
        self.items(db).iter().filter_map(|item| match item {
            ItemKind::Class(class) => Some(*class),
            _ => None,
        })
    }
}
