use smol_str::SmolStr;

/// Attributes attached to a declaration, e.g. the `distributed` marker on a
/// function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttrList {
    data: Vec<Attr>,
}

impl AttrList {
    pub fn new(data: Vec<Attr>) -> Self {
        Self { data }
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            data: names.into_iter().map(Attr::new).collect(),
        }
    }

    /// Returns true if this attribute list contains an attribute with the
    /// given name.
    pub fn has_attr(&self, name: &str) -> bool {
        self.data.iter().any(|attr| attr.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.data.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attr {
    pub name: SmolStr,
}

impl Attr {
    pub fn new(name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_attr_matches_by_name() {
        let attrs = AttrList::from_names(["distributed", "inline"]);
        assert!(attrs.has_attr("distributed"));
        assert!(attrs.has_attr("inline"));
        assert!(!attrs.has_attr("distribute"));
        assert!(!AttrList::default().has_attr("distributed"));
    }
}
