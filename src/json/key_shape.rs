use std::collections::BTreeSet;

/// A value-erased node of a JSON document.
///
/// Equality, ordering and hashing are structural: two shapes are equal when
/// their keys match and their child sets hold equal shapes. A scalar leaf has no
/// child set at all, which keeps `{"a": 1}` apart from `{"a": [{}]}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyShape {
    key: String,
    children: Option<BTreeSet<KeyShape>>,
}

impl KeyShape {
    /// A key whose value was a scalar
    pub fn leaf(key: impl Into<String>) -> Self {
        KeyShape {
            key: key.into(),
            children: None,
        }
    }

    pub fn node(key: impl Into<String>, children: BTreeSet<KeyShape>) -> Self {
        KeyShape {
            key: key.into(),
            children: Some(children),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn children(&self) -> Option<&BTreeSet<KeyShape>> {
        self.children.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
