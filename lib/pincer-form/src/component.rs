//! Intermediate tree built during traversal and read by the serializer.

use derive_more::Display;

use crate::PathSegment;

/// Shape of a [`Component`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ComponentKind {
    /// A formatted leaf.
    #[display("scalar")]
    Scalar,
    /// An array node.
    #[display("sequence")]
    Sequence,
    /// An object node.
    #[display("keyed")]
    Keyed,
}

/// A node of the intermediate tree.
///
/// `Keyed` entries keep insertion order and have unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// Already-formatted text.
    Scalar(String),
    /// Ordered child nodes.
    Sequence(Vec<Component>),
    /// Named child nodes.
    Keyed(Vec<(String, Component)>),
}

impl Default for Component {
    fn default() -> Self {
        Self::Keyed(Vec::new())
    }
}

impl Component {
    /// Shape of this node.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Scalar(_) => ComponentKind::Scalar,
            Self::Sequence(_) => ComponentKind::Sequence,
            Self::Keyed(_) => ComponentKind::Keyed,
        }
    }

    /// Text of a scalar node.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Child of a keyed node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Keyed(entries) => entries
                .iter()
                .find_map(|(key, child)| (key == name).then_some(child)),
            _ => None,
        }
    }

    /// Write `value` at `path`, creating intermediate nodes as needed.
    ///
    /// A node addressed by a segment of the wrong kind is replaced by an
    /// empty node of the right kind. Keyed writes overwrite an existing name
    /// in place or append a new one. Sequence writes overwrite slot `i` only
    /// when it already exists; otherwise the child is appended, whatever the
    /// requested index.
    pub fn set_value(&mut self, value: Self, path: &[PathSegment]) {
        let Some((segment, rest)) = path.split_first() else {
            *self = value;
            return;
        };

        match segment {
            PathSegment::Index(index) => {
                let items = self.coerce_sequence();
                if let Some(child) = items.get_mut(*index) {
                    child.set_value(value, rest);
                } else {
                    let mut child = Self::placeholder(rest);
                    child.set_value(value, rest);
                    items.push(child);
                }
            }
            PathSegment::Key(name) => {
                let entries = self.coerce_keyed();
                if let Some((_, child)) = entries.iter_mut().find(|(key, _)| key == name) {
                    child.set_value(value, rest);
                } else {
                    let mut child = Self::placeholder(rest);
                    child.set_value(value, rest);
                    entries.push((name.clone(), child));
                }
            }
        }
    }

    /// Empty node matching the kind of the next segment.
    fn placeholder(rest: &[PathSegment]) -> Self {
        match rest.first() {
            Some(PathSegment::Index(_)) => Self::Sequence(Vec::new()),
            _ => Self::Keyed(Vec::new()),
        }
    }

    fn coerce_sequence(&mut self) -> &mut Vec<Self> {
        if !matches!(self, Self::Sequence(_)) {
            *self = Self::Sequence(Vec::new());
        }
        match self {
            Self::Sequence(items) => items,
            _ => unreachable!("node was just coerced to a sequence"),
        }
    }

    fn coerce_keyed(&mut self) -> &mut Vec<(String, Self)> {
        if !matches!(self, Self::Keyed(_)) {
            *self = Self::Keyed(Vec::new());
        }
        match self {
            Self::Keyed(entries) => entries,
            _ => unreachable!("node was just coerced to a keyed node"),
        }
    }
}
