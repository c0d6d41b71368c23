//! Hover highlight state.
//!
//! Each element label is either normal or highlighted. The [`HighlightSet`]
//! holds the highlighted ones and changes only through [`PointerEvent`]s:
//!
//! ```text
//!            Enter(label)
//!   normal ───────────────► highlighted
//!          ◄───────────────
//!            Leave(label)
//! ```
//!
//! Several labels can be highlighted at once (overlapping shapes receive
//! their enter events before the matching leave events). There is no
//! terminal state; a fresh set is created per diagram instance.

use std::collections::{HashSet, hash_set};

use log::trace;

/// A pointer interaction with one rendered element, identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// The pointer entered the element's shape.
    Enter(String),
    /// The pointer left the element's shape.
    Leave(String),
}

impl PointerEvent {
    pub fn enter(label: impl Into<String>) -> Self {
        Self::Enter(label.into())
    }

    pub fn leave(label: impl Into<String>) -> Self {
        Self::Leave(label.into())
    }

    /// The label of the element the event targets.
    pub fn label(&self) -> &str {
        match self {
            Self::Enter(label) | Self::Leave(label) => label,
        }
    }
}

/// The set of currently highlighted labels.
///
/// # Examples
///
/// ```
/// # use contour::{HighlightSet, PointerEvent};
/// let mut highlights = HighlightSet::new();
///
/// highlights.apply(&PointerEvent::enter("e1"));
/// assert!(highlights.contains("e1"));
///
/// highlights.apply(&PointerEvent::leave("e1"));
/// assert!(highlights.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    labels: HashSet<String>,
}

impl HighlightSet {
    /// Creates an empty set; every label starts out normal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `label` as highlighted. Returns `false` if it already was.
    pub fn add(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    /// Returns `label` to normal. Returns `false` if it was not highlighted.
    pub fn remove(&mut self, label: &str) -> bool {
        self.labels.remove(label)
    }

    /// Applies a pointer event, returning whether the set changed.
    pub fn apply(&mut self, event: &PointerEvent) -> bool {
        let changed = match event {
            PointerEvent::Enter(label) => self.add(label.as_str()),
            PointerEvent::Leave(label) => self.remove(label),
        };
        trace!(event:? = event, changed = changed, highlighted = self.labels.len(); "Applied pointer event");
        changed
    }

    /// Returns `true` if `label` is currently highlighted.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates the highlighted labels in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.labels.iter()
    }
}

impl<'a> IntoIterator for &'a HighlightSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
