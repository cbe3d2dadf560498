//! Common ID Types
//!
//! Type-safe index wrappers for arena-allocated entities.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type NodeId = Id<markers::Node>;
/// let id = NodeId::from_index(3);
/// assert_eq!(id.index(), 3);
/// ```
pub struct Id<T> {
    value: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create from an arena index
    pub const fn from_index(index: u32) -> Self {
        Self {
            value: index,
            _marker: PhantomData,
        }
    }

    /// Get the underlying index
    pub const fn index(&self) -> u32 {
        self.value
    }

    /// Index usable for slice access
    pub const fn as_usize(&self) -> usize {
        self.value as usize
    }
}

// Manual impls: derives would require `T: Clone`, `T: Eq`, ... on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u32> for Id<T> {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

impl<T> From<Id<T>> for u32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for document node IDs
    pub struct Node;
}

/// Type aliases for common IDs
pub type NodeId = Id<markers::Node>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_id_from_index() {
        let id: NodeId = Id::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.as_usize(), 7);
        assert_eq!(u32::from(id), 7);
    }

    #[test]
    fn test_id_is_copy_and_ordered() {
        let a = NodeId::from_index(1);
        let b = a;
        assert_eq!(a, b);

        let set: BTreeSet<NodeId> = [NodeId::from(3), NodeId::from(1), NodeId::from(2)]
            .into_iter()
            .collect();
        let order: Vec<u32> = set.into_iter().map(u32::from).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
