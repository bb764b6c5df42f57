//! Variable identifiers.

use std::fmt;

/// An opaque variable identifier.
///
/// Identifiers are dense 32-bit indices handed out by the tableau, so they
/// double as indices into per-variable tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

impl VarId {
    /// Creates an identifier from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize`, for indexing per-variable tables.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarId({})", self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<u32> for VarId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_equality() {
        let v1 = VarId::new(42);
        let v2 = VarId::new(42);
        let v3 = VarId::new(43);

        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
        assert!(v1 < v3);
    }

    #[test]
    fn test_var_display() {
        assert_eq!(VarId::new(7).to_string(), "x7");
        assert_eq!(format!("{:?}", VarId::new(7)), "VarId(7)");
        assert_eq!(VarId::from(3).as_usize(), 3);
    }

    #[test]
    fn test_var_size() {
        assert_eq!(std::mem::size_of::<VarId>(), 4);
    }
}
