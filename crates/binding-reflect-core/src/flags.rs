//! Primitive declaration flags.

use bitflags::bitflags;

bitflags! {
    /// Flags attached to a primitive declaration.
    ///
    /// The binding layer reports how a primitive is represented. The registry
    /// only looks at [`PrimitiveFlags::BIG_INT`], which selects the big-integer
    /// descriptor; the rest is carried through for consumers.
    ///
    /// ```rust
    /// use binding_reflect_core::PrimitiveFlags;
    ///
    /// let int64 = PrimitiveFlags::SIGNED | PrimitiveFlags::BIG_INT;
    /// assert!(int64.is_big_int());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrimitiveFlags: u32 {
        /// Signed integer representation.
        const SIGNED = 1 << 0;
        /// Floating point representation.
        const FLOAT = 1 << 1;
        /// Boolean.
        const BOOL = 1 << 2;
        /// Integer too wide for the host number type.
        const BIG_INT = 1 << 3;
        /// No value.
        const VOID = 1 << 4;
    }
}

impl PrimitiveFlags {
    /// Check if the primitive must be represented as a big integer.
    pub fn is_big_int(self) -> bool {
        self.contains(PrimitiveFlags::BIG_INT)
    }
}

// Hand-written so the flags read as `"SIGNED | BIG_INT"` in recorded feeds.
impl serde::Serialize for PrimitiveFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for PrimitiveFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}
