//! Core [`Component`] trait and component type identity.
//!
//! Every piece of data attached to an entity implements [`Component`]. The
//! trait requires `Default` — a component's default value is its "zero value",
//! used when a row is allocated and when it is cleared — plus `Clone` so the
//! registry can hand out copies, and `Send + Sync + 'static` so component
//! types are ordinary owned data.

use serde::{Deserialize, Serialize};

/// A process-stable identifier for a component type, derived from the type's
/// string name with the FNV-1a 64-bit hash.
///
/// Hashing the name (rather than relying on link-order or registration-order
/// integers) makes the id deterministic across runs. The zero id is reserved:
/// it marks a cleared component-index entry and is not producible by hashing
/// any name — FNV-1a of the empty string is the offset basis, not zero.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the id for a component type name.
    ///
    /// # Algorithm (FNV-1a 64-bit)
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325          (offset basis)
    /// for each byte in name.as_bytes():
    ///     hash = hash XOR byte
    ///     hash = hash * 0x00000100000001b3  (prime)
    /// return hash
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Compute the id for a Rust component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// The core component trait.
///
/// # Examples
///
/// ```rust
/// use engine_ecs::Component;
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str { "Health" }
/// }
/// ```
pub trait Component: Default + Clone + Send + Sync + 'static {
    /// A human-readable name for this component type (e.g. `"Position"`).
    /// Must be unique across all registered component types.
    fn type_name() -> &'static str;

    /// Returns the [`ComponentTypeId`] for this component type.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}
