//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attribute values are the same value, and "modifying" one
/// means constructing a new one. The bounds keep them cheap to copy,
/// comparable, and debuggable.
///
/// Example: `Money { amount: 100, currency: "USD" }` is a value object, while
/// `Client { id: ClientId(...), name: "..." }` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
