//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A zone named
/// "A" priced 200 with capacity 1 is equal to any other zone with the same
/// three fields; there is no id to compare.
///
/// To "modify" a value object, build a new one:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seat { row: u32, number: u32 }
///
/// impl ValueObject for Seat {}
///
/// let a = Seat { row: 1, number: 7 };
/// let b = Seat { row: 1, number: 7 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
