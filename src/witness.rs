use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime token identifying the concrete type held by an [`AnyValue`](crate::AnyValue)
///
/// Two witnesses are equal iff they were built for the same type. The type name
/// is carried along for diagnostics only and takes no part in comparisons.
///
/// # Examples
///
/// ```
/// use sovran_anyvalue::{AnyValue, TypeId, TypeWitness};
///
/// let value = AnyValue::new(7u8);
/// assert_eq!(value.type_witness(), TypeWitness::of::<u8>());
/// assert_ne!(value.type_witness(), TypeWitness::of::<u16>());
///
/// // Witnesses compare directly against a raw `TypeId`
/// assert!(value.type_witness() == TypeId::of::<u8>());
/// assert!(value.type_witness() != TypeId::of::<i8>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeWitness {
    id: TypeId,
    name: &'static str,
}

impl TypeWitness {
    /// Builds the witness for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human readable type name, as reported by `std::any::type_name`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check if this witness identifies `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeWitness {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeWitness {}

impl PartialEq<TypeId> for TypeWitness {
    fn eq(&self, other: &TypeId) -> bool {
        self.id == *other
    }
}

impl Hash for TypeWitness {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeWitness").field(&self.name).finish()
    }
}

impl fmt::Display for TypeWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
