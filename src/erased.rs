use crate::witness::TypeWitness;
use std::any::Any;

/// Types that can be stored in an [`AnyValue`](crate::AnyValue)
///
/// Implemented for every `'static` type that can be cloned, compared for
/// equality, and shared between threads. There is nothing to implement by hand.
pub trait Value: Any + Clone + PartialEq + Send + Sync {}

impl<T: Any + Clone + PartialEq + Send + Sync> Value for T {}

/// Per-type operation table for a boxed payload
///
/// Every `Value` type gets one implementation, so a `Box<dyn ErasedValue>`
/// carries the copy and compare operations of its concrete type alongside the
/// data. Dropping the box runs the concrete type's destructor.
pub(crate) trait ErasedValue: Any + Send + Sync {
    fn witness(&self) -> TypeWitness;

    fn clone_boxed(&self) -> Box<dyn ErasedValue>;

    /// Returns false when `other` holds a different concrete type
    fn eq_erased(&self, other: &dyn ErasedValue) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Moves the payload into `slot` when it is an `Option` of the payload's
    /// type, otherwise hands the payload back
    fn move_into(self: Box<Self>, slot: &mut dyn Any) -> Option<Box<dyn ErasedValue>>;
}

impl<T: Value> ErasedValue for T {
    fn witness(&self) -> TypeWitness {
        TypeWitness::of::<T>()
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn ErasedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn move_into(self: Box<Self>, slot: &mut dyn Any) -> Option<Box<dyn ErasedValue>> {
        match slot.downcast_mut::<Option<T>>() {
            Some(slot) => {
                *slot = Some(*self);
                None
            }
            None => Some(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_clone_boxed_is_independent() {
        let original: Box<dyn ErasedValue> = Box::new(vec![1, 2, 3]);
        let mut copy = original.clone_boxed();

        copy.as_any_mut()
            .downcast_mut::<Vec<i32>>()
            .unwrap()
            .push(4);

        assert_eq!(
            original.as_any().downcast_ref::<Vec<i32>>().unwrap(),
            &vec![1, 2, 3]
        );
        assert_eq!(copy.as_any().downcast_ref::<Vec<i32>>().unwrap().len(), 4);
    }

    #[test]
    fn test_eq_erased_same_type() {
        let a: Box<dyn ErasedValue> = Box::new(Point { x: 1, y: 2 });
        let b: Box<dyn ErasedValue> = Box::new(Point { x: 1, y: 2 });
        let c: Box<dyn ErasedValue> = Box::new(Point { x: 2, y: 1 });

        assert!(a.eq_erased(&*b));
        assert!(!a.eq_erased(&*c));
    }

    #[test]
    fn test_eq_erased_across_types() {
        let int: Box<dyn ErasedValue> = Box::new(1i32);
        let long: Box<dyn ErasedValue> = Box::new(1i64);

        assert!(!int.eq_erased(&*long));
        assert!(!long.eq_erased(&*int));
    }

    #[test]
    fn test_witness_reports_concrete_type() {
        let boxed: Box<dyn ErasedValue> = Box::new(Point { x: 0, y: 0 });
        assert_eq!(boxed.witness(), TypeWitness::of::<Point>());
        assert!(boxed.witness().name().ends_with("Point"));
    }

    #[test]
    fn test_move_into_matching_slot() {
        let boxed: Box<dyn ErasedValue> = Box::new(3u16);
        let mut slot: Option<u16> = None;

        assert!(boxed.move_into(&mut slot).is_none());
        assert_eq!(slot, Some(3));
    }

    #[test]
    fn test_move_into_other_slot_returns_payload() {
        let boxed: Box<dyn ErasedValue> = Box::new(3u16);
        let mut slot: Option<u32> = None;

        let rest = boxed.move_into(&mut slot).unwrap();
        assert!(slot.is_none());
        assert_eq!(rest.as_any().downcast_ref::<u16>(), Some(&3));
    }
}
