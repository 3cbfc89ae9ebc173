use crate::erased::{ErasedValue, Value};
use crate::error::ValueError;
use crate::witness::TypeWitness;
use std::any::Any;
use std::fmt;

/// A type-erased container holding exactly one value of any [`Value`] type
///
/// The concrete type is chosen when the value is constructed or replaced and
/// is checked at runtime on every typed access. Cloning always deep-copies the
/// payload, and two `AnyValue`s compare equal only when they hold the same type
/// and the payloads compare equal.
///
/// A default `AnyValue` holds `()`. String literals (`&'static str`) are
/// stored as `String`, so they compare by content against stored strings.
///
/// # Examples
///
/// ```
/// use sovran_anyvalue::{AnyValue, ValueError};
///
/// let mut value = AnyValue::new(3i32);
/// assert_eq!(value.get::<i32>()?, 3);
/// assert!(value.get::<bool>().is_err());
///
/// value.set("hello");
/// assert_eq!(value.get::<String>()?, "hello");
/// assert_eq!(value, "hello");
/// # Ok::<(), ValueError>(())
/// ```
pub struct AnyValue {
    pub(crate) witness: TypeWitness,
    pub(crate) payload: Box<dyn ErasedValue>,
}

/// Result of normalizing an incoming value before it is stored or compared
enum Canonical<T> {
    Text(String),
    Cell(AnyValue),
    Plain(T),
}

fn canonicalize<T: Value>(value: T) -> Canonical<T> {
    let any: &dyn Any = &value;
    if let Some(text) = any.downcast_ref::<&'static str>() {
        return Canonical::Text(String::from(*text));
    }
    if let Some(cell) = any.downcast_ref::<AnyValue>() {
        return Canonical::Cell(cell.clone());
    }
    Canonical::Plain(value)
}

impl AnyValue {
    /// Creates a new `AnyValue` holding `value`
    ///
    /// An `&'static str` is stored as a `String`. Passing another `AnyValue`
    /// copies it instead of nesting it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyvalue::{AnyValue, TypeWitness};
    ///
    /// let number = AnyValue::new(42u64);
    /// assert_eq!(number.type_witness(), TypeWitness::of::<u64>());
    ///
    /// let text = AnyValue::new("literal");
    /// assert_eq!(text.type_witness(), TypeWitness::of::<String>());
    /// ```
    pub fn new<T: Value>(value: T) -> Self {
        match canonicalize(value) {
            Canonical::Text(text) => Self::from_payload(Box::new(text)),
            Canonical::Cell(cell) => cell,
            Canonical::Plain(value) => Self::from_payload(Box::new(value)),
        }
    }

    /// Creates an `AnyValue` holding `()`, the same as `AnyValue::default()`
    pub fn unit() -> Self {
        Self::from_payload(Box::new(()))
    }

    fn from_payload(payload: Box<dyn ErasedValue>) -> Self {
        Self {
            witness: payload.witness(),
            payload,
        }
    }

    /// Returns the witness of the type currently held
    pub fn type_witness(&self) -> TypeWitness {
        self.witness
    }

    /// Returns the name of the type currently held
    pub fn type_name(&self) -> &'static str {
        self.witness.name()
    }

    /// Check if the contained value is of type T
    pub fn is<T: Any>(&self) -> bool {
        self.witness.is::<T>()
    }

    /// Check if the value is in its default state, holding `()`
    pub fn is_unit(&self) -> bool {
        self.is::<()>()
    }

    /// Verifies that the contained value is of type T without copying it
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn assert_type<T: Any>(&self) -> Result<(), ValueError> {
        if self.is::<T>() {
            Ok(())
        } else {
            Err(self.mismatch::<T>())
        }
    }

    /// Returns a copy of the contained value
    ///
    /// No conversion takes place: a value built from `3i32` cannot be read as
    /// `u16`, and a value built from a string literal is read as `String`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn get<T: Value>(&self) -> Result<T, ValueError> {
        self.get_ref::<T>().cloned()
    }

    /// Borrows the contained value
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn get_ref<T: Value>(&self) -> Result<&T, ValueError> {
        self.downcast_ref::<T>().ok_or_else(|| self.mismatch::<T>())
    }

    /// Mutably borrows the contained value
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn get_mut<T: Value>(&mut self) -> Result<&mut T, ValueError> {
        let actual = self.witness;
        self.payload
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| ValueError::mismatch(actual, TypeWitness::of::<T>()))
    }

    /// Runs a closure with read access to the contained value
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyvalue::{AnyValue, ValueError};
    ///
    /// let value = AnyValue::new(vec![1, 2, 3]);
    /// let len = value.with(|numbers: &Vec<i32>| numbers.len())?;
    /// assert_eq!(len, 3);
    /// # Ok::<(), ValueError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn with<T, F, R>(&self, f: F) -> Result<R, ValueError>
    where
        T: Value,
        F: FnOnce(&T) -> R,
    {
        self.get_ref::<T>().map(f)
    }

    /// Runs a closure with write access to the contained value
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyvalue::{AnyValue, ValueError};
    ///
    /// let mut value = AnyValue::new(vec![1, 2, 3]);
    /// value.with_mut(|numbers: &mut Vec<i32>| numbers.push(4))?;
    /// assert_eq!(value.get::<Vec<i32>>()?, vec![1, 2, 3, 4]);
    /// # Ok::<(), ValueError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TypeMismatch` if the held type is not `T`.
    pub fn with_mut<T, F, R>(&mut self, f: F) -> Result<R, ValueError>
    where
        T: Value,
        F: FnOnce(&mut T) -> R,
    {
        self.get_mut::<T>().map(f)
    }

    /// Stores `value`, replacing the current content
    ///
    /// When the held type already is `T` the payload is overwritten in place.
    /// Otherwise the old payload is dropped and the value is rebound to `T`.
    /// String literals are stored as `String`, and another `AnyValue` is copied
    /// over this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyvalue::AnyValue;
    ///
    /// let mut value = AnyValue::default();
    /// value.set(2.5f64);
    /// value.set(9.9f64);
    /// assert_eq!(value.get::<f64>(), Ok(9.9));
    ///
    /// value.set(true);
    /// assert!(value.is::<bool>());
    /// ```
    pub fn set<T: Value>(&mut self, value: T) {
        match canonicalize(value) {
            Canonical::Text(text) => self.store(text),
            Canonical::Cell(cell) => self.rebind(cell.payload),
            Canonical::Plain(value) => self.store(value),
        }
    }

    /// Replaces the content with `value`
    ///
    /// This is the same operation as [`set`](Self::set): there is one
    /// assignment path, and it only reallocates when the held type changes.
    pub fn assign<T: Value>(&mut self, value: T) {
        self.set(value);
    }

    /// Compares the content against a plain value
    ///
    /// Behaves like comparing against `AnyValue::new(value.clone())` without
    /// building the temporary. Values of a different type are never equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyvalue::AnyValue;
    ///
    /// let value = AnyValue::new(7i32);
    /// assert!(value.equals_value(&7i32));
    /// assert!(!value.equals_value(&7i64));
    /// ```
    pub fn equals_value<T: Value>(&self, value: &T) -> bool {
        let any: &dyn Any = value;
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return *self == **text;
        }
        if let Some(cell) = any.downcast_ref::<AnyValue>() {
            return self == cell;
        }
        self.downcast_ref::<T>().is_some_and(|held| held == value)
    }

    /// Consumes the value and moves the payload out
    ///
    /// # Errors
    ///
    /// Returns the untouched `AnyValue` if the held type is not `T`.
    pub fn downcast<T: Value>(self) -> Result<T, Self> {
        let mut slot: Option<T> = None;
        match self.payload.move_into(&mut slot) {
            Some(payload) => Err(Self::from_payload(payload)),
            None => slot.ok_or_else(Self::unit),
        }
    }

    fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_any().downcast_ref::<T>()
    }

    fn mismatch<T: Any>(&self) -> ValueError {
        ValueError::mismatch(self.witness, TypeWitness::of::<T>())
    }

    fn store<T: Value>(&mut self, value: T) {
        match self.payload.as_any_mut().downcast_mut::<T>() {
            Some(slot) => *slot = value,
            None => self.rebind(Box::new(value)),
        }
    }

    /// Installs a fully built payload; the previous one is dropped afterwards
    fn rebind(&mut self, payload: Box<dyn ErasedValue>) {
        let witness = payload.witness();
        #[cfg(feature = "tracing")]
        {
            if self.witness != witness {
                tracing::trace!(
                    from = self.witness.name(),
                    to = witness.name(),
                    "rebinding AnyValue"
                );
            }
        }
        self.witness = witness;
        self.payload = payload;
    }
}

impl Default for AnyValue {
    fn default() -> Self {
        Self::unit()
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            witness: self.witness,
            payload: self.payload.clone_boxed(),
        }
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        self.witness == other.witness && self.payload.eq_erased(&*other.payload)
    }
}

impl PartialEq<str> for AnyValue {
    fn eq(&self, other: &str) -> bool {
        self.downcast_ref::<String>().is_some_and(|held| held == other)
    }
}

impl PartialEq<&str> for AnyValue {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for AnyValue {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_name", &self.witness.name())
            .finish_non_exhaustive()
    }
}
