//! # sovran-anyvalue
//!
//! A single-value, type-erased container with runtime type checks.
//!
//! `sovran-anyvalue` provides [`AnyValue`], one uniform type that can hold a value
//! of any type that is `Clone + PartialEq + Send + Sync + 'static`. The concrete
//! type is captured when the value is stored; every typed access afterwards is
//! checked at runtime against it. This is useful for heterogeneous collections,
//! property bags, and other places where the set of stored types is open-ended.
//!
//! ## Key Features
//!
//! - **Type-safe**: Typed access fails with [`ValueError::TypeMismatch`] instead of
//!   reinterpreting memory
//! - **Value semantics**: Cloning deep-copies the payload; nothing is shared
//! - **Comparable**: Two values are equal when they hold the same type and equal
//!   payloads; different types are simply not equal
//! - **Never empty**: A default value holds `()`
//! - **Text literals**: `&'static str` is stored as `String`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_anyvalue::{AnyValue, ValueError};
//!
//! fn main() -> Result<(), ValueError> {
//!     let value = AnyValue::new(3i32);
//!
//!     // Retrieve values in a type-safe way
//!     let number = value.get::<i32>()?;
//!     println!("Number: {}", number);
//!
//!     // No implicit conversions
//!     assert!(value.get::<u16>().is_err());
//!     assert!(value.get::<bool>().is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Changing the Held Type
//!
//! ```rust
//! use sovran_anyvalue::{AnyValue, TypeWitness, ValueError};
//!
//! fn main() -> Result<(), ValueError> {
//!     let mut value = AnyValue::new("some text");
//!     assert_eq!(value.type_witness(), TypeWitness::of::<String>());
//!
//!     // Same type: overwritten in place
//!     value.set(String::from("other text"));
//!
//!     // Different type: the old payload is dropped
//!     value.set(true);
//!     value.assert_type::<bool>()?;
//!     assert!(value.get::<String>().is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Heterogeneous Collections
//!
//! ```rust
//! use sovran_anyvalue::{AnyValue, ValueError};
//!
//! fn main() -> Result<(), ValueError> {
//!     let list = AnyValue::new(vec![AnyValue::new(44), AnyValue::new("x")]);
//!
//!     let items = list.get::<Vec<AnyValue>>()?;
//!     assert_eq!(items[0].get::<i32>()?, 44);
//!     assert_eq!(items[1].get::<String>()?, "x");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_anyvalue::{AnyValue, ValueError};
//!
//! let value = AnyValue::new(vec![1u8, 2, 3]);
//!
//! match value.get::<String>() {
//!     Ok(text) => println!("Text: {}", text),
//!     Err(ValueError::TypeMismatch { actual, requested }) => {
//!         println!("Holds {}, not {}", actual, requested)
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emits `tracing` events when a value is rebound to a new
//!   type and when a typed access fails.
//! - `release-tool`: builds the `release` maintenance binary.

mod any_value;
mod erased;
mod error;
mod witness;


pub use any_value::AnyValue;
pub use erased::Value;
pub use error::ValueError;
pub use witness::TypeWitness;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
