//! A growable array list and an in-place quicksort operating on it.
//!
//! [`DynArray<T>`] manages its own contiguous backing buffer: explicit
//! capacity, geometric growth, checked indexed access and hand-written
//! overlapping shifts for insert/remove. [`quicksort`] sorts such an array
//! in place through its public `get`/`set` contract alone, using a Hoare
//! partition with a midpoint pivot.
//!
//! ```
//! use dynarray::{quicksort, DynArray};
//!
//! let mut arr = DynArray::new();
//! arr.push(3);
//! arr.push(1);
//! arr.push(2);
//!
//! quicksort::sort(&mut arr).unwrap();
//!
//! assert_eq!(arr.get(0), Ok(&1));
//! assert_eq!(arr.get(1), Ok(&2));
//! assert_eq!(arr.get(2), Ok(&3));
//! ```
//!
//! [`DynArray<T>`]: DynArray

pub mod array;
pub mod error;
pub mod patterns;
pub mod quicksort;

pub use array::DynArray;
pub use error::{Error, Result};
