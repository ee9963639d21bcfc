#![no_std]

//! `ByteVec`: a contiguous, type-erased growable array of fixed-width elements.
//!
//! Every element is an opaque run of `element_size` bytes, fixed when the vector
//! is created. Each write checks the width of the slice it is given, so the
//! only "type" the vector knows about is that width.
//!
//! Buffer layout: `capacity * element_size` contiguous bytes. Slots in
//! `[len, capacity)` are always zero-filled.
//!
//! # Growth
//!
//! Whenever the capacity has to increase, the requested element count is
//! multiplied by [`GROWTH_FACTOR`] (1.5) and truncated, which keeps the
//! amortized cost of `push_back` constant. The capacity only shrinks through
//! [`ByteVec::shrink_to_fit`].
//!
//! ```
//! # use bytevec::ByteVec;
//! let mut vec = ByteVec::new(core::mem::size_of::<i32>(), 0).unwrap();
//! vec.push_back(&5i32.to_ne_bytes()).unwrap();
//! vec.push_back(&10i32.to_ne_bytes()).unwrap();
//! vec.push_back(&15i32.to_ne_bytes()).unwrap();
//!
//! vec.insert(&30i32.to_ne_bytes(), 2).unwrap();
//!
//! let values: Vec<i32> = vec
//!     .iter()
//!     .map(|e| i32::from_ne_bytes(e.try_into().unwrap()))
//!     .collect();
//! assert_eq!(values, [5, 10, 30, 15]);
//! assert!(vec.len() <= vec.capacity());
//! ```
//!
//! # Errors
//!
//! Nothing panics on bad input. Wrong element widths, out-of-range indices and
//! allocation failures are reported as [`ByteVecError`] and leave the vector
//! untouched. Plain accessors such as [`ByteVec::at`] return `None` instead;
//! their `try_` variants return the error.
//!
//! ```
//! # use bytevec::{ByteVec, ByteVecError};
//! let mut vec = ByteVec::new(4, 0).unwrap();
//! assert_eq!(
//!     vec.push_back(b"abc"),
//!     Err(ByteVecError::ElementSizeMismatch { expected: 4, actual: 3 })
//! );
//! assert!(vec.at(0).is_none());
//! assert_eq!(vec.try_back(), Err(ByteVecError::EmptyVector));
//! ```
//!
//! ## `no_std` Compatibility
//!
//! Only `core` and `alloc` are used. Enable the `std` feature to get
//! `std::error::Error` support through `thiserror`:
//! ```toml
//! [dependencies]
//! bytevec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

pub use crate::core::{ByteVec, GROWTH_FACTOR};
pub use error::ByteVecError;
pub use iter::ByteVecIter;
