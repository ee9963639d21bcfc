#![no_std]

//! `LinkStack`: a node-based LIFO stack of byte elements.
//!
//! Each push copies the element into a fresh heap node that points at the
//! previous top. Nothing is shared with the caller or between stacks, so
//! copies are deep and dropping a stack releases every node it owns.
//!
//! ```
//! # use linkstack::LinkStack;
//! let mut stack = LinkStack::new(core::mem::size_of::<i32>()).unwrap();
//! for value in [100i32, 101, 102] {
//!     stack.push(&value.to_ne_bytes()).unwrap();
//! }
//! assert_eq!(stack.len(), 3);
//! assert_eq!(stack.top(), Some(&102i32.to_ne_bytes()[..]));
//!
//! stack.pop().unwrap();
//! assert_eq!(stack.len(), 2);
//! assert_eq!(stack.top(), Some(&101i32.to_ne_bytes()[..]));
//! ```
//!
//! # Element width
//!
//! A stack created with `element_size > 1` only accepts elements of exactly
//! that many bytes. With `element_size == 1` the width is not checked, which
//! makes the stack usable for variable-length byte strings.
//!
//! # Errors
//!
//! Failed operations return [`LinkStackError`] and leave the stack unchanged:
//!
//! ```
//! # use linkstack::{LinkStack, LinkStackError};
//! let mut stack = LinkStack::new(4).unwrap();
//! assert_eq!(stack.pop(), Err(LinkStackError::EmptyStack));
//! assert_eq!(
//!     stack.push(b"ab"),
//!     Err(LinkStackError::ElementSizeMismatch { expected: 4, actual: 2 })
//! );
//! assert!(stack.top().is_none());
//! ```
//!
//! ## `no_std` Compatibility
//!
//! Only `core` and `alloc` are used. Enable the `std` feature to get
//! `std::error::Error` support through `thiserror`:
//! ```toml
//! [dependencies]
//! linkstack = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

pub use crate::core::LinkStack;
pub use error::LinkStackError;
pub use iter::LinkStackIter;
