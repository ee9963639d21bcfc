#![no_std]

//! `ByteString`: a growable, null-terminated byte string.
//!
//! The buffer always holds the content followed by at least one NUL byte, so
//! `size() > length()` whenever it is allocated. A fresh string can also be
//! *unallocated*, which is distinct from an allocated empty buffer: the first
//! write into it sizes the buffer from that write alone.
//!
//! Characters are single bytes. `push_back` and the padding operations take
//! only non-NUL ASCII; text slices are accepted as bytes up to their first NUL.
//!
//! # Growth
//!
//! When an append does not fit, the needed byte count is multiplied by
//! [`GROWTH_FACTOR`] (1.5) and rounded up:
//!
//! ```
//! # use bytestr::ByteString;
//! let mut s = ByteString::new("Hey, you.", 0).unwrap();
//! assert_eq!((s.length(), s.size()), (9, 15));
//!
//! s.append(" How are you?").unwrap();
//! assert_eq!(s, "Hey, you. How are you?");
//! assert_eq!((s.length(), s.size()), (22, 35));
//!
//! s.push_back(b'!').unwrap();
//! assert_eq!(s.length(), 23);
//! ```
//!
//! # Searching
//!
//! Lookups return `Option<usize>`; `None` means not found.
//!
//! ```
//! # use bytestr::ByteString;
//! let s: ByteString = "Hello, World!".parse().unwrap();
//! assert_eq!(s.find("World", 0), Some(7));
//! assert_eq!(s.rfind("o", 0), Some(8));
//! assert_eq!(s.find("Mars", 0), None);
//! assert_eq!(s.find_first_of(",!", 0), Some(5));
//! ```
//!
//! # Errors
//!
//! Mutators return [`ByteStringError`] and leave the string unchanged when
//! they fail:
//!
//! ```
//! # use bytestr::{ByteString, ByteStringError};
//! let mut s = ByteString::new("abc", 0).unwrap();
//! assert_eq!(
//!     s.push_back(0),
//!     Err(ByteStringError::InvalidCharacter { byte: 0 })
//! );
//! assert_eq!(
//!     s.insert("x", 4),
//!     Err(ByteStringError::IndexOutOfBounds { index: 4, length: 3 })
//! );
//! assert_eq!(s, "abc");
//! ```
//!
//! ## `no_std` Compatibility
//!
//! Only `core` and `alloc` are used. Enable the `std` feature to get
//! `std::error::Error` support through `thiserror`:
//! ```toml
//! [dependencies]
//! bytestr = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod search;
mod transform;

pub use crate::core::{ByteString, GROWTH_FACTOR};
pub use error::ByteStringError;
