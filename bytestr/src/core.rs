use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::ByteStringError;

/// Multiplier applied to the needed byte count whenever the buffer grows.
pub const GROWTH_FACTOR: f64 = 1.5;

/// Scales `bytes` by [`GROWTH_FACTOR`], rounding up.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn grown(bytes: usize) -> usize {
    let scaled = bytes as f64 * GROWTH_FACTOR;
    let truncated = scaled as usize;
    if (truncated as f64) < scaled {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}

/// Text stops at the first NUL, like any null-terminated string.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|b| *b == 0) {
        Some(end) => bytes.get(..end).unwrap_or(bytes),
        None => bytes,
    }
}

pub(crate) fn check_char(byte: u8) -> Result<(), ByteStringError> {
    if byte != 0 && byte.is_ascii() {
        Ok(())
    } else {
        Err(ByteStringError::InvalidCharacter { byte })
    }
}

/// Backing store of a `ByteString`.
///
/// `Unallocated` is a real state, not a zero-length buffer: the first write
/// into it sizes the buffer from that write alone.
#[derive(Clone, Default)]
pub(crate) enum Storage {
    #[default]
    Unallocated,
    /// `buffer.len()` is the allocated size. Bytes from the terminator on are zero.
    Allocated(Vec<u8>),
}

/// A growable, null-terminated byte string.
///
/// `size()` counts allocated bytes including the terminator slot, so
/// `capacity() == size() - 1` usable characters once allocated.
#[derive(Clone, Default)]
pub struct ByteString {
    pub(crate) storage: Storage,
    pub(crate) length: usize,
}

impl ByteString {
    /// Creates a string holding `text` (up to its first NUL).
    ///
    /// - Non-empty text: the buffer is `max(requested_size, ceil(len * 1.5) + 1)` bytes.
    /// - Empty text and `requested_size == 0`: nothing is allocated.
    /// - Empty text otherwise: an empty buffer with room for `requested_size` characters.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationFailed` if the buffer cannot be allocated.
    pub fn new(text: impl AsRef<[u8]>, requested_size: usize) -> Result<Self, ByteStringError> {
        let text = until_nul(text.as_ref());
        let mut string = Self::empty();

        if !text.is_empty() {
            let size = requested_size.max(grown(text.len()).saturating_add(1));
            string.realloc(size)?;
            string.write_at(0, text);
            string.length = text.len();
        } else if requested_size > 0 {
            string.realloc(requested_size.saturating_add(1))?;
        }
        Ok(string)
    }

    /// An unallocated, empty string.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the allocated size to exactly `size` bytes.
    ///
    /// Callers keep `size > length`. New bytes are zero. On error nothing changes.
    pub(crate) fn realloc(&mut self, size: usize) -> Result<(), ByteStringError> {
        if let Storage::Allocated(buffer) = &mut self.storage {
            if size > buffer.len() {
                buffer
                    .try_reserve_exact(size - buffer.len())
                    .map_err(|_| ByteStringError::AllocationFailed { bytes: size })?;
                buffer.resize(size, 0);
            } else {
                buffer.truncate(size);
                buffer.shrink_to_fit();
            }
            return Ok(());
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| ByteStringError::AllocationFailed { bytes: size })?;
        buffer.resize(size, 0);
        self.storage = Storage::Allocated(buffer);
        Ok(())
    }

    /// Grows by the growth factor when fewer than `needed` bytes are allocated.
    pub(crate) fn ensure_size(&mut self, needed: usize) -> Result<(), ByteStringError> {
        if self.size() < needed {
            self.realloc(grown(needed))?;
        }
        Ok(())
    }

    pub(crate) fn needed_for(&self, additional: usize) -> Result<usize, ByteStringError> {
        self.length
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(ByteStringError::CapacityOverflow)
    }

    pub(crate) fn buffer(&self) -> &[u8] {
        match &self.storage {
            Storage::Allocated(buffer) => buffer,
            Storage::Unallocated => &[],
        }
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Allocated(buffer) => buffer,
            Storage::Unallocated => &mut [],
        }
    }

    // The caller has made room for `pos + bytes.len()` bytes.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn write_at(&mut self, pos: usize, bytes: &[u8]) {
        self.buffer_mut()[pos..pos + bytes.len()].copy_from_slice(bytes);
    }

    /// Mutable view of the characters, terminator excluded.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn content_mut(&mut self) -> &mut [u8] {
        let length = self.length;
        &mut self.buffer_mut()[..length]
    }

    /// Number of characters before the terminator.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Allocated bytes, terminator slot included. Zero when unallocated.
    #[must_use]
    pub fn size(&self) -> usize {
        self.buffer().len()
    }

    /// Characters that fit without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.size().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn is_allocated(&self) -> bool {
        matches!(self.storage, Storage::Allocated(_))
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer()[..self.length]
    }

    /// The content as `&str`, if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Copies the content into `out` followed by a NUL, truncating to fit.
    ///
    /// Returns the number of characters copied, terminator excluded.
    #[allow(clippy::indexing_slicing)]
    pub fn to_array(&self, out: &mut [u8]) -> usize {
        let Some(room) = out.len().checked_sub(1) else {
            return 0;
        };
        let count = self.length.min(room);
        out[..count].copy_from_slice(&self.as_bytes()[..count]);
        out[count] = 0;
        count
    }

    #[must_use]
    pub fn at(&self, pos: usize) -> Option<u8> {
        self.as_bytes().get(pos).copied()
    }

    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    #[must_use]
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Replaces the content with `text`.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationFailed` if growing fails; the
    /// string is left unchanged.
    pub fn assign(&mut self, text: impl AsRef<[u8]>) -> Result<(), ByteStringError> {
        let text = until_nul(text.as_ref());
        if self.is_allocated() {
            self.ensure_size(text.len().saturating_add(1))?;
            self.clear();
        }
        self.append(text)
    }

    /// Appends `text` (up to its first NUL).
    ///
    /// An unallocated string gets a buffer of `ceil(len * 1.5)` bytes; an
    /// allocated one grows to `ceil(needed * 1.5)` when the text does not fit.
    ///
    /// # Errors
    ///
    /// `ByteStringError::CapacityOverflow` or `ByteStringError::AllocationFailed`;
    /// the string is left unchanged.
    pub fn append(&mut self, text: impl AsRef<[u8]>) -> Result<(), ByteStringError> {
        let text = until_nul(text.as_ref());
        if text.is_empty() {
            return Ok(());
        }

        if self.is_allocated() {
            let needed = self.needed_for(text.len())?;
            self.ensure_size(needed)?;
        } else {
            self.realloc(grown(text.len()))?;
        }
        self.write_at(self.length, text);
        self.length += text.len();
        Ok(())
    }

    /// Appends the content of another string.
    ///
    /// # Errors
    ///
    /// Same as [`ByteString::append`].
    pub fn join(&mut self, other: &ByteString) -> Result<(), ByteStringError> {
        self.append(other.as_bytes())
    }

    /// Appends one character.
    ///
    /// # Errors
    ///
    /// - `ByteStringError::InvalidCharacter` for NUL and non-ASCII bytes
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn push_back(&mut self, c: u8) -> Result<(), ByteStringError> {
        check_char(c)?;

        if !self.is_allocated() {
            self.realloc(2)?;
        } else if self.length == self.capacity() {
            let needed = self.needed_for(1)?;
            self.realloc(grown(self.size()).max(needed))?;
        }
        let length = self.length;
        self.buffer_mut()[length] = c;
        self.length += 1;
        Ok(())
    }

    /// Removes the last character.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::EmptyString` if there is nothing to remove.
    #[allow(clippy::indexing_slicing)]
    pub fn pop_back(&mut self) -> Result<(), ByteStringError> {
        if self.length == 0 {
            return Err(ByteStringError::EmptyString);
        }
        self.length -= 1;
        let length = self.length;
        self.buffer_mut()[length] = 0;
        Ok(())
    }

    /// Inserts `text` before position `pos`; `pos == length()` appends.
    ///
    /// # Errors
    ///
    /// - `ByteStringError::IndexOutOfBounds` if `pos > length()`
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn insert(&mut self, text: impl AsRef<[u8]>, pos: usize) -> Result<(), ByteStringError> {
        let text = until_nul(text.as_ref());
        if pos > self.length {
            return Err(ByteStringError::IndexOutOfBounds {
                index: pos,
                length: self.length,
            });
        }
        if text.is_empty() {
            return Ok(());
        }

        let needed = self.needed_for(text.len())?;
        self.ensure_size(needed)?;

        let length = self.length;
        self.buffer_mut()
            .copy_within(pos..length, pos + text.len());
        self.write_at(pos, text);
        self.length += text.len();
        Ok(())
    }

    /// Removes the characters in the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// - `ByteStringError::InvalidRange` if `start > end`
    /// - `ByteStringError::IndexOutOfBounds` if `end >= length()`
    #[allow(clippy::indexing_slicing)]
    pub fn erase(&mut self, start: usize, end: usize) -> Result<(), ByteStringError> {
        self.check_range(start, end)?;

        let length = self.length;
        let new_length = length - (end - start + 1);
        let buffer = self.buffer_mut();
        buffer.copy_within(end + 1..length, start);
        buffer[new_length..length].fill(0);
        self.length = new_length;
        Ok(())
    }

    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<(), ByteStringError> {
        if start > end {
            return Err(ByteStringError::InvalidRange { start, end });
        }
        if end >= self.length {
            return Err(ByteStringError::IndexOutOfBounds {
                index: end,
                length: self.length,
            });
        }
        Ok(())
    }

    /// Overwrites characters starting at `pos` with `text`.
    ///
    /// The written run must end within the current content.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::IndexOutOfBounds` if it would not.
    pub fn replace(&mut self, text: impl AsRef<[u8]>, pos: usize) -> Result<(), ByteStringError> {
        let text = until_nul(text.as_ref());
        let end = pos.saturating_add(text.len());
        if end > self.length {
            return Err(ByteStringError::IndexOutOfBounds {
                index: end,
                length: self.length,
            });
        }
        self.write_at(pos, text);
        Ok(())
    }

    /// Grows the allocation to exactly `size` bytes when it is smaller.
    ///
    /// Allocates an unallocated string. New bytes are zero.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationFailed` if growing fails.
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteStringError> {
        if size > self.size() {
            self.realloc(size)?;
        }
        Ok(())
    }

    /// Shrinks the allocation to the content plus its terminator.
    pub fn shrink_to_fit(&mut self) {
        let size = self.length + 1;
        if let Storage::Allocated(buffer) = &mut self.storage {
            if buffer.len() > size {
                buffer.truncate(size);
                buffer.shrink_to_fit();
            }
        }
    }

    /// Changes the length to `length`.
    ///
    /// Growing repeats the current last character; shrinking erases the tail.
    ///
    /// # Errors
    ///
    /// - `ByteStringError::EmptyString` when growing a string with no last character
    /// - allocation errors from growing
    #[allow(clippy::indexing_slicing)]
    pub fn resize(&mut self, length: usize) -> Result<(), ByteStringError> {
        let old_length = self.length;
        if length > old_length {
            let last = self.back().ok_or(ByteStringError::EmptyString)?;
            self.ensure_size(length.saturating_add(1))?;
            self.buffer_mut()[old_length..length].fill(last);
        } else {
            self.buffer_mut()[length..old_length].fill(0);
        }
        self.length = length;
        Ok(())
    }

    /// Removes every character, keeping the allocation.
    pub fn clear(&mut self) {
        self.content_mut().fill(0);
        self.length = 0;
    }

    /// New string holding the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Same range errors as [`ByteString::erase`], plus allocation errors.
    #[allow(clippy::indexing_slicing)]
    pub fn slice(&self, start: usize, end: usize) -> Result<ByteString, ByteStringError> {
        self.check_range(start, end)?;
        Self::new(&self.as_bytes()[start..=end], 0)
    }

    /// Largest byte in the half-open range `[start, end)`.
    #[must_use]
    pub fn max_char(&self, start: usize, end: usize) -> Option<u8> {
        self.as_bytes().get(start..end)?.iter().copied().max()
    }

    /// Smallest byte in the half-open range `[start, end)`.
    #[must_use]
    pub fn min_char(&self, start: usize, end: usize) -> Option<u8> {
        self.as_bytes().get(start..end)?.iter().copied().min()
    }

    /// Replaces the content with a copy of `src`.
    ///
    /// The buffer grows to at least `src.size()` first.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationFailed` if growing fails; `self`
    /// is left unchanged.
    pub fn copy_from(&mut self, src: &ByteString) -> Result<(), ByteStringError> {
        if src.is_allocated() {
            self.reserve(src.size())?;
        }
        self.clear();
        self.write_at(0, src.as_bytes());
        self.length = src.length;
        Ok(())
    }

    /// Takes over `src`'s buffer. `src` is left unallocated.
    pub fn move_from(&mut self, src: &mut ByteString) {
        *self = core::mem::take(src);
    }

    /// Exchanges the content of two strings.
    pub fn swap_with(&mut self, other: &mut ByteString) {
        core::mem::swap(self, other);
    }

    /// Compares at most `other.length()` leading bytes, like `strncmp`.
    ///
    /// A string that is a strict prefix of `other` orders before it; a string
    /// that merely starts with `other` compares equal.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn compare(&self, other: &ByteString) -> Ordering {
        let bound = self.length.min(other.length);
        self.as_bytes()[..bound].cmp(other.as_bytes())
    }
}

impl FromStr for ByteString {
    type Err = ByteStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, 0)
    }
}

impl fmt::Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field(
                "content",
                &format_args!("\"{}\"", self.as_bytes().escape_ascii()),
            )
            .field("length", &self.length)
            .field("size", &self.size())
            .field("allocated", &self.is_allocated())
            .finish()
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
