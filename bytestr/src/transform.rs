//! In-place rewrites of the content.
//!
//! Case changes only touch ASCII letters. Operations that lengthen the
//! string grow the buffer once, up front, then shift bytes with
//! `copy_within`.

use crate::core::{check_char, ByteString};
use crate::error::ByteStringError;

impl ByteString {
    pub fn upper_case(&mut self) {
        self.content_mut().make_ascii_uppercase();
    }

    pub fn lower_case(&mut self) {
        self.content_mut().make_ascii_lowercase();
    }

    pub fn swap_case(&mut self) {
        for b in self.content_mut() {
            if b.is_ascii_uppercase() {
                b.make_ascii_lowercase();
            } else {
                b.make_ascii_uppercase();
            }
        }
    }

    /// Uppercases the first character if it is an ASCII lowercase letter.
    /// Any other first character is left as it is.
    pub fn capitalize(&mut self) {
        if let Some(first) = self.content_mut().first_mut() {
            if first.is_ascii_lowercase() {
                first.make_ascii_uppercase();
            }
        }
    }

    /// Lowercases everything, then uppercases the first letter of the
    /// string and every letter that directly follows whitespace.
    ///
    /// Leading digits or punctuation do not use up the first capital.
    ///
    /// ```
    /// # use bytestr::ByteString;
    /// let mut s = ByteString::new("hELLO wORLD", 0).unwrap();
    /// s.title();
    /// assert_eq!(s, "Hello World");
    ///
    /// let mut s = ByteString::new("(hello world", 0).unwrap();
    /// s.title();
    /// assert_eq!(s, "(Hello World");
    /// ```
    pub fn title(&mut self) {
        let mut seen_letter = false;
        let mut after_space = false;
        for b in self.content_mut() {
            let letter = b.is_ascii_alphabetic();
            if letter && (!seen_letter || after_space) {
                b.make_ascii_uppercase();
            } else {
                b.make_ascii_lowercase();
            }
            seen_letter |= letter;
            after_space = b.is_ascii_whitespace();
        }
    }

    /// Strips every leading and trailing `c`.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::InvalidCharacter` if `c` is NUL or non-ASCII.
    pub fn trim(&mut self, c: u8) -> Result<(), ByteStringError> {
        self.trim_right(c)?;
        self.trim_left(c)
    }

    /// Strips every leading `c`.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::InvalidCharacter` if `c` is NUL or non-ASCII.
    #[allow(clippy::indexing_slicing)]
    pub fn trim_left(&mut self, c: u8) -> Result<(), ByteStringError> {
        check_char(c)?;
        let skip = self.as_bytes().iter().take_while(|b| **b == c).count();
        if skip == 0 {
            return Ok(());
        }

        let length = self.length;
        let buffer = self.buffer_mut();
        buffer.copy_within(skip..length, 0);
        buffer[length - skip..length].fill(0);
        self.length -= skip;
        Ok(())
    }

    /// Strips every trailing `c`.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::InvalidCharacter` if `c` is NUL or non-ASCII.
    #[allow(clippy::indexing_slicing)]
    pub fn trim_right(&mut self, c: u8) -> Result<(), ByteStringError> {
        check_char(c)?;
        let skip = self.as_bytes().iter().rev().take_while(|b| **b == c).count();

        let length = self.length;
        self.buffer_mut()[length - skip..length].fill(0);
        self.length -= skip;
        Ok(())
    }

    /// Pads to exactly `width` characters, content centred.
    ///
    /// The left side gets half the padding rounded down. Widths up to the
    /// current length leave the string as it is.
    ///
    /// ```
    /// # use bytestr::ByteString;
    /// let mut s = ByteString::new("ab", 0).unwrap();
    /// s.justified(7, b'*').unwrap();
    /// assert_eq!(s, "**ab***");
    /// ```
    ///
    /// # Errors
    ///
    /// - `ByteStringError::InvalidCharacter` if `fill` is NUL or non-ASCII
    /// - allocation errors from growing
    pub fn justified(&mut self, width: usize, fill: u8) -> Result<(), ByteStringError> {
        let padding = width.saturating_sub(self.length);
        self.pad(padding / 2, padding - padding / 2, fill)
    }

    /// Pads on the right to exactly `width` characters.
    ///
    /// # Errors
    ///
    /// Same as [`ByteString::justified`].
    pub fn justified_left(&mut self, width: usize, fill: u8) -> Result<(), ByteStringError> {
        self.pad(0, width.saturating_sub(self.length), fill)
    }

    /// Pads on the left to exactly `width` characters.
    ///
    /// # Errors
    ///
    /// Same as [`ByteString::justified`].
    pub fn justified_right(&mut self, width: usize, fill: u8) -> Result<(), ByteStringError> {
        self.pad(width.saturating_sub(self.length), 0, fill)
    }

    #[allow(clippy::indexing_slicing)]
    fn pad(&mut self, left: usize, right: usize, fill: u8) -> Result<(), ByteStringError> {
        check_char(fill)?;
        if left == 0 && right == 0 {
            return Ok(());
        }

        let needed = self.needed_for(left + right)?;
        self.ensure_size(needed)?;

        let length = self.length;
        let new_length = length + left + right;
        let buffer = self.buffer_mut();
        buffer.copy_within(0..length, left);
        buffer[..left].fill(fill);
        buffer[left + length..new_length].fill(fill);
        self.length = new_length;
        Ok(())
    }

    /// Replaces every tab with `tab_size` spaces; `0` means 4.
    ///
    /// # Errors
    ///
    /// `ByteStringError::CapacityOverflow` or `ByteStringError::AllocationFailed`;
    /// the string is left unchanged.
    #[allow(clippy::indexing_slicing)]
    pub fn expand_tabs(&mut self, tab_size: usize) -> Result<(), ByteStringError> {
        let tab_size = if tab_size == 0 { 4 } else { tab_size };
        let tabs = self.as_bytes().iter().filter(|b| **b == b'\t').count();
        if tabs == 0 {
            return Ok(());
        }

        let extra = tabs
            .checked_mul(tab_size - 1)
            .ok_or(ByteStringError::CapacityOverflow)?;
        let needed = self.needed_for(extra)?;
        self.ensure_size(needed)?;

        // Walk backwards so unread bytes are never overwritten.
        let length = self.length;
        let new_length = length + extra;
        let buffer = self.buffer_mut();
        let mut write = new_length;
        for read in (0..length).rev() {
            let b = buffer[read];
            if b == b'\t' {
                write -= tab_size;
                buffer[write..write + tab_size].fill(b' ');
            } else {
                write -= 1;
                buffer[write] = b;
            }
        }
        self.length = new_length;
        Ok(())
    }

    /// Makes the content `n` back-to-back copies of itself.
    ///
    /// `0` clears the string and `1` leaves it as it is.
    ///
    /// # Errors
    ///
    /// `ByteStringError::CapacityOverflow` or `ByteStringError::AllocationFailed`;
    /// the string is left unchanged.
    #[allow(clippy::indexing_slicing)]
    pub fn repeat(&mut self, n: usize) -> Result<(), ByteStringError> {
        if n == 0 {
            self.clear();
            return Ok(());
        }
        let length = self.length;
        if n == 1 || length == 0 {
            return Ok(());
        }

        let new_length = length
            .checked_mul(n)
            .ok_or(ByteStringError::CapacityOverflow)?;
        let needed = self.needed_for(new_length - length)?;
        self.ensure_size(needed)?;

        let buffer = self.buffer_mut();
        for copy in 1..n {
            buffer.copy_within(0..length, copy * length);
        }
        self.length = new_length;
        Ok(())
    }
}
