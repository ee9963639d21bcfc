use thiserror::Error;

/// Error types for `ByteString` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ByteStringError {
    /// Byte cannot be stored as a character (NUL or non-ASCII)
    #[error("Invalid character: byte {byte:#04x} is not a non-NUL ASCII character")]
    InvalidCharacter {
        /// Rejected byte
        byte: u8,
    },
    /// Position is beyond the current string length
    #[error("Index out of bounds: index {index} is beyond string length {length}")]
    IndexOutOfBounds {
        /// Position that was accessed
        index: usize,
        /// Current length of the string
        length: usize,
    },
    /// Range start is after range end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// First position of the range
        start: usize,
        /// Last position of the range (inclusive)
        end: usize,
    },
    /// Operation needs at least one character
    #[error("Operation on empty string")]
    EmptyString,
    /// Resulting length does not fit in `usize`
    #[error("Capacity overflow")]
    CapacityOverflow,
    /// The allocator refused the request
    #[error("Allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Total number of bytes requested
        bytes: usize,
    },
}
