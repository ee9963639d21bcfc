use thiserror::Error;

/// Error types for `ByteVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ByteVecError {
    /// Element width given to `ByteVec::new` was zero
    #[error("Element size must be non-zero")]
    ZeroElementSize,
    /// Element slice does not match the vector's fixed element width
    #[error("Element size mismatch: expected {expected} bytes, got {actual} bytes")]
    ElementSizeMismatch {
        /// Element width of the vector
        expected: usize,
        /// Width of the provided element
        actual: usize,
    },
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Range start is after range end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// First index of the range
        start: usize,
        /// Last index of the range (inclusive)
        end: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
    /// Requested capacity in bytes does not fit in `usize`
    #[error("Capacity overflow: {elements} elements of {element_size} bytes")]
    CapacityOverflow {
        /// Requested element capacity
        elements: usize,
        /// Element width
        element_size: usize,
    },
    /// The allocator refused the request
    #[error("Allocation of {bytes} bytes failed")]
    AllocationFailed {
        /// Total number of bytes requested
        bytes: usize,
    },
}
