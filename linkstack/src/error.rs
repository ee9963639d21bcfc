use thiserror::Error;

/// Error types for `LinkStack` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LinkStackError {
    /// Stack created with an element size of zero
    #[error("Element size must be greater than zero")]
    ZeroElementSize,
    /// Pushed element does not have the stack's element width
    #[error("Element size mismatch: expected {expected} bytes, got {actual} bytes")]
    ElementSizeMismatch {
        /// Element width of the stack
        expected: usize,
        /// Width of the rejected element
        actual: usize,
    },
    /// Node count is at its maximum
    #[error("Stack is full")]
    StackFull,
    /// Operation attempted on an empty stack
    #[error("Operation on empty stack")]
    EmptyStack,
}
