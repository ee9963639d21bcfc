use alloc::boxed::Box;
use core::fmt;

use crate::error::LinkStackError;
use crate::iter::LinkStackIter;

pub(crate) struct Node {
    pub(crate) element: Box<[u8]>,
    pub(crate) next: Option<Box<Node>>,
}

/// A LIFO stack of byte elements, one heap node per element.
///
/// Pushed elements are copied into storage owned by the stack. When
/// `element_size > 1` every element must be exactly that wide; a width of 1
/// accepts elements of any length.
pub struct LinkStack {
    head: Option<Box<Node>>,
    len: usize,
    element_size: usize,
}

impl LinkStack {
    /// Creates an empty stack.
    ///
    /// # Errors
    ///
    /// Returns `LinkStackError::ZeroElementSize` if `element_size` is 0.
    pub fn new(element_size: usize) -> Result<Self, LinkStackError> {
        if element_size == 0 {
            return Err(LinkStackError::ZeroElementSize);
        }
        Ok(Self {
            head: None,
            len: 0,
            element_size,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`LinkStack::len`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Copies `element` onto the top of the stack.
    ///
    /// # Errors
    ///
    /// - `LinkStackError::ElementSizeMismatch` if the stack has a fixed width
    ///   and `element` does not match it
    /// - `LinkStackError::StackFull` if the node count cannot grow
    pub fn push(&mut self, element: &[u8]) -> Result<(), LinkStackError> {
        if self.element_size > 1 && element.len() != self.element_size {
            return Err(LinkStackError::ElementSizeMismatch {
                expected: self.element_size,
                actual: element.len(),
            });
        }
        if self.len == usize::MAX {
            return Err(LinkStackError::StackFull);
        }

        self.head = Some(Box::new(Node {
            element: Box::from(element),
            next: self.head.take(),
        }));
        self.len += 1;
        Ok(())
    }

    /// Removes the top element.
    ///
    /// # Errors
    ///
    /// Returns `LinkStackError::EmptyStack` if there is nothing to remove.
    pub fn pop(&mut self) -> Result<(), LinkStackError> {
        let node = self.head.take().ok_or(LinkStackError::EmptyStack)?;
        self.head = node.next;
        self.len -= 1;
        Ok(())
    }

    /// The top element, or `None` when the stack is empty.
    #[must_use]
    pub fn top(&self) -> Option<&[u8]> {
        self.head.as_deref().map(|node| &*node.element)
    }

    /// The top element.
    ///
    /// # Errors
    ///
    /// Returns `LinkStackError::EmptyStack` if the stack is empty.
    pub fn try_top(&self) -> Result<&[u8], LinkStackError> {
        self.top().ok_or(LinkStackError::EmptyStack)
    }

    /// Drops every node. Calling it on an empty stack does nothing.
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.len = 0;
    }

    /// Replaces the content with a copy of `src`, element width included.
    ///
    /// The copy shares no nodes with `src` and keeps its order.
    pub fn copy_from(&mut self, src: &LinkStack) {
        self.clear();

        let mut tail = &mut self.head;
        for element in src {
            let node = tail.insert(Box::new(Node {
                element: Box::from(element),
                next: None,
            }));
            tail = &mut node.next;
        }
        self.len = src.len;
        self.element_size = src.element_size;
    }

    /// Takes over the nodes of `src`, leaving it empty with the same width.
    pub fn move_from(&mut self, src: &mut LinkStack) {
        self.clear();
        self.head = src.head.take();
        self.len = core::mem::take(&mut src.len);
        self.element_size = src.element_size;
    }

    pub fn swap_with(&mut self, other: &mut LinkStack) {
        core::mem::swap(self, other);
    }

    /// Iterates from the top of the stack down.
    #[must_use]
    pub fn iter(&self) -> LinkStackIter<'_> {
        LinkStackIter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl Drop for LinkStack {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkStack {
    fn clone(&self) -> Self {
        let mut copy = Self {
            head: None,
            len: 0,
            element_size: self.element_size,
        };
        copy.copy_from(self);
        copy
    }
}

impl PartialEq for LinkStack {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl Eq for LinkStack {}

impl fmt::Debug for LinkStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkStack")
            .field("element_size", &self.element_size)
            .field("len", &self.len)
            .field("top", &self.top())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(stack: &LinkStack) -> usize {
        let mut count = 0;
        let mut node = stack.head.as_deref();
        while let Some(n) = node {
            count += 1;
            node = n.next.as_deref();
        }
        count
    }

    #[test]
    fn test_len_matches_node_count() {
        let mut stack = LinkStack::new(2).unwrap();
        for _ in 0..5 {
            stack.push(b"ab").unwrap();
        }
        stack.pop().unwrap();

        assert_eq!(depth(&stack), 4);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn test_copy_shares_no_nodes() {
        let mut src = LinkStack::new(1).unwrap();
        src.push(b"a").unwrap();
        src.push(b"b").unwrap();

        let copy = src.clone();
        let src_top = src.head.as_deref().map(|n| n as *const Node);
        let copy_top = copy.head.as_deref().map(|n| n as *const Node);

        assert_ne!(src_top, copy_top);
        assert_eq!(depth(&copy), 2);
    }

    #[test]
    fn test_deep_stack_drops_without_recursion() {
        let mut stack = LinkStack::new(1).unwrap();
        for _ in 0..200_000 {
            stack.push(b"x").unwrap();
        }
        drop(stack);
    }
}
