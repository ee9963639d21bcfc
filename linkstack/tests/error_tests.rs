use linkstack::{LinkStack, LinkStackError};

#[test]
fn test_zero_element_size() {
    assert_eq!(
        LinkStack::new(0).unwrap_err(),
        LinkStackError::ZeroElementSize
    );
}

#[test]
fn test_width_mismatch_leaves_stack_unchanged() {
    let mut stack = LinkStack::new(4).unwrap();
    stack.push(b"abcd").unwrap();

    assert_eq!(
        stack.push(b"abcde"),
        Err(LinkStackError::ElementSizeMismatch {
            expected: 4,
            actual: 5
        })
    );
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.top(), Some(&b"abcd"[..]));
}

#[test]
fn test_empty_stack_errors() {
    let mut stack = LinkStack::new(4).unwrap();

    assert_eq!(stack.pop(), Err(LinkStackError::EmptyStack));
    assert_eq!(stack.try_top(), Err(LinkStackError::EmptyStack));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        format!("{}", LinkStackError::ZeroElementSize),
        "Element size must be greater than zero"
    );
    assert_eq!(
        format!(
            "{}",
            LinkStackError::ElementSizeMismatch {
                expected: 8,
                actual: 3
            }
        ),
        "Element size mismatch: expected 8 bytes, got 3 bytes"
    );
    assert_eq!(format!("{}", LinkStackError::StackFull), "Stack is full");
    assert_eq!(
        format!("{}", LinkStackError::EmptyStack),
        "Operation on empty stack"
    );
}
