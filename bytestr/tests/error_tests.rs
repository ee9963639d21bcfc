use bytestr::{ByteString, ByteStringError};

#[test]
fn test_push_back_rejects_nul_and_non_ascii() {
    let mut s = ByteString::new("ok", 0).unwrap();

    assert_eq!(
        s.push_back(0),
        Err(ByteStringError::InvalidCharacter { byte: 0 })
    );
    assert_eq!(
        s.push_back(0x80),
        Err(ByteStringError::InvalidCharacter { byte: 0x80 })
    );
    assert_eq!(s, "ok");
}

#[test]
fn test_insert_past_end() {
    let mut s = ByteString::new("abc", 0).unwrap();
    assert_eq!(
        s.insert("x", 5),
        Err(ByteStringError::IndexOutOfBounds { index: 5, length: 3 })
    );
}

#[test]
fn test_range_errors() {
    let s = ByteString::new("abc", 0).unwrap();

    assert_eq!(
        s.slice(2, 1),
        Err(ByteStringError::InvalidRange { start: 2, end: 1 })
    );
    assert_eq!(
        s.slice(0, 3),
        Err(ByteStringError::IndexOutOfBounds { index: 3, length: 3 })
    );
}

#[test]
fn test_empty_string_errors() {
    let mut s = ByteString::empty();

    assert_eq!(s.pop_back(), Err(ByteStringError::EmptyString));
    assert_eq!(s.resize(4), Err(ByteStringError::EmptyString));
    assert!(!s.is_allocated());
}

#[test]
fn test_erase_on_unallocated() {
    let mut s = ByteString::empty();
    assert_eq!(
        s.erase(0, 0),
        Err(ByteStringError::IndexOutOfBounds { index: 0, length: 0 })
    );
}

#[test]
fn test_error_messages() {
    let invalid = ByteStringError::InvalidCharacter { byte: 0 };
    assert_eq!(
        format!("{invalid}"),
        "Invalid character: byte 0x00 is not a non-NUL ASCII character"
    );

    let bounds = ByteStringError::IndexOutOfBounds { index: 4, length: 2 };
    assert_eq!(
        format!("{bounds}"),
        "Index out of bounds: index 4 is beyond string length 2"
    );

    assert_eq!(
        format!("{}", ByteStringError::EmptyString),
        "Operation on empty string"
    );
    assert_eq!(
        format!("{}", ByteStringError::AllocationFailed { bytes: 64 }),
        "Allocation of 64 bytes failed"
    );
}

#[test]
fn test_error_clone_and_eq() {
    let error = ByteStringError::InvalidRange { start: 3, end: 1 };
    let cloned = error.clone();

    assert_eq!(error, cloned);
    assert_ne!(error, ByteStringError::CapacityOverflow);
}
