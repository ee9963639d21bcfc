use bytevec::ByteVec;

fn pairs(items: &[&[u8; 2]]) -> ByteVec {
    let mut vec = ByteVec::new(2, 0).unwrap();
    for item in items {
        vec.push_back(&item[..]).unwrap();
    }
    vec
}

#[test]
fn test_iterator_empty_vector() {
    let vec = ByteVec::new(2, 4).unwrap();

    let mut iter = vec.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_iterator_populated_vector() {
    let vec = pairs(&[b"he", b"wo", b"te"]);

    let mut iter = vec.into_iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&b"he"[..]));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    assert_eq!(iter.next(), Some(&b"wo"[..]));
    assert_eq!(iter.next(), Some(&b"te"[..]));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_stops_at_length_not_capacity() {
    let mut vec = ByteVec::new(2, 10).unwrap();
    vec.push_back(b"ab").unwrap();

    assert_eq!(vec.iter().count(), 1);
}

#[test]
fn test_reverse_iteration() {
    let vec = pairs(&[b"a1", b"b2", b"c3"]);

    let collected: Vec<_> = vec.iter().rev().collect();
    assert_eq!(collected, vec![&b"c3"[..], &b"b2"[..], &b"a1"[..]]);
}

#[test]
fn test_iterator_from_both_ends() {
    let vec = pairs(&[b"a1", b"b2", b"c3", b"d4"]);

    let mut iter = vec.iter();
    assert_eq!(iter.next(), Some(&b"a1"[..]));
    assert_eq!(iter.next_back(), Some(&b"d4"[..]));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&b"b2"[..]));
    assert_eq!(iter.next_back(), Some(&b"c3"[..]));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_for_loop_and_clone() {
    let vec = pairs(&[b"xx", b"yy"]);

    let mut total = 0;
    for element in &vec {
        assert_eq!(element.len(), 2);
        total += 1;
    }
    assert_eq!(total, 2);

    let iter = vec.iter();
    let copy = iter.clone();
    assert_eq!(iter.count(), copy.count());
}
