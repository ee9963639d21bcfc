use bytestr::ByteString;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(String),
    Push(u8),
    Pop,
    Insert(String, usize),
    Erase(usize, usize),
    Shrink,
    Clear,
}

fn text() -> impl Strategy<Value = String> {
    "[ -~]{0,12}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        text().prop_map(Op::Append),
        (0x20u8..0x7f).prop_map(Op::Push),
        Just(Op::Pop),
        (text(), 0usize..40).prop_map(|(t, p)| Op::Insert(t, p)),
        (0usize..40, 0usize..40).prop_map(|(a, b)| Op::Erase(a, b)),
        Just(Op::Shrink),
        Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_matches_model_and_stays_terminated(ops in prop::collection::vec(op(), 0..60)) {
        let mut s = ByteString::empty();
        let mut model: Vec<u8> = Vec::new();
        let mut previous_capacity = 0;

        for op in ops {
            let shrinks = matches!(op, Op::Shrink);
            match op {
                Op::Append(t) => {
                    s.append(&t).unwrap();
                    model.extend_from_slice(t.as_bytes());
                }
                Op::Push(c) => {
                    s.push_back(c).unwrap();
                    model.push(c);
                }
                Op::Pop => {
                    prop_assert_eq!(s.pop_back().is_ok(), model.pop().is_some());
                }
                Op::Insert(t, pos) => {
                    let result = s.insert(&t, pos);
                    if pos <= model.len() {
                        prop_assert!(result.is_ok());
                        model.splice(pos..pos, t.bytes());
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Erase(start, end) => {
                    let result = s.erase(start, end);
                    if start <= end && end < model.len() {
                        prop_assert!(result.is_ok());
                        model.drain(start..=end);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Shrink => s.shrink_to_fit(),
                Op::Clear => {
                    s.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(s.as_bytes(), model.as_slice());
            prop_assert_eq!(s.length(), model.len());
            if s.is_allocated() {
                prop_assert!(s.size() > s.length());
            }
            prop_assert!(s.capacity() >= s.length());
            if !shrinks {
                prop_assert!(s.capacity() >= previous_capacity);
            }
            previous_capacity = s.capacity();
        }
    }

    #[test]
    fn prop_copy_round_trip(t in "[a-z ]{0,40}") {
        let src = ByteString::new(&t, 0).unwrap();
        let mut dst = ByteString::empty();

        dst.copy_from(&src).unwrap();

        prop_assert_eq!(&dst, &src);
        prop_assert_eq!(dst.as_bytes(), t.as_bytes());

        dst.upper_case();
        dst.push_back(b'!').unwrap();

        prop_assert_eq!(src.as_bytes(), t.as_bytes());
        prop_assert_ne!(&dst, &src);
        if src.is_allocated() && dst.is_allocated() {
            prop_assert_ne!(src.as_bytes().as_ptr(), dst.as_bytes().as_ptr());
        }
    }

    #[test]
    fn prop_find_agrees_with_str(hay in "[ab]{0,20}", needle in "[ab]{1,3}", start in 0usize..24) {
        let s = ByteString::new(&hay, 0).unwrap();
        let expected = hay.get(start..).and_then(|tail| tail.find(&needle)).map(|i| i + start);

        prop_assert_eq!(s.find(&needle, start), expected);
    }
}
