use nodedump_core::layout::{internal_fixed_len, leaf_fixed_len};
use nodedump_core::{Degree, NodeKind, Region, decode, decode_internal, decode_leaf, render_text};

/// Deterministic hex-ish filler so every offset holds a distinct pattern.
fn descriptor(len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdef";
    (0..len)
        .map(|i| char::from(ALPHABET[(i * 7 + i / 16) % ALPHABET.len()]))
        .collect()
}

#[test]
fn leaf_record_count_and_concatenation() {
    for degree in 1..=12i64 {
        for tail in [0usize, 1, 3, 4, 9, 40] {
            let entries = (degree - 1) as usize;
            let data = descriptor(leaf_fixed_len(entries) + tail);
            let layout = decode_leaf(&data, Degree::new(degree));

            assert_eq!(
                layout.record_count(),
                1 + entries + 2 + 1,
                "degree {degree} tail {tail}"
            );
            assert_eq!(layout.concat_fields(), data, "degree {degree} tail {tail}");
        }
    }
}

#[test]
fn internal_record_count_and_concatenation() {
    for degree in 1..=12i64 {
        for tail in [0usize, 2, 4, 5, 33] {
            let entries = (degree - 1) as usize;
            let data = descriptor(internal_fixed_len(entries) + tail);
            let layout = decode_internal(&data, Degree::new(degree));

            assert_eq!(
                layout.record_count(),
                1 + 1 + 2 * entries + 1,
                "degree {degree} tail {tail}"
            );
            assert_eq!(layout.concat_fields(), data, "degree {degree} tail {tail}");
        }
    }
}

#[test]
fn offsets_are_monotonic_and_contiguous() {
    for kind in [NodeKind::Leaf, NodeKind::Internal] {
        let layout = decode(kind, Degree::new(6), &descriptor(400));
        let mut expected_start = 0;
        for record in layout.records() {
            assert_eq!(record.span.start, expected_start, "{kind} {:?}", record.region);
            match record.span.end {
                Some(end) => {
                    assert!(end > record.span.start);
                    assert_eq!(record.width(), end - record.span.start);
                    expected_start = end;
                }
                None => assert_eq!(record.region, Region::Tail),
            }
        }
    }
}

#[test]
fn tail_chunks_are_four_wide_except_last() {
    let data = descriptor(leaf_fixed_len(2) + 11);
    let layout = decode_leaf(&data, Degree::new(3));
    let tail = layout.records().last().expect("tail record");
    let widths: Vec<usize> = tail.fields.iter().map(String::len).collect();
    assert_eq!(widths, vec![4, 4, 3]);
}

#[test]
fn truncated_input_never_panics() {
    for kind in [NodeKind::Leaf, NodeKind::Internal] {
        for len in 0..130 {
            let data = descriptor(len);
            let layout = decode(kind, Degree::new(4), &data);
            assert_eq!(layout.concat_fields(), data, "{kind} length {len}");
            for record in layout.records() {
                if let Some(end) = record.span.end {
                    assert!(record.width() <= end - record.span.start);
                }
            }
        }
    }
}

#[test]
fn decoding_is_idempotent() {
    let data = descriptor(300);
    for kind in [NodeKind::Leaf, NodeKind::Internal] {
        let first = decode(kind, Degree::new(5), &data);
        let second = decode(kind, Degree::new(5), &data);
        assert_eq!(first, second);
        assert_eq!(render_text(&first), render_text(&second));
    }
}
