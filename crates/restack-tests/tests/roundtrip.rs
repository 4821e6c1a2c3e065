//! Operation round-trip properties.
//!
//! Deinterleave and interleave are inverses, and split tiles the frame axis,
//! so composing them must reconstruct the original elements exactly.

use restack_ops::{deinterleave, interleave, split};
use restack_tests::{f32_elements, sequential_f32, sequential_u16};

#[test]
fn deinterleave_then_interleave_reconstructs() {
    let original = sequential_f32("scan", vec![6, 4, 4]);

    let channels = deinterleave(&original, 2).unwrap();
    let rebuilt = interleave(&channels[0], &channels[1]).unwrap();

    assert_eq!(rebuilt.shape(), original.shape());
    assert_eq!(rebuilt.samples(), original.samples());
}

#[test]
fn interleave_then_deinterleave_yields_inputs() {
    let a = sequential_u16("a", vec![3, 4, 4], 0);
    let b = sequential_u16("b", vec![3, 4, 4], 1000);

    let merged = interleave(&a, &b).unwrap();
    assert_eq!(merged.shape(), &[6, 4, 4]);

    let channels = deinterleave(&merged, 2).unwrap();
    assert_eq!(channels[0].samples(), a.samples());
    assert_eq!(channels[1].samples(), b.samples());
}

#[test]
fn split_parts_concatenate_to_original() {
    let original = sequential_f32("series", vec![9, 4, 4]);

    let parts = split(&original, 3).unwrap();
    assert_eq!(parts.len(), 3);

    let mut rebuilt = Vec::new();
    for part in &parts {
        assert_eq!(part.shape(), &[3, 4, 4]);
        rebuilt.extend(f32_elements(part));
    }
    assert_eq!(rebuilt, f32_elements(&original));
}

#[test]
fn deinterleave_many_channels_then_pairwise_interleave() {
    // Channel order must be stable: 4-way deinterleave then pairwise
    // re-interleave groups frames {0,1,4,5} and {2,3,6,7}.
    let original = sequential_f32("scan", vec![8, 2]);

    let four = deinterleave(&original, 4).unwrap();
    let pair_a = interleave(&four[0], &four[1]).unwrap();
    let pair_b = interleave(&four[2], &four[3]).unwrap();

    assert_eq!(
        f32_elements(&pair_a),
        vec![0.0, 1.0, 2.0, 3.0, 8.0, 9.0, 10.0, 11.0]
    );
    assert_eq!(
        f32_elements(&pair_b),
        vec![4.0, 5.0, 6.0, 7.0, 12.0, 13.0, 14.0, 15.0]
    );
}

#[test]
fn labels_compose_across_operations() {
    let original = sequential_f32("scan", vec![4, 2]);

    let channels = deinterleave(&original, 2).unwrap();
    let merged = interleave(&channels[0], &channels[1]).unwrap();
    assert_eq!(merged.name(), "Interleaved scan C0 and scan C1");

    let parts = split(&merged, 2).unwrap();
    assert_eq!(parts[0].name(), "Interleaved scan C0 and scan C1 Sub0");
}
