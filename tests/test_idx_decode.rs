// Tests for the IDX decoder: header handling, pixel normalization, one-hot
// label encoding, and the error paths for truncated or mismatched files.

use std::io::Cursor;

use magnetite_nn::{decode_images, decode_labels, load_examples, DataError, Example};

/// Builds a synthetic IDX3 image file: 16-byte header followed by the given
/// pixel bytes.
fn image_file(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0803u32.to_be_bytes());
    bytes.extend_from_slice(&count.to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&cols.to_be_bytes());
    bytes.extend_from_slice(pixels);
    bytes
}

/// Builds a synthetic IDX1 label file: 8-byte header followed by label bytes.
fn label_file(count: u32, labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0801u32.to_be_bytes());
    bytes.extend_from_slice(&count.to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

#[test]
fn decodes_exact_count_and_length() {
    let pixels: Vec<u8> = (0..3 * 4).map(|i| i as u8).collect();
    let file = image_file(3, 2, 2, &pixels);

    let images = decode_images(&mut Cursor::new(&file), 3, 4).unwrap();

    assert_eq!(images.len(), 3);
    for image in &images {
        assert_eq!(image.len(), 4);
        assert!(image.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}

#[test]
fn normalizes_pixels_by_256() {
    // 128/256 must be exactly 0.5 and 255/256 exactly 0.99609375; dividing by
    // 255 instead would give 1.0 for the last pixel.
    let file = image_file(1, 1, 3, &[0, 128, 255]);

    let images = decode_images(&mut Cursor::new(&file), 1, 3).unwrap();

    assert_eq!(images[0], vec![0.0, 0.5, 0.99609375]);
}

#[test]
fn decoding_a_prefix_of_a_larger_file_is_allowed() {
    let pixels: Vec<u8> = vec![7; 5 * 4];
    let file = image_file(5, 2, 2, &pixels);

    let images = decode_images(&mut Cursor::new(&file), 2, 4).unwrap();
    assert_eq!(images.len(), 2);
}

#[test]
fn cursor_advances_past_exactly_the_consumed_items() {
    let mut pixels: Vec<u8> = vec![0; 4];
    pixels.extend_from_slice(&[9, 9, 9, 9]);
    let file = image_file(2, 2, 2, &pixels);
    let mut cursor = Cursor::new(&file);

    decode_images(&mut cursor, 1, 4).unwrap();

    // 16 header bytes + one item of 4 pixels.
    assert_eq!(cursor.position(), 20);
}

#[test]
fn rejects_geometry_disagreeing_with_feature_dim() {
    let file = image_file(1, 28, 28, &[0; 784]);

    let err = decode_images(&mut Cursor::new(&file), 1, 100).unwrap_err();
    match err {
        DataError::HeaderMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 100);
            assert_eq!(actual, 784);
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn rejects_requesting_more_items_than_declared() {
    let file = image_file(2, 1, 2, &[0; 4]);

    let err = decode_images(&mut Cursor::new(&file), 3, 2).unwrap_err();
    assert!(matches!(err, DataError::HeaderMismatch { .. }));
}

#[test]
fn truncated_pixel_data_is_an_error_not_a_short_vector() {
    // Header declares 2 items of 4 pixels but only 6 pixel bytes follow.
    let file = image_file(2, 2, 2, &[1, 2, 3, 4, 5, 6]);

    let err = decode_images(&mut Cursor::new(&file), 2, 4).unwrap_err();
    match err {
        DataError::TruncatedStream { offset, needed, got } => {
            assert_eq!(offset, 22);
            assert_eq!(needed, 8);
            assert_eq!(got, 6);
        }
        other => panic!("expected TruncatedStream, got {other:?}"),
    }
}

#[test]
fn truncated_header_is_an_error() {
    let err = decode_images(&mut Cursor::new(&[0u8; 10]), 1, 4).unwrap_err();
    assert!(matches!(err, DataError::TruncatedStream { .. }));
}

#[test]
fn labels_are_one_hot_at_the_raw_byte() {
    let file = label_file(4, &[3, 0, 9, 1]);

    let labels = decode_labels(&mut Cursor::new(&file), 4, 10).unwrap();

    assert_eq!(labels.len(), 4);
    for (label, &raw) in labels.iter().zip([3usize, 0, 9, 1].iter()) {
        assert_eq!(label.len(), 10);
        assert_eq!(label.iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(label.iter().filter(|&&v| v == 0.0).count(), 9);
        assert_eq!(label.iter().position(|&v| v == 1.0), Some(raw));
    }
}

#[test]
fn label_equal_to_class_count_is_out_of_range() {
    let file = label_file(2, &[4, 10]);

    let err = decode_labels(&mut Cursor::new(&file), 2, 10).unwrap_err();
    match err {
        DataError::LabelOutOfRange {
            index,
            label,
            num_classes,
        } => {
            assert_eq!(index, 1);
            assert_eq!(label, 10);
            assert_eq!(num_classes, 10);
        }
        other => panic!("expected LabelOutOfRange, got {other:?}"),
    }
}

#[test]
fn truncated_label_data_is_an_error() {
    let file = label_file(5, &[1, 2]);

    let err = decode_labels(&mut Cursor::new(&file), 5, 10).unwrap_err();
    assert!(matches!(err, DataError::TruncatedStream { .. }));
}

#[test]
fn loads_an_image_label_pair_into_examples() {
    let pixels: Vec<u8> = vec![0, 64, 128, 192, 255, 32, 16, 8];
    let images = image_file(2, 2, 2, &pixels);
    let labels = label_file(2, &[7, 2]);

    let examples = load_examples(
        &mut Cursor::new(&images),
        &mut Cursor::new(&labels),
        2,
        4,
        10,
    )
    .unwrap();

    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].features, vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(examples[0].class(), Some(7));
    assert_eq!(examples[1].class(), Some(2));
}

#[test]
fn class_of_a_non_one_hot_label_is_none() {
    let example = Example::new(vec![0.5; 4], vec![0.0; 10]);
    assert_eq!(example.class(), None);

    let decoded = Example::new(vec![0.5; 4], {
        let mut l = vec![0.0; 10];
        l[6] = 1.0;
        l
    });
    assert_eq!(decoded.class(), Some(6));
}

#[test]
fn pair_with_mismatched_declared_counts_is_rejected() {
    let images = image_file(3, 1, 2, &[0; 6]);
    let labels = label_file(2, &[0, 1]);

    let err = load_examples(
        &mut Cursor::new(&images),
        &mut Cursor::new(&labels),
        2,
        2,
        10,
    )
    .unwrap_err();

    match err {
        DataError::HeaderMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn decoding_is_deterministic() {
    let pixels: Vec<u8> = (0..8).collect();
    let file = image_file(2, 2, 2, &pixels);

    let first = decode_images(&mut Cursor::new(&file), 2, 4).unwrap();
    let second = decode_images(&mut Cursor::new(&file), 2, 4).unwrap();
    assert_eq!(first, second);
}
