//! Decoder for the IDX binary format used by MNIST and its derivatives
//! (Fashion-MNIST, EMNIST, …).
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-3:   magic number (big-endian u32, ignored by this decoder)
//! bytes  4-7:   N    (number of images, big-endian u32)
//! bytes  8-11:  rows (image height in pixels, big-endian u32)
//! bytes 12-15:  cols (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols pixel bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-3:   magic number (big-endian u32, ignored)
//! bytes  4-7:   N (number of labels, big-endian u32)
//! bytes  8..:   N bytes, each a class index in [0, num_classes)
//! ```
//!
//! Both decoders work on any `std::io::Read`; the caller owns the stream's
//! open/close lifecycle. On success the cursor has advanced by exactly the
//! header size plus the requested payload, so a caller may keep reading the
//! same stream afterwards.

use std::io::{self, Read};

use crate::dataset::example::{Example, FeatureVector, LabelVector};
use crate::error::DataError;

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

/// Header of an IDX3 image file, as declared by the file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
}

impl ImageHeader {
    /// Reads and consumes the 16-byte image header. The magic field is read
    /// (so the cursor advances past it) but not interpreted.
    pub fn read<R: Read>(reader: &mut R) -> Result<ImageHeader, DataError> {
        let _magic = read_be_u32(reader, 0)?;
        let count = read_be_u32(reader, 4)? as usize;
        let rows = read_be_u32(reader, 8)? as usize;
        let cols = read_be_u32(reader, 12)? as usize;
        Ok(ImageHeader { count, rows, cols })
    }

    /// Cross-checks the declared header against what the caller asked for.
    ///
    /// The declared item count only needs to be *at least* `count`: decoding
    /// a prefix of a large dataset file is a normal use. The pixel geometry
    /// must match exactly.
    pub fn check(&self, count: usize, feature_dim: usize) -> Result<(), DataError> {
        if self.rows * self.cols != feature_dim {
            return Err(DataError::HeaderMismatch {
                field: "image rows * cols",
                expected: feature_dim,
                actual: self.rows * self.cols,
            });
        }
        if self.count < count {
            return Err(DataError::HeaderMismatch {
                field: "image item count",
                expected: count,
                actual: self.count,
            });
        }
        Ok(())
    }
}

/// Header of an IDX1 label file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelHeader {
    pub count: usize,
}

impl LabelHeader {
    /// Reads and consumes the 8-byte label header; the magic is skipped.
    pub fn read<R: Read>(reader: &mut R) -> Result<LabelHeader, DataError> {
        let _magic = read_be_u32(reader, 0)?;
        let count = read_be_u32(reader, 4)? as usize;
        Ok(LabelHeader { count })
    }

    pub fn check(&self, count: usize) -> Result<(), DataError> {
        if self.count < count {
            return Err(DataError::HeaderMismatch {
                field: "label item count",
                expected: count,
                actual: self.count,
            });
        }
        Ok(())
    }
}

/// Decodes `count` images of `feature_dim` pixels each from an IDX3 stream.
///
/// Each pixel byte `b` is normalized to `b / 256.0`, so every component lies
/// in [0, 1). The divisor is 256, not 255; 255 maps to 0.99609375, never to
/// 1.0 exactly.
///
/// Consumes `16 + count * feature_dim` bytes on success. Fails with
/// [`DataError::HeaderMismatch`] if the declared geometry disagrees with
/// `feature_dim` or the file declares fewer than `count` items, and with
/// [`DataError::TruncatedStream`] if the pixel data runs short.
pub fn decode_images<R: Read>(
    reader: &mut R,
    count: usize,
    feature_dim: usize,
) -> Result<Vec<FeatureVector>, DataError> {
    let header = ImageHeader::read(reader)?;
    header.check(count, feature_dim)?;
    read_feature_vectors(reader, count, feature_dim)
}

/// Decodes `count` one-hot label vectors of width `num_classes` from an IDX1
/// stream.
///
/// Consumes `8 + count` bytes on success. A label byte `l >= num_classes`
/// fails with [`DataError::LabelOutOfRange`]; it is never truncated or
/// wrapped.
pub fn decode_labels<R: Read>(
    reader: &mut R,
    count: usize,
    num_classes: usize,
) -> Result<Vec<LabelVector>, DataError> {
    let header = LabelHeader::read(reader)?;
    header.check(count)?;
    read_label_vectors(reader, count, num_classes)
}

/// Decodes an image/label file pair into `count` [`Example`]s in stream
/// order.
///
/// Enforces the dataset-pair invariant up front: the two files must declare
/// the same item count, and both must hold at least `count` items. The two
/// readers are independent streams with no shared state.
pub fn load_examples<I: Read, L: Read>(
    image_reader: &mut I,
    label_reader: &mut L,
    count: usize,
    feature_dim: usize,
    num_classes: usize,
) -> Result<Vec<Example>, DataError> {
    let image_header = ImageHeader::read(image_reader)?;
    image_header.check(count, feature_dim)?;

    let label_header = LabelHeader::read(label_reader)?;
    label_header.check(count)?;

    if image_header.count != label_header.count {
        return Err(DataError::HeaderMismatch {
            field: "label item count (vs. image file)",
            expected: image_header.count,
            actual: label_header.count,
        });
    }

    let features = read_feature_vectors(image_reader, count, feature_dim)?;
    let labels = read_label_vectors(label_reader, count, num_classes)?;

    Ok(features
        .into_iter()
        .zip(labels)
        .map(|(f, l)| Example::new(f, l))
        .collect())
}

// ---------------------------------------------------------------------------
// Body readers
// ---------------------------------------------------------------------------

fn read_feature_vectors<R: Read>(
    reader: &mut R,
    count: usize,
    feature_dim: usize,
) -> Result<Vec<FeatureVector>, DataError> {
    if feature_dim == 0 {
        return Ok(vec![Vec::new(); count]);
    }

    let mut pixel_bytes = vec![0u8; count * feature_dim];
    fill_exact(reader, &mut pixel_bytes, IMAGE_HEADER_LEN)?;

    Ok(pixel_bytes
        .chunks_exact(feature_dim)
        .map(|chunk| chunk.iter().map(|&b| b as f64 / 256.0).collect())
        .collect())
}

fn read_label_vectors<R: Read>(
    reader: &mut R,
    count: usize,
    num_classes: usize,
) -> Result<Vec<LabelVector>, DataError> {
    let mut label_bytes = vec![0u8; count];
    fill_exact(reader, &mut label_bytes, LABEL_HEADER_LEN)?;

    let mut labels = Vec::with_capacity(count);
    for (index, &l) in label_bytes.iter().enumerate() {
        if l as usize >= num_classes {
            return Err(DataError::LabelOutOfRange {
                index,
                label: l,
                num_classes,
            });
        }
        let mut one_hot = vec![0.0f64; num_classes];
        one_hot[l as usize] = 1.0;
        labels.push(one_hot);
    }
    Ok(labels)
}

// ---------------------------------------------------------------------------
// Low-level stream helpers
// ---------------------------------------------------------------------------

/// Reads one big-endian u32; `offset` is the stream position of its first
/// byte, used only for the truncation error.
fn read_be_u32<R: Read>(reader: &mut R, offset: usize) -> Result<u32, DataError> {
    let mut buf = [0u8; 4];
    fill_exact(reader, &mut buf, offset)?;
    Ok(u32::from_be_bytes(buf))
}

/// Like `read_exact`, but reports how many bytes actually arrived and at
/// which stream offset the data ran out.
fn fill_exact<R: Read>(reader: &mut R, buf: &mut [u8], offset: usize) -> Result<(), DataError> {
    let needed = buf.len();
    let mut got = 0;
    while got < needed {
        match reader.read(&mut buf[got..]) {
            Ok(0) => {
                return Err(DataError::TruncatedStream {
                    offset: offset + got,
                    needed,
                    got,
                })
            }
            Ok(n) => got += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
