//! JPEG + base64 data-URI encoding.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

use super::{normalize, CanonicalImage, RawImage};

/// JPEG quality used for every encoded image.
pub const JPEG_QUALITY: u8 = 95;

/// MIME prefix of every encoded image.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// A `data:image/jpeg;base64,...` string ready to be sent as an image part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base64 payload without the MIME prefix.
    pub fn base64_data(&self) -> &str {
        self.0
            .strip_prefix(JPEG_DATA_URI_PREFIX)
            .unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a canonical image as a JPEG data URI at [`JPEG_QUALITY`].
///
/// # Errors
///
/// Returns an error if the JPEG encoder rejects the image.
pub fn encode_jpeg(image: &CanonicalImage) -> Result<EncodedImage> {
    let dynamic = image.to_dynamic()?;

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    dynamic.write_with_encoder(encoder)?;

    debug!(
        width = image.width(),
        height = image.height(),
        jpeg_bytes = bytes.len(),
        "encoded image"
    );

    Ok(EncodedImage(format!(
        "{JPEG_DATA_URI_PREFIX}{}",
        BASE64.encode(&bytes)
    )))
}

/// Normalize and encode a raw tensor in one step.
pub fn encode_image(image: &RawImage) -> Result<EncodedImage> {
    encode_jpeg(&normalize(image)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_jpeg_prefix() {
        let encoded = encode_image(&RawImage::filled(&[4, 4], 0.25)).unwrap();
        assert!(encoded.as_str().starts_with(JPEG_DATA_URI_PREFIX));
        assert!(!encoded.base64_data().is_empty());
    }

    #[test]
    fn payload_decodes_to_jpeg_magic() {
        let encoded = encode_image(&RawImage::filled(&[8, 8, 3], 0.75)).unwrap();
        let bytes = BASE64.decode(encoded.base64_data()).unwrap();
        assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let encoded = encode_image(&RawImage::filled(&[2, 2], 0.0)).unwrap();
        let json = serde_json::to_value(&encoded).unwrap();
        assert_eq!(json.as_str(), Some(encoded.as_str()));
    }
}
