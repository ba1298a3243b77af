//! Decoding and re-encoding of inline image payloads.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;

use crate::{error::ImageGenerationError, models::InlineData, settings::ImageFormat};

/// A generated image re-encoded to its configured output format.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl EncodedImage {
    /// The encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The output format of the bytes.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The MIME type matching the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Base64 rendition of the encoded bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Decodes a provider inline payload into an image.
///
/// # Errors
///
/// Returns an error if the payload is not valid base64 or does not decode
/// as an image.
pub fn decode_image(inline: &InlineData) -> Result<DynamicImage, ImageGenerationError> {
    let raw = STANDARD.decode(inline.data.as_bytes())?;
    Ok(image::load_from_memory(&raw)?)
}

/// Re-encodes an image to the requested output format.
///
/// # Errors
///
/// Returns an error if the encoder rejects the image.
pub fn encode_image(
    image: &DynamicImage,
    format: ImageFormat,
) -> Result<EncodedImage, ImageGenerationError> {
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    match format {
        // JPEG has no alpha channel; flatten before encoding.
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut cursor, format.into())?
        }
        _ => image.write_to(&mut cursor, format.into())?,
    }
    Ok(EncodedImage { bytes, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([200, 40, 40, 255])))
    }

    #[test]
    fn reencoded_images_keep_their_dimensions() {
        let source = sample_image();
        for format in [ImageFormat::Png, ImageFormat::Gif, ImageFormat::Jpeg] {
            let encoded = encode_image(&source, format).unwrap();
            assert_eq!(encoded.format(), format);

            let decoded = image::load_from_memory(encoded.bytes()).unwrap();
            assert_eq!(decoded.width(), source.width());
            assert_eq!(decoded.height(), source.height());
        }
    }

    #[test]
    fn base64_rendition_decodes_back_to_the_bytes() {
        let encoded = encode_image(&sample_image(), ImageFormat::Png).unwrap();
        let round_trip = STANDARD.decode(encoded.to_base64()).unwrap();
        assert_eq!(round_trip, encoded.bytes());
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let inline = InlineData {
            mime_type: "image/png".into(),
            data: "not base64!".into(),
        };
        assert!(matches!(
            decode_image(&inline),
            Err(ImageGenerationError::Payload(_))
        ));
    }

    #[test]
    fn decode_rejects_non_image_payload() {
        let inline = InlineData {
            mime_type: "image/png".into(),
            data: STANDARD.encode(b"plain text"),
        };
        assert!(matches!(
            decode_image(&inline),
            Err(ImageGenerationError::Image(_))
        ));
    }

    #[test]
    fn decode_round_trips_an_encoded_image() {
        let encoded = encode_image(&sample_image(), ImageFormat::Png).unwrap();
        let inline = InlineData {
            mime_type: encoded.mime_type().into(),
            data: encoded.to_base64(),
        };
        let decoded = decode_image(&inline).unwrap();
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 3);
    }
}
