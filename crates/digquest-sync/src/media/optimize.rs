//! Client-side image optimization before upload
//!
//! Shrinks a user-selected photo to fit dimension and byte constraints so the
//! upload form never ships a 6 MB camera original. Decode and encode failures
//! propagate to the caller, which decides whether to upload the original or
//! abort.

use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, DynamicImage, GenericImageView, ImageFormat};

use crate::error::{Error, Result};

/// Quality decrement applied per re-encode while over the byte cap
const QUALITY_STEP: f32 = 0.08;

/// Lowest JPEG quality the optimizer will go to
const QUALITY_FLOOR: f32 = 0.55;

/// Constraints for pre-upload optimization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizeOptions {
    /// Maximum output width in pixels
    pub max_width: u32,
    /// Maximum output height in pixels
    pub max_height: u32,
    /// Initial JPEG quality in `0.0..=1.0`
    pub quality: f32,
    /// Target upper bound for the output size in bytes
    pub max_output_bytes: usize,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 1200,
            quality: 0.82,
            max_output_bytes: 2_500_000,
        }
    }
}

/// Optimized image payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// True when the source bytes were returned unchanged
    pub unchanged: bool,
}

/// Produce a possibly-smaller replacement for `source` before upload
///
/// The image is resized to fit within `max_width` x `max_height` while
/// preserving aspect ratio; images already inside the bounds are never
/// upscaled. PNG input stays PNG, every other format re-encodes as JPEG at
/// `quality`, reduced in fixed steps down to a floor while the output exceeds
/// `max_output_bytes`. The original bytes are returned whenever optimization
/// would not make the file strictly smaller.
pub fn optimize_image(source: &[u8], options: &OptimizeOptions) -> Result<OptimizedImage> {
    if source.is_empty() {
        return Err(Error::InvalidInput(
            "Image source bytes cannot be empty".to_string(),
        ));
    }
    if options.max_width == 0 || options.max_height == 0 {
        return Err(Error::InvalidInput(
            "Image max dimensions must be greater than zero".to_string(),
        ));
    }

    let source_format = image::guess_format(source)
        .map_err(|error| Error::Image(format!("Failed to sniff source image format: {error}")))?;
    let decoded = image::load_from_memory(source)
        .map_err(|error| Error::Image(format!("Failed to decode source image: {error}")))?;

    let (source_width, source_height) = decoded.dimensions();
    let fits_bounds = source_width <= options.max_width && source_height <= options.max_height;

    // Nothing to do: already inside the bounds and under the byte cap
    if fits_bounds && source.len() <= options.max_output_bytes {
        return Ok(OptimizedImage {
            bytes: source.to_vec(),
            width: source_width,
            height: source_height,
            format: source_format,
            unchanged: true,
        });
    }

    let resized = if fits_bounds {
        decoded
    } else {
        decoded.thumbnail(options.max_width, options.max_height)
    };
    let (width, height) = resized.dimensions();

    let (bytes, format) = if source_format == ImageFormat::Png {
        (encode_png(&resized)?, ImageFormat::Png)
    } else {
        (
            encode_jpeg_under_cap(&resized, options)?,
            ImageFormat::Jpeg,
        )
    };

    // Never hand back something larger than what the user picked
    if bytes.len() >= source.len() {
        return Ok(OptimizedImage {
            bytes: source.to_vec(),
            width: source_width,
            height: source_height,
            format: source_format,
            unchanged: true,
        });
    }

    Ok(OptimizedImage {
        bytes,
        width,
        height,
        format,
        unchanged: false,
    })
}

/// Encode as JPEG, stepping quality down until the byte cap or the floor is
/// reached
fn encode_jpeg_under_cap(image: &DynamicImage, options: &OptimizeOptions) -> Result<Vec<u8>> {
    let mut quality = options.quality.clamp(0.0, 1.0);
    let mut bytes = encode_jpeg(image, quality)?;

    while bytes.len() > options.max_output_bytes && quality - QUALITY_STEP >= QUALITY_FLOOR {
        quality -= QUALITY_STEP;
        bytes = encode_jpeg(image, quality)?;
    }

    Ok(bytes)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // quality is clamped to 0.0..=1.0
fn encode_jpeg(image: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, (quality * 100.0).round() as u8);
    // JPEG has no alpha channel
    encoder
        .encode_image(&image.to_rgb8())
        .map_err(|error| Error::Image(format!("Failed to encode JPEG image: {error}")))?;
    Ok(cursor.into_inner())
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|error| Error::Image(format!("Failed to encode PNG image: {error}")))?;
    Ok(cursor.into_inner())
}
