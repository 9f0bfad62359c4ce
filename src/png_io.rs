//! PNG decode and encode for [`PixelBuffer`]s.
//!
//! Decoding normalizes every PNG flavor (indexed, low bit depth, 16-bit,
//! greyscale) to 8-bit RGB, with an alpha plane when the source has one.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use palette_dither::{PixelBuffer, Rgb};

use crate::error::ImageError;

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelBuffer, ImageError> {
    let bytes = fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        alpha = image.alpha().is_some(),
        "Decoded PNG"
    );
    Ok(image)
}

/// Decode PNG data held in memory.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedColorType(format!(
            "{:?} at {:?} bits",
            info.color_type, info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    let image = match info.color_type {
        png::ColorType::Rgb => PixelBuffer::from_rgb_bytes(width, height, &buf)?,
        png::ColorType::Rgba => PixelBuffer::from_rgba_bytes(width, height, &buf)?,
        png::ColorType::Grayscale => {
            let pixels = buf.iter().map(|&v| Rgb::new(v, v, v)).collect();
            PixelBuffer::new(width, height, pixels)?
        }
        png::ColorType::GrayscaleAlpha => {
            let (pixels, alpha): (Vec<Rgb>, Vec<u8>) = buf
                .chunks_exact(2)
                .map(|ga| (Rgb::new(ga[0], ga[0], ga[0]), ga[1]))
                .unzip();
            PixelBuffer::with_alpha(width, height, pixels, alpha)?
        }
        other => {
            return Err(ImageError::UnsupportedColorType(format!("{other:?}")));
        }
    };
    Ok(image)
}

/// Encode a buffer as an 8-bit RGB PNG, or RGBA when it carries alpha.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let dimensions_error = || ImageError::UnsupportedDimensions {
        width: image.width(),
        height: image.height(),
    };
    if image.is_empty() {
        return Err(dimensions_error());
    }
    let width = u32::try_from(image.width()).map_err(|_| dimensions_error())?;
    let height = u32::try_from(image.height()).map_err(|_| dimensions_error())?;

    let (color_type, data) = match image.alpha() {
        Some(_) => (png::ColorType::Rgba, image.to_rgba_bytes()),
        None => (png::ColorType::Rgb, image.to_rgb_bytes()),
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
    }
    Ok(buf.into_inner())
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, image: &PixelBuffer) -> Result<(), ImageError> {
    let bytes = encode_png(image)?;
    fs::write(path, &bytes).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
