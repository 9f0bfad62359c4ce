//! File-level conversions: dither a PNG, pack a PNG as RGB565, and batch
//! the latter over a directory.

use std::fs;
use std::path::{Path, PathBuf};

use palette_dither::{encode_565, AlphaMode, ChannelOrder, Ditherer, PixelBuffer};

use crate::error::ConvertError;
use crate::png_io::{read_png, write_png};

/// Outcome of a directory conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files written successfully
    pub converted: Vec<PathBuf>,
    /// Files that could not be converted, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

/// `sprites/fish.png` -> `sprites/fish_dithered.png`
pub fn output_path_for_dither(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_dithered.{}", ext.to_string_lossy()),
        None => format!("{stem}_dithered"),
    };
    input.with_file_name(name)
}

/// `sprites/fish.png` -> `sprites/fish.rgb565` (or `.bgr565`)
pub fn output_path_for_565(input: &Path, order: ChannelOrder) -> PathBuf {
    input.with_extension(order.extension())
}

/// Dither `input` and write the result to `output` as an RGB PNG.
///
/// Alpha is dropped from the written image.
pub fn dither_file(
    input: &Path,
    output: &Path,
    ditherer: &Ditherer,
) -> Result<PixelBuffer, ConvertError> {
    let image = read_png(input)?;
    tracing::info!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        method = %ditherer.selected_method(),
        palette_size = ditherer.palette().len(),
        "Dithering"
    );

    let dithered = ditherer.dither(&image);
    let opaque = PixelBuffer::new(dithered.width(), dithered.height(), dithered.into_pixels())
        .map_err(crate::error::ImageError::from)?;
    write_png(output, &opaque)?;

    tracing::info!(output = %output.display(), "Saved");
    Ok(opaque)
}

/// Pack `input` as 16-bit pixels into `output`. Returns the bytes written.
///
/// `alpha` only matters for PNGs with transparency.
pub fn convert_565_file(
    input: &Path,
    output: &Path,
    order: ChannelOrder,
    alpha: AlphaMode,
) -> Result<usize, ConvertError> {
    let image = read_png(input)?;
    let bytes = encode_565(&image, order, alpha);
    fs::write(output, &bytes).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        format = %order,
        alpha = ?alpha,
        width = image.width(),
        height = image.height(),
        "Converted"
    );
    Ok(bytes.len())
}

/// Convert every `*.png` directly inside `dir`, writing each result next
/// to its source. A file that fails is logged and reported; the rest of
/// the batch still runs.
pub fn convert_565_dir(
    dir: &Path,
    order: ChannelOrder,
    alpha: AlphaMode,
) -> Result<BatchReport, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::NotADirectory(dir.to_path_buf()));
    }
    let io_error = |source| ConvertError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_png(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();

    let mut report = BatchReport::default();
    for input in inputs {
        let output = output_path_for_565(&input, order);
        match convert_565_file(&input, &output, order, alpha) {
            Ok(_) => report.converted.push(output),
            Err(e) => {
                tracing::warn!(%e, input = %input.display(), "Failed to convert");
                report.failed.push((input, e.to_string()));
            }
        }
    }

    tracing::info!(
        converted = report.converted.len(),
        failed = report.failed.len(),
        "Batch conversion complete"
    );
    Ok(report)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
