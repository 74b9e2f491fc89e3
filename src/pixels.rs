use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, RgbImage};
use log::info;

use crate::error::{DecodeError, Result};

/// Row-major, 8-bit RGB pixel buffer. Alpha, if the file had one, is dropped on load.
pub type PixelGrid = RgbImage;

/// Opens `path` and converts it into a [`PixelGrid`].
///
/// Fails when the file is not a decodable image, has fewer than three
/// channels, or stores channels wider than 8 bits.
pub fn load_pixel_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();
    // format comes from the file's magic bytes, samples are often extensionless
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let grid = into_grid(img, path)?;
    info!(
        "Loaded {} ({}x{}, {} pixels)",
        path.display(),
        grid.width(),
        grid.height(),
        pixel_count(&grid)
    );
    Ok(grid)
}

fn into_grid(img: DynamicImage, path: &Path) -> Result<PixelGrid> {
    let color = img.color();
    let channels = color.channel_count();
    if channels < 3 {
        return Err(DecodeError::TooFewChannels {
            path: path.to_path_buf(),
            channels,
        });
    }
    if color.bytes_per_pixel() != channels {
        return Err(DecodeError::UnsupportedDepth {
            path: path.to_path_buf(),
            color,
        });
    }
    Ok(img.into_rgb8())
}

pub(crate) fn pixel_count(grid: &PixelGrid) -> usize {
    grid.width() as usize * grid.height() as usize
}
