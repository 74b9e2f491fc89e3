use std::path::PathBuf;

use image::ColorType;

/// Errors raised while reading the cover image or writing the recovered artifacts.
///
/// Decoding and boundary detection are total and never produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has {channels} channel(s), need at least 3 (red, green, blue)", path.display())]
    TooFewChannels { path: PathBuf, channels: u8 },

    #[error("image {} uses {color:?}, only 8-bit channels are supported", path.display())]
    UnsupportedDepth { path: PathBuf, color: ColorType },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
