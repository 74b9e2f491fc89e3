//! Recovers scripts hidden in PNG images by an encoder that packs bytes into
//! pixel channels without recording their length.
//!
//! Both known layouts are decoded from the same pixels, then each stream is
//! cut where plausible text gives way to random filler. Full and trimmed
//! results are kept so a wrong cut can be fixed by hand.

pub mod boundary;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pixels;
pub mod sink;
pub mod stego;

pub use boundary::{find_boundary, is_plausible_text, Boundary, TextPolicy};
pub use config::DecodeConfig;
pub use error::{DecodeError, Result};
pub use pipeline::{decode_candidates, Candidate, DecodeMode};
pub use pixels::{load_pixel_grid, PixelGrid};
pub use sink::write_candidates;
pub use stego::{decode_embedded, decode_raw};

/// Loads the image, decodes both modes and writes all four artifacts.
pub fn run(config: &DecodeConfig) -> Result<[Candidate; 2]> {
    let grid = load_pixel_grid(&config.image_path)?;
    let candidates = decode_candidates(&grid, &config.policy);
    write_candidates(config, &candidates)?;
    Ok(candidates)
}
