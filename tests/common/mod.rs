#![allow(dead_code)]

use image::Rgb;
use psimage_decode::PixelGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const SCRIPT: &str = "$wc = New-Object System.Net.WebClient\r\n\
$wc.Headers.Add('User-Agent', 'Mozilla/5.0')\r\n\
Write-Host \"payload staged\"; exit 0\r\n";

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Bytes that are never plausible text, standing in for filler whose first
/// byte must not extend the payload run.
pub fn high_bit_filler(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0x80u8..=0xFF)).collect()
}

pub fn random_bytes(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Hides one byte per pixel in the blue/green low nibbles. Red and the high
/// nibbles are random, like a busy cover image.
pub fn embed_nibbles(bytes: &[u8], width: u32, rng: &mut ChaCha8Rng) -> PixelGrid {
    assert_eq!(bytes.len() % width as usize, 0, "bytes must fill whole rows");
    let height = (bytes.len() / width as usize) as u32;
    PixelGrid::from_fn(width, height, |x, y| {
        let b = bytes[(y * width + x) as usize];
        let red = rng.gen::<u8>();
        let green = (rng.gen::<u8>() & 0xF0) | (b & 0x0F);
        let blue = (rng.gen::<u8>() & 0xF0) | (b >> 4);
        Rgb([red, green, blue])
    })
}

/// Packs three bytes per pixel as blue, green, red.
pub fn pack_raw(bytes: &[u8], width: u32) -> PixelGrid {
    assert_eq!(bytes.len() % (3 * width as usize), 0, "bytes must fill whole rows");
    let height = (bytes.len() / (3 * width as usize)) as u32;
    PixelGrid::from_fn(width, height, |x, y| {
        let k = 3 * (y * width + x) as usize;
        Rgb([bytes[k + 2], bytes[k + 1], bytes[k]])
    })
}

/// Filler length that makes `payload_len + filler` a multiple of `unit` with
/// at least `min_filler` filler bytes.
pub fn filler_len(payload_len: usize, unit: usize, min_filler: usize) -> usize {
    let total = payload_len + min_filler;
    min_filler + (unit - total % unit) % unit
}
