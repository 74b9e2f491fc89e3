//! Byte reconstruction for the two pixel layouts a payload can be hidden in.
//!
//! Embedded mode reuses a cover image and keeps one byte per pixel in the low
//! nibbles of blue (high nibble) and green (low nibble); red is filler.
//! Raw mode builds a fresh image and packs three payload bytes per pixel in
//! blue, green, red order.

use crate::pixels::{pixel_count, PixelGrid};

/// One byte per pixel: `(blue & 0x0F) << 4 | (green & 0x0F)`.
pub fn decode_embedded(img: &PixelGrid) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(pixel_count(img));

    for pixel in img.pixels() {
        let [_red, green, blue] = pixel.0;
        out.push((blue & 0x0F) << 4 | (green & 0x0F));
    }
    out
}

/// Three bytes per pixel, unmasked, in blue, green, red order.
pub fn decode_raw(img: &PixelGrid) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::with_capacity(pixel_count(img) * 3);

    for pixel in img.pixels() {
        let [red, green, blue] = pixel.0;
        out.extend_from_slice(&[blue, green, red]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use proptest::prelude::*;

    fn grid_from(width: u32, height: u32, rgb: &[u8]) -> PixelGrid {
        PixelGrid::from_raw(width, height, rgb.to_vec()).unwrap()
    }

    #[test]
    fn embedded_ignores_red_and_high_nibbles() {
        let grid = grid_from(2, 1, &[0xFF, 0xA1, 0x54, 0x00, 0x0F, 0xF0]);

        assert_eq!(decode_embedded(&grid), vec![0x41, 0x0F]);
    }

    #[test]
    fn raw_emits_blue_green_red() {
        let grid = grid_from(1, 2, &[b'c', b'b', b'a', b'f', b'e', b'd']);

        assert_eq!(decode_raw(&grid), b"abcdef".to_vec());
    }

    #[test]
    fn scan_order_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Rgb([0, (y * 3 + x) as u8, 0]));

        assert_eq!(decode_embedded(&grid), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_grid_gives_empty_streams() {
        let grid = PixelGrid::new(0, 0);

        assert!(decode_embedded(&grid).is_empty());
        assert!(decode_raw(&grid).is_empty());
    }

    fn any_grid() -> impl Strategy<Value = PixelGrid> {
        (0u32..12, 0u32..12).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |data| PixelGrid::from_raw(w, h, data).unwrap())
        })
    }

    proptest! {
        #[test]
        fn stream_lengths_follow_pixel_count(grid in any_grid()) {
            let n = pixel_count(&grid);
            prop_assert_eq!(decode_embedded(&grid).len(), n);
            prop_assert_eq!(decode_raw(&grid).len(), 3 * n);
        }

        #[test]
        fn raw_triples_match_channels(grid in any_grid()) {
            let raw = decode_raw(&grid);
            for (k, pixel) in grid.pixels().enumerate() {
                prop_assert_eq!(raw[3 * k], pixel[2]);
                prop_assert_eq!(raw[3 * k + 1], pixel[1]);
                prop_assert_eq!(raw[3 * k + 2], pixel[0]);
            }
        }

        #[test]
        fn embedded_is_repeatable(grid in any_grid()) {
            let first = decode_embedded(&grid);
            let _ = decode_raw(&grid);
            prop_assert_eq!(decode_embedded(&grid), first);
        }
    }
}
