//! Domain-critical regression tests for palette-dither.
//!
//! Each test names the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::Ditherer;
    use crate::buffer::PixelBuffer;
    use crate::color::Rgb;
    use crate::dither::{Bayer, Dither, DitherMethod, FloydSteinberg};
    use crate::output::{encode_565, AlphaMode, ChannelOrder};
    use crate::palette::{Palette, DEFAULT_PALETTE};

    fn photo(width: usize, height: usize) -> PixelBuffer {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width.max(1)) as u8;
                let g = (y * 255 / height.max(1)) as u8;
                let b = ((x + y) * 97 % 256) as u8;
                pixels.push(Rgb::new(r, g, b));
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    fn algorithms() -> [(&'static str, &'static dyn Dither); 2] {
        [("floyd-steinberg", &FloydSteinberg), ("bayer", &Bayer)]
    }

    // ========================================================================
    // Output colors must come from the palette
    // ========================================================================

    /// If this breaks, it means: an algorithm wrote a clamped or error-shifted
    /// working value to the output instead of the matched palette entry.
    #[test]
    fn test_every_output_pixel_is_a_palette_entry() {
        let palettes = [
            Palette::default_palette(),
            Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap(),
            Palette::new(&[Rgb::new(200, 30, 30)]).unwrap(),
        ];
        let image = photo(23, 17);

        for palette in &palettes {
            for (name, algorithm) in algorithms() {
                let out = algorithm.dither(&image, palette);
                for (i, &p) in out.pixels().iter().enumerate() {
                    assert!(
                        palette.contains(p),
                        "REGRESSION: {name} produced {p} at index {i}, not in palette"
                    );
                }
            }
        }
    }

    // ========================================================================
    // Dimensions
    // ========================================================================

    /// If this breaks, it means: an edge-of-image bounds check is off by one
    /// or a degenerate image panics instead of producing an empty result.
    #[test]
    fn test_output_dimensions_match_input() {
        let palette = Palette::default_palette();
        for (w, h) in [(0, 0), (1, 1), (1, 9), (9, 1), (4, 4), (5, 3)] {
            let image = photo(w, h);
            for (name, algorithm) in algorithms() {
                let out = algorithm.dither(&image, &palette);
                assert_eq!(
                    (out.width(), out.height(), out.pixels().len()),
                    (w, h, w * h),
                    "{name} changed dimensions for {w}x{h}"
                );
            }
        }
    }

    /// If this breaks, it means: the single-pixel path dithers instead of
    /// matching, or diffuses error into a pixel that does not exist.
    #[test]
    fn test_single_pixel_is_nearest_color() {
        let palette = Palette::default_palette();
        let color = Rgb::new(250, 120, 20);
        let image = PixelBuffer::filled(1, 1, color);

        let expected = palette.nearest(color);
        assert_eq!(FloydSteinberg.dither(&image, &palette).pixels(), &[expected]);
        // Bayer offset at (0,0) is -32; the shifted pixel may match differently
        let shifted = Rgb::new(218, 88, 0);
        assert_eq!(Bayer.dither(&image, &palette).pixels(), &[palette.nearest(shifted)]);
    }

    // ========================================================================
    // Determinism and scan order
    // ========================================================================

    /// If this breaks, it means: hidden state (randomness, reused buffers)
    /// leaks between calls.
    #[test]
    fn test_repeated_runs_are_identical() {
        let palette = Palette::default_palette();
        let image = photo(31, 12);
        for (name, algorithm) in algorithms() {
            let first = algorithm.dither(&image, &palette);
            let second = algorithm.dither(&image, &palette);
            assert_eq!(first, second, "{name} is not deterministic");
        }
    }

    /// If this breaks, it means: ordered dithering picked up a dependency on
    /// neighboring pixels. Each pixel must depend only on its own color and
    /// position.
    #[test]
    fn test_bayer_pixels_are_independent() {
        let palette = Palette::default_palette();
        let image = photo(12, 8);
        let whole = Bayer.dither(&image, &palette);

        for y in 0..image.height() {
            for x in 0..image.width() {
                let alone = Bayer::dither_pixel(x, y, image.pixel(x, y), &palette);
                assert_eq!(whole.pixel(x, y), alone, "pixel ({x},{y}) depends on neighbors");
            }
        }
    }

    /// If this breaks, it means: error diffusion stopped carrying error
    /// forward along the scan, so mirroring the input would simply mirror
    /// the output.
    #[test]
    fn test_diffusion_depends_on_scan_order() {
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
        let grey = |v: u8| Rgb::new(v, v, v);
        let (black, white) = (grey(0), grey(255));

        // 100 -> black, carries 43.75; 143.75 -> white, carries -48.7; -18.7 -> black
        let forward = PixelBuffer::new(3, 1, vec![grey(100), grey(100), grey(30)]).unwrap();
        assert_eq!(
            FloydSteinberg.dither(&forward, &palette).pixels(),
            &[black, white, black]
        );

        // 30 -> black, carries 13.1; 113.1 -> black, carries 49.5; 149.5 -> white
        let mirrored = PixelBuffer::new(3, 1, vec![grey(30), grey(100), grey(100)]).unwrap();
        assert_eq!(
            FloydSteinberg.dither(&mirrored, &palette).pixels(),
            &[black, black, white]
        );
    }

    // ========================================================================
    // Palette files feeding the pipeline
    // ========================================================================

    /// If this breaks, it means: a palette file with nothing but comments
    /// produced an empty palette instead of falling back to the default.
    #[test]
    fn test_comment_only_palette_dithers_to_default_colors() {
        let parsed = Palette::parse_hex("; nothing here\n// still nothing\n# a heading\n");
        assert!(parsed.used_default);

        let out = Ditherer::new(parsed.palette).dither(&photo(10, 10));
        assert!(out.pixels().iter().all(|p| DEFAULT_PALETTE.contains(p)));
    }

    /// If this breaks, it means: the pipeline reorders palette entries, so
    /// an exact tie no longer goes to the entry listed first in the file.
    #[test]
    fn test_palette_file_order_decides_ties() {
        let forward = Palette::parse_hex("#320000\n#003200\n").palette;
        let reverse = Palette::parse_hex("#003200\n#320000\n").palette;
        // (25,25,0) is 553.75 from both entries
        let image = PixelBuffer::filled(1, 1, Rgb::new(25, 25, 0));

        let a = Ditherer::new(forward).dither(&image);
        let b = Ditherer::new(reverse).dither(&image);
        assert_eq!(a.pixels(), &[Rgb::new(0x32, 0, 0)]);
        assert_eq!(b.pixels(), &[Rgb::new(0, 0x32, 0)]);
    }

    /// If this breaks, it means: one algorithm derives its row count from
    /// the pixel data instead of the height, so the progress contract
    /// differs between them on zero-width images.
    #[test]
    fn test_progress_contract_matches_across_algorithms() {
        let palette = Palette::default_palette();
        for (w, h) in [(0, 3), (3, 0), (4, 2)] {
            let image = PixelBuffer::new(w, h, vec![Rgb::new(9, 9, 9); w * h]).unwrap();
            let mut counts = Vec::new();
            for (_, algorithm) in algorithms() {
                let mut calls = Vec::new();
                algorithm.dither_with_progress(&image, &palette, &mut |done, total| {
                    calls.push((done, total))
                });
                counts.push(calls);
            }
            assert_eq!(counts[0], counts[1], "progress differs for {w}x{h}");
            assert_eq!(counts[0].len(), h);
        }
    }

    // ========================================================================
    // End to end
    // ========================================================================

    /// If this breaks, it means: the façade and the 565 encoder disagree on
    /// pixel order or on buffer length.
    #[test]
    fn test_dither_then_encode_565() {
        let image = photo(7, 3);
        for method in [DitherMethod::Diffusion, DitherMethod::Ordered] {
            let out = Ditherer::new(Palette::default_palette()).method(method).dither(&image);
            let bytes = encode_565(&out, ChannelOrder::Bgr, AlphaMode::OverBlack);
            assert_eq!(bytes.len(), 7 * 3 * 2);
        }
    }
}
