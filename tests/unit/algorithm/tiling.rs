//! Tests for tile orientation parity and the direct and copy stamping paths

#[cfg(test)]
mod tests {
    use knotwork::algorithm::tiling::{
        Orientation, TileGrid, TileStamper, TilingStrategy, draw_motif,
    };
    use knotwork::io::canvas::{Canvas, PixelCanvas};
    use knotwork::io::configuration::KNOT_SIZE;
    use knotwork::spatial::palette::Palette;
    use knotwork::spatial::symbols::Symbol;
    use knotwork::spatial::tiles::{KnotTemplates, Motif};

    fn templates() -> KnotTemplates {
        KnotTemplates::canonical().expect("canonical motif parses")
    }

    fn stamped(grid: TileGrid, scale: f64, strategy: TilingStrategy) -> PixelCanvas {
        let templates = templates();
        let palette = Palette::default();
        let side = ((grid.side() * KNOT_SIZE) as f64 * scale).floor() as u32;
        let mut canvas = PixelCanvas::new(side, side, palette.color(Symbol::WeaveB));
        let stamper = TileStamper::new(&templates, &palette, scale, strategy);
        stamper
            .stamp_all(&mut canvas, &grid)
            .expect("tiles fit the canvas");
        canvas
    }

    fn tile_matches(canvas: &PixelCanvas, motif: &Motif, palette: &Palette, row: usize, col: usize) -> bool {
        motif.cells().all(|((i, j), symbol)| {
            let x = (col * KNOT_SIZE + i) as u32;
            let y = (row * KNOT_SIZE + j) as u32;
            canvas.pixel(x, y) == Some(palette.color(symbol))
        })
    }

    // Tests slot orientation follows checkerboard parity up to a 16x16 grid
    // Verified by selecting orientation from row parity only
    #[test]
    fn test_orientation_parity() {
        let grid = TileGrid::new(16);
        for (row, col, orientation) in grid.slots() {
            let expected = if (row + col) % 2 == 0 {
                Orientation::Base
            } else {
                Orientation::Rotated
            };
            assert_eq!(orientation, expected, "slot ({row}, {col})");
            assert_eq!(grid.orientation(row, col), Some(expected));
        }
        assert_eq!(grid.slots().count(), 256);
        assert_eq!(grid.orientation(16, 0), None);
    }

    // Tests stamped pixels show the base motif on even slots and rotated on odd
    // Verified by swapping the orientation templates
    #[test]
    fn test_stamped_tiles_follow_parity() {
        let templates = templates();
        let palette = Palette::default();
        let grid = TileGrid::new(16);
        let canvas = stamped(grid, 1.0, TilingStrategy::Copy);

        for (row, col, orientation) in grid.slots() {
            let expected = orientation.motif(&templates);
            assert!(
                tile_matches(&canvas, expected, &palette, row, col),
                "slot ({row}, {col}) should hold the {orientation:?} motif"
            );
        }
    }

    // Tests copy-based tiling is pixel-identical to per-cell drawing
    // Verified by offsetting copied blocks by one pixel
    #[test]
    fn test_copy_matches_direct() {
        for scale in [1.0, 2.0, 3.0] {
            let direct = stamped(TileGrid::new(2), scale, TilingStrategy::Direct);
            let copied = stamped(TileGrid::new(2), scale, TilingStrategy::Copy);
            assert_eq!(direct, copied, "scale {scale}");
        }
    }

    // Tests automatic and explicit copy requests both fall back at fractional scales
    // Verified by resolving Auto to Copy regardless of scale
    #[test_log::test]
    fn test_fractional_scale_falls_back_to_direct() {
        for scale in [0.5, 1.25, 2.75] {
            assert_eq!(TilingStrategy::Auto.resolve(scale), TilingStrategy::Direct);
            assert_eq!(TilingStrategy::Copy.resolve(scale), TilingStrategy::Direct);
        }
    }

    #[test]
    fn test_strategy_resolution() {
        assert_eq!(TilingStrategy::Auto.resolve(2.0), TilingStrategy::Copy);
        assert_eq!(TilingStrategy::Auto.resolve(2.5), TilingStrategy::Direct);
        assert_eq!(TilingStrategy::Copy.resolve(1.3), TilingStrategy::Direct);
        assert_eq!(TilingStrategy::Direct.resolve(1.0), TilingStrategy::Direct);
    }

    #[test]
    fn test_stamper_reports_resolved_strategy() {
        let templates = templates();
        let palette = Palette::default();
        let copy = TileStamper::new(&templates, &palette, 3.0, TilingStrategy::Auto);
        let direct = TileStamper::new(&templates, &palette, 1.5, TilingStrategy::Copy);
        assert_eq!(copy.strategy(), TilingStrategy::Copy);
        assert_eq!(direct.strategy(), TilingStrategy::Direct);
    }

    // Tests fractional scales paint each pixel with the cell under its center
    // Verified by truncating cell edges instead of using pixel centers
    #[test]
    fn test_fractional_scale_uses_pixel_centers() {
        let scale = 1.25;
        let templates = templates();
        let palette = Palette::default();
        let grid = TileGrid::new(2);
        let canvas = stamped(grid, scale, TilingStrategy::Auto);
        let (width, height) = canvas.dimensions();
        assert_eq!((width, height), (67, 67));

        for y in 0..height {
            for x in 0..width {
                let board_x = ((f64::from(x) + 0.5) / scale).floor() as usize;
                let board_y = ((f64::from(y) + 0.5) / scale).floor() as usize;
                let (col, i) = (board_x / KNOT_SIZE, board_x % KNOT_SIZE);
                let (row, j) = (board_y / KNOT_SIZE, board_y % KNOT_SIZE);

                let motif = Orientation::for_slot(row, col).motif(&templates);
                let expected = motif.symbol(i, j).map(|symbol| palette.color(symbol));
                assert_eq!(canvas.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_draw_motif_scales_cells() {
        let templates = templates();
        let palette = Palette::default();
        let mut canvas = PixelCanvas::new(54, 54, palette.color(Symbol::WeaveB));
        draw_motif(&mut canvas, templates.base(), &palette, [0.0, 0.0], 2.0);

        for ((i, j), symbol) in templates.base().cells() {
            let color = Some(palette.color(symbol));
            let (x, y) = ((i * 2) as u32, (j * 2) as u32);
            assert_eq!(canvas.pixel(x, y), color);
            assert_eq!(canvas.pixel(x + 1, y + 1), color);
        }
    }

    #[test]
    fn test_copy_fails_on_undersized_canvas() {
        let templates = templates();
        let palette = Palette::default();
        let stamper = TileStamper::new(&templates, &palette, 1.0, TilingStrategy::Copy);
        let mut canvas = PixelCanvas::new(30, 30, palette.color(Symbol::Background));
        assert!(stamper.stamp_tile(&mut canvas, 0, 1).is_err());
    }
}
