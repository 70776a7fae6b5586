//! Tests for connector classification, parity and patch geometry

#[cfg(test)]
mod tests {
    use knotwork::algorithm::hilbert::{Depth, HilbertPath};
    use knotwork::algorithm::stitching::{
        BoardRect, CONNECTOR_LAYERS, Connector, StepAxis, connectors, stitch,
    };
    use knotwork::io::canvas::{Canvas, PixelCanvas};
    use knotwork::spatial::lattice::Point;
    use knotwork::spatial::palette::Palette;
    use knotwork::spatial::symbols::Symbol;
    use knotwork::KnotError;

    fn depth_one_connectors() -> Vec<Connector> {
        let depth = Depth::new(1).expect("depth within bounds");
        let path = HilbertPath::generate(depth);
        connectors(path.points()).expect("generated path is connected")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    // Tests axis classification for the depth-1 traversal
    // Verified by comparing y coordinates instead of x for verticality
    #[test]
    fn test_depth_one_axes() {
        let axes: Vec<StepAxis> = depth_one_connectors().iter().map(|c| c.axis).collect();
        assert_eq!(
            axes,
            vec![StepAxis::Vertical, StepAxis::Horizontal, StepAxis::Vertical]
        );
    }

    // Tests parity offsets follow (min x + min y) mod 2
    // Verified by using the destination point instead of the minimum
    #[test]
    fn test_depth_one_parity_offsets() {
        let offsets: Vec<f64> = depth_one_connectors().iter().map(|c| c.offset).collect();
        assert_eq!(offsets.len(), 3);
        assert_close(offsets[0], 3.0);
        assert_close(offsets[1], -3.0);
        assert_close(offsets[2], -3.0);
    }

    #[test]
    fn test_midpoints_in_board_units() {
        let midpoints: Vec<[f64; 2]> = depth_one_connectors().iter().map(|c| c.midpoint).collect();
        assert_eq!(midpoints, vec![[0.0, 13.5], [13.5, 27.0], [27.0, 13.5]]);
    }

    // Tests vertical connector layer rectangles against the fixed layout
    // Verified by dropping the +1 lane shift of the wall layer
    #[test]
    fn test_vertical_connector_geometry() {
        let connector =
            Connector::between(1, Point::new(0, 0), Point::new(0, 1)).expect("unit step");
        let layers: Vec<(Symbol, BoardRect)> = connector.layers().collect();

        assert_eq!(
            layers,
            vec![
                (
                    Symbol::WeaveA,
                    BoardRect {
                        x: 13.0,
                        y: 25.0,
                        width: 7.0,
                        height: 4.0
                    }
                ),
                (
                    Symbol::Wall,
                    BoardRect {
                        x: 14.0,
                        y: 25.0,
                        width: 5.0,
                        height: 4.0
                    }
                ),
                (
                    Symbol::Background,
                    BoardRect {
                        x: 15.0,
                        y: 24.0,
                        width: 3.0,
                        height: 6.0
                    }
                ),
            ]
        );
    }

    // Tests horizontal connectors swap axes and shift the lane for odd parity
    // Verified by applying the parity offset to x for horizontal steps
    #[test]
    fn test_horizontal_connector_geometry_odd_parity() {
        let connector =
            Connector::between(2, Point::new(0, 1), Point::new(1, 1)).expect("unit step");
        let layers: Vec<(Symbol, BoardRect)> = connector.layers().collect();

        assert_eq!(
            layers,
            vec![
                (
                    Symbol::WeaveA,
                    BoardRect {
                        x: 25.0,
                        y: 34.0,
                        width: 4.0,
                        height: 7.0
                    }
                ),
                (
                    Symbol::Wall,
                    BoardRect {
                        x: 25.0,
                        y: 35.0,
                        width: 4.0,
                        height: 5.0
                    }
                ),
                (
                    Symbol::Background,
                    BoardRect {
                        x: 24.0,
                        y: 36.0,
                        width: 6.0,
                        height: 3.0
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_reversed_step_has_same_parity() {
        let forward = Connector::between(1, Point::new(2, 3), Point::new(3, 3)).expect("unit step");
        let backward =
            Connector::between(1, Point::new(3, 3), Point::new(2, 3)).expect("unit step");
        assert_eq!(forward, backward);
    }

    // Tests diagonal, zero-length and long steps are fatal
    // Verified by removing the unit length check
    #[test]
    fn test_invalid_steps_rejected() {
        let cases = [
            (Point::new(0, 0), Point::new(1, 1)),
            (Point::new(2, 2), Point::new(2, 2)),
            (Point::new(0, 0), Point::new(0, 2)),
            (Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)),
            (Point::new(0, i32::MAX), Point::new(0, i32::MIN)),
        ];

        for (from, to) in cases {
            let result = Connector::between(7, from, to);
            assert!(
                matches!(result, Err(KnotError::DisconnectedStep { index: 7, .. })),
                "{from:?} -> {to:?} should be rejected"
            );
        }
    }

    // Tests unit steps at the edge of the coordinate range classify without overflow
    // Verified by summing the coordinates in i32
    #[test]
    fn test_extreme_coordinates() {
        let top = Point::new(i32::MAX, i32::MAX);
        let below = Point::new(i32::MAX, i32::MAX - 1);
        let connector = Connector::between(1, top, below).expect("unit step");
        assert_eq!(connector.axis, StepAxis::Vertical);
        assert_close(connector.offset, -3.0);

        let result = connectors(&[Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)]);
        assert!(matches!(
            result,
            Err(KnotError::DisconnectedStep { index: 1, .. })
        ));
    }

    #[test]
    fn test_connectors_reports_index_of_bad_step() {
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)];
        let result = connectors(&points);
        assert!(matches!(
            result,
            Err(KnotError::DisconnectedStep {
                index: 2,
                from: [1, 0],
                to: [2, 1]
            })
        ));
    }

    #[test]
    fn test_layers_painted_weave_then_wall_then_gap() {
        let symbols: Vec<Symbol> = CONNECTOR_LAYERS.iter().map(|layer| layer.symbol).collect();
        assert_eq!(symbols, vec![Symbol::WeaveA, Symbol::Wall, Symbol::Background]);
    }

    #[test]
    fn test_board_rect_scaling() {
        let rect = BoardRect {
            x: 10.5,
            y: 2.0,
            width: 3.0,
            height: 6.0,
        };
        assert_eq!(
            rect.scaled(2.0),
            BoardRect {
                x: 21.0,
                y: 4.0,
                width: 6.0,
                height: 12.0
            }
        );
    }

    // Tests stitching paints the junction colors onto the canvas
    // Verified by skipping the background gap layer
    #[test]
    fn test_stitch_paints_depth_one_junctions() {
        let palette = Palette::default();
        let depth = Depth::new(1).expect("depth within bounds");
        let path = HilbertPath::generate(depth);
        let mut canvas = PixelCanvas::new(54, 54, palette.color(Symbol::WeaveB));

        let junctions = stitch(&mut canvas, &path, &palette, 1.0).expect("connected path");
        assert_eq!(junctions, 3);

        // First junction: vertical step at x = 0, lanes start at 13, 14 and 15
        assert_eq!(canvas.pixel(13, 26), Some(palette.color(Symbol::WeaveA)));
        assert_eq!(canvas.pixel(14, 26), Some(palette.color(Symbol::Wall)));
        assert_eq!(canvas.pixel(16, 24), Some(palette.color(Symbol::Background)));
        assert_eq!(canvas.pixel(16, 29), Some(palette.color(Symbol::Background)));
        assert_eq!(canvas.pixel(12, 26), Some(palette.color(Symbol::WeaveB)));
        assert_eq!(canvas.dimensions(), (54, 54));
    }
}
