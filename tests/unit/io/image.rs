//! Tests for PNG board previews

#[cfg(test)]
mod tests {
    use snakeboard::io::configuration::PREVIEW_CELL_PIXELS;
    use snakeboard::io::image::export_board_as_png;
    use snakeboard::spatial::{Cell, Direction, SnakePlacement};

    // Tests the PNG is written with one block per cell and bottom row at the bottom
    #[test]
    fn test_export_creates_scaled_png() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("previews").join("board.png");
        let placements = [SnakePlacement {
            id: 0,
            segments: vec![Cell::new(0, 0), Cell::new(1, 0)],
            exit_direction: Direction::West,
            color: [100, 0, 0, 255],
        }];

        export_board_as_png(3, 2, &placements, &path).expect("export failed");
        assert!(path.exists(), "PNG file should be created");

        let decoded = image::open(&path).expect("decode failed").to_rgba8();
        assert_eq!(decoded.width(), 3 * PREVIEW_CELL_PIXELS);
        assert_eq!(decoded.height(), 2 * PREVIEW_CELL_PIXELS);

        let body = decoded.get_pixel(PREVIEW_CELL_PIXELS + 1, PREVIEW_CELL_PIXELS + 1);
        assert_eq!(body.0, [100, 0, 0, 255]);
        let empty = decoded.get_pixel(1, 1);
        assert_eq!(empty.0[3], 0);
    }

    // Tests a board without cells is refused
    #[test]
    fn test_export_rejects_empty_board() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("empty.png");
        assert!(export_board_as_png(0, 3, &[], &path).is_err());
        assert!(!path.exists());
    }
}
