//! Tests for command-line parsing and batch board processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use snakeboard::io::cli::{BoardProcessor, Cli};
    use snakeboard::io::configuration::{DEFAULT_SEED, DEFAULT_TARGET_COUNT, DEFAULT_WIDTH};
    use snakeboard::io::level::load_level;
    use snakeboard::{GeneratedBoard, generate_board};
    use std::collections::HashSet;
    use std::ffi::OsString;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses the defaults
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.output, None);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.count, DEFAULT_TARGET_COUNT);
        assert_eq!(cli.boards, 1);
        assert_eq!(cli.retries, 0);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), "warn");
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--output",
            "levels",
            "--width",
            "5",
            "--height",
            "7",
            "--count",
            "9",
            "--min-length",
            "3",
            "--max-length",
            "5",
            "--curve-chance",
            "0.75",
            "--seed",
            "123",
            "--boards",
            "4",
            "--retries",
            "2",
            "--png",
            "--preview",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.output, Some(PathBuf::from("levels")));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.boards, 4);
        assert!(cli.png && cli.preview && cli.quiet);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), "info");

        let config = cli.generator_config();
        assert_eq!((config.width, config.height), (5, 7));
        assert_eq!(config.target_count, 9);
        assert_eq!((config.min_length, config.max_length), (3, 5));
        assert!((config.curve_chance - 0.75).abs() < f64::EPSILON);
    }

    // Tests short flag parsing
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-W", "4", "-H", "6", "-n", "3", "-s", "999", "-b", "2"]);

        assert_eq!(cli.width, 4);
        assert_eq!(cli.height, 6);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.seed, 999);
        assert_eq!(cli.boards, 2);
    }

    // Tests every board and retry gets its own seed
    #[test]
    fn test_seeds_never_repeat_within_batch() {
        let cli = Cli::parse_from(["program", "--seed", "10", "--retries", "2"]);
        let mut seen = HashSet::new();
        for board in 0..5 {
            for retry in 0..=2 {
                assert!(seen.insert(cli.seed_for(board, retry)));
            }
        }
        assert_eq!(cli.seed_for(0, 0), 10);
        assert_eq!(cli.seed_for(1, 0), 13);
    }

    // Tests a batch writes one valid level file per board
    #[test]
    fn test_processor_writes_levels() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("levels");
        let args: Vec<OsString> = vec![
            "program".into(),
            "--output".into(),
            output.clone().into_os_string(),
            "--boards".into(),
            "3".into(),
            "--png".into(),
            "--quiet".into(),
        ];
        let cli = Cli::parse_from(args);

        let boards = BoardProcessor::new(cli).process().expect("processing failed");
        assert_eq!(boards.len(), 3);

        for (index, board) in boards.iter().enumerate() {
            let level_path = BoardProcessor::get_level_path(&output, index);
            let level = load_level(&level_path).expect("level should load");
            assert_eq!(level.pieces.len(), board.placements.len());
            assert!(BoardProcessor::get_preview_path(&output, index).exists());
        }
    }

    // Tests invalid arguments surface as errors before any generation
    #[test]
    fn test_processor_rejects_invalid_config() {
        let cli = Cli::parse_from(["program", "--min-length", "5", "--max-length", "2", "--quiet"]);
        assert!(BoardProcessor::new(cli).process().is_err());
    }

    // Tests a short batch keeps the fullest board seen across its seeds
    #[test]
    fn test_retries_keep_best_board() {
        let cli = Cli::parse_from([
            "program", "-W", "4", "-H", "4", "-n", "20", "--retries", "4", "--quiet",
        ]);
        let config = cli.generator_config();
        let seeds: Vec<u64> = (0..=4).map(|retry| cli.seed_for(0, retry)).collect();

        let mut expected: Option<GeneratedBoard> = None;
        for seed in seeds {
            let candidate = generate_board(&config, seed).expect("generation failed");
            let better = expected
                .as_ref()
                .is_none_or(|kept| candidate.placements.len() > kept.placements.len());
            if better {
                expected = Some(candidate);
            }
        }
        let expected = expected.expect("at least one seed");

        let board = BoardProcessor::new(cli)
            .generate_with_retries(&config, 0)
            .expect("generation failed");
        assert!(board.placements.len() < 20);
        assert_eq!(board.seed, expected.seed);
        assert_eq!(board.placements, expected.placements);
    }

    // Tests seed blocks wrap instead of overflowing with huge retry counts
    #[test]
    fn test_seed_for_with_maximum_retries() {
        let retries = usize::MAX.to_string();
        let cli = Cli::parse_from(["program", "--retries", retries.as_str()]);

        assert_eq!(cli.seed_for(0, 5), DEFAULT_SEED + 5);
        assert_eq!(cli.seed_for(1, 0), DEFAULT_SEED.wrapping_add(usize::MAX as u64));
    }
}
