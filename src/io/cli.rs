//! Command-line interface for generating batches of snake puzzle boards

use crate::algorithm::executor::{AttemptOutcome, BoardGenerator, GeneratedBoard, GeneratorConfig};
use crate::analysis::statistics::BoardStatistics;
use crate::io::configuration::{
    DEFAULT_CURVE_CHANCE, DEFAULT_HEIGHT, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_PALETTE,
    DEFAULT_SEED, DEFAULT_TARGET_COUNT, DEFAULT_WIDTH, LEVEL_EXTENSION, LEVEL_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_board_as_png;
use crate::io::level::{LevelAsset, save_level};
use crate::io::preview::render_text;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snakeboard")]
#[command(
    author,
    version,
    about = "Generate solvable snake exit puzzle boards"
)]
/// Command-line arguments for the board generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to write level files into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of snakes to place on each board
    #[arg(short = 'n', long, default_value_t = DEFAULT_TARGET_COUNT)]
    pub count: usize,

    /// Shortest snake body
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    /// Longest snake body
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Probability of considering a turn at each body step
    #[arg(short, long, default_value_t = DEFAULT_CURVE_CHANCE)]
    pub curve_chance: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = 1)]
    pub boards: usize,

    /// Extra seeds to try when a board falls short of the snake count
    #[arg(short, long, default_value_t = 0)]
    pub retries: usize,

    /// Write a PNG preview next to each level
    #[arg(short, long)]
    pub png: bool,

    /// Print a text preview and statistics of each board
    #[arg(short = 't', long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation summaries
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Generation parameters described by the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            width: self.width,
            height: self.height,
            target_count: self.count,
            min_length: self.min_length,
            max_length: self.max_length,
            curve_chance: self.curve_chance,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Seed used for `board` on its `retry`-th try
    ///
    /// Each board owns a block of `retries + 1` consecutive seeds so batches
    /// never reuse a seed.
    pub const fn seed_for(&self, board: usize, retry: usize) -> u64 {
        let offset = board
            .wrapping_mul(self.retries.saturating_add(1))
            .wrapping_add(retry);
        self.seed.wrapping_add(offset as u64)
    }
}

/// Orchestrates batch generation with progress tracking and export
pub struct BoardProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BoardProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every requested board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a board fails
    /// final verification, or an export fails
    pub fn process(&mut self) -> Result<Vec<GeneratedBoard>> {
        let config = self.cli.generator_config();
        config.validate()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.boards);
        }

        let mut boards = Vec::with_capacity(self.cli.boards);
        for index in 0..self.cli.boards {
            let board = self.generate_with_retries(&config, index)?;
            self.export(&board, index)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_board();
            }
            boards.push(board);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(boards)
    }

    /// Generate one board, moving to the next seed while it stays short
    ///
    /// When every seed falls short, the board with the most snakes is kept,
    /// the earliest seed winning ties.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the final
    /// verification fails
    pub fn generate_with_retries(
        &self,
        config: &GeneratorConfig,
        index: usize,
    ) -> Result<GeneratedBoard> {
        let mut generator = BoardGenerator::new(config.clone(), self.cli.seed_for(index, 0))?;
        self.run_generator(&mut generator);
        let mut best = generator.finish()?;

        for retry in 1..=self.cli.retries {
            if best.placements.len() >= config.target_count {
                break;
            }
            log::info!(
                "best so far is seed {} with {}/{} snakes, trying another seed",
                best.seed,
                best.placements.len(),
                config.target_count
            );

            generator.restart(self.cli.seed_for(index, retry));
            self.run_generator(&mut generator);
            let candidate = generator.finish()?;
            if candidate.placements.len() > best.placements.len() {
                best = candidate;
            }
        }

        Ok(best)
    }

    fn run_generator(&self, generator: &mut BoardGenerator) {
        if let Some(ref pm) = self.progress_manager {
            pm.start_board(generator.seed(), generator.config().target_count);
        }

        while !generator.is_finished() {
            let outcome = generator.run_attempt();
            if let Some(ref pm) = self.progress_manager {
                pm.update_board(generator.board().accepted_count(), generator.attempts());
            }
            if outcome == AttemptOutcome::Saturated {
                break;
            }
        }
    }

    // Allow print for the requested text preview
    #[allow(clippy::print_stdout)]
    fn export(&self, board: &GeneratedBoard, index: usize) -> Result<()> {
        if self.cli.preview {
            let statistics = BoardStatistics::from_board(board.width, board.height, &board.placements);
            println!("board {index} (seed {})", board.seed);
            print!(
                "{}",
                render_text(board.width, board.height, &board.placements)
            );
            println!("{statistics}");
        }

        if let Some(ref directory) = self.cli.output {
            let asset = LevelAsset::from_board(board);
            save_level(&asset, &Self::get_level_path(directory, index))?;
        }

        if self.cli.png {
            let directory = self.cli.output.clone().unwrap_or_else(|| PathBuf::from("."));
            export_board_as_png(
                board.width,
                board.height,
                &board.placements,
                &Self::get_preview_path(&directory, index),
            )?;
        }

        Ok(())
    }

    /// Path of the level file for board `index`
    pub fn get_level_path(directory: &Path, index: usize) -> PathBuf {
        directory.join(format!("{LEVEL_PREFIX}_{index:04}.{LEVEL_EXTENSION}"))
    }

    /// Path of the PNG preview for board `index`
    pub fn get_preview_path(directory: &Path, index: usize) -> PathBuf {
        directory.join(format!("{LEVEL_PREFIX}_{index:04}.png"))
    }
}
