//! Progress display for generating a batch of boards

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BOARD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} snakes {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates a batch bar and a bar for the board in progress
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    board_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            board_bar: None,
        }
    }

    /// Prepare the batch bar; single boards get no batch bar
    pub fn initialize(&mut self, board_count: usize) {
        if board_count > 1 {
            let batch_bar = ProgressBar::new(board_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
        let board_bar = ProgressBar::new(0);
        board_bar.set_style(BOARD_STYLE.clone());
        self.board_bar = Some(self.multi_progress.add(board_bar));
    }

    /// Configure the board bar for a new board
    pub fn start_board(&self, seed: u64, target_count: usize) {
        if let Some(ref bar) = self.board_bar {
            bar.set_length(target_count as u64);
            bar.set_position(0);
            bar.set_prefix(format!("seed {seed}"));
            bar.set_message(String::new());
        }
    }

    /// Report the number of snakes placed so far
    pub fn update_board(&self, placed: usize, attempts: usize) {
        if let Some(ref bar) = self.board_bar {
            bar.set_position(placed as u64);
            bar.set_message(format!("({attempts} attempts)"));
        }
    }

    /// Mark the current board as completed
    pub fn complete_board(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All boards generated");
        }
        if let Some(ref bar) = self.board_bar {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
