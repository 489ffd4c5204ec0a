use crate::{
    algorithm::blocking::is_self_blocking,
    algorithm::builder::{BodyRequest, grow_body},
    algorithm::facing::has_facing_conflict,
    algorithm::selection::RandomSelector,
    algorithm::simulation::SimulationOutcome,
    algorithm::transaction::{BoardState, CommitOutcome},
    io::configuration::{
        ATTEMPTS_PER_PIECE, DEFAULT_CURVE_CHANCE, DEFAULT_HEIGHT, DEFAULT_MAX_LENGTH,
        DEFAULT_MIN_LENGTH, DEFAULT_PALETTE, DEFAULT_TARGET_COUNT, DEFAULT_WIDTH, MAX_GRID_CELLS,
    },
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::{Cell, Direction, PieceId, Rgba, SnakePlacement},
};

/// Parameters controlling board size, snake count and snake shape
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Number of snakes to try to place
    pub target_count: usize,
    /// Shortest allowed snake body
    pub min_length: usize,
    /// Longest allowed snake body
    pub max_length: usize,
    /// Probability of considering a turn at each body step
    pub curve_chance: f64,
    /// Colors assigned cyclically in acceptance order
    pub palette: Vec<Rgba>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_count: DEFAULT_TARGET_COUNT,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            curve_chance: DEFAULT_CURVE_CHANCE,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Check every parameter against its allowed range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first parameter out of range
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be at least 1"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be at least 1"));
        }
        let cells = self.width.checked_mul(self.height).unwrap_or(usize::MAX);
        if cells > MAX_GRID_CELLS {
            return Err(invalid_parameter(
                "width x height",
                &cells,
                &format!("must not exceed {MAX_GRID_CELLS} cells"),
            ));
        }
        if self.target_count == 0 {
            return Err(invalid_parameter(
                "target_count",
                &self.target_count,
                &"must be at least 1",
            ));
        }
        if self.min_length == 0 {
            return Err(invalid_parameter(
                "min_length",
                &self.min_length,
                &"must be at least 1",
            ));
        }
        if self.max_length < self.min_length {
            return Err(invalid_parameter(
                "max_length",
                &self.max_length,
                &format!("must be at least min_length ({})", self.min_length),
            ));
        }
        if !(0.0..=1.0).contains(&self.curve_chance) {
            return Err(invalid_parameter(
                "curve_chance",
                &self.curve_chance,
                &"must lie in [0, 1]",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"must contain at least one color",
            ));
        }
        Ok(())
    }

    /// Total attempts allowed before generation stops short of the target
    pub const fn attempt_budget(&self) -> usize {
        self.target_count.saturating_mul(ATTEMPTS_PER_PIECE)
    }

    /// Color for the snake accepted at position `accepted`
    pub fn color_for(&self, accepted: usize) -> Rgba {
        self.palette
            .get(accepted % self.palette.len().max(1))
            .copied()
            .unwrap_or([0, 0, 0, 255])
    }
}

/// What a single generation attempt achieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// A new snake was committed
    Committed(PieceId),
    /// No direction produced a committable snake from the sampled head
    Abandoned,
    /// No empty cell remains
    Saturated,
}

/// A finished, verified board
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedBoard {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Seed the board was generated from
    pub seed: u64,
    /// Accepted snakes in acceptance order
    pub placements: Vec<SnakePlacement>,
    /// Attempts consumed
    pub attempts: usize,
    /// One valid clearing order, as placement ids
    pub solution: Vec<PieceId>,
}

impl GeneratedBoard {
    /// Occupied cells divided by total cells
    pub fn density(&self) -> f64 {
        let total = self.width * self.height;
        if total == 0 {
            return 0.0;
        }
        let occupied: usize = self.placements.iter().map(SnakePlacement::len).sum();
        occupied as f64 / total as f64
    }
}

/// Constructive generator driving builder, filters and commit protocol
///
/// Owns all per-run state: the board and the random source. Two generators
/// share nothing, so independent runs can proceed in parallel.
pub struct BoardGenerator {
    config: GeneratorConfig,
    board: BoardState,
    random_selector: RandomSelector,
    seed: u64,
    attempts: usize,
}

impl BoardGenerator {
    /// Create a generator for one board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = BoardState::new(config.width, config.height);
        Ok(Self {
            config,
            board,
            random_selector: RandomSelector::new(seed),
            seed,
            attempts: 0,
        })
    }

    /// Generation parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current board state
    pub const fn board(&self) -> &BoardState {
        &self.board
    }

    /// Attempts consumed so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Seed of the current run
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the target count is reached or the attempt budget is spent
    pub fn is_finished(&self) -> bool {
        self.board.accepted_count() >= self.config.target_count
            || self.attempts >= self.config.attempt_budget()
    }

    /// Discard the board and start over from a new seed
    pub fn restart(&mut self, seed: u64) {
        self.board.reset();
        self.random_selector = RandomSelector::new(seed);
        self.seed = seed;
        self.attempts = 0;
    }

    /// Run one attempt: sample a head and try each direction in random order
    pub fn run_attempt(&mut self) -> AttemptOutcome {
        let Some(head) = self.random_selector.empty_cell(&self.board.grid) else {
            return AttemptOutcome::Saturated;
        };
        self.attempts += 1;

        let target_length = self
            .random_selector
            .length_between(self.config.min_length, self.config.max_length);

        for exit_direction in self.random_selector.shuffled_directions() {
            if let Some(id) = self.try_direction(head, target_length, exit_direction) {
                return AttemptOutcome::Committed(id);
            }
        }

        AttemptOutcome::Abandoned
    }

    /// Build, filter and offer one candidate for a given head and direction
    fn try_direction(
        &mut self,
        head: Cell,
        target_length: usize,
        exit_direction: Direction,
    ) -> Option<PieceId> {
        if has_facing_conflict(
            &self.board.grid,
            self.board.placements(),
            head,
            exit_direction,
        ) {
            return None;
        }

        let request = BodyRequest {
            head,
            target_length,
            min_length: self.config.min_length,
            curve_chance: self.config.curve_chance,
            exit_direction,
        };
        let segments = grow_body(&self.board.grid, &request, &mut self.random_selector)?;

        if is_self_blocking(&self.board.grid, &segments, exit_direction) {
            return None;
        }

        let accepted = self.board.accepted_count();
        let candidate = SnakePlacement {
            id: accepted,
            segments,
            exit_direction,
            color: self.config.color_for(accepted),
        };

        match self.board.try_commit(candidate) {
            CommitOutcome::Committed(id) => Some(id),
            CommitOutcome::RolledBack => None,
        }
    }

    /// Run attempts until finished or saturated, then verify the result
    ///
    /// # Errors
    ///
    /// Returns `UnsolvableBoard` if the final verification finds a deadlock,
    /// which means the incremental protocol was violated
    pub fn generate(mut self) -> Result<GeneratedBoard> {
        while !self.is_finished() {
            if self.run_attempt() == AttemptOutcome::Saturated {
                log::debug!("grid saturated after {} attempts", self.attempts);
                break;
            }
        }
        self.finish()
    }

    /// Verify the current board and hand it out
    ///
    /// # Errors
    ///
    /// Returns `UnsolvableBoard` if the accepted set cannot be cleared
    pub fn finish(&self) -> Result<GeneratedBoard> {
        let solution = match self.board.simulate() {
            SimulationOutcome::Solvable { order } => order,
            SimulationOutcome::Deadlocked { remaining, .. } => {
                log::error!(
                    "final verification failed for seed {}: {} of {} snakes stuck",
                    self.seed,
                    remaining.len(),
                    self.board.accepted_count()
                );
                return Err(AlgorithmError::UnsolvableBoard {
                    pieces: self.board.accepted_count(),
                    remaining,
                });
            }
        };

        let board = GeneratedBoard {
            width: self.board.width(),
            height: self.board.height(),
            seed: self.seed,
            attempts: self.attempts,
            solution,
            placements: self.board.placements().to_vec(),
        };

        log::info!(
            "seed {}: placed {}/{} snakes in {} attempts, density {:.3}",
            board.seed,
            board.placements.len(),
            self.config.target_count,
            board.attempts,
            board.density()
        );

        Ok(board)
    }
}

/// Generate one board from a configuration and seed
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the finished board
/// fails final verification
pub fn generate_board(config: &GeneratorConfig, seed: u64) -> Result<GeneratedBoard> {
    BoardGenerator::new(config.clone(), seed)?.generate()
}
