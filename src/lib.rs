//! Procedural generation of snake exit puzzle boards that are solvable by construction
//!
//! Snakes are grown one at a time by a biased random walk, screened by cheap
//! local filters, and committed only if a full removal simulation of the
//! whole board still succeeds. Every emitted board therefore has at least one
//! order in which all snakes slide out of the grid.

#![forbid(unsafe_code)]

/// Snake growth, filtering, commit protocol, simulation and the generation loop
pub mod algorithm;
/// Statistics over finished boards
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grid, cell, direction and snake data structures
pub mod spatial;

pub use algorithm::executor::{GeneratedBoard, GeneratorConfig, generate_board};
pub use io::error::{AlgorithmError, Result};
