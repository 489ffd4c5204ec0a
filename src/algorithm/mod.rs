/// Self-blocking rejection of candidate bodies
pub mod blocking;
/// Random-walk body growth
pub mod builder;
/// Generation loop orchestration
pub mod executor;
/// Head-on standoff rejection
pub mod facing;
/// Seeded random choices
pub mod selection;
/// Solvability simulation oracle
pub mod simulation;
/// Board state and commit/rollback protocol
pub mod transaction;
