//! Post-generation analysis of finished boards

/// Board statistics for previews and parameter tuning
pub mod statistics;
