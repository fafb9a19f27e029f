//! Statcast-shaped data: play-by-play records, league aggregation, CSV ingest
//!
//! The model consumes two inputs from this module: the aggregated
//! league-wide [`OutcomeTable`] and per-player [`PitchRecord`] logs. Both are
//! pre-materialized, in-memory tables; nothing here blocks on I/O except the
//! explicit CSV loaders.

pub mod aggregate;
pub mod loader;
pub mod records;
pub mod table;

pub use aggregate::aggregate;
pub use loader::{LoadedPitches, read_pitch_log};
pub use records::{PitchDescription, PitchRecord, PlateEvent};
pub use table::{MIN_OBSERVATIONS, OutcomeEntry, OutcomeStats, OutcomeTable};
