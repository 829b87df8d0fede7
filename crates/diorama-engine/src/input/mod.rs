pub mod hotspots;
pub mod queue;
