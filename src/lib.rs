// Domain layer - Core universe logic
pub mod domain;

// Application layer - Settings, clock-driven simulation, file storage
pub mod application;

// Re-exports for convenience
pub use domain::{Cell, Dialect, Direction, Grid, Pattern, Topology, Universe, presets};
pub use application::{Settings, Simulation, Status, StorageError, fresh_seed};
