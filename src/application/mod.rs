mod seed;
mod settings;
mod simulation;
mod status;
pub mod storage;

pub use seed::fresh_seed;
pub use settings::Settings;
pub use simulation::Simulation;
pub use status::Status;
pub use storage::StorageError;
