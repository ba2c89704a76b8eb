mod cell;
mod direction;
mod grid;
mod patterns;
mod randomizer;
mod topology;
mod universe;
pub mod codec;

pub use cell::Cell;
pub use codec::Dialect;
pub use direction::Direction;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use randomizer::Randomizer;
pub use topology::Topology;
pub use universe::Universe;
