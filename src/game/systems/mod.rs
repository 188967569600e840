pub mod movement;
pub mod levers;

pub use movement::*;
pub use levers::*;
