pub use board::*;
pub use engine::*;
pub use errors::*;
pub use moves::*;
pub use protocol::*;
pub use rules::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod engine;
mod errors;
mod moves;
mod protocol;
mod rules;
mod turn;
mod visualization;
