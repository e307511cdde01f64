mod cell;
mod position;
mod state;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use cell::*;
pub use position::*;
pub use state::*;
