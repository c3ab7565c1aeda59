#[macro_use]
mod macros;

pub mod carbon;
pub mod currency;
pub mod energy;
pub mod equivalence;
pub mod power;
pub mod ratios;
pub mod time;
