//! Core draft domain types: heroes, teams, phases, and the turn sequence.

pub use self::{hero::*, sequence::*};

mod hero;
mod sequence;
