//! # lsys-flora
//!
//! Engine-agnostic L-System rewriting and 2D turtle interpretation for procedural plants.
//!
//! A [`Grammar`] rewrites an axiom into a [`SymbolSequence`]; a [`TurtleInterpreter`] then
//! walks that sequence once, reporting every step to per-symbol callbacks. The
//! [`PlantBlueprint`] collects those steps as segments, leaves and flowers that a renderer
//! can tessellate however it likes.

pub mod blueprint;
pub mod changer;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod lsystem;
pub mod preset;
pub mod sequence;
pub mod turtle;

pub use blueprint::*;
pub use changer::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use lsystem::*;
pub use preset::*;
pub use sequence::*;
pub use turtle::*;
