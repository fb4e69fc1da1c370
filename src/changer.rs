//! Scalar transforms applied to the turtle's width and length on every forward step.

use serde::{Deserialize, Serialize};

/// How a [`Changer`] evolves its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangerKind {
    /// Returns the value unchanged.
    #[default]
    None,
    /// `value + param`.
    Linear,
    /// `value * param`.
    Geometric,
    /// `value ^ param`.
    Exponential,
}

/// A one-argument numeric transform used to taper or grow branches.
///
/// Applied once per `F`/`f` step. Non-finite results (e.g. a negative value raised to a
/// fractional power) are passed through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Changer {
    pub kind: ChangerKind,
    pub param: f32,
}

impl Changer {
    pub fn new(kind: ChangerKind, param: f32) -> Self {
        Self { kind, param }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn linear(param: f32) -> Self {
        Self::new(ChangerKind::Linear, param)
    }

    pub fn geometric(param: f32) -> Self {
        Self::new(ChangerKind::Geometric, param)
    }

    pub fn exponential(param: f32) -> Self {
        Self::new(ChangerKind::Exponential, param)
    }

    /// Computes the next value from `value`.
    pub fn apply(self, value: f32) -> f32 {
        match self.kind {
            ChangerKind::None => value,
            ChangerKind::Linear => value + self.param,
            ChangerKind::Geometric => value * self.param,
            ChangerKind::Exponential => value.powf(self.param),
        }
    }
}
