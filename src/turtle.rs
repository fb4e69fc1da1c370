//! Turtle state and the reserved drawing symbols.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// One snapshot of this struct is pushed on `[` and restored on `]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Heading in degrees. 0° points along +X, 90° along +Y.
    pub angle: f32,

    /// Width of the next segment's start.
    pub width: f32,

    /// Distance covered by the next forward step.
    pub length: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 90.0,
            width: 1.0,
            length: 1.0,
        }
    }
}

impl TurtleState {
    /// Returns the unit vector the turtle is facing.
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians())
    }

    /// Position reached after one forward step.
    pub fn ahead(&self) -> Vec2 {
        self.position + self.heading() * self.length
    }

    /// Adds `degrees` to the heading.
    pub fn turn(&mut self, degrees: f32) {
        self.angle += degrees;
    }
}

/// Operations triggered by a symbol during interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Step forward and evolve width/length (`F` and `f`).
    Forward,
    /// Increase the heading by the turn increment (`-`).
    TurnLeft,
    /// Decrease the heading by the turn increment (`+`).
    TurnRight,
    /// Save the full turtle state (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
    /// Any other symbol; only meaningful if a callback is registered for it.
    Custom(char),
}

impl TurtleOp {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' | 'f' => Self::Forward,
            '-' => Self::TurnLeft,
            '+' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            other => Self::Custom(other),
        }
    }
}
