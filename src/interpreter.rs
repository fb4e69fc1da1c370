//! Interpreter that walks an expanded symbol sequence with a 2D turtle.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register drawing callbacks per symbol in a [`CallbackRegistry`], then call
//! [`TurtleInterpreter::interpret`] with a [`SymbolSequence`]. All output is delivered
//! through the callbacks.

use crate::changer::Changer;
use crate::sequence::SymbolSequence;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Initial turtle state and the per-step evolution rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Starting position.
    pub position: Vec2,
    /// Starting heading in degrees.
    pub angle: f32,
    /// Starting width.
    pub width: f32,
    /// Starting step length.
    pub length: f32,
    /// Turn increment (in degrees) applied by `-` and `+`.
    pub delta_angle: f32,
    /// Applied to the width on every forward step.
    pub width_changer: Changer,
    /// Applied to the length on every forward step.
    pub length_changer: Changer,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        let start = TurtleState::default();
        Self {
            position: start.position,
            angle: start.angle,
            width: start.width,
            length: start.length,
            delta_angle: 90.0,
            width_changer: Changer::none(),
            length_changer: Changer::none(),
        }
    }
}

impl TurtleConfig {
    /// The turtle state interpretation starts from.
    pub fn initial_state(&self) -> TurtleState {
        TurtleState {
            position: self.position,
            angle: self.angle,
            width: self.width,
            length: self.length,
        }
    }
}

/// Drawing callback: `(start, start_width, end, end_width)`.
pub type EdgeCallback<'a> = Box<dyn FnMut(Vec2, f32, Vec2, f32) + 'a>;

/// Per-symbol drawing callbacks.
///
/// Callbacks may borrow from their environment for `'a`, which lets a caller collect
/// geometry into a local buffer for the duration of one interpretation.
#[derive(Default)]
pub struct CallbackRegistry<'a> {
    callbacks: HashMap<char, EdgeCallback<'a>>,
}

impl<'a> CallbackRegistry<'a> {
    pub fn new() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }

    /// Registers `callback` for `symbol`, replacing any previous one.
    pub fn register<F>(&mut self, symbol: char, callback: F)
    where
        F: FnMut(Vec2, f32, Vec2, f32) + 'a,
    {
        self.callbacks.insert(symbol, Box::new(callback));
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<F>(mut self, symbol: char, callback: F) -> Self
    where
        F: FnMut(Vec2, f32, Vec2, f32) + 'a,
    {
        self.register(symbol, callback);
        self
    }

    pub fn remove(&mut self, symbol: char) -> bool {
        self.callbacks.remove(&symbol).is_some()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.callbacks.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invokes the callback for `symbol`, returning whether one was registered.
    pub fn invoke(&mut self, symbol: char, start: Vec2, w0: f32, end: Vec2, w1: f32) -> bool {
        match self.callbacks.get_mut(&symbol) {
            Some(callback) => {
                callback(start, w0, end, w1);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for CallbackRegistry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut symbols: Vec<_> = self.callbacks.keys().collect();
        symbols.sort();
        f.debug_struct("CallbackRegistry")
            .field("symbols", &symbols)
            .finish()
    }
}

/// Interprets an expanded L-System sequence as 2D turtle commands.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TurtleConfig {
        &mut self.config
    }

    /// Walks `sequence` once, left to right, firing `callbacks` along the way.
    ///
    /// # Symbols
    ///
    /// - `F`, `f`: step `length` along the heading, evolve width and length through the
    ///   changers, then fire the callback registered under that symbol with
    ///   `(position, width, next_position, next_width)`.
    /// - `-` / `+`: turn by `+delta_angle` / `-delta_angle`.
    /// - `[` / `]`: push / pop the full turtle state. A `]` with nothing to pop is ignored.
    /// - anything else: fire its callback, if any, with the most recent forward step
    ///   `(previous_position, previous_width, position, width)`. The turtle is not moved.
    pub fn interpret(&self, sequence: &SymbolSequence, callbacks: &mut CallbackRegistry<'_>) {
        let mut turtle = self.config.initial_state();
        let mut stack: Vec<TurtleState> = Vec::new();

        // The last completed step, reported to custom-symbol callbacks.
        let mut prev_position = turtle.position;
        let mut prev_width = turtle.width;

        let mut steps = 0usize;
        let mut fired = 0usize;

        for symbol in sequence {
            match TurtleOp::from_symbol(symbol) {
                TurtleOp::Forward => {
                    let next_position = turtle.ahead();
                    let next_width = self.config.width_changer.apply(turtle.width);
                    let next_length = self.config.length_changer.apply(turtle.length);

                    if callbacks.invoke(
                        symbol,
                        turtle.position,
                        turtle.width,
                        next_position,
                        next_width,
                    ) {
                        fired += 1;
                    }

                    prev_position = turtle.position;
                    prev_width = turtle.width;
                    turtle.position = next_position;
                    turtle.width = next_width;
                    turtle.length = next_length;
                    steps += 1;
                }
                TurtleOp::TurnLeft => turtle.turn(self.config.delta_angle),
                TurtleOp::TurnRight => turtle.turn(-self.config.delta_angle),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => trace!("[lsys] unmatched ']' ignored"),
                },
                TurtleOp::Custom(c) => {
                    if callbacks.invoke(
                        c,
                        prev_position,
                        prev_width,
                        turtle.position,
                        turtle.width,
                    ) {
                        fired += 1;
                    }
                }
            }
        }

        debug!(
            steps,
            fired,
            open_branches = stack.len(),
            "[lsys] interpretation finished"
        );
    }
}
