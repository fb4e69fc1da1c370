//! One self-contained L-System: rules, turtle configuration and drawing callbacks.

use crate::grammar::Grammar;
use crate::interpreter::{CallbackRegistry, TurtleConfig, TurtleInterpreter};
use crate::sequence::SymbolSequence;
use glam::Vec2;

/// Bundles a [`Grammar`], a [`TurtleInterpreter`] and a [`CallbackRegistry`].
///
/// Every instance owns its own rule and callback maps.
#[derive(Debug, Default)]
pub struct LSystem<'a> {
    pub grammar: Grammar,
    pub interpreter: TurtleInterpreter,
    pub callbacks: CallbackRegistry<'a>,
}

impl<'a> LSystem<'a> {
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            grammar: Grammar::new(),
            interpreter: TurtleInterpreter::new(config),
            callbacks: CallbackRegistry::new(),
        }
    }

    pub fn config_mut(&mut self) -> &mut TurtleConfig {
        self.interpreter.config_mut()
    }

    pub fn add_rule(&mut self, key: char, body: impl Into<String>) {
        self.grammar.add_rule(key, body);
    }

    pub fn clear_rules(&mut self) {
        self.grammar.clear_rules();
    }

    pub fn add_callback<F>(&mut self, symbol: char, callback: F)
    where
        F: FnMut(Vec2, f32, Vec2, f32) + 'a,
    {
        self.callbacks.register(symbol, callback);
    }

    /// Expands `axiom` for `iterations` generations and interprets the result.
    ///
    /// Returns the expanded sequence so callers can inspect or reuse it.
    pub fn run(&mut self, axiom: &str, iterations: u32) -> SymbolSequence {
        let sequence = self.grammar.generate(axiom, iterations);
        self.interpreter.interpret(&sequence, &mut self.callbacks);
        sequence
    }
}
