//! Production rules and the rewriting loop.

use crate::error::RuleError;
use crate::sequence::SymbolSequence;
use std::collections::HashMap;
use tracing::debug;

/// A set of production rules mapping one symbol to its replacement string.
///
/// Symbols without a rule are copied through unchanged on every generation.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    rules: HashMap<char, String>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key -> body`, replacing any previous rule for `key`.
    ///
    /// No restriction is placed on either side; an empty `body` deletes `key` on rewrite.
    pub fn add_rule(&mut self, key: char, body: impl Into<String>) {
        self.rules.insert(key, body.into());
    }

    /// Registers a rule typed in by a user.
    ///
    /// The key must be a single ASCII letter and the body a non-empty run of ASCII
    /// letters, `+` and `-`. Branch brackets are reserved for presets.
    pub fn add_checked_rule(&mut self, key: &str, body: &str) -> Result<(), RuleError> {
        let symbol = single_symbol(key)
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| RuleError::InvalidKey(key.to_owned()))?;

        let valid_body = !body.is_empty()
            && body
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '+' || c == '-');
        if !valid_body {
            return Err(RuleError::InvalidBody {
                key: symbol,
                body: body.to_owned(),
            });
        }

        self.add_rule(symbol, body);
        Ok(())
    }

    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Returns the replacement registered for `key`.
    pub fn rule(&self, key: char) -> Option<&str> {
        self.rules.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites `sequence` in place for one generation.
    ///
    /// Every symbol present before the call is visited once, left to right. Symbols
    /// inserted by a replacement are not rewritten again until the next generation.
    pub fn expand_once(&self, sequence: &mut SymbolSequence) {
        let mut cursor = sequence.head();
        while let Some(id) = cursor {
            let body = sequence.symbol(id).and_then(|s| self.rules.get(&s));
            cursor = match body {
                Some(body) => sequence.replace(id, body),
                None => sequence.next(id),
            };
        }

        // Replaced nodes linger in the arena; reclaim them once they dominate.
        if sequence.detached() > sequence.len() {
            sequence.compact();
        }
    }

    /// Parses `axiom` and rewrites it `iterations` times.
    pub fn generate(&self, axiom: &str, iterations: u32) -> SymbolSequence {
        let mut sequence = SymbolSequence::parse(axiom);
        for generation in 0..iterations {
            if self.rules.is_empty() {
                break;
            }
            self.expand_once(&mut sequence);
            debug!(generation, len = sequence.len(), "[lsys] expanded");
        }
        sequence
    }
}

/// Returns the only character of `text`, if it has exactly one.
pub(crate) fn single_symbol(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
