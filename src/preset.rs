//! Named, serializable plant recipes.

use crate::blueprint::{LeafShape, PlantBlueprint, PlantStyle};
use crate::changer::Changer;
use crate::error::{PresetError, RuleError};
use crate::grammar::{Grammar, single_symbol};
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything needed to grow one plant: grammar, turtle setup and leaf/flower style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub axiom: String,
    /// Keyed by single-symbol strings so the map survives JSON round trips.
    #[serde(default)]
    pub rules: BTreeMap<String, String>,
    pub iterations: u32,
    #[serde(default)]
    pub turtle: TurtleConfig,
    #[serde(default)]
    pub style: PlantStyle,
}

impl Preset {
    /// Parses a preset from JSON.
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the grammar, rejecting keys that are not exactly one symbol.
    pub fn grammar(&self) -> Result<Grammar, RuleError> {
        let mut grammar = Grammar::new();
        for (key, body) in &self.rules {
            let symbol =
                single_symbol(key).ok_or_else(|| RuleError::InvalidKey(key.clone()))?;
            grammar.add_rule(symbol, body.as_str());
        }
        Ok(grammar)
    }

    /// Expands and interprets the preset.
    pub fn build_blueprint(&self) -> Result<PlantBlueprint, PresetError> {
        let sequence = self.grammar()?.generate(&self.axiom, self.iterations);
        let interpreter = TurtleInterpreter::new(self.turtle);
        Ok(PlantBlueprint::from_sequence(&interpreter, &sequence, &self.style))
    }

    /// Looks up a built-in preset by name.
    pub fn find(name: &str) -> Option<Self> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }

    /// The presets shipped with the crate.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self {
                name: "Flower 1".into(),
                axiom: "F[-fL]F[+fL]FBFFFBBFFFFFJ".into(),
                rules: rules(&[("B", "[-CCCFFJ][+CCCFFJ]"), ("C", "F[-FJ][+FJ]")]),
                iterations: 3,
                turtle: upright(
                    4.0,
                    20.0,
                    40.0,
                    Changer::geometric(0.8),
                    Changer::geometric(0.8),
                ),
                style: PlantStyle {
                    leaf_shape: LeafShape::Kite,
                    leaf_size: Vec2::new(5.0, 20.0),
                    leaf_ratio: 0.5,
                    flower_inner_radius: 1.5,
                    flower_outer_radius: 3.0,
                    branch_color: [25, 99, 30, 255],
                    leaf_color: [25, 99, 30, 255],
                    flower_inner_color: [224, 194, 61, 255],
                    flower_outer_color: [71, 76, 166, 255],
                    ..PlantStyle::default()
                },
            },
            Self {
                name: "Flower 2".into(),
                axiom: "F[+fL]F[-fL]FJ".into(),
                rules: BTreeMap::new(),
                iterations: 1,
                turtle: upright(1.0, 20.0, 40.0, Changer::none(), Changer::none()),
                style: PlantStyle {
                    leaf_shape: LeafShape::Kite,
                    leaf_size: Vec2::new(4.0, 20.0),
                    leaf_ratio: 0.5,
                    flower_inner_radius: 3.0,
                    flower_outer_radius: 6.0,
                    branch_color: [87, 212, 130, 255],
                    leaf_color: [87, 212, 130, 255],
                    flower_inner_color: [235, 207, 52, 255],
                    flower_outer_color: [235, 52, 171, 255],
                    ..PlantStyle::default()
                },
            },
            Self {
                name: "Tree 1".into(),
                axiom: "FFFFFB".into(),
                rules: rules(&[("B", "[-FBfL][+FBfL]")]),
                iterations: 7,
                turtle: upright(
                    12.0,
                    15.0,
                    25.0,
                    Changer::geometric(0.7),
                    Changer::geometric(0.95),
                ),
                style: PlantStyle {
                    leaf_shape: LeafShape::Kite,
                    leaf_size: Vec2::new(3.0, 5.0),
                    leaf_ratio: 0.5,
                    flower_inner_radius: 3.0,
                    flower_outer_radius: 6.0,
                    branch_color: [161, 90, 43, 255],
                    leaf_color: [163, 207, 60, 255],
                    flower_inner_color: [235, 207, 52, 255],
                    flower_outer_color: [235, 52, 171, 255],
                    ..PlantStyle::default()
                },
            },
            Self {
                name: "Tree 2".into(),
                axiom: "FFX".into(),
                rules: rules(&[("X", "F[-FXL][+FXL]X")]),
                iterations: 4,
                turtle: upright(
                    12.0,
                    20.0,
                    30.0,
                    Changer::geometric(0.7),
                    Changer::geometric(0.95),
                ),
                style: PlantStyle {
                    leaf_shape: LeafShape::Kite,
                    leaf_size: Vec2::splat(30.0),
                    leaf_ratio: 0.5,
                    flower_inner_radius: 3.0,
                    flower_outer_radius: 6.0,
                    branch_color: [161, 90, 43, 255],
                    leaf_color: [163, 207, 60, 255],
                    flower_inner_color: [235, 207, 52, 255],
                    flower_outer_color: [235, 52, 171, 255],
                    ..PlantStyle::default()
                },
            },
        ]
    }
}

fn rules(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

/// All built-in plants grow upwards from just below the origin.
fn upright(
    width: f32,
    length: f32,
    delta_angle: f32,
    width_changer: Changer,
    length_changer: Changer,
) -> TurtleConfig {
    TurtleConfig {
        position: Vec2::new(0.0, -80.0),
        angle: 90.0,
        width,
        length,
        delta_angle,
        width_changer,
        length_changer,
    }
}
