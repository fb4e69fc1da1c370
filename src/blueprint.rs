use crate::interpreter::{CallbackRegistry, TurtleInterpreter};
use crate::sequence::SymbolSequence;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Symbol drawn as a branch segment.
pub const SEGMENT_SYMBOL: char = 'F';
/// Symbol drawn as a leaf hanging off the last step.
pub const LEAF_SYMBOL: char = 'L';
/// Symbol drawn as a flower at the tip of the last step.
pub const FLOWER_SYMBOL: char = 'J';

/// An 8-bit RGBA color.
pub type Rgba = [u8; 4];

/// The engine-agnostic geometry requested by one interpreted plant.
///
/// Renderers turn these primitives into triangles; nothing here is tessellated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantBlueprint {
    /// Tapered branch segments, in drawing order.
    pub segments: Vec<Segment>,

    /// Leaves, in drawing order.
    pub leaves: Vec<Leaf>,

    /// Flowers, in drawing order.
    pub flowers: Vec<Flower>,
}

impl PlantBlueprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn add_leaf(&mut self, leaf: Leaf) {
        self.leaves.push(leaf);
    }

    pub fn add_flower(&mut self, flower: Flower) {
        self.flowers.push(flower);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.leaves.is_empty() && self.flowers.is_empty()
    }

    /// Interprets `sequence` and collects the conventional plant primitives.
    ///
    /// - `F` produces a [`Segment`] spanning the step.
    /// - `L` produces a [`Leaf`] rooted at the start of the last step, pointing along it.
    /// - `J` produces a [`Flower`] centred at the end of the last step.
    ///
    /// `f` moves without drawing. Other symbols are ignored.
    pub fn from_sequence(
        interpreter: &TurtleInterpreter,
        sequence: &SymbolSequence,
        style: &PlantStyle,
    ) -> Self {
        let blueprint = RefCell::new(Self::new());

        let mut callbacks = CallbackRegistry::new()
            .with(SEGMENT_SYMBOL, |start, start_width, end, end_width| {
                blueprint.borrow_mut().add_segment(Segment {
                    start,
                    start_width,
                    end,
                    end_width,
                    color: style.branch_color,
                });
            })
            .with(LEAF_SYMBOL, |start, _, end, _| {
                blueprint.borrow_mut().add_leaf(Leaf::grow(style, start, end));
            })
            .with(FLOWER_SYMBOL, |_, _, end, _| {
                blueprint.borrow_mut().add_flower(Flower::bloom(style, end));
            });

        interpreter.interpret(sequence, &mut callbacks);
        drop(callbacks);

        blueprint.into_inner()
    }
}

/// A branch piece tapering from `start_width` to `end_width`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub start_width: f32,
    pub end: Vec2,
    pub end_width: f32,
    pub color: Rgba,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Outline used when tessellating a leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafShape {
    /// An oriented rectangle.
    #[default]
    Box,
    /// A kite whose widest point sits at `ratio` along the leaf.
    Kite,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub shape: LeafShape,
    /// Attachment point on the branch.
    pub base: Vec2,
    /// Far end of the leaf.
    pub tip: Vec2,
    pub width: f32,
    pub ratio: f32,
    pub color: Rgba,
}

impl Leaf {
    /// Builds a leaf at `start`, pointing from `start` towards `end`.
    ///
    /// A zero-length step yields a degenerate leaf with `tip == base`.
    pub fn grow(style: &PlantStyle, start: Vec2, end: Vec2) -> Self {
        let direction = (end - start).normalize_or_zero();
        Self {
            shape: style.leaf_shape,
            base: start,
            tip: start + direction * style.leaf_size.y,
            width: style.leaf_size.x,
            ratio: style.leaf_ratio,
            color: style.leaf_color,
        }
    }
}

/// A star-shaped corolla around a round centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub petals: u32,
    pub inner_color: Rgba,
    pub outer_color: Rgba,
}

impl Flower {
    pub fn bloom(style: &PlantStyle, center: Vec2) -> Self {
        Self {
            center,
            inner_radius: style.flower_inner_radius,
            outer_radius: style.flower_outer_radius,
            petals: style.flower_petals,
            inner_color: style.flower_inner_color,
            outer_color: style.flower_outer_color,
        }
    }
}

/// Dimensions and colors applied to branches, leaves and flowers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantStyle {
    pub leaf_shape: LeafShape,
    /// `(width, length)` of a leaf.
    pub leaf_size: Vec2,
    pub leaf_ratio: f32,
    pub flower_inner_radius: f32,
    pub flower_outer_radius: f32,
    pub flower_petals: u32,
    pub branch_color: Rgba,
    pub leaf_color: Rgba,
    /// Color of the round centre.
    pub flower_inner_color: Rgba,
    /// Color of the star-shaped corolla.
    pub flower_outer_color: Rgba,
}

impl Default for PlantStyle {
    fn default() -> Self {
        Self {
            leaf_shape: LeafShape::Box,
            leaf_size: Vec2::ONE,
            leaf_ratio: 0.5,
            flower_inner_radius: 1.0,
            flower_outer_radius: 2.0,
            flower_petals: 10,
            branch_color: [255; 4],
            leaf_color: [255; 4],
            flower_inner_color: [255; 4],
            flower_outer_color: [255; 4],
        }
    }
}
