use crate::math::AngleRange;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Outline of a body. Collision always uses the bounding rectangle; the
/// tag is carried for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    #[default]
    Rectangle,
    Line,
    Circle,
    Triangle,
}

/// Foreground and background colour indices of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ColorPair {
    pub fg: u8,
    pub bg: u8,
}

impl ColorPair {
    pub fn new(fg: u8, bg: u8) -> Self {
        Self { fg, bg }
    }
}

static EMPTY: Appearance = Appearance::Empty;

/// How a body is drawn. The physics never looks at this.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Appearance {
    /// Fully transparent
    #[default]
    Empty,

    /// One glyph and colour over the whole body, any size
    Solid { glyph: char, color: ColorPair },

    /// Runs of text laid out left to right, top to bottom over a fixed
    /// size; tiles past the end of the runs stay transparent
    Fixed { runs: Vec<(String, ColorPair)> },

    /// Picks the first sector containing the body's orientation
    Rotating {
        sectors: Vec<(AngleRange, Appearance)>,
        fallback: Option<Box<Appearance>>,
    },

    /// Splits the body in two. A `split` below 1 is a proportion of the
    /// size, otherwise an absolute number of tiles
    Composite {
        first: Box<Appearance>,
        second: Box<Appearance>,
        split: f32,
        vertical: bool,
    },
}

impl Appearance {
    /// Shorthand for a solid appearance
    pub fn solid(glyph: char, color: ColorPair) -> Self {
        Appearance::Solid { glyph, color }
    }

    /// Chooses the variant used for a given orientation
    pub fn select(&self, orientation: f32) -> &Appearance {
        match self {
            Appearance::Rotating { sectors, fallback } => sectors
                .iter()
                .find(|(sector, _)| sector.contains(orientation))
                .map(|(_, appearance)| appearance.select(orientation))
                .or_else(|| fallback.as_deref().map(|f| f.select(orientation)))
                .unwrap_or(&EMPTY),
            other => other,
        }
    }
}
