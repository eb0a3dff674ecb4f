use crate::bodies::{Appearance, Body, ColorPair};
use crate::core::Scene;
use crate::math::DisplayFrame;
use crate::render::{ColorSlots, Tile, TileBuffer};

/// Result of a render pass
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub tiles: TileBuffer,

    /// Colour pairs by slot; index `i` is slot `i + 1`
    pub palette: Vec<ColorPair>,
}

/// One render of a scene. Colour slots live only as long as the pass.
#[derive(Debug)]
pub struct RenderPass {
    frame: DisplayFrame,
    slots: ColorSlots,
    tiles: TileBuffer,
}

impl RenderPass {
    pub fn new(frame: DisplayFrame) -> Self {
        Self {
            frame,
            slots: ColorSlots::new(),
            tiles: TileBuffer::new(),
        }
    }

    /// Draws every body of the scene, deepest first
    pub fn draw_scene(&mut self, scene: &Scene) {
        for (_, body) in scene.bodies_in_z_order() {
            self.draw_body(body);
        }
    }

    /// Draws a body at its position and size for the pass's frame
    pub fn draw_body(&mut self, body: &Body) {
        let position = body.get_position().resolve(&self.frame);
        let size = body.get_size().resolve(&self.frame);
        self.draw(
            body.get_appearance(),
            position.x.round() as i32,
            position.y.round() as i32,
            size.x.round().max(0.0) as i32,
            size.y.round().max(0.0) as i32,
            body.get_orientation(),
        );
    }

    /// Draws an appearance over a rectangle of tiles
    pub fn draw(&mut self, appearance: &Appearance, x: i32, y: i32, width: i32, height: i32, orientation: f32) {
        match appearance {
            Appearance::Empty => {}
            Appearance::Solid { glyph, color } => {
                for row in 0..height {
                    for col in 0..width {
                        self.put(x.saturating_add(col), y.saturating_add(row), *glyph, *color);
                    }
                }
            }
            Appearance::Fixed { runs } => {
                let mut glyphs = runs
                    .iter()
                    .flat_map(|(text, color)| text.chars().map(move |glyph| (glyph, *color)));
                'rows: for row in 0..height {
                    for col in 0..width {
                        let Some((glyph, color)) = glyphs.next() else {
                            break 'rows;
                        };
                        self.put(x.saturating_add(col), y.saturating_add(row), glyph, color);
                    }
                }
            }
            Appearance::Rotating { .. } => {
                self.draw(appearance.select(orientation), x, y, width, height, orientation);
            }
            Appearance::Composite { first, second, split, vertical } => {
                let extent = if *vertical { height } else { width };
                let cut = if *split >= 1.0 {
                    split.round() as i32
                } else {
                    (split * extent as f32).round() as i32
                };
                let cut = cut.clamp(0, extent);

                if *vertical {
                    self.draw(first, x, y, width, cut, orientation);
                    self.draw(second, x, y.saturating_add(cut), width, height - cut, orientation);
                } else {
                    self.draw(first, x, y, cut, height, orientation);
                    self.draw(second, x.saturating_add(cut), y, width - cut, height, orientation);
                }
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, glyph: char, color: ColorPair) {
        if !self.is_visible(x, y) {
            return;
        }
        let slot = self.slots.allocate(color);
        self.tiles.push(Tile { x, y, glyph, slot });
    }

    /// Cells outside the display are dropped. A frame without an extent
    /// keeps everything.
    fn is_visible(&self, x: i32, y: i32) -> bool {
        let extent = self.frame.extent;
        if extent.x <= 0.0 || extent.y <= 0.0 {
            return true;
        }
        x >= 0 && y >= 0 && (x as f32) < extent.x && (y as f32) < extent.y
    }

    pub fn finish(self) -> RenderOutput {
        RenderOutput {
            tiles: self.tiles,
            palette: self.slots.into_palette(),
        }
    }
}
