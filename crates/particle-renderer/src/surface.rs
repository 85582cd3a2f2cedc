//! Drawing surface abstraction
//!
//! The HUD draws into any `RenderSurface`. Frames are recorded into a
//! `DisplayList` and handed to a `Present` implementation, which replays them
//! through egui's painter.

use glam::Vec2;

use crate::color::Color;

/// Which point of a text box is pinned to the anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    MidTop,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    MidBottom,
    BottomRight,
}

impl Anchor {
    pub fn to_align2(self) -> egui::Align2 {
        match self {
            Anchor::TopLeft => egui::Align2::LEFT_TOP,
            Anchor::MidTop => egui::Align2::CENTER_TOP,
            Anchor::TopRight => egui::Align2::RIGHT_TOP,
            Anchor::MidLeft => egui::Align2::LEFT_CENTER,
            Anchor::Center => egui::Align2::CENTER_CENTER,
            Anchor::MidRight => egui::Align2::RIGHT_CENTER,
            Anchor::BottomLeft => egui::Align2::LEFT_BOTTOM,
            Anchor::MidBottom => egui::Align2::CENTER_BOTTOM,
            Anchor::BottomRight => egui::Align2::RIGHT_BOTTOM,
        }
    }
}

/// Font selection for text readouts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Height in points
    pub size: f32,
    pub monospace: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 32.0,
            monospace: false,
        }
    }
}

impl TextStyle {
    pub fn font_id(&self) -> egui::FontId {
        if self.monospace {
            egui::FontId::monospace(self.size)
        } else {
            egui::FontId::proportional(self.size)
        }
    }
}

/// Sink for already-computed shapes and text
pub trait RenderSurface {
    /// Clear the whole surface
    fn fill(&mut self, color: Color);

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32);

    fn draw_text(
        &mut self,
        text: &str,
        style: TextStyle,
        color: Color,
        at: Vec2,
        anchor: Anchor,
    );
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Circle {
        color: Color,
        center: Vec2,
        radius: f32,
    },
    Text {
        text: String,
        style: TextStyle,
        color: Color,
        at: Vec2,
        anchor: Anchor,
    },
}

/// Ordered record of one frame's drawing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every `Text` command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay the recorded commands through an egui painter
    pub fn paint(&self, painter: &egui::Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::Fill(color) => {
                    painter.rect_filled(painter.clip_rect(), 0.0, *color);
                }
                DrawCommand::Circle {
                    color,
                    center,
                    radius,
                } => {
                    painter.circle_filled(egui::pos2(center.x, center.y), *radius, *color);
                }
                DrawCommand::Text {
                    text,
                    style,
                    color,
                    at,
                    anchor,
                } => {
                    painter.text(
                        egui::pos2(at.x, at.y),
                        anchor.to_align2(),
                        text,
                        style.font_id(),
                        (*color).into(),
                    );
                }
            }
        }
    }
}

impl RenderSurface for DisplayList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            color,
            center,
            radius,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        style: TextStyle,
        color: Color,
        at: Vec2,
        anchor: Anchor,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            style,
            color,
            at,
            anchor,
        });
    }
}

/// Shows a finished frame on screen
pub trait Present {
    type Error;

    /// Drawable size in points
    fn viewport(&self) -> Vec2;

    fn present(&mut self, frame: &DisplayList) -> Result<(), Self::Error>;
}
