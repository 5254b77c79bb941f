//! Render sink contract
//!
//! The engines never touch a real drawing surface. Each frame they emit
//! primitive draw commands through [`RenderSink`]; the host supplies a
//! backend (canvas, GPU, terminal). [`RecordingSink`] captures the command
//! stream for headless runs and tests.

use glam::Vec2;

/// RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
}

/// A gradient color stop at a normalized offset in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Fill/stroke paint: flat color or gradient
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        start: Vec2,
        end: Vec2,
        stops: Vec<GradientStop>,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub const fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

/// Horizontal text anchor relative to the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Center,
    End,
}

/// Abstract drawing surface accepting primitive commands
///
/// Coordinates are in board pixels, origin top-left, y-down. Implementations
/// must not retain state between commands beyond the drawn output.
pub trait RenderSink {
    fn clear(&mut self, color: Color);

    /// Filled rectangle; `corner_radius` of 0 means square corners
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, corner_radius: f32, paint: &Paint);

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, corner_radius: f32, line_width: f32, paint: &Paint);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Stroked circular arc from `start_angle` to `end_angle` (radians)
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        line_width: f32,
        paint: &Paint,
    );

    /// Straight line; `dash` is an on/off length pair for dashed strokes
    fn line(&mut self, from: Vec2, to: Vec2, line_width: f32, dash: Option<[f32; 2]>, paint: &Paint);

    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: TextAnchor, paint: &Paint);
}

/// One recorded draw command (mirrors the [`RenderSink`] methods)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    FillRect {
        pos: Vec2,
        size: Vec2,
        corner_radius: f32,
        paint: Paint,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        corner_radius: f32,
        line_width: f32,
        paint: Paint,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    StrokeArc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        line_width: f32,
        paint: Paint,
    },
    Line {
        from: Vec2,
        to: Vec2,
        line_width: f32,
        dash: Option<[f32; 2]>,
        paint: Paint,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        anchor: TextAnchor,
        paint: Paint,
    },
}

/// Backend-free sink that records the command stream
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded commands, leaving the sink empty for the next frame
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, corner_radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::FillRect {
            pos,
            size,
            corner_radius,
            paint: paint.clone(),
        });
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, corner_radius: f32, line_width: f32, paint: &Paint) {
        self.commands.push(DrawCmd::StrokeRect {
            pos,
            size,
            corner_radius,
            line_width,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        line_width: f32,
        paint: &Paint,
    ) {
        self.commands.push(DrawCmd::StrokeArc {
            center,
            radius,
            start_angle,
            end_angle,
            line_width,
            paint: paint.clone(),
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, line_width: f32, dash: Option<[f32; 2]>, paint: &Paint) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            line_width,
            dash,
            paint: paint.clone(),
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: TextAnchor, paint: &Paint) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            size,
            anchor,
            paint: paint.clone(),
        });
    }
}
