use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{
    ArcPrimitive, LinePrimitive, PathPrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

/// Canvas a frame is painted onto.
///
/// The overlay sits above the base and is repainted on its own for highlights
/// and the selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderLayer {
    Base,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Path(PathPrimitive),
    Polygon(PolygonPrimitive),
    Rect(RectPrimitive),
    Arc(ArcPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> PlotResult<()> {
        match self {
            DrawCommand::Line(line) => line.validate(),
            DrawCommand::Path(path) => path.validate(),
            DrawCommand::Polygon(polygon) => polygon.validate(),
            DrawCommand::Rect(rect) => rect.validate(),
            DrawCommand::Arc(arc) => arc.validate(),
            DrawCommand::Text(text) => text.validate(),
        }
    }
}

/// Per-kind command counts of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub lines: usize,
    pub paths: usize,
    pub polygons: usize,
    pub rects: usize,
    pub arcs: usize,
    pub texts: usize,
}

/// Backend-agnostic, ordered draw list for one layer; painted first to last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layer: RenderLayer,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, layer: RenderLayer) -> Self {
        Self {
            viewport,
            layer,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn with(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.commands.iter().try_for_each(DrawCommand::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        let mut stats = FrameStats::default();
        for command in &self.commands {
            match command {
                DrawCommand::Line(_) => stats.lines += 1,
                DrawCommand::Path(_) => stats.paths += 1,
                DrawCommand::Polygon(_) => stats.polygons += 1,
                DrawCommand::Rect(_) => stats.rects += 1,
                DrawCommand::Arc(_) => stats.arcs += 1,
                DrawCommand::Text(_) => stats.texts += 1,
            }
        }
        stats
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}
