use cairo::{Context, Format, ImageSurface, LinearGradient, Operator};
use pango::FontDescription;

use crate::core::{estimate_text_extent, Color, TextExtent, TextMeasurer, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    DrawCommand, Paint, RenderFrame, RenderLayer, Renderer, Stroke, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub commands_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Base and overlay frames land on separate image surfaces; `composite`
/// stacks them into one image.
#[derive(Debug)]
pub struct CairoRenderer {
    base: ImageSurface,
    overlay: ImageSurface,
    measure_surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = i32::try_from(viewport.width)
            .map_err(|_| PlotError::Renderer("surface width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| PlotError::Renderer("surface height exceeds i32".to_owned()))?;

        let create = |w: i32, h: i32| {
            ImageSurface::create(Format::ARgb32, w, h)
                .map_err(|err| map_backend_error("failed to create cairo surface", err))
        };
        Ok(Self {
            base: create(width, height)?,
            overlay: create(width, height)?,
            measure_surface: create(1, 1)?,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn base_surface(&self) -> &ImageSurface {
        &self.base
    }

    #[must_use]
    pub fn overlay_surface(&self) -> &ImageSurface {
        &self.overlay
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Paints the overlay over the base into a new surface.
    pub fn composite(&self) -> PlotResult<ImageSurface> {
        let output = ImageSurface::create(Format::ARgb32, self.base.width(), self.base.height())
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&output)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        for surface in [&self.base, &self.overlay] {
            context
                .set_source_surface(surface, 0.0, 0.0)
                .map_err(|err| map_backend_error("failed to set source surface", err))?;
            context
                .paint()
                .map_err(|err| map_backend_error("failed to composite layer", err))?;
        }
        drop(context);
        Ok(output)
    }

    fn clear(&self, context: &Context, layer: RenderLayer) -> PlotResult<()> {
        match layer {
            RenderLayer::Base => apply_color(context, self.clear_color),
            RenderLayer::Overlay => context.set_operator(Operator::Clear),
        }
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.clear(context, frame.layer)?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Line(line) => {
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    stroke(context, line.stroke)?;
                }
                DrawCommand::Path(path) => {
                    let mut points = path.points.iter();
                    if let Some(first) = points.next() {
                        context.move_to(first.x, first.y);
                    }
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    stroke(context, path.stroke)?;
                }
                DrawCommand::Polygon(polygon) => {
                    let mut points = polygon.points.iter();
                    if let Some(first) = points.next() {
                        context.move_to(first.x, first.y);
                    }
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    context.close_path();
                    fill(context, &polygon.paint, false)?;
                }
                DrawCommand::Rect(rect) => {
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    if let Some(paint) = &rect.fill {
                        fill(context, paint, rect.stroke.is_some())?;
                    }
                    if let Some(line) = rect.stroke {
                        stroke(context, line)?;
                    }
                }
                DrawCommand::Arc(arc) => {
                    context.new_sub_path();
                    context.arc(arc.center.x, arc.center.y, arc.radius, arc.start_angle, arc.end_angle);
                    if let Some(paint) = &arc.fill {
                        fill(context, paint, arc.stroke.is_some())?;
                    }
                    if let Some(line) = arc.stroke {
                        stroke(context, line)?;
                    }
                    context.new_path();
                }
                DrawCommand::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
            stats.commands_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl TextMeasurer for CairoRenderer {
    fn measure_text(&self, text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent {
        let Ok(context) = Context::new(&self.measure_surface) else {
            return estimate_text_extent(text, font_size, max_width);
        };
        let layout = text_layout(&context, text, font_size, max_width);
        let (width, height) = layout.pixel_size();
        TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let surface = match frame.layer {
            RenderLayer::Base => self.base.clone(),
            RenderLayer::Overlay => self.overlay.clone(),
        };
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn text_layout(context: &Context, text: &str, font_size: f64, max_width: Option<f64>) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size}px"));
    layout.set_font_description(Some(&font_description));
    if let Some(width) = max_width {
        layout.set_width(pango::units_from_double(width));
        layout.set_wrap(pango::WrapMode::WordChar);
    }
    layout.set_text(text);
    layout
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = text_layout(context, &text.text, text.font_size_px, text.max_width);
    if text.max_width.is_some() {
        layout.set_alignment(match text.h_align {
            TextHAlign::Left => pango::Alignment::Left,
            TextHAlign::Center => pango::Alignment::Center,
            TextHAlign::Right => pango::Alignment::Right,
        });
    }
    let (text_width, _) = layout.pixel_size();
    let x = match (text.max_width, text.h_align) {
        (Some(width), TextHAlign::Center) => text.x - width / 2.0,
        (Some(width), TextHAlign::Right) => text.x - width,
        (None, TextHAlign::Center) => text.x - f64::from(text_width) / 2.0,
        (None, TextHAlign::Right) => text.x - f64::from(text_width),
        (_, TextHAlign::Left) => text.x,
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
    context.new_path();
}

fn apply_color(context: &Context, color: Color) {
    let (r, g, b, a) = color.to_unit_rgba();
    context.set_source_rgba(r, g, b, a);
}

fn stroke(context: &Context, line: Stroke) -> PlotResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err))
}

fn fill(context: &Context, paint: &Paint, preserve: bool) -> PlotResult<()> {
    match paint {
        Paint::Solid(color) => apply_color(context, *color),
        Paint::VerticalGradient { y0, y1, stops } => {
            let gradient = LinearGradient::new(0.0, *y0, 0.0, *y1);
            let last = (stops.len().max(2) - 1) as f64;
            for (index, stop) in stops.iter().enumerate() {
                let (r, g, b, a) = stop.to_unit_rgba();
                gradient.add_color_stop_rgba(index as f64 / last, r, g, b, a);
            }
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set gradient", err))?;
        }
    }
    let result = if preserve { context.fill_preserve() } else { context.fill() };
    result.map_err(|err| map_backend_error("failed to fill path", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Renderer(format!("{prefix}: {err}"))
}
