use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{ChartSpec, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    BarChartStyle, ChartSurface, Color, RenderFrame, TextHAlign, ValueLabelFormatterFn,
    build_bar_chart_frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo chart surface rendering into an image surface.
///
/// Disposing clears the surface; resizing recreates it and redraws the
/// current chart without re-projecting.
pub struct CairoSurface {
    surface: ImageSurface,
    style: BarChartStyle,
    clear_color: Color,
    formatter: Option<ValueLabelFormatterFn>,
    chart: Option<ChartSpec>,
    last_stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(viewport: Viewport) -> DashboardResult<Self> {
        Ok(Self {
            surface: create_surface(viewport)?,
            style: BarChartStyle::default(),
            clear_color: Color::rgb(0.11, 0.12, 0.14),
            formatter: None,
            chart: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            u32::try_from(self.surface.width()).unwrap_or_default(),
            u32::try_from(self.surface.height()).unwrap_or_default(),
        )
    }

    pub fn set_clear_color(&mut self, color: Color) -> DashboardResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_style(&mut self, style: BarChartStyle) {
        self.style = style;
    }

    pub fn set_value_label_formatter(&mut self, formatter: ValueLabelFormatterFn) {
        self.formatter = Some(formatter);
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface content as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> DashboardResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            DashboardError::Render(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| DashboardError::Render(format!("failed to write png: {err}")))
    }

    fn draw(&mut self) -> DashboardResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let Some(spec) = &self.chart else {
            self.last_stats = CairoRenderStats::default();
            return Ok(());
        };
        let frame =
            build_bar_chart_frame(spec, self.viewport(), &self.style, self.formatter.as_ref())?;
        self.last_stats = draw_frame(&context, &frame)?;
        Ok(())
    }
}

impl ChartSurface for CairoSurface {
    fn dispose(&mut self) {
        self.chart = None;
        if let Err(err) = self.draw() {
            tracing::warn!(error = %err, "failed to clear cairo surface on dispose");
        }
    }

    fn render(&mut self, spec: &ChartSpec) -> DashboardResult<()> {
        let previous = self.chart.replace(spec.clone());
        if let Err(err) = self.draw() {
            self.chart = previous;
            return Err(err);
        }
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> DashboardResult<()> {
        let previous = std::mem::replace(&mut self.surface, create_surface(viewport)?);
        if let Err(err) = self.draw() {
            self.surface = previous;
            return Err(err);
        }
        Ok(())
    }
}

fn create_surface(viewport: Viewport) -> DashboardResult<ImageSurface> {
    let (Ok(width), Ok(height)) = (i32::try_from(viewport.width), i32::try_from(viewport.height))
    else {
        return Err(DashboardError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    };
    if width <= 0 || height <= 0 {
        return Err(DashboardError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn draw_frame(context: &Context, frame: &RenderFrame) -> DashboardResult<CairoRenderStats> {
    frame.validate()?;
    let mut stats = CairoRenderStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for rect in &frame.rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        if rect.border_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill bar", err))?;
            apply_color(context, rect.border_color);
            context.set_line_width(rect.border_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke bar border", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill bar", err))?;
        }
        stats.rects_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> DashboardError {
    DashboardError::Render(format!("{prefix}: {err}"))
}
