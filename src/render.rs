//! The rasterizer: a widget drawing axes, ticks, origin, and sampled curves.
//!
//! Sampling density is exactly one sample per grid column, never finer, so
//! curve smoothness is capped by terminal resolution. There is no
//! interpolation between samples; steep or discontinuous functions show
//! gaps, which is expected.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::eval::Function;
use crate::plane::Plane;
use crate::scale::LinearScale;

/// Glyph set for the plane, for terminal compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Box-drawing characters and a bullet point.
    #[default]
    Unicode,
    /// Plain ASCII for pure TTY environments.
    Ascii,
}

impl GlyphSet {
    fn hline(self) -> char {
        match self {
            Self::Unicode => '─',
            Self::Ascii => '-',
        }
    }

    fn vline(self) -> char {
        match self {
            Self::Unicode => '│',
            Self::Ascii => '|',
        }
    }

    /// Tick marks and the origin marker share the plus glyph.
    fn tick(self) -> char {
        match self {
            Self::Unicode => '┼',
            Self::Ascii => '+',
        }
    }

    fn point(self) -> char {
        match self {
            Self::Unicode => '•',
            Self::Ascii => '.',
        }
    }
}

/// A grid position is a tick when it sits within one sample step of a
/// multiple of the tick interval. Strict `<` with fmod: continuous tick
/// alignment on a discrete grid cannot be exact, and this approximation is
/// part of the visual contract.
fn is_tick(value: f64, scale: f64, step: f64) -> bool {
    (value % scale).abs() < step
}

/// Widget drawing a [`Plane`] with one function and optionally its
/// derivative.
///
/// Out-of-area cells are clipped, never drawn: an off-screen origin still
/// maps to a coordinate, it just falls outside the grid. Non-finite samples
/// are skipped silently; a frame never aborts.
pub struct PlaneView<'a> {
    plane: &'a Plane,
    function: &'a dyn Function,
    derivative: Option<&'a dyn Function>,
    glyphs: GlyphSet,
    axis_style: Style,
    curve_style: Style,
    derivative_style: Style,
}

impl<'a> PlaneView<'a> {
    /// Creates a view of `plane` plotting `function`.
    #[must_use]
    pub fn new(plane: &'a Plane, function: &'a dyn Function) -> Self {
        Self {
            plane,
            function,
            derivative: None,
            glyphs: GlyphSet::default(),
            axis_style: Style::default(),
            curve_style: Style::default(),
            derivative_style: Style::default(),
        }
    }

    /// Also plots `derivative`, in the derivative style.
    #[must_use]
    pub fn derivative(mut self, derivative: &'a dyn Function) -> Self {
        self.derivative = Some(derivative);
        self
    }

    /// Sets the glyph set.
    #[must_use]
    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Sets the style for axes, ticks, and the origin marker.
    #[must_use]
    pub fn axis_style(mut self, style: Style) -> Self {
        self.axis_style = style;
        self
    }

    /// Sets the style for the primary curve.
    #[must_use]
    pub fn curve_style(mut self, style: Style) -> Self {
        self.curve_style = style;
        self
    }

    /// Sets the style for the derivative curve.
    #[must_use]
    pub fn derivative_style(mut self, style: Style) -> Self {
        self.derivative_style = style;
        self
    }

    /// Draws a glyph at fractional grid coordinates, clipping anything
    /// outside the plane grid or the widget area.
    fn plot(&self, area: Rect, buf: &mut Buffer, col: f64, row: f64, glyph: char, style: Style) {
        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as u16, row as u16);
        if col >= self.plane.columns || row >= self.plane.rows {
            return;
        }

        let x = area.x.saturating_add(col);
        let y = area.y.saturating_add(row);
        if x >= area.x.saturating_add(area.width) || y >= area.y.saturating_add(area.height) {
            return;
        }
        buf.set_string(x, y, glyph.to_string(), style);
    }

    fn render_axes(&self, area: Rect, buf: &mut Buffer, sx: &LinearScale, sy: &LinearScale) {
        let x0 = sx.scale(0.0);
        let y0 = sy.scale(0.0);
        let xstep = self.plane.xstep();
        let ystep = self.plane.ystep();

        for i in 0..self.plane.columns {
            let x = self.plane.xmin + xstep * f64::from(i);
            let glyph = if is_tick(x, self.plane.xscale, xstep) {
                self.glyphs.tick()
            } else {
                self.glyphs.hline()
            };
            self.plot(area, buf, f64::from(i), y0, glyph, self.axis_style);
        }

        for i in 0..self.plane.rows {
            let y = self.plane.ymin + ystep * f64::from(i);
            let glyph = if is_tick(y, self.plane.yscale, ystep) {
                self.glyphs.tick()
            } else {
                self.glyphs.vline()
            };
            self.plot(area, buf, x0, f64::from(i), glyph, self.axis_style);
        }

        // Origin marker overdraws whatever axis glyph landed there.
        self.plot(area, buf, x0, y0, self.glyphs.tick(), self.axis_style);
    }

    /// One sample per grid column: evaluate, map, skip non-finite, plot.
    fn render_curve(
        &self,
        f: &dyn Function,
        style: Style,
        area: Rect,
        buf: &mut Buffer,
        sx: &LinearScale,
        sy: &LinearScale,
    ) {
        let xstep = self.plane.xstep();
        for i in 0..self.plane.columns {
            let x = self.plane.xmin + xstep * f64::from(i);
            let y = f.eval(x);
            if !y.is_finite() {
                continue;
            }
            self.plot(area, buf, sx.scale(x), sy.scale(y), self.glyphs.point(), style);
        }
    }
}

impl Widget for PlaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Degenerate bounds are a defect prevented upstream; skip the frame
        // rather than divide by zero.
        let Ok(sx) = self.plane.x_to_grid() else { return };
        let Ok(sy) = self.plane.y_to_grid() else { return };

        self.render_axes(area, buf, &sx, &sy);
        self.render_curve(self.function, self.curve_style, area, buf, &sx, &sy);
        if let Some(df) = self.derivative {
            self.render_curve(df, self.derivative_style, area, buf, &sx, &sy);
        }
    }
}
