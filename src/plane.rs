//! The viewport: a rectangle of math-space mapped onto the character grid.
//!
//! A [`Plane`] owns the visible bounds, the tick intervals, and the grid
//! resolution, and applies the view transforms (pan, zoom, restore). It is
//! created once per session and mutated in place; no other component ever
//! replaces it.

use std::f64::consts::PI;

use crate::scale::{project, LinearScale};
use crate::Result;

/// Default left bound of the visible rectangle.
pub const DEFAULT_XMIN: f64 = -2.0 * PI;
/// Default right bound of the visible rectangle.
pub const DEFAULT_XMAX: f64 = 2.0 * PI;
/// Default bottom bound of the visible rectangle.
pub const DEFAULT_YMIN: f64 = -PI;
/// Default top bound of the visible rectangle.
pub const DEFAULT_YMAX: f64 = PI;
/// Default tick interval on both axes.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Zoom factor for a single zoom-in step (~5%).
pub const ZOOM_IN_FACTOR: f64 = 1.0 / 1.05;
/// Zoom factor for a single zoom-out step (~5%).
pub const ZOOM_OUT_FACTOR: f64 = 1.05;

/// Fraction of the visible span moved per pan step.
const SHIFT_DIVISOR: f64 = 16.0;

/// The visible rectangle of math-space plus the grid it is drawn onto.
///
/// Invariants: `xmin < xmax`, `ymin < ymax`, both tick scales positive,
/// `columns >= 1` and `rows >= 1`. All operations preserve them by
/// construction: `shift` translates without changing spans and `zoom`
/// multiplies spans by a positive factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Left bound of the visible rectangle.
    pub xmin: f64,
    /// Right bound of the visible rectangle.
    pub xmax: f64,
    /// Bottom bound of the visible rectangle.
    pub ymin: f64,
    /// Top bound of the visible rectangle.
    pub ymax: f64,
    /// Tick interval along the x axis.
    pub xscale: f64,
    /// Tick interval along the y axis.
    pub yscale: f64,
    /// Grid width in character cells.
    pub columns: u16,
    /// Grid height in character cells.
    pub rows: u16,
}

impl Plane {
    /// Creates a plane with the default bounds and the given grid size.
    #[must_use]
    pub fn new(columns: u16, rows: u16) -> Self {
        let mut plane = Self {
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
            ymin: DEFAULT_YMIN,
            ymax: DEFAULT_YMAX,
            xscale: DEFAULT_SCALE,
            yscale: DEFAULT_SCALE,
            columns: columns.max(1),
            rows: rows.max(1),
        };
        plane.restore();
        plane
    }

    /// Resets bounds and tick scales to the defaults.
    ///
    /// Independent of prior pan/zoom state; the grid size is untouched. Used
    /// for the explicit reset command and whenever a new expression is
    /// installed (new function, fresh view).
    pub fn restore(&mut self) {
        self.xmin = DEFAULT_XMIN;
        self.xmax = DEFAULT_XMAX;
        self.ymin = DEFAULT_YMIN;
        self.ymax = DEFAULT_YMAX;
        self.xscale = DEFAULT_SCALE;
        self.yscale = DEFAULT_SCALE;
    }

    /// Refreshes the grid size after a terminal resize. Bounds are untouched.
    pub fn set_grid(&mut self, columns: u16, rows: u16) {
        self.columns = columns.max(1);
        self.rows = rows.max(1);
    }

    /// Math-space distance between adjacent column samples.
    ///
    /// The `+ 1` reserves a half-cell margin so the rightmost sample never
    /// lands exactly on the grid edge.
    #[must_use]
    pub fn xstep(&self) -> f64 {
        (self.xmax - self.xmin) / (f64::from(self.columns) + 1.0)
    }

    /// Math-space distance between adjacent row samples.
    #[must_use]
    pub fn ystep(&self) -> f64 {
        (self.ymax - self.ymin) / (f64::from(self.rows) + 1.0)
    }

    /// Translates the viewport by unit steps in {-1, 0, +1} per axis.
    ///
    /// A unit step moves 1/16 of the current visible span, so pan distance
    /// is view-relative: perceived motion speed is the same at any zoom
    /// level. No clamping; the viewport may pan arbitrarily far.
    pub fn shift(&mut self, dx_units: f64, dy_units: f64) {
        let dx = dx_units * (self.xmax - self.xmin) / SHIFT_DIVISOR;
        let dy = dy_units * (self.ymax - self.ymin) / SHIFT_DIVISOR;
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    /// Scales the viewport span toward its center point.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out; each bound is
    /// interpolated toward the center through [`project`], so repeated
    /// application compounds geometrically (the span multiplies by `factor`
    /// per call).
    pub fn zoom(&mut self, factor: f64) {
        let cx = (self.xmin + self.xmax) / 2.0;
        let cy = (self.ymin + self.ymax) / 2.0;
        self.xmin = project(factor, (1.0, 0.0), (self.xmin, cx));
        self.xmax = project(factor, (1.0, 0.0), (self.xmax, cx));
        self.ymin = project(factor, (1.0, 0.0), (self.ymin, cy));
        self.ymax = project(factor, (1.0, 0.0), (self.ymax, cy));
    }

    /// The x-axis mapping from math-space to grid columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are degenerate, which the transform
    /// operations prevent by construction.
    pub fn x_to_grid(&self) -> Result<LinearScale> {
        LinearScale::new((self.xmin, self.xmax), (0.0, f64::from(self.columns)))
    }

    /// The y-axis mapping from math-space to grid rows.
    ///
    /// The range is inverted because grid row 0 is the top of the display.
    pub fn y_to_grid(&self) -> Result<LinearScale> {
        LinearScale::new((self.ymin, self.ymax), (f64::from(self.rows), 0.0))
    }
}
