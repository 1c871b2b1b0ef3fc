// Joust - Piecewise-Linear Line
//
// A line is an ordered list of integer control points describing a polygonal
// function of x.  The game uses one as its "song": x is time, y is the jerk
// threshold above which the wrist buzzes.
//
// Lines are validated when built (strictly increasing x), so evaluation never
// has to guard against a zero-width bracket.

use embedded_graphics::geometry::{Point as GPoint, Size};
use embedded_graphics::primitives::Polyline;

use crate::error::LineError;

// ---------------------------------------------------------------------------
// Control points
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct Line {
    points: Vec<Point>,
    units_converted: bool,
}

impl Line {
    /// Build a line from control points sorted by strictly increasing x.
    ///
    /// Zero or one point is accepted and yields a degenerate line that
    /// evaluates to `0` everywhere.
    pub fn new(points: Vec<Point>) -> Result<Self, LineError> {
        check_increasing(points.iter().map(|p| p.x))?;
        Ok(Self {
            points,
            units_converted: false,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Width of the domain `[first.x, last.x]`, or `None` below two points.
    pub fn domain_width(&self) -> Option<i64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => {
                Some(i64::from(last.x) - i64::from(first.x))
            }
            _ => None,
        }
    }

    /// Evaluate the line as a function at `x`.
    ///
    /// Queries outside the domain wrap around it, so the line behaves as a
    /// periodic function with period `last.x - first.x`.  Control points are
    /// returned exactly; anything in between is linearly interpolated and the
    /// result truncated toward zero.  Lines with fewer than two points
    /// evaluate to `0`.
    pub fn evaluate(&self, x: i32) -> i32 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => (*first, *last),
            _ => return 0,
        };

        let x = if x < first.x || x > last.x {
            let wrapped = wrap_into_domain(x, first.x, last.x);
            log::debug!("x clipped to domain, x:{} -> {}", x, wrapped);
            wrapped
        } else {
            x
        };

        // first.x <= x <= last.x, so at least the first point sits at or left of x.
        let after_ix = self.points.partition_point(|p| p.x <= x);
        let before = self.points[after_ix - 1];
        if before.x == x {
            return before.y;
        }
        interpolate(before, self.points[after_ix], x)
    }

    /// `(first.x, last.x)`.
    pub fn x_range(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// True `(min y, max y)` over every control point.
    pub fn y_range(&self) -> Option<(i32, i32)> {
        let mut ys = self.points.iter().map(|p| p.y);
        let first = ys.next()?;
        Some(ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Fit the line into a `bounds` sized area and close it into a polygon
    /// with a flat skirt `baseline` pixels tall:
    ///
    /// ```text
    ///       ____                  ____
    ///    __/    \__            __/    \__
    /// __/          \__   ->   |__________|   <- baseline
    /// ```
    ///
    /// The screen is addressed from the top-left, so y is flipped.  The
    /// result holds `len + 2` vertices: the bottom-left corner, one vertex
    /// per control point, and the bottom-right corner.
    pub fn project(&self, bounds: Size, baseline: u32) -> Result<Outline, LineError> {
        if self.points.len() < 2 {
            return Err(LineError::TooFewPoints(self.points.len()));
        }
        if baseline > bounds.height {
            return Err(LineError::BaselineTooTall {
                baseline,
                height: bounds.height,
            });
        }

        let (min_x, max_x) = self.x_range().ok_or(LineError::TooFewPoints(0))?;
        let (min_y, max_y) = self.y_range().ok_or(LineError::TooFewPoints(0))?;
        if max_x == min_x {
            return Err(LineError::ZeroWidthDomain);
        }
        if max_y == min_y {
            return Err(LineError::ZeroHeightRange);
        }

        let width = f64::from(bounds.width);
        let height = f64::from(bounds.height);
        let plot_height = f64::from(bounds.height - baseline);
        let scale_x = width / (f64::from(max_x) - f64::from(min_x));
        let scale_y = plot_height / (f64::from(max_y) - f64::from(min_y));

        log::debug!(
            "xmin {}, xmax {}, ymin {}, ymax {}, tx {:.4}, ty {:.4}",
            min_x,
            max_x,
            min_y,
            max_y,
            scale_x,
            scale_y
        );

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(self.points.len() + 2)?;

        let floor = to_pixel(height);
        vertices.push(GPoint::new(0, floor));
        vertices.extend(self.points.iter().map(|p| {
            GPoint::new(
                to_pixel((f64::from(p.x) - f64::from(min_x)) * scale_x),
                to_pixel(plot_height - (f64::from(p.y) - f64::from(min_y)) * scale_y),
            )
        }));
        vertices.push(GPoint::new(to_pixel(width), floor));

        Ok(Outline { vertices })
    }

    /// Divide every x by `divisor`, e.g. to turn a millisecond table into
    /// ticks before the game loop starts.
    ///
    /// This is a one-shot setup step: precision is lost each time it runs,
    /// so a second call shrinks the domain again (and logs a warning).  If
    /// the division would merge two neighbouring control points the line is
    /// left unchanged.
    pub fn convert_units(&mut self, divisor: i32) -> Result<(), LineError> {
        if divisor <= 0 {
            return Err(LineError::InvalidDivisor(divisor));
        }
        if self.units_converted {
            log::warn!("line units already converted, dividing by {} again", divisor);
        }

        check_increasing(self.points.iter().map(|p| p.x / divisor))?;
        for point in &mut self.points {
            point.x /= divisor;
        }
        self.units_converted = true;
        Ok(())
    }
}

impl TryFrom<&[(i32, i32)]> for Line {
    type Error = LineError;

    fn try_from(pairs: &[(i32, i32)]) -> Result<Self, Self::Error> {
        Self::new(pairs.iter().copied().map(Point::from).collect())
    }
}

fn check_increasing(xs: impl Iterator<Item = i32>) -> Result<(), LineError> {
    let mut prev: Option<i32> = None;
    for (index, x) in xs.enumerate() {
        if let Some(prev_x) = prev {
            if x <= prev_x {
                return Err(LineError::NonIncreasingX { index, prev_x, x });
            }
        }
        prev = Some(x);
    }
    Ok(())
}

/// Map `x` into `[min_x, max_x)` with a non-negative remainder.
fn wrap_into_domain(x: i32, min_x: i32, max_x: i32) -> i32 {
    let width = i64::from(max_x) - i64::from(min_x);
    let offset = (i64::from(x) - i64::from(min_x)).rem_euclid(width);
    // min_x + offset < max_x
    (i64::from(min_x) + offset) as i32
}

fn interpolate(before: Point, after: Point, x: i32) -> i32 {
    let run = f64::from(after.x) - f64::from(before.x);
    let rise = f64::from(after.y) - f64::from(before.y);
    let y = f64::from(before.y) + rise * (f64::from(x) - f64::from(before.x)) / run;
    y.trunc() as i32
}

fn to_pixel(value: f64) -> i32 {
    value.trunc() as i32
}

// ---------------------------------------------------------------------------
// Projected outline
// ---------------------------------------------------------------------------

/// Closed polygon produced by [`Line::project`], in screen coordinates.
///
/// Owns its vertices; dropping it releases them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    vertices: Vec<GPoint>,
}

impl Outline {
    pub fn vertices(&self) -> &[GPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Borrow the outline as a drawable polyline.
    pub fn polyline(&self) -> Polyline<'_> {
        Polyline::new(&self.vertices)
    }

    pub fn into_vertices(self) -> Vec<GPoint> {
        self.vertices
    }
}
