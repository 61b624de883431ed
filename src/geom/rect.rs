use std::{fmt, str::FromStr};

use geo::{Coord, Rect};
use rstar::AABB;

use crate::filter::FilterError;

/// An axis-aligned map selection: origin `(x, y)` plus a non-negative size.
///
/// Point containment is half-open, `x <= px < x + width` and
/// `y <= py < y + height`, so a zero-width or zero-height selection contains
/// no points even though its corners are still well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl SelectionRect {
    /// Construct a selection, rejecting negative or non-finite values.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, FilterError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(FilterError::InvalidRect(format!("origin ({x}, {y}) is not finite")));
        }
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(FilterError::InvalidRect(format!("size {width}x{height} must be finite and non-negative")));
        }
        Ok(Self { x, y, width, height })
    }

    /// Selection spanning a `geo::Rect` (min corner becomes the origin).
    pub fn from_rect(rect: Rect<f64>) -> Result<Self, FilterError> {
        Self::new(rect.min().x, rect.min().y, rect.width(), rect.height())
    }

    #[inline] pub fn x(&self) -> f64 { self.x }

    #[inline] pub fn y(&self) -> f64 { self.y }

    #[inline] pub fn width(&self) -> f64 { self.width }

    #[inline] pub fn height(&self) -> f64 { self.height }

    #[inline] pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    /// Corners in evaluation order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Coord<f64>; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Coord { x: x0, y: y0 },
            Coord { x: x1, y: y0 },
            Coord { x: x1, y: y1 },
            Coord { x: x0, y: y1 },
        ]
    }

    /// Half-open point containment.
    #[inline]
    pub fn contains(&self, p: Coord<f64>) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.width && p.y < self.y + self.height
    }

    /// Closed R-tree envelope covering the selection.
    pub(crate) fn envelope(&self) -> AABB<[f64; 2]> {
        AABB::from_corners([self.x, self.y], [self.x + self.width, self.y + self.height])
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.x, y: self.y },
            Coord { x: self.x + self.width, y: self.y + self.height },
        )
    }
}

/// Formats as `x,y,width,height`, the same form accepted by `FromStr`.
impl fmt::Display for SelectionRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for SelectionRect {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| FilterError::InvalidRect(format!("'{s}': {e}")))?;

        match parts[..] {
            [x, y, width, height] => Self::new(x, y, width, height),
            _ => Err(FilterError::InvalidRect(format!("'{s}': expected x,y,width,height"))),
        }
    }
}
