//! Gradients and gradient fills
//!
//! A [`Gradient`] is a start and end color bound to the palette that blends
//! them. Fills map a pixel position to a fraction along the gradient.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::color::Color;
use crate::palette::Palette;
use crate::{Error, Result};

/// Integer pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

/// Two endpoint colors interpolated through a palette
#[derive(Debug, Clone)]
pub struct Gradient<'p> {
    palette: &'p Palette,
    start: Arc<Color>,
    end: Arc<Color>,
}

impl<'p> Gradient<'p> {
    /// Both endpoints must be of the palette's kind.
    ///
    /// Endpoints are interned in `palette`, so every color the gradient hands
    /// out is the instance `palette` itself returns for that value.
    pub fn new(palette: &'p Palette, start: Arc<Color>, end: Arc<Color>) -> Result<Self> {
        for color in [&start, &end] {
            if color.kind() != palette.kind() {
                return Err(Error::IncompatiblePalette {
                    expected: palette.kind(),
                    actual: color.kind(),
                });
            }
        }
        Ok(Self {
            palette,
            start: palette.intern(*start),
            end: palette.intern(*end),
        })
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    pub fn start(&self) -> &Arc<Color> {
        &self.start
    }

    pub fn end(&self) -> &Arc<Color> {
        &self.end
    }

    /// Color at `amount` in [0, 1]
    pub fn at(&self, amount: f64) -> Result<Arc<Color>> {
        self.palette.blend(&self.start, &self.end, amount)
    }

    /// Lazily yields `n + 1` colors at fractions `0, 1/n, ..., 1`.
    ///
    /// `steps(0)` yields only the start color.
    pub fn steps(&self, n: usize) -> Steps<'_, 'p> {
        Steps {
            gradient: self,
            n,
            next: 0,
        }
    }

    /// Fraction already known to be in range
    fn sample(&self, amount: f64) -> Arc<Color> {
        if amount <= 0.0 {
            return Arc::clone(&self.start);
        }
        if amount >= 1.0 {
            return Arc::clone(&self.end);
        }
        self.palette.blend_unchecked(&self.start, &self.end, amount)
    }
}

/// Iterator returned by [`Gradient::steps`]
#[derive(Debug, Clone)]
pub struct Steps<'g, 'p> {
    gradient: &'g Gradient<'p>,
    n: usize,
    next: usize,
}

impl Iterator for Steps<'_, '_> {
    type Item = Arc<Color>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.n {
            return None;
        }
        let amount = if self.n == 0 {
            0.0
        } else {
            self.next as f64 / self.n as f64
        };
        self.next += 1;
        Some(self.gradient.sample(amount))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps<'_, '_> {}

impl FusedIterator for Steps<'_, '_> {}

/// Maps a pixel position to a color
pub trait Fill {
    fn color_at(&self, position: Point) -> Arc<Color>;
}

/// Axis a linear fill runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right, distance is `x`
    Horizontal,
    /// Top to bottom, distance is `y`
    Vertical,
}

/// Gradient along one axis over `length` pixels.
///
/// Positions before the axis origin get the start color, positions at or past
/// `length` get the end color.
#[derive(Debug, Clone)]
pub struct LinearFill<'p> {
    gradient: Gradient<'p>,
    direction: Direction,
    length: u32,
}

impl<'p> LinearFill<'p> {
    pub fn new(gradient: Gradient<'p>, direction: Direction, length: u32) -> Self {
        Self {
            gradient,
            direction,
            length,
        }
    }

    pub fn horizontal(gradient: Gradient<'p>, length: u32) -> Self {
        Self::new(gradient, Direction::Horizontal, length)
    }

    pub fn vertical(gradient: Gradient<'p>, length: u32) -> Self {
        Self::new(gradient, Direction::Vertical, length)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn gradient(&self) -> &Gradient<'p> {
        &self.gradient
    }

    fn distance(&self, position: Point) -> i64 {
        match self.direction {
            Direction::Horizontal => position.x,
            Direction::Vertical => position.y,
        }
    }
}

impl Fill for LinearFill<'_> {
    fn color_at(&self, position: Point) -> Arc<Color> {
        let distance = self.distance(position);
        let length = self.length as i64;
        if distance >= length {
            return Arc::clone(self.gradient.end());
        }
        if distance < 0 {
            return Arc::clone(self.gradient.start());
        }
        self.gradient.sample(distance as f64 / length as f64)
    }
}

/// Gradient radiating from `center`; at `radius` and beyond the end color
#[derive(Debug, Clone)]
pub struct RadialFill<'p> {
    gradient: Gradient<'p>,
    center: Point,
    radius: f64,
}

impl<'p> RadialFill<'p> {
    /// `radius` must be finite and non-negative
    pub fn new(gradient: Gradient<'p>, center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "radial fill radius {} must be finite and non-negative",
                radius
            )));
        }
        Ok(Self {
            gradient,
            center,
            radius,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Fill for RadialFill<'_> {
    fn color_at(&self, position: Point) -> Arc<Color> {
        let distance = self.center.distance(position);
        if distance >= self.radius {
            return Arc::clone(self.gradient.end());
        }
        self.gradient.sample(distance / self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_to_white(palette: &Palette) -> Gradient<'_> {
        Gradient::new(
            palette,
            palette.color(&[0, 0, 0]).unwrap(),
            palette.color(&[255, 255, 255]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_checks_kinds() {
        let rgb = Palette::rgb();
        let gray = Palette::gray();
        let result = Gradient::new(
            &rgb,
            rgb.color(&[0, 0, 0]).unwrap(),
            gray.color(&[255]).unwrap(),
        );
        assert!(matches!(result, Err(Error::IncompatiblePalette { .. })));
    }

    #[test]
    fn test_steps_count_and_endpoints() {
        let palette = Palette::rgb();
        let gradient = black_to_white(&palette);

        let steps: Vec<_> = gradient.steps(10).collect();
        assert_eq!(steps.len(), 11);
        assert!(Arc::ptr_eq(&steps[0], gradient.start()));
        assert!(Arc::ptr_eq(&steps[10], gradient.end()));
        assert_eq!(steps[5].channels(), &[128, 128, 128]);

        assert_eq!(gradient.steps(0).count(), 1);
        assert_eq!(gradient.steps(4).len(), 5);
    }

    #[test]
    fn test_endpoints_from_another_palette_are_interned() {
        let minted = Palette::rgb();
        let palette = Palette::rgb();
        let black = minted.color(&[0, 0, 0]).unwrap();
        let white = minted.color(&[255, 255, 255]).unwrap();
        let gradient = Gradient::new(&palette, Arc::clone(&black), Arc::clone(&white)).unwrap();

        let own_black = palette.color(&[0, 0, 0]).unwrap();
        let own_white = palette.color(&[255, 255, 255]).unwrap();
        assert!(!Arc::ptr_eq(gradient.start(), &black));
        assert!(Arc::ptr_eq(gradient.start(), &own_black));

        let steps: Vec<_> = gradient.steps(4).collect();
        assert!(Arc::ptr_eq(&steps[0], &palette.blend(&black, &white, 0.0).unwrap()));
        assert!(Arc::ptr_eq(&steps[0], &own_black));
        assert!(Arc::ptr_eq(&steps[4], &own_white));

        let fill = LinearFill::horizontal(gradient.clone(), 10);
        assert!(Arc::ptr_eq(&fill.color_at(Point::new(-3, 0)), &own_black));
        assert!(Arc::ptr_eq(&fill.color_at(Point::new(50, 0)), &own_white));
        let radial = RadialFill::new(gradient, Point::default(), 2.0).unwrap();
        assert!(Arc::ptr_eq(&radial.color_at(Point::new(9, 9)), &own_white));

        assert_eq!(minted.cached_len(), 2);
        assert_eq!(palette.cached_len(), 5);
    }

    #[test]
    fn test_distance_at_coordinate_extremes() {
        let far = Point::new(i64::MIN, 0).distance(Point::new(i64::MAX, 0));
        assert!(far.is_finite());
        assert!((far - 2f64.powi(64)).abs() / far < 1e-12);
        assert_eq!(Point::new(0, 0).distance(Point::new(3, -4)), 5.0);
    }

    #[test]
    fn test_steps_monotonic() {
        let palette = Palette::rgb();
        let gradient = black_to_white(&palette);
        let n = 17;
        let values: Vec<u8> = gradient.steps(n).map(|c| c.channels()[0]).collect();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!((pair[1] - pair[0]) as f64 <= (255.0 / n as f64).ceil());
        }
    }

    #[test]
    fn test_vertical_fill() {
        let palette = Palette::rgb();
        let fill = LinearFill::vertical(black_to_white(&palette), 100);

        assert_eq!(fill.color_at(Point::new(0, 0)).channels(), &[0, 0, 0]);
        assert_eq!(fill.color_at(Point::new(3, 50)).channels(), &[128, 128, 128]);
        assert_eq!(fill.color_at(Point::new(0, 100)).channels(), &[255, 255, 255]);
        assert_eq!(fill.color_at(Point::new(0, 500)).channels(), &[255, 255, 255]);
        assert_eq!(fill.color_at(Point::new(0, -5)).channels(), &[0, 0, 0]);
    }

    #[test]
    fn test_horizontal_fill_ignores_y() {
        let palette = Palette::gray();
        let gradient = Gradient::new(
            &palette,
            palette.color(&[255]).unwrap(),
            palette.color(&[0]).unwrap(),
        )
        .unwrap();
        let fill = LinearFill::horizontal(gradient, 10);
        let a = fill.color_at(Point::new(5, 0));
        let b = fill.color_at(Point::new(5, 99));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.channels(), &[128]);
    }

    #[test]
    fn test_zero_length_fill_is_end_color() {
        let palette = Palette::rgb();
        let fill = LinearFill::horizontal(black_to_white(&palette), 0);
        assert_eq!(fill.color_at(Point::new(0, 0)).channels(), &[255, 255, 255]);
    }

    #[test]
    fn test_radial_fill() {
        let palette = Palette::rgb();
        let fill = RadialFill::new(black_to_white(&palette), Point::new(10, 10), 10.0).unwrap();

        assert_eq!(fill.color_at(Point::new(10, 10)).channels(), &[0, 0, 0]);
        // 3-4-5 triangle, half the radius
        assert_eq!(fill.color_at(Point::new(13, 14)).channels(), &[128, 128, 128]);
        assert_eq!(fill.color_at(Point::new(20, 10)).channels(), &[255, 255, 255]);
        assert_eq!(fill.color_at(Point::new(0, 0)).channels(), &[255, 255, 255]);

        assert!(RadialFill::new(black_to_white(&palette), Point::default(), -1.0).is_err());
        assert!(RadialFill::new(black_to_white(&palette), Point::default(), f64::NAN).is_err());
    }
}
