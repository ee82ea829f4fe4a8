use std::ops::{Add, Sub};

use euclid::num::Zero;

pub use euclid::{Point2D as Point, Size2D as Extent, Vector2D as Offset};

/// Window pixels, origin at the top-left of the client area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPx();

/// Normalized device coordinates, (-1, -1) to (1, 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipSpace();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect<T, U>(euclid::Box2D<T, U>);

impl<T, U> Rect<T, U> {
    pub fn new(origin: Point<T, U>, extent: Extent<T, U>) -> Self
    where
        T: Copy + Add<T, Output = T>,
    {
        Self(euclid::Box2D::from_origin_and_size(origin, extent))
    }

    /// A rectangle anchored at the origin covering `extent`.
    pub fn from_extent(extent: Extent<T, U>) -> Self
    where
        T: Copy + Add<T, Output = T> + Zero,
    {
        Self::new(Point::new(T::zero(), T::zero()), extent)
    }

    pub fn top_left(&self) -> Point<T, U>
    where
        T: Copy,
    {
        self.0.min
    }

    pub fn extent(&self) -> Extent<T, U>
    where
        T: Copy + Sub<T, Output = T>,
    {
        self.0.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extent_is_anchored_at_origin() {
        let rect = Rect::<i32, ScreenPx>::from_extent(Extent::new(350, 700));

        assert_eq!(rect.top_left(), Point::new(0, 0));
        assert_eq!(rect.extent(), Extent::new(350, 700));
    }

    #[test]
    fn new_keeps_origin_and_extent() {
        let rect = Rect::<i32, ScreenPx>::new(Point::new(10, 20), Extent::new(30, 40));

        assert_eq!(rect.top_left(), Point::new(10, 20));
        assert_eq!(rect.extent(), Extent::new(30, 40));
    }
}
