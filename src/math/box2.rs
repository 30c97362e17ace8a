use crate::math::vec2::Vec2;

/// Axis-aligned box described by two corner points.
///
/// Built via the bounding-box helpers in [`crate::geometry`], which guarantee
/// `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`. Both
/// corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Box2<T> {
    pub top_left: Vec2<T>,
    pub bottom_right: Vec2<T>,
}

impl<T> Box2<T> {
    pub const fn new(top_left: Vec2<T>, bottom_right: Vec2<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}
