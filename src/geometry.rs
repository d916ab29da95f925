use std::ops::{Add, Sub};
use raylib::prelude::*;

/// Viewport-space pixel position.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Coordinate, t: f32) -> Coordinate {
        Coordinate::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Coordinate> for Vector2 {
    fn from(c: Coordinate) -> Vector2 {
        Vector2::new(c.x, c.y)
    }
}

impl From<Vector2> for Coordinate {
    fn from(v: Vector2) -> Coordinate {
        Coordinate::new(v.x, v.y)
    }
}

/// Axis aligned box in viewport space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn centered_at(center: Coordinate, width: f32, height: f32) -> Self {
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl From<Bounds> for Rectangle {
    fn from(b: Bounds) -> Rectangle {
        Rectangle::new(b.x, b.y, b.width, b.height)
    }
}
