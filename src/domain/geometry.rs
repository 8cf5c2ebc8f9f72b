//! Radial layout geometry
//!
//! Coordinates are screen-like: x grows to the right and y grows downward,
//! so angle 0 is twelve o'clock and angles increase clockwise.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Quadratic Bézier arc between two nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticArc {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl QuadraticArc {
    /// Point on the curve for `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        Point {
            x: u * u * self.from.x + 2.0 * u * t * self.control.x + t * t * self.to.x,
            y: u * u * self.from.y + 2.0 * u * t * self.control.y + t * t * self.to.y,
        }
    }

    /// `segments + 1` evenly parameterised points, both endpoints included
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }
}

/// Nodes evenly spaced on a circle, starting at the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub radius: f64,
}

impl RadialLayout {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Same center, different radius (used for labels around the nodes)
    pub fn with_radius(&self, radius: f64) -> Self {
        Self {
            center: self.center,
            radius,
        }
    }

    /// Clockwise angle from the top, in degrees, of node `index` out of `count`
    pub fn angle(index: usize, count: usize) -> f64 {
        debug_assert!(count >= 1, "radial layout needs at least one node");
        debug_assert!(index < count, "node {index} out of range for {count} nodes");
        index as f64 * (360.0 / count as f64)
    }

    pub fn position_at_angle(&self, degrees: f64) -> Point {
        let radians = (degrees - 90.0) * (PI / 180.0);
        Point {
            x: self.center.x + self.radius * radians.cos(),
            y: self.center.y + self.radius * radians.sin(),
        }
    }

    pub fn position(&self, index: usize, count: usize) -> Point {
        self.position_at_angle(Self::angle(index, count))
    }

    pub fn positions(&self, count: usize) -> Vec<Point> {
        (0..count).map(|i| self.position(i, count)).collect()
    }

    /// Arcs from each node to the next, wrapping around; none for a single node
    pub fn arcs(&self, count: usize) -> Vec<QuadraticArc> {
        if count < 2 {
            return Vec::new();
        }
        let positions = self.positions(count);
        (0..count)
            .map(|i| QuadraticArc {
                from: positions[i],
                control: self.center,
                to: positions[(i + 1) % count],
            })
            .collect()
    }

    /// Index of the nearest node whose disc of `node_radius` contains `point`
    pub fn hit_test(&self, point: Point, count: usize, node_radius: f64) -> Option<usize> {
        self.positions(count)
            .into_iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(point)))
            .filter(|(_, d)| *d <= node_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}
