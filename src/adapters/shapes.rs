//! Shape variants for the open/closed and substitution demonstrations.
//!
//! All four return the same placeholder area. The point is the hierarchy:
//! a new variant slots in next to the existing ones without touching the
//! trait or its other implementors.

use crate::domain::ports::{AreaCalculator, Shape};

#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl AreaCalculator for Rectangle {
    fn calculate_area(&self) -> f64 {
        // placeholder area
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl AreaCalculator for Circle {
    fn calculate_area(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

impl Shape for Triangle {
    fn calculate_area(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Shape for Square {
    fn calculate_area(&self) -> f64 {
        0.0
    }
}
