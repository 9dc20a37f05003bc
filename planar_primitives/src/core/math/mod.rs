//! Core/common math: vectors, predicates and circle intersection solvers.
mod base_math;
mod circle;
mod circle_circle_intersect;
mod circle_line_intersect;
mod predicates;
mod vector2;

pub use base_math::*;
pub use circle::Circle;
pub use circle_circle_intersect::{circle_circle_intr, circle_circle_intr_eps, CircleCircleIntr};
pub use circle_line_intersect::{
    circle_line_intr, circle_line_intr_eps, circle_line_through_intr, CircleLineIntr,
};
pub use predicates::*;
pub use vector2::{vec2, Point, Vector2};
