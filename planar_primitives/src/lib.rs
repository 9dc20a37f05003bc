//! 2D computational geometry primitives over points and line segments in the plane.
//!
//! - [convex_hull]: Graham scan convex hull
//! - [closest_pair]: divide and conquer closest pair of points
//! - [rotating_calipers]: polygon diameter and width
//! - [segment_intersect]: pairwise segment test, sweep line detector and indexed finder
//! - [core::math]: vectors, orientation predicates, circumcircle and circle intersection solvers
//!
//! All algorithms are generic over [core::traits::Real] (`f32` or `f64`). Integer coordinates
//! should be given as integer valued floats.

extern crate static_aabb2d_index;

#[macro_use]
mod macros;
mod error;

pub mod closest_pair;
pub mod convex_hull;
pub mod core;
pub mod rotating_calipers;
pub mod segment_intersect;

pub use static_aabb2d_index::AABB;

pub use crate::error::*;
