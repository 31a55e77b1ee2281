//! Geometry core for generating **mandala-like line drawings**: repeating
//! patterns stretched along curves, arranged into rings and mirrored features.
//!
//! The pieces build on each other:
//! - [`Pattern`](pattern::Pattern): lines in a local, unit-sized space
//! - [`Curve`](curve::Curve): a path of points grown from line, sine and arc
//!   segments, with optional corner rounding
//! - [`GeoSpace`](geospace::GeoSpace): the local→external transform, with a
//!   perspective shear that keeps neighbouring segments continuous
//! - [`Ribbon`](ribbon::Ribbon): a pattern tiled along a curve, one
//!   [`Riblet`](ribbon::Riblet) per segment
//! - [`Layer`](layer::Layer) and [`Feature`](feature::Feature): a circular
//!   ribbon, and ribbons copied into mirrored halves or quadrants
//!
//! Output is either a world-space [`Pattern`](pattern::Pattern) or lines
//! pushed through a [`Canvas`](canvas::Canvas).
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to build riblets in parallel
//!
//! # Configuration
//! - `MANDALA_COLLISION_THRESHOLD` (build time): distance under which two
//!   points count as the same point, see
//!   [`collision_threshold`](float_types::collision_threshold)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod canvas;
pub mod curve;
pub mod errors;
pub mod feature;
pub mod float_types;
pub mod geometry;
pub mod geospace;
pub mod layer;
pub mod pattern;
pub mod ribbon;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use canvas::{Canvas, LineCanvas};
pub use curve::Curve;
pub use errors::GeometryError;
pub use feature::Feature;
pub use geometry::{Line, Point};
pub use geospace::{GeoSpace, GeoSpaceStack};
pub use layer::Layer;
pub use pattern::Pattern;
pub use ribbon::{Ribbon, Riblet};
pub use traits::{PointMap, Transformable};
