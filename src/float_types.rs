// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized collision threshold: two points closer than this are
/// treated as the same point when closing or cleaning up a curve.
/// Defaults to `0.01` in curve-local units, but can be overridden:
///  1) **Build-time**: set env var `MANDALA_COLLISION_THRESHOLD` (e.g. `MANDALA_COLLISION_THRESHOLD=0.001 cargo build`)
///  2) **Runtime**: call [`set_collision_threshold`] once before building any curve
static COLLISION_THRESHOLD_CELL: OnceLock<Real> = OnceLock::new();

const DEFAULT_COLLISION_THRESHOLD: Real = 0.01;

/// Returns the current collision threshold.
/// If not set yet, it tries `MANDALA_COLLISION_THRESHOLD` (parsed as the active `Real`) and
/// falls back to the default.
pub fn collision_threshold() -> Real {
    *COLLISION_THRESHOLD_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("MANDALA_COLLISION_THRESHOLD") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_COLLISION_THRESHOLD
    })
}

/// Set the collision threshold programmatically once (subsequent calls are ignored).
/// Call near program start: `mandala::float_types::set_collision_threshold(0.005);`
pub fn set_collision_threshold(value: Real) {
    let _ = COLLISION_THRESHOLD_CELL.set(value.max(Real::EPSILON));
}

/// Largest x shift the perspective shear may apply, in scaled local units.
/// Keeps `tan` from blowing up as a guide angle approaches ±π/2.
pub const PERSPECTIVE_SHIFT_LIMIT: Real = 100.0;

/// Fraction of the shorter adjacent edge at which a rounded corner's
/// replacement points are placed.
pub const ROUNDING_FRACTION: Real = 0.3;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
