// Our Real scalar type:
pub type Real = f64;

/// Distance below which two points, or a point and a plane, are treated as coincident.
///
/// Models are built in millimetres, so this is well below print resolution while
/// staying far above the rounding noise of repeated boolean splits.
pub const EPSILON: Real = 1e-5;

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Segment count used for circles when a model does not ask for something else.
pub const DEFAULT_SEGMENTS: usize = 64;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const MM: Real = 1.0;
pub const INCH: Real = 25.4;
