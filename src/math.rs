//! Numeric helpers shared by the ramp builder and samplers.
//!
//! Rounding, interpolation, and clamping primitives. Everything here is a
//! total function: out-of-range and non-finite inputs map to a defined
//! result instead of propagating NaN into the color math.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a non-negative double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Interpolation and clamping
// ============================================================================

/// Linear interpolation between `a` and `b` by factor `k`.
#[inline]
pub fn lerp(a: f64, b: f64, k: f64) -> f64 {
    a + (b - a) * k
}

/// Clamp `v` into [0, 1].
///
/// Values above 1.0 clamp to 1.0, values below 0.0 clamp to 0.0, and NaN
/// maps to 0.0 (treated as out-of-range-low). Also normalizes -0.0 to 0.0
/// so clamped values hash consistently.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v > 1.0 {
        1.0
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Sine and cosine of an angle given in degrees.
///
/// Exact at multiples of 90 degrees: `sin_cos_degrees(90.0)` returns
/// `(1.0, 0.0)`, not `(1.0, 6.1e-17)`. Axis-aligned gradients therefore
/// project with no rotation rounding noise, and a vertical render is
/// byte-identical to the equivalent rotated horizontal one. Non-finite
/// angles fall back to 0 degrees.
pub fn sin_cos_degrees(angle: f64) -> (f64, f64) {
    if !angle.is_finite() {
        return (0.0, 1.0);
    }
    let a = angle.rem_euclid(360.0);
    if a == 0.0 {
        (0.0, 1.0)
    } else if a == 90.0 {
        (1.0, 0.0)
    } else if a == 180.0 {
        (0.0, -1.0)
    } else if a == 270.0 {
        (-1.0, 0.0)
    } else {
        let r = a.to_radians();
        (r.sin(), r.cos())
    }
}

// ============================================================================
// Tests
// ============================================================================
