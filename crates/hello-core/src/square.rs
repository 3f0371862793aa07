//! Squaring

/// Return `x * x`.
///
/// Follows IEEE-754: finite inputs too large to square give `+inf`, NaN
/// stays NaN, and `-0.0` squares to `0.0`.
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}
