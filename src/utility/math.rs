//! Arithmetic wrappers.
//!
//! The binary operators are generic over `std::ops`; rounding and the
//! aggregates work on `f64`. On empty input `sum` is 0, `mean` is NaN,
//! `max` is -∞ and `min` is +∞.

use std::ops::{Add, Div, Mul, Sub};

/// `left + right`.
#[inline]
pub fn add<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}

/// `left - right`.
#[inline]
pub fn sub<T: Sub<Output = T>>(left: T, right: T) -> T {
    left - right
}

/// `left * right`.
#[inline]
pub fn mul<T: Mul<Output = T>>(left: T, right: T) -> T {
    left * right
}

/// `left / right`. Integer division by zero panics like the operator does.
#[inline]
pub fn div<T: Div<Output = T>>(left: T, right: T) -> T {
    left / right
}

/// Smallest integer not less than `value`.
#[inline]
pub fn ceil(value: f64) -> f64 {
    value.ceil()
}

/// Largest integer not greater than `value`.
#[inline]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

/// Nearest integer, halves rounded toward +∞.
///
/// ```rust
/// use fnkit::utility::math::round;
///
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -2.0);
/// assert_eq!(round(0.499_999_999_999_999_94), 0.0);
/// ```
#[inline]
pub fn round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Sum of `values`; 0 for an empty slice.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean of `values`; NaN for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Largest of `values`; -∞ for an empty slice, NaN if any element is NaN.
pub fn max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |largest, &value| {
        if largest.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            largest.max(value)
        }
    })
}

/// Smallest of `values`; +∞ for an empty slice, NaN if any element is NaN.
pub fn min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |smallest, &value| {
        if smallest.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            smallest.min(value)
        }
    })
}
