#[macro_use]
pub mod macros;

pub mod distance;
pub mod fuel;
pub mod money;
pub mod percentage;

/// Replace infinities and `NaN` coming out of a division with zero.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
