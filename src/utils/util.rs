//! # Utility Module
//!
//! Small numeric helpers shared by the editor and its configuration.
//!
//! ## Example Function: `clamp_probability`
//!
//! Slider and config values arrive as plain `f64`s. `clamp_probability` pulls
//! them into an allowed range and refuses values that are not numbers at all.

/// Clamps a probability into `[min, max]`.
///
/// Returns `None` for `NaN` or infinite input so the caller can keep its
/// previous value instead of silently snapping to a bound.
///
/// # Arguments
///
/// * `value` - The requested probability.
/// * `min` - The lowest allowed probability.
/// * `max` - The highest allowed probability.
///
/// # Examples
///
/// ```
/// use wall_map_editor::utils::util::clamp_probability;
///
/// assert_eq!(clamp_probability(0.2, 0.01, 0.5), Some(0.2));
/// assert_eq!(clamp_probability(0.9, 0.01, 0.5), Some(0.5));
/// assert_eq!(clamp_probability(f64::NAN, 0.01, 0.5), None);
/// ```
pub fn clamp_probability(value: f64, min: f64, max: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(min, max))
}

/// Returns true if `value` is a finite number inside `[min, max]`.
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && (min..=max).contains(&value)
}
