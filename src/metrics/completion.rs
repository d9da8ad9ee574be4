//! Completion percentages and rates.

/// Returns `completed / total` as a whole percentage in `[0, 100]`.
///
/// A zero `total` yields 0. A `completed` count above `total` is clamped to
/// `total`. Halves round up.
///
/// # Examples
///
/// ```
/// use taskboard::metrics::completion_percentage;
///
/// assert_eq!(completion_percentage(3, 4), 75);
/// assert_eq!(completion_percentage(0, 0), 0);
/// assert_eq!(completion_percentage(5, 4), 100);
/// ```
#[must_use]
pub fn completion_percentage(completed: u32, total: u32) -> u8 {
    let total = u64::from(total);
    let completed = u64::from(completed).min(total);
    // round(100 * c / t) == floor((200 * c + t) / (2 * t))
    (200 * completed + total)
        .checked_div(2 * total)
        .and_then(|percentage| u8::try_from(percentage).ok())
        .unwrap_or(0)
}

/// Returns the share of `entities` satisfying `is_completed`, as an
/// unrounded percentage in `[0.0, 100.0]`.
///
/// An empty slice yields `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "rates are presented as unrounded floating-point percentages"
)]
pub fn completion_rate<T>(entities: &[T], is_completed: impl Fn(&T) -> bool) -> f64 {
    if entities.is_empty() {
        return 0.0;
    }
    let completed = entities.iter().filter(|entity| is_completed(entity)).count();
    100.0 * completed as f64 / entities.len() as f64
}
