/// Rounds `value` to `decimals` decimal places.
///
/// The decimal digits come from the exact binary value, with ties to even,
/// so a value such as `0.125` rounds to `0.12` at two places.
#[inline]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
