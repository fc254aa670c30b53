//! Scalar helpers and unit constants.
use num_traits::Zero;

/// Millimeter, in firmware length units.
///
/// Lengths are measured in centimeters, so one millimeter is `0.1`.
pub const MM: f32 = 0.1;

/// Sign of a number, `1` for non-negative and `-1` for negative.
///
/// Zero of either sign counts as non-negative. NaN is neither, so it returns
/// `0`.
///
/// ```
/// use warp_datatypes::sign;
///
/// assert_eq!(sign(3.5), 1);
/// assert_eq!(sign(-2.), -1);
/// assert_eq!(sign(-0.), 1);
/// assert_eq!(sign(f32::NAN), 0);
/// ```
#[inline]
pub fn sign<F>(num: F) -> i32
where
    F: PartialOrd + Zero,
{
    let zero = F::zero();
    i32::from(num >= zero) - i32::from(num < zero)
}
