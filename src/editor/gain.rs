//! Gain factor and the sample scale operation
//!
//! The volume change is expressed as an integer percentage of the current
//! volume: 50 halves it, 200 doubles it, 100 is a no-op. The percentage
//! is turned into a floating-point factor and applied per sample.
//!
//! # Rounding policy
//!
//! Scaled values are rounded **half away from zero** (`f64::round`), then
//! clamped to the 16-bit signed range. Earlier versions of this tool
//! floored instead, which pushed every fractional negative sample one LSB
//! further from zero and left output systematically asymmetric. Rounding
//! treats both signs alike and is the behavior shipped since 0.2.
//!
//! # Clamping
//!
//! Percentages over 100 can push a near-full-scale sample outside i16.
//! Wrapping would flip the sign and produce a loud click; clamping caps
//! the sample at full scale instead, which is the audible equivalent of
//! hitting a limiter.

use serde::Serialize;

/// A validated volume percentage and the multiplicative factor it implies.
///
/// Construction rejects zero; there is no upper bound (the clamp in
/// [`scale`] bounds the damage a huge percentage can do).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GainFactor {
    percentage: u32,
}

impl GainFactor {
    /// Build a gain factor from an integer percentage.
    ///
    /// Returns `None` for 0 - callers prompting interactively should
    /// re-ask rather than treat this as fatal.
    pub fn from_percentage(percentage: u32) -> Option<Self> {
        if percentage == 0 {
            return None;
        }
        Some(Self { percentage })
    }

    /// The percentage as given by the user.
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    /// The multiplicative factor: `percentage / 100.0`.
    pub fn factor(&self) -> f64 {
        f64::from(self.percentage) / 100.0
    }
}

impl std::fmt::Display for GainFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percentage)
    }
}

/// Scale one sample by a gain factor.
///
/// Pure function: multiply in `f64`, round half away from zero, clamp to
/// `[i16::MIN, i16::MAX]`.
pub fn scale(sample: i16, gain: GainFactor) -> i16 {
    let scaled = (f64::from(sample) * gain.factor()).round();
    scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
