//! Palette usage counter that nudges later blocks toward rarer colors.

use crate::palette::PaletteIndex;

/// Default number of uses per unit of penalty.
pub const DEFAULT_BIAS_STEP: u32 = 16;

/// Per-color usage counts for one quantization pass.
///
/// The penalty added to a color's score is `uses / step` (integer
/// division), so it only changes each time a count crosses a multiple of
/// `step`. Counts never decrease within a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageBias {
    counts: [u32; 4],
    step: u32,
}

impl UsageBias {
    /// Fresh counter. `step` must be at least 1.
    pub fn new(step: u32) -> Self {
        debug_assert!(step >= 1, "bias step must be at least 1");
        Self {
            counts: [0; 4],
            step: step.max(1),
        }
    }

    /// Score penalty currently applied to `index`.
    #[inline]
    pub fn penalty(&self, index: PaletteIndex) -> u32 {
        self.counts[index as usize] / self.step
    }

    /// Count one more use of `index`.
    #[inline]
    pub fn record(&mut self, index: PaletteIndex) {
        self.counts[index as usize] += 1;
    }

    #[inline]
    pub fn counts(&self) -> [u32; 4] {
        self.counts
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }
}

impl Default for UsageBias {
    fn default() -> Self {
        Self::new(DEFAULT_BIAS_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_steps_every_sixteen_uses() {
        let mut bias = UsageBias::default();
        for uses in 0..48u32 {
            assert_eq!(bias.penalty(2), uses / 16, "after {uses} uses");
            bias.record(2);
        }
        assert_eq!(bias.penalty(2), 3);
        assert_eq!(bias.penalty(0), 0);
    }

    #[test]
    fn test_penalty_is_monotonic() {
        let mut bias = UsageBias::new(3);
        let mut last = [0u32; 4];
        for i in 0..100u8 {
            bias.record(i % 4);
            for color in 0..4u8 {
                let now = bias.penalty(color);
                assert!(now >= last[color as usize]);
                last[color as usize] = now;
            }
        }
        assert_eq!(bias.counts(), [25, 25, 25, 25]);
    }

    #[test]
    fn test_step_of_one_penalises_every_use() {
        let mut bias = UsageBias::new(1);
        bias.record(1);
        bias.record(1);
        assert_eq!(bias.penalty(1), 2);
    }
}
