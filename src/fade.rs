//! Per-LED hue fade.
//!
//! An [`LedFade`] walks one LED around the red, green and blue corners of the
//! color cube one component step at a time. Each step raises the component of
//! the corner being approached and lowers the component of the corner being
//! left, so the LED always shows a blend of at most two primaries and a full
//! corner-to-corner leg takes exactly `MAX_COMP_VAL` steps once the previous
//! corner has been reached.

use crate::types::{FadeTarget, LedColor, MAX_COMP_VAL};
use palette::Srgb;

/// Color and fade target of a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedFade {
    color: LedColor,
    target: FadeTarget,
}

impl LedFade {
    /// Creates a fade at `color` heading toward `target`.
    ///
    /// Components above `MAX_COMP_VAL` are clamped. The at-most-two-lit
    /// property only holds if `color` already satisfies it.
    pub fn new(color: LedColor, target: FadeTarget) -> Self {
        Self {
            color: Srgb::new(
                color.red.min(MAX_COMP_VAL),
                color.green.min(MAX_COMP_VAL),
                color.blue.min(MAX_COMP_VAL),
            ),
            target,
        }
    }

    /// Creates a fade starting at `(red, 0, 0)` heading toward the red corner.
    pub fn with_red_offset(red: u8) -> Self {
        Self::new(Srgb::new(red, 0, 0), FadeTarget::Red)
    }

    /// Current color.
    #[inline]
    pub fn color(&self) -> LedColor {
        self.color
    }

    /// Corner currently being approached.
    #[inline]
    pub fn target(&self) -> FadeTarget {
        self.target
    }

    /// Moves one step toward the target corner.
    ///
    /// The rising component gains one unless it is already at
    /// `MAX_COMP_VAL`; the falling component loses one unless it is already
    /// zero. Once the corner is reached the target rotates to the next one.
    ///
    /// Returns `true` if the target rotated on this step.
    pub fn advance(&mut self) -> bool {
        let (rising, falling) = self.channels_mut();

        if *rising < MAX_COMP_VAL {
            *rising += 1;
        }
        if *falling > 0 {
            *falling -= 1;
        }

        let at_corner = *rising == MAX_COMP_VAL && *falling == 0;
        if at_corner {
            self.target = self.target.next();
        }
        at_corner
    }

    /// (rising, falling) components for the current target.
    fn channels_mut(&mut self) -> (&mut u8, &mut u8) {
        let color = &mut self.color;
        match self.target {
            FadeTarget::Red => (&mut color.red, &mut color.blue),
            FadeTarget::Green => (&mut color.green, &mut color.red),
            FadeTarget::Blue => (&mut color.blue, &mut color.green),
        }
    }
}

impl Default for LedFade {
    fn default() -> Self {
        Self::with_red_offset(0)
    }
}

/// Starting red level for LED `index` out of `count`, spacing the LEDs evenly
/// around the first leg of the cycle.
///
/// Integer math: `MAX_COMP_VAL / count * index`, saturating at `MAX_COMP_VAL`.
pub fn phase_offset(index: usize, count: usize) -> u8 {
    let step = usize::from(MAX_COMP_VAL).checked_div(count).unwrap_or(0);
    let offset = step.saturating_mul(index).min(usize::from(MAX_COMP_VAL));
    u8::try_from(offset).unwrap_or(MAX_COMP_VAL)
}
