//! Adapter from `smart-leds` drivers to [`LedStrip`].

use crate::sequencer::LedStrip;
use crate::types::LedColor;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// Wraps any [`SmartLedsWrite`] driver as an infallible [`LedStrip`].
///
/// Driver errors are dropped after being counted, since a frame that fails
/// to go out is simply replaced by the next one.
pub struct SmartLedsStrip<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsStrip<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the driver rejected so far. Saturates.
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    /// Returns a reference to the wrapped driver.
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Unwraps the driver.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedStrip for SmartLedsStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn write(&mut self, colors: &[LedColor]) {
        let pixels = colors
            .iter()
            .map(|color| RGB8::new(color.red, color.green, color.blue));

        if self.writer.write(pixels).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::warn!("led strip write failed ({} so far)", self.failed_writes);
        }
    }
}
