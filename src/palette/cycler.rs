use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{GradientPalette, Palette16};
use crate::error::{Error, Result};
use crate::math8::{addmod8, step_toward8};
use crate::timer::Periodic;

/// Default time each palette stays the target
pub const DEFAULT_PALETTE_INTERVAL: Duration = Duration::from_secs(10);

/// Default time between two blend steps
pub const DEFAULT_BLEND_INTERVAL: Duration = Duration::from_millis(10);

/// Default per-channel blend step
pub const DEFAULT_BLEND_STEP: u8 = 12;

/// Palette cycler timing
#[derive(Debug, Clone, Copy)]
pub struct CyclerConfig {
    /// How long each palette stays the target before the next one is picked
    pub palette_interval: Duration,
    /// How often `current` moves toward `target`
    pub blend_interval: Duration,
    /// Maximum change of a single channel per blend step
    pub blend_step: u8,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            palette_interval: DEFAULT_PALETTE_INTERVAL,
            blend_interval: DEFAULT_BLEND_INTERVAL,
            blend_step: DEFAULT_BLEND_STEP,
        }
    }
}

/// Cross-fades through a fixed rotation of palettes
///
/// N is the maximum number of palettes in the rotation
#[derive(Debug, Clone)]
pub struct PaletteCycler<const N: usize> {
    active: Vec<Palette16, N>,
    current: Palette16,
    target: Palette16,
    /// Last selected rotation index, `None` before the first switch
    cursor: Option<u8>,
    max_step: u8,
    switch_guard: Periodic,
    blend_guard: Periodic,
}

impl<const N: usize> PaletteCycler<N> {
    /// Expand `gradients` into the rotation
    ///
    /// Starts with both `current` and `target` on the first palette.
    pub fn new(gradients: &[&GradientPalette], config: &CyclerConfig) -> Result<Self> {
        let max = N.min(usize::from(u8::MAX));
        if gradients.len() > max {
            return Err(Error::TooManyPalettes { max });
        }

        let mut active = Vec::new();
        for gradient in gradients {
            let palette = Palette16::from_gradient(gradient)?;
            active
                .push(palette)
                .map_err(|_| Error::TooManyPalettes { max })?;
        }
        let first = *active.first().ok_or(Error::NoPalettes)?;

        Ok(Self {
            active,
            current: first,
            target: first,
            cursor: None,
            max_step: config.blend_step,
            switch_guard: Periodic::new(config.palette_interval),
            blend_guard: Periodic::new(config.blend_interval),
        })
    }

    /// Number of palettes in the rotation
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub const fn current(&self) -> &Palette16 {
        &self.current
    }

    pub const fn target(&self) -> &Palette16 {
        &self.target
    }

    /// Palette at a rotation index
    pub fn palette(&self, index: usize) -> Option<&Palette16> {
        self.active.get(index)
    }

    /// Last selected rotation index
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.map(usize::from)
    }

    /// Check if `current` has not reached `target` yet
    pub fn is_blending(&self) -> bool {
        self.current != self.target
    }

    /// Make the next palette in the rotation the target
    ///
    /// Returns the selected rotation index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_next_palette(&mut self) -> usize {
        // `new` caps the rotation at 255 palettes
        let count = self.active.len() as u8;
        let next = self.cursor.map_or(0, |cursor| addmod8(cursor, 1, count));
        self.cursor = Some(next);
        let next = usize::from(next);
        #[cfg(feature = "esp32-log")]
        println!("[PaletteCycler.set_next_palette] fading to palette {}", next);
        self.target = self.active[next];
        next
    }

    /// Jump to a palette without blending
    ///
    /// The rotation cursor is left alone.
    pub fn set_current_palette(&mut self, index: usize) -> Result<()> {
        let palette = *self
            .active
            .get(index)
            .ok_or(Error::PaletteOutOfRange(index))?;
        #[cfg(feature = "esp32-log")]
        println!("[PaletteCycler.set_current_palette] jumping to palette {}", index);
        self.current = palette;
        self.target = palette;
        Ok(())
    }

    /// Move every channel of `current` at most `blend_step` toward `target`
    ///
    /// Returns false once `current` equals `target`.
    pub fn blend_step(&mut self) -> bool {
        if !self.is_blending() {
            return false;
        }
        let target = self.target.entries();
        for (current, target) in self.current.entries_mut().iter_mut().zip(target) {
            current.r = step_toward8(current.r, target.r, self.max_step);
            current.g = step_toward8(current.g, target.g, self.max_step);
            current.b = step_toward8(current.b, target.b, self.max_step);
        }
        true
    }

    /// Per-frame entry point
    ///
    /// Switches the target palette and blends toward it, each on its own
    /// cadence. Calling it more often than the cadences is harmless.
    pub fn cycle(&mut self, now: Instant) {
        if self.switch_guard.ready(now) {
            self.set_next_palette();
        }
        if self.blend_guard.ready(now) {
            self.blend_step();
        }
    }
}
