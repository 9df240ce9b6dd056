use embassy_time::Instant;

use crate::OutputDriver;
use crate::color::{Rgb, blend_colors, named};
use crate::error::{Error, Result};
use crate::math8::fract8;
use crate::palette::{
    CyclerConfig, GradientPalette, Palette16, PaletteCycler, color_from_palette, presets,
};
use crate::ring::{MAX_LED_INDEX, RING_SLOTS, Ring, RingVariant};
use crate::timer::millis32;

/// LED count needed by the shipped index tables
pub const CAGE_LEDS: usize = MAX_LED_INDEX + 1;

/// Configuration for the rib cage composer
#[derive(Debug, Clone)]
pub struct RibCageConfig {
    /// Palette rotation, in cycling order
    pub palettes: &'static [&'static GradientPalette],
    pub cycler: CyclerConfig,
    /// Brightness of the palette background behind the lit segments
    pub background_brightness: u8,
    /// Palette indices the background drifts per second
    pub hue_drift: u8,
    /// Palette indices between two neighbouring radii
    pub radius_spread: u8,
}

impl Default for RibCageConfig {
    fn default() -> Self {
        Self {
            palettes: &presets::DEFAULT_ROTATION,
            cycler: CyclerConfig::default(),
            background_brightness: 64,
            hue_drift: 8,
            radius_spread: 16,
        }
    }
}

/// Rib cage composer - owns the rings, the palettes and the LED buffer
///
/// LEDS is the length of the physical strip, PALETTES the maximum size of
/// the palette rotation.
#[derive(Debug, Clone)]
pub struct RibCage<const LEDS: usize, const PALETTES: usize> {
    rings: [Ring; 3],
    palettes: PaletteCycler<PALETTES>,
    leds: [Rgb; LEDS],

    background_brightness: u8,
    hue_drift: u8,
    radius_spread: u8,
}

impl<const LEDS: usize, const PALETTES: usize> RibCage<LEDS, PALETTES> {
    pub fn new(config: &RibCageConfig) -> Result<Self> {
        if LEDS < CAGE_LEDS {
            return Err(Error::LedBufferTooSmall {
                required: CAGE_LEDS,
            });
        }
        Ok(Self {
            rings: RingVariant::ALL.map(Ring::new),
            palettes: PaletteCycler::new(config.palettes, &config.cycler)?,
            leds: [named::BLACK; LEDS],
            background_brightness: config.background_brightness,
            hue_drift: config.hue_drift,
            radius_spread: config.radius_spread,
        })
    }

    pub fn ring(&self, variant: RingVariant) -> &Ring {
        &self.rings[variant as usize]
    }

    pub fn ring_mut(&mut self, variant: RingVariant) -> &mut Ring {
        &mut self.rings[variant as usize]
    }

    pub fn rings(&self) -> &[Ring; 3] {
        &self.rings
    }

    pub const fn palettes(&self) -> &PaletteCycler<PALETTES> {
        &self.palettes
    }

    pub const fn palettes_mut(&mut self) -> &mut PaletteCycler<PALETTES> {
        &mut self.palettes
    }

    /// Last rendered frame
    pub const fn leds(&self) -> &[Rgb; LEDS] {
        &self.leds
    }

    /// Process one frame
    ///
    /// Advances the palettes, paints every ring and then moves every ring
    /// one step. Call this once per frame.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.palettes.cycle(now);
        self.leds.fill(named::BLACK);

        let background = Background {
            palette: self.palettes.current(),
            hue: self.hue_offset(now),
            spread: self.radius_spread,
            brightness: self.background_brightness,
        };
        for ring in &self.rings {
            background.paint(&mut self.leds, ring);
            paint_segment(&mut self.leds, ring);
        }
        for ring in &mut self.rings {
            ring.inc_target();
        }

        &self.leds
    }

    /// Render a frame and write it to the driver
    pub fn show<O: OutputDriver>(&mut self, now: Instant, driver: &mut O) {
        let frame = self.render(now);
        driver.write(frame);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hue_offset(&self, now: Instant) -> u8 {
        let drift = u64::from(millis32(now)) * u64::from(self.hue_drift) / 1000;
        drift as u8
    }
}

/// Palette background shared by all rings of a frame
struct Background<'a> {
    palette: &'a Palette16,
    hue: u8,
    spread: u8,
    brightness: u8,
}

impl Background<'_> {
    /// Fill the ring from the palette, outer slots further along it
    fn paint(&self, leds: &mut [Rgb], ring: &Ring) {
        for slot in 0..RING_SLOTS {
            let radius = ring.radius(slot).unwrap_or_default();
            let index = radius.wrapping_mul(self.spread).wrapping_add(self.hue);
            let color = color_from_palette(self.palette, index, self.brightness);
            // The buffer length is checked in `RibCage::new`
            let _ = ring.set_led(leds, slot, color);
        }
    }
}

/// Light `width` slots from the target, fading the first and last one
/// by the fractional part of the target
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn paint_segment(leds: &mut [Rgb], ring: &Ring) {
    let width = usize::from(ring.width());
    if width == 0 {
        return;
    }
    let target = ring.target();
    let whole = libm::floorf(target);
    let fraction = target - whole;
    let first = whole as usize;

    for offset in 0..=width {
        let weight = if offset == 0 {
            1.0 - fraction
        } else if offset == width {
            fraction
        } else {
            1.0
        };
        let slot = (first + offset) % RING_SLOTS;
        let Ok(index) = ring.physical_index(slot) else {
            continue;
        };
        let Some(&background) = leds.get(index) else {
            continue;
        };
        let color = blend_colors(background, ring.color_full(), fract8(weight));
        let _ = ring.set_led(leds, slot, color);
    }
}
