//! Gradient palettes and the palette cycler
//!
//! Palettes are defined as gradients (a handful of positioned stops) and
//! expanded once into 16 evenly spaced entries, the same way `FastLED`
//! loads `DEFINE_GRADIENT_PALETTE` data into a `CRGBPalette16`.

mod cycler;
pub mod presets;

use core::ops::Index;

pub use cycler::{
    CyclerConfig, DEFAULT_BLEND_INTERVAL, DEFAULT_BLEND_STEP, DEFAULT_PALETTE_INTERVAL,
    PaletteCycler,
};

use crate::color::{Rgb, fill_gradient_rgb, named, nscale8};
use crate::error::{Error, Result};
use crate::math8::scale8;

/// Number of entries in an expanded palette
pub const PALETTE_ENTRIES: usize = 16;

/// One stop of a gradient: position 0-255 and the color at that position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub position: u8,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(position: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            color: Rgb { r, g, b },
        }
    }
}

/// Named gradient definition
#[derive(Debug, Clone, Copy)]
pub struct GradientPalette {
    pub name: &'static str,
    pub stops: &'static [GradientStop],
}

impl GradientPalette {
    /// Check that stops start at 0, end at 255 and never go backwards
    pub fn validate(&self) -> Result<()> {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Err(Error::InvalidGradient);
        };
        if self.stops.len() < 2 || first.position != 0 || last.position != u8::MAX {
            return Err(Error::InvalidGradient);
        }
        if self
            .stops
            .windows(2)
            .any(|pair| pair[1].position < pair[0].position)
        {
            return Err(Error::InvalidGradient);
        }
        Ok(())
    }
}

/// 16-entry palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; PALETTE_ENTRIES],
}

impl Palette16 {
    pub const fn new(entries: [Rgb; PALETTE_ENTRIES]) -> Self {
        Self { entries }
    }

    /// Expand a gradient into 16 entries
    ///
    /// Each span between two stops fills entries `start / 16 ..= end / 16`.
    /// With fewer than 16 stops a span never starts on an entry already
    /// used by the previous span.
    pub fn from_gradient(gradient: &GradientPalette) -> Result<Self> {
        gradient.validate()?;

        let mut entries = [named::BLACK; PALETTE_ENTRIES];
        let sparse = gradient.stops.len() < PALETTE_ENTRIES;
        let mut last_used: Option<usize> = None;
        let mut start = gradient.stops[0];

        for &end in &gradient.stops[1..] {
            if start.position == u8::MAX {
                break;
            }
            let mut start_entry = usize::from(start.position / 16);
            let mut end_entry = usize::from(end.position / 16);
            if sparse {
                if let Some(last) = last_used {
                    if start_entry <= last && last < PALETTE_ENTRIES - 1 {
                        start_entry = last + 1;
                        end_entry = end_entry.max(start_entry);
                    }
                }
                last_used = Some(end_entry);
            }
            fill_gradient_rgb(&mut entries, start_entry, start.color, end_entry, end.color);
            start = end;
        }

        Ok(Self { entries })
    }

    pub const fn entries(&self) -> &[Rgb; PALETTE_ENTRIES] {
        &self.entries
    }

    pub(crate) const fn entries_mut(&mut self) -> &mut [Rgb; PALETTE_ENTRIES] {
        &mut self.entries
    }
}

impl Index<usize> for Palette16 {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.entries[index]
    }
}

/// Sample a palette at `index` (0-255) with linear blending between entries
///
/// Indices past the last entry blend back toward the first one.
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8) -> Rgb {
    let hi4 = usize::from(index >> 4);
    let lo4 = index & 0x0F;

    let first = palette.entries[hi4];
    let color = if lo4 == 0 {
        first
    } else {
        let second = palette.entries[(hi4 + 1) % PALETTE_ENTRIES];
        let amount_of_second = lo4 << 4;
        let amount_of_first = u8::MAX - amount_of_second;
        Rgb {
            r: scale8(first.r, amount_of_first).saturating_add(scale8(second.r, amount_of_second)),
            g: scale8(first.g, amount_of_first).saturating_add(scale8(second.g, amount_of_second)),
            b: scale8(first.b, amount_of_first).saturating_add(scale8(second.b, amount_of_second)),
        }
    };

    if brightness == u8::MAX {
        color
    } else {
        nscale8(color, brightness)
    }
}
