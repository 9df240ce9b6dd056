#![no_std]

pub mod color;
pub mod composer;
pub mod error;
pub mod math8;
pub mod palette;
pub mod ring;
pub mod timer;

pub use composer::{CAGE_LEDS, RibCage, RibCageConfig};
pub use error::{Error, Result};
pub use palette::{
    CyclerConfig, GradientPalette, GradientStop, Palette16, PaletteCycler, color_from_palette,
    presets,
};
pub use ring::{RING_SLOTS, Ring, RingVariant};
pub use timer::{Periodic, Timer};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push a rendered frame to the strip.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
