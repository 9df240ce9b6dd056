//! Concentric rings of the rib cage
//!
//! Each ring has 24 logical slots wired to the strip in an arbitrary order.
//! A ring keeps a floating-point target that is advanced once per frame, so
//! slow rings can move less than one slot per frame.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, named, nscale8};
use crate::error::{Error, Result};

/// Number of logical slots in every ring
pub const RING_SLOTS: usize = 24;

/// Upper bound of the rotational target
const MAX_TARGET: f32 = RING_SLOTS as f32;

const RAW_INNER: u8 = 0;
const RAW_MIDDLE: u8 = 1;
const RAW_OUTER: u8 = 2;

/// Physical LED index of every logical slot, per ring
pub const INNER_INDEX: [u8; RING_SLOTS] = [
    76, 96, 85, 99, 77, 91, 88, 82, 94, 78, 97, 86, //
    89, 79, 83, 92, 95, 80, 98, 84, 87, 90, 93, 81,
];
pub const MIDDLE_INDEX: [u8; RING_SLOTS] = [
    26, 36, 33, 30, 49, 27, 46, 43, 40, 37, 34, 31, //
    28, 47, 44, 41, 38, 35, 32, 29, 48, 45, 42, 39,
];
pub const OUTER_INDEX: [u8; RING_SLOTS] = [
    51, 66, 59, 73, 63, 70, 52, 56, 60, 67, 74, 53, //
    64, 71, 57, 61, 68, 54, 65, 72, 58, 62, 69, 55,
];

/// Radial distance of every logical slot from the cage centre, per ring
///
/// The rings are flattened front to back, so the distance peaks at the
/// sides (slots 0 and 12) and dips at the spine and sternum (6 and 18).
pub const INNER_RADIUS: [u8; RING_SLOTS] = [
    4, 4, 4, 3, 3, 2, 2, 2, 3, 3, 4, 4, //
    4, 4, 4, 3, 3, 2, 2, 2, 3, 3, 4, 4,
];
pub const MIDDLE_RADIUS: [u8; RING_SLOTS] = [
    8, 8, 7, 7, 6, 6, 5, 6, 6, 7, 7, 8, //
    8, 8, 7, 7, 6, 6, 5, 6, 6, 7, 7, 8,
];
pub const OUTER_RADIUS: [u8; RING_SLOTS] = [
    12, 12, 11, 11, 10, 9, 9, 9, 10, 11, 11, 12, //
    12, 12, 11, 11, 10, 9, 9, 9, 10, 11, 11, 12,
];

/// Largest physical LED index used by any ring
pub const MAX_LED_INDEX: usize = 99;

/// Which of the three concentric rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RingVariant {
    Inner = RAW_INNER,
    Middle = RAW_MIDDLE,
    Outer = RAW_OUTER,
}

impl RingVariant {
    /// All variants, innermost first
    pub const ALL: [Self; 3] = [Self::Inner, Self::Middle, Self::Outer];

    const fn index_table(self) -> &'static [u8; RING_SLOTS] {
        match self {
            Self::Inner => &INNER_INDEX,
            Self::Middle => &MIDDLE_INDEX,
            Self::Outer => &OUTER_INDEX,
        }
    }

    const fn radius_table(self) -> &'static [u8; RING_SLOTS] {
        match self {
            Self::Inner => &INNER_RADIUS,
            Self::Middle => &MIDDLE_RADIUS,
            Self::Outer => &OUTER_RADIUS,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Middle => "middle",
            Self::Outer => "outer",
        }
    }
}

impl TryFrom<u8> for RingVariant {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            RAW_INNER => Ok(Self::Inner),
            RAW_MIDDLE => Ok(Self::Middle),
            RAW_OUTER => Ok(Self::Outer),
            other => Err(Error::UnknownRingVariant(other)),
        }
    }
}

impl fmt::Display for RingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ring of the cage with its rotation state
#[derive(Debug, Clone)]
pub struct Ring {
    variant: RingVariant,
    index: &'static [u8; RING_SLOTS],
    /// Slots per frame, negative rotates backwards
    speed: f32,
    /// Current rotational position in `[0, 24)`
    target: f32,
    color: Rgb,
    /// Number of slots lit by the segment
    width: u8,
}

impl Ring {
    /// Create a ring with the installation defaults for `variant`
    pub const fn new(variant: RingVariant) -> Self {
        let (target, speed, color) = match variant {
            RingVariant::Inner => (0.0, 0.4, named::YELLOW),
            RingVariant::Middle => (8.0, -0.3, named::BLUE),
            RingVariant::Outer => (16.0, 0.2, named::GREEN),
        };
        Self {
            variant,
            index: variant.index_table(),
            speed,
            target,
            color,
            width: 1,
        }
    }

    /// Create a ring from its raw variant number (0 = inner, 1 = middle, 2 = outer)
    pub fn from_raw(variant: u8) -> Result<Self> {
        RingVariant::try_from(variant).map(Self::new)
    }

    /// Set the starting position, wrapped into `[0, 24)`
    #[must_use]
    pub fn with_target(mut self, target: f32) -> Self {
        let wrapped = libm::fmodf(target, MAX_TARGET);
        self.target = if wrapped < 0.0 { wrapped + MAX_TARGET } else { wrapped };
        if self.target >= MAX_TARGET {
            self.target = 0.0;
        }
        self
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    pub const fn variant(&self) -> RingVariant {
        self.variant
    }

    /// Base color scaled by `brightness` (0 = off, 255 = full)
    pub const fn color(&self, brightness: u8) -> Rgb {
        nscale8(self.color, brightness)
    }

    /// Base color at full brightness
    pub const fn color_full(&self) -> Rgb {
        self.color(u8::MAX)
    }

    pub const fn target(&self) -> f32 {
        self.target
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the rotation speed at runtime
    pub fn set_speed(&mut self, speed: f32) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Ring.set_speed] {} ring speed {:?} -> {:?}",
            self.variant.as_str(),
            self.speed,
            speed
        );
        self.speed = speed;
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn set_width(&mut self, width: u8) {
        self.width = width;
    }

    /// Advance the target by one frame
    ///
    /// Reaching the end wraps to 0. Going below zero wraps to
    /// `24 - |speed|` rather than a true modulo.
    pub fn inc_target(&mut self) {
        self.target += self.speed;
        if self.target >= MAX_TARGET {
            self.target = 0.0;
        } else if self.target < 0.0 {
            self.target = MAX_TARGET - libm::fabsf(self.speed);
        }
    }

    /// Physical LED index of a logical slot
    pub fn physical_index(&self, slot: usize) -> Result<usize> {
        self.index
            .get(slot)
            .map(|&index| usize::from(index))
            .ok_or(Error::SlotOutOfRange(slot))
    }

    /// Radial distance of a logical slot from the cage centre
    pub fn radius(&self, slot: usize) -> Result<u8> {
        self.variant
            .radius_table()
            .get(slot)
            .copied()
            .ok_or(Error::SlotOutOfRange(slot))
    }

    /// Write `color` to the physical LED behind a logical slot
    pub fn set_led(&self, leds: &mut [Rgb], slot: usize, color: Rgb) -> Result<()> {
        let index = self.physical_index(slot)?;
        let led = leds.get_mut(index).ok_or(Error::LedOutOfRange(index))?;
        *led = color;
        Ok(())
    }
}
