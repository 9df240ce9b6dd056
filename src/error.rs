use thiserror::Error;

/// Errors reported by the ring model, the palette cycler and the composer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unknown ring variant: {0}")]
    UnknownRingVariant(u8),
    #[error("ring slot {0} is out of range")]
    SlotOutOfRange(usize),
    #[error("LED {0} is outside of the LED buffer")]
    LedOutOfRange(usize),
    #[error("palette rotation is empty")]
    NoPalettes,
    #[error("palette rotation holds at most {max} palettes")]
    TooManyPalettes { max: usize },
    #[error("palette {0} is out of range")]
    PaletteOutOfRange(usize),
    #[error("gradient must start at 0, end at 255 and never go backwards")]
    InvalidGradient,
    #[error("LED buffer must hold at least {required} LEDs")]
    LedBufferTooSmall { required: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
