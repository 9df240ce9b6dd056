mod gradient;
mod utils;

use smart_leds::RGB8;

pub use gradient::fill_gradient_rgb;
pub use utils::{blend_colors, nscale8};

pub type Rgb = RGB8;

/// `FastLED` named colors used by the installation
pub mod named {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };
}
