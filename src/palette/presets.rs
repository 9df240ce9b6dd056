//! Gradient palettes shipped with the installation

use super::{GradientPalette, GradientStop};

// Maroon, Chocolate, Coral, Orchid
pub static RED_ROSE_ORCHID: GradientPalette = GradientPalette {
    name: "red_rose_orchid",
    stops: &[
        GradientStop::new(0, 128, 0, 0),
        GradientStop::new(85, 210, 105, 30),
        GradientStop::new(170, 255, 127, 80),
        GradientStop::new(255, 218, 112, 214),
    ],
};

// ForestGreen, Lime, Gold, DarkOrange
pub static TEAL_GREEN_GOLD: GradientPalette = GradientPalette {
    name: "teal_green_gold",
    stops: &[
        GradientStop::new(0, 34, 139, 34),
        GradientStop::new(85, 0, 255, 0),
        GradientStop::new(170, 255, 215, 0),
        GradientStop::new(255, 255, 140, 0),
    ],
};

// Red, OrangeRed, Orange, Gold
pub static FIRE: GradientPalette = GradientPalette {
    name: "fire",
    stops: &[
        GradientStop::new(0, 255, 0, 0),
        GradientStop::new(200, 255, 69, 0),
        GradientStop::new(225, 255, 140, 0),
        GradientStop::new(255, 255, 215, 0),
    ],
};

/// Darker fire revision, starting from glowing embers
pub static FIRE_EMBERS: GradientPalette = GradientPalette {
    name: "fire_embers",
    stops: &[
        GradientStop::new(0, 64, 0, 0),
        GradientStop::new(128, 255, 0, 0),
        GradientStop::new(200, 255, 69, 0),
        GradientStop::new(255, 255, 140, 0),
    ],
};

// Light, medium and dark blue
pub static ICE: GradientPalette = GradientPalette {
    name: "ice",
    stops: &[
        GradientStop::new(0, 224, 240, 255),
        GradientStop::new(127, 31, 147, 255),
        GradientStop::new(255, 48, 64, 72),
    ],
};

// QuarterFairy, HalfFairy, FairyLight, white
pub static FAIRY: GradientPalette = GradientPalette {
    name: "fairy",
    stops: &[
        GradientStop::new(0, 63, 57, 11),
        GradientStop::new(127, 127, 114, 22),
        GradientStop::new(224, 255, 227, 45),
        GradientStop::new(255, 255, 255, 255),
    ],
};

// Cyan, azure, violet, white
pub static ATOM: GradientPalette = GradientPalette {
    name: "atom",
    stops: &[
        GradientStop::new(0, 0, 255, 255),
        GradientStop::new(96, 0, 64, 255),
        GradientStop::new(160, 128, 0, 255),
        GradientStop::new(255, 255, 255, 255),
    ],
};

/// Default rotation
pub static DEFAULT_ROTATION: [&GradientPalette; 5] =
    [&RED_ROSE_ORCHID, &TEAL_GREEN_GOLD, &FIRE, &FAIRY, &ICE];

/// Alternate rotation with the ember fire and the atom palette in place of ice
pub static ATOM_ROTATION: [&GradientPalette; 5] =
    [&RED_ROSE_ORCHID, &TEAL_GREEN_GOLD, &FIRE_EMBERS, &FAIRY, &ATOM];
