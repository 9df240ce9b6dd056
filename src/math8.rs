//! 8-bit colour maths (ported from `FastLED`'s `lib8tion`)

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Add one to `value` modulo `modulus`
///
/// Returns 0 for a zero modulus.
#[inline]
pub const fn addmod8(value: u8, add: u8, modulus: u8) -> u8 {
    if modulus == 0 {
        return 0;
    }
    let mut sum = value.wrapping_add(add);
    while sum >= modulus {
        sum -= modulus;
    }
    sum
}

/// Move `current` toward `target` by at most `max_step`
#[inline]
pub const fn step_toward8(current: u8, target: u8, max_step: u8) -> u8 {
    if current < target {
        let gap = target - current;
        if gap > max_step { current + max_step } else { target }
    } else {
        let gap = current - target;
        if gap > max_step { current - max_step } else { target }
    }
}

/// Convert a fraction in `[0, 1]` to 0-255, clamping out-of-range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fract8(fraction: f32) -> u8 {
    let scaled = libm::roundf(fraction * 255.0);
    if scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        255
    } else {
        scaled as u8
    }
}
