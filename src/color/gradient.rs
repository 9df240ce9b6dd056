use crate::color::Rgb;

/// Fill an RGB gradient using fixed-point 8.8 arithmetic (ported from `FastLED`)
///
/// Both endpoints are inclusive. Positions past the end of `leds` are ignored.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
pub fn fill_gradient_rgb(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Rgb,
    end_pos: usize,
    end_color: Rgb,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, start_color, end_color) = if end_pos < start_pos {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    // Channel distances in 8.7 fixed-point
    let r_distance87 = (i32::from(end_color.r) - i32::from(start_color.r)) << 7;
    let g_distance87 = (i32::from(end_color.g) - i32::from(start_color.g)) << 7;
    let b_distance87 = (i32::from(end_color.b) - i32::from(start_color.b)) << 7;

    let pixel_distance = end_pos - start_pos;
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i32
    };

    // Per-pixel deltas, converted to 8.8 and applied with 16-bit wrapping
    let r_delta88 = ((r_distance87 / divisor) * 2) as u16;
    let g_delta88 = ((g_distance87 / divisor) * 2) as u16;
    let b_delta88 = ((b_distance87 / divisor) * 2) as u16;

    let mut r88 = u16::from(start_color.r) << 8;
    let mut g88 = u16::from(start_color.g) << 8;
    let mut b88 = u16::from(start_color.b) << 8;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = Rgb {
            r: (r88 >> 8) as u8,
            g: (g88 >> 8) as u8,
            b: (b88 >> 8) as u8,
        };
        r88 = r88.wrapping_add(r_delta88);
        g88 = g88.wrapping_add(g_delta88);
        b88 = b88.wrapping_add(b_delta88);
    }
}
