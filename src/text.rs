//! Bitmap text for the HUD
//!
//! A 5x7 pixel font drawn with SDL2 rectangles, so the game needs no font
//! file. Lowercase letters render as uppercase; unknown characters render as a
//! solid block.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_WIDTH: u32 = 5;
/// Horizontal advance per character, glyph plus one column of spacing
const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Vertical advance per line, glyph plus two rows of spacing
const LINE_HEIGHT: u32 = 9;

/// Row bitmaps for one character, top row first, bit 4 = leftmost pixel
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        _ => [0b11111; 7],
    }
}

/// Width in pixels of the widest line of `text` at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.lines()
        .map(|line| line.chars().count() as u32 * ADVANCE * scale)
        .max()
        .unwrap_or(0)
}

/// Height in pixels of `text` at the given scale, one line per `\n`.
pub fn text_height(text: &str, scale: u32) -> u32 {
    text.lines().count() as u32 * LINE_HEIGHT * scale
}

/// Renders one line of bitmap text with its top-left corner at (`x`, `y`).
///
/// # Example
///
/// ```rust
/// draw_simple_text(&mut canvas, "ALTITUDE: 98.0", 4, 4, Color::RGB(255, 255, 255), 2)?;
/// ```
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + (i as u32 * ADVANCE * scale) as i32;

        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if (bits >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Renders multi-line text with every line centred on `center_x`.
pub fn draw_centered_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    for (n, line) in text.lines().enumerate() {
        let line_x = center_x - (text_width(line, scale) / 2) as i32;
        let line_y = y + (n as u32 * LINE_HEIGHT * scale) as i32;
        draw_simple_text(canvas, line, line_x, line_y, color, scale)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales() {
        assert_eq!(text_width("ALTITUDE", 1), 48);
        assert_eq!(text_width("ALTITUDE", 2), 96);
        assert_eq!(text_width("", 2), 0);
    }

    #[test]
    fn test_text_width_uses_widest_line() {
        let text = "CONGRATULATIONS!\nYOU MADE IT TO SPACE!";
        assert_eq!(text_width(text, 1), 21 * 6);
        assert_eq!(text_height(text, 1), 18);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_unknown_char_is_block() {
        assert_eq!(glyph('#'), [0b11111; 7]);
        assert_eq!(glyph(' '), [0; 7]);
    }
}
