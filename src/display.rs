use crate::core::canvas::{Canvas, MonoCanvas};

/// ANSI: move the cursor back to the top-left without clearing.
pub const CURSOR_HOME: &str = "\x1b[H";

/// ANSI: clear the screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render the canvas as terminal text, two pixel rows per line using
/// half-block characters. Odd-height canvases get a phantom dark last row.
pub fn half_blocks(canvas: &MonoCanvas) -> String {
    let (width, height) = canvas.dimensions();
    let mut out = String::with_capacity((width as usize + 1) * height as usize / 2);

    let mut y = 0i32;
    while y < height as i32 {
        for x in 0..width as i32 {
            let top = canvas.pixel(x, y);
            let bottom = canvas.pixel(x, y + 1);

            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }

        out.push('\n');
        y += 2;
    }

    out
}

/// Expand the packed canvas into RGBA bytes (white on black), one byte
/// quad per pixel, for texture upload or image export.
pub fn expand_rgba(canvas: &MonoCanvas) -> Vec<u8> {
    let (width, height) = canvas.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let v = if canvas.pixel(x, y) { 0xFF } else { 0x00 };
            pixels.extend_from_slice(&[v, v, v, 0xFF]);
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_blocks_maps_pixel_pairs() {
        let mut canvas = MonoCanvas::new(4, 2);
        canvas.set_pixel(0, 0, true); // top only
        canvas.set_pixel(1, 1, true); // bottom only
        canvas.set_pixel(2, 0, true); // both
        canvas.set_pixel(2, 1, true);

        assert_eq!(half_blocks(&canvas), "▀▄█ \n");
    }

    #[test]
    fn half_blocks_odd_height_pads_dark() {
        let mut canvas = MonoCanvas::new(2, 3);
        canvas.set_pixel(0, 2, true);

        let text = half_blocks(&canvas);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        // Row 2 pairs with a dark phantom row below it
        assert_eq!(lines[1], "▀ ");
    }

    #[test]
    fn expand_rgba_is_white_on_black() {
        let mut canvas = MonoCanvas::new(2, 1);
        canvas.set_pixel(1, 0, true);

        let pixels = expand_rgba(&canvas);
        assert_eq!(pixels.len(), 8);
        assert_eq!(&pixels[0..4], &[0x00, 0x00, 0x00, 0xFF]);
        assert_eq!(&pixels[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn expand_rgba_size_matches_canvas() {
        let canvas = MonoCanvas::new(128, 64);
        assert_eq!(expand_rgba(&canvas).len(), 128 * 64 * 4);
    }
}
