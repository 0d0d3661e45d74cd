//! Coordinate and string conversions between device space and PDF space.

use folio_types::Rect;
use lopdf::Object;

/// Converts a top-left-origin y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// A device-pixel rectangle as a PDF `Rect` array `[llx lly urx ury]` in
/// points, on a page `page_height` points tall.
pub fn pdf_rect(rect: Rect, scale: f32, page_height: f32) -> Vec<Object> {
    let x0 = rect.x * scale;
    let x1 = rect.right() * scale;
    let top = flip_y(rect.y * scale, page_height);
    let bottom = flip_y(rect.bottom() * scale, page_height);
    vec![x0.into(), bottom.into(), x1.into(), top.into()]
}

/// Latin-1 encoding for the standard Type1 fonts; anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_rect_flips_and_scales() {
        let arr = pdf_rect(Rect::new(10.0, 20.0, 30.0, 40.0), 0.5, 100.0);
        let values: Vec<f32> = arr.iter().filter_map(|o| o.as_f32().ok()).collect();
        assert_eq!(values, vec![5.0, 70.0, 20.0, 90.0]);
    }

    #[test]
    fn test_win_ansi_replaces_wide_chars() {
        assert_eq!(to_win_ansi("é→"), vec![0xE9, b'?']);
    }
}
