//! The drawing surface collaborator and a recording implementation.

use folio_types::{Point, Rect, Size};
use url::Url;

/// A 2D surface that pages are painted onto.
///
/// Rectangles passed to the drawing and annotation methods are relative to
/// the current origin, which `translate` moves.
pub trait DrawingSurface {
    /// Moves the coordinate origin by `(dx, dy)` device pixels.
    fn translate(&mut self, dx: f32, dy: f32);

    /// The current coordinate origin.
    fn origin(&self) -> Point;

    /// Starts physical page `index`. Surfaces without a page notion ignore this.
    fn begin_page(&mut self, _index: usize, _size: Size) {}

    /// Paints a run of text inside `rect`.
    fn draw_text(&mut self, rect: Rect, text: &str);

    /// Registers a named anchor region.
    fn add_anchor(&mut self, rect: Rect, name: &str);

    /// Registers a region that jumps to the anchor `target` in this document.
    fn add_link(&mut self, rect: Rect, target: &str);

    /// Registers a region that navigates to an external resource.
    fn add_hyperlink(&mut self, rect: Rect, url: &Url);
}

/// One call recorded by [`RecordingSurface`].
///
/// Rectangles are stored in absolute coordinates, with the origin that was
/// current at the time of the call already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    BeginPage { index: usize, size: Size },
    Translate { dx: f32, dy: f32 },
    Text { rect: Rect, text: String },
    Anchor { rect: Rect, name: String },
    Link { rect: Rect, target: String },
    Hyperlink { rect: Rect, url: String },
}

impl SurfaceOp {
    fn is_drawing(&self) -> bool {
        !matches!(self, SurfaceOp::Translate { .. } | SurfaceOp::BeginPage { .. })
    }
}

/// A surface that paints nothing and remembers every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    origin: Point,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of `translate` calls seen.
    pub fn translation_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Translate { .. }))
            .count()
    }

    /// Number of text and annotation calls seen.
    pub fn drawing_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_drawing()).count()
    }

    pub fn texts(&self) -> Vec<(Rect, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Text { rect, text } => Some((*rect, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin.offset(dx, dy);
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn begin_page(&mut self, index: usize, size: Size) {
        self.ops.push(SurfaceOp::BeginPage { index, size });
    }

    fn draw_text(&mut self, rect: Rect, text: &str) {
        self.ops.push(SurfaceOp::Text {
            rect: rect.translated(self.origin),
            text: text.to_string(),
        });
    }

    fn add_anchor(&mut self, rect: Rect, name: &str) {
        self.ops.push(SurfaceOp::Anchor {
            rect: rect.translated(self.origin),
            name: name.to_string(),
        });
    }

    fn add_link(&mut self, rect: Rect, target: &str) {
        self.ops.push(SurfaceOp::Link {
            rect: rect.translated(self.origin),
            target: target.to_string(),
        });
    }

    fn add_hyperlink(&mut self, rect: Rect, url: &Url) {
        self.ops.push(SurfaceOp::Hyperlink {
            rect: rect.translated(self.origin),
            url: url.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_translated_rects() {
        let mut surface = RecordingSurface::new();
        surface.translate(0.0, -60.0);
        surface.draw_text(Rect::new(0.0, 0.0, 100.0, 60.0), "Header");
        surface.translate(0.0, 60.0);

        assert_eq!(surface.origin(), Point::default());
        assert_eq!(surface.translation_count(), 2);
        assert_eq!(surface.drawing_count(), 1);
        assert_eq!(
            surface.texts(),
            vec![(Rect::new(0.0, -60.0, 100.0, 60.0), "Header")]
        );
    }

    #[test]
    fn test_take_ops_drains() {
        let mut surface = RecordingSurface::new();
        surface.add_anchor(Rect::default(), "top");
        assert_eq!(surface.take_ops().len(), 1);
        assert!(surface.ops().is_empty());
    }
}
