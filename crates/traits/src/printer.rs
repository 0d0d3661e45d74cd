//! The printer collaborator: paper geometry and margins in two unit systems.

use folio_types::{Margins, POINTS_PER_INCH, Rect, Size, Unit};

/// Page geometry owned by the printer.
///
/// The printer is the only authority on how points map to device pixels;
/// callers that need a device-pixel distance for a point value set it in
/// points and read it back in pixels.
pub trait PrinterConfig {
    /// Current margins expressed in `unit`.
    fn page_margins(&self, unit: Unit) -> Margins;

    /// Replaces the margins; `margins` is interpreted in `unit`.
    fn set_page_margins(&mut self, margins: Margins, unit: Unit);

    /// Full paper size expressed in `unit`.
    fn paper_size(&self, unit: Unit) -> Size;

    /// The printable area: the paper minus the margins.
    fn page_rect(&self, unit: Unit) -> Rect {
        let paper = self.paper_size(unit);
        let m = self.page_margins(unit);
        Rect::new(
            m.left as f32,
            m.top as f32,
            (paper.width - (m.left + m.right) as f32).max(0.0),
            (paper.height - (m.top + m.bottom) as f32).max(0.0),
        )
    }
}

/// A printer with a fixed resolution. Geometry is stored in points and
/// converted to whole device pixels on read.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedResolutionPrinter {
    paper: Size,
    margins: Margins,
    dpi: f64,
}

impl FixedResolutionPrinter {
    /// A4 at 72 dpi with 10mm margins.
    pub fn a4() -> Self {
        let ten_mm = 10.0 / 25.4 * POINTS_PER_INCH;
        Self::new(Size::new(595.0, 842.0), Margins::uniform(ten_mm), 72.0)
    }

    /// `paper` and `margins` are in points.
    pub fn new(paper: Size, margins: Margins, dpi: f64) -> Self {
        Self {
            paper,
            margins,
            dpi,
        }
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    fn to_pixels(&self, points: f64) -> f64 {
        (points * self.dpi / POINTS_PER_INCH).round()
    }

    fn to_points(&self, pixels: f64) -> f64 {
        pixels * POINTS_PER_INCH / self.dpi
    }
}

impl Default for FixedResolutionPrinter {
    fn default() -> Self {
        Self::a4()
    }
}

impl PrinterConfig for FixedResolutionPrinter {
    fn page_margins(&self, unit: Unit) -> Margins {
        match unit {
            Unit::Point => self.margins,
            Unit::DevicePixel => self.margins.map(|v| self.to_pixels(v)),
        }
    }

    fn set_page_margins(&mut self, margins: Margins, unit: Unit) {
        self.margins = match unit {
            Unit::Point => margins,
            Unit::DevicePixel => margins.map(|v| self.to_points(v)),
        };
    }

    fn paper_size(&self, unit: Unit) -> Size {
        match unit {
            Unit::Point => self.paper,
            Unit::DevicePixel => Size::new(
                self.to_pixels(self.paper.width as f64) as f32,
                self.to_pixels(self.paper.height as f64) as f32,
            ),
        }
    }
}
