use crate::guard::OriginGuard;
use folio_traits::{DrawingSurface, LayoutHost, PrintCallback, PrinterConfig, SecondaryDocument};
use folio_types::{Rect, Unit};
use log::debug;

/// Device-pixel heights for a header and footer given in points.
///
/// The point heights are added to the printer's point margins and the
/// printer is asked for the resulting device-pixel margins; the growth of
/// each margin is the pixel height. The printer keeps the grown margins so
/// the main content is laid out clear of the header and footer.
pub fn reserve_margins<P: PrinterConfig + ?Sized>(
    printer: &mut P,
    header_points: f64,
    footer_points: f64,
) -> (u32, u32) {
    let baseline = printer.page_margins(Unit::DevicePixel);

    let mut margins = printer.page_margins(Unit::Point);
    margins.top += header_points;
    margins.bottom += footer_points;
    printer.set_page_margins(margins, Unit::Point);

    let grown = printer.page_margins(Unit::DevicePixel);
    let header = (grown.top - baseline.top).max(0.0) as u32;
    let footer = (grown.bottom - baseline.bottom).max(0.0) as u32;
    debug!(
        "HeaderFooter: {}pt header -> {}px, {}pt footer -> {}px",
        header_points, header, footer_points, footer
    );
    (header, footer)
}

/// Paints per-page header and footer content into the page margins.
///
/// Content comes from a [`PrintCallback`] and is laid out in a secondary
/// document owned by the compositor, separate from the document being
/// printed. Every paint call re-renders that document since content varies
/// with the page number.
///
/// A compositor without a callback, or whose callback asks for no header
/// and no footer, is inert: [`HeaderFooter::is_valid`] is false and every
/// paint call returns without touching the surface.
#[derive(Debug)]
pub struct HeaderFooter<C, D> {
    callback: Option<C>,
    secondary: Option<D>,
    header_height: u32,
    footer_height: u32,
}

impl<C: PrintCallback, D: SecondaryDocument> HeaderFooter<C, D> {
    /// Reserves header/footer space on `printer` and allocates the secondary
    /// document from `host`.
    ///
    /// The printer margins are only touched when at least one of the
    /// requested heights is positive.
    pub fn new<H, P>(host: &H, printer: &mut P, callback: Option<C>) -> Self
    where
        H: LayoutHost<Secondary = D> + ?Sized,
        P: PrinterConfig + ?Sized,
    {
        let mut compositor = Self {
            callback: None,
            secondary: None,
            header_height: 0,
            footer_height: 0,
        };
        let Some(callback) = callback else {
            return compositor;
        };

        let header_points = callback.header_height().max(0.0);
        let footer_points = callback.footer_height().max(0.0);
        compositor.callback = Some(callback);
        if header_points == 0.0 && footer_points == 0.0 {
            debug!("HeaderFooter: no header or footer requested");
            return compositor;
        }

        let (header, footer) = reserve_margins(printer, header_points, footer_points);
        compositor.header_height = header;
        compositor.footer_height = footer;
        compositor.secondary = Some(host.create_secondary());
        compositor
    }

    pub fn is_valid(&self) -> bool {
        self.callback.is_some() && (self.header_height > 0 || self.footer_height > 0)
    }

    /// Header height in device pixels.
    pub fn header_height(&self) -> u32 {
        self.header_height
    }

    /// Footer height in device pixels.
    pub fn footer_height(&self) -> u32 {
        self.footer_height
    }

    /// Paints the header for `page` above the content area of `page_rect`.
    pub fn paint_header<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        page_rect: Rect,
        page: usize,
        total_pages: usize,
    ) {
        if self.header_height == 0 {
            return;
        }
        let Some(html) = self.content(|c| c.header(page, total_pages)) else {
            return;
        };
        let height = self.header_height;
        let mut surface = OriginGuard::translate(surface, 0.0, -(height as f32));
        self.paint(&mut *surface, page_rect, &html, height);
    }

    /// Paints the footer for `page` below the content area of `page_rect`.
    pub fn paint_footer<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        page_rect: Rect,
        page: usize,
        total_pages: usize,
    ) {
        if self.footer_height == 0 {
            return;
        }
        let Some(html) = self.content(|c| c.footer(page, total_pages)) else {
            return;
        };
        let height = self.footer_height;
        let mut surface = OriginGuard::translate(surface, 0.0, page_rect.height);
        self.paint(&mut *surface, page_rect, &html, height);
    }

    fn content(&self, fetch: impl FnOnce(&C) -> String) -> Option<String> {
        self.callback
            .as_ref()
            .map(fetch)
            .filter(|html| !html.is_empty())
    }

    fn paint<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        page_rect: Rect,
        html: &str,
        height: u32,
    ) {
        let Some(secondary) = self.secondary.as_mut() else {
            return;
        };
        secondary.set_html(html);
        secondary.begin(page_rect.width, height as f32);
        // The secondary never gets a header or footer of its own.
        secondary.compute_page_rects(page_rect, 0.0, 0.0, 1.0);
        secondary.spool_page(surface, 0, page_rect.width);
        secondary.end();
    }
}
