//! Pagination collaborators: the print context that slices a flowed document
//! into pages, and the isolated secondary document used for headers/footers.

use crate::surface::DrawingSurface;
use folio_types::Rect;

/// Splits a laid-out document into pages and paints them onto a surface.
///
/// Calls follow a fixed protocol: `begin`, `compute_page_rects`, any number
/// of `spool_page`, then `end`.
pub trait PrintContext {
    /// Starts a print computation for a page of the given device-pixel size.
    fn begin(&mut self, width: f32, height: f32);

    /// Computes the page rectangles for `print_rect`, reserving
    /// `header_height`/`footer_height` and applying `user_scale_factor`.
    ///
    /// Returns the resulting page height.
    fn compute_page_rects(
        &mut self,
        print_rect: Rect,
        header_height: f32,
        footer_height: f32,
        user_scale_factor: f32,
    ) -> f32;

    /// Number of pages produced by the last `compute_page_rects`.
    fn page_count(&self) -> usize;

    /// Paints page `page` onto `surface`, spanning `width` device pixels.
    fn spool_page<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, page: usize, width: f32);

    /// Ends the print computation started by `begin`.
    fn end(&mut self);
}

/// A small, separately laid-out document whose content is replaced wholesale.
pub trait SecondaryDocument: PrintContext {
    /// Replaces the entire content of the document.
    fn set_html(&mut self, html: &str);
}

/// Something able to allocate secondary documents, usually the frame that
/// is being printed so the secondary inherits its settings.
pub trait LayoutHost {
    type Secondary: SecondaryDocument;

    /// Creates a fresh secondary document that shares no layout state with
    /// the host.
    fn create_secondary(&self) -> Self::Secondary;
}
