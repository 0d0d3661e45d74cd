//! The per-document print loop.

use folio_header_footer::{HeaderFooter, OriginGuard};
use folio_links::LinkPager;
use folio_traits::{
    DocumentFrame, DrawingSurface, LayoutHost, PrintCallback, PrintContext, PrinterConfig,
};
use folio_types::Unit;
use log::{debug, info};

/// What a finished print job produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintSummary {
    pub pages: usize,
    pub anchors: usize,
    pub links: usize,
    pub hyperlinks: usize,
}

/// Prints a laid-out document page by page, with headers, footers and link
/// annotations.
///
/// Each physical page is painted in this order: the main content, then the
/// header, then the footer, then the page's anchors and links. The surface
/// origin sits at the top-left corner of the printable area while a page is
/// painted, so every page-local rectangle lands inside the margins.
pub struct PrintJob<'a, F, P: ?Sized> {
    frame: &'a F,
    printer: &'a mut P,
    scale: f32,
}

impl<'a, F, P> PrintJob<'a, F, P>
where
    F: DocumentFrame + LayoutHost,
    P: PrinterConfig + ?Sized,
{
    pub fn new(frame: &'a F, printer: &'a mut P) -> Self {
        Self {
            frame,
            printer,
            scale: 1.0,
        }
    }

    /// Scale factor handed to the print context when computing page rects.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Runs the job. The printer keeps any margins grown for the header and
    /// footer.
    pub fn run<C, S>(
        self,
        context: &mut F::Context,
        callback: Option<C>,
        surface: &mut S,
    ) -> PrintSummary
    where
        C: PrintCallback,
        S: DrawingSurface + ?Sized,
    {
        let mut header_footer = HeaderFooter::new(self.frame, &mut *self.printer, callback);

        let paper = self.printer.paper_size(Unit::DevicePixel);
        let page_rect = self.printer.page_rect(Unit::DevicePixel);
        debug!(
            "PrintJob: paper {}x{} px, content {:?}",
            paper.width, paper.height, page_rect
        );

        context.begin(page_rect.width, page_rect.height);
        // The printer margins already hold the header and footer bands.
        context.compute_page_rects(page_rect, 0.0, 0.0, self.scale);
        let total_pages = context.page_count();

        let pager = LinkPager::new(Some(self.frame), context);

        for page in 0..total_pages {
            surface.begin_page(page, paper);
            let mut surface = OriginGuard::translate(&mut *surface, page_rect.x, page_rect.y);

            context.spool_page(&mut *surface, page, page_rect.width);
            header_footer.paint_header(&mut *surface, page_rect, page + 1, total_pages);
            header_footer.paint_footer(&mut *surface, page_rect, page + 1, total_pages);
            pager.paint_links(page, &mut *surface, context);
        }

        context.end();

        let index = pager.index();
        let summary = PrintSummary {
            pages: total_pages,
            anchors: index.anchor_count(),
            links: index.link_count(),
            hyperlinks: index.hyperlink_count(),
        };
        info!(
            "Printed {} pages with {} anchors, {} links and {} hyperlinks",
            summary.pages, summary.anchors, summary.links, summary.hyperlinks
        );
        summary
    }
}
