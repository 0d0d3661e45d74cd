/// Supplies header/footer content while a document is printed.
///
/// Heights are in points. Content is HTML for the secondary document; an
/// empty string means "nothing on this page".
pub trait PrintCallback {
    fn header_height(&self) -> f64;

    fn footer_height(&self) -> f64;

    fn header(&self, page: usize, total_pages: usize) -> String;

    fn footer(&self, page: usize, total_pages: usize) -> String;
}

impl<C: PrintCallback + ?Sized> PrintCallback for Box<C> {
    fn header_height(&self) -> f64 {
        (**self).header_height()
    }

    fn footer_height(&self) -> f64 {
        (**self).footer_height()
    }

    fn header(&self, page: usize, total_pages: usize) -> String {
        (**self).header(page, total_pages)
    }

    fn footer(&self, page: usize, total_pages: usize) -> String {
        (**self).footer(page, total_pages)
    }
}
