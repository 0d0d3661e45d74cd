use folio_traits::{ElementId, ElementLocation, InMemoryFrame};
use folio_types::Rect;
use url::Url;

pub const DOC_URL: &str = "http://example.com/docs/report.html";

pub fn doc_url() -> Url {
    Url::parse(DOC_URL).expect("fixture url parses")
}

/// A location on `page` with a small box at `(x, y)`.
pub fn at(page: usize, x: f32, y: f32) -> ElementLocation {
    ElementLocation::new(page, Rect::new(x, y, 40.0, 12.0))
}

/// Elements of [`report_frame`] that tests refer to.
#[allow(dead_code)]
pub struct Report {
    pub frame: InMemoryFrame,
    pub toc_intro: ElementId,
    pub toc_results: ElementId,
    pub intro: ElementId,
    pub results: ElementId,
    pub external: ElementId,
}

/// A three page report: a table of contents on page 0 linking to headings
/// on pages 1 and 2, and an external reference on page 2.
pub fn report_frame() -> Report {
    let mut frame = InMemoryFrame::new(doc_url());
    frame.push("body", &[], at(0, 0.0, 0.0));
    let toc_intro = frame.push("a", &[("href", "#intro")], at(0, 10.0, 10.0));
    let toc_results = frame.push("a", &[("href", "#results")], at(0, 10.0, 30.0));
    let intro = frame.push("h1", &[("id", "intro")], at(1, 0.0, 0.0));
    let results = frame.push("a", &[("name", "results")], at(2, 0.0, 0.0));
    let external = frame.push(
        "a",
        &[("href", "https://www.rust-lang.org/learn")],
        at(2, 20.0, 100.0),
    );
    Report {
        frame,
        toc_intro,
        toc_results,
        intro,
        results,
        external,
    }
}
