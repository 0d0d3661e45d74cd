use crate::error::RenderError;
use crate::helpers::{flip_y, pdf_rect, to_win_ansi};
use folio_traits::DrawingSurface;
use folio_types::{POINTS_PER_INCH, Point, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::Write;
use url::Url;

const FONT_RESOURCE: &str = "F1";
const FONT_SIZE: f32 = 9.0;

struct PageState {
    /// Page size in points.
    size: Size,
    content: Content,
    annotations: Vec<Dictionary>,
}

struct Destination {
    page: usize,
    left: f32,
    top: f32,
}

/// A [`DrawingSurface`] that collects pages, text runs and link annotations
/// into a `lopdf` document.
///
/// Input is in device pixels with a top-left origin; output is in points
/// with PDF's bottom-left origin. Anchors become named destinations in the
/// catalog's `/Dests`, internal links point at those names, and hyperlinks
/// carry a `URI` action.
pub struct AnnotationSurface {
    scale: f32,
    origin: Point,
    pages: Vec<PageState>,
    destinations: BTreeMap<String, Destination>,
}

impl AnnotationSurface {
    /// A surface for a device of `dpi` pixels per inch.
    pub fn new(dpi: f64) -> Self {
        Self {
            scale: (POINTS_PER_INCH / dpi) as f32,
            origin: Point::default(),
            pages: Vec::new(),
            destinations: BTreeMap::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&mut self, what: &str) -> Option<&mut PageState> {
        let page = self.pages.last_mut();
        if page.is_none() {
            log::warn!("AnnotationSurface: {} before the first page, dropped", what);
        }
        page
    }

    fn link_annotation(rect: Rect, scale: f32, page_height: f32) -> Dictionary {
        dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => pdf_rect(rect, scale, page_height),
            "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        }
    }

    /// Writes out every page and returns the finished document.
    pub fn finish(self) -> Result<Document, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { FONT_RESOURCE => font_id },
        });

        let page_ids: Vec<ObjectId> = self.pages.iter().map(|_| doc.new_object_id()).collect();
        for (page, page_id) in self.pages.into_iter().zip(&page_ids) {
            let content_id = doc.add_object(Stream::new(Dictionary::new(), page.content.encode()?));
            let annotations: Vec<Object> = page
                .annotations
                .into_iter()
                .map(|annot| Object::Reference(doc.add_object(annot)))
                .collect();

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    page.size.width.into(),
                    page.size.height.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            if !annotations.is_empty() {
                page_dict.set("Annots", annotations);
            }
            doc.objects.insert(*page_id, Object::Dictionary(page_dict));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
                "Count" => page_ids.len() as i64,
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if !self.destinations.is_empty() {
            let mut dests = Dictionary::new();
            for (name, dest) in self.destinations {
                let Some(page_id) = page_ids.get(dest.page) else {
                    continue;
                };
                dests.set(
                    name.into_bytes(),
                    vec![
                        Object::Reference(*page_id),
                        "XYZ".into(),
                        dest.left.into(),
                        dest.top.into(),
                        Object::Null,
                    ],
                );
            }
            let dests_id = doc.add_object(dests);
            catalog.set("Dests", dests_id);
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }

    /// Finishes the document and writes it to `writer`.
    pub fn save_to<W: Write>(self, writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.finish()?;
        doc.save_to(writer)?;
        Ok(())
    }
}

impl DrawingSurface for AnnotationSurface {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin.offset(dx, dy);
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn begin_page(&mut self, index: usize, size: Size) {
        log::debug!("AnnotationSurface: page {} ({}x{} px)", index, size.width, size.height);
        self.pages.push(PageState {
            size: Size::new(size.width * self.scale, size.height * self.scale),
            content: Content { operations: vec![] },
            annotations: Vec::new(),
        });
    }

    fn draw_text(&mut self, rect: Rect, text: &str) {
        let (scale, font_size) = (self.scale, FONT_SIZE);
        let rect = rect.translated(self.origin);
        let Some(page) = self.current_page("text") else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        // Vertically centred single line.
        let baseline = rect.y * scale + (rect.height * scale + font_size * 0.7) / 2.0;
        let ops = &mut page.content.operations;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), font_size.into()],
        ));
        ops.push(Operation::new(
            "Td",
            vec![(rect.x * scale).into(), flip_y(baseline, page.size.height).into()],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    fn add_anchor(&mut self, rect: Rect, name: &str) {
        let rect = rect.translated(self.origin);
        let scale = self.scale;
        let page_index = self.pages.len().saturating_sub(1);
        let Some(page) = self.current_page("anchor") else {
            return;
        };
        let dest = Destination {
            page: page_index,
            left: rect.x * scale,
            top: flip_y(rect.y * scale, page.size.height),
        };
        self.destinations.insert(name.to_string(), dest);
    }

    fn add_link(&mut self, rect: Rect, target: &str) {
        let rect = rect.translated(self.origin);
        let scale = self.scale;
        let Some(page) = self.current_page("link") else {
            return;
        };
        let mut annot = Self::link_annotation(rect, scale, page.size.height);
        annot.set("Dest", Object::Name(target.as_bytes().to_vec()));
        page.annotations.push(annot);
    }

    fn add_hyperlink(&mut self, rect: Rect, url: &Url) {
        let rect = rect.translated(self.origin);
        let scale = self.scale;
        let Some(page) = self.current_page("hyperlink") else {
            return;
        };
        let mut annot = Self::link_annotation(rect, scale, page.size.height);
        annot.set(
            "A",
            dictionary! {
                "S" => "URI",
                "URI" => Object::String(url.as_str().as_bytes().to_vec(), StringFormat::Literal),
            },
        );
        page.annotations.push(annot);
    }
}
