use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Information about a link annotation
#[derive(Debug)]
pub struct LinkAnnotation {
    /// 1-based page number
    pub page: u32,
    pub rect: [f32; 4],
    /// Named destination for internal links, URI for hyperlinks
    pub destination: String,
    pub is_internal: bool,
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => obj.as_dict().ok(),
    }
}

fn rect_of(dict: &Dictionary) -> [f32; 4] {
    let mut rect = [0.0; 4];
    if let Ok(arr) = dict.get(b"Rect").and_then(Object::as_array) {
        for (slot, value) in rect.iter_mut().zip(arr) {
            *slot = value.as_float().unwrap_or(0.0);
        }
    }
    rect
}

/// Extract link annotations from PDF pages, in page order
pub fn extract_link_annotations(doc: &LopdfDocument) -> Vec<LinkAnnotation> {
    let mut annotations = Vec::new();

    for (page_num, page_id) in doc.get_pages() {
        let Ok(page) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot in annots {
            let Some(annot) = resolve_dict(doc, annot) else {
                continue;
            };
            if annot.get(b"Subtype").and_then(Object::as_name).ok() != Some(b"Link".as_slice()) {
                continue;
            }

            let (destination, is_internal) = if let Ok(dest) = annot.get(b"Dest") {
                let name = dest.as_name().map(|n| String::from_utf8_lossy(n).to_string());
                (name.unwrap_or_default(), true)
            } else if let Some(action) = annot.get(b"A").ok().and_then(|a| resolve_dict(doc, a)) {
                let uri = action
                    .get(b"URI")
                    .and_then(Object::as_str)
                    .map(|s| String::from_utf8_lossy(s).to_string());
                (uri.unwrap_or_default(), false)
            } else {
                continue;
            };

            annotations.push(LinkAnnotation {
                page: page_num,
                rect: rect_of(annot),
                destination,
                is_internal,
            });
        }
    }

    annotations
}

/// Names in the catalog's `/Dests` dictionary
pub fn named_destinations(doc: &LopdfDocument) -> Vec<String> {
    let Some(catalog) = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| resolve_dict(doc, root))
    else {
        return Vec::new();
    };
    let Some(dests) = catalog.get(b"Dests").ok().and_then(|d| resolve_dict(doc, d)) else {
        return Vec::new();
    };
    dests
        .iter()
        .map(|(name, _)| String::from_utf8_lossy(name).to_string())
        .collect()
}

/// Strings shown with `Tj` on a 1-based page
pub fn page_texts(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page_num).copied() else {
        return Vec::new();
    };
    let Ok(content) = doc
        .get_page_content(page_id)
        .and_then(|bytes| Content::decode(&bytes))
    else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|o| o.as_str().ok())
        .map(|s| String::from_utf8_lossy(s).to_string())
        .collect()
}

/// Count internal links in the PDF
pub fn count_internal_links(doc: &LopdfDocument) -> usize {
    extract_link_annotations(doc)
        .iter()
        .filter(|a| a.is_internal)
        .count()
}

/// Count external links in the PDF
pub fn count_external_links(doc: &LopdfDocument) -> usize {
    extract_link_annotations(doc)
        .iter()
        .filter(|a| !a.is_internal)
        .count()
}

/// Assert that a page shows a specific string
#[macro_export]
macro_rules! assert_page_contains_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let texts = $crate::common::pdf_assertions::page_texts(&$pdf.doc, $page);
        assert!(
            texts.iter().any(|t| t.contains($text)),
            "Page {} should contain '{}', but its text was: {:?}",
            $page,
            $text,
            texts
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
