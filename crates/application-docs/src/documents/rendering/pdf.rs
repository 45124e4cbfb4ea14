use encoding_rs::WINDOWS_1252;
use html2text::render::text_renderer::TrivialDecorator;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::{ConversionError, DocumentConverter, PageNumbers, RenderOptions, RenderedDocument};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 14;
const WRAP_COLUMNS: usize = 92;

/// HTML to PDF converter producing text-only A4 pages.
///
/// Markup is laid out as plain text by `html2text` and written in Helvetica
/// with `lopdf`. Text is encoded as WinAnsi, so Latin-1 names survive and
/// anything outside that code page prints as `?`.
#[derive(Debug, Clone)]
pub struct PlainTextPdfConverter {
    lines_per_page: usize,
}

impl PlainTextPdfConverter {
    pub fn new() -> Self {
        let usable = PAGE_HEIGHT - 2 * MARGIN - 2 * LEADING;
        Self {
            lines_per_page: (usable / LEADING) as usize,
        }
    }

    pub fn with_lines_per_page(lines_per_page: usize) -> Self {
        Self {
            lines_per_page: lines_per_page.max(1),
        }
    }

    fn paginate(
        &self,
        body: Vec<String>,
        header: &[String],
        options: &RenderOptions,
    ) -> Vec<Vec<String>> {
        let mut pages = Vec::new();
        let mut remaining = body.into_iter().peekable();

        loop {
            let mut page = Vec::new();
            if options.header_on_page(pages.len()) && !header.is_empty() {
                page.extend(header.iter().cloned());
                page.push(String::new());
            }
            let capacity = self.lines_per_page.saturating_sub(page.len()).max(1);
            page.extend(remaining.by_ref().take(capacity));
            pages.push(page);

            if remaining.peek().is_none() {
                break;
            }
        }

        pages
    }
}

impl Default for PlainTextPdfConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConverter for PlainTextPdfConverter {
    fn convert(
        &self,
        markup: &str,
        options: &RenderOptions,
    ) -> Result<RenderedDocument, ConversionError> {
        let body = markup_to_lines(markup)?;
        if body.is_empty() {
            return Err(ConversionError::Engine("markup contains no text".to_string()));
        }
        let header = markup_to_lines(&options.header.html)?;
        let pages = self.paginate(body, &header, options);
        let page_count = pages.len();

        let bytes = write_pdf(&pages, options.page_numbers)?;
        Ok(RenderedDocument::new(bytes, page_count))
    }
}

/// Lays markup out as wrapped text lines, collapsing runs of blank lines.
pub(crate) fn markup_to_lines(markup: &str) -> Result<Vec<String>, ConversionError> {
    let text = html2text::config::with_decorator(TrivialDecorator::new())
        .string_from_read(markup.as_bytes(), WRAP_COLUMNS)
        .map_err(|err| ConversionError::Engine(format!("markup could not be laid out: {err}")))?;

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        } else if lines.last().is_some_and(|previous| !previous.is_empty()) {
            lines.push(String::new());
        }
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Ok(lines)
}

fn write_pdf(pages: &[Vec<String>], numbering: PageNumbers) -> Result<Vec<u8>, ConversionError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for (index, lines) in pages.iter().enumerate() {
        let content = page_content(lines, index + 1, numbering)
            .encode()
            .map_err(engine_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(engine_error)?;
    Ok(bytes)
}

fn page_content(lines: &[String], page_number: usize, numbering: PageNumbers) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![win_ansi_text(line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    if numbering == PageNumbers::Numeric {
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![(PAGE_WIDTH / 2).into(), (MARGIN / 2).into()]),
            Operation::new("Tj", vec![win_ansi_text(&page_number.to_string())]),
            Operation::new("ET", vec![]),
        ]);
    }

    Content { operations }
}

/// Encodes a line for the WinAnsi-encoded standard font.
fn win_ansi_text(line: &str) -> Object {
    let mut bytes = Vec::with_capacity(line.len());
    let mut buffer = [0u8; 4];
    for ch in line.chars() {
        let (encoded, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buffer));
        match encoded.as_ref() {
            [byte] if !unmappable => bytes.push(*byte),
            _ => bytes.push(b'?'),
        }
    }
    Object::string_literal(bytes)
}

fn engine_error(err: impl std::fmt::Display) -> ConversionError {
    ConversionError::Engine(err.to_string())
}
