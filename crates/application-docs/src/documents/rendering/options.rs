/// Letterhead stamped at the top of generated documents.
pub const DOCUMENT_HEADER_HTML: &str =
    "<header><h1>Client Application Statement</h1><p>Private and confidential</p></header>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumbers {
    None,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRepeat {
    FirstPageOnly,
    AllPages,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub repeat: HeaderRepeat,
    pub html: String,
}

/// Pagination and header policy passed to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub page_numbers: PageNumbers,
    pub header: HeaderOptions,
}

impl RenderOptions {
    /// Numeric page numbers with the letterhead on the first page only.
    pub fn standard() -> Self {
        Self {
            page_numbers: PageNumbers::Numeric,
            header: HeaderOptions {
                repeat: HeaderRepeat::FirstPageOnly,
                html: DOCUMENT_HEADER_HTML.to_string(),
            },
        }
    }

    pub fn header_on_page(&self, page_index: usize) -> bool {
        match self.header.repeat {
            HeaderRepeat::FirstPageOnly => page_index == 0,
            HeaderRepeat::AllPages => true,
        }
    }
}
