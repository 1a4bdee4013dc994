//! Writing notes out as PDF documents.
//!
//! [`TextPdfExporter`] produces a small, self-contained PDF 1.4 file: text set
//! in the standard Helvetica font (no embedding), wrapped by character count
//! and paginated on A4. Character formatting is not carried over.

use std::io::Write;
use std::path::Path;

use torquatus_core::logging::targets;
use torquatus_core::PerfSpan;

use crate::error::{PdfError, PdfResult};

/// A4 width in points.
pub const A4_WIDTH: u32 = 595;
/// A4 height in points.
pub const A4_HEIGHT: u32 = 842;

/// Turns text into a PDF document.
pub trait PdfExporter {
    /// Produce the bytes of a PDF file containing `text`.
    fn render(&self, text: &str) -> PdfResult<Vec<u8>>;

    /// Write `text` as a PDF file at `path`, replacing any existing file.
    fn export(&self, text: &str, path: &Path) -> PdfResult<()> {
        let bytes = self.render(text)?;
        std::fs::write(path, bytes)?;
        tracing::info!(target: targets::PDF_EXPORT, path = %path.display(), chars = text.chars().count(), "exported PDF");
        Ok(())
    }
}

/// Plain text PDF writer.
///
/// ```
/// use torquatus_pdf::{PdfExporter, TextPdfExporter};
///
/// let bytes = TextPdfExporter::new().render("Hello World").unwrap();
/// assert!(bytes.starts_with(b"%PDF-1.4"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextPdfExporter {
    page_width: u32,
    page_height: u32,
    margin: u32,
    font_size: u32,
    leading: u32,
    wrap_columns: usize,
}

impl Default for TextPdfExporter {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH,
            page_height: A4_HEIGHT,
            margin: 50,
            font_size: 12,
            leading: 14,
            wrap_columns: 80,
        }
    }
}

impl TextPdfExporter {
    /// Create an exporter with the default A4 layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the page size in points.
    pub fn with_page_size(mut self, width: u32, height: u32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Builder method to set the margin on all sides, in points.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Builder method to set the font size and line spacing, in points.
    pub fn with_font_size(mut self, font_size: u32, leading: u32) -> Self {
        self.font_size = font_size;
        self.leading = leading;
        self
    }

    /// Builder method to set the maximum characters per line.
    pub fn with_wrap_columns(mut self, columns: usize) -> Self {
        self.wrap_columns = columns;
        self
    }

    /// Number of lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height.saturating_sub(2 * self.margin);
        (usable / self.leading.max(1)).max(1) as usize
    }

    /// Split text into output lines, wrapping long lines.
    fn layout(&self, text: &str) -> Vec<String> {
        let columns = self.wrap_columns.max(1);
        let mut lines = Vec::new();
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                lines.push(String::new());
                continue;
            }
            lines.extend(chars.chunks(columns).map(|chunk| chunk.iter().collect()));
        }
        lines
    }

    fn content_stream(&self, lines: &[String]) -> Vec<u8> {
        let top = self.page_height.saturating_sub(self.margin + self.font_size);
        let mut out = Vec::new();
        out.extend_from_slice(b"BT\n");
        out.extend_from_slice(format!("/F1 {} Tf\n{} TL\n{} {} Td\n", self.font_size, self.leading, self.margin, top).as_bytes());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(b"T*\n");
            }
            out.push(b'(');
            out.extend_from_slice(&encode_literal(line));
            out.extend_from_slice(b") Tj\n");
        }
        out.extend_from_slice(b"ET\n");
        out
    }
}

impl PdfExporter for TextPdfExporter {
    fn render(&self, text: &str) -> PdfResult<Vec<u8>> {
        let _perf = PerfSpan::new("export_pdf");

        if self.leading == 0 || self.font_size == 0 {
            return Err(PdfError::Export("font size and leading must be positive".into()));
        }

        let lines = self.layout(text);
        let pages: Vec<&[String]> = lines.chunks(self.lines_per_page()).collect();

        // Objects: 1 catalog, 2 page tree, 3 font, then a page and its
        // content stream for every page.
        let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
        let mut writer = ObjectWriter::new();

        writer.object(1, b"<< /Type /Catalog /Pages 2 0 R >>")?;

        let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
        writer.object(
            2,
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()).as_bytes(),
        )?;

        writer.object(
            3,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        )?;

        for (page, id) in pages.iter().zip(&page_ids) {
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                self.page_width,
                self.page_height,
                id + 1
            );
            writer.object(*id, page_dict.as_bytes())?;
            writer.stream(id + 1, &self.content_stream(page))?;
        }

        let bytes = writer.finish(1)?;
        tracing::debug!(
            target: targets::PDF_EXPORT,
            lines = lines.len(),
            pages = pages.len(),
            bytes = bytes.len(),
            "rendered PDF"
        );
        Ok(bytes)
    }
}

/// Sequential object writer that records offsets for the xref table.
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn begin(&mut self, id: usize) -> PdfResult<()> {
        if id != self.offsets.len() + 1 {
            return Err(PdfError::Export(format!("object {id} written out of order")));
        }
        self.offsets.push(self.buf.len());
        writeln!(self.buf, "{id} 0 obj")?;
        Ok(())
    }

    fn object(&mut self, id: usize, body: &[u8]) -> PdfResult<()> {
        self.begin(id)?;
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
        Ok(())
    }

    fn stream(&mut self, id: usize, data: &[u8]) -> PdfResult<()> {
        self.begin(id)?;
        write!(self.buf, "<< /Length {} >>\nstream\n", data.len())?;
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
        Ok(())
    }

    fn finish(mut self, root: usize) -> PdfResult<Vec<u8>> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;
        writeln!(self.buf, "xref\n0 {size}\n0000000000 65535 f ")?;
        for offset in &self.offsets {
            writeln!(self.buf, "{offset:010} 00000 n ")?;
        }
        writeln!(
            self.buf,
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF"
        )?;
        Ok(self.buf)
    }
}

/// Encode a line as the body of a PDF literal string in WinAnsiEncoding.
///
/// Characters the encoding lacks become `?`; bytes outside printable ASCII
/// are written as octal escapes.
fn encode_literal(line: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    for ch in line.chars() {
        match win_ansi_byte(ch) {
            byte @ (b'(' | b')' | b'\\') => {
                out.push(b'\\');
                out.push(byte);
            }
            byte @ 0x20..=0x7E => out.push(byte),
            byte => out.extend_from_slice(format!("\\{byte:03o}").as_bytes()),
        }
    }
    out
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        '\t' => b' ',
        ' '..='~' => ch as u8,
        '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}
