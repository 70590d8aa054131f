//! PDF export: a title line followed by one text line per transaction.
//!
//! The document is written by hand as PDF 1.4 using the built-in Helvetica
//! font in WinAnsi encoding. Latin-1 text is written as octal escapes;
//! anything outside it becomes `?`. Lines that would run past
//! the bottom margin continue on a new page.

use std::io::Write;

use log::debug;

use super::transaction_line;
use crate::accounting::Transaction;
use crate::data::ExportError;

pub const PDF_TITLE: &str = "Personal Finance Tracker";

// A4, in points.
const PAGE_WIDTH: f64 = 595.28;
const PAGE_HEIGHT: f64 = 841.89;
const POINTS_PER_MM: f64 = 72.0 / 25.4;

const FONT_SIZE: u32 = 12;
const LEFT_MM: f64 = 10.0;
const TITLE_MM: f64 = 10.0;
const FIRST_LINE_MM: f64 = 20.0;
const LINE_SPACING_MM: f64 = 10.0;
const BOTTOM_MM: f64 = 287.0;

// Catalog, page tree and font come first; pages follow in pairs.
const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_ID: usize = 3;
const FIRST_PAGE_ID: usize = 4;

/// A line of text and its distance from the top of the page.
type PlacedLine = (f64, String);

pub fn export_pdf<W: Write>(transactions: &[Transaction], mut out: W) -> Result<(), ExportError> {
    let pages = layout(transactions);
    let document = render(&pages);
    out.write_all(&document)?;
    out.flush()?;

    debug!("pdf exported, transactions={}, pages={}", transactions.len(), pages.len());

    Ok(())
}

fn layout(transactions: &[Transaction]) -> Vec<Vec<PlacedLine>> {
    let mut pages = vec![vec![(TITLE_MM, PDF_TITLE.to_string())]];
    let mut y = FIRST_LINE_MM;

    for transaction in transactions {
        if y > BOTTOM_MM {
            pages.push(Vec::new());
            y = TITLE_MM;
        }

        if let Some(page) = pages.last_mut() {
            page.push((y, transaction_line(transaction)));
        }
        y += LINE_SPACING_MM;
    }

    pages
}

fn render(pages: &[Vec<PlacedLine>]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n");

    let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", page_id(i))).collect();
    push_object(&mut buf, &mut offsets, CATALOG_ID, &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID));
    push_object(
        &mut buf,
        &mut offsets,
        PAGES_ID,
        &format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
    );
    push_object(
        &mut buf,
        &mut offsets,
        FONT_ID,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    for (i, lines) in pages.iter().enumerate() {
        let content = page_content(lines);
        push_object(
            &mut buf,
            &mut offsets,
            page_id(i),
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                PAGES_ID,
                PAGE_WIDTH,
                PAGE_HEIGHT,
                FONT_ID,
                page_id(i) + 1
            ),
        );
        push_object(
            &mut buf,
            &mut offsets,
            page_id(i) + 1,
            &format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
        );
    }

    let xref_offset = buf.len();
    let mut trailer = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
    for offset in &offsets {
        trailer.push_str(&format!("{:010} 00000 n \n", offset));
    }
    trailer.push_str(&format!(
        "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        CATALOG_ID,
        xref_offset
    ));
    buf.extend_from_slice(trailer.as_bytes());

    buf
}

fn page_id(index: usize) -> usize {
    FIRST_PAGE_ID + index * 2
}

/// Objects must be pushed in id order for the xref table to line up.
fn push_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, id: usize, body: &str) {
    debug_assert_eq!(offsets.len() + 1, id);
    offsets.push(buf.len());
    buf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", id, body).as_bytes());
}

fn page_content(lines: &[PlacedLine]) -> String {
    lines
        .iter()
        .map(|(y_mm, text)| {
            format!(
                "BT /F1 {} Tf {:.2} {:.2} Td ({}) Tj ET",
                FONT_SIZE,
                LEFT_MM * POINTS_PER_MM,
                PAGE_HEIGHT - y_mm * POINTS_PER_MM,
                escape_text(text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(c);
            },
            ' '..='~' => escaped.push(c),
            '\u{a0}'..='\u{ff}' => escaped.push_str(&format!("\\{:03o}", c as u32)),
            '€' => escaped.push_str("\\200"),
            _ => escaped.push('?'),
        }
    }

    escaped
}
