//! # Test Utilities
//!
//! Fixtures shared by the loader and server test suites.

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::{bail, Result};
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates a PDF with one A4 page per entry in `pages`, compatible with printpdf v0.8.2.
    ///
    /// The text is written with an embedded Helvetica subset, so the content
    /// streams hold glyph ids and only a font-aware extractor can read it back.
    pub fn generate_test_pdf(pages: &[&str]) -> Result<Vec<u8>> {
        if pages.is_empty() {
            bail!("A PDF needs at least one page");
        }

        let mut doc = PdfDocument::new("docqa test document");

        // Get the font bytes for a built-in font and parse it.
        let font_bytes = BuiltinFont::Helvetica.get_subset_font().bytes;
        let font = ParsedFont::from_bytes(&font_bytes, 0, &mut Vec::new())
            .ok_or_else(|| anyhow::anyhow!("Failed to parse built-in font"))?;
        let font_id = doc.add_font(&font);

        for (index, text) in pages.iter().enumerate() {
            let layer_id = doc.add_layer(&Layer::new(&format!("Page {}", index + 1)));
            let ops = vec![
                Op::BeginLayer {
                    layer_id: layer_id.clone(),
                },
                Op::SetFontSize {
                    size: Pt(12.0),
                    font: font_id.clone(),
                },
                Op::StartTextSection,
                Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Mm(10.0).into(), Mm(280.0).into()),
                },
                Op::SetTextRenderingMode {
                    mode: TextRenderingMode::Fill,
                },
                Op::WriteText {
                    items: vec![TextItem::Text(text.to_string())],
                    font: font_id.clone(),
                },
                Op::EndTextSection,
                Op::EndLayer { layer_id },
            ];
            doc.pages.push(PdfPage::new(Mm(210.0), Mm(297.0), ops));
        }

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }

        Ok(bytes)
    }

    /// Keeps only letters and digits, so assertions don't depend on how an
    /// extractor spaces or breaks the text it recovers.
    pub fn squash(text: &str) -> String {
        text.chars().filter(|c| c.is_alphanumeric()).collect()
    }
}
