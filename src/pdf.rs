//! Minimal document builder: an ordered list of text lines and gaps, laid
//! out top to bottom on A4 pages by `printpdf`. A new page is started
//! whenever the next line would cross the bottom margin.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::io::BufWriter;

use crate::error::{ClinicError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 20.0;

// fraction of the line height where the text baseline sits
const BASELINE_RATIO: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Line {
        text: String,
        size: f32,
        weight: Weight,
        height: f32,
    },
    Gap(f32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Document {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Appends a text line. `size` is in points, `height` in millimetres.
    pub fn line(&mut self, text: impl Into<String>, size: f32, weight: Weight, height: f32) {
        self.blocks.push(Block::Line {
            text: text.into(),
            size,
            weight,
            height,
        });
    }

    pub fn gap(&mut self, height: f32) {
        self.blocks.push(Block::Gap(height));
    }

    /// Visible text, in order.
    #[cfg(test)]
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Line { text, .. } => Some(text.as_str()),
                Block::Gap(_) => None,
            })
            .collect()
    }

    /// Lays the document out and returns the PDF bytes.
    pub fn render(&self) -> Result<Vec<u8>> {
        let (doc, page1, layer1) =
            PdfDocument::new(self.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ClinicError::Pdf(format!("font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ClinicError::Pdf(format!("font error: {e}")))?;

        let mut layer = doc.get_page(page1).get_layer(layer1);
        let mut cursor = PAGE_HEIGHT - MARGIN_TOP;

        for block in &self.blocks {
            match block {
                Block::Gap(height) => cursor -= height,
                Block::Line {
                    text,
                    size,
                    weight,
                    height,
                } => {
                    if cursor - height < MARGIN_BOTTOM {
                        let (page, layer_index) =
                            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                        layer = doc.get_page(page).get_layer(layer_index);
                        cursor = PAGE_HEIGHT - MARGIN_TOP;
                    }

                    let font = match weight {
                        Weight::Regular => &regular,
                        Weight::Bold => &bold,
                    };
                    let baseline = cursor - height * BASELINE_RATIO;
                    layer.use_text(text.as_str(), *size, Mm(MARGIN_LEFT), Mm(baseline), font);
                    cursor -= height;
                }
            }
        }

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| ClinicError::Pdf(format!("save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| ClinicError::Pdf(format!("buffer error: {e}")))
    }
}
