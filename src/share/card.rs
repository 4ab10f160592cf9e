//! The 1080×1080 share card and its rasterization.
//!
//! The card is mounted as soon as a result arrives so a share never waits
//! on layout. Text is drawn with 8×8 bitmap glyphs scaled up per block.

use chrono::{DateTime, Local};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{ImageFormat, Rgba, RgbaImage};

use super::text::compose_share_text;
use crate::error::ShareError;
use crate::models::GenerationResult;

/// Edge length of the square card in pixels.
pub const CARD_SIZE: u32 = 1080;

/// Device pixel ratio; the card is rendered at exactly `CARD_SIZE`.
pub const PIXEL_RATIO: u32 = 1;

const PADDING: u32 = 80;
const FOOTER_BOTTOM: u32 = 40;
const GLYPH: u32 = 8;

const COLOR_BACKGROUND: Rgba<u8> = Rgba([0xF5, 0xF5, 0xDC, 0xFF]); // calm-beige
const COLOR_TEXT: Rgba<u8> = Rgba([0x00, 0x3C, 0x43, 0xFF]); // deep-teal
const COLOR_SECONDARY: Rgba<u8> = Rgba([0x13, 0x5D, 0x66, 0xFF]); // light-teal
const COLOR_DIVIDER: Rgba<u8> = Rgba([0xA8, 0xD8, 0xB9, 0xFF]); // soft-green

/// Text styling for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Pixels per glyph dot
    pub scale: u32,
    /// Extra pixels between characters
    pub letter_spacing: u32,
    pub color: Rgba<u8>,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    fn cell_width(&self) -> u32 {
        GLYPH * self.scale + self.letter_spacing
    }

    fn line_height(&self) -> u32 {
        GLYPH * self.scale * 13 / 10
    }

    /// How many characters fit in `width` pixels.
    fn chars_per_line(&self, width: u32) -> usize {
        (width / self.cell_width()).max(1) as usize
    }

    fn line_width(&self, chars: usize) -> u32 {
        (chars as u32 * self.cell_width()).saturating_sub(self.letter_spacing)
    }
}

/// A laid-out, horizontally centered line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub style: TextStyle,
}

/// A horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRule {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub thickness: u32,
}

/// Everything to draw, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub lines: Vec<PlacedLine>,
    pub rule: PlacedRule,
    /// Bottom edge of the main stack (excluding the footer)
    pub content_bottom: u32,
}

/// Glyph scales tried from largest to smallest until the text fits.
const SCALE_STEPS: [(u32, u32, u32); 4] = [
    // (prompt, encouragement, affirmation)
    (6, 4, 5),
    (5, 3, 4),
    (4, 3, 3),
    (3, 2, 2),
];

/// The hidden visual representation of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    result: GenerationResult,
    created_at: DateTime<Local>,
}

impl ShareCard {
    pub fn new(result: GenerationResult) -> Self {
        Self::with_timestamp(result, Local::now())
    }

    pub fn with_timestamp(result: GenerationResult, created_at: DateTime<Local>) -> Self {
        Self { result, created_at }
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn width(&self) -> u32 {
        CARD_SIZE * PIXEL_RATIO
    }

    pub fn height(&self) -> u32 {
        CARD_SIZE * PIXEL_RATIO
    }

    pub fn share_text(&self) -> String {
        compose_share_text(&self.result)
    }

    /// e.g. `mindspoke-20261016-073000.png`
    pub fn file_name(&self) -> String {
        format!("mindspoke-{}.png", self.created_at.format("%Y%m%d-%H%M%S"))
    }

    /// Lay out the card, shrinking text until it fits above the footer.
    pub fn layout(&self) -> CardLayout {
        let footer_top = self.height() - FOOTER_BOTTOM - GLYPH * 4;
        let available = footer_top - PADDING;

        let mut layout = None;
        for (prompt, encouragement, affirmation) in SCALE_STEPS {
            let candidate = self.layout_with(prompt, encouragement, affirmation, available);
            let fits = candidate.content_bottom <= footer_top;
            layout = Some(candidate);
            if fits {
                break;
            }
        }
        // SCALE_STEPS is non-empty, so a layout always exists.
        layout.unwrap_or_else(|| self.layout_with(2, 2, 2, available))
    }

    fn layout_with(
        &self,
        prompt_scale: u32,
        encouragement_scale: u32,
        affirmation_scale: u32,
        available: u32,
    ) -> CardLayout {
        let inner_width = self.width() - 2 * PADDING;
        let rule_width = self.width() * 8 / 10;

        let prompt_style = TextStyle {
            scale: prompt_scale,
            letter_spacing: 0,
            color: COLOR_TEXT,
            bold: true,
            italic: false,
        };
        let encouragement_style = TextStyle {
            scale: encouragement_scale,
            letter_spacing: 0,
            color: COLOR_SECONDARY,
            bold: false,
            italic: true,
        };
        let heading_style = TextStyle {
            scale: 3,
            letter_spacing: 3,
            color: COLOR_SECONDARY,
            bold: true,
            italic: false,
        };
        let affirmation_style = TextStyle {
            scale: affirmation_scale,
            letter_spacing: 0,
            color: COLOR_TEXT,
            bold: false,
            italic: false,
        };

        let quoted_prompt = format!("\"{}\"", normalize_text(&self.result.prompt));
        let blocks: [(Vec<String>, TextStyle, u32); 4] = [
            (
                wrap_text(&quoted_prompt, prompt_style.chars_per_line(inner_width)),
                prompt_style,
                32,
            ),
            (
                wrap_text(
                    &normalize_text(&self.result.encouragement),
                    encouragement_style.chars_per_line(inner_width),
                ),
                encouragement_style,
                60,
            ),
            (
                vec!["TODAY'S AFFIRMATION".to_string()],
                heading_style,
                16,
            ),
            (
                wrap_text(
                    &normalize_text(&self.result.affirmation),
                    affirmation_style.chars_per_line(rule_width),
                ),
                affirmation_style,
                0,
            ),
        ];

        // The rule sits between encouragement and heading with 40px below it.
        const RULE_THICKNESS: u32 = 2;
        const RULE_GAP_BELOW: u32 = 40;

        let total: u32 = blocks
            .iter()
            .map(|(lines, style, gap)| lines.len() as u32 * style.line_height() + gap)
            .sum::<u32>()
            + RULE_THICKNESS
            + RULE_GAP_BELOW;

        let mut y = PADDING + available.saturating_sub(total) / 2;
        let mut lines = Vec::new();
        let mut rule = PlacedRule {
            x: (self.width() - rule_width) / 2,
            y: 0,
            width: rule_width,
            thickness: RULE_THICKNESS,
        };

        for (idx, (block_lines, style, gap_after)) in blocks.into_iter().enumerate() {
            for text in block_lines {
                let width = style.line_width(text.chars().count());
                lines.push(PlacedLine {
                    x: self.width().saturating_sub(width) / 2,
                    y,
                    text,
                    style,
                });
                y += style.line_height();
            }
            y += gap_after;
            if idx == 1 {
                rule.y = y;
                y += RULE_THICKNESS + RULE_GAP_BELOW;
            }
        }
        let content_bottom = y;

        let footer_style = TextStyle {
            scale: 4,
            letter_spacing: 0,
            color: COLOR_SECONDARY,
            bold: true,
            italic: false,
        };
        let footer = "MindSpoke";
        lines.push(PlacedLine {
            text: footer.to_string(),
            x: (self.width() - footer_style.line_width(footer.len())) / 2,
            y: self.height() - FOOTER_BOTTOM - GLYPH * footer_style.scale,
            style: footer_style,
        });

        CardLayout {
            lines,
            rule,
            content_bottom,
        }
    }

    /// Draw the card into an RGBA buffer.
    pub fn render(&self) -> RgbaImage {
        let layout = self.layout();
        let mut img = RgbaImage::from_pixel(self.width(), self.height(), COLOR_BACKGROUND);

        fill_rect(
            &mut img,
            layout.rule.x,
            layout.rule.y,
            layout.rule.width,
            layout.rule.thickness,
            COLOR_DIVIDER,
        );
        for line in &layout.lines {
            draw_line(&mut img, line);
        }
        img
    }

    /// Render and encode as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, ShareError> {
        let img = self.render();
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| ShareError::Rasterize(e.to_string()))?;
        Ok(buf)
    }
}

/// Replace typographic punctuation the bitmap font lacks.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            c if c.is_whitespace() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Greedy word wrap to `max_chars` per line; overlong words are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn glyph_for(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y.min(y_end)..y_end {
        for px in x.min(x_end)..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn draw_line(img: &mut RgbaImage, line: &PlacedLine) {
    let style = line.style;
    let mut x = line.x;
    for c in line.text.chars() {
        let glyph = glyph_for(c);
        for (row, bits) in glyph.iter().enumerate() {
            let row = row as u32;
            // Shear rows to the right towards the top for italics.
            let slant = if style.italic { (GLYPH - 1 - row) * style.scale / 3 } else { 0 };
            for col in 0..GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = x + slant + col * style.scale;
                let py = line.y + row * style.scale;
                let width = if style.bold { style.scale + style.scale / 2 } else { style.scale };
                fill_rect(img, px, py, width, style.scale, style.color);
            }
        }
        x += style.cell_width();
    }
}
