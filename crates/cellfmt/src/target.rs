#![forbid(unsafe_code)]

//! Render targets: where finished pages go.
//!
//! The [`Renderer`](crate::Renderer) hands each page to a [`RenderTarget`]
//! in order and calls [`RenderTarget::finish`] once the last page is
//! delivered. Two targets ship with the crate:
//!
//! - [`TextTarget`]: writes rows to any [`Write`], plain or with SGR colors.
//! - [`PageCollector`]: keeps the pages in memory.

use std::io::{self, Write};

use cellfmt_render::ansi;
use cellfmt_render::{Cell, Color, RenderBuffer};

/// Receives rendered pages.
pub trait RenderTarget {
    /// Consume one page.
    fn render(&mut self, page: &RenderBuffer) -> io::Result<()>;

    /// Called after the last page of a pass.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn render(&mut self, page: &RenderBuffer) -> io::Result<()> {
        (**self).render(page)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

// ---------------------------------------------------------------------------
// Text target
// ---------------------------------------------------------------------------

/// Writes each page row by row, one `\n` per row.
///
/// Continuation cells of wide glyphs are skipped. With ANSI enabled, color
/// changes are emitted as SGR sequences and every colored row ends with a
/// reset.
#[derive(Debug)]
pub struct TextTarget<W: Write> {
    writer: W,
    include_ansi: bool,
    trim_trailing: bool,
    pages: usize,
}

impl<W: Write> TextTarget<W> {
    /// Plain text, trailing blanks trimmed.
    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            include_ansi: false,
            trim_trailing: true,
            pages: 0,
        }
    }

    /// Text with SGR color sequences, trailing blanks trimmed.
    pub fn ansi(writer: W) -> Self {
        Self {
            writer,
            include_ansi: true,
            trim_trailing: true,
            pages: 0,
        }
    }

    /// Whether blank cells at the end of each row are dropped.
    #[must_use]
    pub fn trim_trailing(mut self, trim: bool) -> Self {
        self.trim_trailing = trim;
        self
    }

    /// Pages written so far.
    #[inline]
    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Cells of `row` that survive trimming.
    fn visible<'a>(&self, row: &'a [Cell]) -> &'a [Cell] {
        if !self.trim_trailing {
            return row;
        }
        let painted = |c: &Cell| self.include_ansi && c.bg.is_some();
        let keep = |c: &Cell| !c.is_continuation() && (!c.glyph.is_whitespace() || painted(c));
        let end = row.iter().rposition(keep).map_or(0, |i| i + 1);
        // A wide glyph's continuation belongs with it.
        let end = row[end..]
            .iter()
            .take_while(|c| c.is_continuation())
            .count()
            + end;
        &row[..end]
    }

    fn write_plain_row(&mut self, row: &[Cell]) -> io::Result<()> {
        let mut line = String::with_capacity(row.len());
        line.extend(row.iter().filter(|c| !c.is_continuation()).map(|c| c.glyph));
        self.writer.write_all(line.as_bytes())
    }

    fn write_ansi_row(&mut self, row: &[Cell]) -> io::Result<()> {
        let mut line: Vec<u8> = Vec::with_capacity(row.len() * 4);
        let mut current: Option<(Color, Option<Color>)> = None;
        let mut glyph = [0u8; 4];
        for cell in row.iter().filter(|c| !c.is_continuation()) {
            let style = (cell.fg, cell.bg);
            if current != Some(style) {
                if current.is_some_and(|(_, bg)| bg.is_some() && cell.bg.is_none()) {
                    ansi::sgr_bg_default(&mut line)?;
                }
                ansi::sgr_fg(&mut line, cell.fg)?;
                if cell.bg.is_some() {
                    ansi::sgr_bg(&mut line, cell.bg)?;
                }
                current = Some(style);
            }
            line.extend_from_slice(cell.glyph.encode_utf8(&mut glyph).as_bytes());
        }
        if current.is_some() {
            ansi::sgr_reset(&mut line)?;
        }
        self.writer.write_all(&line)
    }
}

impl<W: Write> RenderTarget for TextTarget<W> {
    fn render(&mut self, page: &RenderBuffer) -> io::Result<()> {
        for r in 0..page.height() {
            let Some(row) = page.row(r) else { break };
            let row = self.visible(row);
            if self.include_ansi {
                self.write_ansi_row(row)?;
            } else {
                self.write_plain_row(row)?;
            }
            self.writer.write_all(b"\n")?;
        }
        self.pages += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Page collector
// ---------------------------------------------------------------------------

/// Keeps every rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageCollector {
    pages: Vec<RenderBuffer>,
    finished: bool,
}

impl PageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pages(&self) -> &[RenderBuffer] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RenderBuffer> {
        self.pages
    }

    /// Whether `finish` ran since the last page arrived.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text of every page, rows concatenated in page order.
    pub fn lines(&self) -> Vec<String> {
        self.pages.iter().flat_map(RenderBuffer::to_lines).collect()
    }
}

impl RenderTarget for PageCollector {
    fn render(&mut self, page: &RenderBuffer) -> io::Result<()> {
        self.pages.push(page.clone());
        self.finished = false;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellfmt_core::geometry::Rect;
    use cellfmt_text::display_width;

    fn page(lines: &[&str]) -> RenderBuffer {
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let mut buffer = RenderBuffer::new(Rect::new(0, 0, width, lines.len() as u32));
        for (y, line) in lines.iter().enumerate() {
            buffer.draw_text(0, y as i32, line, Color::DEFAULT_FOREGROUND);
        }
        buffer
    }

    fn text(target: TextTarget<Vec<u8>>) -> String {
        String::from_utf8(target.into_inner()).unwrap()
    }

    #[test]
    fn plain_trims_trailing_blanks() {
        let mut target = TextTarget::plain(Vec::new());
        target.render(&page(&["ab  ", "    ", " c  "])).unwrap();
        assert_eq!(target.pages(), 1);
        assert_eq!(text(target), "ab\n\n c\n");
    }

    #[test]
    fn plain_keeps_blanks_when_asked() {
        let mut target = TextTarget::plain(Vec::new()).trim_trailing(false);
        target.render(&page(&["ab  "])).unwrap();
        assert_eq!(text(target), "ab  \n");
    }

    #[test]
    fn wide_glyphs_are_written_once() {
        let mut target = TextTarget::plain(Vec::new());
        target.render(&page(&["界x"])).unwrap();
        assert_eq!(text(target), "界x\n");
    }

    #[test]
    fn ansi_emits_color_runs_and_reset() {
        let mut buffer = RenderBuffer::new(Rect::new(0, 0, 3, 1));
        buffer.draw_text(0, 0, "ab", Color::Red);
        buffer.draw_text(2, 0, "c", Color::Rgb(1, 2, 3));
        let mut target = TextTarget::ansi(Vec::new());
        target.render(&buffer).unwrap();
        assert_eq!(text(target), "\x1b[91mab\x1b[38;2;1;2;3mc\x1b[0m\n");
    }

    #[test]
    fn ansi_keeps_trailing_background() {
        let mut buffer = RenderBuffer::new(Rect::new(0, 0, 3, 1));
        buffer.fill_background(Rect::new(1, 0, 1, 1), Color::DarkBlue);
        buffer.draw_text(0, 0, "a", Color::Gray);
        let mut target = TextTarget::ansi(Vec::new());
        target.render(&buffer).unwrap();
        assert_eq!(text(target), "\x1b[37ma\x1b[37m\x1b[44m \x1b[0m\n");
    }

    #[test]
    fn collector_keeps_pages_in_order() {
        let mut collector = PageCollector::new();
        collector.render(&page(&["1"])).unwrap();
        collector.render(&page(&["2"])).unwrap();
        assert!(!collector.is_finished());
        collector.finish().unwrap();
        assert!(collector.is_finished());
        assert_eq!(collector.lines(), vec!["1", "2"]);
    }
}
