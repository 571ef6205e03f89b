use super::render::Surface;
use crate::consts;
use ratatui::{
    buffer::{self, Buffer},
    layout::Rect,
    style::{Color, Style},
};
use std::num::NonZeroU32;
use std::ops::Range;

/// A [`Surface`] that draws into a region of a terminal buffer.
///
/// Pixels are mapped onto terminal cells so that one grid cell of
/// `cell_size` pixels covers [`COLUMNS_PER_CELL`][consts::COLUMNS_PER_CELL]
/// columns and one row.  A terminal cell is painted if any part of a
/// rectangle touches it.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    width: u32,
    height: u32,
    cell_size: NonZeroU32,
    fill: Color,
}

impl<'a> Canvas<'a> {
    /// Create a canvas of `width` × `height` pixels drawn in `area` of `buf`
    pub(super) fn new(
        area: Rect,
        buf: &'a mut Buffer,
        width: u32,
        height: u32,
        cell_size: NonZeroU32,
    ) -> Canvas<'a> {
        Canvas {
            area,
            buf,
            width,
            height,
            cell_size,
            fill: Color::Reset,
        }
    }

    /// Return the terminal columns covered by the pixel span `[x, x + width)`
    fn columns(&self, x: u32, width: u32) -> Range<u64> {
        let scale = u64::from(consts::COLUMNS_PER_CELL);
        let size = u64::from(self.cell_size.get());
        let start = u64::from(x) * scale / size;
        let end = (u64::from(x) + u64::from(width)) * scale;
        start..end.div_ceil(size)
    }

    /// Return the terminal rows covered by the pixel span `[y, y + height)`
    fn rows(&self, y: u32, height: u32) -> Range<u64> {
        let size = u64::from(self.cell_size.get());
        let start = u64::from(y) / size;
        let end = u64::from(y) + u64::from(height);
        start..end.div_ceil(size)
    }

    fn for_each_cell<F>(&mut self, x: u32, y: u32, width: u32, height: u32, mut f: F)
    where
        F: FnMut(&mut buffer::Cell),
    {
        if width == 0 || height == 0 {
            return;
        }
        let columns = self.columns(x, width);
        let rows = self.rows(y, height);
        let max_col = u64::from(self.area.width);
        let max_row = u64::from(self.area.height);
        for row in rows.start..rows.end.min(max_row) {
            for col in columns.start..columns.end.min(max_col) {
                let (Ok(dx), Ok(dy)) = (u16::try_from(col), u16::try_from(row)) else {
                    continue;
                };
                let pos = (
                    self.area.x.saturating_add(dx),
                    self.area.y.saturating_add(dy),
                );
                if let Some(cell) = self.buf.cell_mut(pos) {
                    f(cell);
                }
            }
        }
    }
}

impl Surface for Canvas<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.for_each_cell(x, y, width, height, |cell| {
            cell.reset();
        });
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let style = Style::reset().bg(self.fill);
        self.for_each_cell(x, y, width, height, |cell| {
            cell.set_char(' ');
            cell.set_style(style);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell_size() -> NonZeroU32 {
        NonZeroU32::new(20).expect("20 should be nonzero")
    }

    #[test]
    fn fill_one_grid_cell() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas::new(Rect::new(1, 1, 10, 3), &mut buffer, 100, 60, cell_size());
        canvas.set_fill(Color::Red);
        canvas.fill_rect(40, 20, 19, 19);
        let mut expected = Buffer::empty(area);
        expected.set_style(Rect::new(5, 2, 2, 1), Style::reset().bg(Color::Red));
        assert_eq!(buffer, expected);
    }

    #[test]
    fn clip_to_area() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas::new(Rect::new(0, 0, 4, 2), &mut buffer, 40, 40, cell_size());
        canvas.set_fill(Color::Blue);
        canvas.fill_rect(20, 20, 1000, 1000);
        let mut expected = Buffer::empty(area);
        expected.set_style(Rect::new(2, 1, 2, 1), Style::reset().bg(Color::Blue));
        assert_eq!(buffer, expected);
    }

    #[test]
    fn clear_resets_cells() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::with_lines(["abcd", "efgh"]);
        let mut canvas = Canvas::new(area, &mut buffer, 40, 40, cell_size());
        canvas.clear(0, 0, 40, 40);
        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas::new(area, &mut buffer, 40, 40, cell_size());
        canvas.set_fill(Color::Green);
        canvas.fill_rect(0, 0, 0, 19);
        canvas.fill_rect(0, 0, 19, 0);
        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn size_is_in_pixels() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 2));
        let canvas = Canvas::new(Rect::new(0, 0, 4, 2), &mut buffer, 40, 20, cell_size());
        assert_eq!(canvas.size(), (40, 20));
    }
}
