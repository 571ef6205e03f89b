use super::grid::Cell;
use super::snake::Snake;
use crate::consts;
use enum_map::{enum_map, Enum, EnumMap};
use ratatui::style::Color;
use std::num::NonZeroU32;

/// A pixel-addressed drawing area
pub(crate) trait Surface {
    /// Return the `(width, height)` of the surface in pixels
    fn size(&self) -> (u32, u32);

    /// Erase everything in the given rectangle
    fn clear(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Set the color used by subsequent calls to `fill_rect()`
    fn set_fill(&mut self, color: Color);

    /// Paint the given rectangle in the current fill color.  Parts of the
    /// rectangle outside the surface are ignored.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}

/// The kinds of things that get painted, each with its own color
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Paint {
    Head,
    BoostedHead,
    Body,
    Food,
    SpeedBoost,
}

pub(crate) type Palette = EnumMap<Paint, Color>;

pub(crate) fn default_palette() -> Palette {
    enum_map! {
        Paint::Head => consts::HEAD_COLOR,
        Paint::BoostedHead => consts::BOOSTED_HEAD_COLOR,
        Paint::Body => consts::BODY_COLOR,
        Paint::Food => consts::FOOD_COLOR,
        Paint::SpeedBoost => consts::SPEED_BOOST_COLOR,
    }
}

/// Draws the game's entities as squares on a [`Surface`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Renderer {
    cell_size: NonZeroU32,
    palette: Palette,
}

impl Renderer {
    pub(crate) fn new(cell_size: NonZeroU32, palette: Palette) -> Renderer {
        Renderer { cell_size, palette }
    }

    /// Wipe `surface` and draw the snake, the food, and the speed boost on it
    pub(crate) fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        snake: &Snake,
        food: Option<Cell>,
        speed_boost: Option<Cell>,
        boosted: bool,
    ) {
        self.clear(surface);
        let head_paint = if boosted {
            Paint::BoostedHead
        } else {
            Paint::Head
        };
        for (i, cell) in snake.cells().enumerate() {
            let paint = if i == 0 { head_paint } else { Paint::Body };
            self.draw_cell(surface, cell, paint);
        }
        if let Some(cell) = food {
            self.draw_cell(surface, cell, Paint::Food);
        }
        if let Some(cell) = speed_boost {
            self.draw_cell(surface, cell, Paint::SpeedBoost);
        }
    }

    pub(crate) fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (width, height) = surface.size();
        surface.clear(0, 0, width, height);
    }

    /// Fill a cell, leaving a one-pixel gap on its right & bottom edges
    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, cell: Cell, paint: Paint) {
        let (Ok(x), Ok(y)) = (u32::try_from(cell.x), u32::try_from(cell.y)) else {
            return;
        };
        let size = self.cell_size.get();
        let (Some(px), Some(py)) = (x.checked_mul(size), y.checked_mul(size)) else {
            return;
        };
        let side = size.saturating_sub(1);
        surface.set_fill(self.palette[paint]);
        surface.fill_rect(px, py, side, side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Op {
        Clear(u32, u32, u32, u32),
        Fill(Color, u32, u32, u32, u32),
    }

    /// A surface that records what is drawn on it
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct Recorder {
        fill: Color,
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (400, 400)
        }

        fn clear(&mut self, x: u32, y: u32, width: u32, height: u32) {
            self.ops.push(Op::Clear(x, y, width, height));
        }

        fn set_fill(&mut self, color: Color) {
            self.fill = color;
        }

        fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
            self.ops.push(Op::Fill(self.fill, x, y, width, height));
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(
            NonZeroU32::new(20).expect("20 should be nonzero"),
            default_palette(),
        )
    }

    fn snake() -> Snake {
        Snake::new(Cell::new(5, 5), [Cell::new(4, 5), Cell::new(3, 5)])
    }

    #[test]
    fn render_normal() {
        let mut surface = Recorder::default();
        renderer().render(
            &mut surface,
            &snake(),
            Some(Cell::new(10, 2)),
            Some(Cell::new(0, 18)),
            false,
        );
        assert_eq!(
            surface.ops,
            [
                Op::Clear(0, 0, 400, 400),
                Op::Fill(consts::HEAD_COLOR, 100, 100, 19, 19),
                Op::Fill(consts::BODY_COLOR, 80, 100, 19, 19),
                Op::Fill(consts::BODY_COLOR, 60, 100, 19, 19),
                Op::Fill(consts::FOOD_COLOR, 200, 40, 19, 19),
                Op::Fill(consts::SPEED_BOOST_COLOR, 0, 360, 19, 19),
            ]
        );
    }

    #[test]
    fn render_boosted_without_pickups() {
        let mut surface = Recorder::default();
        renderer().render(&mut surface, &snake(), None, None, true);
        assert_eq!(
            surface.ops,
            [
                Op::Clear(0, 0, 400, 400),
                Op::Fill(consts::BOOSTED_HEAD_COLOR, 100, 100, 19, 19),
                Op::Fill(consts::BODY_COLOR, 80, 100, 19, 19),
                Op::Fill(consts::BODY_COLOR, 60, 100, 19, 19),
            ]
        );
    }

    #[test]
    fn skip_negative_cells() {
        let mut surface = Recorder::default();
        let snake = Snake::new(Cell::new(-1, 0), [Cell::new(0, 0)]);
        renderer().render(&mut surface, &snake, None, None, false);
        assert_eq!(
            surface.ops,
            [
                Op::Clear(0, 0, 400, 400),
                Op::Fill(consts::BODY_COLOR, 0, 0, 19, 19),
            ]
        );
    }

    #[test]
    fn custom_palette() {
        let mut palette = default_palette();
        palette[Paint::Food] = Color::Magenta;
        let r = Renderer::new(NonZeroU32::new(10).expect("10 should be nonzero"), palette);
        let mut surface = Recorder::default();
        r.render(&mut surface, &snake(), Some(Cell::new(1, 1)), None, false);
        assert_eq!(
            surface.ops.last(),
            Some(&Op::Fill(Color::Magenta, 10, 10, 9, 9))
        );
    }
}
