use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    /// The snake ran into a wall or into itself
    Collision,

    /// The snake has filled the board and there are no more spaces to place
    /// food in.
    BoardFull,
}

/// A widget for displaying the end-of-game pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Notice {
    pub(super) reason: EndReason,
    pub(super) score: u32,
}

impl Notice {
    /// The height that should be used for the `Rect` passed to
    /// `Notice::render()`
    pub(super) const HEIGHT: u16 = 6;

    /// The width that should be used for the `Rect` passed to
    /// `Notice::render()`
    pub(super) const WIDTH: u16 = 28;

    fn headline(self) -> &'static str {
        match self.reason {
            EndReason::Collision => "Game over!",
            EndReason::BoardFull => "The board is full!",
        }
    }
}

impl Widget for Notice {
    /*
     * ┌─────── GAME OVER ────────┐
     * │ Game over!               │
     * │ Final score: 120         │
     * │                          │
     * │ Press Enter to continue. │
     * └──────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(self.headline()),
            Line::from(format!("Final score: {}", self.score)),
            Line::default(),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to continue."),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
