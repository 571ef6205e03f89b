//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake at normal speed
pub(crate) const NORMAL_TICK_PERIOD: Duration = Duration::from_millis(150);

/// Time between movements of the snake while a speed boost is active
pub(crate) const BOOSTED_TICK_PERIOD: Duration = Duration::from_millis(75);

/// How long a speed boost lasts after being picked up.  Picking up another
/// boost restarts the window rather than extending it.
pub(crate) const BOOST_DURATION: Duration = Duration::from_millis(5000);

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_SCORE: u32 = 10;

/// The snake's cells at the start of a game, head first
pub(crate) const INITIAL_SNAKE: [(i32, i32); 3] = [(5, 5), (4, 5), (3, 5)];

/// Default canvas width in pixels
pub(crate) const DEFAULT_CANVAS_WIDTH: u32 = 400;

/// Default canvas height in pixels
pub(crate) const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Default side length of one grid cell in pixels
pub(crate) const DEFAULT_CELL_SIZE: u32 = 20;

/// Smallest grid (in cells along either axis) that a board may have
pub(crate) const MIN_GRID_CELLS: i32 = 6;

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const COLUMNS_PER_CELL: u32 = 2;

/// Widest grid (in cells) that fits inside [`DISPLAY_SIZE`] along with the
/// board's border
pub(crate) const MAX_GRID_COLUMNS: i32 = 39;

/// Tallest grid (in cells) that fits inside [`DISPLAY_SIZE`] along with the
/// score bar, the button line, and the board's border
pub(crate) const MAX_GRID_ROWS: i32 = 20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

pub(crate) const HEAD_COLOR: Color = Color::Rgb(0x4C, 0xAF, 0x50);

pub(crate) const BOOSTED_HEAD_COLOR: Color = Color::Rgb(0xFF, 0xA0, 0x00);

pub(crate) const BODY_COLOR: Color = Color::Rgb(0x81, 0xC7, 0x84);

pub(crate) const FOOD_COLOR: Color = Color::Rgb(0xFF, 0x52, 0x52);

pub(crate) const SPEED_BOOST_COLOR: Color = Color::Rgb(0x21, 0x96, 0xF3);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the marker shown in the score bar while a boost is active
pub(crate) const BOOST_MARKER_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(BOOSTED_HEAD_COLOR)
    .add_modifier(Modifier::BOLD)
    .remove_modifier(Modifier::REVERSED);
