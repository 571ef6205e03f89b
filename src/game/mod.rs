mod canvas;
mod collision;
mod direction;
mod grid;
mod notice;
mod render;
mod snake;
mod spawner;
mod timer;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Board, BoardError};
pub(crate) use self::render::{default_palette, Paint, Palette};
use self::canvas::Canvas;
use self::collision::is_collision;
use self::grid::{Bounds, Cell};
use self::notice::{EndReason, Notice};
use self::render::Renderer;
use self::snake::Snake;
use self::spawner::spawn;
use self::timer::{OneShot, TickScheduler};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    bounds: Bounds,
    renderer: Renderer,
    state: GameState,
    snake: Snake,
    /// The direction the snake moved in on the last step
    direction: Direction,
    /// The direction the snake will move in on the next step
    pending: Direction,
    food: Option<Cell>,
    speed_boost: Option<Cell>,
    score: u32,
    speed: Speed,
    ticker: TickScheduler,
    boost_expiry: OneShot,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(board: Board, palette: Palette) -> Self {
        Game::new_with_rng(board, palette, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game that has not been started yet
    pub(crate) fn new_with_rng(board: Board, palette: Palette, rng: R) -> Game<R> {
        Game {
            rng,
            board,
            bounds: board.bounds(),
            renderer: Renderer::new(board.cell_size(), palette),
            state: GameState::Idle,
            snake: Snake::initial(),
            direction: Direction::Right,
            pending: Direction::Right,
            food: None,
            speed_boost: None,
            score: 0,
            speed: Speed::Normal,
            ticker: TickScheduler::new(Speed::Normal.tick_period()),
            boost_expiry: OneShot::default(),
        }
    }

    /// Begin a new game, discarding any game in progress
    pub(crate) fn start(&mut self, now: Instant) {
        self.ticker.stop();
        self.boost_expiry.cancel();
        self.snake = Snake::initial();
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.speed = Speed::Normal;
        self.food = None;
        self.speed_boost = None;
        self.state = GameState::Running;
        info!(columns = self.bounds.max_x, rows = self.bounds.max_y, "Starting new game");
        self.food = self.spawn_pickup(self.speed_boost);
        self.speed_boost = self.spawn_pickup(self.food);
        self.ticker.restart(self.tick_interval(), now);
        if self.food.is_none() {
            self.game_over(EndReason::BoardFull);
        }
    }

    /// Fire every timer that is due at or before `now`, earliest first
    pub(crate) fn advance_to(&mut self, now: Instant) {
        loop {
            let tick = self.ticker.deadline().filter(|&t| t <= now);
            let expiry = self.boost_expiry.deadline().filter(|&t| t <= now);
            match (tick, expiry) {
                (None, None) => break,
                (Some(t), Some(e)) if t < e => self.fire_tick(now),
                (Some(_), None) => self.fire_tick(now),
                (_, Some(_)) => {
                    if let Some(when) = self.boost_expiry.take_due(now) {
                        self.end_boost(when);
                    }
                }
            }
        }
    }

    fn fire_tick(&mut self, now: Instant) {
        if let Some(when) = self.ticker.take_due(now) {
            self.step(when);
        }
    }

    /// Advance the game by one tick: move the snake and deal with whatever
    /// it runs into
    pub(crate) fn step(&mut self, now: Instant) {
        if !self.is_running() {
            return;
        }
        self.direction = self.pending;
        let head = self.snake.head().shifted(self.direction);
        if is_collision(head, &self.snake, self.bounds) {
            self.game_over(EndReason::Collision);
            return;
        }
        if Some(head) == self.food {
            self.snake.advance(head, true);
            self.score = self.score.saturating_add(consts::FOOD_SCORE);
            debug!(score = self.score, length = self.snake.len(), "Ate food");
            self.food = self.spawn_pickup(self.speed_boost);
            if self.food.is_none() {
                self.game_over(EndReason::BoardFull);
            }
        } else if Some(head) == self.speed_boost {
            self.snake.advance(head, false);
            self.activate_boost(now);
            self.speed_boost = self.spawn_pickup(self.food);
            if self.speed_boost.is_none() {
                warn!("No room left for a new speed boost");
            }
        } else {
            self.snake.advance(head, false);
        }
    }

    /// Speed up the snake for the next
    /// [`BOOST_DURATION`][consts::BOOST_DURATION], starting over if a boost is
    /// already active
    fn activate_boost(&mut self, now: Instant) {
        self.speed = Speed::Boosted;
        self.ticker.restart(self.tick_interval(), now);
        self.boost_expiry.cancel();
        self.boost_expiry.start(consts::BOOST_DURATION, now);
        info!("Speed boost activated");
    }

    fn end_boost(&mut self, now: Instant) {
        self.speed = Speed::Normal;
        self.ticker.restart(self.tick_interval(), now);
        info!("Speed boost expired");
    }

    /// Place a food or speed boost somewhere not occupied by the snake or by
    /// `other`
    fn spawn_pickup(&mut self, other: Option<Cell>) -> Option<Cell> {
        let occupied = self.snake.cells().collect::<HashSet<_>>();
        spawn(&mut self.rng, &occupied, other, self.bounds)
    }
}

impl<R> Game<R> {
    /// End the game and show the final score.  Does nothing if the game is
    /// already over.
    pub(crate) fn game_over(&mut self, reason: EndReason) {
        if self.is_over() {
            return;
        }
        self.ticker.stop();
        self.boost_expiry.cancel();
        self.state = GameState::Over {
            reason,
            notice_open: true,
        };
        info!(score = self.score, ?reason, "Game over");
    }

    /// Queue a change of direction for the next step.  Turning around on the
    /// spot is not allowed.
    pub(crate) fn handle_direction(&mut self, dir: Direction) {
        if self.is_running() && dir != self.direction.opposite() {
            self.pending = dir;
        }
    }

    /// Close the end-of-game pop-up
    pub(crate) fn dismiss_notice(&mut self) {
        if let GameState::Over {
            ref mut notice_open,
            ..
        } = self.state
        {
            *notice_open = false;
        }
    }

    pub(crate) fn notice_open(&self) -> bool {
        matches!(
            self.state,
            GameState::Over {
                notice_open: true,
                ..
            }
        )
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over { .. })
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn boosted(&self) -> bool {
        self.speed == Speed::Boosted
    }

    /// Return the time between ticks at the current speed
    pub(crate) fn tick_interval(&self) -> Duration {
        self.speed.tick_period()
    }

    /// Return the earliest time at which a timer is due to fire, if any are
    /// running
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match (self.ticker.deadline(), self.boost_expiry.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn start_label(&self) -> Line<'static> {
        let (label, key) = match self.state {
            GameState::Idle => ("Start", "Enter"),
            GameState::Running => ("Restart", "r"),
            GameState::Over { .. } => ("Restart", "Enter"),
        };
        Line::from_iter([
            Span::raw(format!(" {label} (")),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        if self.boosted() {
            Line::from(Span::styled(" BOOST ", consts::BOOST_MARKER_STYLE))
                .right_aligned()
                .render(score_area, buf);
        }

        let columns = u32::try_from(self.bounds.max_x)
            .unwrap_or(0)
            .saturating_mul(consts::COLUMNS_PER_CELL);
        let rows = u32::try_from(self.bounds.max_y).unwrap_or(0);
        let block_size = Size {
            width: u16::try_from(columns).unwrap_or(u16::MAX).saturating_add(2),
            height: u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas::new(
            block_area.inner(Margin::new(1, 1)),
            buf,
            self.board.width(),
            self.board.height(),
            self.board.cell_size(),
        );
        if self.state == GameState::Idle {
            self.renderer.clear(&mut canvas);
        } else {
            self.renderer.render(
                &mut canvas,
                &self.snake,
                self.food,
                self.speed_boost,
                self.boosted(),
            );
        }

        self.start_label().render(button_area, buf);

        if let GameState::Over {
            reason,
            notice_open: true,
        } = self.state
        {
            let notice_area = center_rect(
                display,
                Size {
                    width: Notice::WIDTH,
                    height: Notice::HEIGHT,
                },
            );
            Notice {
                reason,
                score: self.score,
            }
            .render(notice_area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    /// No game has been started yet
    Idle,
    Running,
    Over {
        reason: EndReason,
        /// Whether the end-of-game pop-up is still showing
        notice_open: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Speed {
    Normal,
    Boosted,
}

impl Speed {
    fn tick_period(self) -> Duration {
        match self {
            Speed::Normal => consts::NORMAL_TICK_PERIOD,
            Speed::Boosted => consts::BOOSTED_TICK_PERIOD,
        }
    }
}
