use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// The snake is an ordered run of cells, head first.  No two cells ever share
/// a position: a move that would make them do so ends the game instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Cell,

    /// The positions of the cells in the snake's body, with the cell right
    /// behind the head at the front and the tip of the tail at the back
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake with its head at `head` followed by the cells of `body`
    pub(crate) fn new<I: IntoIterator<Item = Cell>>(head: Cell, body: I) -> Snake {
        Snake {
            head,
            body: body.into_iter().collect(),
        }
    }

    /// Create the snake that every game starts with
    pub(crate) fn initial() -> Snake {
        let [head, body @ ..] = consts::INITIAL_SNAKE;
        Snake::new(head.into(), body.map(Cell::from))
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Return the number of cells the snake occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len().saturating_add(1)
    }

    /// Return the positions of all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Move the head to `new_head`.  Unless `grow` is true, the last cell of
    /// the tail is dropped so that the snake keeps its length.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(self.head);
        self.head = new_head;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}
