use super::grid::{Bounds, Cell};
use super::snake::Snake;

/// Return whether moving the head of `snake` to `head` would kill it, either
/// by leaving `bounds` or by running into any of the snake's current cells.
///
/// The tail counts too, even though it would move out of the way on the same
/// tick.
pub(crate) fn is_collision(head: Cell, snake: &Snake, bounds: Bounds) -> bool {
    !bounds.contains(head) || snake.contains(head)
}
