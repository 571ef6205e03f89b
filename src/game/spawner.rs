use super::grid::{Bounds, Cell};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Choose a random cell in the spawn area of `bounds` that is neither in
/// `occupied` nor equal to `forbidden`.
///
/// Every free cell is equally likely to be chosen.  Returns `None` if there
/// are no free cells.
pub(crate) fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &HashSet<Cell>,
    forbidden: Option<Cell>,
    bounds: Bounds,
) -> Option<Cell> {
    bounds
        .spawn_cells()
        .filter(|c| !occupied.contains(c) && Some(*c) != forbidden)
        .choose(rng)
}
