use tracing::trace;

use crate::boundary::BoundaryIndex;
use crate::types::Coordinate;

/// Finds a free cell for the egg.
///
/// Scans row major from `start`, wrapping from the last cell back to the
/// first, and returns the first cell that is not a boundary. Every cell is
/// visited at most once, so a full board yields `None` after `width * height`
/// probes. A `start` off the board is wrapped on to it.
pub fn place_egg<B: BoundaryIndex>(
    boundaries: &B,
    width: u32,
    height: u32,
    start: Coordinate,
) -> Option<Coordinate> {
    let (w, h) = (width as i64, height as i64);
    let area = w * h;
    if area == 0 {
        return None;
    }
    let first = (start.y as i64).rem_euclid(h) * w + (start.x as i64).rem_euclid(w);

    let found = (0..area)
        .map(|step| (first + step) % area)
        .map(|i| Coordinate::new((i % w) as i32, (i / w) as i32))
        .find(|c| !boundaries.is_boundary(*c));

    trace!(?start, ?found, "egg scan");
    found
}
