use super::BoundedGrid;

/// Count live cells in the Moore neighborhood of local position `(i, j)`.
///
/// Offsets that fall outside the window are treated as permanently dead:
/// the window is never wrapped and nothing beyond it is consulted, so
/// activity reaching the edge gets clipped.
pub fn count_live_neighbors(grid: &BoundedGrid, i: usize, j: usize) -> u8 {
    (-1i64..=1)
        .flat_map(|di| (-1i64..=1).map(move |dj| (di, dj)))
        .filter(|&(di, dj)| di != 0 || dj != 0)
        .filter_map(|(di, dj)| {
            let ni = usize::try_from(i as i64 + di).ok()?;
            let nj = usize::try_from(j as i64 + dj).ok()?;
            grid.get_local(ni, nj)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}
