//! One permutation table per operator.
//!
//! Every twist is a pure permutation of the 54-tile index space, applied
//! identically to any payload: sticker grid, overlay grid, or a bare list
//! of stored positions (creatures, egg keys). Building the table once per
//! operator replaces the per-operator, per-grid shuffling blocks such
//! engines usually accumulate, and guarantees all payloads can never drift
//! apart.
//!
//! A table is assembled from two disjoint parts:
//!
//! 1. **Face-local spin**: the turned face's own nine tiles rotate 90°
//!    about its centre (face turns only; M/E have no face of their own).
//! 2. **Band cycle**: one row/column triple on each of four surrounding
//!    faces cycles to the next face, with an index reversal where Back's
//!    traversal direction flips relative to the unfolded layout. F and B
//!    turns spin their face only; the band cycles are carried by the
//!    U/D/L/R/M/E layers.

use std::sync::OnceLock;

use crate::core::{CubeGrid, Face, TilePos};

use super::twist::{Spin, Twist};

/// A bijection on the 54 tile positions.
pub struct Permutation {
    /// `dst_of[i]` is where the tile at index `i` travels.
    dst_of: [u8; 54],
    /// `src_of[i]` is which tile lands at index `i`.
    src_of: [u8; 54],
}

impl Permutation {
    /// The table for a twist. Tables are built once and shared.
    #[must_use]
    pub fn of(twist: Twist) -> &'static Permutation {
        static TABLES: OnceLock<Vec<Permutation>> = OnceLock::new();
        let tables = TABLES.get_or_init(|| Twist::ALL.into_iter().map(build).collect());
        &tables[twist.index()]
    }

    /// Where the tile at `pos` travels under this permutation.
    #[must_use]
    pub fn image(&self, pos: TilePos) -> TilePos {
        TilePos::from_index(self.dst_of[pos.index()] as usize)
    }

    /// Which tile lands at `pos` under this permutation.
    #[must_use]
    pub fn source(&self, pos: TilePos) -> TilePos {
        TilePos::from_index(self.src_of[pos.index()] as usize)
    }

    /// Apply to a payload grid, producing the permuted grid.
    #[must_use]
    pub fn apply<T: Clone>(&self, grid: &CubeGrid<T>) -> CubeGrid<T> {
        CubeGrid::from_fn(|pos| grid.get(self.source(pos)).clone())
    }

    fn from_images(dst_of: [u8; 54]) -> Self {
        let mut src_of = [0u8; 54];
        for (src, &dst) in dst_of.iter().enumerate() {
            src_of[dst as usize] = src as u8;
        }
        Self { dst_of, src_of }
    }

    fn inverted(&self) -> Self {
        Self {
            dst_of: self.src_of,
            src_of: self.dst_of,
        }
    }
}

fn build(twist: Twist) -> Permutation {
    if twist.is_primed() {
        return build(twist.inverse()).inverted();
    }

    let mut dst_of: [u8; 54] = std::array::from_fn(|i| i as u8);

    if let Some((face, spin)) = twist.spun_face() {
        for r in 0..3u8 {
            for c in 0..3u8 {
                let to = match spin {
                    Spin::Clockwise => TilePos::new(face, c, 2 - r),
                    Spin::CounterClockwise => TilePos::new(face, 2 - c, r),
                };
                dst_of[TilePos::new(face, r, c).index()] = to.index() as u8;
            }
        }
    }

    if let Some(bands) = band_cycle(twist) {
        for k in 0..4 {
            let next = &bands[(k + 1) % 4];
            for i in 0..3 {
                dst_of[bands[k][i].index()] = next[i].index() as u8;
            }
        }
    }

    Permutation::from_images(dst_of)
}

fn row(face: Face, r: u8) -> [TilePos; 3] {
    std::array::from_fn(|c| TilePos::new(face, r, c as u8))
}

fn col(face: Face, c: u8) -> [TilePos; 3] {
    std::array::from_fn(|r| TilePos::new(face, r as u8, c))
}

/// Back's traversal runs bottom-to-top relative to its band neighbours.
fn col_rev(face: Face, c: u8) -> [TilePos; 3] {
    std::array::from_fn(|r| TilePos::new(face, 2 - r as u8, c))
}

/// The four bands cycled by an unprimed twist, listed in feed order: band
/// `k` moves onto band `k + 1`, aligned index-for-index. `None` for F/B,
/// whose layers carry no surrounding band in this engine.
fn band_cycle(twist: Twist) -> Option<[[TilePos; 3]; 4]> {
    use Face::{Back, Down, Front, Left, Right, Up};

    let bands = match twist {
        Twist::U => [row(Front, 0), row(Left, 0), row(Back, 0), row(Right, 0)],
        Twist::D => [row(Front, 2), row(Right, 2), row(Back, 2), row(Left, 2)],
        Twist::E => [row(Front, 1), row(Left, 1), row(Back, 1), row(Right, 1)],
        Twist::R => [col(Up, 2), col(Front, 2), col(Down, 2), col_rev(Back, 0)],
        Twist::L => [col(Up, 0), col_rev(Back, 2), col(Down, 0), col(Front, 0)],
        Twist::M => [col(Up, 1), col(Front, 1), col(Down, 1), col_rev(Back, 1)],
        _ => return None,
    };
    Some(bands)
}
