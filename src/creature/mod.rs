//! Creature spawning, displacement, and egg handling (extended ruleset).
//!
//! Creatures block tiles, ride rotations like any other token, and once
//! per turn a random subset of them takes one step: creatures away from
//! the front face march toward it (Back routes via Right), creatures on
//! the front face wander to a free neighbouring cell. Every realized step
//! deposits an egg on the vacated tile; collecting an egg later converts
//! it into a burst of the collector's marks.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    CubeState, EggKind, Face, GameRng, Mark, Ruleset, TilePos, GOLDEN_EGG_INTERVAL,
    GOLDEN_EGG_MARKS, MAX_CREATURES_ON_FRONT, NORMAL_EGG_MARKS,
};
use crate::error::{InconsistentState, TurnError};

/// One realized creature step, reported to the presentation layer so it
/// can animate the move and the deposited egg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    /// Index of the creature in [`CubeState::creatures`]; stable identity.
    pub index: usize,
    pub from: TilePos,
    pub to: TilePos,
    /// Kind of egg left on the vacated tile.
    pub egg: EggKind,
}

/// Spawn `count` creatures on a fresh state: at most
/// [`MAX_CREATURES_ON_FRONT`] on the front face, the rest on random tiles
/// of the other faces. Any mark under a spawn point is cleared.
pub fn spawn(state: &mut CubeState, count: usize, rng: &mut GameRng) {
    state.creatures.clear();

    let mut front: Vec<TilePos> = TilePos::all().filter(|p| p.face == Face::Front).collect();
    let mut others: Vec<TilePos> = TilePos::all().filter(|p| p.face != Face::Front).collect();
    rng.shuffle(&mut front);
    rng.shuffle(&mut others);

    let on_front = count.min(MAX_CREATURES_ON_FRONT);
    let spawned = front
        .into_iter()
        .take(on_front)
        .chain(others.into_iter().take(count - on_front));

    for pos in spawned {
        state.clear_mark(pos);
        state.creatures.push(pos);
    }
}

/// Move a random non-empty subset of creatures one step each.
///
/// A step only happens if the destination is free of other creatures;
/// otherwise the creature stays put and deposits nothing. Each realized
/// step increments the displacement counter, deposits an egg on the
/// vacated tile (golden on every [`GOLDEN_EGG_INTERVAL`]-th displacement),
/// removes any egg on the destination, and clears any mark there.
pub fn displace(state: &mut CubeState, rng: &mut GameRng) -> Vec<Displacement> {
    let len = state.creatures.len();
    if len == 0 {
        return Vec::new();
    }

    let count = rng.gen_range(0..len) + 1;
    let mut indices: Vec<usize> = (0..len).collect();
    rng.shuffle(&mut indices);
    indices.truncate(count);

    let mut occupied: FxHashSet<TilePos> = state.creatures.iter().copied().collect();
    let mut moves = Vec::new();

    for &i in &indices {
        let from = state.creatures[i];
        occupied.remove(&from);

        let next = if from.face == Face::Front {
            random_step_on_face(from, &occupied, rng)
        } else {
            Some(step_toward_front(from))
        };

        match next {
            Some(to) if !occupied.contains(&to) => {
                occupied.insert(to);
                state.displacement_count += 1;
                let egg = if state.displacement_count % GOLDEN_EGG_INTERVAL == 0 {
                    EggKind::Golden
                } else {
                    EggKind::Normal
                };
                state.eggs.insert(from, egg);
                state.eggs.remove(&to);
                state.clear_mark(to);
                state.creatures[i] = to;
                moves.push(Displacement { index: i, from, to, egg });
            }
            _ => {
                occupied.insert(from);
            }
        }
    }

    moves
}

/// Collect the egg at `pos` for `side`: the egg disappears and the
/// collector's marks appear on random empty, placeable tiles across the
/// whole cube. Fewer marks (possibly zero) are placed when the board is
/// nearly full.
pub fn collect_egg(
    state: &mut CubeState,
    pos: TilePos,
    side: Mark,
    rng: &mut GameRng,
) -> Result<SmallVec<[TilePos; GOLDEN_EGG_MARKS]>, TurnError> {
    let kind = state.eggs.remove(&pos).ok_or(TurnError::NoEgg(pos))?;
    let wanted = match kind {
        EggKind::Normal => NORMAL_EGG_MARKS,
        EggKind::Golden => GOLDEN_EGG_MARKS,
    };

    let mut spots = state.placeable_tiles(Ruleset::Creature);
    rng.shuffle(&mut spots);

    let mut placed = SmallVec::new();
    for spot in spots.into_iter().take(wanted) {
        if state.place(spot, side).is_ok() {
            placed.push(spot);
        }
    }
    Ok(placed)
}

/// Defensive invariant check: no creature shares a tile with a mark, an
/// egg, or another creature. A violation is an engine bug, not a game
/// state the rules can produce.
pub fn verify(state: &CubeState) -> Result<(), InconsistentState> {
    let mut seen = FxHashSet::default();
    for &pos in state.creatures() {
        if state.mark_at(pos).is_some() {
            return Err(InconsistentState {
                pos,
                detail: "creature and mark on the same tile",
            });
        }
        if state.egg_at(pos).is_some() {
            return Err(InconsistentState {
                pos,
                detail: "creature and egg on the same tile",
            });
        }
        if !seen.insert(pos) {
            return Err(InconsistentState {
                pos,
                detail: "two creatures on the same tile",
            });
        }
    }
    Ok(())
}

/// The deterministic one-tile march toward the front face. Creatures on
/// Back travel via Right; creatures already on Front never use this path.
fn step_toward_front(pos: TilePos) -> TilePos {
    let TilePos { face, row, col } = pos;
    match face {
        Face::Up => {
            if row == 0 {
                TilePos::new(Face::Front, 0, col)
            } else {
                TilePos::new(face, row - 1, col)
            }
        }
        Face::Down => {
            if row == 2 {
                TilePos::new(Face::Front, 2, col)
            } else {
                TilePos::new(face, row + 1, col)
            }
        }
        Face::Left => {
            if col == 2 {
                TilePos::new(Face::Front, row, 0)
            } else {
                TilePos::new(face, row, col + 1)
            }
        }
        Face::Right => {
            if col == 0 {
                TilePos::new(Face::Front, row, 2)
            } else {
                TilePos::new(face, row, col - 1)
            }
        }
        Face::Back => {
            if col == 0 {
                TilePos::new(Face::Right, row, 2)
            } else {
                TilePos::new(face, row, col - 1)
            }
        }
        Face::Front => pos,
    }
}

/// A random step to one of the up-to-eight neighbouring cells on the same
/// face, avoiding tiles occupied by other creatures. `None` if boxed in.
fn random_step_on_face(
    pos: TilePos,
    occupied: &FxHashSet<TilePos>,
    rng: &mut GameRng,
) -> Option<TilePos> {
    let mut options: SmallVec<[TilePos; 8]> = SmallVec::new();
    for dr in -1i8..=1 {
        for dc in -1i8..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = pos.row as i8 + dr;
            let c = pos.col as i8 + dc;
            if (0..3).contains(&r) && (0..3).contains(&c) {
                let candidate = TilePos::new(pos.face, r as u8, c as u8);
                if !occupied.contains(&candidate) {
                    options.push(candidate);
                }
            }
        }
    }
    rng.choose(&options).copied()
}
