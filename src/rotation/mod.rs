//! Rotation engine: applying twists to cube states.
//!
//! [`rotate`] rewrites a state in place for a real move; [`simulate`]
//! works on a deep copy and returns it, leaving the original untouched,
//! the form the opponent policy uses to explore hypothetical twists.
//!
//! Both run the same [`Permutation`] over every payload the state carries:
//! stickers, overlay marks, creature positions, and egg keys, atomically.
//! A token therefore stays glued to its physical tile through any sequence
//! of turns, and creature identity (list index) survives unchanged.

mod permutation;
mod twist;

pub use permutation::Permutation;
pub use twist::{Spin, Twist};

use crate::core::CubeState;

/// Apply a twist to the state in place.
pub fn rotate(state: &mut CubeState, twist: Twist) {
    let perm = Permutation::of(twist);

    state.stickers = perm.apply(&state.stickers);
    state.overlay = perm.apply(&state.overlay);

    for pos in state.creatures.iter_mut() {
        *pos = perm.image(*pos);
    }
    let eggs = std::mem::take(&mut state.eggs);
    state.eggs = eggs
        .into_iter()
        .map(|(pos, kind)| (perm.image(pos), kind))
        .collect();
}

/// Apply a twist to a copy of the state and return the copy.
#[must_use]
pub fn simulate(state: &CubeState, twist: Twist) -> CubeState {
    let mut copy = state.clone();
    rotate(&mut copy, twist);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EggKind, Face, Mark, TilePos};

    #[test]
    fn test_simulate_leaves_original_untouched() {
        let mut state = CubeState::new();
        state
            .place(TilePos::new(Face::Front, 0, 0), Mark::Nought)
            .unwrap();
        let before = state.clone();

        let simulated = simulate(&state, Twist::U);

        assert_eq!(state, before);
        assert_ne!(simulated, before);
    }

    #[test]
    fn test_mark_travels_with_tile() {
        let mut state = CubeState::new();
        state
            .place(TilePos::new(Face::Front, 0, 1), Mark::Cross)
            .unwrap();

        rotate(&mut state, Twist::U);

        // Front's top row moved onto Left under U.
        assert_eq!(state.mark_at(TilePos::new(Face::Left, 0, 1)), Some(Mark::Cross));
        assert_eq!(state.mark_at(TilePos::new(Face::Front, 0, 1)), None);
    }

    #[test]
    fn test_creature_and_egg_travel_in_lockstep() {
        let mut state = CubeState::new();
        state.creatures.push(TilePos::new(Face::Front, 0, 0));
        state
            .eggs
            .insert(TilePos::new(Face::Front, 0, 2), EggKind::Golden);

        rotate(&mut state, Twist::U);

        assert_eq!(state.creatures()[0], TilePos::new(Face::Left, 0, 0));
        assert_eq!(
            state.egg_at(TilePos::new(Face::Left, 0, 2)),
            Some(EggKind::Golden)
        );
        assert!(state.egg_at(TilePos::new(Face::Front, 0, 2)).is_none());
    }

    #[test]
    fn test_rotate_then_inverse_is_identity() {
        let mut state = CubeState::new();
        state
            .place(TilePos::new(Face::Up, 2, 1), Mark::Triangle)
            .unwrap();
        state.creatures.push(TilePos::new(Face::Back, 1, 2));
        let original = state.clone();

        for twist in Twist::ALL {
            rotate(&mut state, twist);
            rotate(&mut state, twist.inverse());
            assert_eq!(state, original, "{twist} round trip");
        }
    }
}
