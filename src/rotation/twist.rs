//! The sixteen layer-rotation operators.
//!
//! Six face turns, each with a clockwise and counter-clockwise (primed)
//! variant, plus the two middle-slice turns M (between L and R) and E
//! (between U and D). The enum is closed: an invalid operator is
//! unrepresentable, so the only failure mode is parsing notation text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Face;
use crate::error::ParseTwistError;

/// Spin direction of a face about its own centre, in grid-index terms as
/// drawn on the unfolded layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// One of the 16 rotation operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Twist {
    U,
    UInv,
    D,
    DInv,
    L,
    LInv,
    R,
    RInv,
    F,
    FInv,
    B,
    BInv,
    M,
    MInv,
    E,
    EInv,
}

impl Twist {
    /// All operators, in the order the opponent policy scans them.
    pub const ALL: [Twist; 16] = [
        Twist::U,
        Twist::UInv,
        Twist::D,
        Twist::DInv,
        Twist::L,
        Twist::LInv,
        Twist::R,
        Twist::RInv,
        Twist::F,
        Twist::FInv,
        Twist::B,
        Twist::BInv,
        Twist::M,
        Twist::MInv,
        Twist::E,
        Twist::EInv,
    ];

    /// Dense index in 0..16, used by the permutation table cache.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// The labelled inverse: applying a twist and then its inverse is the
    /// identity transform.
    #[must_use]
    pub fn inverse(self) -> Twist {
        match self {
            Twist::U => Twist::UInv,
            Twist::UInv => Twist::U,
            Twist::D => Twist::DInv,
            Twist::DInv => Twist::D,
            Twist::L => Twist::LInv,
            Twist::LInv => Twist::L,
            Twist::R => Twist::RInv,
            Twist::RInv => Twist::R,
            Twist::F => Twist::FInv,
            Twist::FInv => Twist::F,
            Twist::B => Twist::BInv,
            Twist::BInv => Twist::B,
            Twist::M => Twist::MInv,
            Twist::MInv => Twist::M,
            Twist::E => Twist::EInv,
            Twist::EInv => Twist::E,
        }
    }

    /// Whether this is the primed (counter-clockwise) variant.
    #[must_use]
    pub fn is_primed(self) -> bool {
        matches!(
            self,
            Twist::UInv
                | Twist::DInv
                | Twist::LInv
                | Twist::RInv
                | Twist::FInv
                | Twist::BInv
                | Twist::MInv
                | Twist::EInv
        )
    }

    /// The face this operator spins about its own centre, with the spin
    /// direction in grid-index terms. `None` for the slice turns M/E.
    ///
    /// Unprimed L and R spin counter-clockwise in grid indices: both are
    /// conventionally viewed from outside the cube, and those faces sit on
    /// opposite sides, so "clockwise as seen from outside" flips for them
    /// relative to the unfolded drawing.
    #[must_use]
    pub fn spun_face(self) -> Option<(Face, Spin)> {
        let (face, spin) = match self {
            Twist::U => (Face::Up, Spin::Clockwise),
            Twist::D => (Face::Down, Spin::Clockwise),
            Twist::F => (Face::Front, Spin::Clockwise),
            Twist::B => (Face::Back, Spin::Clockwise),
            Twist::L => (Face::Left, Spin::CounterClockwise),
            Twist::R => (Face::Right, Spin::CounterClockwise),
            Twist::UInv => (Face::Up, Spin::CounterClockwise),
            Twist::DInv => (Face::Down, Spin::CounterClockwise),
            Twist::FInv => (Face::Front, Spin::CounterClockwise),
            Twist::BInv => (Face::Back, Spin::CounterClockwise),
            Twist::LInv => (Face::Left, Spin::Clockwise),
            Twist::RInv => (Face::Right, Spin::Clockwise),
            Twist::M | Twist::MInv | Twist::E | Twist::EInv => return None,
        };
        Some((face, spin))
    }

    /// Standard notation: the base letter, primed variants suffixed with `'`.
    #[must_use]
    pub fn notation(self) -> &'static str {
        match self {
            Twist::U => "U",
            Twist::UInv => "U'",
            Twist::D => "D",
            Twist::DInv => "D'",
            Twist::L => "L",
            Twist::LInv => "L'",
            Twist::R => "R",
            Twist::RInv => "R'",
            Twist::F => "F",
            Twist::FInv => "F'",
            Twist::B => "B",
            Twist::BInv => "B'",
            Twist::M => "M",
            Twist::MInv => "M'",
            Twist::E => "E",
            Twist::EInv => "E'",
        }
    }
}

impl std::fmt::Display for Twist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for Twist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Twist::ALL
            .into_iter()
            .find(|t| t.notation() == s)
            .ok_or_else(|| ParseTwistError(s.to_string()))
    }
}
