use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CubeError;

/// One of the six faces of the cube. The discriminant is the face's index
/// into the facelet grid, in URFDLB order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }

    /// The color this face carries on a solved cube.
    #[must_use]
    pub fn home_color(self) -> Color {
        Color::ALL[self.index()]
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Face::from_letter), chars.next()) {
            (Some(face), None) => Ok(face),
            _ => Err(CubeError::InvalidMove(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Face {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Face> for String {
    fn from(value: Face) -> Self {
        value.to_string()
    }
}

/// A sticker color. `Color::ALL[i]` is the home color of `Face::ALL[i]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }

    #[must_use]
    pub fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_colors_round_trip() {
        for face in Face::ALL {
            assert_eq!(face.home_color().home_face(), face);
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn parse_face_letters() {
        assert_eq!("r".parse::<Face>(), Ok(Face::R));
        assert_eq!("B".parse::<Face>(), Ok(Face::B));
        assert!("X".parse::<Face>().is_err());
        assert!("RU".parse::<Face>().is_err());
        assert!("".parse::<Face>().is_err());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Turned {
        face: Face,
        moves: Vec<crate::Move>,
    }

    #[test]
    fn faces_and_moves_serialize_as_notation() {
        let turned = Turned {
            face: Face::L,
            moves: crate::parse_moves("R' U2 B").unwrap(),
        };
        let text = toml::to_string(&turned).unwrap();
        assert!(text.contains("R'") && text.contains("U2"), "{text}");
        assert!(!text.contains("CounterClockwise"), "{text}");
        assert_eq!(toml::from_str::<Turned>(&text).unwrap(), turned);

        let lowercase: Turned =
            toml::from_str("face = \"l\"\nmoves = [\"r'\", \"u2\", \"b\"]").unwrap();
        assert_eq!(lowercase, turned);

        assert!(toml::from_str::<Turned>("face = \"X\"\nmoves = []").is_err());
        assert!(toml::from_str::<Turned>("face = \"U\"\nmoves = [\"R3\"]").is_err());
    }
}
