//! Straight-line directions on the grid.

/// One of the eight unit steps a word can run along.
///
/// The y axis grows downwards, so [`Direction::South`] is `(0, 1)`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// assert_eq!(Direction::ALL.len(), 8);
/// assert_eq!(Direction::NorthEast.delta(), (1, -1));
/// assert_eq!(Direction::NorthEast.reversed(), Direction::SouthWest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right, `(1, 0)`.
    East,
    /// Right to left, `(-1, 0)`.
    West,
    /// Top to bottom, `(0, 1)`.
    South,
    /// Bottom to top, `(0, -1)`.
    North,
    /// Diagonally down and right, `(1, 1)`.
    SouthEast,
    /// Diagonally down and left, `(-1, 1)`.
    SouthWest,
    /// Diagonally up and right, `(1, -1)`.
    NorthEast,
    /// Diagonally up and left, `(-1, -1)`.
    NorthWest,
}

impl Direction {
    /// Array containing all eight directions.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::West,
        Self::South,
        Self::North,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthEast,
        Self::NorthWest,
    ];

    /// Returns the horizontal step of this direction.
    #[must_use]
    pub const fn dx(self) -> i8 {
        match self {
            Self::East | Self::SouthEast | Self::NorthEast => 1,
            Self::West | Self::SouthWest | Self::NorthWest => -1,
            Self::South | Self::North => 0,
        }
    }

    /// Returns the vertical step of this direction.
    #[must_use]
    pub const fn dy(self) -> i8 {
        match self {
            Self::South | Self::SouthEast | Self::SouthWest => 1,
            Self::North | Self::NorthEast | Self::NorthWest => -1,
            Self::East | Self::West => 0,
        }
    }

    /// Returns `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        (self.dx(), self.dy())
    }

    /// Looks up the direction with the given unit step.
    ///
    /// Returns `None` for `(0, 0)` and for components outside `-1..=1`.
    #[must_use]
    pub fn from_delta(dx: i8, dy: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == (dx, dy))
    }

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::South => Self::North,
            Self::North => Self::South,
            Self::SouthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthWest => Self::NorthEast,
            Self::NorthEast => Self::SouthWest,
        }
    }
}
