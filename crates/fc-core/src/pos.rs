//! Grid coordinate type and boundary mode.

/// A cell coordinate on the festival grid.
///
/// `x` runs along the width, `y` along the height.  Both are always inside
/// the grid once a position has been accepted by `MultiGrid`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance on raw coordinates, ignoring any wrap-around.
    pub fn distance(self, other: GridPos) -> f32 {
        let dx = self.x as f32 - other.x as f32;
        let dy = self.y as f32 - other.y as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// One step toward `goal`, moving each axis independently by at most 1.
    ///
    /// The result is diagonal whenever both axes differ, so the number of
    /// steps to arrive is the Chebyshev distance.  No wrap shortcut is taken,
    /// which keeps the result inside whatever grid contains both endpoints.
    pub fn step_toward(self, goal: GridPos) -> GridPos {
        fn axis(from: u32, to: u32) -> u32 {
            match from.cmp(&to) {
                std::cmp::Ordering::Less    => from + 1,
                std::cmp::Ordering::Greater => from - 1,
                std::cmp::Ordering::Equal   => from,
            }
        }
        GridPos::new(axis(self.x, goal.x), axis(self.y, goal.y))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for GridPos {
    fn from((x, y): (u32, u32)) -> Self {
        GridPos::new(x, y)
    }
}

/// What happens at the grid edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    /// Opposite edges are joined; offsets wrap around.
    #[default]
    Torus,
    /// Offsets past the edge are rejected.
    Bounded,
}

impl Boundary {
    pub fn as_str(self) -> &'static str {
        match self {
            Boundary::Torus   => "torus",
            Boundary::Bounded => "bounded",
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
