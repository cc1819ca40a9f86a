//! `MultiGrid` — a bounded or toroidal 2-D grid with multi-occupancy cells.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec`, so the occupants of `(x, y)` live
//! at `cells[y * width + x]`.  A reverse index `AgentRef → GridPos` gives
//! O(1) position lookups and enforces the one-cell-per-agent invariant:
//! every mutation updates both sides or neither.
//!
//! Held cups and cups in stand inventories are *not* on the grid; only
//! visitors, stands and littered cups are.

use rustc_hash::FxHashMap;

use fc_core::{AgentRef, Boundary, GridPos};

use crate::{GridError, GridResult};

/// Multi-occupancy grid shared by every agent in a run.
pub struct MultiGrid {
    width:     u32,
    height:    u32,
    boundary:  Boundary,
    cells:     Vec<Vec<AgentRef>>,
    positions: FxHashMap<AgentRef, GridPos>,
}

impl MultiGrid {
    /// Create an empty `width` × `height` grid.
    ///
    /// Dimensions are validated by `FestivalConfig::validate`; a zero-sized
    /// grid is representable but rejects every position.
    pub fn new(width: u32, height: u32, boundary: Boundary) -> Self {
        Self {
            width,
            height,
            boundary,
            cells: vec![Vec::new(); width as usize * height as usize],
            positions: FxHashMap::default(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// `true` if `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn check(&self, pos: GridPos) -> GridResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }

    #[inline]
    fn cell_index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// The cell `(dx, dy)` away from `pos`.
    ///
    /// On a torus the offset wraps; on a bounded grid `None` is returned
    /// when the target falls outside.
    pub fn offset(&self, pos: GridPos, dx: i64, dy: i64) -> Option<GridPos> {
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        let (w, h) = (self.width as i64, self.height as i64);
        match self.boundary {
            Boundary::Torus => {
                if w == 0 || h == 0 {
                    return None;
                }
                Some(GridPos::new(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32))
            }
            Boundary::Bounded => {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    Some(GridPos::new(x as u32, y as u32))
                } else {
                    None
                }
            }
        }
    }

    /// Per-axis separation, taking the short way round on a torus.
    fn axis_gap(&self, a: u32, b: u32, size: u32) -> u32 {
        let d = a.abs_diff(b);
        match self.boundary {
            Boundary::Torus   => d.min(size - d),
            Boundary::Bounded => d,
        }
    }

    /// `true` if `b` is `a` itself or one of its eight surrounding cells.
    pub fn are_adjacent(&self, a: GridPos, b: GridPos) -> bool {
        self.axis_gap(a.x, b.x, self.width) <= 1 && self.axis_gap(a.y, b.y, self.height) <= 1
    }

    /// Cells within `radius` of `pos`.
    ///
    /// `moore = true` uses the square (Chebyshev) neighborhood, otherwise
    /// the diamond (von Neumann) one.  Cells are returned in row-major
    /// offset order, each at most once even when a small torus folds the
    /// neighborhood onto itself.
    pub fn neighborhood(
        &self,
        pos:            GridPos,
        moore:          bool,
        include_center: bool,
        radius:         u32,
    ) -> Vec<GridPos> {
        let r = radius as i64;
        let mut out = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                if !moore && dx.abs() + dy.abs() > r {
                    continue;
                }
                if let Some(cell) = self.offset(pos, dx, dy) {
                    if !include_center && cell == pos {
                        continue;
                    }
                    if !out.contains(&cell) {
                        out.push(cell);
                    }
                }
            }
        }
        out
    }

    /// Agents occupying the neighborhood of `pos`.
    pub fn neighbors(
        &self,
        pos:            GridPos,
        moore:          bool,
        include_center: bool,
        radius:         u32,
    ) -> Vec<AgentRef> {
        self.neighborhood(pos, moore, include_center, radius)
            .into_iter()
            .flat_map(|cell| self.contents(cell).iter().copied())
            .collect()
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Put an agent that is not yet on the grid at `pos`.
    pub fn place(&mut self, agent: AgentRef, pos: GridPos) -> GridResult<()> {
        self.check(pos)?;
        if self.positions.contains_key(&agent) {
            return Err(GridError::AlreadyPlaced(agent));
        }
        let idx = self.cell_index(pos);
        self.cells[idx].push(agent);
        self.positions.insert(agent, pos);
        Ok(())
    }

    /// Move a placed agent to `to`, which must be its current cell or one
    /// of the eight cells around it.
    pub fn move_to(&mut self, agent: AgentRef, to: GridPos) -> GridResult<()> {
        self.check(to)?;
        let from = self.position_of(agent).ok_or(GridError::NotPlaced(agent))?;
        if from == to {
            return Ok(());
        }
        if !self.are_adjacent(from, to) {
            return Err(GridError::NotAdjacent { agent, from, to });
        }
        self.detach(agent, from);
        let idx = self.cell_index(to);
        self.cells[idx].push(agent);
        self.positions.insert(agent, to);
        Ok(())
    }

    /// Take an agent off the grid, returning the cell it occupied.
    pub fn remove(&mut self, agent: AgentRef) -> GridResult<GridPos> {
        let pos = self.positions.remove(&agent).ok_or(GridError::NotPlaced(agent))?;
        self.detach(agent, pos);
        Ok(pos)
    }

    fn detach(&mut self, agent: AgentRef, pos: GridPos) {
        let idx = self.cell_index(pos);
        self.cells[idx].retain(|&a| a != agent);
    }

    /// Current cell of `agent`, or `None` if it is not on the grid.
    #[inline]
    pub fn position_of(&self, agent: AgentRef) -> Option<GridPos> {
        self.positions.get(&agent).copied()
    }

    /// Occupants of `pos` in placement order.  Empty for out-of-grid cells.
    pub fn contents(&self, pos: GridPos) -> &[AgentRef] {
        if self.contains(pos) {
            &self.cells[self.cell_index(pos)]
        } else {
            &[]
        }
    }

    pub fn is_cell_empty(&self, pos: GridPos) -> bool {
        self.contents(pos).is_empty()
    }

    /// Number of agents currently on the grid.
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    /// Every cell with its occupants, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridPos, &[AgentRef])> + '_ {
        let w = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, occupants)| {
            let i = i as u32;
            (GridPos::new(i % w, i / w), occupants.as_slice())
        })
    }
}
