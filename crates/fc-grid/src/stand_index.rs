//! R-tree index for nearest-stand queries.
//!
//! Stands never move, so the tree is bulk-loaded once at model construction.
//! Distances are plain Euclidean on raw cell coordinates; the torus wrap is
//! ignored, matching how visitors walk (straight toward the stand, never
//! across the edge).

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use fc_core::{GridPos, StandId};

/// Entry stored in the R-tree: a stand's cell as an `[x, y]` point.
#[derive(Clone)]
struct StandEntry {
    point: [f32; 2],
    id:    StandId,
}

impl RTreeObject for StandEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StandEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

fn to_point(pos: GridPos) -> [f32; 2] {
    [pos.x as f32, pos.y as f32]
}

/// Spatial index over stand positions.
pub struct StandIndex {
    tree:      RTree<StandEntry>,
    positions: Vec<GridPos>,
}

impl StandIndex {
    /// Build from stand positions in `StandId` order.
    pub fn new(positions: &[GridPos]) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| StandEntry { point: to_point(pos), id: StandId(i as u32) })
            .collect();
        Self { tree: RTree::bulk_load(entries), positions: positions.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `stand`, or `None` for an unknown id.
    pub fn position(&self, stand: StandId) -> Option<GridPos> {
        self.positions.get(stand.index()).copied()
    }

    /// The stand closest to `pos` and its position.
    ///
    /// Among equidistant stands the lowest `StandId` wins, i.e. the one
    /// listed first in the configuration.  Returns `None` only when there
    /// are no stands.
    pub fn nearest(&self, pos: GridPos) -> Option<(StandId, GridPos)> {
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(&to_point(pos));
        let (first, best) = candidates.next()?;
        let id = candidates
            .take_while(|&(_, d)| d == best)
            .map(|(entry, _)| entry.id)
            .fold(first.id, |lowest, id| lowest.min(id));
        Some((id, self.positions[id.index()]))
    }
}
