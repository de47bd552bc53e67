//! Nearest-neighbor index over a static 2D point set using an R*-tree.
//!
//! The bridge search asks, for every hole point, which outer point is
//! closest. The index is bulk-loaded once from the outer contour and then
//! only queried.

use keyhole_core::Point;
use rstar::primitives::GeomWithData;
use rstar::RTree;

/// An indexed point: coordinates plus its position in the source sequence.
type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// Result of a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the point in the sequence the index was built from.
    pub index: usize,
    /// Coordinates of the point.
    pub point: Point,
    /// Squared Euclidean distance to the query.
    pub distance_sq: f64,
}

/// Static 2D point index answering exact 1-nearest-neighbor queries.
#[derive(Debug)]
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl PointIndex {
    /// Bulk-loads an index over `points`, remembering each point's position.
    pub fn build(points: &[Point]) -> Self {
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| GeomWithData::new([x, y], i))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns the number of indexed points.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if the index holds no points.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds the indexed point closest to `query`, or `None` if the index is empty.
    pub fn nearest(&self, query: Point) -> Option<Neighbor> {
        self.tree.nearest_neighbor(&[query.0, query.1]).map(|entry| {
            let [x, y] = *entry.geom();
            let dx = x - query.0;
            let dy = y - query.1;
            Neighbor {
                index: entry.data,
                point: (x, y),
                distance_sq: dx * dx + dy * dy,
            }
        })
    }
}
