use crate::squares::SquareSet;

/// Which integers may legally follow which others in a path.
///
/// For every vertex v in 1..=n the map holds the ascending list of the u
/// whose sum with v is a perfect square. The relation is symmetric: the
/// pair sum is commutative, so u appears under v exactly when v appears
/// under u.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    domain: u32,
    // index 0 is unused and stays empty
    neighbors: Vec<Vec<u32>>,
}

impl AdjacencyMap {
    /// Build the map for the domain 1..=n.
    ///
    /// Scans every unordered pair (i, j) with i < j once and records the
    /// pair in both directions when i + j is a perfect square. O(n²) pair
    /// tests against the precomputed square table.
    pub fn build(n: u32) -> Self {
        let squares = SquareSet::for_domain(n);
        let mut neighbors = vec![Vec::new(); n as usize + 1];

        for i in 1..=n {
            for j in (i + 1)..=n {
                if squares.contains(i + j) {
                    neighbors[i as usize].push(j);
                    neighbors[j as usize].push(i);
                }
            }
        }

        AdjacencyMap {
            domain: n,
            neighbors,
        }
    }

    /// Size of the integer domain this map was built for.
    pub fn domain(&self) -> u32 {
        self.domain
    }

    /// Neighbors of `v` in ascending order.
    ///
    /// # Panics
    /// Panics if `v` is outside 1..=domain.
    pub fn neighbors_of(&self, v: u32) -> &[u32] {
        assert!(
            v >= 1 && v <= self.domain,
            "vertex {v} outside domain 1..={}",
            self.domain
        );
        &self.neighbors[v as usize]
    }

    /// Iterate `(vertex, neighbors)` over the whole domain in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.neighbors
            .iter()
            .enumerate()
            .skip(1)
            .map(|(v, ns)| (v as u32, ns.as_slice()))
    }
}
