//! Disjoint-set union (union-find) over dense vertex indices.
//!
//! Kruskal's builder tracks component membership with this structure while
//! scanning edges in weight order. `find` applies full path compression and
//! `union` merges by rank, which together keep both operations near constant
//! time in the amortized sense.

use crate::{
    error::{GraphError, Result},
    graph::VertexIndex,
};

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSetUnion;
///
/// let mut sets = DisjointSetUnion::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.same_set(0, 1)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: Vec<VertexIndex>,
    rank: Vec<u8>,
    components: usize,
}
// Invariant: parent.len() == rank.len(), and following parent links from any
// index reaches a self-parented root.

impl DisjointSetUnion {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Finds the representative of `element`'s set.
    ///
    /// Every node on the path from `element` to its root is re-pointed
    /// directly at the root.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `element >= self.len()`.
    pub fn find(&mut self, element: VertexIndex) -> Result<VertexIndex> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// set. The root of lower rank is attached beneath the other; on equal
    /// ranks `left`'s root is kept and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when either index is out of range.
    pub fn union(&mut self, left: VertexIndex, right: VertexIndex) -> Result<bool> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Reports whether `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when either index is out of range.
    pub fn same_set(&mut self, left: VertexIndex, right: VertexIndex) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: VertexIndex) -> Result<()> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: element,
                vertex_count: self.parent.len(),
            })
        }
    }

    /// Builds a single set whose parent links form the chain
    /// `0 -> 1 -> ... -> len - 1`, which union by rank never produces.
    #[cfg(test)]
    fn chain(len: usize) -> Self {
        Self {
            parent: (0..len).map(|element| (element + 1).min(len - 1)).collect(),
            rank: vec![0; len],
            components: 1,
        }
    }

    #[cfg(test)]
    fn parent_of(&self, element: VertexIndex) -> VertexIndex {
        self.parent[element]
    }

    #[cfg(test)]
    fn rank_of(&self, element: VertexIndex) -> u8 {
        self.rank[element]
    }
}
