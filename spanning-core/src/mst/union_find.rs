//! Disjoint-set forest used by the Borůvka builder.
//!
//! `find` compresses paths in two passes: the first walks to the root, the
//! second rewrites every visited parent to point straight at it. `union`
//! links by rank. On a rank tie the second root is attached beneath the
//! first, so merge direction is a pure function of the call order.

/// A partition of `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use spanning_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1));
/// assert!(!forest.union(1, 0));
/// assert_eq!(forest.find(1), 0);
/// assert_eq!(forest.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `vertex_count` singleton components, each its own root with
    /// rank zero.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    /// Returns the number of elements tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the rank recorded for `node`.
    ///
    /// Rank is only meaningful for roots, where it bounds the tree height.
    ///
    /// # Panics
    ///
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    /// Returns the canonical representative of `node`'s component and points
    /// every node on the traversed path directly at it.
    ///
    /// # Panics
    ///
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    ///
    /// Panics when either id is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without touching the forest when both are already in
    /// the same component.
    ///
    /// # Panics
    ///
    /// Panics when either id is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            self.parent[left] = right;
        } else {
            self.parent[right] = left;
            if left_rank == right_rank {
                self.rank[left] = left_rank.saturating_add(1);
            }
        }

        self.components -= 1;
        true
    }

    #[cfg(test)]
    fn path_length(&self, mut node: usize) -> usize {
        let mut hops = 0;
        while self.parent[node] != node {
            node = self.parent[node];
            hops += 1;
        }
        hops
    }
}
