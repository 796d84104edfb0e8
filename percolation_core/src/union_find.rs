//! Disjoint-set (union-find) substrate.
//!
//! The grid model only relies on the [`DisjointSet`] contract:
//! - `union(a, b)` merges the sets holding `a` and `b` (no-op if already merged)
//! - `connected(a, b)` reports whether they share a set
//!
//! [`WeightedQuickUnion`] is the implementation used by default. Linking by
//! size keeps every tree at depth <= log2(M), so `connected` stays O(log M)
//! without needing mutable access.

/// Partition of `0..len` into disjoint sets.
pub trait DisjointSet {
    /// Creates `len` singleton sets.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Returns true if the universe is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// # Panics
    /// If either element is outside `0..len`.
    fn union(&mut self, a: usize, b: usize);

    /// Returns true if `a` and `b` are in the same set.
    ///
    /// # Panics
    /// If either element is outside `0..len`.
    fn connected(&self, a: usize, b: usize) -> bool;
}

/// Weighted quick-union with path halving.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    /// parent[i] == i marks a root
    parent: Vec<usize>,

    /// Tree size, only meaningful at roots
    size: Vec<usize>,

    /// Number of disjoint sets
    components: usize,
}

impl WeightedQuickUnion {
    /// Number of disjoint sets currently in the partition.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Root of `x` without touching the forest.
    fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Root of `x`, halving the path on the way up.
    fn root_halving(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }
}

impl DisjointSet for WeightedQuickUnion {
    fn with_len(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.root_halving(a);
        let rb = self.root_halving(b);
        if ra == rb {
            return;
        }

        // Smaller tree hangs under the larger one
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        self.components -= 1;
    }

    fn connected(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }
}
