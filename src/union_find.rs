/// Union-Find (Disjoint Sets) over a fixed universe of element ids
///
/// `PercolationGrid` only talks to connectivity through the `DisjointSet` trait,
/// so any structure with the same contract can be plugged in through its type parameter.
pub trait DisjointSet {
    /// Create a partition of `len` singletons `0..len`
    fn with_len(len: usize) -> Self;

    /// Size of the universe
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical root of the component containing `p`
    fn find(&mut self, p: usize) -> usize;

    /// Merge the components containing `p` and `q`
    fn union(&mut self, p: usize, q: usize);

    /// Check if two elements are in the same set
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

/// Weighted quick-union with path compression
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            count: n,
        }
    }

    /// Number of disjoint components
    pub fn component_count(&self) -> usize {
        self.count
    }
}

impl DisjointSet for UnionFind {
    fn with_len(len: usize) -> Self {
        UnionFind::new(len)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    /// Find the root of element p with path compression
    fn find(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point every node on the walked path straight at the root
        let mut current = p;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return;
        }

        // Union by size
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }
}
