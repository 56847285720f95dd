/// Union-find (disjoint-set) over the dense ids `0..n`, with full path
/// compression and union by rank.
///
/// Built fresh for each spanning-tree computation; ids are vertex positions in
/// the graph being processed.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `n` singleton sets, each element its own root with rank 0.
    ///
    /// Ids are `u32`, so `n` may not exceed `u32::MAX`.
    pub fn new(n: usize) -> Self {
        debug_assert!(n <= u32::MAX as usize, "{n} elements exceed the u32 id space");
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of the set containing `id`.
    ///
    /// Two passes: walk up to the root, then re-parent every node on the path
    /// directly onto it. No recursion, so long chains cannot overflow the stack.
    pub fn find(&mut self, id: u32) -> u32 {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = id;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`. Returns `false` if they were
    /// already one set.
    ///
    /// The lower-rank root goes under the higher-rank root. On equal ranks
    /// `y`'s root goes under `x`'s root, whose rank is then incremented.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        let (kx, ky) = (self.rank[rx as usize], self.rank[ry as usize]);
        if kx < ky {
            self.parent[rx as usize] = ry;
        } else if kx > ky {
            self.parent[ry as usize] = rx;
        } else {
            self.parent[ry as usize] = rx;
            self.rank[rx as usize] += 1;
        }
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn rank(&self, id: u32) -> u32 {
        self.rank[id as usize]
    }
}
