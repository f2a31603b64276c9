//! Strategies for pairing odd-degree nodes.
//!
//! A strategy sees only a symmetric [`CostMatrix`] over node indices `0..n`
//! (index order = ascending node order) and returns disjoint index pairs
//! covering every index. Unreachable pairs carry an infinite cost.

use crate::error::{Error, Result};
use crate::graph::Weight;

/// Default ceiling on odd nodes for exhaustive pairing (105 pairings).
pub const DEFAULT_MAX_ODD_NODES: usize = 8;

/// Symmetric pair-cost table over `size` nodes.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Weight>,
}

impl CostMatrix {
    /// Creates a matrix with every off-diagonal cost infinite.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut costs = vec![Weight::INFINITY; size * size];
        for i in 0..size {
            costs[i * size + i] = 0.0;
        }
        Self { size, costs }
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the cost of pair `(i, j)` (and `(j, i)`).
    pub fn set(&mut self, i: usize, j: usize, cost: Weight) {
        self.costs[i * self.size + j] = cost;
        self.costs[j * self.size + i] = cost;
    }

    /// Returns the cost of pair `(i, j)`.
    #[must_use]
    pub fn cost(&self, i: usize, j: usize) -> Weight {
        self.costs[i * self.size + j]
    }

    /// Total cost of a pairing.
    #[must_use]
    pub fn pairing_cost(&self, pairs: &[(usize, usize)]) -> Weight {
        pairs.iter().map(|&(i, j)| self.cost(i, j)).sum()
    }
}

/// Chooses which odd nodes get joined by a duplicated shortest path.
pub trait PairingStrategy: std::fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Largest odd-node count the strategy accepts, if bounded.
    ///
    /// Checked before any path costs are computed.
    fn node_limit(&self) -> Option<usize> {
        None
    }

    /// Returns a perfect pairing of `0..costs.size()`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidGraph` for an odd size; strategy-specific limits
    /// otherwise.
    fn best_pairing(&self, costs: &CostMatrix) -> Result<Vec<(usize, usize)>>;
}

fn ensure_even(size: usize) -> Result<()> {
    if size % 2 == 1 {
        return Err(Error::InvalidGraph(format!(
            "cannot pair an odd number ({size}) of odd-degree nodes"
        )));
    }
    Ok(())
}

/// Number of perfect pairings of `n` nodes: `(n - 1)!!`, or `None` on
/// overflow or odd `n`.
#[must_use]
pub fn pairing_count(n: usize) -> Option<u128> {
    if n % 2 == 1 {
        return None;
    }
    (1..n)
        .step_by(2)
        .try_fold(1u128, |acc, k| acc.checked_mul(k as u128))
}

/// Exhaustive enumeration of all perfect pairings.
///
/// `2k` nodes yield `(2k - 1)!!` pairings, so the strategy refuses more than
/// `max_odd_nodes` nodes. On equal totals the first pairing enumerated wins;
/// enumeration pairs the lowest remaining index with each later index in
/// turn.
#[derive(Debug, Clone)]
pub struct BruteForcePairing {
    max_odd_nodes: usize,
}

impl Default for BruteForcePairing {
    fn default() -> Self {
        Self {
            max_odd_nodes: DEFAULT_MAX_ODD_NODES,
        }
    }
}

impl BruteForcePairing {
    /// Creates the strategy with a custom ceiling.
    #[must_use]
    pub fn new(max_odd_nodes: usize) -> Self {
        Self { max_odd_nodes }
    }

    /// Returns the ceiling.
    #[must_use]
    pub fn max_odd_nodes(&self) -> usize {
        self.max_odd_nodes
    }

    fn search(
        costs: &CostMatrix,
        remaining: &[usize],
        partial: &mut Vec<(usize, usize)>,
        partial_cost: Weight,
        best: &mut Option<(Weight, Vec<(usize, usize)>)>,
    ) {
        // Costs are non-negative: a partial sum already at the best total
        // cannot beat it.
        if let Some((best_cost, _)) = best {
            if partial_cost >= *best_cost {
                return;
            }
        }

        let Some((&first, rest)) = remaining.split_first() else {
            *best = Some((partial_cost, partial.clone()));
            return;
        };

        for (pos, &other) in rest.iter().enumerate() {
            let leftovers: Vec<usize> = rest
                .iter()
                .enumerate()
                .filter(|&(p, _)| p != pos)
                .map(|(_, &idx)| idx)
                .collect();
            partial.push((first, other));
            Self::search(
                costs,
                &leftovers,
                partial,
                partial_cost + costs.cost(first, other),
                best,
            );
            partial.pop();
        }
    }
}

impl PairingStrategy for BruteForcePairing {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn node_limit(&self) -> Option<usize> {
        Some(self.max_odd_nodes)
    }

    fn best_pairing(&self, costs: &CostMatrix) -> Result<Vec<(usize, usize)>> {
        let size = costs.size();
        ensure_even(size)?;
        if size > self.max_odd_nodes {
            return Err(Error::PairingLimitExceeded {
                odd_nodes: size,
                limit: self.max_odd_nodes,
            });
        }

        let indices: Vec<usize> = (0..size).collect();
        let mut best = None;
        Self::search(costs, &indices, &mut Vec::new(), 0.0, &mut best);
        Ok(best.map(|(_, pairs)| pairs).unwrap_or_default())
    }
}

/// Greedy approximation: repeatedly takes the cheapest pair whose nodes are
/// both still unpaired.
///
/// Runs in `O(n² log n)` with no ceiling, but may miss the optimum: an early
/// cheap pair can force an expensive last pair.
#[derive(Debug, Clone, Default)]
pub struct GreedyPairing;

impl PairingStrategy for GreedyPairing {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn best_pairing(&self, costs: &CostMatrix) -> Result<Vec<(usize, usize)>> {
        let size = costs.size();
        ensure_even(size)?;

        let mut candidates: Vec<(usize, usize)> = (0..size)
            .flat_map(|i| ((i + 1)..size).map(move |j| (i, j)))
            .collect();
        candidates.sort_by(|a, b| costs.cost(a.0, a.1).total_cmp(&costs.cost(b.0, b.1)));

        let mut paired = vec![false; size];
        let mut pairs = Vec::with_capacity(size / 2);
        for (i, j) in candidates {
            if paired[i] || paired[j] {
                continue;
            }
            paired[i] = true;
            paired[j] = true;
            pairs.push((i, j));
            if pairs.len() == size / 2 {
                break;
            }
        }
        Ok(pairs)
    }
}
