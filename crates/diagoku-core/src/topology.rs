//! Derived unit/peer structure of the board.

use tinyvec::ArrayVec;

use crate::{Cell, CellSet, Unit};

/// The units containing one cell.
///
/// Holds 3 units for an ordinary cell, 4 for a diagonal cell, and 5 for the
/// centre cell, which lies on both diagonals.
pub type UnitList = ArrayVec<[Unit; 5]>;

/// The fixed constraint structure of the board.
///
/// For every cell this records the units containing it and its peer set (all
/// other cells sharing at least one unit with it, deduplicated across units).
/// The topology is a pure function of the board geometry: it is computed once
/// per solve and shared read-only by every strategy and search branch.
///
/// # Examples
///
/// ```
/// use diagoku_core::{Cell, Topology};
///
/// let topology = Topology::new();
/// // An ordinary cell has 20 peers; a diagonal cell picks up 6 more.
/// assert_eq!(topology.peers_of(Cell::new(0, 1)).len(), 20);
/// assert_eq!(topology.peers_of(Cell::new(0, 0)).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    units_of: [UnitList; 81],
    peers_of: [CellSet; 81],
}

impl Topology {
    /// Computes the topology from the 29 units.
    #[must_use]
    pub fn new() -> Self {
        let mut units_of = [UnitList::new(); 81];
        for unit in Unit::ALL {
            for cell in unit.cells() {
                units_of[cell.index()].push(unit);
            }
        }

        let mut peers_of = [CellSet::EMPTY; 81];
        for cell in Cell::ALL {
            let peers = &mut peers_of[cell.index()];
            for unit in units_of[cell.index()] {
                *peers |= unit.positions();
            }
            peers.remove(cell);
        }

        Self { units_of, peers_of }
    }

    /// Returns the units containing `cell`.
    #[inline]
    #[must_use]
    pub fn units_of(&self, cell: Cell) -> UnitList {
        self.units_of[cell.index()]
    }

    /// Returns every other cell sharing a unit with `cell`.
    #[inline]
    #[must_use]
    pub fn peers_of(&self, cell: Cell) -> CellSet {
        self.peers_of[cell.index()]
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_membership_counts() {
        let topology = Topology::new();

        // Ordinary cell: row, column, box.
        assert_eq!(topology.units_of(Cell::new(0, 1)).len(), 3);
        // Diagonal cell: row, column, box, one diagonal.
        assert_eq!(topology.units_of(Cell::new(0, 0)).len(), 4);
        assert_eq!(topology.units_of(Cell::new(0, 8)).len(), 4);
        // Centre cell lies on both diagonals.
        assert_eq!(topology.units_of(Cell::new(4, 4)).len(), 5);
    }

    #[test]
    fn test_units_of_contains_the_cell() {
        let topology = Topology::new();
        for cell in Cell::ALL {
            for unit in topology.units_of(cell) {
                assert!(unit.contains(cell), "{unit} listed for {cell}");
            }
        }
    }

    #[test]
    fn test_peer_counts() {
        let topology = Topology::new();

        // 8 row + 8 column + 4 box peers.
        assert_eq!(topology.peers_of(Cell::new(0, 1)).len(), 20);
        // A corner also sees the 6 diagonal cells outside its row/column/box.
        assert_eq!(topology.peers_of(Cell::new(0, 0)).len(), 26);
        assert_eq!(topology.peers_of(Cell::new(8, 0)).len(), 26);
        // The centre sees 6 extra cells per diagonal.
        assert_eq!(topology.peers_of(Cell::new(4, 4)).len(), 32);
    }

    #[test]
    fn test_peers_exclude_self_and_are_symmetric() {
        let topology = Topology::new();
        for cell in Cell::ALL {
            let peers = topology.peers_of(cell);
            assert!(!peers.contains(cell));
            for peer in peers {
                assert!(
                    topology.peers_of(peer).contains(cell),
                    "{cell} and {peer} should be mutual peers"
                );
            }
        }
    }
}
