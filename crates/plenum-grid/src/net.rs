//! Connection nets.
//!
//! Any pixel colour outside the palette declares a connection net: all
//! cells sharing that colour behave as a single channel junction, and a
//! fill reaching one member continues from every member. Nets are how
//! a two-dimensional machine crosses signals without a physical duct.

use indexmap::IndexMap;
use plenum_core::{NetId, Point};
use smallvec::SmallVec;

/// One net: the cells joined by one off-palette colour.
///
/// Members keep the order they were enrolled in, which for decoded
/// images is scan order. Fills walk members in that order, so it is
/// part of the deterministic step contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionNet {
    key: u32,
    points: SmallVec<[Point; 4]>,
}

impl ConnectionNet {
    /// The ARGB colour that declared this net.
    #[must_use]
    pub fn key(&self) -> u32 {
        self.key
    }

    /// Member cells in enrolment order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Member count. A single-member net is legal and simply inert.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a net with no members yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All nets of one machine, with a per-cell membership table.
///
/// Identifiers are dense: the first colour encountered becomes
/// [`NetId`] 0, the next new colour 1, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetRegistry {
    nets: Vec<ConnectionNet>,
    by_key: IndexMap<u32, NetId>,
    membership: Vec<Option<NetId>>,
}

impl NetRegistry {
    /// An empty registry for a grid of `cell_count` cells.
    #[must_use]
    pub fn new(cell_count: usize) -> NetRegistry {
        NetRegistry {
            nets: Vec::new(),
            by_key: IndexMap::new(),
            membership: vec![None; cell_count],
        }
    }

    /// Adds the cell at `at` to the net keyed by `key`, minting the net
    /// on first sight of the key.
    ///
    /// `cell_index` is the cell's row-major index in the owning grid.
    ///
    /// # Panics
    ///
    /// Panics when `cell_index` is outside the cell count the registry
    /// was built for.
    pub fn enroll(&mut self, key: u32, at: Point, cell_index: usize) -> NetId {
        let id = match self.by_key.get(&key) {
            Some(id) => *id,
            None => {
                let id = NetId(self.nets.len() as u32);
                self.nets.push(ConnectionNet {
                    key,
                    points: SmallVec::new(),
                });
                self.by_key.insert(key, id);
                id
            }
        };
        self.nets[id.0 as usize].points.push(at);
        self.membership[cell_index] = Some(id);
        id
    }

    /// The net the cell at `cell_index` belongs to, if any.
    #[must_use]
    pub fn net_at(&self, cell_index: usize) -> Option<NetId> {
        self.membership.get(cell_index).copied().flatten()
    }

    /// The net with identifier `id`, or `None` for a foreign id.
    #[must_use]
    pub fn net(&self, id: NetId) -> Option<&ConnectionNet> {
        self.nets.get(id.0 as usize)
    }

    /// The net declared by colour `key`, if that colour appeared.
    #[must_use]
    pub fn id_for_key(&self, key: u32) -> Option<NetId> {
        self.by_key.get(&key).copied()
    }

    /// Number of distinct nets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nets.len()
    }

    /// True when no net has been minted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// Cell count of the membership table.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.membership.len()
    }

    /// All nets in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &ConnectionNet> {
        self.nets.iter()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sight_of_a_key_mints_a_net() {
        let mut registry = NetRegistry::new(9);
        let a = registry.enroll(0xFF11_2233, Point::new(0, 0), 0);
        let b = registry.enroll(0xFF44_5566, Point::new(2, 0), 2);
        assert_eq!(a, NetId(0));
        assert_eq!(b, NetId(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn repeat_keys_extend_the_same_net() {
        let mut registry = NetRegistry::new(9);
        let first = registry.enroll(0xFFAB_CDEF, Point::new(1, 0), 1);
        let second = registry.enroll(0xFFAB_CDEF, Point::new(1, 2), 7);
        assert_eq!(first, second);

        let net = registry.net(first).unwrap();
        assert_eq!(net.key(), 0xFFAB_CDEF);
        assert_eq!(net.points(), &[Point::new(1, 0), Point::new(1, 2)]);
    }

    #[test]
    fn membership_maps_cells_back_to_nets() {
        let mut registry = NetRegistry::new(4);
        let id = registry.enroll(0xFF01_0101, Point::new(3, 0), 3);
        assert_eq!(registry.net_at(3), Some(id));
        assert_eq!(registry.net_at(0), None);
        assert_eq!(registry.net_at(99), None);
    }

    #[test]
    fn lookups_by_key_and_foreign_ids() {
        let mut registry = NetRegistry::new(2);
        let id = registry.enroll(0xFF99_0000, Point::new(0, 0), 0);
        assert_eq!(registry.id_for_key(0xFF99_0000), Some(id));
        assert_eq!(registry.id_for_key(0xFF00_0099), None);
        assert!(registry.net(NetId(7)).is_none());
    }

    #[test]
    fn single_member_nets_are_legal() {
        let mut registry = NetRegistry::new(1);
        let id = registry.enroll(0xFF77_7777, Point::new(0, 0), 0);
        assert_eq!(registry.net(id).unwrap().len(), 1);
    }
}
