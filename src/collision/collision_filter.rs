use bitflags::bitflags;

use crate::error::PhysicsError;
use crate::Result;

/// Number of distinct collision groups a body can belong to
pub const MAX_COLLISION_GROUPS: u32 = 64;

bitflags! {
    /// The set of collision groups a body belongs to. Two bodies only
    /// interact when their sets intersect.
    ///
    /// Groups are small integers; the named constants cover the ones the
    /// level presets use and any other index in `0..64` is valid.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
    pub struct CollisionGroups: u64 {
        /// Group 0, conventionally bodies kept inside the arena
        const GROUP0 = 1 << 0;

        /// Group 1, the default group for new bodies
        const GROUP1 = 1 << 1;

        /// Group 2
        const GROUP2 = 1 << 2;

        /// Group 3
        const GROUP3 = 1 << 3;
    }
}

impl CollisionGroups {
    /// The single group with the given index
    pub fn group(index: u32) -> Result<Self> {
        if index >= MAX_COLLISION_GROUPS {
            return Err(PhysicsError::InvalidCollisionGroup(index));
        }
        Ok(Self::from_bits_retain(1u64 << index))
    }

    /// Builds a set from group indices, rejecting indices out of range
    pub fn from_indices(indices: &[u32]) -> Result<Self> {
        indices
            .iter()
            .try_fold(Self::empty(), |groups, &index| Ok(groups | Self::group(index)?))
    }

    /// Returns true if the set contains the group with the given index
    pub fn contains_index(&self, index: u32) -> bool {
        index < MAX_COLLISION_GROUPS && self.bits() & (1u64 << index) != 0
    }

    /// The group indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        (0..MAX_COLLISION_GROUPS).filter(move |&index| self.contains_index(index))
    }

    /// Returns true if the two sets have at least one group in common
    #[inline]
    pub fn shares_group(&self, other: &Self) -> bool {
        self.intersects(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        let groups = CollisionGroups::from_indices(&[0, 1, 40]).unwrap();
        assert_eq!(groups.indices().collect::<Vec<_>>(), vec![0, 1, 40]);
        assert!(groups.contains(CollisionGroups::GROUP0 | CollisionGroups::GROUP1));
    }

    #[test]
    fn out_of_range_group_is_rejected() {
        match CollisionGroups::from_indices(&[1, 64]) {
            Err(PhysicsError::InvalidCollisionGroup(64)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn disjoint_sets_do_not_share() {
        let a = CollisionGroups::GROUP0;
        let b = CollisionGroups::GROUP1 | CollisionGroups::GROUP2;
        assert!(!a.shares_group(&b));
        assert!(b.shares_group(&CollisionGroups::GROUP2));
        assert!(!CollisionGroups::empty().shares_group(&CollisionGroups::empty()));
    }
}
