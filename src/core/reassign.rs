use crate::domain::model::Partition;
use crate::utils::error::{GroupError, Result};

/// Invariant-preserving edits on an existing partition: after every
/// successful operation the membership multiset is unchanged and group ids
/// are stable. No operation reshuffles or renumbers.
pub struct ReassignmentController<'a> {
    partition: &'a mut Partition,
}

impl<'a> ReassignmentController<'a> {
    pub fn new(partition: &'a mut Partition) -> Self {
        Self { partition }
    }

    /// Removes the member at `from_index` and reinserts it at `to_index`
    /// within the same group. Only order changes, never size or membership.
    pub fn reorder_within_group(
        &mut self,
        group_id: u32,
        from_index: usize,
        to_index: usize,
    ) -> Result<()> {
        let group = self
            .partition
            .group_mut(group_id)
            .ok_or(GroupError::UnknownGroup { id: group_id })?;

        let size = group.members.len();
        for index in [from_index, to_index] {
            if index >= size {
                return Err(GroupError::InvalidIndex {
                    group: group_id,
                    index,
                    size,
                });
            }
        }

        if from_index != to_index {
            let member = group.members.remove(from_index);
            group.members.insert(to_index, member);
        }
        Ok(())
    }

    /// Removes the member at `source_index` from the source group and
    /// inserts it at `dest_index` in the destination, where `dest_index` is
    /// measured against the destination's size before insertion. A request
    /// with source equal to destination and identical indices is a legal
    /// identity operation.
    pub fn move_between_groups(
        &mut self,
        source_group_id: u32,
        source_index: usize,
        dest_group_id: u32,
        dest_index: usize,
    ) -> Result<()> {
        if source_group_id == dest_group_id {
            if source_index == dest_index {
                // Identity move; still validate the reference.
                let group = self
                    .partition
                    .group(source_group_id)
                    .ok_or(GroupError::UnknownGroup {
                        id: source_group_id,
                    })?;
                if source_index >= group.members.len() {
                    return Err(GroupError::InvalidIndex {
                        group: source_group_id,
                        index: source_index,
                        size: group.members.len(),
                    });
                }
                return Ok(());
            }
            return self.reorder_within_group(source_group_id, source_index, dest_index);
        }

        // Validate both ends before mutating anything, so a failed request
        // leaves the partition untouched.
        let source_pos = self.position_of(source_group_id)?;
        let dest_pos = self.position_of(dest_group_id)?;

        let source_size = self.partition.groups[source_pos].members.len();
        if source_index >= source_size {
            return Err(GroupError::InvalidIndex {
                group: source_group_id,
                index: source_index,
                size: source_size,
            });
        }

        let dest_size = self.partition.groups[dest_pos].members.len();
        if dest_index > dest_size {
            return Err(GroupError::InvalidIndex {
                group: dest_group_id,
                index: dest_index,
                size: dest_size,
            });
        }

        let member = self.partition.groups[source_pos].members.remove(source_index);
        self.partition.groups[dest_pos]
            .members
            .insert(dest_index, member);
        Ok(())
    }

    fn position_of(&self, group_id: u32) -> Result<usize> {
        self.partition
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or(GroupError::UnknownGroup { id: group_id })
    }
}
