use rand::seq::SliceRandom;

use crate::domain::model::{DistributionMode, Group, Participant, Partition};
use crate::utils::error::{GroupError, Result};

/// Shuffles the participants uniformly and cuts them into groups according
/// to the distribution mode. Group ids are assigned 1..=N in creation
/// order; naming them is a presentation concern.
///
/// The shuffle is Fisher-Yates via `SliceRandom::shuffle`, which gives every
/// permutation non-zero probability. A comparator-based "random sort" does
/// not and must not be used here.
pub fn partition(
    participants: &[Participant],
    group_size: usize,
    mode: DistributionMode,
) -> Result<Partition> {
    if group_size == 0 {
        return Err(GroupError::InvalidConfiguration {
            message: "group size must be greater than 0".to_string(),
        });
    }
    if participants.is_empty() {
        return Err(GroupError::EmptyInput);
    }

    let mut shuffled = participants.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());

    let n = shuffled.len();
    let total_groups = n.div_ceil(group_size);

    let groups = match mode {
        DistributionMode::FixedChunk => fixed_chunk(&shuffled, group_size),
        DistributionMode::Balanced => balanced(&shuffled, total_groups),
        DistributionMode::RandomExtras => random_extras(shuffled, total_groups),
    };

    tracing::debug!(
        participants = n,
        groups = groups.len(),
        ?mode,
        "partition complete"
    );

    Ok(Partition {
        groups,
        group_size,
        mode,
    })
}

/// Estimated group count and remainder for a prospective run, without
/// partitioning. `None` when the group size is zero.
pub fn estimate(participant_count: usize, group_size: usize) -> Option<(usize, usize)> {
    if group_size == 0 {
        return None;
    }
    Some((
        participant_count.div_ceil(group_size),
        participant_count % group_size,
    ))
}

fn fixed_chunk(shuffled: &[Participant], group_size: usize) -> Vec<Group> {
    shuffled
        .chunks(group_size)
        .enumerate()
        .map(|(i, members)| Group {
            id: (i + 1) as u32,
            members: members.to_vec(),
        })
        .collect()
}

fn balanced(shuffled: &[Participant], total_groups: usize) -> Vec<Group> {
    let n = shuffled.len();
    let base = n / total_groups;
    let extra = n % total_groups;

    let mut groups = Vec::with_capacity(total_groups);
    let mut offset = 0;
    for i in 0..total_groups {
        let size = if i < extra { base + 1 } else { base };
        groups.push(Group {
            id: (i + 1) as u32,
            members: shuffled[offset..offset + size].to_vec(),
        });
        offset += size;
    }
    groups
}

fn random_extras(shuffled: Vec<Participant>, total_groups: usize) -> Vec<Group> {
    let mut groups: Vec<Group> = (1..=total_groups)
        .map(|id| Group {
            id: id as u32,
            members: Vec::new(),
        })
        .collect();

    for (i, participant) in shuffled.into_iter().enumerate() {
        groups[i % total_groups].members.push(participant);
    }
    groups
}
