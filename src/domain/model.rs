use serde::{Deserialize, Serialize};

/// One entrant to be grouped. Either a user-supplied name or a synthesized
/// label like "Person 3". Duplicates are permitted and tracked as distinct
/// entries.
pub type Participant = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub members: Vec<Participant>,
}

/// Policy for spreading remainder participants across groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DistributionMode {
    /// Consecutive runs of exactly `group_size`, last group holds the rest.
    FixedChunk,
    /// Front-loaded `base + 1` groups so sizes differ by at most 1.
    Balanced,
    /// Round-robin assignment over `total_groups` buckets.
    RandomExtras,
}

/// The full result of one generation run. Replaced wholesale on reshuffle,
/// edited in place by reassignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub groups: Vec<Group>,
    pub group_size: usize,
    pub mode: DistributionMode,
}

impl Partition {
    pub fn group(&self, id: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: u32) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn total_members(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}
