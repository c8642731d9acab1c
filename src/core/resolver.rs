use std::collections::HashSet;

use crate::domain::model::Participant;

/// Where the participant list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Synthesize `"Person 1"… "Person count"`.
    Counted,
    /// One name per line in the raw text.
    Named,
}

/// Builds the ordered participant list from raw input minus exclusions.
/// Purely deterministic; an empty result is not an error at this layer.
///
/// In counted mode an exclusion entry that parses as a 1-based index within
/// `1..=count` is mapped back to its synthesized label before filtering, so
/// "3" excludes "Person 3". This couples exclusion entries to the label
/// format and is known-fragile; keep it as-is and do not extend it. Named
/// mode never interprets numbers.
pub fn resolve(
    mode: ResolveMode,
    count: usize,
    raw_names: &str,
    exclusions: &[String],
) -> Vec<Participant> {
    match mode {
        ResolveMode::Counted => {
            let excluded: HashSet<String> = exclusions
                .iter()
                .map(|entry| match entry.trim().parse::<usize>() {
                    Ok(position) if (1..=count).contains(&position) => {
                        format!("Person {}", position)
                    }
                    _ => entry.clone(),
                })
                .collect();

            (1..=count)
                .map(|i| format!("Person {}", i))
                .filter(|label| !excluded.contains(label))
                .collect()
        }
        ResolveMode::Named => {
            let excluded: HashSet<&str> = exclusions.iter().map(String::as_str).collect();

            raw_names
                .lines()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .filter(|name| !excluded.contains(name))
                .map(String::from)
                .collect()
        }
    }
}
