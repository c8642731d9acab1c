use crate::domain::model::Partition;

/// Renders a partition as a flat text listing: a `"{prefix} {id}:"` header
/// per group followed by one `"- {member}"` line per member, groups
/// separated by a blank line.
pub fn render(partition: &Partition, prefix: &str) -> String {
    partition
        .groups
        .iter()
        .map(|group| {
            let members = group
                .members
                .iter()
                .map(|member| format!("- {}", member))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{} {}:\n{}", prefix, group.id, members)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
