use crate::commands::{CmdResult, ListedPrimary};
use crate::error::Result;
use crate::model::TodoList;

const SECONDARY_INDENT: &str = "  ";

/// Collects every primary with its secondaries, both in lexicographic order.
pub fn run(list: &TodoList) -> Result<CmdResult> {
    // BTreeMap/BTreeSet iteration is already sorted
    let listed = list
        .items()
        .iter()
        .map(|(name, primary)| ListedPrimary {
            name: name.clone(),
            format: primary.format,
            secondaries: primary.secondaries.iter().cloned().collect(),
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

/// Renders a listing as output lines: each primary through its format,
/// followed by its secondaries indented by two spaces.
pub fn render_lines(listed: &[ListedPrimary]) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        listed.len() + listed.iter().map(|p| p.secondaries.len()).sum::<usize>(),
    );
    for primary in listed {
        lines.push(match &primary.format {
            Some(format) => format.apply(&primary.name),
            None => primary.name.clone(),
        });
        for secondary in &primary.secondaries {
            lines.push(format!("{}{}", SECONDARY_INDENT, secondary));
        }
    }
    lines
}
