use crate::commands::CmdResult;
use crate::error::Result;
use crate::format::attribute_names;
use crate::model::TodoList;

/// Which argument is being completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionTarget {
    Primaries,
    /// Secondaries under the given primary
    Secondaries(String),
    Attributes,
}

pub fn run(list: &TodoList, target: &CompletionTarget) -> Result<CmdResult> {
    let suggestions: Vec<String> = match target {
        CompletionTarget::Primaries => list.items().keys().cloned().collect(),
        CompletionTarget::Secondaries(primary) => list
            .get(primary)
            .map(|p| p.secondaries.iter().cloned().collect())
            .unwrap_or_default(),
        CompletionTarget::Attributes => attribute_names().into_iter().map(String::from).collect(),
    };
    Ok(CmdResult::default().with_suggestions(suggestions))
}
