use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::format::parse_attributes;
use crate::model::TodoList;

/// Applies style tokens to a primary's format.
///
/// All tokens are validated before any is applied: an invalid token leaves the
/// existing format and the changed flag untouched.
pub fn run<I: AsRef<str>>(list: &mut TodoList, primary: &str, tokens: &[I]) -> Result<CmdResult> {
    let attributes = parse_attributes(tokens)?;

    let entry = list
        .get_mut(primary)
        .ok_or_else(|| TodoError::UnknownPrimary(primary.to_string()))?;

    if attributes.is_empty() {
        return Ok(CmdResult::default());
    }

    let format = entry.format.get_or_insert_with(Default::default);
    for attribute in attributes {
        format.apply_attribute(attribute);
    }

    list.mark_changed();
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Updated format of {:?}",
        primary
    ))))
}
