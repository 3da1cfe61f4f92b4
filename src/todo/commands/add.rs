use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoList;

/// Adds a primary, or a secondary under a primary (creating the primary if needed).
///
/// A bare primary that already exists is rejected; so is a secondary that is
/// already present under its primary.
pub fn run(list: &mut TodoList, primary: &str, secondary: Option<&str>) -> Result<CmdResult> {
    if primary.is_empty() {
        return Err(TodoError::EmptyName);
    }

    let created = !list.items().contains_key(primary);

    let message = match secondary {
        None if !created => return Err(TodoError::DuplicatePrimary(primary.to_string())),
        None => {
            list.items_mut().insert(primary.to_string(), Default::default());
            format!("Added {:?}", primary)
        }
        Some(secondary) => {
            let entry = list.items_mut().entry(primary.to_string()).or_default();
            if !entry.secondaries.insert(secondary.to_string()) {
                return Err(TodoError::DuplicateSecondary(
                    primary.to_string(),
                    secondary.to_string(),
                ));
            }
            format!("Added {:?} under {:?}", secondary, primary)
        }
    };

    list.mark_changed();
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}
