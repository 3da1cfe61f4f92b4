use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::TodoList;

/// Removes a secondary, or an empty primary (together with its format).
pub fn run(list: &mut TodoList, primary: &str, secondary: Option<&str>) -> Result<CmdResult> {
    if list.is_empty() {
        return Err(TodoError::EmptyList);
    }

    let entry = list
        .get_mut(primary)
        .ok_or_else(|| TodoError::UnknownPrimary(primary.to_string()))?;

    let message = match secondary {
        Some(secondary) => {
            if !entry.secondaries.remove(secondary) {
                return Err(TodoError::UnknownSecondary(secondary.to_string()));
            }
            format!("Deleted {:?} from {:?}", secondary, primary)
        }
        None => {
            if !entry.secondaries.is_empty() {
                return Err(TodoError::PrimaryHasChildren);
            }
            list.items_mut().remove(primary);
            format!("Deleted {:?}", primary)
        }
    };

    list.mark_changed();
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::format::{Color, Format, Thickness};
    use crate::model::Primary;
    use crate::store::memory::fixtures::ListFixture;

    #[test]
    fn errors_on_empty_list() {
        let mut list = TodoList::new();
        let err = run(&mut list, "write", None).unwrap_err();
        assert_eq!(err.to_string(), "can't delete from empty list");

        let err = run(&mut list, "write", Some("code")).unwrap_err();
        assert!(matches!(err, TodoError::EmptyList));
    }

    #[test]
    fn errors_on_unknown_primary() {
        let mut list = ListFixture::new().with_primary("design", &[]).build();

        let err = run(&mut list, "write", None).unwrap_err();
        assert_eq!(err.to_string(), r#"Primary item "write" does not exist"#);

        let err = run(&mut list, "write", Some("code")).unwrap_err();
        assert_eq!(err.to_string(), r#"Primary item "write" does not exist"#);
        assert!(!list.changed());
    }

    #[test]
    fn errors_on_unknown_secondary() {
        let mut list = ListFixture::new().with_primary("write", &[]).build();
        let err = run(&mut list, "write", Some("code")).unwrap_err();
        assert_eq!(err.to_string(), r#"Secondary item "code" does not exist"#);
        assert!(!list.changed());
    }

    #[test]
    fn refuses_to_delete_primary_with_secondaries() {
        let mut list = ListFixture::new()
            .with_primary("write", &["code", "tests"])
            .build();
        let before = list.clone();

        let err = run(&mut list, "write", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't delete primary item that still has secondary items"
        );
        assert_eq!(list, before);
    }

    #[test]
    fn deletes_empty_primary() {
        let mut list = ListFixture::new()
            .with_primary("design", &["solutions"])
            .with_primary("write", &[])
            .build();

        run(&mut list, "write", None).unwrap();

        assert!(list.get("write").is_none());
        assert_eq!(
            list.get("design"),
            Some(&Primary::with_secondaries(["solutions"]))
        );
        assert!(list.changed());
    }

    #[test]
    fn deleting_primary_drops_its_format() {
        let format = Format {
            color: Some(Color::Red),
            thickness: Thickness::Bold,
        };
        let mut list = ListFixture::new()
            .with_primary("write", &[])
            .with_format("write", format)
            .build();

        run(&mut list, "write", None).unwrap();
        add::run(&mut list, "write", None).unwrap();

        assert_eq!(list.get("write").unwrap().format, None);
    }

    #[test]
    fn deletes_secondary() {
        let mut list = ListFixture::new()
            .with_primary("write", &["code", "tests"])
            .build();

        run(&mut list, "write", Some("code")).unwrap();

        assert_eq!(
            list.get("write"),
            Some(&Primary::with_secondaries(["tests"]))
        );
        assert!(list.changed());
    }

    #[test]
    fn add_then_delete_secondary_restores_items() {
        let mut list = ListFixture::new().with_primary("write", &["code"]).build();
        let before = list.items().clone();

        add::run(&mut list, "write", Some("tests")).unwrap();
        run(&mut list, "write", Some("tests")).unwrap();

        assert_eq!(list.items(), &before);
    }

    #[test]
    fn add_then_delete_leaves_new_primary_empty() {
        let mut list = ListFixture::new().with_primary("design", &[]).build();

        add::run(&mut list, "write", Some("code")).unwrap();
        run(&mut list, "write", Some("code")).unwrap();

        assert_eq!(list.get("write"), Some(&Primary::default()));
        run(&mut list, "write", None).unwrap();
        assert!(list.get("write").is_none());
    }
}
