//! On-disk shape of a [`TodoList`].
//!
//! The file keeps the layout older data files used: secondaries map to a
//! boolean (ignored on load, always `true` on save) and formats live in a map
//! beside the items rather than inside them.

use crate::format::Format;
use crate::model::{Primary, TodoList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Items", default, deserialize_with = "null_as_default")]
    pub items: BTreeMap<String, BTreeMap<String, bool>>,

    #[serde(
        rename = "PrimaryFormats",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub primary_formats: BTreeMap<String, Format>,
}

impl Snapshot {
    pub fn from_list(list: &TodoList) -> Self {
        let mut snapshot = Snapshot::default();
        for (name, primary) in list.items() {
            let secondaries = primary
                .secondaries
                .iter()
                .map(|s| (s.clone(), true))
                .collect();
            snapshot.items.insert(name.clone(), secondaries);
            if let Some(format) = primary.format {
                snapshot.primary_formats.insert(name.clone(), format);
            }
        }
        snapshot
    }

    /// Formats without a matching primary are dropped.
    pub fn into_list(self) -> TodoList {
        let Snapshot {
            items,
            mut primary_formats,
        } = self;

        let items: BTreeMap<String, Primary> = items
            .into_iter()
            .map(|(name, secondaries)| {
                let primary = Primary {
                    secondaries: secondaries.into_keys().collect(),
                    format: primary_formats.remove(&name),
                };
                (name, primary)
            })
            .collect();

        for orphan in primary_formats.keys() {
            debug!(primary = %orphan, "dropping format for unknown primary");
        }

        TodoList::from_items(items)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Color, Thickness};

    #[test]
    fn secondary_payload_is_ignored() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"Items": {"write": {"code": false, "tests": true}}}"#,
        )
        .unwrap();
        let list = snapshot.into_list();
        let write = list.get("write").unwrap();
        assert!(write.secondaries.contains("code"));
        assert!(write.secondaries.contains("tests"));
    }

    #[test]
    fn null_sections_are_empty() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"Items": null, "PrimaryFormats": null}"#).unwrap();
        assert!(snapshot.into_list().is_empty());

        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.into_list().is_empty());
    }

    #[test]
    fn orphaned_formats_are_dropped() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"Items": {"write": {}}, "PrimaryFormats": {"gone": {"Color": "red"}}}"#,
        )
        .unwrap();
        let list = snapshot.into_list();
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.get("write").unwrap().format, None);
    }

    #[test]
    fn writes_legacy_layout() {
        let mut items = BTreeMap::new();
        items.insert(
            "write".to_string(),
            Primary::with_secondaries(["code"]).with_format(Format {
                color: Some(Color::Red),
                thickness: Thickness::Bold,
            }),
        );
        let list = TodoList::from_items(items);
        let value = serde_json::to_value(Snapshot::from_list(&list)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Items": {"write": {"code": true}},
                "PrimaryFormats": {"write": {"Color": "red", "Thickness": true}}
            })
        );
    }
}
