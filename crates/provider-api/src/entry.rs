use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single entry displayed on the home search surface.
///
/// Entries are identified by `key`; publishing an entry with an existing key
/// replaces it, and [`ResultSink::revoke`](crate::ResultSink::revoke) removes
/// whatever entry currently carries the key. Busy placeholders are ordinary
/// entries tagged with a provider-chosen busy key distinct from result keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeEntry {
    /// Stable key identifying the displayed entry.
    pub key: String,
    /// Primary display text.
    pub title: String,
    /// Secondary text shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Icon resource rendered alongside the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Category key used to group entries on the surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Action names the rendering layer may dispatch back for this entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    /// Structured payload consumed by the rendering layer.
    #[serde(default)]
    pub data: TemplateData,
}

impl HomeEntry {
    /// Create an entry with the given key and title.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Attach a secondary label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach an icon resource.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attach a category key.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the structured payload.
    #[must_use]
    pub fn with_data(mut self, data: TemplateData) -> Self {
        self.data = data;
        self
    }
}

/// Open-ended structured payload attached to a [`HomeEntry`].
///
/// Providers flatten whatever their backend returns into labelled fields,
/// tables, and links; the rendering layer decides how to lay them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    /// Ordered label/value pairs.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, String>,
    /// Tabular data sets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<EntryTable>,
    /// Outbound links associated with the entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<EntryLink>,
}

impl TemplateData {
    /// Returns `true` when the payload carries no fields, tables, or links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tables.is_empty() && self.links.is_empty()
    }
}

/// A table of string cells with a header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_serializes_compactly() {
        let entry = HomeEntry::new("busy", "Searching...");
        let json = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(
            json,
            serde_json::json!({ "key": "busy", "title": "Searching...", "data": {} })
        );
    }

    #[test]
    fn payload_round_trips() {
        let mut data = TemplateData::default();
        data.fields.insert("Change".into(), "+1.2%".into());
        data.links.push(EntryLink {
            label: "Open".into(),
            url: "https://example.com".into(),
        });
        let entry = HomeEntry::new("answer", "Headline")
            .with_label("AAPL")
            .with_category("answers")
            .with_data(data);

        let json = serde_json::to_string(&entry).expect("serialize entry");
        let decoded: HomeEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(decoded, entry);
    }
}
