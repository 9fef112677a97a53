//! Wire shapes returned by the FactSet Search Answers API.
//!
//! See <https://developer.factset.com/api-catalog/factset-search-answers>.
//! Every template payload is open ended; fields absent from a response simply
//! deserialize to `None`.

use serde::Deserialize;

/// Template name returned when an answer exists but carries no data.
pub const ANSWER_WITHOUT_DATA_TEMPLATE: &str = "AnswerWithoutDataTemplate";

/// Template name returned when the query produced no answer.
pub const NO_ANSWER_TEMPLATE: &str = "NoAnswerTemplate";

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct FactSetResponse {
    pub data: Option<FactSetAnswer>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// A single answer with its template name and payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetAnswer {
    pub template: String,
    pub title: String,
    pub template_data: FactSetTemplateData,
}

/// Union of the fields the various answer templates can carry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetTemplateData {
    pub headline: Option<String>,
    pub label: Option<String>,
    pub value: Option<FactSetValue>,
    pub text: Option<String>,
    pub value_change: Option<FactSetValueChange>,
    pub date: Option<String>,
    pub body: Option<String>,
    pub fdc3_context: Option<Fdc3Context>,
    pub table: Option<FactSetTable>,
    pub table1: Option<FactSetTableSet>,
    pub table2: Option<FactSetTableSet>,
    pub list: Option<Vec<FactSetListItem>>,
    pub footer: Option<String>,
    pub application_links: Option<Vec<FactSetApplicationLink>>,
}

/// A value that is either a bare string or a rich object with a text member.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FactSetValue {
    Text(String),
    Rich { text: String },
}

impl FactSetValue {
    /// The displayable text of the value.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Rich { text } => text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetValueChange {
    pub percentage_change: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fdc3Context {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<Fdc3InstrumentId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fdc3InstrumentId {
    pub ticker: Option<String>,
}

/// The `table` member: plain table sets and ranked tables share the field but
/// not the shape.
///
/// `Ranked` must be tried first: its `headers` and `rows` members are
/// required, while every `FactSetTableSet` member is optional, so a set
/// would otherwise swallow ranked payloads as an empty table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FactSetTable {
    Ranked(FactSetRankedTable),
    Set(FactSetTableSet),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetTableSet {
    #[serde(default)]
    pub table_headers: Vec<String>,
    /// Some templates name the rows `tableRows`, others `tableData`.
    pub table_rows: Option<Vec<Vec<String>>>,
    pub table_data: Option<Vec<Vec<String>>>,
    pub table_footers: Option<Vec<Vec<String>>>,
}

impl FactSetTableSet {
    /// Body rows regardless of which member the template used.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        self.table_rows
            .as_deref()
            .or(self.table_data.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactSetRankedTable {
    pub headers: Vec<String>,
    pub rows: Vec<FactSetRankedRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetRankedRow {
    pub rank: i64,
    pub entity: FactSetEntity,
    #[serde(default)]
    pub additional_data: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactSetEntity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactSetListItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSetApplicationLink {
    pub name: String,
    pub web_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_payload_decodes_as_ranked_variant() {
        let table: FactSetTable = serde_json::from_value(serde_json::json!({
            "headers": ["Rank", "Company"],
            "rows": [
                { "rank": 1, "entity": { "name": "Apple" }, "additionalData": ["2.8T"] }
            ]
        }))
        .expect("decode table");

        let FactSetTable::Ranked(ranked) = table else {
            panic!("ranked payload decoded as a table set");
        };
        assert_eq!(ranked.rows[0].entity.name, "Apple");
    }

    #[test]
    fn table_set_payload_decodes_as_set_variant() {
        let table: FactSetTable = serde_json::from_value(serde_json::json!({
            "tableHeaders": ["Year", "Revenue"],
            "tableRows": [["2021", "365.8B"]]
        }))
        .expect("decode table");

        let FactSetTable::Set(set) = table else {
            panic!("table set payload decoded as ranked");
        };
        assert_eq!(set.rows(), [vec!["2021".to_owned(), "365.8B".to_owned()]]);
    }
}
