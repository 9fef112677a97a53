//! Conversion from FactSet answer payloads into generic home entries.

use homesearch_provider_api::{EntryLink, EntryTable, HomeEntry, TemplateData};

use crate::ANSWER_ENTRY_KEY;
use crate::shapes::{
    ANSWER_WITHOUT_DATA_TEMPLATE, FactSetAnswer, FactSetTable, FactSetTableSet, NO_ANSWER_TEMPLATE,
};

/// Flatten an answer into a displayable entry.
///
/// Returns `None` for the no-answer templates. Field order follows the order
/// the FactSet result card renders them in.
pub(crate) fn entry_from_answer(answer: &FactSetAnswer, icon: Option<&str>) -> Option<HomeEntry> {
    if answer.template == ANSWER_WITHOUT_DATA_TEMPLATE || answer.template == NO_ANSWER_TEMPLATE {
        return None;
    }

    let payload = &answer.template_data;
    let mut data = TemplateData::default();

    if let (Some(label), Some(value)) = (&payload.label, &payload.value) {
        data.fields.insert(label.clone(), value.text().to_owned());
    }
    if let Some(text) = &payload.text {
        data.fields.insert("Text".to_owned(), text.clone());
    }
    if let Some(change) = &payload.value_change {
        data.fields
            .insert("Change".to_owned(), change.percentage_change.clone());
    }
    if let Some(date) = &payload.date {
        data.fields.insert("Date".to_owned(), date.clone());
    }
    if let Some(body) = &payload.body {
        data.fields.insert("Body".to_owned(), body.clone());
    }
    if let Some(fdc3) = &payload.fdc3_context {
        data.fields.insert("FDC3 Type".to_owned(), fdc3.kind.clone());
        if fdc3.kind == "fdc3.instrument"
            && let Some(ticker) = fdc3.id.as_ref().and_then(|id| id.ticker.clone())
        {
            data.fields.insert("Ticker".to_owned(), ticker);
        }
    }

    match (answer.template.as_str(), &payload.table) {
        ("TableTemplate", Some(FactSetTable::Set(table))) => {
            data.tables.push(entry_table(table));
        }
        ("RankedTableTemplate", Some(FactSetTable::Ranked(table))) => {
            data.tables.push(EntryTable {
                headers: table.headers.clone(),
                rows: table
                    .rows
                    .iter()
                    .map(|row| {
                        vec![
                            row.rank.to_string(),
                            row.entity.name.clone(),
                            row.additional_data.first().cloned().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            });
        }
        _ => {}
    }
    if answer.template == "TableTableTemplate" {
        if let Some(table) = &payload.table1 {
            data.tables.push(entry_table(table));
        }
        if let Some(table) = &payload.table2 {
            data.tables.push(entry_table(table));
        }
    }

    if let Some(list) = &payload.list {
        for item in list {
            data.fields.insert(item.label.clone(), item.value.clone());
        }
    }
    if let Some(footer) = &payload.footer {
        data.fields.insert("Footer".to_owned(), footer.clone());
    }

    let mut actions = Vec::new();
    if let Some(links) = &payload.application_links {
        for (index, link) in links.iter().enumerate() {
            actions.push(format!("open{index}"));
            data.links.push(EntryLink {
                label: link.name.clone(),
                url: link.web_link.clone(),
            });
        }
    }

    let title = payload.headline.clone().unwrap_or_else(|| answer.title.clone());
    let mut entry = HomeEntry::new(ANSWER_ENTRY_KEY, title)
        .with_label(answer.title.clone())
        .with_category(answer.template.clone())
        .with_data(data);
    entry.actions = actions;
    if let Some(icon) = icon {
        entry = entry.with_icon(icon);
    }
    Some(entry)
}

fn entry_table(table: &FactSetTableSet) -> EntryTable {
    let mut rows: Vec<Vec<String>> = table.rows().to_vec();
    if let Some(footers) = &table.table_footers {
        rows.extend(footers.iter().cloned());
    }
    EntryTable {
        headers: table.table_headers.clone(),
        rows,
    }
}
