//! Turn the task payload into one newline-joined block of text.
//!
//! Only two levels are visited: a record's field values, and the direct
//! elements of a field that is an array or an object. Anything nested deeper
//! is ignored, as are non-string scalars.

use serde_json::Value;

/// Candidate field names for the task list under `result`, in priority order.
pub const TASK_LIST_KEYS: &[&str] = &["robotTasks", "tasks"];

/// Text extracted from the fetched tasks. Built once, read for the rest of
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedContext {
    text: String,
    records: usize,
}

impl ScrapedContext {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of task records that were walked.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when there is nothing worth answering from.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Locate the task list. A candidate that is missing, not an array, or empty
/// falls through to the next one.
pub fn task_records(data: &Value) -> &[Value] {
    let Some(result) = data.get("result") else {
        return &[];
    };
    TASK_LIST_KEYS
        .iter()
        .filter_map(|key| result.get(*key).and_then(Value::as_array))
        .find(|records| !records.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Walk the task records and collect every reachable string.
pub fn extract_text(data: &Value) -> ScrapedContext {
    let records = task_records(data);
    let mut texts: Vec<&str> = Vec::new();

    for record in records {
        let Some(fields) = record.as_object() else {
            continue;
        };
        for value in fields.values() {
            match value {
                Value::String(s) => texts.push(s.as_str()),
                Value::Array(items) => texts.extend(items.iter().filter_map(Value::as_str)),
                Value::Object(map) => texts.extend(map.values().filter_map(Value::as_str)),
                _ => {}
            }
        }
    }

    log::debug!(
        "extracted {} text fragment(s) from {} record(s)",
        texts.len(),
        records.len()
    );

    ScrapedContext {
        text: texts.join("\n"),
        records: records.len(),
    }
}
