use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw configuration snapshot as delivered by `/get_model`: a flat mapping
/// from configuration key to value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigModel(pub serde_json::Map<String, Value>);

impl ConfigModel {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// A string-list value; missing keys or non-list values yield an empty list.
    pub fn str_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Two independent schedules per day: (start, end, interval) triples for the
/// "h" and "m" sub-schedules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub hours: [i64; 3],
    pub minutes: [i64; 3],
}

/// Per-weekday schedule table; unscheduled days map to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeTable(pub BTreeMap<String, Option<DaySchedule>>);

impl TimeTable {
    /// Parse the wire value: a map of weekday name to either `null` or a
    /// pair of triples. A pair whose first triple is `null` also counts as
    /// an unscheduled day.
    pub fn from_value(value: &Value) -> Self {
        let mut table = BTreeMap::new();
        let Some(days) = value.as_object() else {
            return Self(table);
        };
        for (day, entry) in days {
            table.insert(day.clone(), parse_day(entry));
        }
        Self(table)
    }
}

fn parse_day(entry: &Value) -> Option<DaySchedule> {
    type RawDay = (Option<[i64; 3]>, Option<[i64; 3]>);
    let raw: RawDay = serde_json::from_value(entry.clone()).ok()?;
    match raw {
        (Some(hours), Some(minutes)) => Some(DaySchedule { hours, minutes }),
        _ => None,
    }
}

/// One entry of a multi-select option list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub name: String,
    pub selected: bool,
}

/// A multi-select rendered as a clickable option list, backed by a text
/// field of space-separated tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectList {
    pub options: Vec<SelectOption>,
}

impl SelectList {
    /// Build the list from the option names delivered by the device
    pub fn new(names: Vec<String>) -> Self {
        Self {
            options: names
                .into_iter()
                .map(|name| SelectOption {
                    name,
                    selected: false,
                })
                .collect(),
        }
    }

    /// Toggle one option; returns its new selection state, or `None` for an
    /// unknown option.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let option = self.options.iter_mut().find(|o| o.name == name)?;
        option.selected = !option.selected;
        Some(option.selected)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.options
            .iter()
            .any(|o| o.name == name && o.selected)
    }
}

/// Insert `token` into `text` at `caret`, surrounded by single spaces.
/// Falls back to end-of-text when no caret position is known.
pub fn insert_token(text: &str, token: &str, caret: Option<usize>) -> String {
    let mut pos = caret.unwrap_or(text.len()).min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    format!("{} {} {}", &text[..pos], token, &text[pos..])
}

/// Remove one occurrence of `token` plus one adjacent space from `text`.
///
/// This is a best-effort string edit, not a structured list edit: a token
/// that is a substring of another token can mis-match.
pub fn remove_token(text: &str, token: &str) -> String {
    // token followed by a space, anywhere
    let needle = format!("{token} ");
    if let Some(pos) = text.find(&needle) {
        let mut result = String::with_capacity(text.len() - needle.len());
        result.push_str(&text[..pos]);
        result.push_str(&text[pos + needle.len()..]);
        return result;
    }

    // trailing " token", optionally followed by spaces
    let needle = format!(" {token}");
    if let Some(pos) = text.rfind(&needle) {
        if text[pos + needle.len()..].chars().all(|c| c == ' ') {
            return text[..pos].to_string();
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn time_table_parses_pairs_and_null_days() {
        let table = TimeTable::from_value(&json!({
            "monday": [[1, 2, 3], [4, 5, 6]],
            "tuesday": null,
            "wednesday": [null, null],
        }));

        assert_eq!(
            table.0["monday"],
            Some(DaySchedule {
                hours: [1, 2, 3],
                minutes: [4, 5, 6],
            })
        );
        assert_eq!(table.0["tuesday"], None);
        assert_eq!(table.0["wednesday"], None);
    }

    #[test]
    fn str_list_tolerates_missing_key() {
        let config: ConfigModel = serde_json::from_value(json!({
            "_s_options": ["aht20", "bmp280"],
        }))
        .unwrap();

        assert_eq!(config.str_list("_s_options"), vec!["aht20", "bmp280"]);
        assert!(config.str_list("_t_options").is_empty());
    }

    #[test]
    fn insert_at_caret_surrounds_with_spaces() {
        assert_eq!(insert_token("aht20 bmp280", "scd40", Some(6)), "aht20  scd40 bmp280");
        assert_eq!(insert_token("aht20", "scd40", None), "aht20 scd40 ");
        assert_eq!(insert_token("", "scd40", None), " scd40 ");
    }

    #[test]
    fn insert_clamps_caret_to_char_boundary() {
        // caret positions from the shell can be stale
        assert_eq!(insert_token("ab", "x", Some(99)), "ab x ");
    }

    #[test]
    fn remove_takes_exactly_one_occurrence() {
        assert_eq!(remove_token(" scd40 scd40 ", "scd40"), " scd40 ");
        assert_eq!(remove_token("aht20 scd40 ", "scd40"), "aht20 ");
        assert_eq!(remove_token("aht20 scd40", "scd40"), "aht20");
        assert_eq!(remove_token("aht20", "scd40"), "aht20");
    }

    #[test]
    fn toggle_roundtrip_restores_text() {
        let text = "aht20 bmp280";
        let inserted = insert_token(text, "scd40", None);
        assert_eq!(inserted, "aht20 bmp280 scd40 ");
        assert_eq!(remove_token(&inserted, "scd40"), "aht20 bmp280 ");
    }
}
