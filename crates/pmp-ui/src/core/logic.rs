//! Pure dropdown helpers extracted from components for non-wasm testing.

use std::collections::HashSet;

/// One entry of a dropdown list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    /// Value submitted when the option is picked.
    pub field_code: String,
    /// Value displayed and used as the dedup key.
    pub field_value: String,
    /// Secondary text rendered under the value.
    pub field_description: Option<String>,
}

impl DropdownOption {
    /// Option whose code and value are the same string.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            field_code: value.clone(),
            field_value: value,
            field_description: None,
        }
    }
}

/// Build options from `items`, keeping the first item for each key.
///
/// Later items with an already-seen key are dropped without merging.
#[must_use]
pub fn dedup_options<'a, T, K, D>(items: &'a [T], key: K, describe: D) -> Vec<DropdownOption>
where
    K: Fn(&'a T) -> &'a str,
    D: Fn(&'a T) -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for item in items {
        let value = key(item);
        if seen.insert(value) {
            options.push(DropdownOption {
                field_code: value.to_string(),
                field_value: value.to_string(),
                field_description: describe(item),
            });
        }
    }
    options
}

/// Keep options whose value contains `query`, ignoring case.
///
/// A blank query keeps everything. Order is preserved.
#[must_use]
pub fn filter_options<'a>(options: &'a [DropdownOption], query: &str) -> Vec<&'a DropdownOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|option| option.field_value.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[DropdownOption]) -> Vec<&str> {
        options
            .iter()
            .map(|option| option.field_value.as_str())
            .collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let items = [("b", "1"), ("a", "2"), ("b", "3"), ("c", "4"), ("a", "5")];
        let options = dedup_options(&items, |item| item.0, |item| Some(item.1.to_string()));
        assert_eq!(values(&options), vec!["b", "a", "c"]);
        assert_eq!(options[0].field_description.as_deref(), Some("1"));
        assert_eq!(options[1].field_description.as_deref(), Some("2"));
    }

    #[test]
    fn dedup_is_idempotent() {
        let items = [("x", ""), ("y", ""), ("x", "")];
        let once = dedup_options(&items, |item| item.0, |_| None);
        let twice = dedup_options(&once, |option| option.field_value.as_str(), |_| None);
        assert_eq!(once, twice);
    }

    #[test]
    fn dedup_of_empty_input_is_empty() {
        let items: [(&str, &str); 0] = [];
        assert!(dedup_options(&items, |item| item.0, |_| None).is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = vec![
            DropdownOption::plain("Full KYC"),
            DropdownOption::plain("demo auth"),
            DropdownOption::plain("KYC lite"),
        ];
        let hits: Vec<&str> = filter_options(&options, " kyc ")
            .into_iter()
            .map(|option| option.field_value.as_str())
            .collect();
        assert_eq!(hits, vec!["Full KYC", "KYC lite"]);
        assert_eq!(filter_options(&options, "").len(), 3);
        assert!(filter_options(&options, "zzz").is_empty());
    }
}
