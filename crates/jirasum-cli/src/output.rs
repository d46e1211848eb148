use jirasum_core::{DetailField, DisplayField};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::cli::OutputFormat;

/// Fields serialized as a JSON object in display order, details last.
struct FieldMap<'a> {
    fields: &'a [DisplayField],
    details: &'a [DetailField],
}

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.details.len()))?;
        for field in self.fields {
            map.serialize_entry(field.key, &field.value)?;
        }
        for detail in self.details {
            map.serialize_entry(detail.key, &detail.value)?;
        }
        map.end()
    }
}

/// Render extracted fields in the requested format.
///
/// Text output shows only the labeled fields; `details` appear in JSON.
pub fn render(
    fields: &[DisplayField],
    details: &[DetailField],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let map = FieldMap { fields, details };
    match format {
        OutputFormat::Text => Ok(fields
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&map)?),
        OutputFormat::Raw => Ok(serde_json::to_string(&map)?),
    }
}
