//! Report template definition.

use serde::Deserialize;

use super::{DEFAULT_DATE, DocumentTemplate};
use crate::domains::documents::fields::{FieldValue, text_or, unset_as_none};
use crate::domains::documents::template::TemplateId;

/// A titled report made of sections.
pub struct ReportTemplate;

/// Report payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub title: Option<FieldValue>,
    pub author: Option<FieldValue>,
    pub date: Option<FieldValue>,
    #[serde(deserialize_with = "unset_as_none")]
    pub sections: Option<Vec<ReportSection>>,
}

/// A report section. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    pub title: FieldValue,
    pub content: FieldValue,
}

impl DocumentTemplate for ReportTemplate {
    const ID: TemplateId = TemplateId::Report;
    const TITLE: &'static str = "REPORT";
    const FIELDS: &'static [&'static str] = &["title", "author", "date", "sections"];

    type Data = ReportData;

    fn render(data: &ReportData) -> String {
        let sections = data
            .sections
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|section| format!("## {}\n\n{}\n", section.title, section.content))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\n# {}\nAuthor: {}\nDate: {}\n\n{}\n",
            text_or(data.title.as_ref(), "Untitled Report"),
            text_or(data.author.as_ref(), "Unknown"),
            text_or(data.date.as_ref(), DEFAULT_DATE),
            sections,
        )
    }
}
