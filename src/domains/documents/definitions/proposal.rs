//! Business proposal template definition.

use serde::Deserialize;

use super::DocumentTemplate;
use crate::domains::documents::fields::{FieldValue, amount_or_default, text_or, unset_as_none};
use crate::domains::documents::template::TemplateId;

/// A business proposal with deliverables and a budget.
pub struct ProposalTemplate;

/// Proposal payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalData {
    pub project_name: Option<FieldValue>,
    pub client: Option<FieldValue>,
    pub scope: Option<FieldValue>,
    #[serde(deserialize_with = "unset_as_none")]
    pub deliverables: Option<Vec<FieldValue>>,
    pub timeline: Option<FieldValue>,
    pub budget: Option<f64>,
}

impl DocumentTemplate for ProposalTemplate {
    const ID: TemplateId = TemplateId::Proposal;
    const TITLE: &'static str = "BUSINESS PROPOSAL";
    const FIELDS: &'static [&'static str] = &[
        "projectName",
        "client",
        "scope",
        "deliverables",
        "timeline",
        "budget",
    ];

    type Data = ProposalData;

    fn render(data: &ProposalData) -> String {
        let deliverables = data
            .deliverables
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\n# Business Proposal: {}\n\n## Client\n{}\n\n## Project Scope\n{}\n\n\
             ## Deliverables\n{}\n\n## Timeline\n{}\n\n## Budget\n${}\n",
            text_or(data.project_name.as_ref(), "Untitled Project"),
            text_or(data.client.as_ref(), "Client Name"),
            text_or(data.scope.as_ref(), "Project scope details..."),
            deliverables,
            text_or(data.timeline.as_ref(), "Project timeline details..."),
            amount_or_default(data.budget),
        )
    }
}
