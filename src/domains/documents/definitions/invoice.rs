//! Invoice template definition.

use serde::Deserialize;

use super::{DEFAULT_DATE, DocumentTemplate};
use crate::domains::documents::fields::{
    FieldValue, amount_or_default, format_amount, text_or, unset_as_none,
};
use crate::domains::documents::template::TemplateId;

/// A billing statement with line items and a total.
pub struct InvoiceTemplate;

/// Invoice payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceData {
    pub invoice_number: Option<FieldValue>,
    pub date: Option<FieldValue>,
    pub client_name: Option<FieldValue>,
    #[serde(deserialize_with = "unset_as_none")]
    pub items: Option<Vec<LineItem>>,
    pub total: Option<f64>,
}

/// A single billed line. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    pub description: FieldValue,
    pub amount: f64,
}

impl DocumentTemplate for InvoiceTemplate {
    const ID: TemplateId = TemplateId::Invoice;
    const TITLE: &'static str = "INVOICE";
    const FIELDS: &'static [&'static str] =
        &["invoiceNumber", "date", "clientName", "items", "total"];

    type Data = InvoiceData;

    fn render(data: &InvoiceData) -> String {
        let items = data
            .items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|item| format!("- {}: ${}", item.description, format_amount(item.amount)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\nINVOICE #{}\nDate: {}\nClient: {}\n\nItems:\n{}\n\nTotal: ${}\n",
            text_or(data.invoice_number.as_ref(), "000000"),
            text_or(data.date.as_ref(), DEFAULT_DATE),
            text_or(data.client_name.as_ref(), "Client Name"),
            items,
            amount_or_default(data.total),
        )
    }
}
