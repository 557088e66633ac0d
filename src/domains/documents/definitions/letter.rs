//! Letter template definition.

use serde::Deserialize;

use super::{DEFAULT_DATE, DocumentTemplate};
use crate::domains::documents::fields::{FieldValue, first_name, text_or};
use crate::domains::documents::template::TemplateId;

/// A formal letter.
pub struct LetterTemplate;

/// Letter payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LetterData {
    pub sender: Option<FieldValue>,
    pub sender_address: Option<FieldValue>,
    pub date: Option<FieldValue>,
    pub recipient: Option<FieldValue>,
    pub recipient_address: Option<FieldValue>,
    pub subject: Option<FieldValue>,
    pub body: Option<FieldValue>,
    pub closing: Option<FieldValue>,
}

impl DocumentTemplate for LetterTemplate {
    const ID: TemplateId = TemplateId::Letter;
    const TITLE: &'static str = "LETTER";
    const FIELDS: &'static [&'static str] =
        &["sender", "recipient", "date", "subject", "body", "closing"];

    type Data = LetterData;

    fn render(data: &LetterData) -> String {
        let salutation =
            first_name(data.recipient.as_ref()).unwrap_or_else(|| "Sir/Madam".to_string());

        format!(
            "\n{}\n{}\n\n{}\n\n{}\n{}\n\nSubject: {}\n\nDear {},\n\n{}\n\n{},\n{}\n",
            text_or(data.sender.as_ref(), "Sender Name"),
            text_or(data.sender_address.as_ref(), "Sender Address"),
            text_or(data.date.as_ref(), DEFAULT_DATE),
            text_or(data.recipient.as_ref(), "Recipient Name"),
            text_or(data.recipient_address.as_ref(), "Recipient Address"),
            text_or(data.subject.as_ref(), "No Subject"),
            salutation,
            text_or(data.body.as_ref(), "Letter body..."),
            text_or(data.closing.as_ref(), "Sincerely"),
            // the signature has its own, shorter default
            text_or(data.sender.as_ref(), "Sender"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::definitions::render_payload;
    use serde_json::json;

    fn render(payload: serde_json::Value) -> String {
        let payload = payload.as_object().cloned().unwrap();
        render_payload::<LetterTemplate>(&payload).unwrap()
    }

    #[test]
    fn test_letter_defaults() {
        assert_eq!(
            render(json!({})),
            "\nSender Name\nSender Address\n\n2023-01-01\n\nRecipient Name\nRecipient Address\n\n\
             Subject: No Subject\n\nDear Sir/Madam,\n\nLetter body...\n\nSincerely,\nSender\n"
        );
    }

    #[test]
    fn test_letter_salutation_uses_first_name() {
        let doc = render(json!({ "recipient": "Jane Doe", "sender": "John Smith" }));
        assert!(doc.contains("\nJane Doe\n"));
        assert!(doc.contains("Dear Jane,"));
        assert!(doc.ends_with("Sincerely,\nJohn Smith\n"));
    }

    #[test]
    fn test_letter_custom_closing() {
        let doc = render(json!({ "closing": "Best regards", "body": "Thanks." }));
        assert!(doc.contains("\n\nThanks.\n\nBest regards,\nSender\n"));
    }
}
