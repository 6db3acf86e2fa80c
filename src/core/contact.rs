use anyhow::Context;

/// Form-collection endpoint the public site posts visitor messages to.
pub const FORM_ENDPOINT: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeC3604f38_BlZ34BPnATLZ8QE6wAc-TS1w_QmrzXL8KKRQ3w/formResponse";

// Fixed field identifiers assigned by the collection form.
const NAME_FIELD: &str = "entry.1360294763";
const EMAIL_FIELD: &str = "entry.33018055";
const MESSAGE_FIELD: &str = "entry.2000371473";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Fire-and-forget submission: the endpoint reports nothing useful back, so a
/// dispatched request counts as success and the response is dropped unread.
/// Only a network-level failure surfaces as an error.
pub async fn submit(client: &reqwest::Client, message: &ContactMessage) -> anyhow::Result<()> {
    let fields = [
        (NAME_FIELD, message.name.as_str()),
        (EMAIL_FIELD, message.email.as_str()),
        (MESSAGE_FIELD, message.message.as_str()),
    ];
    client
        .post(FORM_ENDPOINT)
        .form(&fields)
        .send()
        .await
        .context("failed to reach the contact form endpoint")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_requires_all_three_fields() {
        let mut message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        };
        assert!(message.is_complete());

        message.email = "   ".to_string();
        assert!(!message.is_complete());
    }
}
