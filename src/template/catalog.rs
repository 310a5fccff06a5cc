use super::definition::Template;
use super::store::TemplateStore;
use crate::capability::CapabilityTag;

/// The built-in starter templates shown in the gallery before the
/// collaborator layer loads anything of its own.
///
/// Step wordings deliberately carry their capability keyword ("Webhook
/// received", "Send Mail", …) so compiled nodes pick up the right icon.
pub fn starter_catalog() -> TemplateStore {
    [
        Template::new(
            "payment-alerts",
            "Payment Notifications",
            "Notify your team and log a record every time a payment succeeds.",
            "Finance",
            CapabilityTag::CreditCard,
            vec![
                "Webhook received from payment provider".to_string(),
                "Filter successful payments".to_string(),
                "Send Mail receipt to customer".to_string(),
                "Save to Database".to_string(),
            ],
        ),
        Template::new(
            "invoice-processing",
            "Invoice Processing",
            "Extract totals from incoming invoices and archive them.",
            "Documents",
            CapabilityTag::FileText,
            vec![
                "Webhook received with FileText attachment".to_string(),
                "Code step extracts invoice totals".to_string(),
                "Save to Database".to_string(),
                "Post MessageSquare summary".to_string(),
            ],
        ),
        Template::new(
            "welcome-email",
            "Welcome Email",
            "Greet new signups with a delayed welcome message.",
            "Marketing",
            CapabilityTag::Mail,
            vec![
                "Webhook received on signup".to_string(),
                "Timer waits one hour".to_string(),
                "Send Mail welcome message".to_string(),
            ],
        ),
        Template::new(
            "webhook-relay",
            "Webhook Relay",
            "Receive, reshape, and forward webhooks to another service.",
            "Developer",
            CapabilityTag::Webhook,
            vec![
                "Webhook received".to_string(),
                "Filter unwanted events".to_string(),
                "Code transforms the payload".to_string(),
                "Forward via outgoing Webhook".to_string(),
            ],
        ),
    ]
    .into_iter()
    .collect()
}
