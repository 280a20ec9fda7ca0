// notifier.rs
use crate::domain::{ChangeRecord, Modification};
use crate::notifier::webhook::{Embed, EmbedAuthor};
use crate::notifier::{DeliveryError, WebhookMessage, WebhookTransport};
use serde::Deserialize;

const SENDER_NAME: &str = "FlintMC Modification Tracker";
const SENDER_AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/76062092";
const ACCENT_COLOR: u32 = 6689010;

// Discord rejects embed descriptions longer than this.
const MAX_DESCRIPTION_CHARS: usize = 4096;
const SEPARATOR: &str = "\n->\n";

/// What to do with the remaining changes once one delivery failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Stop at the first failure; later changes are not sent.
    #[default]
    FailFast,
    /// Send every change and report all failures afterwards.
    BestEffort,
}

pub struct Notifier<T> {
    transport: T,
    webhook_url: String,
    site_base_url: String,
}

impl<T: WebhookTransport> Notifier<T> {
    pub fn new(transport: T, webhook_url: String, site_base_url: String) -> Self {
        Self {
            transport,
            webhook_url,
            site_base_url,
        }
    }

    /// Sends one message describing `change` to the webhook.
    pub fn notify(
        &self,
        entity: &Modification,
        change: &ChangeRecord,
    ) -> Result<(), DeliveryError> {
        let message = self.message(entity, change);
        self.transport.deliver(&self.webhook_url, &message)
    }

    /// Sends one message per change, in order. Returns how many were delivered.
    pub fn notify_all(
        &self,
        entity: &Modification,
        changes: &[ChangeRecord],
        policy: DeliveryPolicy,
    ) -> Result<usize, Vec<DeliveryError>> {
        let mut delivered = 0;
        let mut failures = Vec::new();

        for change in changes {
            match self.notify(entity, change) {
                Ok(()) => {
                    log::info!("Reported change of {}", change.field_name);
                    delivered += 1;
                }
                Err(e) => {
                    log::error!("Could not report change of {}: {e}", change.field_name);
                    failures.push(e);
                    if policy == DeliveryPolicy::FailFast {
                        break;
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(failures)
        }
    }

    pub fn message(&self, entity: &Modification, change: &ChangeRecord) -> WebhookMessage {
        let link = entity.reference_link(&self.site_base_url);

        let embed = Embed {
            author: Some(EmbedAuthor {
                name: entity.name.clone(),
                url: Some(link.clone()),
                icon_url: None,
            }),
            title: Some(format!("Change: {}", change.field_name)),
            url: Some(link),
            description: Some(describe_capped(change)),
            color: Some(ACCENT_COLOR),
            ..Default::default()
        };

        WebhookMessage {
            username: Some(SENDER_NAME.to_string()),
            avatar_url: Some(SENDER_AVATAR_URL.to_string()),
            content: None,
            embeds: vec![embed],
        }
    }
}

/// `previous -> current`, with each side shortened if the whole would not fit
/// into one embed description.
fn describe_capped(change: &ChangeRecord) -> String {
    let description = change.describe();
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description;
    }

    let per_side = (MAX_DESCRIPTION_CHARS - SEPARATOR.len()) / 2;
    format!(
        "{}{SEPARATOR}{}",
        truncate(&change.previous_value.to_string(), per_side),
        truncate(&change.current_value.to_string(), per_side)
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars - 1).collect();
    shortened.push('…');
    shortened
}
