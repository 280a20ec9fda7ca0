mod delivery_error;
mod notifier;
mod transport;
mod webhook;

pub use delivery_error::DeliveryError;
pub use notifier::{DeliveryPolicy, Notifier};
pub use transport::{HttpTransport, WebhookTransport};
pub use webhook::WebhookMessage;
