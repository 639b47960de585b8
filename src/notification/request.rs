//! Notification request creation.

use uuid::Uuid;

use super::content::NotificationContent;

/// A notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub identifier: String,
    pub content: NotificationContent,
}

#[must_use]
pub fn create_notification_request(content: NotificationContent) -> NotificationRequest {
    create_notification_request_with_id(&Uuid::new_v4().to_string(), content)
}

#[must_use]
pub fn create_notification_request_with_id(
    identifier: &str,
    content: NotificationContent,
) -> NotificationRequest {
    NotificationRequest {
        identifier: identifier.to_string(),
        content,
    }
}
