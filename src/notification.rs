//! Notification module for therafind
//!
//! Provides a reusable notification system that displays transient messages,
//! e.g. startup warnings about an unreadable config file.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::NotificationState;
