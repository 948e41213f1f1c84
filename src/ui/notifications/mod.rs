// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for recoverable problems.
//!
//! A corrupt state file, an unreadable settings file or a folder that
//! cannot be scanned never stop the gallery; the user is told with a toast
//! in the bottom-right corner instead.
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - queueing, auto-dismiss and dismissal
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
