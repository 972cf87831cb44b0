//! User-facing notifications (toasts).

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{error, info};

use crate::types::NotificationLevel;

pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Fire-and-forget sink for user-visible messages.
pub trait Notifier {
    fn notify(&mut self, level: NotificationLevel, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Bounded in-memory toast list; the oldest entry is dropped when full.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}

impl NotificationQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a notification; returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.entries.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => error!(text = message, "notification"),
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(?level, text = message, "notification")
            }
        }
        self.push(level, message);
    }
}
