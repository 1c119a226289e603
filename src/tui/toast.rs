use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::model::Notification;

/// A notification on screen until `expires_at`
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    /// `None` when the lifetime is too long to represent; never expires
    pub expires_at: Option<Instant>,
}

/// Bounded stack of toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    max: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, max: usize) -> Self {
        ToastQueue {
            toasts: VecDeque::new(),
            ttl,
            max,
        }
    }

    /// Show a notification; drops the oldest toast when full
    pub fn push(&mut self, notification: Notification, now: Instant) {
        if self.max == 0 {
            return;
        }
        while self.toasts.len() >= self.max {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            expires_at: now.checked_add(self.ttl),
        });
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| t.expires_at.is_none_or(|at| at > now));
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
