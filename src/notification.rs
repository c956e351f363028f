use std::collections::VecDeque;
use std::time::Duration;

use crate::ui::LAYOUT_TOKENS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Warning => "toast-warning",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            ToastKind::Info => "dialog-information-symbolic",
            ToastKind::Success => "emblem-ok-symbolic",
            ToastKind::Error => "dialog-error-symbolic",
            ToastKind::Warning => "dialog-warning-symbolic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Slide in, hold, slide out, remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub slide: Duration,
    pub hold: Duration,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            slide: Duration::from_millis(u64::from(LAYOUT_TOKENS.toast_slide_ms)),
            hold: Duration::from_millis(u64::from(LAYOUT_TOKENS.toast_hold_ms)),
        }
    }
}

impl ToastTimeline {
    pub fn dismiss_at(&self) -> Duration {
        self.slide + self.hold
    }

    pub fn remove_at(&self) -> Duration {
        self.dismiss_at() + self.slide
    }
}

/// Toasts raised by the controller and not yet handed to the widget layer.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        let toast = Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        };
        tracing::debug!(id = toast.id, kind = ?toast.kind, message = toast.message.as_str(), "queued toast");
        self.pending.push_back(toast);
        self.next_id
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Mirror a toast as a desktop notification.
pub fn send_desktop(kind: ToastKind, body: impl Into<String>) {
    let body = body.into();
    let summary = match kind {
        ToastKind::Error => "MriScope: error",
        ToastKind::Warning => "MriScope: warning",
        ToastKind::Info | ToastKind::Success => "MriScope",
    };
    if let Err(err) = notify_rust::Notification::new()
        .appname("MriScope")
        .summary(summary)
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}
