use std::time::{Duration, Instant};

/// How long a toast stays up before it is dismissed on its own.
pub const DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: &'static str,
    pub body: &'static str,
    pub status: Status,
    pub created: Instant,
}

impl Toast {
    pub fn registration_success() -> Self {
        Self {
            title: "Account registrato",
            body: "L'account è stato registrato con successo",
            status: Status::Success,
            created: Instant::now(),
        }
    }

    pub fn registration_failure() -> Self {
        Self {
            title: "Errore registrazione",
            body: "C'è stato un problema durante la registrazione, riprova più tardi.",
            status: Status::Error,
            created: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= DURATION
    }
}

/// The toasts currently displayed, oldest first.
#[derive(Debug, Default)]
pub struct Stack {
    toasts: Vec<Toast>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Removes the toast at the given position, if it is still there.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    /// Drops every toast that outlived [`DURATION`].
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.expired(now));
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
