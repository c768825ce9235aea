//! Diagnostics side channel for credential freshness and page-loop progress.
//!
//! The provider and the pager report what happened through a
//! [`SearchObserver`] instead of logging directly, so the signals can be
//! asserted on in tests. [`TracingObserver`] is what the binary uses.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

/// One diagnostic event. None of these change control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The remote document carried an issue time.
    CredentialLoaded {
        issued_at: DateTime<Utc>,
        age_hours: i64,
    },
    /// The credential is older than the staleness threshold. Advisory only.
    CredentialStale { age_hours: i64 },
    /// The remote document could not be used; the fallback cookie is in effect.
    CredentialFallback { reason: String },
    /// A result page was fetched and parsed.
    PageFetched {
        page: usize,
        offset: usize,
        records: usize,
    },
    /// A page yielded nothing and the loop stopped early.
    Exhausted { page: usize, accumulated: usize },
}

/// Receives diagnostics from the credential provider and the pager.
pub trait SearchObserver: Send + Sync {
    fn notify(&self, diagnostic: &Diagnostic);
}

/// Routes diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn notify(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::CredentialLoaded {
                issued_at,
                age_hours,
            } => {
                tracing::info!(
                    issued_at = %issued_at.to_rfc3339(),
                    age_hours,
                    "Using Bing cookies from {} ({} hours ago)",
                    issued_at.to_rfc3339(),
                    age_hours
                );
            }
            Diagnostic::CredentialStale { age_hours } => {
                tracing::warn!(
                    age_hours,
                    "Bing cookies are {} hours old, consider updating them",
                    age_hours
                );
            }
            Diagnostic::CredentialFallback { reason } => {
                tracing::error!(
                    %reason,
                    "Failed to retrieve Bing cookies, falling back to minimal cookie set"
                );
            }
            Diagnostic::PageFetched {
                page,
                offset,
                records,
            } => {
                tracing::debug!(page, offset, records, "Result page parsed");
            }
            Diagnostic::Exhausted { page, accumulated } => {
                tracing::warn!(page, accumulated, "No more results, ending early");
            }
        }
    }
}

/// Keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SearchObserver for RecordingObserver {
    fn notify(&self, diagnostic: &Diagnostic) {
        let mut guard = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(diagnostic.clone());
    }
}
