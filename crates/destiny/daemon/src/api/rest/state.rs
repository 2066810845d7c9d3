//! Application state for API handlers

use destiny_matrix::MatrixEngine;
use destiny_types::{Locale, UnsupportedLocale};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters of compute requests
#[derive(Debug, Default)]
pub struct ComputeStats {
    served: AtomicU64,
    rejected: AtomicU64,
}

impl ComputeStats {
    pub fn record_served(&self) {
        self.served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Engine over the standard catalog
    pub engine: MatrixEngine<'static>,

    /// Locale used when a request names none
    pub default_locale: Locale,

    /// Compute request counters
    pub stats: Arc<ComputeStats>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: MatrixEngine<'static>, default_locale: Locale) -> Self {
        Self {
            engine,
            default_locale,
            stats: Arc::new(ComputeStats::default()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Locale named by a request, or the default when absent or blank
    pub fn resolve_locale(&self, requested: Option<&str>) -> Result<Locale, UnsupportedLocale> {
        match requested.map(str::trim) {
            None | Some("") => Ok(self.default_locale),
            Some(tag) => tag.parse(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_matrix::MatrixConfig;

    fn state() -> AppState {
        AppState::new(MatrixEngine::new(MatrixConfig::default()).unwrap(), Locale::En)
    }

    #[test]
    fn test_resolve_locale() {
        let state = state();
        assert_eq!(state.resolve_locale(None), Ok(Locale::En));
        assert_eq!(state.resolve_locale(Some("  ")), Ok(Locale::En));
        assert_eq!(state.resolve_locale(Some("ko-KR")), Ok(Locale::Ko));
        assert!(state.resolve_locale(Some("fr")).is_err());
    }

    #[test]
    fn test_counters_are_shared_between_clones() {
        let state = state();
        let clone = state.clone();
        clone.stats.record_served();
        clone.stats.record_rejected();
        state.stats.record_served();
        assert_eq!(state.stats.served(), 2);
        assert_eq!(state.stats.rejected(), 1);
    }

    #[test]
    fn test_uptime_format() {
        let mut state = state();
        state.started_at = chrono::Utc::now() - chrono::Duration::seconds(3700);
        assert_eq!(state.uptime(), "1h 1m");
    }
}
