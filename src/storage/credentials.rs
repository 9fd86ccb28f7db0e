use std::env;

/// Environment sources checked in priority order; first non-empty match wins.
/// The primary name is also accepted via `--api-key` (clap env binding), the
/// fallbacks cover alternate hosting conventions.
pub const CREDENTIAL_SOURCES: [&str; 3] = ["STRATEGIST_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// API key for the Gemini endpoint, resolved once at process start and
/// treated as immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredential {
    value: String,
    source: &'static str,
}

impl ApiCredential {
    /// Resolve from the process environment. Absence of every source is
    /// "not configured", never an error.
    pub fn resolve() -> Option<Self> {
        Self::resolve_with(|name| env::var(name).ok())
    }

    /// Resolution over an injected lookup so the priority logic stays pure
    /// and testable without mutating the process environment.
    pub fn resolve_with<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        CREDENTIAL_SOURCES.iter().find_map(|name| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(|value| Self {
                    value,
                    source: name,
                })
        })
    }

    /// Credential supplied directly on the command line.
    pub fn from_flag(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self {
                value: value.to_string(),
                source: "--api-key",
            })
        }
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Which source produced this credential (for status reporting).
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Masked rendering for status output.
    pub fn masked(&self) -> String {
        if self.value.len() > 8 {
            format!(
                "{}...{}",
                &self.value[..4],
                &self.value[self.value.len() - 4..]
            )
        } else {
            "*****".to_string()
        }
    }
}
