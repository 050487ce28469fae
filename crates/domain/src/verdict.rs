use crate::blocklist_record::NOT_LISTED_CODE;

/// Outcome of checking one address against the configured blocklist zones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub listed: bool,
    /// Provider answer (e.g. `127.0.0.2`); empty when not listed.
    pub code: String,
    /// Zone that produced the listing, if any.
    pub zone: Option<String>,
}

impl Verdict {
    pub fn listed(code: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            listed: true,
            code: code.into(),
            zone: Some(zone.into()),
        }
    }

    pub fn not_listed() -> Self {
        Self::default()
    }

    pub fn response_code(&self) -> &str {
        if self.code.is_empty() {
            NOT_LISTED_CODE
        } else {
            &self.code
        }
    }
}
