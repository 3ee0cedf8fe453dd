//! Per-transport severity filtering

use super::severity::Severity;

/// Decides whether a transport processes an event.
///
/// An explicit severity set, when configured and non-empty, fully overrides
/// the minimum-severity threshold. Otherwise events pass when their weight
/// is at or above the minimum, which defaults to [`Severity::Info`].
#[derive(Debug, Clone, Default)]
pub struct SeverityFilter {
    minimum: Severity,
    severities: Option<Vec<Severity>>,
}

impl SeverityFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum severity threshold.
    #[must_use]
    pub fn with_minimum(mut self, minimum: Severity) -> Self {
        self.minimum = minimum;
        self
    }

    /// Restrict logging to an explicit set of severities.
    ///
    /// Takes precedence over the minimum threshold. An empty set is treated
    /// as unset and the threshold applies instead.
    #[must_use]
    pub fn with_severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities = Some(severities.into_iter().collect());
        self
    }

    /// Whether an event of the given severity should be processed.
    #[must_use]
    pub fn should_log(&self, severity: Severity) -> bool {
        match &self.severities {
            Some(severities) if !severities.is_empty() => severities.contains(&severity),
            _ => severity.weight() >= self.minimum.weight(),
        }
    }
}
