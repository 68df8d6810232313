use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Errors and warnings collected during one build-validation session.
///
/// Passed explicitly through the orchestrator so repeated runs never share
/// state. With `echo` enabled every line is also emitted as a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildLog {
    errors: Vec<String>,
    warnings: Vec<String>,
    #[serde(skip)]
    echo: bool,
}

impl BuildLog {
    pub fn new(echo: bool) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            echo,
        }
    }

    pub fn error(&mut self, msg: impl AsRef<str>) {
        let line = format!("[{}] BUILD ERROR: {}", timestamp(), msg.as_ref());
        if self.echo {
            tracing::error!("{}", line);
        }
        self.errors.push(line);
    }

    pub fn warning(&mut self, msg: impl AsRef<str>) {
        let line = format!("[{}] BUILD WARNING: {}", timestamp(), msg.as_ref());
        if self.echo {
            tracing::warn!("{}", line);
        }
        self.warnings.push(line);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_timestamped() {
        let mut log = BuildLog::new(false);
        log.error("render timed out");
        log.warning("duplicate route");

        assert_eq!(log.errors().len(), 1);
        assert_eq!(log.warnings().len(), 1);
        assert!(log.errors()[0].starts_with('['));
        assert!(log.errors()[0].ends_with("] BUILD ERROR: render timed out"));
        assert!(log.warnings()[0].ends_with("] BUILD WARNING: duplicate route"));
    }

    #[test]
    fn test_clear() {
        let mut log = BuildLog::new(false);
        log.error("a");
        log.warning("b");
        log.clear();
        assert!(log.errors().is_empty());
        assert!(log.warnings().is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = BuildLog::new(false);
        first.error("first run");
        let second = BuildLog::new(false);
        assert!(second.errors().is_empty());
        assert_eq!(first.errors().len(), 1);
    }
}
