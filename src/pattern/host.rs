use super::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Port {
    /// No port suffix in the pattern; the host must carry none either.
    Unspecified,
    /// `:*`: any port, including none.
    Any,
    /// `:1234`: exactly this port.
    Exact(Box<str>),
}

/// A domain pattern: `host`, `*.host`, optionally suffixed with `:port` or
/// `:*`. Host names compare case-insensitively; the wildcard form matches
/// any depth of subdomain but never the apex itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPattern {
    raw: Box<str>,
    name: Box<str>,
    wildcard: bool,
    port: Port,
}

impl HostPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let (name, port) = match pattern.rsplit_once(':') {
            Some((name, "*")) => (name, Port::Any),
            Some((name, port)) => (name, Port::Exact(port.into())),
            None => (pattern, Port::Unspecified),
        };
        let (name, wildcard) = match name.strip_prefix("*.") {
            Some(apex) => (apex, true),
            None => (name, false),
        };
        if name.is_empty() {
            return Err(PatternError::EmptyHostPattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            raw: pattern.into(),
            name: name.to_ascii_lowercase().into(),
            wildcard,
            port,
        })
    }

    /// The pattern as registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Classifies a Host header value, which may carry its own `:port`.
    pub fn matches(&self, host: &str) -> bool {
        let (name, port) = match host.rsplit_once(':') {
            Some((name, port)) => (name, Some(port)),
            None => (host, None),
        };
        let name = name.to_ascii_lowercase();
        let name_matches = if self.wildcard {
            // Strict suffix preceded by a dot: one or more extra labels.
            name.strip_suffix(&*self.name)
                .and_then(|labels| labels.strip_suffix('.'))
                .is_some_and(|labels| !labels.is_empty())
        } else {
            name == *self.name
        };
        if !name_matches {
            return false;
        }
        match &self.port {
            Port::Unspecified => port.is_none(),
            Port::Any => true,
            Port::Exact(expected) => port == Some(&**expected),
        }
    }
}
