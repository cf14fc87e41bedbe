use std::fmt;

/// Bearer token proving session identity. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", jobby_logging::redact(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Credential;

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", Credential::new("abc123-secret"));
        assert!(!rendered.contains("secret"));
    }
}
