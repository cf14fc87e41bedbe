pub const REQUIRED_MSG: &str = "*Required";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    username: String,
    password: String,
    username_error: Option<&'static str>,
    password_error: Option<&'static str>,
    submit_error: Option<String>,
    submitting: bool,
}

/// Both fields, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.username_error = required(&self.username);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = required(&self.password);
    }

    /// Validates both fields. Empty fields get an inline error and block the
    /// submission.
    pub fn submit(&mut self) -> Option<LoginRequest> {
        self.username_error = required(&self.username);
        self.password_error = required(&self.password);
        if self.username_error.is_some() || self.password_error.is_some() || self.submitting {
            return None;
        }
        self.submitting = true;
        self.submit_error = None;
        Some(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn fail(&mut self, server_message: &str) {
        self.submitting = false;
        self.submit_error = Some(format!("*{}", capitalize_field_names(server_message)));
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn username_error(&self) -> Option<&'static str> {
        self.username_error
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password_error
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

fn required(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(REQUIRED_MSG)
}

/// Capitalizes every lowercase `user` and `pass` in a server error message.
pub fn capitalize_field_names(message: &str) -> String {
    message.replace("user", "User").replace("pass", "Pass")
}
