use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Home,
    Jobs,
    JobDetails(String),
    NotFound,
}

impl Route {
    /// Parses an application path such as `/jobs/42`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(trimmed);
        match trimmed {
            "" | "/" => Route::Home,
            "/login" => Route::Login,
            "/jobs" => Route::Jobs,
            other => match other.strip_prefix("/jobs/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::JobDetails(id.to_string()),
                _ => Route::NotFound,
            },
        }
    }

    /// Routes that need a credential to be shown.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::Jobs | Route::JobDetails(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/login"),
            Route::Home => write!(f, "/"),
            Route::Jobs => write!(f, "/jobs"),
            Route::JobDetails(id) => write!(f, "/jobs/{id}"),
            Route::NotFound => write!(f, "/not-found"),
        }
    }
}
