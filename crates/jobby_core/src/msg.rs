use crate::{
    Credential, EmploymentType, FetchFailed, JobDetailsPage, JobList, Profile, RequestId, Route,
    SalaryRange,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Credential read from the session store at startup (if any).
    SessionRestored(Option<Credential>),
    /// Route change requested by the user or by a link.
    Navigate(Route),
    /// User edited the username field.
    UsernameChanged(String),
    /// User edited the password field.
    PasswordChanged(String),
    /// User submitted the login form.
    LoginSubmitted,
    /// Login endpoint accepted the credentials.
    LoginSucceeded { token: String },
    /// Login endpoint rejected the credentials, or could not be reached.
    LoginFailed { message: String },
    /// User clicked Logout in the header.
    LogoutClicked,
    /// Employment type checkbox toggled.
    TypeToggled(EmploymentType),
    /// Salary range radio selected.
    SalarySelected(SalaryRange),
    /// Search box edited. Does not fetch on its own.
    SearchTextChanged(String),
    /// Search button clicked or Enter pressed.
    SearchSubmitted,
    RetryProfile,
    RetryJobs,
    RetryJobDetails,
    /// Completion of a profile request.
    ProfileLoaded {
        request: RequestId,
        result: Result<Profile, FetchFailed>,
    },
    /// Completion of a job list request.
    JobsLoaded {
        request: RequestId,
        result: Result<JobList, FetchFailed>,
    },
    /// Completion of a job details request.
    JobDetailsLoaded {
        request: RequestId,
        result: Result<JobDetailsPage, FetchFailed>,
    },
    /// Fallback for unrecognised input.
    NoOp,
}
