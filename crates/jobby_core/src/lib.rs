//! Jobby core: pure state machine and view-model helpers.
mod effect;
mod fetch_state;
mod filters;
mod login;
mod models;
mod msg;
mod route;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, FetchFailed};
pub use fetch_state::{FetchSlot, FetchState, RequestId, Resolution};
pub use filters::{EmploymentType, FilterSet, JobsQuery, SalaryRange};
pub use login::{capitalize_field_names, LoginForm, LoginRequest, REQUIRED_MSG};
pub use models::{
    JobDetails, JobDetailsPage, JobList, JobSummary, LifeAtCompany, Profile, SimilarJob, Skill,
};
pub use msg::Msg;
pub use route::Route;
pub use session::Credential;
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, FilterOptionView, JobsView, LoginView, PageView, PanelView, ResultsView,
};
