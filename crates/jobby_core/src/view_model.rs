use crate::{
    AppState, EmploymentType, FetchState, JobDetailsPage, JobSummary, Profile, Route,
    SalaryRange,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    /// Header with Home/Jobs/Logout, shown on protected pages only.
    pub show_header: bool,
    pub page: PageView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Login(LoginView),
    Home,
    Jobs(JobsView),
    JobDetails(PanelView<JobDetailsPage>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub username: String,
    pub password_len: usize,
    pub username_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub submit_error: Option<String>,
    pub submitting: bool,
}

/// Display state of one independently fetched panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<T> {
    Idle,
    Loading,
    /// Shows a retry affordance.
    Failed,
    Ready(T),
}

impl<T: Clone> From<&FetchState<T>> for PanelView<T> {
    fn from(state: &FetchState<T>) -> Self {
        match state {
            FetchState::Idle => PanelView::Idle,
            FetchState::Pending(_) => PanelView::Loading,
            FetchState::Failure => PanelView::Failed,
            FetchState::Success(payload) => PanelView::Ready(payload.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Idle,
    Loading,
    Failed,
    /// "No Jobs Found".
    Empty,
    Jobs(Vec<JobSummary>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionView {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobsView {
    pub profile: PanelView<Profile>,
    pub type_filters: Vec<FilterOptionView>,
    pub salary_filters: Vec<FilterOptionView>,
    pub search_text: String,
    pub results: ResultsView,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let route = state.route().clone();
    let page = match &route {
        Route::Login => PageView::Login(login_view(state)),
        Route::Home => PageView::Home,
        Route::Jobs => PageView::Jobs(jobs_view(state)),
        Route::JobDetails(_) => PageView::JobDetails(PanelView::from(state.details().state())),
        Route::NotFound => PageView::NotFound,
    };
    AppViewModel {
        show_header: route.is_protected(),
        route,
        page,
    }
}

fn login_view(state: &AppState) -> LoginView {
    let form = state.login_form();
    LoginView {
        username: form.username().to_string(),
        password_len: form.password().chars().count(),
        username_error: form.username_error(),
        password_error: form.password_error(),
        submit_error: form.submit_error().map(ToOwned::to_owned),
        submitting: form.is_submitting(),
    }
}

fn jobs_view(state: &AppState) -> JobsView {
    let filters = state.filters();
    let type_filters = EmploymentType::ALL
        .into_iter()
        .map(|kind| FilterOptionView {
            id: kind.id(),
            label: kind.label(),
            selected: filters.is_selected(kind),
        })
        .collect();
    let salary_filters = SalaryRange::ALL
        .into_iter()
        .map(|range| FilterOptionView {
            id: range.id(),
            label: range.label(),
            selected: filters.salary_floor() == Some(range),
        })
        .collect();
    let results = match state.jobs().state() {
        FetchState::Idle => ResultsView::Idle,
        FetchState::Pending(_) => ResultsView::Loading,
        FetchState::Failure => ResultsView::Failed,
        FetchState::Success(list) if list.jobs.is_empty() => ResultsView::Empty,
        FetchState::Success(list) => ResultsView::Jobs(list.jobs.clone()),
    };
    JobsView {
        profile: PanelView::from(state.profile().state()),
        type_filters,
        salary_filters,
        search_text: filters.search_text().to_string(),
        results,
    }
}
