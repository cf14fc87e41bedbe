use crate::view_model::{self, AppViewModel};
use crate::{
    Credential, FetchSlot, FilterSet, JobDetailsPage, JobList, LoginForm, Profile, RequestId,
    Route,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    route: Route,
    credential: Option<Credential>,
    pub(crate) login: LoginForm,
    pub(crate) filters: FilterSet,
    pub(crate) profile: FetchSlot<Profile>,
    pub(crate) jobs: FetchSlot<JobList>,
    pub(crate) details: FetchSlot<JobDetailsPage>,
    last_request: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn profile(&self) -> &FetchSlot<Profile> {
        &self.profile
    }

    pub fn jobs(&self) -> &FetchSlot<JobList> {
        &self.jobs
    }

    pub fn details(&self) -> &FetchSlot<JobDetailsPage> {
        &self.details
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = route;
        self.dirty = true;
    }

    pub(crate) fn set_credential(&mut self, credential: Option<Credential>) {
        self.credential = credential;
        self.dirty = true;
    }

    /// Allocates the id for the next outgoing request.
    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }
}
