use jobby_logging::{jobby_debug, jobby_info};

use crate::{AppState, Credential, Effect, Msg, Resolution, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionRestored(credential) => {
            state.set_credential(credential);
            Vec::new()
        }
        Msg::Navigate(route) => navigate(&mut state, route),
        Msg::UsernameChanged(value) => {
            state.login.set_username(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::PasswordChanged(value) => {
            state.login.set_password(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::LoginSubmitted => {
            if *state.route() != Route::Login {
                return (state, Vec::new());
            }
            let request = state.login.submit();
            state.mark_dirty();
            match request {
                Some(request) => vec![Effect::SubmitLogin {
                    username: request.username,
                    password: request.password,
                }],
                None => Vec::new(),
            }
        }
        Msg::LoginSucceeded { token } => {
            // Replaces the form so the next visit to /login starts clean.
            state.login = Default::default();
            let credential = Credential::new(token);
            jobby_info!("Login succeeded, token {:?}", credential);
            state.set_credential(Some(credential.clone()));
            let mut effects = vec![Effect::PersistSession { credential }];
            effects.extend(navigate(&mut state, Route::Home));
            effects
        }
        Msg::LoginFailed { message } => {
            state.login.fail(&message);
            state.mark_dirty();
            Vec::new()
        }
        Msg::LogoutClicked => {
            state.set_credential(None);
            let mut effects = vec![Effect::ClearSession];
            effects.extend(navigate(&mut state, Route::Login));
            effects
        }
        Msg::TypeToggled(kind) => {
            if *state.route() != Route::Jobs {
                return (state, Vec::new());
            }
            state.filters.toggle_type(kind);
            fetch_jobs(&mut state).into_iter().collect()
        }
        Msg::SalarySelected(range) => {
            if *state.route() != Route::Jobs {
                return (state, Vec::new());
            }
            state.filters.select_salary(range);
            fetch_jobs(&mut state).into_iter().collect()
        }
        Msg::SearchTextChanged(text) => {
            state.filters.set_search_text(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted | Msg::RetryJobs => {
            if *state.route() != Route::Jobs {
                return (state, Vec::new());
            }
            fetch_jobs(&mut state).into_iter().collect()
        }
        Msg::RetryProfile => {
            if *state.route() != Route::Jobs {
                return (state, Vec::new());
            }
            fetch_profile(&mut state).into_iter().collect()
        }
        Msg::RetryJobDetails => match state.route().clone() {
            Route::JobDetails(job_id) => fetch_details(&mut state, job_id).into_iter().collect(),
            _ => Vec::new(),
        },
        Msg::ProfileLoaded { request, result } => {
            if state.profile.resolve(request, result) == Resolution::Applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobsLoaded { request, result } => {
            if let Ok(list) = &result {
                jobby_debug!(
                    "Jobs request {} returned {} of {}",
                    request,
                    list.jobs.len(),
                    list.total
                );
            }
            if state.jobs.resolve(request, result) == Resolution::Applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobDetailsLoaded { request, result } => {
            if state.details.resolve(request, result) == Resolution::Applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Tears down the current view, applies route guards, and mounts the target.
fn navigate(state: &mut AppState, requested: Route) -> Vec<Effect> {
    let target = guard(state, requested);

    let leaving = state.route().clone();
    match leaving {
        Route::Jobs => {
            state.profile.reset();
            state.jobs.reset();
        }
        Route::JobDetails(_) => state.details.reset(),
        Route::Login | Route::Home | Route::NotFound => {}
    }

    jobby_debug!("Navigate {} -> {}", leaving, target);
    state.set_route(target.clone());

    match target {
        Route::Jobs => fetch_profile(state)
            .into_iter()
            .chain(fetch_jobs(state))
            .collect(),
        Route::JobDetails(job_id) => fetch_details(state, job_id).into_iter().collect(),
        Route::Login | Route::Home | Route::NotFound => Vec::new(),
    }
}

fn guard(state: &AppState, requested: Route) -> Route {
    match (requested, state.credential()) {
        (route, None) if route.is_protected() => {
            jobby_info!("No session for {}, redirecting to login", route);
            Route::Login
        }
        (Route::Login, Some(_)) => Route::Home,
        (route, _) => route,
    }
}

fn fetch_profile(state: &mut AppState) -> Option<Effect> {
    let credential = authorized(state)?;
    let request = state.next_request_id();
    state.profile.begin(request);
    state.mark_dirty();
    Some(Effect::FetchProfile {
        request,
        credential,
    })
}

fn fetch_jobs(state: &mut AppState) -> Option<Effect> {
    let credential = authorized(state)?;
    let request = state.next_request_id();
    let query = state.filters.query();
    state.jobs.begin(request);
    state.mark_dirty();
    Some(Effect::FetchJobs {
        request,
        credential,
        query,
    })
}

fn fetch_details(state: &mut AppState, job_id: String) -> Option<Effect> {
    let credential = authorized(state)?;
    let request = state.next_request_id();
    state.details.begin(request);
    state.mark_dirty();
    Some(Effect::FetchJobDetails {
        request,
        credential,
        job_id,
    })
}

/// Guarded routes always hold a credential; a missing one means the request
/// is not issued at all.
fn authorized(state: &AppState) -> Option<Credential> {
    let credential = state.credential().cloned();
    if credential.is_none() {
        jobby_debug!("Skipping authenticated request without a session");
    }
    credential
}
