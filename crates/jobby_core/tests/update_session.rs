use std::sync::Once;

use jobby_core::{
    update, AppState, Credential, Effect, Msg, PageView, Route, REQUIRED_MSG,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobby_logging::initialize_for_tests);
}

fn signed_out_at_login() -> AppState {
    let (state, _) = update(AppState::new(), Msg::SessionRestored(None));
    let (state, _) = update(state, Msg::Navigate(Route::Login));
    state
}

fn login_view(state: &AppState) -> jobby_core::LoginView {
    match state.view().page {
        PageView::Login(view) => view,
        other => panic!("expected login page, got {other:?}"),
    }
}

#[test]
fn protected_routes_redirect_without_any_request() {
    init_logging();
    for route in [
        Route::Home,
        Route::Jobs,
        Route::JobDetails("abc".to_string()),
    ] {
        let (state, _) = update(AppState::new(), Msg::SessionRestored(None));
        let (state, effects) = update(state, Msg::Navigate(route));
        assert_eq!(state.route(), &Route::Login);
        assert!(effects.is_empty());
    }
}

#[test]
fn login_route_with_session_goes_home() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SessionRestored(Some(Credential::new("abc123"))),
    );
    let (state, effects) = update(state, Msg::Navigate(Route::Login));
    assert_eq!(state.route(), &Route::Home);
    assert!(effects.is_empty());
}

#[test]
fn not_found_is_reachable_without_session() {
    let (state, _) = update(AppState::new(), Msg::Navigate(Route::parse("/bad-path")));
    assert_eq!(state.view().page, PageView::NotFound);
    assert!(!state.view().show_header);
}

#[test]
fn empty_fields_are_flagged_and_nothing_is_sent() {
    init_logging();
    let state = signed_out_at_login();
    let (state, _) = update(state, Msg::UsernameChanged("rahul".to_string()));
    let (mut state, effects) = update(state, Msg::LoginSubmitted);

    assert!(effects.is_empty());
    let view = login_view(&state);
    assert_eq!(view.username_error, None);
    assert_eq!(view.password_error, Some(REQUIRED_MSG));
    assert!(state.consume_dirty());
}

#[test]
fn successful_login_stores_credential_and_goes_home() {
    init_logging();
    let state = signed_out_at_login();
    let (state, _) = update(state, Msg::UsernameChanged("rahul".to_string()));
    let (state, _) = update(state, Msg::PasswordChanged("rahul@2021".to_string()));
    let (state, effects) = update(state, Msg::LoginSubmitted);
    assert_eq!(
        effects,
        vec![Effect::SubmitLogin {
            username: "rahul".to_string(),
            password: "rahul@2021".to_string(),
        }]
    );
    assert!(login_view(&state).submitting);

    let (state, effects) = update(
        state,
        Msg::LoginSucceeded {
            token: "abc123".to_string(),
        },
    );
    assert_eq!(state.credential(), Some(&Credential::new("abc123")));
    assert_eq!(state.route(), &Route::Home);
    assert_eq!(
        effects,
        vec![Effect::PersistSession {
            credential: Credential::new("abc123"),
        }]
    );
    assert!(state.view().show_header);
}

#[test]
fn failed_login_shows_capitalized_message() {
    init_logging();
    let state = signed_out_at_login();
    let (state, _) = update(state, Msg::UsernameChanged("rahul".to_string()));
    let (state, _) = update(state, Msg::PasswordChanged("wrong".to_string()));
    let (state, _) = update(state, Msg::LoginSubmitted);
    let (state, effects) = update(
        state,
        Msg::LoginFailed {
            message: "username and password didn't match".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.route(), &Route::Login);
    let view = login_view(&state);
    let shown = view.submit_error.expect("error shown");
    assert_eq!(shown, "*Username and Password didn't match");
    assert!(!shown.contains("user"));
    assert!(!shown.contains("pass"));
    assert!(!view.submitting);
}

#[test]
fn logout_clears_session_and_returns_to_login() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SessionRestored(Some(Credential::new("abc123"))),
    );
    let (state, _) = update(state, Msg::Navigate(Route::Jobs));
    let (state, effects) = update(state, Msg::LogoutClicked);

    assert_eq!(state.credential(), None);
    assert_eq!(state.route(), &Route::Login);
    assert_eq!(effects, vec![Effect::ClearSession]);
    assert!(state.jobs().state() == &jobby_core::FetchState::Idle);

    let (state, effects) = update(state, Msg::Navigate(Route::Jobs));
    assert_eq!(state.route(), &Route::Login);
    assert!(effects.is_empty());
}
