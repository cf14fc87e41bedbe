use std::sync::mpsc;
use std::thread;

use jobby_core::{Credential, Effect, FetchFailed, Msg, RequestId};
use jobby_engine::{system_clock, ApiError, Clock, EngineEvent, EngineHandle, SessionStore};
use jobby_logging::{jobby_error, jobby_info, jobby_warn};

use super::app::UiEvent;

/// Executes effects produced by `update` and feeds completions back as
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn SessionStore>,
    session_ttl: chrono::Duration,
    clock: Clock,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        store: Box<dyn SessionStore>,
        session_ttl: chrono::Duration,
        ui_tx: mpsc::Sender<UiEvent>,
    ) -> Self {
        Self::with_clock(engine, events, store, session_ttl, ui_tx, system_clock())
    }

    pub fn with_clock(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        store: Box<dyn SessionStore>,
        session_ttl: chrono::Duration,
        ui_tx: mpsc::Sender<UiEvent>,
        clock: Clock,
    ) -> Self {
        spawn_event_loop(events, ui_tx);
        Self {
            engine,
            store,
            session_ttl,
            clock,
        }
    }

    pub fn restore_session(&self) -> Option<Credential> {
        self.store.get()
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitLogin { username, password } => {
                    jobby_info!("SubmitLogin username={}", username);
                    self.engine.login(username, password);
                }
                Effect::PersistSession { credential } => self.persist(&credential),
                Effect::ClearSession => {
                    if let Err(err) = self.store.clear() {
                        jobby_error!("Failed to clear session: {}", err);
                    }
                }
                Effect::FetchProfile {
                    request,
                    credential,
                } => {
                    jobby_info!("FetchProfile request={}", request);
                    self.engine.profile(request, credential);
                }
                Effect::FetchJobs {
                    request,
                    credential,
                    query,
                } => {
                    jobby_info!(
                        "FetchJobs request={} query={}",
                        request,
                        query.to_query_string()
                    );
                    self.engine.jobs(request, credential, query);
                }
                Effect::FetchJobDetails {
                    request,
                    credential,
                    job_id,
                } => {
                    jobby_info!("FetchJobDetails request={} job_id={}", request, job_id);
                    self.engine.job_details(request, credential, job_id);
                }
            }
        }
    }

    fn persist(&mut self, credential: &Credential) {
        let Some(expires_at) = (self.clock)().checked_add_signed(self.session_ttl) else {
            jobby_error!(
                "Session lifetime of {} days is out of range; not persisting",
                self.session_ttl.num_days()
            );
            return;
        };
        if let Err(err) = self.store.set(credential, expires_at) {
            jobby_error!("Failed to persist session: {}", err);
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if ui_tx.send(UiEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoginCompleted { result } => match result {
            Ok(token) => Msg::LoginSucceeded { token },
            Err(err) => {
                jobby_warn!("Login failed: {}", err);
                Msg::LoginFailed {
                    message: err.user_message(),
                }
            }
        },
        EngineEvent::ProfileCompleted { request, result } => Msg::ProfileLoaded {
            request,
            result: collapse("profile", request, result),
        },
        EngineEvent::JobsCompleted { request, result } => Msg::JobsLoaded {
            request,
            result: collapse("jobs", request, result),
        },
        EngineEvent::JobDetailsCompleted { request, result } => Msg::JobDetailsLoaded {
            request,
            result: collapse("job details", request, result),
        },
    }
}

/// Network errors, 401 and 500 all look the same to the views.
fn collapse<T>(
    source: &str,
    request: RequestId,
    result: Result<T, ApiError>,
) -> Result<T, FetchFailed> {
    result.map_err(|err| {
        jobby_warn!("{} request {} failed: {}", source, request, err);
        FetchFailed
    })
}
