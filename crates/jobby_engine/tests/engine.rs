use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use jobby_core::{Credential, JobDetailsPage, JobList, JobsQuery, Profile};
use jobby_engine::{ApiError, EngineEvent, EngineHandle, FailureKind, JobBoardApi};

/// Answers from memory; the jobs endpoint echoes the query it was given.
struct FakeBoard;

#[async_trait::async_trait]
impl JobBoardApi for FakeBoard {
    async fn login(&self, username: &str, _password: &str) -> Result<String, ApiError> {
        if username == "rahul" {
            Ok("abc123".to_string())
        } else {
            Err(ApiError {
                kind: FailureKind::Rejected,
                message: "invalid username".to_string(),
            })
        }
    }

    async fn profile(&self, _credential: &Credential) -> Result<Profile, ApiError> {
        Err(ApiError {
            kind: FailureKind::HttpStatus(500),
            message: "boom".to_string(),
        })
    }

    async fn jobs(&self, _credential: &Credential, _query: &JobsQuery) -> Result<JobList, ApiError> {
        Ok(JobList {
            jobs: Vec::new(),
            total: 0,
        })
    }

    async fn job_details(
        &self,
        _credential: &Credential,
        _job_id: &str,
    ) -> Result<JobDetailsPage, ApiError> {
        Err(ApiError {
            kind: FailureKind::Network,
            message: "offline".to_string(),
        })
    }
}

fn next_event(events: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(event) = events.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "engine produced no event");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn completions_carry_their_request_ids() {
    let (engine, events) = EngineHandle::new(Arc::new(FakeBoard)).unwrap();
    let credential = Credential::new("abc123");

    engine.jobs(7, credential.clone(), JobsQuery::default());
    match next_event(&events) {
        EngineEvent::JobsCompleted { request, result } => {
            assert_eq!(request, 7);
            assert_eq!(result.unwrap().total, 0);
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.profile(8, credential.clone());
    match next_event(&events) {
        EngineEvent::ProfileCompleted { request, result } => {
            assert_eq!(request, 8);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.job_details(9, credential, "d1".to_string());
    match next_event(&events) {
        EngineEvent::JobDetailsCompleted { request, result } => {
            assert_eq!(request, 9);
            assert!(result.is_err());
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn login_result_is_reported() {
    let (engine, events) = EngineHandle::new(Arc::new(FakeBoard)).unwrap();
    engine.login("rahul", "rahul@2021");
    assert_eq!(
        next_event(&events),
        EngineEvent::LoginCompleted {
            result: Ok("abc123".to_string())
        }
    );

    engine.login("someone", "pw");
    match events.recv_timeout(Duration::from_secs(5)) {
        Ok(EngineEvent::LoginCompleted { result: Err(err) }) => {
            assert_eq!(err.user_message(), "invalid username");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn polling_never_waits_for_a_pending_request() {
    let (engine, events) = EngineHandle::new(Arc::new(FakeBoard)).unwrap();
    let started = Instant::now();
    assert!(events.try_recv().is_err());
    assert!(started.elapsed() < Duration::from_secs(1));

    engine.login("rahul", "rahul@2021");
    assert!(matches!(
        next_event(&events),
        EngineEvent::LoginCompleted { result: Ok(_) }
    ));
}

#[test]
fn events_end_when_the_handle_is_dropped() {
    let (engine, events) = EngineHandle::new(Arc::new(FakeBoard)).unwrap();
    drop(engine);
    assert!(events.recv_timeout(Duration::from_secs(5)).is_err());
}
