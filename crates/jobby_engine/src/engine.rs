use std::sync::{mpsc, Arc};
use std::thread;

use jobby_core::{Credential, JobsQuery, RequestId};
use jobby_logging::{jobby_debug, jobby_error};

use crate::client::JobBoardApi;
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Login {
        username: String,
        password: String,
    },
    Profile {
        request: RequestId,
        credential: Credential,
    },
    Jobs {
        request: RequestId,
        credential: Credential,
        query: JobsQuery,
    },
    JobDetails {
        request: RequestId,
        credential: Credential,
        job_id: String,
    },
}

/// Runs API calls on a background tokio runtime. Requests are never
/// cancelled; each completion is reported as an [`EngineEvent`] on the
/// receiver handed out by [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        api: Arc<dyn JobBoardApi>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            jobby_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn login(&self, username: impl Into<String>, password: impl Into<String>) {
        self.send(EngineCommand::Login {
            username: username.into(),
            password: password.into(),
        });
    }

    pub fn profile(&self, request: RequestId, credential: Credential) {
        self.send(EngineCommand::Profile {
            request,
            credential,
        });
    }

    pub fn jobs(&self, request: RequestId, credential: Credential, query: JobsQuery) {
        self.send(EngineCommand::Jobs {
            request,
            credential,
            query,
        });
    }

    pub fn job_details(&self, request: RequestId, credential: Credential, job_id: String) {
        self.send(EngineCommand::JobDetails {
            request,
            credential,
            job_id,
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            jobby_error!("Engine is not running; request dropped");
        }
    }
}

async fn handle_command(api: &dyn JobBoardApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Login { username, password } => EngineEvent::LoginCompleted {
            result: api.login(&username, &password).await,
        },
        EngineCommand::Profile {
            request,
            credential,
        } => EngineEvent::ProfileCompleted {
            request,
            result: api.profile(&credential).await,
        },
        EngineCommand::Jobs {
            request,
            credential,
            query,
        } => EngineEvent::JobsCompleted {
            request,
            result: api.jobs(&credential, &query).await,
        },
        EngineCommand::JobDetails {
            request,
            credential,
            job_id,
        } => EngineEvent::JobDetailsCompleted {
            request,
            result: api.job_details(&credential, &job_id).await,
        },
    }
}
