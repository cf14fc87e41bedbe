use crate::{Credential, JobsQuery, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitLogin {
        username: String,
        password: String,
    },
    PersistSession {
        credential: Credential,
    },
    ClearSession,
    FetchProfile {
        request: RequestId,
        credential: Credential,
    },
    FetchJobs {
        request: RequestId,
        credential: Credential,
        query: JobsQuery,
    },
    FetchJobDetails {
        request: RequestId,
        credential: Credential,
        job_id: String,
    },
}

/// Marker for a failed authenticated request. The cause is logged where it
/// happens; views only distinguish success from failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchFailed;
