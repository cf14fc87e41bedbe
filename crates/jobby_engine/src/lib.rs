//! Jobby engine: job board HTTP client, session persistence and effect execution.
mod client;
mod engine;
mod persist;
mod session;
mod types;

pub use client::{ApiSettings, JobBoardApi, ReqwestJobBoard, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use session::{
    system_clock, Clock, FileSessionStore, MemorySessionStore, SessionError, SessionStore,
};
pub use types::{ApiError, EngineError, EngineEvent, FailureKind};
