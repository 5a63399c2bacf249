pub mod connection;
pub mod error_context;
pub mod executor;

pub use connection::{connect_with_retry, mask_url_password};
pub use error_context::StatementError;
pub use executor::{Executor, PgExecutor, RecordingExecutor};
