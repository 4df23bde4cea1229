//! Error handling for the story client.
//!
//! Every fallible operation returns [`SnoozeResult`]. Errors are grouped into
//! [`ErrorCategory`] values so callers can pick a message without matching
//! on every variant:
//!
//! | Category | Raised when |
//! |----------|-------------|
//! | Network | transport failure or timeout |
//! | Server | non-2xx without a validation/auth reason, undecodable body |
//! | Validation | 400, 409, 422 |
//! | Auth | 401, 403, bad credentials, no session |
//! | Client | unparseable story URL, unknown story id |
//! | Storage | persisted credentials could not be read or written |
//!
//! Nothing retries automatically.

mod category;
mod snooze_error;

pub use category::ErrorCategory;
pub use snooze_error::{SnoozeError, SnoozeResult};
