//! Persisted authentication state.

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager};
