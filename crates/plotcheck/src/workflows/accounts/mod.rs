//! Registration and login backed by a key-addressed credential store.

pub mod router;
pub mod store;

pub use router::{account_router, AuthResponse, LoginRequest, RegisterRequest};
pub use store::{AccountError, CredentialStore, InMemoryCredentialStore, NewAccount, UserAccount};
