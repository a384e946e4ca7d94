//! Core type definitions

mod credentials;

pub use credentials::{AlegraCredentials, SecretNames};
