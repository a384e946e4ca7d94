//! Storage layer abstraction trait definition

mod secret_store;

pub use secret_store::SecretStore;
