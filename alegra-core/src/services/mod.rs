//! Business logic service layer

mod accounting_service;
mod credential_service;

pub use accounting_service::{AccountingService, InvoiceListing, InvoiceLookup};
pub use credential_service::CredentialService;
