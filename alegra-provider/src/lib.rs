//! # alegra-provider
//!
//! A typed, read-only client for the [Alegra](https://www.alegra.com/) accounting
//! REST API, plus the projection that turns Alegra invoices into a compact shape.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for TLS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alegra_provider::{
//!     AccountingApi, AlegraClient, AlegraConfig, InvoiceQuery, PaginationParams,
//!     parse_invoice_list, simplify_invoices,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlegraClient::new(AlegraConfig::new("me@example.com", "api-token"))?;
//!
//!     let query = InvoiceQuery {
//!         pagination: PaginationParams { page: 2, limit: 5 },
//!         ..Default::default()
//!     };
//!     let body = client.list_invoices(&query).await?;
//!
//!     if let Some(invoices) = parse_invoice_list(&body) {
//!         for invoice in simplify_invoices(&invoices) {
//!             println!("{:?} {:?}", invoice.number_template.full_number, invoice.total);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! Callers paginate by page (`page >= 1`, `1 <= limit <= 30`). Alegra paginates
//! by offset, so the client sends `start = (page - 1) * limit` and `limit`.
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, AlegraError>`](AlegraError). Non-success
//! statuses are always mapped:
//!
//! - [`AlegraError::InvalidCredentials`]: HTTP 401
//! - [`AlegraError::PermissionDenied`]: HTTP 403
//! - [`AlegraError::NotFound`]: HTTP 404
//! - [`AlegraError::RateLimited`]: HTTP 429
//! - [`AlegraError::ServerError`]: HTTP 5xx
//! - [`AlegraError::Api`]: anything else
//!
//! Requests are never retried.

mod client;
mod error;
mod http_client;
pub mod invoice;
mod query;
mod traits;
mod types;
mod utils;

pub use client::{ALEGRA_API_BASE, AlegraClient, AlegraConfig};

pub use error::{AlegraError, Result};

pub use invoice::{
    SimplifiedInvoice, VendorInvoice, parse_invoice, parse_invoice_list, simplify_invoice,
    simplify_invoices,
};

pub use traits::AccountingApi;

pub use types::{
    BillOrderField, BillQuery, BillType, InvoiceOrderField, InvoiceQuery, ListQuery,
    MAX_PAGE_LIMIT, PaginationParams, PaymentOrderField, PaymentQuery, PaymentType,
    SortDirection,
};

pub use utils::log_sanitizer;
