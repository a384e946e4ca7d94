use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{BillQuery, InvoiceQuery, ListQuery, PaymentQuery};

/// Read access to an Alegra account.
///
/// Every method performs exactly one request and returns the response body
/// unchanged. Failures are already mapped to [`crate::AlegraError`].
#[async_trait]
pub trait AccountingApi: Send + Sync {
    /// List sales invoices (`GET /invoices`).
    async fn list_invoices(&self, query: &InvoiceQuery) -> Result<Value>;

    /// Fetch one sales invoice (`GET /invoices/{id}`).
    async fn get_invoice(&self, id: &str) -> Result<Value>;

    /// List payments (`GET /payments`).
    async fn list_payments(&self, query: &PaymentQuery) -> Result<Value>;

    /// List purchase invoices (`GET /bills`).
    async fn list_bills(&self, query: &BillQuery) -> Result<Value>;

    /// Fetch one purchase invoice (`GET /bills/{id}`).
    async fn get_bill(&self, id: &str) -> Result<Value>;

    /// List products and services (`GET /items`).
    async fn list_items(&self, query: &ListQuery) -> Result<Value>;

    /// Fetch one product or service (`GET /items/{id}`).
    async fn get_item(&self, id: &str) -> Result<Value>;

    /// List inventoried products with their stock value (`GET /items?type=product`).
    async fn list_inventory_value(&self, query: &ListQuery) -> Result<Value>;

    /// List inventory adjustments (`GET /inventory-adjustments`).
    async fn list_inventory_adjustments(&self, query: &ListQuery) -> Result<Value>;

    /// List warehouses (`GET /warehouses`).
    async fn list_warehouses(&self, query: &ListQuery) -> Result<Value>;

    /// List bank accounts (`GET /bank-accounts`).
    async fn list_bank_accounts(&self, query: &ListQuery) -> Result<Value>;

    /// List journal entries (`GET /journal-entries`).
    async fn list_journal_entries(&self, query: &ListQuery) -> Result<Value>;

    /// Fetch one journal entry (`GET /journal-entries/{id}`).
    async fn get_journal_entry(&self, id: &str) -> Result<Value>;

    /// List expenses, i.e. payments made against bills (`GET /bill-payments`).
    async fn list_expenses(&self, query: &ListQuery) -> Result<Value>;
}
