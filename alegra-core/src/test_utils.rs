//! Test helper module
//!
//! Mock secret stores and a scripted `AccountingApi`.

use std::collections::HashMap;
use std::sync::Arc;

use alegra_provider::{
    AccountingApi, AlegraError, BillQuery, InvoiceQuery, ListQuery, PaymentQuery,
};
use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::SecretStore;

// ===== InMemorySecretStore =====

#[derive(Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, String>,
    lookups: RwLock<Vec<String>>,
}

impl InMemorySecretStore {
    pub fn with<const N: usize>(entries: [(&str, &str); N]) -> Self {
        Self {
            secrets: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            lookups: RwLock::new(Vec::new()),
        }
    }

    /// Secret names requested so far, in order.
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, name: &str) -> CoreResult<Option<String>> {
        self.lookups.write().await.push(name.to_string());
        Ok(self.secrets.get(name).cloned())
    }
}

// ===== FailingSecretStore =====

pub struct FailingSecretStore;

#[async_trait]
impl SecretStore for FailingSecretStore {
    async fn get_secret(&self, _name: &str) -> CoreResult<Option<String>> {
        Err(CoreError::SecretStore("keyring locked".to_string()))
    }
}

// ===== ScriptedApi =====

/// `AccountingApi` that answers every call with the same scripted response.
pub struct ScriptedApi {
    response: Result<Value, AlegraError>,
}

impl ScriptedApi {
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self { response: Ok(body) })
    }

    pub fn failing(error: AlegraError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
        })
    }

    fn respond(&self) -> alegra_provider::Result<Value> {
        self.response.clone()
    }
}

#[async_trait]
impl AccountingApi for ScriptedApi {
    async fn list_invoices(&self, _query: &InvoiceQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn get_invoice(&self, _id: &str) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_payments(&self, _query: &PaymentQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_bills(&self, _query: &BillQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn get_bill(&self, _id: &str) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_items(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn get_item(&self, _id: &str) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_inventory_value(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_inventory_adjustments(
        &self,
        _query: &ListQuery,
    ) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_warehouses(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_bank_accounts(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_journal_entries(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn get_journal_entry(&self, _id: &str) -> alegra_provider::Result<Value> {
        self.respond()
    }
    async fn list_expenses(&self, _query: &ListQuery) -> alegra_provider::Result<Value> {
        self.respond()
    }
}

/// Minimal vendor invoice with the given id.
pub fn vendor_invoice(id: &str) -> Value {
    json!({
        "id": id,
        "date": "2024-05-02",
        "status": "open",
        "client": { "id": "10", "name": "Distribuidora Andina" },
        "total": 119_000,
        "seller": null
    })
}
