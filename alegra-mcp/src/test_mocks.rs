use super::*;

use alegra_provider::{AccountingApi, AlegraError, BillQuery, InvoiceQuery, PaymentQuery};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// A call received by [`MockAccountingApi`].
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Invoices(InvoiceQuery),
    Payments(PaymentQuery),
    Bills(BillQuery),
    List(&'static str, ListQuery),
    Get(&'static str, String),
}

/// In-memory `AccountingApi`.
///
/// `list_invoices` pages over an invoice fixture the way Alegra does
/// (offset = `(page - 1) * limit`); every other call answers with `body`.
#[derive(Default)]
pub struct MockAccountingApi {
    invoices: Vec<Value>,
    invoice_body: Option<Value>,
    body: Value,
    failure: Option<AlegraError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockAccountingApi {
    /// Serve `count` invoices with ids `1..=count`.
    pub fn with_invoices(count: u32) -> Self {
        Self {
            invoices: (1..=count).map(|id| vendor_invoice(&id.to_string())).collect(),
            ..Default::default()
        }
    }

    /// Answer invoice reads with `body` verbatim.
    pub fn with_invoice_body(body: Value) -> Self {
        Self {
            invoice_body: Some(body),
            ..Default::default()
        }
    }

    /// Answer every non-invoice read with `body`.
    pub fn with_body(body: Value) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }

    pub fn failing(error: AlegraError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }

    async fn record(&self, call: RecordedCall) -> alegra_provider::Result<()> {
        self.calls.lock().await.push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn invoice_page(&self, query: &InvoiceQuery) -> Value {
        if let Some(body) = &self.invoice_body {
            return body.clone();
        }
        let pagination = query.pagination.validated();
        let offset = usize::try_from(pagination.offset()).unwrap();
        let page: Vec<Value> = self
            .invoices
            .iter()
            .skip(offset)
            .take(pagination.limit as usize)
            .cloned()
            .collect();
        Value::Array(page)
    }

    fn invoice_by_id(&self, id: &str) -> alegra_provider::Result<Value> {
        if let Some(body) = &self.invoice_body {
            return Ok(body.clone());
        }
        self.invoices
            .iter()
            .find(|invoice| invoice["id"] == id)
            .cloned()
            .ok_or_else(|| AlegraError::NotFound {
                path: format!("/invoices/{id}"),
                raw_message: Some("La factura no existe".to_string()),
            })
    }
}

#[async_trait]
impl AccountingApi for MockAccountingApi {
    async fn list_invoices(&self, query: &InvoiceQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Invoices(query.clone())).await?;
        Ok(self.invoice_page(query))
    }

    async fn get_invoice(&self, id: &str) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Get("invoice", id.to_string()))
            .await?;
        self.invoice_by_id(id)
    }

    async fn list_payments(&self, query: &PaymentQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Payments(query.clone())).await?;
        Ok(self.body.clone())
    }

    async fn list_bills(&self, query: &BillQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Bills(query.clone())).await?;
        Ok(self.body.clone())
    }

    async fn get_bill(&self, id: &str) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Get("bill", id.to_string())).await?;
        Ok(self.body.clone())
    }

    async fn list_items(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("items", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn get_item(&self, id: &str) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Get("item", id.to_string())).await?;
        Ok(self.body.clone())
    }

    async fn list_inventory_value(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("inventory_value", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn list_inventory_adjustments(
        &self,
        query: &ListQuery,
    ) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("inventory_adjustments", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn list_warehouses(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("warehouses", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn list_bank_accounts(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("bank_accounts", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn list_journal_entries(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("journal_entries", query.clone()))
            .await?;
        Ok(self.body.clone())
    }

    async fn get_journal_entry(&self, id: &str) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::Get("journal_entry", id.to_string()))
            .await?;
        Ok(self.body.clone())
    }

    async fn list_expenses(&self, query: &ListQuery) -> alegra_provider::Result<Value> {
        self.record(RecordedCall::List("expenses", query.clone()))
            .await?;
        Ok(self.body.clone())
    }
}

/// Vendor-shaped invoice as Alegra returns it.
pub fn vendor_invoice(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "date": "2024-05-02",
        "dueDate": "2024-06-01",
        "datetime": "2024-05-02 10:15:00",
        "status": "open",
        "client": {
            "id": "10",
            "name": "Distribuidora Andina",
            "identification": "900123456",
            "email": "compras@andina.co",
            "address": {
                "province": "Cundinamarca",
                "municipality": "Bogotá",
                "description": "Cra 7 # 12-30"
            }
        },
        "numberTemplate": {
            "id": "1",
            "prefix": "FV",
            "number": id,
            "documentType": "invoice",
            "fullNumber": format!("FV{id}")
        },
        "subtotal": 100_000,
        "tax": 19_000,
        "total": 119_000,
        "totalPaid": 0,
        "balance": 119_000,
        "seller": null,
        "items": [{
            "id": "5",
            "name": "Café molido 500g",
            "price": 100_000,
            "quantity": 1,
            "tax": [{ "id": "3", "name": "IVA", "percentage": "19.00", "amount": 19_000 }],
            "total": 119_000
        }]
    })
}

pub(super) fn build_server(api: Arc<MockAccountingApi>) -> AlegraMcp {
    let service = Arc::new(AccountingService::new(api));
    AlegraMcp::new(service)
}
