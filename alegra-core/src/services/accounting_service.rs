//! Accounting read service

use std::sync::Arc;

use alegra_provider::{
    AccountingApi, AlegraError, BillQuery, InvoiceQuery, ListQuery, PaymentQuery,
    SimplifiedInvoice, parse_invoice, parse_invoice_list, simplify_invoice, simplify_invoices,
};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Outcome of an invoice listing.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceListing {
    /// The response was a list of invoices.
    Parsed(Vec<SimplifiedInvoice>),
    /// The response did not have the expected shape.
    Unparseable,
}

/// Outcome of a single-invoice lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceLookup {
    Found(Box<SimplifiedInvoice>),
    Unparseable,
}

/// One method per capability exposed to agents.
///
/// Invoice reads are normalized; everything else is passed through unchanged.
pub struct AccountingService {
    api: Arc<dyn AccountingApi>,
}

impl AccountingService {
    #[must_use]
    pub fn new(api: Arc<dyn AccountingApi>) -> Self {
        Self { api }
    }

    pub async fn list_invoices(&self, query: &InvoiceQuery) -> CoreResult<InvoiceListing> {
        let body = self
            .api
            .list_invoices(query)
            .await
            .map_err(|e| handle_provider_error("list_invoices", e))?;

        Ok(match parse_invoice_list(&body) {
            Some(invoices) => InvoiceListing::Parsed(simplify_invoices(&invoices)),
            None => InvoiceListing::Unparseable,
        })
    }

    pub async fn get_invoice(&self, id: &str) -> CoreResult<InvoiceLookup> {
        let body = self
            .api
            .get_invoice(id)
            .await
            .map_err(|e| handle_provider_error("get_invoice", e))?;

        Ok(match parse_invoice(&body) {
            Some(invoice) => InvoiceLookup::Found(Box::new(simplify_invoice(&invoice))),
            None => InvoiceLookup::Unparseable,
        })
    }

    pub async fn list_payments(&self, query: &PaymentQuery) -> CoreResult<Value> {
        passthrough("list_payments", self.api.list_payments(query).await)
    }

    pub async fn list_bills(&self, query: &BillQuery) -> CoreResult<Value> {
        passthrough("list_bills", self.api.list_bills(query).await)
    }

    pub async fn get_bill(&self, id: &str) -> CoreResult<Value> {
        passthrough("get_bill", self.api.get_bill(id).await)
    }

    pub async fn list_items(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough("list_items", self.api.list_items(query).await)
    }

    pub async fn get_item(&self, id: &str) -> CoreResult<Value> {
        passthrough("get_item", self.api.get_item(id).await)
    }

    pub async fn list_inventory_value(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough(
            "list_inventory_value",
            self.api.list_inventory_value(query).await,
        )
    }

    pub async fn list_inventory_adjustments(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough(
            "list_inventory_adjustments",
            self.api.list_inventory_adjustments(query).await,
        )
    }

    pub async fn list_warehouses(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough("list_warehouses", self.api.list_warehouses(query).await)
    }

    pub async fn list_bank_accounts(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough("list_bank_accounts", self.api.list_bank_accounts(query).await)
    }

    pub async fn list_journal_entries(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough(
            "list_journal_entries",
            self.api.list_journal_entries(query).await,
        )
    }

    pub async fn get_journal_entry(&self, id: &str) -> CoreResult<Value> {
        passthrough("get_journal_entry", self.api.get_journal_entry(id).await)
    }

    pub async fn list_expenses(&self, query: &ListQuery) -> CoreResult<Value> {
        passthrough("list_expenses", self.api.list_expenses(query).await)
    }
}

fn passthrough(operation: &str, result: alegra_provider::Result<Value>) -> CoreResult<Value> {
    result.map_err(|e| handle_provider_error(operation, e))
}

/// Log a provider failure at the level its kind warrants and wrap it.
fn handle_provider_error(operation: &str, err: AlegraError) -> CoreError {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
    CoreError::Provider(err)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{ScriptedApi, vendor_invoice};
    use serde_json::json;

    #[tokio::test]
    async fn invoices_are_simplified() {
        let api = ScriptedApi::ok(json!([vendor_invoice("1"), vendor_invoice("2")]));
        let svc = AccountingService::new(api);

        let InvoiceListing::Parsed(invoices) =
            svc.list_invoices(&InvoiceQuery::default()).await.unwrap()
        else {
            panic!("expected parsed invoices");
        };

        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[1].id, Some(json!("2")));
        assert_eq!(invoices[0].seller.id, None);
    }

    #[tokio::test]
    async fn object_body_is_unparseable() {
        let svc = AccountingService::new(ScriptedApi::ok(json!({})));
        let listing = svc.list_invoices(&InvoiceQuery::default()).await.unwrap();
        assert_eq!(listing, InvoiceListing::Unparseable);
    }

    #[tokio::test]
    async fn single_invoice_is_simplified() {
        let svc = AccountingService::new(ScriptedApi::ok(vendor_invoice("77")));
        let InvoiceLookup::Found(invoice) = svc.get_invoice("77").await.unwrap() else {
            panic!("expected an invoice");
        };
        assert_eq!(invoice.id, Some(json!("77")));
        assert_eq!(invoice.client.name, Some(json!("Distribuidora Andina")));
    }

    #[tokio::test]
    async fn array_body_for_single_invoice_is_unparseable() {
        let svc = AccountingService::new(ScriptedApi::ok(json!([])));
        assert_eq!(
            svc.get_invoice("1").await.unwrap(),
            InvoiceLookup::Unparseable
        );
    }

    #[tokio::test]
    async fn other_resources_pass_through_unchanged() {
        let body = json!([{ "id": "w1", "name": "Bodega", "extra": { "nested": [1, 2] } }]);
        let svc = AccountingService::new(ScriptedApi::ok(body.clone()));

        assert_eq!(svc.list_warehouses(&ListQuery::default()).await.unwrap(), body);
        assert_eq!(svc.get_bill("b1").await.unwrap(), body);
        assert_eq!(
            svc.list_payments(&PaymentQuery::default()).await.unwrap(),
            body
        );
    }

    #[tokio::test]
    async fn provider_errors_are_wrapped() {
        let svc = AccountingService::new(ScriptedApi::failing(AlegraError::InvalidCredentials {
            raw_message: None,
        }));

        let err = svc.list_items(&ListQuery::default()).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(AlegraError::InvalidCredentials { .. })
        ));

        let err = svc.list_invoices(&InvoiceQuery::default()).await.unwrap_err();
        assert!(err.is_expected());
    }
}
