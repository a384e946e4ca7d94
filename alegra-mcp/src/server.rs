//! MCP Server implementation for Alegra.
//!
//! Exposes 14 read-only tools for AI agents to query Alegra accounting data.

use std::sync::Arc;

use alegra_core::{AccountingService, CoreError, CoreResult, InvoiceListing, InvoiceLookup};
use alegra_provider::{ListQuery, MAX_PAGE_LIMIT, PaginationParams};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use serde_json::json;

use crate::schemas::{
    BillListParams, EntityIdParams, InvoiceListParams, PageParams, PaymentListParams,
    SortedPageParams,
};

pub const INVOICE_LIST_PARSE_FAILURE: &str = "Failed to parse invoices from Alegra response";
pub const INVOICE_PARSE_FAILURE: &str = "Failed to parse invoice from Alegra response";

/// Sanitize error messages to prevent sensitive information leakage.
///
/// Logs the full error to stderr but returns a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(
        format!("{context} failed - check server logs for details"),
        None,
    )
}

/// Validate page/limit against the bounds the schemas advertise.
fn pagination(page: u32, limit: u32) -> Result<PaginationParams, McpError> {
    if page < 1 {
        return Err(McpError::invalid_params(
            format!("page must be >= 1 (got {page})"),
            None,
        ));
    }
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(McpError::invalid_params(
            format!("limit must be between 1 and {MAX_PAGE_LIMIT} (got {limit})"),
            None,
        ));
    }
    Ok(PaginationParams { page, limit })
}

fn require_id(params: &EntityIdParams) -> Result<&str, McpError> {
    let id = params.id.trim();
    if id.is_empty() {
        return Err(McpError::invalid_params("id must not be blank", None));
    }
    Ok(id)
}

fn render_json<T: Serialize>(value: &T, tool_name: &str) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| sanitize_internal_error(e, &format!("Serialize {tool_name} result")))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Error-flagged result describing an upstream failure.
///
/// Carries the error code, the HTTP status when there was one, and the
/// display text. Credentials never reach any of the three.
fn upstream_failure(error: &CoreError, tool_name: &str) -> CallToolResult {
    let (code, status) = match error {
        CoreError::Provider(e) => (e.code(), e.status()),
        CoreError::SecretStore(_) => ("SecretStore", None),
        CoreError::Configuration(_) => ("Configuration", None),
    };
    let payload = json!({
        "error": code,
        "status": status,
        "message": error.to_string(),
    });

    tracing::debug!("{tool_name} returned {code}");
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

/// Render a service result: JSON on success, error-flagged result on failure.
fn respond<T: Serialize>(result: CoreResult<T>, tool_name: &str) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => render_json(&value, tool_name),
        Err(e) => Ok(upstream_failure(&e, tool_name)),
    }
}

/// MCP Server for Alegra.
///
/// Provides AI agents with read access to invoices, payments, purchases,
/// inventory, banking and accounting records through the Model Context
/// Protocol.
#[derive(Clone)]
pub struct AlegraMcp {
    service: Arc<AccountingService>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl AlegraMcp {
    /// Create a new MCP server instance.
    #[must_use]
    pub fn new(service: Arc<AccountingService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl AlegraMcp {
    /// List sales invoices in the simplified shape.
    #[tool(
        description = "Retrieve invoices from Alegra POS with pagination. Returns newest invoices first."
    )]
    async fn get_invoices(
        &self,
        Parameters(params): Parameters<InvoiceListParams>,
    ) -> Result<CallToolResult, McpError> {
        let pagination = pagination(params.page, params.limit)?;
        let query = params.into_query(pagination);

        match self.service.list_invoices(&query).await {
            Ok(InvoiceListing::Parsed(invoices)) => render_json(&invoices, "get_invoices"),
            Ok(InvoiceListing::Unparseable) => Ok(CallToolResult::error(vec![Content::text(
                INVOICE_LIST_PARSE_FAILURE,
            )])),
            Err(e) => Ok(upstream_failure(&e, "get_invoices")),
        }
    }

    /// Fetch one sales invoice in the simplified shape.
    #[tool(description = "Retrieve a single Alegra sales invoice by id, in the simplified invoice shape")]
    async fn get_invoice(
        &self,
        Parameters(params): Parameters<EntityIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = require_id(&params)?;

        match self.service.get_invoice(id).await {
            Ok(InvoiceLookup::Found(invoice)) => render_json(&invoice, "get_invoice"),
            Ok(InvoiceLookup::Unparseable) => Ok(CallToolResult::error(vec![Content::text(
                INVOICE_PARSE_FAILURE,
            )])),
            Err(e) => Ok(upstream_failure(&e, "get_invoice")),
        }
    }

    #[tool(
        description = "Retrieve payments from Alegra with pagination and filters (type in/out, client, reconciliation)"
    )]
    async fn get_payment_received(
        &self,
        Parameters(params): Parameters<PaymentListParams>,
    ) -> Result<CallToolResult, McpError> {
        let pagination = pagination(params.page, params.limit)?;
        let query = params.into_query(pagination);
        respond(
            self.service.list_payments(&query).await,
            "get_payment_received",
        )
    }

    #[tool(
        description = "Retrieve purchase invoices (bills and support documents) from Alegra with pagination and filters"
    )]
    async fn get_purchase_invoices(
        &self,
        Parameters(params): Parameters<BillListParams>,
    ) -> Result<CallToolResult, McpError> {
        let pagination = pagination(params.page, params.limit)?;
        let query = params.into_query(pagination);
        respond(self.service.list_bills(&query).await, "get_purchase_invoices")
    }

    #[tool(description = "Retrieve a single Alegra purchase invoice by id")]
    async fn get_purchase_invoice(
        &self,
        Parameters(params): Parameters<EntityIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = require_id(&params)?;
        respond(self.service.get_bill(id).await, "get_purchase_invoice")
    }

    #[tool(description = "Retrieve products and services from Alegra with pagination, sorted by name")]
    async fn get_products_and_services(
        &self,
        Parameters(params): Parameters<SortedPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.to_query(pagination(params.page, params.limit)?);
        respond(
            self.service.list_items(&query).await,
            "get_products_and_services",
        )
    }

    #[tool(description = "Retrieve a single Alegra product or service by id")]
    async fn get_product(
        &self,
        Parameters(params): Parameters<EntityIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = require_id(&params)?;
        respond(self.service.get_item(id).await, "get_product")
    }

    #[tool(description = "Retrieve the inventory value report (products with quantities and costs)")]
    async fn get_inventory_value(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = ListQuery::page(pagination(params.page, params.limit)?);
        respond(
            self.service.list_inventory_value(&query).await,
            "get_inventory_value",
        )
    }

    #[tool(description = "Retrieve inventory adjustments from Alegra with pagination")]
    async fn get_inventory_adjustments(
        &self,
        Parameters(params): Parameters<SortedPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.to_query(pagination(params.page, params.limit)?);
        respond(
            self.service.list_inventory_adjustments(&query).await,
            "get_inventory_adjustments",
        )
    }

    #[tool(description = "Retrieve warehouses configured in Alegra")]
    async fn get_warehouses(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = ListQuery::page(pagination(params.page, params.limit)?);
        respond(self.service.list_warehouses(&query).await, "get_warehouses")
    }

    #[tool(description = "Retrieve bank accounts configured in Alegra")]
    async fn get_bank_accounts(
        &self,
        Parameters(params): Parameters<PageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = ListQuery::page(pagination(params.page, params.limit)?);
        respond(
            self.service.list_bank_accounts(&query).await,
            "get_bank_accounts",
        )
    }

    #[tool(description = "Retrieve accounting journal entries from Alegra with pagination")]
    async fn get_journal_entries(
        &self,
        Parameters(params): Parameters<SortedPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.to_query(pagination(params.page, params.limit)?);
        respond(
            self.service.list_journal_entries(&query).await,
            "get_journal_entries",
        )
    }

    #[tool(description = "Retrieve a single Alegra journal entry by id")]
    async fn get_journal_entry(
        &self,
        Parameters(params): Parameters<EntityIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = require_id(&params)?;
        respond(
            self.service.get_journal_entry(id).await,
            "get_journal_entry",
        )
    }

    #[tool(description = "Retrieve expenses (payments made) from Alegra with pagination")]
    async fn get_expenses(
        &self,
        Parameters(params): Parameters<SortedPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.to_query(pagination(params.page, params.limit)?);
        respond(self.service.list_expenses(&query).await, "get_expenses")
    }
}

#[tool_handler]
impl ServerHandler for AlegraMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Alegra MCP Server - Read-only access to an Alegra accounting account. \
                 Sales: get_invoices, get_invoice, get_payment_received. \
                 Purchases: get_purchase_invoices, get_purchase_invoice, get_expenses. \
                 Inventory: get_products_and_services, get_product, get_inventory_value, \
                 get_inventory_adjustments, get_warehouses. \
                 Banking and accounting: get_bank_accounts, get_journal_entries, get_journal_entry. \
                 List tools paginate with page (from 1) and limit (1 to 30)."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod client_integration_tests;
