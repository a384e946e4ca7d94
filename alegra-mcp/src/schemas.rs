//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools.
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required by rmcp.
//! Enum parameters reject unknown values during deserialization.

use alegra_provider::{
    BillOrderField, BillQuery, BillType, InvoiceOrderField, InvoiceQuery, ListQuery,
    MAX_PAGE_LIMIT, PaginationParams, PaymentOrderField, PaymentQuery, PaymentType,
    SortDirection,
};
use schemars::JsonSchema;
use serde::Deserialize;

const fn default_page() -> u32 {
    1
}

const fn default_limit() -> u32 {
    MAX_PAGE_LIMIT
}

// ============ Enum parameters ============

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum OrderDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl From<OrderDirection> for SortDirection {
    fn from(value: OrderDirection) -> Self {
        match value {
            OrderDirection::Asc => Self::Asc,
            OrderDirection::Desc => Self::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceSortField {
    Id,
    Name,
    Date,
    DueDate,
    Status,
}

impl From<InvoiceSortField> for InvoiceOrderField {
    fn from(value: InvoiceSortField) -> Self {
        match value {
            InvoiceSortField::Id => Self::Id,
            InvoiceSortField::Name => Self::Name,
            InvoiceSortField::Date => Self::Date,
            InvoiceSortField::DueDate => Self::DueDate,
            InvoiceSortField::Status => Self::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PaymentSortField {
    Id,
    Number,
    Date,
    Type,
}

impl From<PaymentSortField> for PaymentOrderField {
    fn from(value: PaymentSortField) -> Self {
        match value {
            PaymentSortField::Id => Self::Id,
            PaymentSortField::Number => Self::Number,
            PaymentSortField::Date => Self::Date,
            PaymentSortField::Type => Self::Type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BillSortField {
    Date,
    Name,
    DueDate,
}

impl From<BillSortField> for BillOrderField {
    fn from(value: BillSortField) -> Self {
        match value {
            BillSortField::Date => Self::Date,
            BillSortField::Name => Self::Name,
            BillSortField::DueDate => Self::DueDate,
        }
    }
}

/// Payment direction: `in` for received, `out` for made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    In,
    Out,
}

impl From<PaymentDirection> for PaymentType {
    fn from(value: PaymentDirection) -> Self {
        match value {
            PaymentDirection::In => Self::In,
            PaymentDirection::Out => Self::Out,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseDocumentType {
    Bill,
    SupportDocument,
    All,
}

impl From<PurchaseDocumentType> for BillType {
    fn from(value: PurchaseDocumentType) -> Self {
        match value {
            PurchaseDocumentType::Bill => Self::Bill,
            PurchaseDocumentType::SupportDocument => Self::SupportDocument,
            PurchaseDocumentType::All => Self::All,
        }
    }
}

// ============ Tool parameters ============

/// Parameters for tools that only paginate.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PageParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (1-indexed, default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of records per page (default: 30, max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: u32,
}

/// Parameters for paginated tools with a sort direction.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SortedPageParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (1-indexed, default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of records per page (default: 30, max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: u32,

    #[schemars(description = "Sort direction, ASC or DESC")]
    pub order_direction: Option<OrderDirection>,
}

impl SortedPageParams {
    pub fn to_query(&self, pagination: PaginationParams) -> ListQuery {
        ListQuery {
            pagination,
            order_direction: self.order_direction.map(Into::into),
        }
    }
}

/// Parameters for single-entity lookups.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EntityIdParams {
    #[schemars(description = "Alegra identifier of the record")]
    pub id: String,
}

/// Parameters for `get_invoices`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct InvoiceListParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (1-indexed, default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of invoices per page (default: 30, max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: u32,

    #[schemars(description = "Sort direction (default: DESC, newest first)")]
    pub order_direction: Option<OrderDirection>,

    #[schemars(description = "Sort field (default: date)")]
    pub order_field: Option<InvoiceSortField>,

    #[schemars(description = "Invoice identifier")]
    pub id: Option<String>,

    #[schemars(description = "Issue date, yyyy-MM-dd")]
    pub date: Option<String>,

    #[schemars(description = "Due date, yyyy-MM-dd")]
    pub due_date: Option<String>,

    #[schemars(description = "Invoice status, e.g. open, closed, void, draft")]
    pub status: Option<String>,

    #[schemars(description = "Client identifier")]
    pub client_id: Option<String>,

    #[schemars(description = "Client name")]
    pub client_name: Option<String>,

    #[schemars(description = "Client tax identification")]
    pub client_identification: Option<String>,

    #[schemars(description = "Only invoices containing this item")]
    pub item_id: Option<String>,

    #[schemars(description = "Issued after this date, yyyy-MM-dd")]
    pub date_after: Option<String>,

    #[schemars(description = "Issued on or after this date, yyyy-MM-dd")]
    pub date_after_or_now: Option<String>,

    #[schemars(description = "Issued before this date, yyyy-MM-dd")]
    pub date_before: Option<String>,

    #[schemars(description = "Issued on or before this date, yyyy-MM-dd")]
    pub date_before_or_now: Option<String>,

    #[schemars(description = "Due after this date, yyyy-MM-dd")]
    pub due_date_after: Option<String>,

    #[schemars(description = "Due on or after this date, yyyy-MM-dd")]
    pub due_date_after_or_now: Option<String>,

    #[schemars(description = "Due before this date, yyyy-MM-dd")]
    pub due_date_before: Option<String>,

    #[schemars(description = "Due on or before this date, yyyy-MM-dd")]
    pub due_date_before_or_now: Option<String>,
}

impl InvoiceListParams {
    pub fn into_query(self, pagination: PaginationParams) -> InvoiceQuery {
        InvoiceQuery {
            pagination,
            order_direction: self.order_direction.map(Into::into),
            order_field: self.order_field.map(Into::into),
            id: self.id,
            date: self.date,
            due_date: self.due_date,
            status: self.status,
            client_id: self.client_id,
            client_name: self.client_name,
            client_identification: self.client_identification,
            item_id: self.item_id,
            date_after: self.date_after,
            date_after_or_now: self.date_after_or_now,
            date_before: self.date_before,
            date_before_or_now: self.date_before_or_now,
            due_date_after: self.due_date_after,
            due_date_after_or_now: self.due_date_after_or_now,
            due_date_before: self.due_date_before,
            due_date_before_or_now: self.due_date_before_or_now,
        }
    }
}

/// Parameters for `get_payment_received`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PaymentListParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (1-indexed, default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of payments per page (default: 30, max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: u32,

    #[schemars(description = "Sort direction (default: DESC)")]
    pub order_direction: Option<OrderDirection>,

    #[schemars(description = "Sort field (default: date)")]
    pub order_field: Option<PaymentSortField>,

    #[serde(rename = "type")]
    #[schemars(description = "Payment direction: in (received) or out (made)")]
    pub payment_type: Option<PaymentDirection>,

    #[schemars(description = "Payment identifier")]
    pub id: Option<String>,

    #[schemars(description = "Client identifier")]
    pub client_id: Option<String>,

    #[schemars(description = "Bank reconciliation identifier")]
    pub conciliation_id: Option<String>,
}

impl PaymentListParams {
    pub fn into_query(self, pagination: PaginationParams) -> PaymentQuery {
        PaymentQuery {
            pagination,
            order_direction: self.order_direction.map(Into::into),
            order_field: self.order_field.map(Into::into),
            payment_type: self.payment_type.map(Into::into),
            id: self.id,
            client_id: self.client_id,
            conciliation_id: self.conciliation_id,
        }
    }
}

/// Parameters for `get_purchase_invoices`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct BillListParams {
    #[serde(default = "default_page")]
    #[schemars(description = "Page number (1-indexed, default: 1)", range(min = 1))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[schemars(
        description = "Number of purchase invoices per page (default: 30, max: 30)",
        range(min = 1, max = 30)
    )]
    pub limit: u32,

    #[schemars(description = "Sort direction (default: DESC)")]
    pub order_direction: Option<OrderDirection>,

    #[schemars(description = "Sort field (default: date)")]
    pub order_field: Option<BillSortField>,

    #[schemars(description = "Supplier's document number")]
    pub bill_number: Option<String>,

    #[schemars(description = "Supplier name")]
    pub client_name: Option<String>,

    #[schemars(description = "Issue date, yyyy-MM-dd")]
    pub date: Option<String>,

    #[schemars(description = "Due date, yyyy-MM-dd")]
    pub due_date: Option<String>,

    #[schemars(description = "Document status, e.g. open, closed, void")]
    pub status: Option<String>,

    #[schemars(description = "Only documents containing this item")]
    pub item_id: Option<String>,

    #[schemars(description = "Supplier identifier")]
    pub client_id: Option<String>,

    #[schemars(description = "Provider name")]
    pub provider_name: Option<String>,

    #[schemars(description = "Purchase order identifier")]
    pub purchase_order_id: Option<String>,

    #[serde(rename = "type")]
    #[schemars(description = "Document type: bill, supportDocument or all")]
    pub bill_type: Option<PurchaseDocumentType>,
}

impl BillListParams {
    pub fn into_query(self, pagination: PaginationParams) -> BillQuery {
        BillQuery {
            pagination,
            order_direction: self.order_direction.map(Into::into),
            order_field: self.order_field.map(Into::into),
            bill_number: self.bill_number,
            client_name: self.client_name,
            date: self.date,
            due_date: self.due_date,
            status: self.status,
            item_id: self.item_id,
            client_id: self.client_id,
            provider_name: self.provider_name,
            purchase_order_id: self.purchase_order_id,
            bill_type: self.bill_type.map(Into::into),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use schemars::schema_for;

    #[test]
    fn page_and_limit_default_when_missing() {
        let params: PageParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 30);
    }

    #[test]
    fn invoice_filters_deserialize() {
        let json = serde_json::json!({
            "page": 2,
            "limit": 5,
            "order_direction": "ASC",
            "order_field": "dueDate",
            "client_name": "ACME",
            "date_after_or_now": "2024-01-01"
        });

        let params: InvoiceListParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.page, 2);
        assert_eq!(params.order_direction, Some(OrderDirection::Asc));
        assert_eq!(params.order_field, Some(InvoiceSortField::DueDate));

        let query = params.into_query(PaginationParams { page: 2, limit: 5 });
        assert_eq!(query.order_direction, Some(SortDirection::Asc));
        assert_eq!(query.order_field, Some(InvoiceOrderField::DueDate));
        assert_eq!(query.client_name.as_deref(), Some("ACME"));
        assert_eq!(query.date_after_or_now.as_deref(), Some("2024-01-01"));
        assert!(query.status.is_none());
    }

    #[test]
    fn unknown_enum_value_fails() {
        let json = serde_json::json!({ "order_direction": "SIDEWAYS" });
        assert!(serde_json::from_value::<SortedPageParams>(json).is_err());

        let json = serde_json::json!({ "type": "sideways" });
        assert!(serde_json::from_value::<PaymentListParams>(json).is_err());
    }

    #[test]
    fn payment_type_uses_type_key() {
        let json = serde_json::json!({ "type": "out" });
        let params: PaymentListParams = serde_json::from_value(json).unwrap();
        let query = params.into_query(PaginationParams::default());
        assert_eq!(query.payment_type, Some(PaymentType::Out));
    }

    #[test]
    fn bill_type_converts() {
        let json = serde_json::json!({ "type": "supportDocument", "bill_number": "FC-3" });
        let params: BillListParams = serde_json::from_value(json).unwrap();
        let query = params.into_query(PaginationParams::default());
        assert_eq!(query.bill_type, Some(BillType::SupportDocument));
        assert_eq!(query.bill_number.as_deref(), Some("FC-3"));
    }

    #[test]
    fn entity_id_is_required() {
        assert!(serde_json::from_value::<EntityIdParams>(serde_json::json!({})).is_err());
    }

    #[test]
    fn schemas_declare_limit_bounds_and_defaults() {
        let schema = serde_json::to_string(&schema_for!(InvoiceListParams)).unwrap();
        assert!(schema.contains("\"maximum\":30"));
        assert!(schema.contains("\"default\":30"));
        assert!(schema.contains("\"dueDate\""));

        let schema = serde_json::to_string(&schema_for!(PageParams)).unwrap();
        assert!(schema.contains("\"minimum\":1"));
    }
}
