use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Largest page size the Alegra list endpoints accept.
pub const MAX_PAGE_LIMIT: u32 = 30;

/// Page-based pagination as seen by callers.
///
/// Pages are 1-indexed. Alegra itself paginates by offset, so only the
/// derived `start`/`limit` pair is ever sent on the wire (see
/// [`offset`](Self::offset)); `page` never is.
///
/// # Default
///
/// The default is `page = 1, limit = 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of records per page.
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: MAX_PAGE_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `limit` is clamped to `1..=MAX_PAGE_LIMIT`
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    /// Zero-based record offset of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

// ============ Sorting ============

/// Sort direction accepted by Alegra's `order_direction` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

/// Sort fields accepted by `/invoices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceOrderField {
    Id,
    Name,
    Date,
    DueDate,
    Status,
}

/// Sort fields accepted by `/payments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentOrderField {
    Id,
    Number,
    Date,
    Type,
}

/// Sort fields accepted by `/bills`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillOrderField {
    Date,
    Name,
    DueDate,
}

// ============ Filter enums ============

/// Direction of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Payment received.
    In,
    /// Payment made.
    Out,
}

/// Kind of purchase document listed by `/bills`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillType {
    Bill,
    SupportDocument,
    All,
}

// ============ Resource queries ============
//
// Field names below serialize to the Alegra wire names. Unset filters are
// skipped during serialization and therefore never reach the query string.

/// Query for `GET /invoices` (sales invoices).
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceQuery {
    #[serde(skip)]
    pub pagination: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<InvoiceOrderField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_after: Option<String>,
    #[serde(rename = "date_afterOrNow", skip_serializing_if = "Option::is_none")]
    pub date_after_or_now: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_before: Option<String>,
    #[serde(rename = "date_beforeOrNow", skip_serializing_if = "Option::is_none")]
    pub date_before_or_now: Option<String>,
    #[serde(rename = "dueDate_after", skip_serializing_if = "Option::is_none")]
    pub due_date_after: Option<String>,
    #[serde(rename = "dueDate_afterOrNow", skip_serializing_if = "Option::is_none")]
    pub due_date_after_or_now: Option<String>,
    #[serde(rename = "dueDate_before", skip_serializing_if = "Option::is_none")]
    pub due_date_before: Option<String>,
    #[serde(rename = "dueDate_beforeOrNow", skip_serializing_if = "Option::is_none")]
    pub due_date_before_or_now: Option<String>,
}

/// Query for `GET /payments` (payments received).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentQuery {
    #[serde(skip)]
    pub pagination: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<PaymentOrderField>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conciliation_id: Option<String>,
}

/// Query for `GET /bills` (purchase invoices).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BillQuery {
    #[serde(skip)]
    pub pagination: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<BillOrderField>,
    #[serde(rename = "billNumber", skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(rename = "purchaseOrder_id", skip_serializing_if = "Option::is_none")]
    pub purchase_order_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bill_type: Option<BillType>,
}

/// Query for list endpoints that take no filters beyond pagination and sort direction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip)]
    pub pagination: PaginationParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<SortDirection>,
}

impl ListQuery {
    /// Plain pagination with the resource's default ordering.
    pub fn page(pagination: PaginationParams) -> Self {
        Self {
            pagination,
            order_direction: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_pagination_is_first_full_page() {
        let p = PaginationParams::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 30);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = PaginationParams { page: 3, limit: 10 };
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn offset_for_every_valid_pair() {
        for page in 1..=50_u32 {
            for limit in 1..=MAX_PAGE_LIMIT {
                let p = PaginationParams { page, limit };
                assert_eq!(p.offset(), u64::from((page - 1) * limit));
            }
        }
    }

    #[test]
    fn validated_clamps_ranges() {
        let p = PaginationParams { page: 0, limit: 500 }.validated();
        assert_eq!(p, PaginationParams { page: 1, limit: 30 });

        let p = PaginationParams { page: 4, limit: 0 }.validated();
        assert_eq!(p, PaginationParams { page: 4, limit: 1 });
    }

    #[test]
    fn invoice_query_skips_unset_filters() {
        let query = InvoiceQuery {
            client_name: Some("ACME".to_string()),
            date_after_or_now: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(json["client_name"], "ACME");
        assert_eq!(json["date_afterOrNow"], "2024-01-01");
    }

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_value(SortDirection::Desc).unwrap(),
            serde_json::json!("DESC")
        );
        assert_eq!(
            serde_json::to_value(InvoiceOrderField::DueDate).unwrap(),
            serde_json::json!("dueDate")
        );
        assert_eq!(
            serde_json::to_value(BillType::SupportDocument).unwrap(),
            serde_json::json!("supportDocument")
        );
        assert_eq!(
            serde_json::to_value(PaymentType::Out).unwrap(),
            serde_json::json!("out")
        );
    }
}
