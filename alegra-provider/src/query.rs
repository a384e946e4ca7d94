//! Declarative per-resource query tables
//!
//! Every list endpoint is described by one [`ResourceSpec`]: its path and the
//! allow-list of query keys it forwards, each with an optional default. A
//! single builder, [`build_query`], turns pagination plus a typed query
//! struct into the wire parameters for any resource.
//!
//! Typed queries (see [`crate::types`]) serialize to wire names and skip
//! unset fields, so the builder only ever sees filters the caller supplied.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AlegraError, Result};
use crate::types::PaginationParams;

/// One forwarded query key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FilterSpec {
    /// Wire name, which is also the serialized field name of the typed query.
    pub name: &'static str,
    /// Value sent when the caller does not supply one.
    pub default: Option<&'static str>,
}

const fn filter(name: &'static str) -> FilterSpec {
    FilterSpec {
        name,
        default: None,
    }
}

const fn defaulted(name: &'static str, default: &'static str) -> FilterSpec {
    FilterSpec {
        name,
        default: Some(default),
    }
}

/// Description of one paginated Alegra list endpoint.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResourceSpec {
    /// Name used in logs.
    pub name: &'static str,
    /// Path relative to the API base URL.
    pub path: &'static str,
    /// Forwarded keys in wire order.
    pub filters: &'static [FilterSpec],
}

impl ResourceSpec {
    fn allows(&self, key: &str) -> bool {
        self.filters.iter().any(|f| f.name == key)
    }
}

pub(crate) const INVOICES: ResourceSpec = ResourceSpec {
    name: "invoices",
    path: "/invoices",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
        filter("id"),
        filter("date"),
        filter("dueDate"),
        filter("status"),
        filter("client_id"),
        filter("client_name"),
        filter("client_identification"),
        filter("item_id"),
        filter("date_after"),
        filter("date_afterOrNow"),
        filter("date_before"),
        filter("date_beforeOrNow"),
        filter("dueDate_after"),
        filter("dueDate_afterOrNow"),
        filter("dueDate_before"),
        filter("dueDate_beforeOrNow"),
    ],
};

pub(crate) const PAYMENTS: ResourceSpec = ResourceSpec {
    name: "payments",
    path: "/payments",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
        filter("type"),
        filter("id"),
        filter("client_id"),
        filter("conciliation_id"),
    ],
};

pub(crate) const BILLS: ResourceSpec = ResourceSpec {
    name: "bills",
    path: "/bills",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
        filter("billNumber"),
        filter("client_name"),
        filter("date"),
        filter("dueDate"),
        filter("status"),
        filter("item_id"),
        filter("client_id"),
        filter("provider_name"),
        filter("purchaseOrder_id"),
        filter("type"),
    ],
};

pub(crate) const ITEMS: ResourceSpec = ResourceSpec {
    name: "items",
    path: "/items",
    filters: &[
        defaulted("order_direction", "ASC"),
        defaulted("order_field", "name"),
    ],
};

pub(crate) const INVENTORY_VALUE: ResourceSpec = ResourceSpec {
    name: "inventory value",
    path: "/items",
    filters: &[
        defaulted("type", "product"),
        defaulted("order_direction", "DESC"),
    ],
};

pub(crate) const INVENTORY_ADJUSTMENTS: ResourceSpec = ResourceSpec {
    name: "inventory adjustments",
    path: "/inventory-adjustments",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
    ],
};

pub(crate) const WAREHOUSES: ResourceSpec = ResourceSpec {
    name: "warehouses",
    path: "/warehouses",
    filters: &[],
};

pub(crate) const BANK_ACCOUNTS: ResourceSpec = ResourceSpec {
    name: "bank accounts",
    path: "/bank-accounts",
    filters: &[],
};

pub(crate) const JOURNAL_ENTRIES: ResourceSpec = ResourceSpec {
    name: "journal entries",
    path: "/journal-entries",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
    ],
};

pub(crate) const EXPENSES: ResourceSpec = ResourceSpec {
    name: "expenses",
    path: "/bill-payments",
    filters: &[
        defaulted("order_direction", "DESC"),
        defaulted("order_field", "date"),
    ],
};

/// Render a supplied filter value as query text. Empty strings count as unset.
fn scalar_to_query(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Build the query string pairs for one list request.
///
/// Emits `start`/`limit` first, then every key of the resource's table in
/// table order: the caller's value when present and non-empty, else the
/// table default, else nothing. Keys the table does not list are dropped.
pub(crate) fn build_query<Q: Serialize>(
    resource: &ResourceSpec,
    pagination: &PaginationParams,
    filters: &Q,
) -> Result<Vec<(String, String)>> {
    let supplied = match serde_json::to_value(filters) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(other) => {
            return Err(AlegraError::InvalidParameter {
                param: "query".to_string(),
                detail: format!("expected an object of filters, got {other}"),
            });
        }
        Err(e) => {
            return Err(AlegraError::InvalidParameter {
                param: "query".to_string(),
                detail: e.to_string(),
            });
        }
    };

    let pagination = pagination.validated();
    let mut pairs = vec![
        ("start".to_string(), pagination.offset().to_string()),
        ("limit".to_string(), pagination.limit.to_string()),
    ];

    for filter in resource.filters {
        let value = supplied
            .get(filter.name)
            .and_then(scalar_to_query)
            .or_else(|| filter.default.map(str::to_string));
        if let Some(value) = value {
            pairs.push((filter.name.to_string(), value));
        }
    }

    for key in supplied.keys().filter(|key| !resource.allows(key)) {
        log::debug!("[alegra] {} does not accept '{key}', dropping it", resource.name);
    }

    Ok(pairs)
}
