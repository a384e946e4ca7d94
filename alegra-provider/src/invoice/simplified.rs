//! Compact invoice shape handed to agents
//!
//! Every field is always serialized; missing values are `null`, never omitted.
//! Scalars are the vendor values, byte for byte.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedInvoice {
    pub id: Option<Value>,
    pub date: Option<Value>,
    pub due_date: Option<Value>,
    pub datetime: Option<Value>,
    pub status: Option<Value>,
    pub client: SimplifiedClient,
    pub number_template: SimplifiedNumberTemplate,
    pub subtotal: Option<Value>,
    pub discount: Option<Value>,
    pub tax: Option<Value>,
    pub total: Option<Value>,
    pub total_paid: Option<Value>,
    pub balance: Option<Value>,
    pub warehouse: Option<Value>,
    pub term: Option<Value>,
    pub income_type: Option<Value>,
    pub payment_type: Option<Value>,
    pub payment_method: Option<Value>,
    pub seller: SimplifiedSeller,
    pub price_list: Option<Value>,
    pub payments: Option<Vec<SimplifiedPayment>>,
    pub items: Option<Vec<SimplifiedItem>>,
    pub cost_center: Option<Value>,
    pub printing_template: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedClient {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub identification: Option<Value>,
    pub phone_primary: Option<Value>,
    pub phone_secondary: Option<Value>,
    pub mobile: Option<Value>,
    pub email: Option<Value>,
    pub identification_type: Option<Value>,
    pub address: SimplifiedAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedAddress {
    pub province: Option<Value>,
    pub municipality: Option<Value>,
    pub description: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedNumberTemplate {
    pub id: Option<Value>,
    pub prefix: Option<Value>,
    pub number: Option<Value>,
    pub document_type: Option<Value>,
    pub full_number: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedSeller {
    pub id: Option<Value>,
    pub name: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedPayment {
    pub id: Option<Value>,
    pub number: Option<Value>,
    pub date: Option<Value>,
    pub amount: Option<Value>,
    pub payment_method: Option<Value>,
    pub status: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedItem {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub discount: Option<Value>,
    pub reference: Option<Value>,
    pub quantity: Option<Value>,
    pub id: Option<Value>,
    pub unit: Option<Value>,
    pub item_type: Option<Value>,
    pub tax: Option<Vec<SimplifiedTax>>,
    pub total: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedTax {
    pub name: Option<Value>,
    pub percentage: Option<Value>,
    pub status: Option<Value>,
    pub deductible: Option<Value>,
    #[serde(rename = "type")]
    pub tax_type: Option<Value>,
    pub amount: Option<Value>,
}
