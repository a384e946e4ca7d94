//! Invoice payload as returned by `GET /invoices`
//!
//! Every field is optional: `null` and absence are the same thing. Unknown
//! fields are ignored. Scalars are kept as the JSON value Alegra sent, so an
//! id may be a number and an amount a string; nothing is coerced.

use serde::Deserialize;
use serde_json::Value;

/// Sales invoice, vendor shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInvoice {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default)]
    pub datetime: Option<Value>,
    #[serde(default)]
    pub observations: Option<Value>,
    #[serde(default)]
    pub anotation: Option<Value>,
    #[serde(default)]
    pub terms_conditions: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::lenient::object")]
    pub client: Option<VendorClient>,
    #[serde(default, deserialize_with = "crate::utils::lenient::object")]
    pub number_template: Option<VendorNumberTemplate>,
    #[serde(default)]
    pub subtotal: Option<Value>,
    #[serde(default)]
    pub discount: Option<Value>,
    #[serde(default)]
    pub tax: Option<Value>,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub total_paid: Option<Value>,
    #[serde(default)]
    pub balance: Option<Value>,
    #[serde(default)]
    pub decimal_precision: Option<Value>,
    #[serde(default)]
    pub warehouse: Option<Value>,
    #[serde(default)]
    pub term: Option<Value>,
    #[serde(default)]
    pub income_type: Option<Value>,
    #[serde(default)]
    pub payment_type: Option<Value>,
    #[serde(default)]
    pub payment_method: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::lenient::object")]
    pub seller: Option<VendorSeller>,
    #[serde(default)]
    pub price_list: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::lenient::list")]
    pub payments: Option<Vec<VendorPayment>>,
    #[serde(default, deserialize_with = "crate::utils::lenient::list")]
    pub items: Option<Vec<VendorItem>>,
    #[serde(default)]
    pub cost_center: Option<Value>,
    #[serde(default)]
    pub printing_template: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorClient {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub identification: Option<Value>,
    #[serde(default)]
    pub phone_primary: Option<Value>,
    #[serde(default)]
    pub phone_secondary: Option<Value>,
    #[serde(default)]
    pub fax: Option<Value>,
    #[serde(default)]
    pub mobile: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub regime: Option<Value>,
    #[serde(default)]
    pub identification_type: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::lenient::object")]
    pub address: Option<VendorAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAddress {
    #[serde(default)]
    pub province: Option<Value>,
    #[serde(default)]
    pub municipality: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// Numbering series the invoice was issued under.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorNumberTemplate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub prefix: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub document_type: Option<Value>,
    #[serde(default)]
    pub full_number: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSeller {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
}

/// Payment applied to the invoice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPayment {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub prefix: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub payment_method: Option<Value>,
    #[serde(default)]
    pub observations: Option<Value>,
    #[serde(default)]
    pub anotation: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// Invoice line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorItem {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub discount: Option<Value>,
    #[serde(default)]
    pub reference: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub unit: Option<Value>,
    #[serde(default)]
    pub item_type: Option<Value>,
    #[serde(default, deserialize_with = "crate::utils::lenient::list")]
    pub tax: Option<Vec<VendorTax>>,
    #[serde(default)]
    pub total: Option<Value>,
}

/// Tax applied to an invoice line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorTax {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub percentage: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub deductible: Option<Value>,
    #[serde(default, rename = "type")]
    pub tax_type: Option<Value>,
    #[serde(default)]
    pub category_favorable: Option<Value>,
    #[serde(default)]
    pub category_to_be_paid: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
}
