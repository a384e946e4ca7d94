//! Vendor → simplified projection
//!
//! Pure and total: every function copies fields, never computes or invents
//! them. A missing sub-object becomes an object of `null`s (client, address,
//! number template, seller); a missing list stays `null`; a list element that
//! is not an object becomes an entry of `null`s.

use serde_json::Value;

use super::simplified::{
    SimplifiedAddress, SimplifiedClient, SimplifiedInvoice, SimplifiedItem,
    SimplifiedNumberTemplate, SimplifiedPayment, SimplifiedSeller, SimplifiedTax,
};
use super::vendor::{
    VendorAddress, VendorClient, VendorInvoice, VendorItem, VendorNumberTemplate, VendorPayment,
    VendorSeller, VendorTax,
};

/// Interpret a list response as invoices.
///
/// Returns `None` only when the body is not a JSON array. An element that is
/// not an object becomes an invoice with every field `null`, so the result
/// always has one entry per element.
pub fn parse_invoice_list(body: &Value) -> Option<Vec<VendorInvoice>> {
    let Value::Array(entries) = body else {
        log::warn!("[alegra] invoice response is not an array");
        return None;
    };

    Some(
        entries
            .iter()
            .map(|entry| parse_invoice(entry).unwrap_or_default())
            .collect(),
    )
}

/// Interpret a single-entity response as an invoice.
///
/// Returns `None` when the body is not an invoice object.
pub fn parse_invoice(body: &Value) -> Option<VendorInvoice> {
    if !body.is_object() {
        log::warn!("[alegra] invoice entry is not an object");
        return None;
    }
    serde_json::from_value(body.clone())
        .map_err(|e| log::warn!("[alegra] invoice entry rejected: {e}"))
        .ok()
}

pub fn simplify_invoices(invoices: &[VendorInvoice]) -> Vec<SimplifiedInvoice> {
    invoices.iter().map(simplify_invoice).collect()
}

pub fn simplify_invoice(invoice: &VendorInvoice) -> SimplifiedInvoice {
    SimplifiedInvoice {
        id: invoice.id.clone(),
        date: invoice.date.clone(),
        due_date: invoice.due_date.clone(),
        datetime: invoice.datetime.clone(),
        status: invoice.status.clone(),
        client: simplify_client(invoice.client.as_ref()),
        number_template: simplify_number_template(invoice.number_template.as_ref()),
        subtotal: invoice.subtotal.clone(),
        discount: invoice.discount.clone(),
        tax: invoice.tax.clone(),
        total: invoice.total.clone(),
        total_paid: invoice.total_paid.clone(),
        balance: invoice.balance.clone(),
        warehouse: invoice.warehouse.clone(),
        term: invoice.term.clone(),
        income_type: invoice.income_type.clone(),
        payment_type: invoice.payment_type.clone(),
        payment_method: invoice.payment_method.clone(),
        seller: simplify_seller(invoice.seller.as_ref()),
        price_list: invoice.price_list.clone(),
        payments: invoice
            .payments
            .as_ref()
            .map(|payments| payments.iter().map(simplify_payment).collect()),
        items: invoice
            .items
            .as_ref()
            .map(|items| items.iter().map(simplify_item).collect()),
        cost_center: invoice.cost_center.clone(),
        printing_template: invoice.printing_template.clone(),
    }
}

fn simplify_client(client: Option<&VendorClient>) -> SimplifiedClient {
    SimplifiedClient {
        id: client.and_then(|c| c.id.clone()),
        name: client.and_then(|c| c.name.clone()),
        identification: client.and_then(|c| c.identification.clone()),
        phone_primary: client.and_then(|c| c.phone_primary.clone()),
        phone_secondary: client.and_then(|c| c.phone_secondary.clone()),
        mobile: client.and_then(|c| c.mobile.clone()),
        email: client.and_then(|c| c.email.clone()),
        identification_type: client.and_then(|c| c.identification_type.clone()),
        address: simplify_address(client.and_then(|c| c.address.as_ref())),
    }
}

fn simplify_address(address: Option<&VendorAddress>) -> SimplifiedAddress {
    SimplifiedAddress {
        province: address.and_then(|a| a.province.clone()),
        municipality: address.and_then(|a| a.municipality.clone()),
        description: address.and_then(|a| a.description.clone()),
    }
}

fn simplify_number_template(template: Option<&VendorNumberTemplate>) -> SimplifiedNumberTemplate {
    SimplifiedNumberTemplate {
        id: template.and_then(|t| t.id.clone()),
        prefix: template.and_then(|t| t.prefix.clone()),
        number: template.and_then(|t| t.number.clone()),
        document_type: template.and_then(|t| t.document_type.clone()),
        full_number: template.and_then(|t| t.full_number.clone()),
    }
}

fn simplify_seller(seller: Option<&VendorSeller>) -> SimplifiedSeller {
    SimplifiedSeller {
        id: seller.and_then(|s| s.id.clone()),
        name: seller.and_then(|s| s.name.clone()),
    }
}

fn simplify_payment(payment: &VendorPayment) -> SimplifiedPayment {
    SimplifiedPayment {
        id: payment.id.clone(),
        number: payment.number.clone(),
        date: payment.date.clone(),
        amount: payment.amount.clone(),
        payment_method: payment.payment_method.clone(),
        status: payment.status.clone(),
    }
}

fn simplify_item(item: &VendorItem) -> SimplifiedItem {
    SimplifiedItem {
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price.clone(),
        discount: item.discount.clone(),
        reference: item.reference.clone(),
        quantity: item.quantity.clone(),
        id: item.id.clone(),
        unit: item.unit.clone(),
        item_type: item.item_type.clone(),
        tax: item
            .tax
            .as_ref()
            .map(|taxes| taxes.iter().map(simplify_tax).collect()),
        total: item.total.clone(),
    }
}

fn simplify_tax(tax: &VendorTax) -> SimplifiedTax {
    SimplifiedTax {
        name: tax.name.clone(),
        percentage: tax.percentage.clone(),
        status: tax.status.clone(),
        deductible: tax.deductible.clone(),
        tax_type: tax.tax_type.clone(),
        amount: tax.amount.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_invoice() -> Value {
        json!({
            "id": "101",
            "date": "2024-03-01",
            "dueDate": "2024-03-31",
            "datetime": "2024-03-01 10:15:00",
            "observations": "internal note",
            "status": "open",
            "client": {
                "id": "7",
                "name": "Ferretería El Tornillo",
                "identification": "900123456",
                "phonePrimary": "6012345678",
                "fax": "none",
                "email": "compras@tornillo.co",
                "identificationType": "NIT",
                "address": { "province": "Cundinamarca", "municipality": "Bogotá", "description": "Cra 7 # 12-34" }
            },
            "numberTemplate": { "id": "1", "prefix": "FV", "number": "101", "documentType": "invoice", "fullNumber": "FV101" },
            "subtotal": 1000,
            "discount": 0,
            "tax": 190,
            "total": 1190.5,
            "totalPaid": "500",
            "balance": 690.5,
            "warehouse": { "id": "1", "name": "Principal" },
            "term": "30",
            "paymentMethod": "CASH",
            "seller": { "id": 3, "name": "Ana", "observations": "x" },
            "priceList": { "id": 1, "name": "General" },
            "payments": [
                { "id": "p1", "prefix": "RC", "number": "5", "date": "2024-03-02", "amount": 500, "paymentMethod": "transfer", "anotation": "n/a", "status": "open" }
            ],
            "items": [
                {
                    "id": "i1", "name": "Tornillo", "price": 10, "quantity": 100, "discount": 0, "total": 1190.5,
                    "tax": [ { "id": 1, "name": "IVA", "percentage": "19.00", "type": "IVA", "amount": 190, "categoryFavorable": { "id": "x" } } ]
                }
            ],
            "costCenter": null,
            "printingTemplate": { "id": "2", "name": "Classic" }
        })
    }

    fn simplify_value(value: &Value) -> Value {
        let vendor = parse_invoice(value).unwrap();
        serde_json::to_value(simplify_invoice(&vendor)).unwrap()
    }

    #[test]
    fn full_invoice_projects_expected_fields() {
        let s = simplify_value(&full_invoice());

        assert_eq!(s["id"], "101");
        assert_eq!(s["dueDate"], "2024-03-31");
        assert_eq!(s["client"]["name"], "Ferretería El Tornillo");
        assert_eq!(s["client"]["address"]["municipality"], "Bogotá");
        assert_eq!(s["numberTemplate"]["fullNumber"], "FV101");
        assert_eq!(s["total"], json!(1190.5));
        assert_eq!(s["totalPaid"], json!("500"));
        assert_eq!(s["seller"], json!({ "id": 3, "name": "Ana" }));
        assert_eq!(s["warehouse"], json!({ "id": "1", "name": "Principal" }));
        assert_eq!(s["payments"][0]["amount"], json!(500));
        assert_eq!(s["items"][0]["tax"][0]["type"], "IVA");
        assert_eq!(s["items"][0]["tax"][0]["percentage"], "19.00");
    }

    #[test]
    fn dropped_fields_do_not_leak() {
        let s = simplify_value(&full_invoice());

        assert!(s.get("observations").is_none());
        assert!(s["client"].get("fax").is_none());
        assert!(s["seller"].get("observations").is_none());
        assert!(s["payments"][0].get("anotation").is_none());
        assert!(s["items"][0]["tax"][0].get("categoryFavorable").is_none());
    }

    #[test]
    fn every_field_is_present_for_empty_invoice() {
        let s = simplify_value(&json!({}));
        let keys: Vec<&str> = s.as_object().unwrap().keys().map(String::as_str).collect();

        for key in [
            "id", "date", "dueDate", "datetime", "status", "client", "numberTemplate",
            "subtotal", "discount", "tax", "total", "totalPaid", "balance", "warehouse",
            "term", "incomeType", "paymentType", "paymentMethod", "seller", "priceList",
            "payments", "items", "costCenter", "printingTemplate",
        ] {
            assert!(keys.contains(&key), "missing key {key}");
        }
        assert_eq!(keys.len(), 24);
        assert_eq!(s["payments"], Value::Null);
        assert_eq!(s["items"], Value::Null);
    }

    #[test]
    fn null_seller_becomes_object_of_nulls() {
        let s = simplify_value(&json!({ "id": "1", "seller": null }));
        assert_eq!(s["seller"], json!({ "id": null, "name": null }));
    }

    #[test]
    fn missing_client_still_has_address() {
        let s = simplify_value(&json!({ "id": "1" }));
        assert_eq!(
            s["client"]["address"],
            json!({ "province": null, "municipality": null, "description": null })
        );
        assert_eq!(s["client"]["id"], Value::Null);
        assert_eq!(s["numberTemplate"]["prefix"], Value::Null);
    }

    #[test]
    fn client_without_address_gets_null_address_fields() {
        let s = simplify_value(&json!({ "client": { "id": "9", "address": "" } }));
        assert_eq!(s["client"]["id"], "9");
        assert_eq!(s["client"]["address"]["province"], Value::Null);
    }

    #[test]
    fn item_without_tax_keeps_null_tax() {
        let s = simplify_value(&json!({ "items": [ { "id": "i1", "name": "Servicio" } ] }));
        assert_eq!(s["items"][0]["tax"], Value::Null);
        assert_eq!(s["items"][0]["name"], "Servicio");
    }

    #[test]
    fn simplifying_twice_is_byte_identical() {
        let vendor = parse_invoice(&full_invoice()).unwrap();
        let first = serde_json::to_string(&simplify_invoice(&vendor)).unwrap();
        let second = serde_json::to_string(&simplify_invoice(&vendor)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn list_preserves_order() {
        let body = json!([{ "id": "3" }, { "id": "1" }, { "id": "2" }]);
        let invoices = parse_invoice_list(&body).unwrap();
        let ids: Vec<_> = simplify_invoices(&invoices)
            .into_iter()
            .map(|i| i.id.unwrap())
            .collect();
        assert_eq!(ids, [json!("3"), json!("1"), json!("2")]);
    }

    #[test]
    fn empty_array_is_empty_list() {
        assert_eq!(parse_invoice_list(&json!([])).map(|v| v.len()), Some(0));
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        assert!(parse_invoice_list(&json!({})).is_none());
        assert!(parse_invoice_list(&json!({ "message": "error" })).is_none());
        assert!(parse_invoice_list(&Value::Null).is_none());
    }

    #[test]
    fn single_invoice_must_be_an_object() {
        assert!(parse_invoice(&json!([])).is_none());
        assert!(parse_invoice(&json!("101")).is_none());
    }

    #[test]
    fn non_object_entry_becomes_invoice_of_nulls() {
        let invoices = parse_invoice_list(&json!([{ "id": "1" }, "oops", null])).unwrap();
        let simplified = simplify_invoices(&invoices);

        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified[0].id, Some(json!("1")));
        assert_eq!(simplified[1].id, None);
        assert_eq!(simplified[2].seller.name, None);
    }

    #[test]
    fn scalars_are_copied_verbatim() {
        let s = simplify_value(&json!({
            "id": 101,
            "totalPaid": "1.190,50",
            "total": "n/a",
            "status": { "code": "open" },
            "client": { "id": 7, "identification": 900_123_456 },
            "payments": [{ "amount": "500.00" }]
        }));

        assert_eq!(s["id"], json!(101));
        assert_eq!(s["totalPaid"], json!("1.190,50"));
        assert_eq!(s["total"], json!("n/a"));
        assert_eq!(s["status"], json!({ "code": "open" }));
        assert_eq!(s["client"]["id"], json!(7));
        assert_eq!(s["client"]["identification"], json!(900_123_456));
        assert_eq!(s["payments"][0]["amount"], json!("500.00"));
    }

    #[test]
    fn stray_list_elements_do_not_reject_the_page() {
        let body = json!([
            { "id": "1" },
            { "id": "2", "items": [null, { "id": "i1", "tax": ["x", { "name": "IVA" }] }] },
            { "id": "3", "payments": ["x"] }
        ]);

        let invoices = parse_invoice_list(&body).unwrap();
        let s = serde_json::to_value(simplify_invoices(&invoices)).unwrap();

        assert_eq!(s.as_array().unwrap().len(), 3);
        assert_eq!(s[1]["items"].as_array().unwrap().len(), 2);
        assert_eq!(s[1]["items"][0]["id"], Value::Null);
        assert_eq!(s[1]["items"][0]["tax"], Value::Null);
        assert_eq!(s[1]["items"][1]["id"], "i1");
        assert_eq!(s[1]["items"][1]["tax"][0]["name"], Value::Null);
        assert_eq!(s[1]["items"][1]["tax"][1]["name"], "IVA");
        assert_eq!(s[2]["payments"][0]["amount"], Value::Null);
        assert_eq!(s[2]["payments"][0]["id"], Value::Null);
    }

    #[test]
    fn single_invoice_with_null_item_is_parsed() {
        let s = simplify_value(&json!({ "id": "2", "items": [null] }));
        assert_eq!(s["items"].as_array().unwrap().len(), 1);
        assert_eq!(s["items"][0]["name"], Value::Null);
    }
}
