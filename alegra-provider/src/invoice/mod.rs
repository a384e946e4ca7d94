//! Invoice normalization
//!
//! Alegra invoices carry far more than an agent needs. [`simplify_invoice`]
//! projects the vendor payload onto [`SimplifiedInvoice`], which keeps a fixed
//! set of fields and always serializes all of them.

mod normalize;
mod simplified;
mod vendor;

pub use normalize::{parse_invoice, parse_invoice_list, simplify_invoice, simplify_invoices};
pub use simplified::{
    SimplifiedAddress, SimplifiedClient, SimplifiedInvoice, SimplifiedItem,
    SimplifiedNumberTemplate, SimplifiedPayment, SimplifiedSeller, SimplifiedTax,
};
pub use vendor::{
    VendorAddress, VendorClient, VendorInvoice, VendorItem, VendorNumberTemplate, VendorPayment,
    VendorSeller, VendorTax,
};
