use serde::{Deserialize, Serialize};

use crate::payments::enums::payment_type::PaymentType;

// Shape of a transfer as produced by the ledger indexer and consumed by the
// frontend. Nothing in this service constructs one; it is the declared wire
// contract only, so no field invariants are enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub label: String,
    pub date: i64,
    pub tx_hash: String,
}
