use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Received,
    Sent,
}

impl PaymentType {
    pub fn value(&self) -> String {
        match *self {
            Self::Received => "received".to_string(),
            Self::Sent => "sent".to_string(),
        }
    }
}
