//! Payment methods and the payment status they imply.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays for an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Card, Self::Upi, Self::CashOnDelivery];

    /// Whether checkout has to go through the (simulated) payment gateway.
    ///
    /// Cash on delivery settles at pickup, so it skips the processing step.
    pub fn requires_gateway(&self) -> bool {
        !matches!(self, Self::CashOnDelivery)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether money has changed hands for an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    /// Status fixed at order creation: cash on delivery is unpaid, everything else paid.
    pub fn for_method(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::CashOnDelivery => Self::Unpaid,
            PaymentMethod::Card | PaymentMethod::Upi => Self::Paid,
        }
    }
}
