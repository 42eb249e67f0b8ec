//! Policy domain record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PolicyId;
use domain_client::Client;

/// A persisted policy with its owning client resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Store-assigned identity
    pub id: PolicyId,
    /// Business policy number (e.g. "POL123")
    pub policy_number: String,
    /// Product line (e.g. "Health")
    pub policy_type: String,
    /// Maximum amount payable
    pub coverage_amount: Decimal,
    /// Premium charged
    pub premium: Decimal,
    /// First day of cover
    pub start_date: NaiveDate,
    /// Last day of cover
    pub end_date: NaiveDate,
    /// Owning client
    pub client: Client,
}

/// A policy that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPolicy {
    pub policy_number: String,
    pub policy_type: String,
    pub coverage_amount: Decimal,
    pub premium: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client: Client,
}

impl NewPolicy {
    /// Attaches the identity assigned by the store
    pub fn with_id(self, id: PolicyId) -> Policy {
        Policy {
            id,
            policy_number: self.policy_number,
            policy_type: self.policy_type,
            coverage_amount: self.coverage_amount,
            premium: self.premium,
            start_date: self.start_date,
            end_date: self.end_date,
            client: self.client,
        }
    }
}
