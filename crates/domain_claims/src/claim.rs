//! Claim domain record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use domain_policy::Policy;

/// A claim against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Store-assigned identity
    pub id: ClaimId,
    /// Claim number
    pub claim_number: String,
    /// What happened
    pub description: String,
    /// Date the claim was made
    pub claim_date: NaiveDate,
    /// Free-text status (e.g. "Pending")
    pub status: Option<String>,
    /// Policy the claim is filed against
    pub policy: Policy,
}

/// A claim that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClaim {
    pub claim_number: String,
    pub description: String,
    pub claim_date: NaiveDate,
    pub status: Option<String>,
    pub policy: Policy,
}

impl NewClaim {
    /// Attaches the identity assigned by the store
    pub fn with_id(self, id: ClaimId) -> Claim {
        Claim {
            id,
            claim_number: self.claim_number,
            description: self.description,
            claim_date: self.claim_date,
            status: self.status,
            policy: self.policy,
        }
    }
}
