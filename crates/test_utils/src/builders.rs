//! Test Data Builders
//!
//! Builders start from the worked-example fixtures, so tests only set the
//! fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{ClientId, PolicyId};
use domain_claims::ClaimDto;
use domain_client::ClientDto;
use domain_policy::PolicyDto;

use crate::fixtures::{ClaimFixtures, ClientFixtures, PolicyFixtures};

/// Builder for client transfer records
pub struct ClientDtoBuilder {
    dto: ClientDto,
}

impl Default for ClientDtoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientDtoBuilder {
    /// Starts from John Doe
    pub fn new() -> Self {
        Self { dto: ClientFixtures::john_doe() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.dto.name = name.into();
        self
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.dto.date_of_birth = date;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.dto.address = address.into();
        self
    }

    pub fn with_contact_information(mut self, contact: impl Into<String>) -> Self {
        self.dto.contact_information = contact.into();
        self
    }

    pub fn build(self) -> ClientDto {
        self.dto
    }
}

/// Builder for policy transfer records
pub struct PolicyDtoBuilder {
    dto: PolicyDto,
}

impl PolicyDtoBuilder {
    /// Starts from POL123 owned by `client_id`
    pub fn new(client_id: ClientId) -> Self {
        Self { dto: PolicyFixtures::pol123(client_id) }
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.dto.policy_number = number.into();
        self
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.dto.policy_type = policy_type.into();
        self
    }

    pub fn with_coverage_amount(mut self, amount: Decimal) -> Self {
        self.dto.coverage_amount = amount;
        self
    }

    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.dto.premium = premium;
        self
    }

    /// Sets the start and end dates
    pub fn with_term(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.dto.start_date = start;
        self.dto.end_date = end;
        self
    }

    pub fn build(self) -> PolicyDto {
        self.dto
    }
}

/// Builder for claim transfer records
pub struct ClaimDtoBuilder {
    dto: ClaimDto,
}

impl ClaimDtoBuilder {
    /// Starts from CLM123 filed against `policy_id`
    pub fn new(policy_id: PolicyId) -> Self {
        Self { dto: ClaimFixtures::clm123(policy_id) }
    }

    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.dto.claim_number = number.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.dto.description = description.into();
        self
    }

    pub fn with_claim_date(mut self, date: NaiveDate) -> Self {
        self.dto.claim_date = date;
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.dto.status = status.map(str::to_string);
        self
    }

    pub fn build(self) -> ClaimDto {
        self.dto
    }
}
