//! Pre-built Test Fixtures
//!
//! The named fixtures are fixed and predictable. `random_client` uses `fake`
//! for realistic values that still pass field validation.

use chrono::NaiveDate;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{ClientId, PolicyId};
use domain_claims::ClaimDto;
use domain_client::ClientDto;
use domain_policy::PolicyDto;

/// Fixture for client transfer records
pub struct ClientFixtures;

impl ClientFixtures {
    /// The client from the worked example
    pub fn john_doe() -> ClientDto {
        ClientDto {
            id: None,
            name: "John Doe".to_string(),
            date_of_birth: DateFixtures::birth_date(),
            address: "123 Main St".to_string(),
            contact_information: "9876543210".to_string(),
        }
    }

    pub fn jane_roe() -> ClientDto {
        ClientDto {
            id: None,
            name: "Jane Roe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 7, 14).unwrap(),
            address: "77 Harbour Rd".to_string(),
            contact_information: "4155550100".to_string(),
        }
    }

    /// A valid client with generated name, address and phone number
    pub fn random_client() -> ClientDto {
        let name: String = Name().fake();
        let street: String = StreetName().fake();
        let city: String = CityName().fake();
        let number: u16 = (1..999).fake();
        let phone: u64 = (1_000_000_000..9_999_999_999).fake();

        ClientDto {
            id: None,
            name,
            date_of_birth: DateFixtures::birth_date(),
            address: format!("{number} {street}, {city}"),
            contact_information: phone.to_string(),
        }
    }
}

/// Fixture for policy transfer records
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Policy POL123 from the worked example
    pub fn pol123(client_id: ClientId) -> PolicyDto {
        PolicyDto {
            id: None,
            policy_number: "POL123".to_string(),
            policy_type: "Health".to_string(),
            coverage_amount: dec!(50000.00),
            premium: dec!(500.00),
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::policy_end(),
            client_id,
        }
    }
}

/// Fixture for claim transfer records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Claim CLM123 from the worked example
    pub fn clm123(policy_id: PolicyId) -> ClaimDto {
        ClaimDto {
            id: None,
            claim_number: "CLM123".to_string(),
            description: "Accident".to_string(),
            claim_date: DateFixtures::claim_date(),
            status: Some("Pending".to_string()),
            policy_id,
        }
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    pub fn claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }
}
