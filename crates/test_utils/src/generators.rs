//! Property-Based Test Generators
//!
//! Proptest strategies for transfer records that satisfy field validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ClientId, PolicyId};
use domain_claims::ClaimDto;
use domain_client::ClientDto;
use domain_policy::PolicyDto;

/// Strategy for dates between 1940 and 2019
pub fn past_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1940i32..2020, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

/// Strategy for client names of 2 to 50 characters
pub fn client_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,20}( [A-Z][a-z]{1,20})?"
}

/// Strategy for 10 to 15 digit phone numbers
pub fn contact_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10,15}"
}

/// Strategy for amounts with two decimal places, at least `min_cents / 100`
pub fn amount_strategy(min_cents: i64) -> impl Strategy<Value = Decimal> {
    (min_cents..min_cents + 100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid client transfer records without identity
pub fn client_dto_strategy() -> impl Strategy<Value = ClientDto> {
    (
        client_name_strategy(),
        past_date_strategy(),
        "[1-9][0-9]{0,3} [A-Z][a-z]{2,12} (St|Ave|Rd)",
        contact_strategy(),
    )
        .prop_map(|(name, date_of_birth, address, contact_information)| ClientDto {
            id: None,
            name,
            date_of_birth,
            address,
            contact_information,
        })
}

/// Strategy for valid policy transfer records owned by `client_id`
pub fn policy_dto_strategy(client_id: ClientId) -> impl Strategy<Value = PolicyDto> {
    (
        "POL[0-9]{2,17}",
        prop_oneof![Just("Health"), Just("Life"), Just("Auto"), Just("Home")],
        amount_strategy(100_000),
        amount_strategy(10_000),
        past_date_strategy(),
        1u64..3650,
    )
        .prop_map(move |(policy_number, policy_type, coverage_amount, premium, start_date, days)| {
            PolicyDto {
                id: None,
                policy_number,
                policy_type: policy_type.to_string(),
                coverage_amount,
                premium,
                start_date,
                end_date: start_date + chrono::Days::new(days),
                client_id,
            }
        })
}

/// Strategy for valid claim transfer records filed against `policy_id`
pub fn claim_dto_strategy(policy_id: PolicyId) -> impl Strategy<Value = ClaimDto> {
    (
        "CLM[0-9]{3,8}",
        "[A-Z][a-z]{3,30}",
        past_date_strategy(),
        proptest::option::of(prop_oneof![Just("Pending"), Just("Approved"), Just("Rejected")]),
    )
        .prop_map(move |(claim_number, description, claim_date, status)| ClaimDto {
            id: None,
            claim_number,
            description,
            claim_date,
            status: status.map(str::to_string),
            policy_id,
        })
}
