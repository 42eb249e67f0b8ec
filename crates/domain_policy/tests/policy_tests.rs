//! Tests for the policy transfer record

use chrono::{Days, NaiveDate, Utc};
use rust_decimal_macros::dec;
use validator::Validate;

use core_kernel::{ClientId, PolicyId};
use domain_policy::dto::{MIN_COVERAGE_AMOUNT, MIN_PREMIUM};
use domain_policy::PolicyDto;

fn valid_dto() -> PolicyDto {
    PolicyDto {
        id: None,
        policy_number: "POL123".to_string(),
        policy_type: "Health".to_string(),
        coverage_amount: dec!(50000.00),
        premium: dec!(500.00),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        client_id: ClientId::new(1),
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_type_and_client_id_keys() {
        let json = serde_json::to_value(PolicyDto { id: Some(PolicyId::new(3)), ..valid_dto() }).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["policyNumber"], "POL123");
        assert_eq!(json["type"], "Health");
        assert_eq!(json["clientId"], 1);
        assert!(json.get("policyType").is_none());
    }

    #[test]
    fn test_accepts_numeric_amounts() {
        let dto: PolicyDto = serde_json::from_str(
            r#"{
                "policyNumber": "POL123",
                "type": "Health",
                "coverageAmount": 50000.00,
                "premium": 500.00,
                "startDate": "2024-01-01",
                "endDate": "2025-01-01",
                "clientId": 1
            }"#,
        )
        .unwrap();

        assert_eq!(dto.coverage_amount, dec!(50000));
        assert_eq!(dto.premium, dec!(500));
        assert_eq!(dto.id, None);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_policy_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_minimums_are_inclusive() {
        let dto = PolicyDto {
            coverage_amount: MIN_COVERAGE_AMOUNT,
            premium: MIN_PREMIUM,
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_coverage_below_minimum() {
        let dto = PolicyDto { coverage_amount: dec!(999.99), ..valid_dto() };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("coverage_amount"));
    }

    #[test]
    fn test_premium_below_minimum() {
        let dto = PolicyDto { premium: dec!(99.99), ..valid_dto() };
        assert!(dto.validate().unwrap_err().field_errors().contains_key("premium"));
    }

    #[test]
    fn test_policy_number_length() {
        let dto = PolicyDto { policy_number: "P12".to_string(), ..valid_dto() };
        assert!(dto.validate().unwrap_err().field_errors().contains_key("policy_number"));
    }

    #[test]
    fn test_blank_type() {
        let dto = PolicyDto { policy_type: " ".to_string(), ..valid_dto() };
        assert_eq!(dto.validate().unwrap_err().field_errors().len(), 1);
    }

    #[test]
    fn test_start_date_in_future() {
        let dto = PolicyDto {
            start_date: Utc::now().date_naive() + Days::new(2),
            ..valid_dto()
        };
        assert!(dto.validate().unwrap_err().field_errors().contains_key("start_date"));
    }

    #[test]
    fn test_start_date_today_is_accepted() {
        let dto = PolicyDto { start_date: Utc::now().date_naive(), ..valid_dto() };
        assert!(dto.validate().is_ok());
    }
}
