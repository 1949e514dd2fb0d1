//! Customer profile submitted for a loan eligibility check, and its
//! validation rules.

use crate::error::CoreError;

/// A loan applicant as decoded from a single request.
///
/// Profiles are transient: they are built per request and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerProfile {
    pub age: i64,
    /// Brazilian taxpayer id.
    pub cpf: String,
    pub name: String,
    pub income: f64,
    /// Region code, e.g. `"SP"`.
    pub location: String,
}

impl CustomerProfile {
    /// Check the profile for completeness.
    ///
    /// Checks run in a fixed order and stop at the first failure, so a
    /// profile missing both `age` and `name` only reports the `age` error.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.age <= 0 {
            return Err(CoreError::Validation(
                "age is required and must be greater than 0".to_string(),
            ));
        }
        if is_blank(&self.cpf) {
            return Err(CoreError::Validation("cpf is required".to_string()));
        }
        if is_blank(&self.name) {
            return Err(CoreError::Validation("name is required".to_string()));
        }
        if self.income.is_nan() || self.income <= 0.0 {
            return Err(CoreError::Validation(
                "income is required and must be greater than 0".to_string(),
            ));
        }
        if is_blank(&self.location) {
            return Err(CoreError::Validation("location is required".to_string()));
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_profile() -> CustomerProfile {
        CustomerProfile {
            age: 29,
            cpf: "12345678900".to_string(),
            name: "John Doe".to_string(),
            income: 4400.0,
            location: "SP".to_string(),
        }
    }

    fn validation_message(profile: &CustomerProfile) -> String {
        match profile.validate() {
            Err(CoreError::Validation(msg)) => msg,
            Ok(()) => panic!("expected validation to fail for {profile:?}"),
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(valid_profile().validate().is_ok());
    }

    // -- age ------------------------------------------------------------------

    #[test]
    fn zero_age_is_rejected() {
        let profile = CustomerProfile {
            age: 0,
            ..valid_profile()
        };
        assert_eq!(
            validation_message(&profile),
            "age is required and must be greater than 0"
        );
    }

    #[test]
    fn negative_age_is_rejected() {
        let profile = CustomerProfile {
            age: -3,
            ..valid_profile()
        };
        assert_matches!(profile.validate(), Err(CoreError::Validation(_)));
    }

    // -- cpf / name / location --------------------------------------------------

    #[test]
    fn blank_cpf_is_rejected() {
        let profile = CustomerProfile {
            cpf: "   ".to_string(),
            ..valid_profile()
        };
        assert_eq!(validation_message(&profile), "cpf is required");
    }

    #[test]
    fn empty_name_is_rejected() {
        let profile = CustomerProfile {
            name: String::new(),
            ..valid_profile()
        };
        assert_eq!(validation_message(&profile), "name is required");
    }

    #[test]
    fn whitespace_location_is_rejected() {
        let profile = CustomerProfile {
            location: "\t \n".to_string(),
            ..valid_profile()
        };
        assert_eq!(validation_message(&profile), "location is required");
    }

    // -- income ---------------------------------------------------------------

    #[test]
    fn zero_income_is_rejected() {
        let profile = CustomerProfile {
            income: 0.0,
            ..valid_profile()
        };
        assert_eq!(
            validation_message(&profile),
            "income is required and must be greater than 0"
        );
    }

    #[test]
    fn nan_income_is_rejected() {
        let profile = CustomerProfile {
            income: f64::NAN,
            ..valid_profile()
        };
        assert_eq!(
            validation_message(&profile),
            "income is required and must be greater than 0"
        );
    }

    // -- ordering -------------------------------------------------------------

    #[test]
    fn missing_age_and_name_reports_only_age() {
        let profile = CustomerProfile {
            age: 0,
            name: String::new(),
            ..valid_profile()
        };
        assert_eq!(
            validation_message(&profile),
            "age is required and must be greater than 0"
        );
    }

    #[test]
    fn empty_profile_reports_age_first() {
        assert_eq!(
            validation_message(&CustomerProfile::default()),
            "age is required and must be greater than 0"
        );
    }

    #[test]
    fn missing_income_and_location_reports_income() {
        let profile = CustomerProfile {
            income: 0.0,
            location: String::new(),
            ..valid_profile()
        };
        assert_eq!(
            validation_message(&profile),
            "income is required and must be greater than 0"
        );
    }
}
