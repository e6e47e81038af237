//! Macro for implementing Display, FromStr and Deserialize for status enums
//!
//! The backend sends statuses as capitalized words (`"Pending"`,
//! `"Approved"`). The macro keeps that exact spelling for `Display` and parses
//! case-insensitively, both from strings and from the wire.
//!
//! # Example
//!
//! ```rust
//! use crmdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ChallanStatus {
//!     Pending,
//!     Delivered,
//! }
//!
//! impl_domain_status_conversions!(ChallanStatus {
//!     Pending => "Pending",
//!     Delivered => "Delivered",
//! });
//!
//! assert_eq!("delivered".parse::<ChallanStatus>().unwrap(), ChallanStatus::Delivered);
//! assert_eq!(
//!     serde_json::from_str::<ChallanStatus>(r#""PENDING""#).unwrap(),
//!     ChallanStatus::Pending
//! );
//! ```

/// Implements Display, FromStr and Deserialize traits for status enums
///
/// This macro generates:
/// - `as_str`: the wire spelling of the variant
/// - Display trait: writes `as_str`
/// - FromStr trait: parses case-insensitive strings to enum variants
/// - Deserialize trait: decodes a JSON string through `FromStr`
///
/// The enum must not also derive `Deserialize`; `Serialize` can stay derived
/// since the variant names are the wire spelling.
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire spelling
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire spelling of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Approved,
        Rejected,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    });

    #[test]
    fn test_display_keeps_wire_spelling() {
        assert_eq!(TestStatus::Pending.to_string(), "Pending");
        assert_eq!(TestStatus::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_fromstr_any_case() {
        assert_eq!(TestStatus::from_str("approved").unwrap(), TestStatus::Approved);
        assert_eq!(TestStatus::from_str("APPROVED").unwrap(), TestStatus::Approved);
        assert_eq!(TestStatus::from_str(" Pending ").unwrap(), TestStatus::Pending);
    }

    #[test]
    fn test_deserialize_any_case() {
        let statuses: Vec<TestStatus> =
            serde_json::from_str(r#"["pending", "APPROVED", "Rejected"]"#).unwrap();
        assert_eq!(statuses, [TestStatus::Pending, TestStatus::Approved, TestStatus::Rejected]);
    }

    #[test]
    fn test_deserialize_invalid() {
        let err = serde_json::from_str::<TestStatus>(r#""cancelled""#).unwrap_err();
        assert!(err.to_string().contains("Invalid TestStatus: cancelled"));
        assert!(serde_json::from_str::<TestStatus>("3").is_err());
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("cancelled");
        assert!(result.unwrap_err().contains("Invalid TestStatus: cancelled"));
        assert!(TestStatus::from_str("").is_err());
    }
}
