//! Record identifiers.
//!
//! Both backends hand out ids as JSON strings or numbers depending on the
//! table, so ids are normalised to their textual form on the way in. `1` and
//! `"1"` therefore name the same record.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! numeric_ids {
    ($name:ident: $($int:ty),+) => {
        $(
            impl From<$int> for $name {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )+
    };
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        numeric_ids!($name: i32, i64, u32, u64);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                id_from_value(serde_json::Value::deserialize(deserializer)?)
                    .map(Self)
                    .map_err(de::Error::custom)
            }
        }
    };
}

record_id!(
    /// Primary key of a [`PointOfInterest`](crate::data::university::PointOfInterest).
    UniversityId
);

record_id!(
    /// Primary key of an [`Employee`](crate::data::employee::Employee).
    EmployeeId
);

fn id_from_value(value: serde_json::Value) -> Result<String, String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(number_id(&n)),
        other => Err(format!("expected string or number id, found {}", other)),
    }
}

/// Integral numbers keep their integer spelling, so `1.0` and `1` are the
/// same id.
fn number_id(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

/// 2^53: above this an `f64` no longer holds every integer exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_agree() {
        let a: UniversityId = serde_json::from_str("1").unwrap();
        let b: UniversityId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, UniversityId::from(1));
    }

    #[test]
    fn test_integral_floats_match_integers() {
        let float: UniversityId = serde_json::from_str("1.0").unwrap();
        let negative: UniversityId = serde_json::from_str("-3.0").unwrap();
        let fractional: UniversityId = serde_json::from_str("1.5").unwrap();

        assert_eq!(float, UniversityId::from(1));
        assert_eq!(negative, UniversityId::from(-3));
        assert_eq!(fractional.as_str(), "1.5");
    }

    #[test]
    fn test_rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<EmployeeId>("null").is_err());
        assert!(serde_json::from_str::<EmployeeId>("[\"e1\"]").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EmployeeId::new("e1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"e1\"");
        assert_eq!(id.to_string(), "e1");
    }
}
