use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate as the server renders it into forms and URLs
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Value used in `<option value>` and query strings
    fn as_string(&self) -> String;

    /// Parse an identifier coming from a form control
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Declares a newtype id over `i64` with serde transparency
#[macro_export]
macro_rules! int_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::int_id!(TestId);

    #[test]
    fn parses_trimmed_ids() {
        assert_eq!(TestId::from_string(" 42 ").unwrap(), TestId(42));
        assert!(TestId::from_string("").is_err());
        assert!(TestId::from_string("4a").is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TestId(7)).unwrap();
        assert_eq!(json, "7");
        assert_eq!(TestId(7).as_string(), "7");
    }
}
