//! Domain identifier types with validation
//!
//! Newtype wrappers for the names the exporter derives and passes to AWS.
//! Keeping them distinct stops a snapshot name from being handed to a call
//! that expects a task identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    (derived $(#[$meta:meta])* $name:ident, $label:literal) => {
        string_id!($(#[$meta])* $name, $label);

        impl $name {
            /// Wraps a value the caller has already derived from non-blank parts
            pub(crate) fn from_parts(value: String) -> Self {
                debug_assert!(!value.trim().is_empty());
                Self(value)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`, rejecting blank values")]
            pub fn new(value: impl Into<String>) -> Result<Self, String> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(format!("{} cannot be empty", $label));
                }
                Ok(Self(value))
            }

            /// Returns the value as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of the RDS DB instance or DB cluster being exported
    ///
    /// # Examples
    ///
    /// ```
    /// use rds_snapshot_export::domain::ids::InstanceId;
    ///
    /// let id = InstanceId::new("orders-db").unwrap();
    /// assert_eq!(id.as_str(), "orders-db");
    /// assert!(InstanceId::new("  ").is_err());
    /// ```
    InstanceId,
    "Instance identifier"
);

string_id!(
    derived
    /// Name of the snapshot to export (instance identifier plus postfix)
    SnapshotName,
    "Snapshot name"
);

string_id!(
    derived
    /// Unique identifier of a single export task
    ExportTaskId,
    "Export task identifier"
);

string_id!(
    derived
    /// Destination S3 bucket name
    BucketName,
    "Bucket name"
);

string_id!(
    /// AWS account id of the caller
    AccountId,
    "Account id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id_valid() {
        let id = InstanceId::new("orders-db").unwrap();
        assert_eq!(id.as_str(), "orders-db");
        assert_eq!(id.to_string(), "orders-db");
    }

    #[test]
    fn test_instance_id_empty() {
        let err = InstanceId::new("").unwrap_err();
        assert_eq!(err, "Instance identifier cannot be empty");
        assert!(InstanceId::new("   ").is_err());
    }

    #[test]
    fn test_from_str() {
        let account = AccountId::from_str("123456789012").unwrap();
        assert_eq!(account.into_inner(), "123456789012");
    }

    #[test]
    fn test_serde_is_transparent() {
        let bucket = BucketName::new("rds-snapshots-123456789012").unwrap();
        let json = serde_json::to_string(&bucket).unwrap();
        assert_eq!(json, "\"rds-snapshots-123456789012\"");

        let back: BucketName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bucket);
    }

    #[test]
    fn test_derived_names_from_parts() {
        let snapshot = SnapshotName::from_parts(format!("{}{}", "orders-db", "-snapshot"));
        assert_eq!(snapshot, SnapshotName::new("orders-db-snapshot").unwrap());

        let task = ExportTaskId::from_parts("orders-db-a1B2c3D4e5F6".to_string());
        assert_eq!(task.as_str(), "orders-db-a1B2c3D4e5F6");

        let bucket = BucketName::from_parts("rds-snapshots-123456789012".to_string());
        assert_eq!(bucket.to_string(), "rds-snapshots-123456789012");
    }
}
