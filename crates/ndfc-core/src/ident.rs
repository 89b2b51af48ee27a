//! Validated identifier field fragments.
//!
//! Endpoint request models share a handful of identifier fields (fabric
//! name, switch serial number, VRF name, ...). Each is generated here as a
//! standalone fragment carrying its own constraint, and composed by value
//! into the owning request model. Assignment re-validates the constraint;
//! reading an unset mandatory fragment through [`require`](FabricName::require)
//! reports which parameter is missing.

use std::fmt;
use validator::Validate;

use crate::error::{Error, Result};
use crate::validate;

/// Macro to generate validated identifier fragment types.
macro_rules! ident_field {
    ($(#[$meta:meta])* $name:ident, $field:ident, bounded, $doc:expr) => {
        ident_field!(@impl $(#[$meta])* $name, $field, $doc,
            #[validate(length(min = 1, max = 64, message = "length must be between 1 and 64"))]);
    };
    ($(#[$meta:meta])* $name:ident, $field:ident, $doc:expr) => {
        ident_field!(@impl $(#[$meta])* $name, $field, $doc,
            #[validate(length(min = 1, message = "length must be >= 1"))]);
    };
    (@impl $(#[$meta:meta])* $name:ident, $field:ident, $doc:expr, #[$constraint:meta]) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
        pub struct $name {
            #[$constraint]
            $field: Option<String>,
        }

        impl $name {
            /// Creates an unset fragment.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Returns the current value, if set.
            #[must_use]
            pub fn get(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            /// Returns true when a value has been assigned.
            #[must_use]
            pub fn is_set(&self) -> bool {
                self.$field.is_some()
            }

            /// Assigns a value, re-validating the fragment's constraint.
            ///
            /// # Errors
            ///
            /// Returns a validation error naming the field and the violated
            /// constraint; the previous value is kept in that case.
            pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
                let previous = self.$field.replace(value.into());
                if let Err(err) = validate::check(self) {
                    self.$field = previous;
                    return Err(err);
                }
                Ok(())
            }

            /// Removes the current value.
            pub fn clear(&mut self) {
                self.$field = None;
            }

            /// Returns the value, failing when the parameter is unset.
            ///
            /// # Errors
            ///
            /// Returns [`Error::MissingParameter`] identifying this field.
            pub fn require(&self) -> Result<&str> {
                self.get().ok_or(Error::MissingParameter(stringify!($field)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get().unwrap_or_default())
            }
        }
    };
}

// Generate all identifier fragments
ident_field!(FabricName, fabric_name, bounded, "Fabric name identifier");
ident_field!(NetworkName, network_name, bounded, "Network name identifier");
ident_field!(VrfName, vrf_name, bounded, "VRF name identifier");
ident_field!(SwitchSerial, switch_sn, "Switch serial number");
ident_field!(LinkUuid, link_uuid, "Inter-cluster link UUID");
ident_field!(LoginId, login_id, "Local user login ID");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_starts_unset() {
        let name = FabricName::new();
        assert!(!name.is_set());
        assert_eq!(name.get(), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut name = FabricName::new();
        name.set("MyFabric").unwrap();
        assert!(name.is_set());
        assert_eq!(name.get(), Some("MyFabric"));
    }

    #[test]
    fn test_set_rejects_empty_string() {
        let mut name = FabricName::new();
        let err = name.set("").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("fabric_name"));
        assert!(!name.is_set());
    }

    #[test]
    fn test_set_rejects_over_length() {
        let mut name = NetworkName::new();
        let err = name.set("n".repeat(65)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_bounded_accepts_max_length() {
        let mut name = VrfName::new();
        name.set("v".repeat(64)).unwrap();
        assert_eq!(name.get().unwrap().len(), 64);
    }

    #[test]
    fn test_unbounded_accepts_long_values() {
        let mut serial = SwitchSerial::new();
        serial.set("F".repeat(100)).unwrap();
        assert!(serial.is_set());
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut name = FabricName::new();
        name.set("MyFabric").unwrap();
        assert!(name.set("").is_err());
        assert_eq!(name.get(), Some("MyFabric"));
    }

    #[test]
    fn test_clear() {
        let mut uuid = LinkUuid::new();
        uuid.set("63505f61-ce7b-40a6-a38c-ae9a355b2116").unwrap();
        uuid.clear();
        assert!(!uuid.is_set());
    }

    #[test]
    fn test_require_set() {
        let mut login = LoginId::new();
        login.set("admin").unwrap();
        assert_eq!(login.require().unwrap(), "admin");
    }

    #[test]
    fn test_require_unset_names_parameter() {
        let serial = SwitchSerial::new();
        let err = serial.require().unwrap_err();
        assert_eq!(err, Error::MissingParameter("switch_sn"));
    }

    #[test]
    fn test_display() {
        let mut name = FabricName::new();
        assert_eq!(name.to_string(), "");
        name.set("Site1").unwrap();
        assert_eq!(name.to_string(), "Site1");
    }
}
