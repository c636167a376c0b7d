//! # Distinguished Names
//!
//! Flattened view of an X.509 name: attribute short name to value. The
//! keychain only matches on `commonName`, the other attributes are kept
//! for display.

use std::collections::BTreeMap;

use serde::Serialize;
use x509_cert::der::asn1::ObjectIdentifier;
use x509_cert::name::Name;

/// RFC 4519 attribute types kept from X.509 names.
const ATTRIBUTES: [(ObjectIdentifier, &str); 4] = [
    (ObjectIdentifier::new_unwrap("2.5.4.3"), "commonName"),
    (ObjectIdentifier::new_unwrap("2.5.4.6"), "countryName"),
    (ObjectIdentifier::new_unwrap("2.5.4.10"), "organizationName"),
    (ObjectIdentifier::new_unwrap("2.5.4.11"), "organizationalUnitName"),
];

/// Attribute name → value map of a distinguished name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dn {
    values: BTreeMap<String, String>,
}

impl Dn {
    /// Empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name carrying only a common name.
    pub fn common_name(cn: impl Into<String>) -> Self {
        let mut dn = Self::new();
        dn.set("commonName", cn);
        dn
    }

    /// Attribute value by name (`commonName`, `countryName`, ...).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Set an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Flatten an X.509 name. Unknown attribute types are ignored; string
    /// values are read as UTF-8 whatever their ASN.1 string type.
    pub fn from_name(name: &Name) -> Self {
        let mut dn = Self::new();
        for rdn in name.0.iter() {
            for atv in rdn.0.iter() {
                let Some((_, key)) = ATTRIBUTES.iter().find(|(oid, _)| *oid == atv.oid) else {
                    continue;
                };
                dn.set(*key, String::from_utf8_lossy(atv.value.value()).into_owned());
            }
        }
        dn
    }
}

impl std::fmt::Display for Dn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_name() {
        let name = Name::from_str("CN=FR01,OU=0002 130005481,O=AriadNEXT,C=FR").unwrap();
        let dn = Dn::from_name(&name);
        assert_eq!(dn.get("commonName"), Some("FR01"));
        assert_eq!(dn.get("countryName"), Some("FR"));
        assert_eq!(dn.get("organizationName"), Some("AriadNEXT"));
        assert_eq!(dn.get("organizationalUnitName"), Some("0002 130005481"));
    }

    #[test]
    fn test_common_name_helper() {
        let dn = Dn::common_name("AB12");
        assert_eq!(dn.get("commonName"), Some("AB12"));
        assert_eq!(dn.get("countryName"), None);
        assert_eq!(dn.to_string(), "commonName=AB12");
    }
}
