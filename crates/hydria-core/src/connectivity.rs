//! Technology field schema registry
//!
//! Fixed mapping from a `CommunicationTechnology` to the ordered set of
//! identifier fields required to configure it. The registry is built once at
//! process start, checked for exhaustiveness over the technology enumeration,
//! and never mutated afterwards. Field order within a technology is
//! significant and preserved as declared.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::CommunicationTechnology;

/// Semantic type label of a configuration field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Hexadecimal string, e.g. a DevEUI
    Hex,
    /// Decimal digit string, e.g. an IMEI
    Numeric,
    /// Colon-separated MAC address
    Mac,
    /// Printable plain string
    Text,
}

/// Declaration of one identifier field required by a technology.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Exact character length a value must have.
    pub length: usize,
    pattern: Regex,
}

impl FieldDef {
    fn new(name: &'static str, kind: FieldKind, length: usize) -> Result<Self, AppError> {
        let source = match kind {
            FieldKind::Hex => format!("^[0-9A-Fa-f]{{{}}}$", length),
            FieldKind::Numeric => format!("^[0-9]{{{}}}$", length),
            // 6 colon-separated octet pairs; declared length is always 17
            FieldKind::Mac => "^([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$".to_string(),
            FieldKind::Text => format!("^[\\x20-\\x7E]{{{}}}$", length),
        };
        let pattern = Regex::new(&source).map_err(|err| {
            AppError::SchemaLookup(format!("invalid pattern for field {}: {}", name, err))
        })?;
        Ok(Self {
            name,
            kind,
            length,
            pattern,
        })
    }

    /// True when `value` matches this field's pattern. Length is checked
    /// separately so the two failure modes stay distinguishable.
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Why a submitted field value failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum FieldErrorReason {
    Missing,
    WrongLength { expected: usize, actual: usize },
    PatternMismatch,
    /// Submitted field not declared in the schema. Reported in strict
    /// mode only; lenient mode ignores undeclared fields.
    UnexpectedField,
}

/// One failed field, tagged with its reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub field: String,
    #[serde(flatten)]
    pub reason: FieldErrorReason,
}

/// Immutable registry mapping every technology to its field declarations.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: BTreeMap<CommunicationTechnology, Vec<FieldDef>>,
}

impl SchemaRegistry {
    /// Build the registry from the static declarations. Fails if a declared
    /// technology is missing an entry, has an empty field list, or carries a
    /// malformed pattern.
    pub fn build() -> Result<Self, AppError> {
        use CommunicationTechnology::*;
        use FieldKind::*;

        let mut schemas: BTreeMap<CommunicationTechnology, Vec<FieldDef>> = BTreeMap::new();

        let declarations: [(CommunicationTechnology, &[(&'static str, FieldKind, usize)]); 9] = [
            (Sigfox, &[("DeviceId", Hex, 8), ("Pac", Hex, 16)]),
            (
                Lorawan,
                &[
                    ("DevEUI", Hex, 16),
                    ("JoinEUI", Hex, 16),
                    ("AppKey", Hex, 32),
                ],
            ),
            (
                NbIot,
                &[
                    ("Imei", Numeric, 15),
                    ("Imsi", Numeric, 15),
                    ("Iccid", Numeric, 20),
                ],
            ),
            (
                WmBus,
                &[
                    ("ManufacturerId", Hex, 4),
                    ("DeviceId", Hex, 8),
                    ("EncryptionKey", Hex, 32),
                ],
            ),
            (
                Mioty,
                &[
                    ("Eui64", Hex, 16),
                    ("ShortAddress", Hex, 4),
                    ("NetworkKey", Hex, 32),
                ],
            ),
            (Wifi, &[("MacAddress", Mac, 17), ("Ssid", Text, 32)]),
            (Bluetooth, &[("MacAddress", Mac, 17), ("PassKey", Numeric, 6)]),
            (Nfc, &[("TagId", Hex, 14)]),
            (Oms, &[("DeviceId", Hex, 8), ("EncryptionKey", Hex, 32)]),
        ];

        for (technology, fields) in declarations {
            let defs = fields
                .iter()
                .map(|&(name, kind, length)| FieldDef::new(name, kind, length))
                .collect::<Result<Vec<_>, _>>()?;
            schemas.insert(technology, defs);
        }

        // Exhaustiveness: every enum member must have a non-empty entry.
        for technology in CommunicationTechnology::ALL {
            match schemas.get(&technology) {
                None => {
                    return Err(AppError::SchemaLookup(format!(
                        "no field schema declared for technology {}",
                        technology
                    )))
                }
                Some(defs) if defs.is_empty() => {
                    return Err(AppError::SchemaLookup(format!(
                        "empty field schema declared for technology {}",
                        technology
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(Self { schemas })
    }

    /// Ordered field declarations for a technology. Exhaustiveness is
    /// guaranteed at construction, so lookup always succeeds.
    pub fn fields_for(&self, technology: CommunicationTechnology) -> &[FieldDef] {
        self.schemas
            .get(&technology)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Validate a field-name to value mapping against a technology's schema.
    ///
    /// For every declared field, checks presence, exact character length,
    /// then pattern, reporting the first failing reason per field. An empty
    /// result means the configuration is valid. In strict mode, submitted
    /// fields not declared in the schema are reported as unexpected;
    /// otherwise they are ignored for forward compatibility.
    pub fn validate_config(
        &self,
        technology: CommunicationTechnology,
        fields: &BTreeMap<String, String>,
        strict: bool,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for def in self.fields_for(technology) {
            match fields.get(def.name) {
                None => errors.push(FieldError {
                    field: def.name.to_string(),
                    reason: FieldErrorReason::Missing,
                }),
                Some(value) => {
                    let actual = value.chars().count();
                    if actual != def.length {
                        errors.push(FieldError {
                            field: def.name.to_string(),
                            reason: FieldErrorReason::WrongLength {
                                expected: def.length,
                                actual,
                            },
                        });
                    } else if !def.matches(value) {
                        errors.push(FieldError {
                            field: def.name.to_string(),
                            reason: FieldErrorReason::PatternMismatch,
                        });
                    }
                }
            }
        }

        if strict {
            let declared: Vec<&str> = self
                .fields_for(technology)
                .iter()
                .map(|def| def.name)
                .collect();
            for name in fields.keys() {
                if !declared.contains(&name.as_str()) {
                    errors.push(FieldError {
                        field: name.clone(),
                        reason: FieldErrorReason::UnexpectedField,
                    });
                }
            }
        }

        if !errors.is_empty() {
            tracing::debug!(
                technology = %technology,
                error_count = errors.len(),
                "technology config validation failed"
            );
        }

        errors
    }
}

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::build()
        .unwrap_or_else(|err| panic!("technology field schema registry failed to build: {}", err))
});

/// Process-wide registry instance. First access builds and checks it;
/// a failed build aborts startup rather than degrading silently.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_every_technology_has_a_non_empty_schema() {
        for technology in CommunicationTechnology::ALL {
            assert!(
                !registry().fields_for(technology).is_empty(),
                "no fields for {}",
                technology
            );
        }
    }

    #[test]
    fn test_lorawan_field_order_preserved() {
        let names: Vec<&str> = registry()
            .fields_for(CommunicationTechnology::Lorawan)
            .iter()
            .map(|def| def.name)
            .collect();
        assert_eq!(names, vec!["DevEUI", "JoinEUI", "AppKey"]);
    }

    #[test]
    fn test_valid_lorawan_config_has_no_errors() {
        let config = fields(&[
            ("DevEUI", "0011223344556677"),
            ("JoinEUI", "8899AABBCCDDEEFF"),
            ("AppKey", "00112233445566778899AABBCCDDEEFF"),
        ]);
        let errors = registry().validate_config(CommunicationTechnology::Lorawan, &config, false);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_wrong_length_reported() {
        let config = fields(&[("DeviceId", "0011AA"), ("Pac", "0011223344556677")]);
        let errors = registry().validate_config(CommunicationTechnology::Sigfox, &config, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "DeviceId");
        assert_eq!(
            errors[0].reason,
            FieldErrorReason::WrongLength {
                expected: 8,
                actual: 6
            }
        );
    }

    #[test]
    fn test_pattern_mismatch_on_correct_length() {
        // right length, non-hex characters
        let config = fields(&[("DeviceId", "0011GGHH"), ("Pac", "0011223344556677")]);
        let errors = registry().validate_config(CommunicationTechnology::Sigfox, &config, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, FieldErrorReason::PatternMismatch);
    }

    #[test]
    fn test_stripped_field_reported_missing() {
        let config = fields(&[
            ("DevEUI", "0011223344556677"),
            ("AppKey", "00112233445566778899AABBCCDDEEFF"),
        ]);
        let errors = registry().validate_config(CommunicationTechnology::Lorawan, &config, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "JoinEUI");
        assert_eq!(errors[0].reason, FieldErrorReason::Missing);
    }

    #[test]
    fn test_unexpected_field_only_in_strict_mode() {
        let config = fields(&[("TagId", "00112233445566"), ("Color", "blue")]);

        let lenient = registry().validate_config(CommunicationTechnology::Nfc, &config, false);
        assert!(lenient.is_empty());

        let strict = registry().validate_config(CommunicationTechnology::Nfc, &config, true);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].field, "Color");
        assert_eq!(strict[0].reason, FieldErrorReason::UnexpectedField);
    }

    #[test]
    fn test_mac_address_validation() {
        let valid = fields(&[
            ("MacAddress", "AA:BB:CC:DD:EE:FF"),
            ("PassKey", "123456"),
        ]);
        assert!(registry()
            .validate_config(CommunicationTechnology::Bluetooth, &valid, false)
            .is_empty());

        let invalid = fields(&[
            ("MacAddress", "AA-BB-CC-DD-EE-FF"),
            ("PassKey", "123456"),
        ]);
        let errors = registry().validate_config(CommunicationTechnology::Bluetooth, &invalid, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "MacAddress");
        assert_eq!(errors[0].reason, FieldErrorReason::PatternMismatch);
    }

    #[test]
    fn test_registry_build_is_fallible_and_ok() {
        assert!(SchemaRegistry::build().is_ok());
    }
}
