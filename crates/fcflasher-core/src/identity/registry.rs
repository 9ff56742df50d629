//! Board identifier registry
//!
//! Classifies an attached USB device from its descriptor strings. Rules
//! are evaluated in list order and the first match wins, so ordering is
//! the conflict-resolution policy: specific product rules come before the
//! broad manufacturer catch-alls, and manifest-derived rules are appended
//! after all static rules so static identifications always take
//! precedence.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::manifest::ManifestCache;
use crate::typedefs::Platform;

/// USB descriptor attribute a rule matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SerialAttr {
    Product,
    Manufacturer,
}

/// A single matching rule: attribute, literal value, implied platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardIdentifier {
    /// Which descriptor string the rule inspects
    pub attribute: SerialAttr,
    /// Literal the descriptor string must equal
    pub id_value: Cow<'static, str>,
    /// Platform implied by a match
    pub platform: Platform,
}

impl BoardIdentifier {
    const fn fixed(attribute: SerialAttr, id_value: &'static str, platform: Platform) -> Self {
        Self {
            attribute,
            id_value: Cow::Borrowed(id_value),
            platform,
        }
    }

    fn matches(&self, product: &str, manufacturer: &str) -> bool {
        let input = match self.attribute {
            SerialAttr::Product => product,
            SerialAttr::Manufacturer => manufacturer,
        };
        self.id_value == input
    }
}

/// Static identification rules, order-significant
static IDENTIFIERS: &[BoardIdentifier] = &[
    BoardIdentifier::fixed(SerialAttr::Product, "Pixhawk1", Platform::Pixhawk1),
    BoardIdentifier::fixed(SerialAttr::Product, "FMU v2.x", Platform::Pixhawk1),
    BoardIdentifier::fixed(SerialAttr::Product, "FMU v3.x", Platform::Pixhawk1),
    BoardIdentifier::fixed(SerialAttr::Product, "Pixhawk4", Platform::Pixhawk4),
    BoardIdentifier::fixed(SerialAttr::Product, "FMU v5.x", Platform::Pixhawk4),
    BoardIdentifier::fixed(SerialAttr::Product, "FMU v6X.x", Platform::Pixhawk6X),
    BoardIdentifier::fixed(SerialAttr::Product, "FMU v6C.x", Platform::Pixhawk6C),
    BoardIdentifier::fixed(SerialAttr::Product, "CubeOrange", Platform::CubeOrange),
    BoardIdentifier::fixed(SerialAttr::Manufacturer, "ArduPilot", Platform::GenericSerial),
    BoardIdentifier::fixed(SerialAttr::Manufacturer, "Arduino", Platform::GenericSerial),
    BoardIdentifier::fixed(SerialAttr::Manufacturer, "3D Robotics", Platform::GenericSerial),
    BoardIdentifier::fixed(SerialAttr::Manufacturer, "Hex/ProfiCNC", Platform::GenericSerial),
    BoardIdentifier::fixed(SerialAttr::Manufacturer, "Holybro", Platform::GenericSerial),
];

/// Ordered rule list built once per process
#[derive(Debug, Clone)]
pub struct IdentifierRegistry {
    rules: Vec<BoardIdentifier>,
}

impl IdentifierRegistry {
    /// Registry with the static rules only
    pub fn from_static() -> Self {
        Self {
            rules: IDENTIFIERS.to_vec(),
        }
    }

    /// Registry with static rules plus one product rule per unique board
    /// name recovered from the manifest cache
    ///
    /// Manifest-derived names are not guaranteed to map onto the platform
    /// enumeration one-to-one, so they all classify as `GenericSerial`.
    pub fn with_manifest(cache: &ManifestCache) -> Self {
        let mut registry = Self::from_static();

        let board_names: BTreeSet<&str> = cache
            .values()
            .flat_map(|platforms| platforms.iter().map(String::as_str))
            .collect();

        registry.rules.extend(board_names.into_iter().map(|name| BoardIdentifier {
            attribute: SerialAttr::Product,
            id_value: Cow::Owned(name.to_string()),
            platform: Platform::GenericSerial,
        }));

        log::debug!("identifier registry holds {} rules", registry.rules.len());
        registry
    }

    /// Classify a device from its USB descriptor strings
    ///
    /// First matching rule wins; `None` means the device is unknown.
    pub fn classify(&self, product: &str, manufacturer: &str) -> Option<Platform> {
        self.rules
            .iter()
            .find(|rule| rule.matches(product, manufacturer))
            .map(|rule| rule.platform)
    }

    /// Number of rules in evaluation order
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the registry holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn cache_with(names: &[&str]) -> ManifestCache {
        let mut cache = BTreeMap::new();
        cache.insert(
            "1209:5740".to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        cache
    }

    #[test]
    fn test_product_rules_win_over_manufacturer() {
        let registry = IdentifierRegistry::from_static();
        // The product string is specific even though the manufacturer
        // would match a catch-all
        assert_eq!(
            registry.classify("Pixhawk1", "ArduPilot"),
            Some(Platform::Pixhawk1)
        );
    }

    #[test]
    fn test_manufacturer_catch_all() {
        let registry = IdentifierRegistry::from_static();
        assert_eq!(
            registry.classify("Some Unknown Device", "Holybro"),
            Some(Platform::GenericSerial)
        );
    }

    #[test]
    fn test_unknown_device() {
        let registry = IdentifierRegistry::from_static();
        assert_eq!(registry.classify("Gizmo", "Acme"), None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let registry = IdentifierRegistry::with_manifest(&cache_with(&["CubeOrange", "MatekH743"]));
        let first = registry.classify("MatekH743", "");
        for _ in 0..10 {
            assert_eq!(registry.classify("MatekH743", ""), first);
        }
    }

    #[test]
    fn test_manifest_rules_classify_as_generic() {
        let registry = IdentifierRegistry::with_manifest(&cache_with(&["MatekH743"]));
        assert_eq!(
            registry.classify("MatekH743", ""),
            Some(Platform::GenericSerial)
        );
    }

    #[test]
    fn test_static_rules_precede_manifest_rules() {
        // A manifest entry reusing a static product name must not change
        // the static identification
        let registry = IdentifierRegistry::with_manifest(&cache_with(&["Pixhawk1"]));
        assert_eq!(registry.classify("Pixhawk1", ""), Some(Platform::Pixhawk1));
    }

    #[test]
    fn test_manifest_names_deduplicated() {
        let mut cache = cache_with(&["MatekH743"]);
        cache.insert("2dae:1011".to_string(), vec!["MatekH743".to_string()]);
        let registry = IdentifierRegistry::with_manifest(&cache);
        assert_eq!(registry.len(), IDENTIFIERS.len() + 1);
    }
}
