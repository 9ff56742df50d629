//! USB identifier extraction from the manifest document
//!
//! The manifest is an arbitrarily nested structure of objects and arrays.
//! Traversal is a generic depth-first walk over `serde_json::Value`;
//! the extraction rule itself lives in a visitor so further rules can be
//! added without touching the traversal.

use serde_json::{Map, Value};

use super::ManifestCache;

/// Callback invoked for every object encountered during a manifest walk
pub trait ManifestVisitor {
    /// Inspect one object node
    fn visit_object(&mut self, object: &Map<String, Value>);
}

/// Depth-first walk over a manifest document
///
/// Objects are visited before their values; scalars carry no structure
/// and are skipped.
pub fn walk(value: &Value, visitor: &mut dyn ManifestVisitor) {
    match value {
        Value::Object(object) => {
            visitor.visit_object(object);
            for child in object.values() {
                walk(child, visitor);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, visitor);
            }
        }
        _ => {}
    }
}

/// Normalize a USB identifier to `vendor:pid` lower-case hex form
///
/// Accepts both the `0xVVVV/0xPPPP` and `vvvv:pppp` spellings found in
/// the manifest.
pub fn normalize_usb_id(usb_id: &str) -> String {
    match usb_id.split_once('/') {
        Some((vendor, product)) => {
            let vendor = vendor.trim_start_matches("0x").trim_start_matches("0X");
            let product = product.trim_start_matches("0x").trim_start_matches("0X");
            format!("{}:{}", vendor.to_ascii_lowercase(), product.to_ascii_lowercase())
        }
        None => usb_id.to_ascii_lowercase(),
    }
}

/// Collects `USBID`/`platform` pairs into a [`ManifestCache`]
///
/// The `USBID` field may hold a single string or a list of strings; each
/// identifier accumulates the platform names it has been observed with,
/// first seen first, duplicates suppressed.
#[derive(Debug, Default)]
pub struct UsbIdCollector {
    devices: ManifestCache,
}

impl UsbIdCollector {
    /// Empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the collector, yielding the accumulated cache
    pub fn into_cache(self) -> ManifestCache {
        self.devices
    }
}

impl ManifestVisitor for UsbIdCollector {
    fn visit_object(&mut self, object: &Map<String, Value>) {
        let (Some(usb_id), Some(platform)) = (object.get("USBID"), object.get("platform")) else {
            return;
        };
        let Some(platform) = platform.as_str() else {
            return;
        };

        let ids: Vec<&str> = match usb_id {
            Value::String(id) => vec![id.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            _ => return,
        };

        for id in ids {
            let platforms = self.devices.entry(normalize_usb_id(id)).or_default();
            if !platforms.iter().any(|known| known == platform) {
                platforms.push(platform.to_string());
            }
        }
    }
}

/// Flatten a manifest document into a [`ManifestCache`]
pub fn extract(document: &Value) -> ManifestCache {
    let mut collector = UsbIdCollector::new();
    walk(document, &mut collector);
    collector.into_cache()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> Value {
        json!({
            "format-version": "1.0.0",
            "firmware": [
                {
                    "platform": "Pixhawk1",
                    "USBID": ["0x26AC/0x0010", "0x26AC/0x0011"],
                    "url": "https://example.invalid/fw.apj"
                },
                {
                    "platform": "CubeOrange",
                    "USBID": "0x2DAE/0x1016",
                    "nested": {
                        "platform": "CubeOrange+",
                        "USBID": "0x2DAE/0x1016"
                    }
                },
                { "platform": "no-usb-id-here" },
                { "USBID": "0xDEAD/0xBEEF" }
            ]
        })
    }

    #[test]
    fn test_normalize_usb_id_forms_are_equal() {
        assert_eq!(normalize_usb_id("0xCAFE/0xBEEF"), "cafe:beef");
        assert_eq!(normalize_usb_id("cafe:beef"), "cafe:beef");
        assert_eq!(normalize_usb_id("CAFE:BEEF"), "cafe:beef");
        assert_eq!(normalize_usb_id("0xCAFE/0xBEEF"), normalize_usb_id("cafe:beef"));
    }

    #[test]
    fn test_extract_flattens_nested_document() {
        let cache = extract(&sample_document());

        assert_eq!(
            cache.get("26ac:0010").map(Vec::as_slice),
            Some(&["Pixhawk1".to_string()][..])
        );
        assert_eq!(
            cache.get("26ac:0011").map(Vec::as_slice),
            Some(&["Pixhawk1".to_string()][..])
        );
        // Same identifier observed under two platforms, outer object first
        assert_eq!(
            cache.get("2dae:1016").map(Vec::as_slice),
            Some(&["CubeOrange".to_string(), "CubeOrange+".to_string()][..])
        );
        // Objects missing either field contribute nothing
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_extract_suppresses_duplicate_platforms() {
        let document = json!([
            { "USBID": "1209:5740", "platform": "MatekH743" },
            { "USBID": "0x1209/0x5740", "platform": "MatekH743" }
        ]);
        let cache = extract(&document);
        assert_eq!(
            cache.get("1209:5740").map(Vec::as_slice),
            Some(&["MatekH743".to_string()][..])
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let document = sample_document();
        let first = extract(&document);
        let second = extract(&document);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
