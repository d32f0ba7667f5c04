#![no_main]
use jsondiff_core::{compare, Location};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) {
        // Comparing a document against itself never yields differences.
        assert!(compare(&document, &document, Location::new()).is_empty());
    }
});
