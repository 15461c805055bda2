#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes and feeds them through the JSON bridge.
// Goal: no panics, even on malformed input.
fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let _ = proto_rewrite_core::rewrite_json(json, &Default::default());
    }
});
