// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for `ert-deftest` block extraction
//!
//! Extraction is a pure scan; it must never panic, whatever the source
//! text looks like.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ertex_defs::extract_definitions;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = extract_definitions(source);
    }
});
