// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for verdict line scanning

#![no_main]

use libfuzzer_sys::fuzz_target;

use ertex_transcript::parse_verdicts;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_verdicts(text);
    }
});
