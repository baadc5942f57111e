// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for condition block scanning
//!
//! The test name is fuzzed alongside the transcript text; arbitrary
//! names must be escaped into the scan pattern, never panic it.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ertex_transcript::find_condition;

fuzz_target!(|input: (&str, &str)| {
    let (name, text) = input;
    let _ = find_condition(name, text);
});
