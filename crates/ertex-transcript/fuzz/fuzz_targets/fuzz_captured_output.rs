// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for captured output span extraction

#![no_main]

use libfuzzer_sys::fuzz_target;

use ertex_transcript::{OUTPUT_LIMIT, captured_output};

fuzz_target!(|input: (&str, u8, &str)| {
    let (name, number, text) = input;
    if let Some(captured) = captured_output(name, usize::from(number), text) {
        assert!(captured.text.chars().count() <= OUTPUT_LIMIT);
    }
});
