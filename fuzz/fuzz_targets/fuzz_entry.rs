// SPDX-License-Identifier: PMPL-1.0
#![no_main]

use std::sync::OnceLock;

use euthymia::mood::classify;
use euthymia::sentiment::SentimentEngine;
use libfuzzer_sys::fuzz_target;

fn engine() -> &'static SentimentEngine {
    static ENGINE: OnceLock<SentimentEngine> = OnceLock::new();
    ENGINE.get_or_init(SentimentEngine::new)
}

fuzz_target!(|text: &str| {
    if let Ok(result) = engine().analyze(text) {
        assert!((-1.0..=1.0).contains(&result.polarity));
        let _ = classify(result.polarity);
    }
});
