#![no_main]

use libfuzzer_sys::fuzz_target;

use seqcalc_core::{CsvHeader, SequenceKind};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(kind) = text.parse::<SequenceKind>() {
        // Canonical names round-trip
        assert_eq!(kind.name().parse::<SequenceKind>().ok(), Some(kind));
    }
    let _ = text.parse::<CsvHeader>();
});
