#![no_main]

use libfuzzer_sys::fuzz_target;

use seqcalc_core::{compute, render_csv, CsvHeader, SequenceKind, SequenceRequest, MAX_TERMS};

fuzz_target!(|data: &[u8]| {
    if data.len() < 21 {
        return;
    }
    let kind = if data[0] & 1 == 0 {
        SequenceKind::Arithmetic
    } else {
        SequenceKind::Geometric
    };
    let first = f64::from_le_bytes(data[1..9].try_into().unwrap());
    let step = f64::from_le_bytes(data[9..17].try_into().unwrap());
    // Spans both sides of the valid range
    let n = i64::from(i32::from_le_bytes(data[17..21].try_into().unwrap()) % 1200);

    let request = SequenceRequest::new(kind, first, step, n);
    match compute(&request) {
        Ok(result) => {
            assert_eq!(result.len() as i64, n);
            assert!(n >= 1 && n <= i64::from(MAX_TERMS));
            // Should not panic on any value, including NaN and infinities
            let _ = render_csv(&result, CsvHeader::Standard);
        }
        Err(_) => assert!(n < 1 || n > i64::from(MAX_TERMS)),
    }
});
