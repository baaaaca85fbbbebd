#![no_main]

use libfuzzer_sys::fuzz_target;
use packbits::{unpack, SourceLimit};

fuzz_target!(|data: &[u8]| {
    let Some((&capacity, input)) = data.split_first() else {
        return;
    };
    let mut output = vec![0u8; capacity as usize * 8];
    let res = unpack(input, SourceLimit::FillDestination, &mut output);
    assert!(res.consumed <= input.len());
    assert!(res.written <= output.len());
});
