#![no_main]

use libfuzzer_sys::fuzz_target;
use packbits::{unpack_to_vec, unpack_window_to_vec};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let start = data[0] as usize * 4;
    let len = data[1] as usize;
    let input = &data[2..];

    // Any window of any stream is the same slice of the full decode.
    let full = unpack_to_vec(input, start + len);
    let window = unpack_window_to_vec(input, start, len);
    let expected = if full.len() > start { &full[start..] } else { &[][..] };
    assert_eq!(window, expected);
});
