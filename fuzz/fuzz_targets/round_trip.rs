#![no_main]

use libfuzzer_sys::fuzz_target;
use packbits::header::max_packed_len;
use packbits::{Decoder, Encoder, PackBitsDecoder, PackBitsEncoder};

fuzz_target!(|data: &[u8]| {
    let mut compressed: Vec<u8> = Vec::new();

    {
        let mut encoder = PackBitsEncoder::new(data, &mut compressed);
        let written = encoder.encode();
        assert_eq!(written, compressed.len());
        assert!(written <= max_packed_len(data.len()));
    }

    let mut decompressed: Vec<u8> = Vec::new();
    {
        let mut decoder = PackBitsDecoder::new(&compressed, &mut decompressed);
        let (consumed, written) = decoder.decode().unwrap();
        assert_eq!(consumed, compressed.len());
        assert_eq!(written, decompressed.len());
    }
    assert_eq!(decompressed, data);
});
