use packbits::header::{
    encode_literal, encode_repeat, max_packed_len, Header, MAX_LITERAL,
    MAX_RUN, NOP,
};

#[test]
fn test_classify_headers() {
    assert_eq!(Header::from(0), Header::Literal(1));
    assert_eq!(Header::from(1), Header::Literal(2));
    assert_eq!(Header::from(127), Header::Literal(128));
    assert_eq!(Header::from(128), Header::Nop);
    assert_eq!(Header::from(129), Header::Repeat(128));
    assert_eq!(Header::from(0xfd), Header::Repeat(4));
    assert_eq!(Header::from(255), Header::Repeat(2));
}

#[test]
fn test_payload_len() {
    assert_eq!(Header::Literal(17).payload_len(), 17);
    assert_eq!(Header::Repeat(17).payload_len(), 1);
    assert_eq!(Header::Nop.payload_len(), 0);
    assert!(Header::Nop.is_empty());
    assert_eq!(Header::Repeat(5).len(), 5);
}

#[test]
fn test_encode_headers() {
    assert_eq!(encode_literal(1), 0);
    assert_eq!(encode_literal(MAX_LITERAL), 127);
    assert_eq!(encode_repeat(2), 0xff);
    assert_eq!(encode_repeat(4), 0xfd);
    assert_eq!(encode_repeat(5), 0xfc);
    assert_eq!(encode_repeat(MAX_RUN), 0x81);
    assert_eq!(u8::from(Header::Nop), NOP);

    // Every header except the no-op maps back to itself.
    for hdr in 0..=255u8 {
        assert_eq!(u8::from(Header::from(hdr)), hdr);
    }
}

#[test]
fn test_max_packed_len() {
    assert_eq!(max_packed_len(0), 0);
    assert_eq!(max_packed_len(1), 2);
    assert_eq!(max_packed_len(128), 129);
    assert_eq!(max_packed_len(129), 131);
    assert_eq!(max_packed_len(1000), 1008);
}
