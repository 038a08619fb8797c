use super::*;
use pretty_assertions::assert_eq;

const PLAIN: StringFlags = StringFlags::empty();

fn decode(raw: &str) -> Result<String, EscapeError> {
    decode_literal(raw, PLAIN, false)
}

#[test]
fn no_escapes_is_identity() {
    assert_eq!(decode("hello world").as_deref(), Ok("hello world"));
    assert_eq!(decode("{x}").as_deref(), Ok("{x}"));
}

#[test]
fn simple_escapes() {
    assert_eq!(
        decode(r#"a\nb\t\\\'\"\a\b\f\r\v"#).as_deref(),
        Ok("a\nb\t\\'\"\x07\x08\x0C\r\x0B")
    );
}

#[test]
fn numeric_escapes() {
    assert_eq!(decode(r"\x41\101é\U0001F600").as_deref(), Ok("AAé😀"));
    assert_eq!(decode(r"\0").as_deref(), Ok("\0"));
    assert_eq!(decode(r"\1234").as_deref(), Ok("S4"));
}

#[test]
fn unknown_escape_is_kept() {
    assert_eq!(decode(r"\d\q").as_deref(), Ok(r"\d\q"));
}

#[test]
fn line_continuation_is_removed() {
    assert_eq!(decode("a\\\nb").as_deref(), Ok("ab"));
    assert_eq!(decode("a\\\r\nb").as_deref(), Ok("ab"));
}

#[test]
fn raw_keeps_backslashes() {
    assert_eq!(
        decode_literal(r"\n\x", StringFlags::RAW, false).as_deref(),
        Ok(r"\n\x")
    );
}

#[test]
fn fstring_braces_collapse() {
    let flags = StringFlags::FORMATTED;
    assert_eq!(decode_literal("{{literal}}", flags, true).as_deref(), Ok("{literal}"));
    assert_eq!(
        decode_literal(r"{{\n}}", flags | StringFlags::RAW, true).as_deref(),
        Ok(r"{\n}")
    );
    assert_eq!(decode_literal(r"a\tb", flags, true).as_deref(), Ok("a\tb"));
}

#[test]
fn bytes_escapes() {
    let flags = StringFlags::BYTES;
    assert_eq!(decode_literal(r"\xff\u1234", flags, false).as_deref(), Ok("\u{ff}\\u1234"));
    assert_eq!(
        decode_literal(r"\777", flags, false),
        Err(EscapeError {
            offset: 0,
            kind: EscapeErrorKind::InvalidCodePoint { value: 0o777 },
        })
    );
}

#[test]
fn truncated_hex() {
    assert_eq!(
        decode(r"ab\x4"),
        Err(EscapeError {
            offset: 2,
            kind: EscapeErrorKind::TruncatedHex {
                escape: 'x',
                expected: 2
            },
        })
    );
    assert!(decode(r"\u12").is_err());
}

#[test]
fn invalid_code_points() {
    assert_eq!(
        decode(r"\ud800").map_err(|e| e.kind),
        Err(EscapeErrorKind::InvalidCodePoint { value: 0xD800 })
    );
    assert_eq!(
        decode(r"\U00110000").map_err(|e| e.kind),
        Err(EscapeErrorKind::InvalidCodePoint { value: 0x11_0000 })
    );
}

#[test]
fn named_escapes_are_rejected() {
    let err = decode(r"x\N{EM DASH}").unwrap_err();
    assert_eq!(err.offset, 1);
    assert_eq!(err.kind, EscapeErrorKind::NamedUnicode);
    assert_eq!(err.to_string(), r"\N{...} named escapes are not supported (at byte 1)");
}
