use either::Either::{Left, Right};
use strsepf::{
    Error,
    format::{Kind, Specifier},
    token::Input,
};

const STRING: Specifier = Specifier {
    kind: Kind::String,
    width: 0,
    suppressed: false,
};

#[test]
fn input_ends_at_nul() {
    let mut buf = *b"ab\0cd";
    let input = Input::new(&mut buf);
    assert_eq!(input.len(), 2);
    assert_eq!(input.first(), Some(b'a'));
}

#[test]
fn input_skip() {
    let mut buf = *b"ab";
    let mut input = Input::new(&mut buf);

    input.skip();
    assert_eq!(input.first(), Some(b'b'));
    input.skip();
    assert!(input.is_empty());
    input.skip();
    assert!(input.is_empty());
}

#[test]
fn split_on_terminator() {
    let mut buf = *b"GP,BWC,";
    let mut input = Input::new(&mut buf);

    assert_eq!(input.split(b','), Left(&b"GP"[..]));
    assert_eq!(input.split(b','), Left(&b"BWC"[..]));
    assert!(input.is_empty());
    assert_eq!(buf, *b"GP\0BWC\0");
}

#[test]
fn split_without_terminator() {
    let mut buf = *b"a,b";
    let mut input = Input::new(&mut buf);

    assert_eq!(input.split(b','), Left(&b"a"[..]));
    assert_eq!(input.split(b','), Right(&b"b"[..]));
    assert!(input.is_empty());
}

#[test]
fn split_empty_tokens() {
    let mut buf = *b",,x";
    let mut input = Input::new(&mut buf);

    assert_eq!(input.split(b','), Left(&b""[..]));
    assert_eq!(input.split(b','), Left(&b""[..]));
    assert_eq!(input.take_rest(), b"x");
}

#[test]
fn take_rest_empties_input() {
    let mut buf = *b"a,b\0c";
    let mut input = Input::new(&mut buf);

    assert_eq!(input.take_rest(), b"a,b");
    assert!(input.is_empty());
    assert_eq!(input.take_rest(), b"");
}

#[test]
fn carve_advances_format() {
    let mut buf = *b"12.34";
    let mut input = Input::new(&mut buf);
    let mut fmt = &b".%d"[..];

    assert_eq!(input.carve(&mut fmt, &STRING), Ok(&b"12"[..]));
    assert_eq!(fmt, b"%d");
    assert_eq!(input.first(), Some(b'3'));
}

#[test]
fn carve_to_end() {
    let mut buf = *b"12.34";
    let mut input = Input::new(&mut buf);
    let mut fmt = &b""[..];

    assert_eq!(input.carve(&mut fmt, &STRING), Ok(&b"12.34"[..]));
    assert!(input.is_empty());
}

#[test]
fn carve_width() {
    let wide = Specifier {
        width: 3,
        ..STRING
    };

    let mut buf = *b"123,1234,";
    let mut input = Input::new(&mut buf);
    let mut fmt = &b","[..];

    assert_eq!(input.carve(&mut fmt, &wide), Ok(&b"123"[..]));

    let mut fmt = &b","[..];
    assert_eq!(input.carve(&mut fmt, &wide), Err(Error::TokenTooWide));
}

#[test]
fn carve_suppressed_ignores_width() {
    let skipped = Specifier {
        width: 1,
        suppressed: true,
        ..STRING
    };

    let mut buf = *b"1234";
    let mut input = Input::new(&mut buf);
    let mut fmt = &b""[..];

    assert_eq!(input.carve(&mut fmt, &skipped), Ok(&b"1234"[..]));
}

#[test]
fn carve_empty_input() {
    let mut buf = *b"";
    let mut input = Input::new(&mut buf);
    let mut fmt = &b","[..];

    assert_eq!(input.carve(&mut fmt, &STRING), Err(Error::InputMismatch));
}
