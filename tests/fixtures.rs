use csv::ReaderBuilder;
use strsepf::{FromTokens, Slot};
use tinyvec::ArrayVec;

const PATH: &str = "fixtures/sentences.csv";

/// Each fixture row holds an input, a format, the kinds of slots to offer
/// (`u`, `i`, `s`, or `-` for a missing slot), the expected result code, and
/// the expected contents of each slot afterward.
#[test]
fn scan_fixtures() {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    for record in reader.records() {
        let record = record.unwrap();
        let mut fields = record.iter();

        let input = fields.next().unwrap();
        let format = fields.next().unwrap();
        let kinds = fields.next().unwrap();
        let code: i16 = fields.next().unwrap().parse().unwrap();
        let expected: Vec<&str> = fields.collect();

        let mut buf = input.as_bytes().to_vec();
        let mut values = Values::new(kinds);

        let found = strsepf::code(strsepf::scan(&mut buf, format, &mut values));
        assert_eq!(found, code, "scanning {input:?} against {format:?}");

        for (i, expected) in expected.iter().enumerate() {
            assert_eq!(
                values.render(i),
                *expected,
                "slot {i} scanning {input:?} against {format:?}"
            );
        }
    }
}

struct Values<'b> {
    kinds: ArrayVec<[u8; 8]>,
    u: [u32; 8],
    i: [i32; 8],
    s: [&'b [u8]; 8],
}

impl Values<'_> {
    fn new(kinds: &str) -> Self {
        Self {
            kinds: kinds.bytes().collect(),
            u: [0; 8],
            i: [0; 8],
            s: [&[]; 8],
        }
    }

    fn render(&self, index: usize) -> String {
        match self.kinds[index] {
            b'u' => self.u[index].to_string(),
            b'i' => self.i[index].to_string(),
            b's' => String::from_utf8(self.s[index].to_vec()).unwrap(),
            kind => panic!("no value for slot kind {kind}"),
        }
    }
}

impl<'b> FromTokens<'b> for Values<'b> {
    fn slot(&mut self, index: usize) -> Option<Slot<'_, 'b>> {
        match self.kinds.get(index)? {
            b'u' => Some(Slot::U32(&mut self.u[index])),
            b'i' => Some(Slot::I32(&mut self.i[index])),
            b's' => Some(Slot::Str(&mut self.s[index])),
            _ => None,
        }
    }
}
