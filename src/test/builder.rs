use crate::Tag;

/// Writes NBT bytes by hand for tests. Nothing here checks the result is
/// valid, which is the point: tests build truncated and malformed input with
/// it as easily as good input.
#[derive(Default)]
pub struct Builder {
    payload: Vec<u8>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }

    /// Append bytes as they are.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn tag(self, t: Tag) -> Self {
        self.raw_bytes(&[t as u8])
    }

    /// A `u16` length prefix on its own, for strings whose bytes are added
    /// with [`Builder::raw_bytes`].
    pub fn raw_str_len(self, len: usize) -> Self {
        let len = u16::try_from(len).expect("string length fits in u16");
        self.raw_bytes(&len.to_be_bytes())
    }

    /// A key, or a string payload: UTF-8 bytes behind a `u16` length.
    pub fn name(self, name: &str) -> Self {
        self.raw_str_len(name.len()).raw_bytes(name.as_bytes())
    }

    fn named(self, t: Tag, name: &str) -> Self {
        self.tag(t).name(name)
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.named(Tag::Compound, name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    pub fn start_list(self, name: &str, element: Tag, len: i32) -> Self {
        self.named(Tag::List, name).start_anon_list(element, len)
    }

    /// List header without tag or name, as found inside another list.
    pub fn start_anon_list(self, element: Tag, len: i32) -> Self {
        self.tag(element).int_payload(len)
    }

    pub fn byte_payload(self, b: i8) -> Self {
        self.raw_bytes(&b.to_be_bytes())
    }

    pub fn short_payload(self, n: i16) -> Self {
        self.raw_bytes(&n.to_be_bytes())
    }

    pub fn int_payload(self, n: i32) -> Self {
        self.raw_bytes(&n.to_be_bytes())
    }

    pub fn byte(self, name: &str, b: i8) -> Self {
        self.named(Tag::Byte, name).byte_payload(b)
    }

    pub fn short(self, name: &str, n: i16) -> Self {
        self.named(Tag::Short, name).short_payload(n)
    }

    pub fn int(self, name: &str, n: i32) -> Self {
        self.named(Tag::Int, name).int_payload(n)
    }

    pub fn long(self, name: &str, n: i64) -> Self {
        self.named(Tag::Long, name).raw_bytes(&n.to_be_bytes())
    }

    pub fn float(self, name: &str, n: f32) -> Self {
        self.named(Tag::Float, name).raw_bytes(&n.to_be_bytes())
    }

    pub fn double(self, name: &str, n: f64) -> Self {
        self.named(Tag::Double, name).raw_bytes(&n.to_be_bytes())
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.named(Tag::String, name).name(s)
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        bs.iter()
            .fold(self.array_header(Tag::ByteArray, name, bs.len()), |b, n| {
                b.byte_payload(*n)
            })
    }

    pub fn int_array(self, name: &str, ns: &[i32]) -> Self {
        ns.iter()
            .fold(self.array_header(Tag::IntArray, name, ns.len()), |b, n| {
                b.int_payload(*n)
            })
    }

    pub fn long_array(self, name: &str, ns: &[i64]) -> Self {
        ns.iter()
            .fold(self.array_header(Tag::LongArray, name, ns.len()), |b, n| {
                b.raw_bytes(&n.to_be_bytes())
            })
    }

    fn array_header(self, t: Tag, name: &str, len: usize) -> Self {
        let len = i32::try_from(len).expect("array length fits in i32");
        self.named(t, name).int_payload(len)
    }
}
