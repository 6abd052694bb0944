#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes_with_opts, to_bytes, Compound, DeOpts, NamedTag, Value};

fuzz_target!(|v: Value| {
    let root = NamedTag::new("", Compound::new().with("", v));

    // Strings over 64KiB fail to encode, which is fine.
    if let Ok(bs) = to_bytes(&root) {
        let decoded = from_bytes_with_opts(&bs, DeOpts::new().max_depth(usize::MAX)).unwrap();
        assert_eq!(to_bytes(&decoded).unwrap(), bs);
    }
});
