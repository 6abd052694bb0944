#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, from_bytes_with_opts, to_bytes, DeOpts};

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_seq_len(100).max_depth(64);
    if let Ok(v) = from_bytes_with_opts(data, opts) {
        // Anything we can decode must encode, and re-encode to the same bytes.
        // Bytes rather than values are compared so NaN floats don't trip us up.
        let bs = to_bytes(&v).unwrap();
        assert_eq!(to_bytes(&from_bytes(&bs).unwrap()).unwrap(), bs);
    }
});
