#![no_main]

use base64_external::{engine::general_purpose::STANDARD, Engine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Encode matches the external crate and roundtrips
    let encoded = base64_codec::encode(data);
    assert_eq!(encoded, STANDARD.encode(data), "External crate encode mismatch");
    assert_eq!(
        base64_codec::decode(&encoded).as_deref(),
        Ok(data),
        "Roundtrip failed"
    );

    // Arbitrary input must never panic, and anything the external crate
    // accepts must decode to the same bytes
    let ours = base64_codec::decode(data);
    if let Ok(expected) = STANDARD.decode(data) {
        assert_eq!(ours.as_deref(), Ok(&expected[..]), "Decode mismatch");
    }

    // The in-place and slice paths agree with the allocating one
    let mut in_place = data.to_vec();
    let in_place_result = base64_codec::decode_vec_in_place(&mut in_place).map(|()| in_place);
    assert_eq!(in_place_result, ours, "In-place decode mismatch");

    if let Ok(decoded) = &ours {
        let mut out = vec![0u8; decoded.len()];
        assert_eq!(base64_codec::decode_to_slice(&mut out, data), Ok(decoded.len()));
        assert_eq!(&out, decoded);
    }
});
