#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = jsonvalue::from_slice(data) {
        let encoded = jsonvalue::to_vec(&value).expect("Decoded values are always encodable");
        let decoded = jsonvalue::from_slice(&encoded).expect("Encoded values are valid JSON");
        assert_eq!(decoded, value);
    }
});
