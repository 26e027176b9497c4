use fixed_hash::construct_fixed_hash;
use impl_serde::impl_fixed_hash_serde;

pub const COMPRESSED_SIZE: usize = 48;

construct_fixed_hash! {
    pub struct PublicKeyBytes(COMPRESSED_SIZE);
}

impl_fixed_hash_serde!(PublicKeyBytes, COMPRESSED_SIZE);

#[cfg(test)]
mod tests {
    use serde_json::{json, Result};

    use super::*;

    #[test]
    fn serializes_as_prefixed_hex() -> Result<()> {
        let bytes = PublicKeyBytes::repeat_byte(0xab);
        let json = json!(format!("0x{}", "ab".repeat(COMPRESSED_SIZE)));

        assert_eq!(serde_json::to_value(bytes)?, json);
        assert_eq!(serde_json::from_value::<PublicKeyBytes>(json)?, bytes);

        Ok(())
    }

    #[test]
    fn deserialization_rejects_wrong_length() {
        let json = json!("0xabcd");

        serde_json::from_value::<PublicKeyBytes>(json)
            .expect_err("public keys must be exactly 48 bytes long");
    }
}
