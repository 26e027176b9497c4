// Variable-length byte strings such as SSZ-encoded bitlists.

use serde::{de::Error as _, Deserialize as _, Deserializer, Serializer};

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let string = String::deserialize(deserializer)?;

    let digits = string
        .strip_prefix("0x")
        .ok_or_else(|| D::Error::custom("string does not have hexadecimal prefix"))?;

    hex::decode(digits).map_err(D::Error::custom)
}

pub fn serialize<S: Serializer>(bytes: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("0x{}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Result};

    #[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
    #[serde(transparent)]
    struct Bits(#[serde(with = "super")] Vec<u8>);

    #[test]
    fn bytes_are_prefixed_hex() -> Result<()> {
        let bits = Bits(vec![0x01, 0xff]);

        assert_eq!(serde_json::to_value(&bits)?, json!("0x01ff"));
        assert_eq!(serde_json::from_value::<Bits>(json!("0x01ff"))?, bits);

        Ok(())
    }

    #[test]
    fn unprefixed_hex_is_rejected() {
        serde_json::from_value::<Bits>(json!("01ff")).expect_err("the 0x prefix is mandatory");
    }
}
