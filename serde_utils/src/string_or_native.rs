// Integers are written as strings in human-readable formats because JSON numbers cannot represent
// every `u64` in JavaScript. Deserialization accepts both forms since some clients send numbers.
// Binary formats get the native representation.

use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    str::FromStr,
};

use serde::{
    de::{Error, IntoDeserializer as _, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + FromStr<Err: Display>,
    D: Deserializer<'de>,
{
    struct StringOrNativeVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de> + FromStr<Err: Display>> Visitor<'de>
        for StringOrNativeVisitor<T>
    {
        type Value = T;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("a decimal string or an unsigned integer")
        }

        fn visit_str<E: Error>(self, string: &str) -> Result<Self::Value, E> {
            string.parse().map_err(E::custom)
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            T::deserialize(value.into_deserializer())
        }
    }

    if deserializer.is_human_readable() {
        deserializer.deserialize_any(StringOrNativeVisitor(PhantomData))
    } else {
        T::deserialize(deserializer)
    }
}

pub fn serialize<S: Serializer>(
    value: impl Serialize + Display,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.collect_str(&value)
    } else {
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use serde_json::{json, Result, Value};
    use test_case::test_case;

    use super::*;

    #[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
    #[serde(transparent)]
    struct Slot(#[serde(with = "super")] u64);

    #[derive(PartialEq, Eq, Debug, Deserialize)]
    #[serde(transparent)]
    struct Count(#[serde(with = "super")] NonZeroU64);

    #[test_case(json!("12"))]
    #[test_case(json!(12))]
    fn deserializes_strings_and_numbers(json: Value) -> Result<()> {
        assert_eq!(serde_json::from_value::<Slot>(json)?, Slot(12));
        Ok(())
    }

    #[test]
    fn serializes_to_string() -> Result<()> {
        let json = serde_json::to_value(Slot(u64::MAX))?;

        assert_eq!(json, json!("18446744073709551615"));
        Ok(())
    }

    #[test]
    fn rejects_values_the_target_type_cannot_hold() {
        serde_json::from_value::<Count>(json!("0")).expect_err("zero is not a NonZeroU64");
        serde_json::from_value::<Slot>(json!("-1")).expect_err("slots are unsigned");
    }
}
