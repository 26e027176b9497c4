// Sequences of integers, each element (de)serialized with `crate::string_or_native`.

use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize, Serialize)]
#[serde(bound(
    deserialize = "T: Deserialize<'de> + FromStr<Err: Display>",
    serialize = "T: Serialize + Display",
))]
struct Wrapper<T>(#[serde(with = "crate::string_or_native")] T);

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de> + FromStr<Err: Display>,
    D: Deserializer<'de>,
{
    let items = Vec::<Wrapper<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().map(|Wrapper(item)| item).collect())
}

pub fn serialize<S: Serializer>(
    items: impl IntoIterator<Item = impl Serialize + Display>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(items.into_iter().map(Wrapper))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Result};

    use super::*;

    #[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
    #[serde(transparent)]
    struct Slots(#[serde(with = "super")] Vec<u64>);

    #[test]
    fn serializes_to_strings() -> Result<()> {
        assert_eq!(serde_json::to_value(Slots(vec![3, 4]))?, json!(["3", "4"]));
        Ok(())
    }

    #[test]
    fn deserializes_mixed_elements() -> Result<()> {
        assert_eq!(
            serde_json::from_value::<Slots>(json!(["3", 4]))?,
            Slots(vec![3, 4]),
        );
        Ok(())
    }
}
