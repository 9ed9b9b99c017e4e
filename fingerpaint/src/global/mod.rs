//! Global singletons.

pub mod preferences;

/// Serialize with `Display`, deserialize with `FromStr`. For core types that have a textual
/// form but no serde impls of their own.
pub mod parse_str {
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: std::fmt::Display,
        S: serde::Serializer,
    {
        serializer.collect_str(value)
    }
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
        D: serde::Deserializer<'de>,
    {
        // Delegate to FromStr from a borrowed or owned string, depending on capabilities of deserializer.
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map_err(serde::de::Error::custom)
    }
}
