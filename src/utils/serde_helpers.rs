use serde::{de, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

// Le front envoie les valeurs des <input> telles quelles: les nombres arrivent
// parfois en string ("72.5") et les champs optionnels vides en "".

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Nombres stockables tels quels (f64::parse accepte "inf" et "NaN")
pub trait Finite {
    fn is_finite_value(&self) -> bool;
}

impl Finite for i32 {
    fn is_finite_value(&self) -> bool {
        true
    }
}

impl Finite for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

/// Accepte `42` comme `"42"`, refuse les valeurs non finies
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Finite,
    T::Err: Display,
{
    let value = match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(value) => value,
        NumberOrText::Text(text) => text.trim().parse().map_err(de::Error::custom)?,
    };

    if !value.is_finite_value() {
        return Err(de::Error::custom("expected a finite number"));
    }
    Ok(value)
}

/// `null`, champ absent ou "" => None. Le reste est gardé tel quel.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.is_empty() => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}
