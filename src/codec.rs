// codec.rs - Lenient JSON decoding shared by request bodies and the users file
//
// Both inputs are read the way a streaming decoder reads them: only the first
// JSON value counts and anything after it is ignored. Object keys match field
// names without regard to ASCII case.

use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess};

/// Decode the first JSON value in `bytes`. Empty or whitespace-only input is an error.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(value) => value,
        None => Err(de::Error::custom("EOF while parsing a value")),
    }
}

/// Fill string fields from a JSON object.
///
/// A key matching a field name in any ASCII case sets that field; a later
/// key overwrites an earlier one. `null` values leave the field untouched.
/// Unknown keys are skipped. Non-string values for a known field are errors.
pub fn read_string_fields<'de, A>(mut map: A, fields: &mut [(&str, &mut String)]) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    while let Some(key) = map.next_key::<String>()? {
        match fields.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(&key)) {
            Some((_, slot)) => {
                if let Some(value) = map.next_value::<Option<String>>()? {
                    **slot = value;
                }
            }
            None => {
                map.next_value::<IgnoredAny>()?;
            }
        }
    }
    Ok(())
}
