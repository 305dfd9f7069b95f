//! Serde support: a signature travels as its text.
//!
//! Deserializing re-parses with permissive options and rejects invalid text,
//! so a deserialized `Signature` is always valid.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Signature;

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let signature = Signature::new(text);
        match signature.error() {
            Some(error) => Err(de::Error::custom(format_args!(
                "invalid signature {:?}: {error}",
                signature.as_str()
            ))),
            None => Ok(signature),
        }
    }
}
