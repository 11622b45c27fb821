use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde::ser::{Serialize, Serializer};

use crate::StatusCode;

impl Serialize for StatusCode {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.status())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        StatusCode::from_u16(value).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Unsigned(value.into()), &"a known status code")
        })
    }
}

#[cfg(test)]
mod test {
    use crate::StatusCode;

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&StatusCode::OK).unwrap(), "200");
        assert_eq!(serde_json::to_string(&StatusCode::NOT_FOUND).unwrap(), "404");
    }

    #[test]
    fn test_deserialize() {
        let status = serde_json::from_str::<StatusCode>("418").unwrap();
        assert_eq!(status, StatusCode::I_AM_A_TEAPOT);

        assert!(serde_json::from_str::<StatusCode>("999").is_err());
        assert!(serde_json::from_str::<StatusCode>("\"200\"").is_err());
    }
}
