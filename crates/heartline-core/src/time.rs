use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// A timezone-aware instant, normalized to UTC.
///
/// Values are only constructed through [`FhirDateTime::new`] or parsing, both
/// of which reject instants that cannot be written back as RFC 3339. The
/// `Display` form is therefore always a valid, round-trippable timestamp
/// such as `2024-02-01T08:30:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FhirDateTime(OffsetDateTime);

impl FhirDateTime {
    pub fn new(datetime: OffsetDateTime) -> Result<Self> {
        let utc = datetime.to_offset(UtcOffset::UTC);
        utc.format(&Rfc3339).map_err(|e| {
            CoreError::invalid_date_time(format!("{datetime} cannot be written as RFC 3339: {e}"))
        })?;
        Ok(Self(utc))
    }
}

impl fmt::Display for FhirDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        write!(f, "{formatted}")
    }
}

impl FromStr for FhirDateTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let datetime = OffsetDateTime::parse(s, &Rfc3339).map_err(|e| {
            CoreError::invalid_date_time(format!("Failed to parse FHIR DateTime '{s}': {e}"))
        })?;
        Self::new(datetime)
    }
}

impl Serialize for FhirDateTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self.0.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for FhirDateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FhirDateTime::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_display_is_utc() {
        let dt: FhirDateTime = "2024-02-01T10:30:00+02:00".parse().unwrap();
        assert_eq!(dt.to_string(), "2024-02-01T08:30:00Z");
    }

    #[test]
    fn test_round_trip() {
        let original = "2023-11-05T23:59:59.25Z";
        let dt: FhirDateTime = original.parse().unwrap();
        let reparsed: FhirDateTime = dt.to_string().parse().unwrap();
        assert_eq!(dt, reparsed);
    }

    #[test]
    fn test_invalid_string() {
        assert!("not-a-date".parse::<FhirDateTime>().is_err());
        assert!("2024-02-01".parse::<FhirDateTime>().is_err());
    }

    #[test]
    fn test_unrepresentable_instant_is_rejected() {
        // Shifting to UTC moves this into year -1, which RFC 3339 cannot express.
        let result = FhirDateTime::new(datetime!(0000-01-01 00:30 +01:00));
        assert!(result.is_err());
    }

    #[test]
    fn test_serde() {
        let dt: FhirDateTime = serde_json::from_str("\"2024-03-10T12:00:00Z\"").unwrap();
        assert_eq!(dt, "2024-03-10T13:00:00+01:00".parse::<FhirDateTime>().unwrap());
        assert_eq!(serde_json::to_string(&dt).unwrap(), "\"2024-03-10T12:00:00Z\"");
    }
}
