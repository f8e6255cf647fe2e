//! Domain entities persisted by the scheduling client

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ValidationError;

/// Hourly wage held as whole cents so the value at rest always carries
/// exactly two decimals. Constructed only through the parsing helpers,
/// which reject zero, negative and non-finite input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wage(i64);

impl Wage {
    /// Parse user input such as `"15"` or `"15.00"`, rounding to cents
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidWage {
            input: input.to_string(),
        })?;
        Self::from_f64(value).map_err(|_| ValidationError::InvalidWage {
            input: input.to_string(),
        })
    }

    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidWage {
                input: value.to_string(),
            });
        }
        let cents = (value * 100.0).round() as i64;
        if cents <= 0 {
            return Err(ValidationError::InvalidWage {
                input: value.to_string(),
            });
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Numeric form used when the wage is sent over the wire
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Wage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Wage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // fixed two-decimal string at rest, e.g. "15.00"
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Wage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WageVisitor;

        impl de::Visitor<'_> for WageVisitor {
            type Value = Wage;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a positive wage as a decimal string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Wage, E> {
                Wage::parse(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Wage, E> {
                Wage::from_f64(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Wage, E> {
                Wage::from_f64(v as f64).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Wage, E> {
                Wage::from_f64(v as f64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(WageVisitor)
    }
}

/// A staff member on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub wage: Wage,
    pub skill: String,
}

/// One observed sales value at a point in time. Transient: only ever
/// part of a forecast request, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub ds: String,
    pub y: f64,
}

/// One hour of predicted demand from the forecasting service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInterval {
    pub time: String,
    pub demand: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

/// An assigned shift from the optimization service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub staff_id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub cost: f64,
}

/// The full optimization result: all shifts plus the server-reported total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub shifts: Vec<Shift>,
    pub total_cost: f64,
}

/// Keys of the persisted datasets. Namespaced so the scheduler slots
/// cannot collide with process-wide flags like the onboarding marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Staff,
    Forecast,
    Schedule,
    Onboarded,
}

impl DatasetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Staff => "scheduler.staff",
            DatasetKey::Forecast => "scheduler.forecast",
            DatasetKey::Schedule => "scheduler.schedule",
            DatasetKey::Onboarded => "app.onboarded",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the timestamp forms the services emit: RFC 3339 or the naive
/// `YYYY-MM-DDTHH:MM[:SS[.ffffff]]` produced by their isoformat dates.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
