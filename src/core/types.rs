use std::fmt;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Numeric {
    Value(f64),
    #[default]
    NotAvailable,
}

impl Numeric {
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Numeric::Value(value)
        } else {
            Numeric::NotAvailable
        }
    }

    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Numeric::NotAvailable;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Numeric::Value(value),
            _ => Numeric::NotAvailable,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Numeric::Value(value) => Some(value),
            Numeric::NotAvailable => None,
        }
    }

    // Years and ages only count when strictly positive.
    pub fn positive(self) -> Option<f64> {
        self.value().filter(|value| *value > 0.0)
    }

    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

struct NumericVisitor;

impl<'de> Visitor<'de> for NumericVisitor {
    type Value = Numeric;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Numeric, E> {
        Ok(Numeric::from_f64(value as f64))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Numeric, E> {
        Ok(Numeric::from_f64(value as f64))
    }

    fn visit_f64<E: serde::de::Error>(self, value: f64) -> Result<Numeric, E> {
        Ok(Numeric::from_f64(value))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Numeric, E> {
        Ok(Numeric::from_text(value))
    }

    fn visit_bool<E: serde::de::Error>(self, _value: bool) -> Result<Numeric, E> {
        Ok(Numeric::NotAvailable)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Numeric, E> {
        Ok(Numeric::NotAvailable)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Numeric, E> {
        Ok(Numeric::NotAvailable)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Numeric, D::Error> {
        deserializer.deserialize_any(NumericVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Numeric, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Numeric::NotAvailable)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Numeric, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Numeric::NotAvailable)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericVisitor)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Value(value) => serializer.serialize_f64(*value),
            Numeric::NotAvailable => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Report {
    pub age: Numeric,
    pub monthly_income: Numeric,
    pub monthly_expenses: Numeric,
    pub monthly_savings: Numeric,
    pub total_assets: Numeric,
    pub financial_health_score: Numeric,
    pub score_reasons: String,
    pub monthly_breakdown: Vec<BreakdownItem>,
    pub fi_timelines: Vec<Scenario>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub roi: Numeric,
    pub years_to_fi: Numeric,
    pub age_at_fi: Numeric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BreakdownItem {
    pub category: String,
    pub amount: Numeric,
    pub percent: Numeric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
    pub priority: String,
}
