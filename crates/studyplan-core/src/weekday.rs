//! Weekday naming and serde helpers.
//!
//! Plans name practice-test days in lowercase ("saturday"), while schedule
//! records carry the capitalized English name ("Saturday"). Both parse through
//! [`chrono::Weekday`]'s `FromStr`, which accepts full and short names in any case.

use chrono::Weekday;

/// Full English name of a weekday ("Monday" .. "Sunday")
pub const fn full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Lowercase weekday name as used in plan files ("monday" .. "sunday")
pub const fn plan_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Serialize a single weekday as its full English name.
pub mod full {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::full_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown weekday '{name}'")))
    }
}

/// Serialize a list of weekdays as lowercase plan names.
pub mod plan_list {
    use chrono::Weekday;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(days.len()))?;
        for day in days {
            seq.serialize_element(super::plan_name(*day))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Weekday>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut days = Vec::with_capacity(names.len());
        for name in names {
            let day: Weekday = name
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("unknown weekday '{name}'")))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(days)
    }
}
