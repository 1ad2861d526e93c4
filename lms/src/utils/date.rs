use chrono::{Duration, NaiveDate, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// length of every hold or loan window
pub const HOLD_PERIOD_DAYS: i64 = 14;

// inactive hold windows point at this date
pub fn epoch_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(1971, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn hold_window_from(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    (start, start + Duration::days(HOLD_PERIOD_DAYS))
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}
