/// All surrogate primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Amounts in Chilean pesos. CLP has no minor unit.
pub type Clp = i64;

/// All event timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (issue/expiry dates on documents) carry no time zone.
pub type Date = chrono::NaiveDate;
