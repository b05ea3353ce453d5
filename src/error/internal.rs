use chrono::NaiveDate;
use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord ID stored as a String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Archived daily stats whose JSON columns do not match the expected shape
    ///
    /// Also raised when the live aggregate cannot be serialized for archiving.
    #[error("Failed to convert daily stats for {day}: {source}")]
    DailyStatsJson {
        /// Day of the snapshot being converted
        day: NaiveDate,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
