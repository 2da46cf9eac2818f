//! Domain entities - Objects with identity and lifecycle

mod daily_forecast;
mod resolved_location;
mod search_record;

pub use daily_forecast::{DailyForecast, DayReading};
pub use resolved_location::ResolvedLocation;
pub use search_record::SearchRecord;
