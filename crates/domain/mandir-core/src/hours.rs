use chrono::{NaiveTime, Timelike};
use mandir_config::{CLOSES_AT_MINUTES, OPENS_AT_MINUTES};

fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// True between opening and closing time, both ends inclusive to the minute.
pub fn is_open_at(t: NaiveTime) -> bool {
    (OPENS_AT_MINUTES..=CLOSES_AT_MINUTES).contains(&minutes_of_day(t))
}
