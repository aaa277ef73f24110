use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("Invalid opening hours")]
pub struct HoursParseError;

/// A single open/close window, minutes from midnight.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HourRange {
    open: u16,
    close: u16,
}

impl HourRange {
    pub const fn open_minute(self) -> u16 {
        self.open
    }

    pub const fn close_minute(self) -> u16 {
        self.close
    }

    pub fn contains_minute(self, minute_of_day: u16) -> bool {
        if self.open <= self.close {
            (self.open..self.close).contains(&minute_of_day)
        } else {
            // Window wraps past midnight
            minute_of_day >= self.open || minute_of_day < self.close
        }
    }
}

fn parse_minute_of_day(s: &str) -> Result<u16, HoursParseError> {
    let (h, m) = s.split_once(':').ok_or(HoursParseError)?;
    let h: u16 = h.parse().map_err(|_| HoursParseError)?;
    let m: u16 = m.parse().map_err(|_| HoursParseError)?;
    if h > 23 || m > 59 {
        return Err(HoursParseError);
    }
    Ok(h * 60 + m)
}

impl FromStr for HourRange {
    type Err = HoursParseError;

    // "HH:MM-HH:MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (open, close) = s.trim().split_once('-').ok_or(HoursParseError)?;
        Ok(Self {
            open: parse_minute_of_day(open.trim())?,
            close: parse_minute_of_day(close.trim())?,
        })
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.open / 60,
            self.open % 60,
            self.close / 60,
            self.close % 60
        )
    }
}

pub const DAYS_PER_WEEK: usize = 7;

/// Weekly opening hours, one optional window per day starting with Monday.
/// A `None` entry means closed (or unknown) on that day.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct WeeklyHours([Option<HourRange>; DAYS_PER_WEEK]);

impl WeeklyHours {
    pub fn day(&self, weekday: usize) -> Option<HourRange> {
        self.0.get(weekday).copied().flatten()
    }

    pub fn set_day(&mut self, weekday: usize, hours: Option<HourRange>) {
        if let Some(slot) = self.0.get_mut(weekday) {
            *slot = hours;
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl From<[Option<HourRange>; DAYS_PER_WEEK]> for WeeklyHours {
    fn from(from: [Option<HourRange>; DAYS_PER_WEEK]) -> Self {
        Self(from)
    }
}
