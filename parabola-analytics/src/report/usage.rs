use std::collections::BTreeMap;

use jiff::{
    Timestamp,
    civil::{Date, Weekday},
    tz::TimeZone,
};
use serde::{Deserialize, Serialize};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Usage counts bucketed by calendar day, hour of day, and weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Records per calendar day, oldest first. Days without records are absent.
    pub daily: BTreeMap<Date, usize>,
    /// Records per hour of day, `0..24`.
    pub hourly: [usize; 24],
    /// Records per weekday, Monday first.
    pub weekday: [usize; 7],
}

impl Usage {
    pub(crate) fn record(&mut self, timestamp: Timestamp, time_zone: &TimeZone) {
        let zoned = timestamp.to_zoned(time_zone.clone());

        *self.daily.entry(zoned.date()).or_default() += 1;
        self.hourly[hour_index(zoned.hour())] += 1;
        self.weekday[weekday_index(zoned.weekday())] += 1;
    }

    /// Returns the busiest hour of day, or `None` if nothing was recorded.
    ///
    /// Ties go to the earliest hour.
    #[must_use]
    pub fn peak_hour(&self) -> Option<usize> {
        peak(&self.hourly)
    }

    /// Returns the busiest weekday, or `None` if nothing was recorded.
    ///
    /// Ties go to the day earliest in the week, starting Monday.
    #[must_use]
    pub fn peak_weekday(&self) -> Option<Weekday> {
        peak(&self.weekday).map(|index| WEEKDAYS[index])
    }
}

/// jiff keeps the hour in `0..24`.
#[allow(clippy::cast_sign_loss)]
fn hour_index(hour: i8) -> usize {
    hour as usize
}

/// jiff keeps the offset in `0..7`.
#[allow(clippy::cast_sign_loss)]
fn weekday_index(weekday: Weekday) -> usize {
    weekday.to_monday_zero_offset() as usize
}

fn peak(counts: &[usize]) -> Option<usize> {
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .fold(None, |best: Option<(usize, usize)>, (index, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((index, count)),
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn timestamp(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    #[test]
    fn buckets_by_day_hour_and_weekday() {
        let mut usage = Usage::default();
        // 2024-03-04 is a Monday.
        usage.record(timestamp("2024-03-04T09:15:00Z"), &TimeZone::UTC);
        usage.record(timestamp("2024-03-04T09:45:00Z"), &TimeZone::UTC);
        usage.record(timestamp("2024-03-06T17:00:00Z"), &TimeZone::UTC);

        assert_eq!(usage.daily.get(&date(2024, 3, 4)), Some(&2));
        assert_eq!(usage.daily.get(&date(2024, 3, 6)), Some(&1));
        assert_eq!(usage.daily.len(), 2);
        assert_eq!(usage.hourly[9], 2);
        assert_eq!(usage.hourly[17], 1);
        assert_eq!(usage.weekday[0], 2);
        assert_eq!(usage.weekday[2], 1);
        assert_eq!(usage.peak_hour(), Some(9));
        assert_eq!(usage.peak_weekday(), Some(Weekday::Monday));
    }

    #[test]
    fn buckets_in_configured_time_zone() {
        let mut usage = Usage::default();
        let tz = TimeZone::fixed(jiff::tz::offset(-5));
        usage.record(timestamp("2024-03-04T02:00:00Z"), &tz);

        assert_eq!(usage.daily.get(&date(2024, 3, 3)), Some(&1));
        assert_eq!(usage.hourly[21], 1);
        assert_eq!(usage.peak_weekday(), Some(Weekday::Sunday));
    }

    #[test]
    fn first_and_last_buckets_are_reachable() {
        let mut usage = Usage::default();
        // 2024-03-10 is a Sunday and 2024-03-11 a Monday.
        usage.record(timestamp("2024-03-10T23:59:59Z"), &TimeZone::UTC);
        usage.record(timestamp("2024-03-11T00:00:00Z"), &TimeZone::UTC);

        assert_eq!(usage.hourly[23], 1);
        assert_eq!(usage.hourly[0], 1);
        assert_eq!(usage.weekday[6], 1);
        assert_eq!(usage.weekday[0], 1);
        assert_eq!(usage.hourly.iter().sum::<usize>(), 2);
    }

    #[test]
    fn peak_ties_go_to_the_earliest_bucket() {
        let mut counts = [0; 24];
        counts[5] = 3;
        counts[2] = 3;
        counts[20] = 1;
        assert_eq!(peak(&counts), Some(2));
    }

    #[test]
    fn empty_usage_has_no_peak() {
        let usage = Usage::default();
        assert_eq!(usage.peak_hour(), None);
        assert_eq!(usage.peak_weekday(), None);
    }
}
