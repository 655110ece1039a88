use chrono::{Datelike, Days, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attendance mark for one student on one day
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "late")]
    Late,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }

    /// Late still counts as attended for percentage purposes
    pub fn is_attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

/// Derived monthly attendance figures for one student.
///
/// Never stored; recomputed from the raw records on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total_days: u32,
    pub present_days: u32,
    pub late_days: u32,
    pub absent_days: u32,
    pub attended_days: u32,
    pub percentage: u32,
}

impl AttendanceStats {
    /// Tally a month's worth of statuses into counts and a rounded percentage.
    ///
    /// An empty record set yields 0%, never NaN.
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        let mut stats = Self::default();

        for status in statuses {
            stats.total_days += 1;
            match status {
                AttendanceStatus::Present => stats.present_days += 1,
                AttendanceStatus::Late => stats.late_days += 1,
                AttendanceStatus::Absent => stats.absent_days += 1,
            }
        }

        stats.attended_days = stats.present_days + stats.late_days;
        stats.percentage = if stats.total_days == 0 {
            0
        } else {
            let ratio = f64::from(stats.attended_days) / f64::from(stats.total_days);
            (ratio * 100.0).round() as u32
        };

        stats
    }
}

/// First and last day of a calendar month, for inclusive range queries.
///
/// Returns `None` for an out-of-range month number.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.checked_sub_days(Days::new(1))?;

    Some((first, last))
}

/// (year, month) of the date, for defaulting stats queries to the current month
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(present: u32, late: u32, absent: u32) -> Vec<AttendanceStatus> {
        let mut v = Vec::new();
        v.extend(std::iter::repeat_n(AttendanceStatus::Present, present as usize));
        v.extend(std::iter::repeat_n(AttendanceStatus::Late, late as usize));
        v.extend(std::iter::repeat_n(AttendanceStatus::Absent, absent as usize));
        v
    }

    #[test]
    fn test_tally_typical_month() {
        let stats = AttendanceStats::tally(statuses(15, 3, 2));
        assert_eq!(
            stats,
            AttendanceStats {
                total_days: 20,
                present_days: 15,
                late_days: 3,
                absent_days: 2,
                attended_days: 18,
                percentage: 90,
            }
        );
    }

    #[test]
    fn test_tally_empty_is_zero_percent() {
        let stats = AttendanceStats::tally([]);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_tally_rounds_to_nearest() {
        // 1/3 attended -> 33.33 -> 33
        assert_eq!(AttendanceStats::tally(statuses(1, 0, 2)).percentage, 33);
        // 2/3 attended -> 66.67 -> 67
        assert_eq!(AttendanceStats::tally(statuses(2, 0, 1)).percentage, 67);
    }

    #[test]
    fn test_late_counts_as_attended() {
        let stats = AttendanceStats::tally(statuses(0, 4, 0));
        assert_eq!(stats.attended_days, 4);
        assert_eq!(stats.percentage, 100);
    }

    #[test]
    fn test_month_bounds() {
        let (first, last) = month_bounds(2025, 1).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        // December rolls the year
        let (first, last) = month_bounds(2025, 12).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        // Leap-year February
        let (_, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(month_bounds(2025, 13).is_none());
        assert!(month_bounds(2025, 0).is_none());
    }

    #[test]
    fn test_status_serde_is_lowercase() {
        let json = serde_json::to_string(&AttendanceStatus::Late).unwrap();
        assert_eq!(json, "\"late\"");

        let parsed: AttendanceStatus = serde_json::from_str("\"present\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Present);
    }
}
