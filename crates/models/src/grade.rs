use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of one student's submission for one assignment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Submitted")]
    Submitted,
    #[sea_orm(string_value = "Late")]
    Late,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Submitted => "Submitted",
            Self::Late => "Late",
        }
    }
}

/// Percentage -> 4.0-scale GPA step function.
///
/// Boundaries are inclusive on the lower edge: 90.0 maps to 4.0, 89.99 to 3.7.
pub fn gpa_for_percentage(percentage: f64) -> f64 {
    match percentage {
        p if p >= 90.0 => 4.0,
        p if p >= 85.0 => 3.7,
        p if p >= 80.0 => 3.3,
        p if p >= 75.0 => 3.0,
        p if p >= 70.0 => 2.7,
        p if p >= 65.0 => 2.3,
        p if p >= 60.0 => 2.0,
        p if p >= 50.0 => 1.0,
        _ => 0.0,
    }
}

/// Aggregate grade figures for one student across their assignments
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSummary {
    pub total_marks_earned: f64,
    pub total_marks_possible: f64,
    pub overall_percentage: f64,
    pub gpa: f64,
    pub graded_count: u32,
    pub ungraded_count: u32,
}

impl GradeSummary {
    /// Aggregate `(assignment total_marks, submission marks)` pairs.
    ///
    /// A pair with `None` marks is an ungraded submission: it is excluded from
    /// both the numerator and the denominator, even though the submission row
    /// exists. An empty or fully-ungraded set yields 0%, never NaN.
    pub fn aggregate<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (f64, Option<f64>)>,
    {
        let mut summary = Self::default();

        for (total_marks, marks) in items {
            match marks {
                Some(earned) => {
                    summary.graded_count += 1;
                    summary.total_marks_earned += earned;
                    summary.total_marks_possible += total_marks;
                }
                None => summary.ungraded_count += 1,
            }
        }

        summary.overall_percentage = if summary.total_marks_possible > 0.0 {
            summary.total_marks_earned / summary.total_marks_possible * 100.0
        } else {
            0.0
        };
        summary.gpa = gpa_for_percentage(summary.overall_percentage);

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_band_boundaries() {
        assert_eq!(gpa_for_percentage(90.0), 4.0);
        assert_eq!(gpa_for_percentage(89.99), 3.7);
        assert_eq!(gpa_for_percentage(85.0), 3.7);
        assert_eq!(gpa_for_percentage(84.99), 3.3);
        assert_eq!(gpa_for_percentage(80.0), 3.3);
        assert_eq!(gpa_for_percentage(75.0), 3.0);
        assert_eq!(gpa_for_percentage(70.0), 2.7);
        assert_eq!(gpa_for_percentage(65.0), 2.3);
        assert_eq!(gpa_for_percentage(60.0), 2.0);
        assert_eq!(gpa_for_percentage(59.99), 1.0);
        assert_eq!(gpa_for_percentage(50.0), 1.0);
        assert_eq!(gpa_for_percentage(49.99), 0.0);
        assert_eq!(gpa_for_percentage(0.0), 0.0);
    }

    #[test]
    fn test_gpa_monotonic() {
        let mut previous = 0.0;
        for tenths in 0..=1000 {
            let gpa = gpa_for_percentage(f64::from(tenths) / 10.0);
            assert!(gpa >= previous, "gpa dropped at {}", tenths);
            previous = gpa;
        }
    }

    #[test]
    fn test_aggregate_basic() {
        let summary = GradeSummary::aggregate([(100.0, Some(90.0)), (50.0, Some(45.0))]);
        assert_eq!(summary.total_marks_earned, 135.0);
        assert_eq!(summary.total_marks_possible, 150.0);
        assert_eq!(summary.overall_percentage, 90.0);
        assert_eq!(summary.gpa, 4.0);
        assert_eq!(summary.graded_count, 2);
    }

    #[test]
    fn test_aggregate_excludes_null_marks_from_both_sides() {
        // The 200-mark assignment has a submission row but no marks yet; it
        // must not drag the percentage down.
        let summary = GradeSummary::aggregate([(100.0, Some(80.0)), (200.0, None)]);
        assert_eq!(summary.total_marks_possible, 100.0);
        assert_eq!(summary.total_marks_earned, 80.0);
        assert_eq!(summary.overall_percentage, 80.0);
        assert_eq!(summary.ungraded_count, 1);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let summary = GradeSummary::aggregate([]);
        assert_eq!(summary.overall_percentage, 0.0);
        assert_eq!(summary.gpa, 0.0);

        let all_ungraded = GradeSummary::aggregate([(100.0, None), (50.0, None)]);
        assert_eq!(all_ungraded.overall_percentage, 0.0);
        assert_eq!(all_ungraded.gpa, 0.0);
        assert_eq!(all_ungraded.ungraded_count, 2);
    }
}
