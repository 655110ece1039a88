use crate::entities::{assignments, grades, students};
use crate::error::{ServiceError, ServiceResult, on_conflict};
use chrono::NaiveDateTime;
use models::grade::{GradeSummary, SubmissionStatus};
use rand::{Rng, seq::SliceRandom};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub student_id: Uuid,
    pub assignment_id: Uuid,
    pub marks: Option<f64>,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct GradeUpdate {
    pub marks: Option<f64>,
    pub status: Option<SubmissionStatus>,
}

/// Outcome of a best-effort seeding run: per-item failures are collected and
/// returned next to the partial success count, never rolled back.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// A submission the seeder intends to insert
#[derive(Debug, Clone)]
pub struct PlannedSubmission {
    pub student_id: Uuid,
    pub assignment_id: Uuid,
    pub marks: Option<f64>,
    pub status: SubmissionStatus,
    pub submitted_at: NaiveDateTime,
}

pub struct GradeService;

impl GradeService {
    pub async fn list(
        db: &DatabaseConnection,
        student_id: Option<Uuid>,
    ) -> ServiceResult<Vec<grades::Model>> {
        let mut query = grades::Entity::find();
        if let Some(student_id) = student_id {
            query = query.filter(grades::Column::StudentId.eq(student_id));
        }
        Ok(query.all(db).await?)
    }

    /// Create a submission. The (student, assignment) pair is unique; a
    /// second submission surfaces as a conflict, not a second row.
    pub async fn create(
        db: &DatabaseConnection,
        input: NewGrade,
    ) -> ServiceResult<grades::Model> {
        let assignment = assignments::Entity::find_by_id(input.assignment_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("assignment"))?;

        Self::warn_if_over_total(&assignment, input.marks);

        let submitted_at = match input.status {
            SubmissionStatus::Pending => None,
            _ => Some(chrono::Utc::now().naive_utc()),
        };

        let grade = grades::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(input.student_id),
            assignment_id: Set(input.assignment_id),
            marks: Set(input.marks),
            status: Set(input.status),
            submitted_at: Set(submitted_at),
        };

        grade.insert(db).await.map_err(|err| {
            on_conflict(
                err,
                "student already has a submission for this assignment",
            )
        })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: GradeUpdate,
    ) -> ServiceResult<grades::Model> {
        let grade = grades::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("grade"))?;

        if let Some(marks) = changes.marks {
            let assignment = assignments::Entity::find_by_id(grade.assignment_id)
                .one(db)
                .await?
                .ok_or(ServiceError::NotFound("assignment"))?;
            Self::warn_if_over_total(&assignment, Some(marks));
        }

        let mut active: grades::ActiveModel = grade.into();
        if let Some(marks) = changes.marks {
            active.marks = Set(Some(marks));
        }
        if let Some(status) = changes.status {
            active.status = Set(status);
        }

        Ok(active.update(db).await?)
    }

    /// Overall percentage and GPA for one student across every assignment
    /// they have a graded submission for. Null-marks submissions count for
    /// neither side of the ratio.
    pub async fn summary(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> ServiceResult<GradeSummary> {
        students::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("student"))?;

        let submissions = grades::Entity::find()
            .filter(grades::Column::StudentId.eq(student_id))
            .all(db)
            .await?;

        let assignment_ids: Vec<Uuid> = submissions.iter().map(|g| g.assignment_id).collect();
        let totals: HashMap<Uuid, f64> = assignments::Entity::find()
            .filter(assignments::Column::Id.is_in(assignment_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|a| (a.id, a.total_marks))
            .collect();

        let pairs = submissions.iter().filter_map(|grade| {
            totals
                .get(&grade.assignment_id)
                .map(|total| (*total, grade.marks))
        });

        Ok(GradeSummary::aggregate(pairs))
    }

    /// Populate sample submissions across every assignment: a random 60-80%
    /// of the class takes part, students with an existing submission are
    /// skipped, and failures are accumulated without stopping the run.
    pub async fn seed(db: &DatabaseConnection) -> ServiceResult<SeedReport> {
        let assignments = assignments::Entity::find().all(db).await?;
        let students = students::Entity::find().all(db).await?;
        let existing: HashSet<(Uuid, Uuid)> = grades::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|g| (g.student_id, g.assignment_id))
            .collect();

        let mut students_by_class: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for student in students {
            students_by_class
                .entry(student.class_id)
                .or_default()
                .push(student.id);
        }

        let now = chrono::Utc::now().naive_utc();
        let (planned, skipped) = Self::plan_seed(
            &mut rand::thread_rng(),
            &assignments,
            &students_by_class,
            &existing,
            now,
        );

        let mut report = SeedReport {
            skipped,
            ..SeedReport::default()
        };

        for submission in planned {
            let row = grades::ActiveModel {
                id: Set(Uuid::new_v4()),
                student_id: Set(submission.student_id),
                assignment_id: Set(submission.assignment_id),
                marks: Set(submission.marks),
                status: Set(submission.status),
                submitted_at: Set(Some(submission.submitted_at)),
            };

            match row.insert(db).await {
                Ok(_) => report.created += 1,
                Err(err) => {
                    log::error!("seed insert failed: {err}");
                    report.errors.push(format!(
                        "failed to seed submission for student {} on assignment {}",
                        submission.student_id, submission.assignment_id
                    ));
                }
            }
        }

        Ok(report)
    }

    /// Pure seeding plan so the randomness can be driven by a seeded RNG in
    /// tests. 60-80% of each class participates, 20% of submissions are
    /// late, 70% are pre-graded between half and full marks, and timestamps
    /// fall within the 30 days before `now`.
    pub fn plan_seed<R: Rng>(
        rng: &mut R,
        assignments: &[assignments::Model],
        students_by_class: &HashMap<Uuid, Vec<Uuid>>,
        existing: &HashSet<(Uuid, Uuid)>,
        now: NaiveDateTime,
    ) -> (Vec<PlannedSubmission>, usize) {
        let mut planned = Vec::new();
        let mut skipped = 0;

        for assignment in assignments {
            let Some(class_students) = students_by_class.get(&assignment.class_id) else {
                continue;
            };

            let fraction = rng.gen_range(0.6..=0.8);
            let target = (class_students.len() as f64 * fraction).round() as usize;

            let mut pool = class_students.clone();
            pool.shuffle(rng);
            pool.truncate(target);

            for student_id in pool {
                if existing.contains(&(student_id, assignment.id)) {
                    skipped += 1;
                    continue;
                }

                let status = if rng.gen_bool(0.2) {
                    SubmissionStatus::Late
                } else {
                    SubmissionStatus::Submitted
                };
                let marks = rng
                    .gen_bool(0.7)
                    .then(|| rng.gen_range(0.5..=1.0) * assignment.total_marks);
                let submitted_at =
                    now - chrono::Duration::seconds(rng.gen_range(0..30 * 24 * 3600));

                planned.push(PlannedSubmission {
                    student_id,
                    assignment_id: assignment.id,
                    marks,
                    status,
                    submitted_at,
                });
            }
        }

        (planned, skipped)
    }

    /// Clear every submission (the DELETE half of the seed utility)
    pub async fn clear_all(db: &DatabaseConnection) -> ServiceResult<u64> {
        let result = grades::Entity::delete_many().exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Marks above the assignment total are accepted (extra credit exists)
    /// but flagged in the logs.
    fn warn_if_over_total(assignment: &assignments::Model, marks: Option<f64>) {
        if let Some(marks) = marks
            && marks > assignment.total_marks
        {
            log::warn!(
                "marks {} exceed total {} for assignment {}",
                marks,
                assignment.total_marks,
                assignment.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};

    fn assignment(id: u128, class: u128, total_marks: f64) -> assignments::Model {
        assignments::Model {
            id: Uuid::from_u128(id),
            class_id: Uuid::from_u128(class),
            title: format!("assignment {id}"),
            total_marks,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            kind: "homework".to_owned(),
        }
    }

    fn roster(class: u128, count: u128) -> HashMap<Uuid, Vec<Uuid>> {
        let students = (1..=count).map(Uuid::from_u128).collect();
        HashMap::from([(Uuid::from_u128(class), students)])
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_plan_respects_participation_bounds() {
        let assignments = vec![assignment(100, 1, 50.0)];
        let students = roster(1, 100);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (planned, _) =
                GradeService::plan_seed(&mut rng, &assignments, &students, &HashSet::new(), now());
            assert!(
                (60..=80).contains(&planned.len()),
                "planned {} submissions",
                planned.len()
            );
        }
    }

    #[test]
    fn test_plan_skips_existing_submissions() {
        let assignments = vec![assignment(100, 1, 50.0)];
        let students = roster(1, 10);

        // Everyone already has a submission, so a second run plans nothing.
        let existing: HashSet<(Uuid, Uuid)> = (1..=10)
            .map(|s| (Uuid::from_u128(s), Uuid::from_u128(100)))
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        let (planned, skipped) =
            GradeService::plan_seed(&mut rng, &assignments, &students, &existing, now());
        assert!(planned.is_empty());
        assert!(skipped > 0);
    }

    #[test]
    fn test_plan_marks_within_half_to_full_range() {
        let total = 80.0;
        let assignments = vec![assignment(100, 1, total)];
        let students = roster(1, 50);

        let mut rng = StdRng::seed_from_u64(42);
        let (planned, _) =
            GradeService::plan_seed(&mut rng, &assignments, &students, &HashSet::new(), now());

        for submission in &planned {
            if let Some(marks) = submission.marks {
                assert!((total * 0.5..=total).contains(&marks), "marks {marks}");
            }
            assert!(submission.submitted_at <= now());
            assert!(submission.submitted_at >= now() - chrono::Duration::days(30));
        }

        // With 50 students at 70% graded, both graded and ungraded rows
        // should appear.
        assert!(planned.iter().any(|s| s.marks.is_some()));
        assert!(planned.iter().any(|s| s.marks.is_none()));
    }

    #[test]
    fn test_plan_ignores_classes_without_students() {
        let assignments = vec![assignment(100, 2, 50.0)];
        let students = roster(1, 10); // different class

        let mut rng = StdRng::seed_from_u64(3);
        let (planned, skipped) =
            GradeService::plan_seed(&mut rng, &assignments, &students, &HashSet::new(), now());
        assert!(planned.is_empty());
        assert_eq!(skipped, 0);
    }
}
