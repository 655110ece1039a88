use crate::entities::{attendance_records, attendance_requests};
use crate::error::{ServiceError, ServiceResult};
use models::{attendance::AttendanceStatus, request::RequestStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewAttendanceRequest {
    pub student_id: Uuid,
    pub attendance_id: Uuid,
    pub requested_status: AttendanceStatus,
    pub reason: String,
}

pub struct AttendanceRequestService;

impl AttendanceRequestService {
    pub async fn list(
        db: &DatabaseConnection,
        status: Option<RequestStatus>,
    ) -> ServiceResult<Vec<attendance_requests::Model>> {
        let mut query = attendance_requests::Entity::find();
        if let Some(status) = status {
            query = query.filter(attendance_requests::Column::Status.eq(status));
        }
        Ok(query.all(db).await?)
    }

    /// File a change request against an existing attendance record. The
    /// record's current status is captured at filing time so the approver
    /// sees what the student saw.
    pub async fn create(
        db: &DatabaseConnection,
        input: NewAttendanceRequest,
    ) -> ServiceResult<attendance_requests::Model> {
        let record = attendance_records::Entity::find_by_id(input.attendance_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("attendance record"))?;

        if record.student_id != input.student_id {
            return Err(ServiceError::validation(
                "attendance record does not belong to this student",
            ));
        }
        if record.status == input.requested_status {
            return Err(ServiceError::validation(
                "requested status matches the current status",
            ));
        }

        let request = attendance_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(input.student_id),
            attendance_id: Set(input.attendance_id),
            current_status: Set(record.status),
            requested_status: Set(input.requested_status),
            reason: Set(input.reason),
            status: Set(RequestStatus::Pending),
        };

        Ok(request.insert(db).await?)
    }

    /// Decide a pending request. Approval overwrites the underlying record's
    /// status inside the same transaction, so the request and the record
    /// cannot diverge. A decided request cannot be decided again.
    pub async fn decide(
        db: &DatabaseConnection,
        request_id: Uuid,
        decision: RequestStatus,
    ) -> ServiceResult<attendance_requests::Model> {
        if !decision.is_terminal() {
            return Err(ServiceError::validation(
                "decision must be approved or denied",
            ));
        }

        let txn = db.begin().await?;

        let request = attendance_requests::Entity::find_by_id(request_id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("attendance request"))?;

        if !request.status.can_transition_to(decision) {
            return Err(ServiceError::validation(format!(
                "request is already {}",
                request.status.as_str()
            )));
        }

        let requested_status = request.requested_status;
        let attendance_id = request.attendance_id;

        let mut active: attendance_requests::ActiveModel = request.into();
        active.status = Set(decision);
        let decided = active.update(&txn).await?;

        if decision == RequestStatus::Approved {
            let record = attendance_records::Entity::find_by_id(attendance_id)
                .one(&txn)
                .await?
                .ok_or(ServiceError::NotFound("attendance record"))?;

            let version = record.version;
            let mut record: attendance_records::ActiveModel = record.into();
            record.status = Set(requested_status);
            record.version = Set(version + 1);
            record.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(decided)
    }
}
