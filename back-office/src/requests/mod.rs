//! Shift-Change Request Queue
//!
//! Employee-submitted lateness/leave/absence entries. The log is
//! append-only: a submission is never edited or deleted, the only mutation
//! is a manager flipping `treated`. "Sent" means written to the store;
//! there is no delivery beyond that.

use shared::models::{EmployeeRequest, RequestCreate, RequestKind};
use uuid::Uuid;

use crate::repository::{RepoError, RepoResult, RequestRepository, RosterRepository};
use crate::store::BackOfficeStore;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

/// Request queue operations
#[derive(Clone)]
pub struct RequestService {
    requests: RequestRepository,
    roster: RosterRepository,
}

impl RequestService {
    pub fn new(store: BackOfficeStore) -> Self {
        Self {
            requests: RequestRepository::new(store.clone()),
            roster: RosterRepository::new(store),
        }
    }

    /// Submit a request on behalf of a roster employee.
    ///
    /// Lateness requests must carry the expected arrival time; for leave
    /// and absence any submitted time is dropped.
    pub fn submit(&self, data: RequestCreate) -> RepoResult<EmployeeRequest> {
        if self.roster.find_by_id(&data.employee_id)?.is_none() {
            return Err(RepoError::NotFound(format!(
                "Employee {} not found",
                data.employee_id
            )));
        }
        validate_optional_text(&data.message, "message", MAX_NOTE_LEN)?;

        let time = match data.kind {
            RequestKind::Late => Some(data.time.ok_or_else(|| {
                RepoError::Validation("arrival time is required for a lateness request".to_string())
            })?),
            RequestKind::Leave | RequestKind::Absence => None,
        };

        let request = EmployeeRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: data.employee_id,
            kind: data.kind,
            date: data.date,
            time,
            message: data.message,
            treated: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        };
        self.requests.put(&request)?;
        tracing::info!("Request {:?} submitted by '{}'", request.kind, request.employee_id);
        Ok(request)
    }

    /// Full log, oldest first
    pub fn list(&self) -> RepoResult<Vec<EmployeeRequest>> {
        self.requests.find_all()
    }

    /// Manager inbox: requests not yet acknowledged
    pub fn list_untreated(&self) -> RepoResult<Vec<EmployeeRequest>> {
        let mut requests = self.requests.find_all()?;
        requests.retain(|r| !r.treated);
        Ok(requests)
    }

    /// Acknowledge a request (the only permitted mutation)
    pub fn mark_treated(&self, id: &str) -> RepoResult<EmployeeRequest> {
        let mut request = self
            .requests
            .find_by_id(id)?
            .ok_or_else(|| RepoError::NotFound(format!("Request {} not found", id)))?;
        request.treated = true;
        self.requests.put(&request)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal_macros::dec;
    use shared::models::{EmployeeCreate, Role, Zone};

    fn service() -> RequestService {
        let store = BackOfficeStore::open_in_memory().unwrap();
        RosterRepository::new(store.clone())
            .create(EmployeeCreate {
                name: "Marco".into(),
                role: Role::Server,
                zone: Zone::FloorBar,
                hourly_rate: dec!(14),
            })
            .unwrap();
        RequestService::new(store)
    }

    fn create(kind: RequestKind, time: Option<NaiveTime>) -> RequestCreate {
        RequestCreate {
            employee_id: "marco".into(),
            kind,
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            time,
            message: None,
        }
    }

    #[test]
    fn test_late_requires_time() {
        let service = service();
        assert!(matches!(
            service.submit(create(RequestKind::Late, None)),
            Err(RepoError::Validation(_))
        ));

        let request = service
            .submit(create(RequestKind::Late, NaiveTime::from_hms_opt(12, 30, 0)))
            .unwrap();
        assert_eq!(request.time, NaiveTime::from_hms_opt(12, 30, 0));
        assert!(!request.treated);
    }

    #[test]
    fn test_leave_drops_time() {
        let service = service();
        let request = service
            .submit(create(RequestKind::Leave, NaiveTime::from_hms_opt(9, 0, 0)))
            .unwrap();
        assert!(request.time.is_none());
    }

    #[test]
    fn test_unknown_employee_rejected() {
        let service = service();
        let mut data = create(RequestKind::Absence, None);
        data.employee_id = "ghost".into();
        assert!(matches!(service.submit(data), Err(RepoError::NotFound(_))));
    }

    #[test]
    fn test_treated_flow() {
        let service = service();
        let a = service.submit(create(RequestKind::Absence, None)).unwrap();
        let b = service.submit(create(RequestKind::Leave, None)).unwrap();

        assert_eq!(service.list_untreated().unwrap().len(), 2);

        service.mark_treated(&a.id).unwrap();
        let untreated = service.list_untreated().unwrap();
        assert_eq!(untreated.len(), 1);
        assert_eq!(untreated[0].id, b.id);

        // acknowledging twice is harmless
        service.mark_treated(&a.id).unwrap();
        assert!(service.list().unwrap().iter().any(|r| r.id == a.id && r.treated));
    }

    #[test]
    fn test_mark_treated_missing() {
        let service = service();
        assert!(matches!(
            service.mark_treated("nope"),
            Err(RepoError::NotFound(_))
        ));
    }
}
