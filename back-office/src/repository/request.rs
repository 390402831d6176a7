//! Request Repository

use shared::models::EmployeeRequest;

use super::RepoResult;
use crate::store::{BackOfficeStore, Bucket};

#[derive(Clone)]
pub struct RequestRepository {
    store: BackOfficeStore,
}

impl RequestRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRequest>> {
        Ok(self.store.get(Bucket::Requests, id)?)
    }

    pub fn put(&self, request: &EmployeeRequest) -> RepoResult<()> {
        Ok(self.store.put(Bucket::Requests, &request.id, request)?)
    }

    /// Full request log, oldest submission first
    pub fn find_all(&self) -> RepoResult<Vec<EmployeeRequest>> {
        let mut requests: Vec<EmployeeRequest> = self.store.list(Bucket::Requests)?;
        requests.sort_by_key(|r| r.created_at);
        Ok(requests)
    }
}
