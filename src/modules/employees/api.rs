use async_trait::async_trait;
use payroll_http::{ApiResult, HttpClient};

use super::models::{Employee, EmployeeId, EmployeeInput};

const COLLECTION_PATH: &str = "/employees";

fn record_path(id: EmployeeId) -> String {
    format!("{}/{}", COLLECTION_PATH, id)
}

/// The remote employee collection.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /employees`
    async fn list_employees(&self) -> ApiResult<Vec<Employee>>;

    /// `GET /employees/{id}`
    async fn get_employee(&self, id: EmployeeId) -> ApiResult<Employee>;

    /// `POST /employees`. Any 2xx is a committed write; the stored record
    /// is returned only when the body carries one.
    async fn create_employee(&self, input: &EmployeeInput) -> ApiResult<Option<Employee>>;

    /// `PUT /employees/{id}`, full-record replacement. Same body rules as
    /// [`EmployeeApi::create_employee`].
    async fn update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> ApiResult<Option<Employee>>;

    /// `DELETE /employees/{id}`; the response body is ignored
    async fn delete_employee(&self, id: EmployeeId) -> ApiResult<()>;
}

/// [`EmployeeApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteEmployeeApi {
    client: HttpClient,
}

impl RemoteEmployeeApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeeApi for RemoteEmployeeApi {
    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        self.client.get(COLLECTION_PATH).await?.into_json()
    }

    async fn get_employee(&self, id: EmployeeId) -> ApiResult<Employee> {
        self.client.get(&record_path(id)).await?.into_json()
    }

    async fn create_employee(&self, input: &EmployeeInput) -> ApiResult<Option<Employee>> {
        let response = self.client.post(COLLECTION_PATH, input).await?;
        Ok(response.json_or_none())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> ApiResult<Option<Employee>> {
        let response = self.client.put(&record_path(id), input).await?;
        Ok(response.json_or_none())
    }

    async fn delete_employee(&self, id: EmployeeId) -> ApiResult<()> {
        self.client.delete(&record_path(id)).await?;
        Ok(())
    }
}
