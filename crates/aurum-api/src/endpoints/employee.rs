//! # Employee Endpoint
//!
//! CRUD against `/funcionarios`.

use aurum_core::Employee;
use tracing::debug;

use crate::dto::{FuncionarioDto, FuncionarioPayload};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Client for the `/funcionarios` endpoint family.
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    http: HttpClient,
}

impl EmployeeApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        EmployeeApi { http }
    }

    /// Lists all employees.
    pub async fn list(&self) -> ApiResult<Vec<Employee>> {
        let rows: Vec<FuncionarioDto> = self.http.get_json("/funcionarios").await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    /// Fetches a single employee by id.
    pub async fn get(&self, id: i64) -> ApiResult<Employee> {
        let dto: FuncionarioDto = self.http.get_json(&format!("/funcionarios/{}", id)).await?;
        Ok(dto.into())
    }

    /// Creates an employee; the backend assigns the id.
    pub async fn create(&self, employee: &Employee) -> ApiResult<Employee> {
        debug!(name = %employee.name, "creating employee");
        let dto: FuncionarioDto = self
            .http
            .post_json("/funcionarios", &FuncionarioPayload::from(employee))
            .await?;
        Ok(dto.into())
    }

    /// Replaces an employee with the full payload.
    pub async fn update(&self, id: i64, employee: &Employee) -> ApiResult<Employee> {
        debug!(id, "updating employee");
        let dto: FuncionarioDto = self
            .http
            .put_json(
                &format!("/funcionarios/{}", id),
                &FuncionarioPayload::from(employee),
            )
            .await?;
        Ok(dto.into())
    }

    /// Deletes an employee.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        debug!(id, "deleting employee");
        self.http.delete(&format!("/funcionarios/{}", id)).await
    }
}
