use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::records::application::errors::RecordError;
use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::employee::Employee;
use crate::modules::records::use_cases::create_employee::command::CreateEmployee;
use crate::modules::records::use_cases::create_employee::decide::decide_create_employee;

impl RecordService {
    pub async fn create_employee(&self, command: CreateEmployee) -> Result<Employee, RecordError> {
        let employee_id = Uuid::now_v7().to_string();
        let result = self
            .write(move |dataset| {
                let employee = decide_create_employee(employee_id, command);
                dataset.employees.push(employee.clone());
                Ok(employee)
            })
            .await;

        match &result {
            Ok(employee) => info!(employee_id = %employee.id, "employee created"),
            Err(error) => warn!(%error, "employee not stored"),
        }
        result
    }
}
