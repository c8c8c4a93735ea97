use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::employee::Employee;

impl RecordService {
    pub async fn list_employees(&self) -> Vec<Employee> {
        self.read(|dataset| dataset.employees.clone()).await
    }
}
