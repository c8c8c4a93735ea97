use crate::modules::records::application::errors::RecordError;
use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::time_entry::TimeEntry;

impl RecordService {
    /// Every entry logged by the employee, in insertion order.
    ///
    /// An empty result is reported as `NotFound`; the employee collection is not consulted.
    pub async fn list_time_entries_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<TimeEntry>, RecordError> {
        let entries: Vec<TimeEntry> = self
            .read(|dataset| {
                dataset
                    .time_entries
                    .iter()
                    .filter(|entry| entry.employee_id == employee_id)
                    .cloned()
                    .collect()
            })
            .await;

        if entries.is_empty() {
            return Err(RecordError::NotFound {
                employee_id: employee_id.to_string(),
            });
        }
        Ok(entries)
    }
}
