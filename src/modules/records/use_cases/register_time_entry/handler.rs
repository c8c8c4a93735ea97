use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::records::application::errors::RecordError;
use crate::modules::records::application::record_service::RecordService;
use crate::modules::records::core::time_entry::TimeEntry;
use crate::modules::records::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::records::use_cases::register_time_entry::decide::decide_register_time_entry;

impl RecordService {
    /// Logs minutes for an employee, stamped with the current time.
    ///
    /// The quota check and the append happen under the same write lock, so two concurrent
    /// registrations cannot both squeeze under the daily cap.
    pub async fn register_time_entry(
        &self,
        command: RegisterTimeEntry,
    ) -> Result<TimeEntry, RecordError> {
        let time_entry_id = Uuid::now_v7().to_string();
        let now = self.now();
        let result = self
            .write(move |dataset| {
                let entry = decide_register_time_entry(dataset, time_entry_id, now, command)?;
                dataset.time_entries.push(entry.clone());
                Ok(entry)
            })
            .await;

        match &result {
            Ok(entry) => info!(
                time_entry_id = %entry.id,
                employee_id = %entry.employee_id,
                minutes = entry.minutes,
                "time entry registered"
            ),
            Err(error) => warn!(%error, "time entry rejected"),
        }
        result
    }
}
