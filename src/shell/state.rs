use crate::modules::records::application::record_service::RecordService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<RecordService>,
}
