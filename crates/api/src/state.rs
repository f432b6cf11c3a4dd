use nsgate_application::use_cases::CheckHostUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_host: Arc<CheckHostUseCase>,
}
