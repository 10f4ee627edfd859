use std::sync::Arc;

use crate::data_access::data_context::DataContext;

/// Everything a request handler can reach. The store facade is the only
/// member; handlers never open the database themselves.
pub struct AppState {
    pub data_context: DataContext,
}

pub type SharedState = Arc<AppState>;
