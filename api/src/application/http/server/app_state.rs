use std::sync::Arc;

use ayurdiet_core::application::AyurdietService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AyurdietService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AyurdietService) -> Self {
        Self { args, service }
    }
}
