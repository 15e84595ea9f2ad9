use std::sync::Arc;

use label_slayer_core::application::LabelSlayerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LabelSlayerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LabelSlayerService) -> Self {
        Self { args, service }
    }
}
