use std::sync::Arc;

use api::manifest::Manifest;

use crate::config::Config;
use crate::upstream::Upstream;

pub mod addon;
pub mod home;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub upstream: Upstream,
    pub manifest: Arc<Manifest>,
}
