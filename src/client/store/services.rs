use std::rc::Rc;

use crate::client::{
    api::{ApiClient, PlatformTransport},
    config::Config,
    session::Session,
};

/// API client and session shared with every component through the context
#[derive(Clone)]
pub struct Services {
    pub api: Rc<ApiClient<PlatformTransport>>,
    pub session: Session,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        Self {
            api: Rc::new(ApiClient::new(config, PlatformTransport::default())),
            session: Session::durable(),
        }
    }
}
