//! 共享服务
//!
//! API 网关、运行时配置与定时器在应用启动时构建一次，通过 Context 共享。

use crate::web::{FetchClient, GlooDelay, LocalStorage};
use leptos::prelude::*;
use localaudit::{ApiGateway, ClientConfig};

pub type Gateway = ApiGateway<FetchClient>;

#[derive(Clone)]
pub struct Services {
    pub gateway: Gateway,
    pub config: ClientConfig,
    pub delay: GlooDelay,
}

impl Services {
    /// 从 LocalStorage 读取可覆盖的配置项
    pub fn from_browser() -> Self {
        let config = ClientConfig::from_lookup(LocalStorage::lookup);
        let api_base = if config.api_base.is_empty() {
            "(same origin)"
        } else {
            config.api_base.as_str()
        };
        tracing::info!(
            api_base,
            mock_on_transport_failure = config.mock_on_transport_failure,
            "client configured"
        );
        Self {
            gateway: ApiGateway::new(FetchClient, config.api_base.clone()),
            config,
            delay: GlooDelay,
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}
