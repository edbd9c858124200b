//! 认证模块
//!
//! 持有会话对象并把认证状态暴露为信号。
//! 页面服务通过注入的认证信号来执行守卫。

use crate::web::LocalStorage;
use leptos::prelude::*;
use localaudit::Session;
use localaudit_shared::UserProfile;
use std::sync::Arc;

/// 认证状态
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    /// 是否已认证（令牌非空）
    pub is_authenticated: bool,
    /// 缓存的用户资料
    pub user: Option<UserProfile>,
}

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Session>,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: StoredValue::new(session),
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    /// 从会话存储重新读取认证状态
    pub fn refresh(&self) {
        let session = self.session();
        self.state.set(AuthState {
            is_authenticated: session.is_authenticated(),
            user: session.user(),
        });
    }

    /// 获取认证状态信号（用于页面服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    pub fn user(&self) -> Signal<Option<UserProfile>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.clone()))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 基于 LocalStorage 创建认证上下文，并加载上次的会话
pub fn init_auth() -> AuthContext {
    let ctx = AuthContext::new(Session::new(Arc::new(LocalStorage)));
    ctx.refresh();
    ctx
}
