//! 本地曝光度审计前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `localaudit::page` / `localaudit::machine`: 页面定义与状态机（领域模型）
//! - `web::router`: 页面服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 共享服务（网关、配置、定时器）
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod account_confirmation;
    pub mod audit_details;
    pub mod audit_form;
    pub mod audit_results;
    pub mod dashboard;
    mod export_options;
    mod icons;
    pub mod landing;
    pub mod loading_screen;
    pub mod login;
    pub mod logout_confirmation;
    pub mod profile_settings;
    pub mod register;
    pub mod reports_list;
    mod score_display;
    mod shell;
}

use crate::api::Services;
use crate::auth::init_auth;
use crate::components::account_confirmation::AccountConfirmationPage;
use crate::components::audit_details::AuditDetailsPage;
use crate::components::audit_form::{AuditFormPage, provide_audit_draft};
use crate::components::audit_results::AuditResultsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::loading_screen::LoadingScreen;
use crate::components::login::LoginPage;
use crate::components::logout_confirmation::LogoutConfirmation;
use crate::components::profile_settings::ProfileSettingsPage;
use crate::components::register::RegisterPage;
use crate::components::reports_list::ReportsPage;

use leptos::prelude::*;
use localaudit::{Overlay, Page};

// 浏览器原生 API 适配层
// 核心 crate 定义的抽象（HttpClient / SessionStore / Delay）在这里落地。
pub(crate) mod web {
    pub mod console;
    pub mod download;
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
    pub use timer::GlooDelay;
}

pub use web::console::init_tracing;
use web::router::{PageOutlet, PageRouter};

/// 页面匹配函数
///
/// 根据 Page 枚举返回对应的视图组件。
fn page_matcher(page: Page) -> AnyView {
    match page {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::Login { prefill_email } => view! { <LoginPage prefill_email=prefill_email /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::AccountConfirmation { email } => {
            view! { <AccountConfirmationPage email=email /> }.into_any()
        }
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Form => view! { <AuditFormPage /> }.into_any(),
        Page::Loading { company } => view! { <LoadingScreen company=company /> }.into_any(),
        Page::Results { result, company } => {
            view! { <AuditResultsPage result=result company=company /> }.into_any()
        }
        Page::ProfileSettings { saved } => view! { <ProfileSettingsPage saved=saved /> }.into_any(),
        Page::Reports => view! { <ReportsPage /> }.into_any(),
        Page::AuditDetails { audit } => view! { <AuditDetailsPage audit=audit /> }.into_any(),
    }
}

fn overlay_matcher(overlay: Overlay) -> AnyView {
    match overlay {
        Overlay::LogoutConfirmation => view! { <LogoutConfirmation /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文并加载上次的会话
    let auth_ctx = init_auth();
    provide_context(auth_ctx);

    // 2. 共享服务与审计草稿
    provide_context(Services::from_browser());
    provide_audit_draft();

    // 3. 获取认证状态信号，用于注入页面服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 页面服务根组件：注入认证信号实现守卫
        <PageRouter is_authenticated=is_authenticated>
            <PageOutlet matcher=page_matcher overlay=overlay_matcher />
        </PageRouter>
    }
}
