//! 页面服务模块 - 核心引擎
//!
//! 持有页面状态机，所有页面切换都经由 `dispatch`。
//! 不读写 URL：刷新页面会回到首页。

use leptos::prelude::*;
use localaudit::{Overlay, Page, PageEvent, PageMachine};

/// 页面服务
///
/// 通过 Signal 驱动界面更新，认证状态由外部注入。
#[derive(Clone, Copy)]
pub struct PageService {
    machine: RwSignal<PageMachine>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl PageService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        Self {
            machine: RwSignal::new(PageMachine::new()),
            is_authenticated,
        }
    }

    /// 当前页面；叠加层变化不会触发页面重新渲染
    pub fn page(&self) -> Memo<Page> {
        let machine = self.machine;
        Memo::new(move |_| machine.with(|m| m.page().clone()))
    }

    pub fn overlay(&self) -> Memo<Option<Overlay>> {
        let machine = self.machine;
        Memo::new(move |_| machine.with(PageMachine::overlay))
    }

    /// **核心方法：派发事件**
    ///
    /// 守卫使用派发时刻的认证状态。
    pub fn dispatch(&self, event: PageEvent) {
        let authenticated = self.is_authenticated.get_untracked();
        self.machine
            .maybe_update(|machine| machine.apply(event, authenticated));
    }

    /// 直接修改状态机，用于注销等需要同时处理会话的操作
    pub fn update(&self, f: impl FnOnce(&mut PageMachine)) {
        self.machine.update(f);
    }

    /// 认证状态变化时，把受保护页面重定向到登录页
    fn setup_auth_redirect(&self) {
        let machine = self.machine;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let authenticated = is_authenticated.get();
            machine.maybe_update(|m| m.enforce_guard(authenticated));
        });
    }
}

/// 提供页面服务到 Context 并初始化
fn provide_pages(is_authenticated: Signal<bool>) -> PageService {
    let pages = PageService::new(is_authenticated);
    pages.setup_auth_redirect();
    provide_context(pages);
    pages
}

/// 从 Context 获取页面服务
pub fn use_pages() -> PageService {
    use_context::<PageService>()
        .expect("PageService not found in context. Ensure PageRouter is provided.")
}

/// 返回一个派发事件的闭包，便于传给按钮
pub fn use_dispatch() -> impl Fn(PageEvent) + Clone + Copy {
    let pages = use_pages();
    move |event| pages.dispatch(event)
}

// ============================================================================
// UI 组件
// ============================================================================

/// 页面服务根组件，应在 App 根部使用
#[component]
pub fn PageRouter(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_pages(is_authenticated);

    children()
}

/// 页面出口组件
///
/// 根据当前页面渲染对应的组件，叠加层渲染在页面之上。
#[component]
pub fn PageOutlet(
    /// 页面匹配函数：接收当前页面，返回对应视图
    matcher: fn(Page) -> AnyView,
    /// 叠加层匹配函数
    overlay: fn(Overlay) -> AnyView,
) -> impl IntoView {
    let pages = use_pages();
    let page = pages.page();
    let current_overlay = pages.overlay();

    view! {
        {move || matcher(page.get())}
        {move || current_overlay.get().map(overlay)}
    }
}
