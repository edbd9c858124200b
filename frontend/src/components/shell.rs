//! 页面外壳：顶部导航与行内提示

use crate::auth::use_auth;
use crate::components::icons::{ChevronLeft, LogOut};
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use localaudit::PageEvent;

/// 表单行内错误提示
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                    <span>{msg}</span>
                </div>
            }
        })
    }
}

/// 表单行内成功提示
#[component]
pub fn SuccessAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div role="status" class="alert alert-success text-sm py-2">
                    <span>{msg}</span>
                </div>
            }
        })
    }
}

/// 顶部导航：返回按钮，已登录时显示用户与注销
#[component]
pub fn AppHeader(
    #[prop(into)] back_label: Signal<String>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let dispatch = use_dispatch();
    let user = auth.user();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow mb-8">
            <div class="flex-1">
                <button class="btn btn-ghost gap-2" on:click=move |_| on_back.run(())>
                    <ChevronLeft attr:class="h-5 w-5" />
                    {move || back_label.get()}
                </button>
            </div>
            {move || {
                user.get().map(|u| {
                    let initial = u.initial().to_string();
                    let name = u.display_name().to_string();
                    view! {
                        <div class="flex-none gap-4">
                            <div class="flex items-center gap-2">
                                <div class="avatar placeholder">
                                    <div class="bg-primary text-primary-content rounded-full w-8">
                                        <span class="text-sm font-medium">{initial}</span>
                                    </div>
                                </div>
                                <span class="font-medium">{name}</span>
                            </div>
                            <button
                                class="btn btn-ghost btn-sm gap-1 hover:text-error"
                                on:click=move |_| dispatch(PageEvent::RequestLogout)
                            >
                                <LogOut attr:class="h-4 w-4" />
                                "Déconnexion"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// 页脚联系方式
#[component]
pub fn ContactFooter() -> impl IntoView {
    view! {
        <div class="mt-10 text-center">
            <p class="text-base-content/70 mb-1">"Contactez-nous"</p>
            <p class="text-base-content/50">"contact@agentlocalai.com"</p>
        </div>
    }
}
