use crate::api::use_services;
use crate::auth::use_auth;
use crate::components::icons::MapPin;
use crate::components::shell::ErrorAlert;
use crate::web::router::use_dispatch;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::login::{LoginForm, login};

#[component]
pub fn LoginPage(
    /// 注册完成后预填的邮箱
    prefill_email: Option<String>,
) -> impl IntoView {
    let auth = use_auth();
    let services = use_services();
    let dispatch = use_dispatch();

    let email = RwSignal::new(prefill_email.unwrap_or_default());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error_msg.set(None);
        is_submitting.set(true);

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let gateway = services.gateway.clone();
        let session = auth.session();
        spawn_local(async move {
            let outcome = login(&gateway, &session, &form).await;
            is_submitting.set(false);
            match outcome {
                Ok(_) => {
                    auth.refresh();
                    dispatch(PageEvent::LoggedIn);
                }
                Err(e) => error_msg.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <MapPin attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Connexion"</h1>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Entrez votre email"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Mot de passe"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Connexion..." }.into_any()
                                } else {
                                    "Se connecter".into_any()
                                }}
                            </button>
                        </div>

                        <div class="text-center text-sm mt-2 space-y-2">
                            <p>
                                "Pas encore de compte ? "
                                <a class="link link-primary" on:click=move |_| dispatch(PageEvent::ShowRegister)>
                                    "Créer un compte"
                                </a>
                            </p>
                            <a class="link link-hover text-base-content/60" on:click=move |_| dispatch(PageEvent::BackToLanding)>
                                "Retour à l'accueil"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
