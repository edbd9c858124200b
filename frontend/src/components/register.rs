use crate::api::use_services;
use crate::components::shell::ErrorAlert;
use crate::web::router::use_dispatch;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::register::{RegisterForm, register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = use_services();
    let dispatch = use_dispatch();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(Option::<String>::None);

    // 任一字段变化都清除错误
    let edit = move |field: RwSignal<String>, value: String| {
        field.set(value);
        error_msg.set(None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        is_submitting.set(true);
        error_msg.set(None);

        let gateway = services.gateway.clone();
        spawn_local(async move {
            let outcome = register(&gateway, &form).await;
            is_submitting.set(false);
            match outcome {
                Ok(email) => dispatch(PageEvent::Registered { email }),
                Err(e) => error_msg.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold text-center mb-4">"Inscription"</h1>

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
                                autocomplete="email"
                                placeholder="Entrez votre email"
                                on:input=move |ev| edit(email, event_target_value(&ev))
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
                                placeholder="Au moins 6 caractères"
                                on:input=move |ev| edit(password, event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm_password">
                                <span class="label-text">"Confirmer le mot de passe"</span>
                            </label>
                            <input
                                id="confirm_password"
                                type="password"
                                placeholder="Confirmez votre mot de passe"
                                on:input=move |ev| edit(confirm_password, event_target_value(&ev))
                                prop:value=confirm_password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Inscription..." }.into_any()
                                } else {
                                    "Créer mon compte".into_any()
                                }}
                            </button>
                        </div>

                        <div class="text-center text-sm mt-2 space-y-2">
                            <p>
                                "Déjà un compte ? "
                                <a class="link link-primary" on:click=move |_| dispatch(PageEvent::ShowLogin)>
                                    "Se connecter"
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
