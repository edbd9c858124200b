mod form_state;

use crate::api::use_services;
use crate::auth::use_auth;
use crate::components::icons::CheckCircle;
use crate::components::shell::{AppHeader, ErrorAlert, SuccessAlert};
use crate::web::router::use_dispatch;
use form_state::ProfileFormState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::profile::{MSG_SAVED, update_profile};

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
        </div>
    }
}

#[component]
pub fn ProfileSettingsPage(
    /// 保存成功后显示确认视图
    saved: bool,
) -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto">
                <AppHeader
                    back_label="Retour au tableau de bord".to_string()
                    on_back=move |_| dispatch(PageEvent::BackToDashboard)
                />
                {if saved {
                    view! { <ProfileSavedView /> }.into_any()
                } else {
                    view! { <ProfileEditor /> }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProfileSavedView() -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body items-center text-center">
                <CheckCircle attr:class="h-12 w-12 text-success" />
                <h2 class="card-title">{MSG_SAVED}</h2>
                <p class="text-base-content/70">"Vos informations ont été enregistrées."</p>
                <div class="card-actions mt-4">
                    <button class="btn btn-primary" on:click=move |_| dispatch(PageEvent::AcknowledgeProfileSaved)>
                        "Retour au tableau de bord"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileEditor() -> impl IntoView {
    let auth = use_auth();
    let services = use_services();
    let dispatch = use_dispatch();

    let form = ProfileFormState::new(auth.session().user().as_ref());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(Option::<String>::None);
    let success_msg = RwSignal::new(Option::<String>::None);
    let confirmation_delay = services.config.profile_confirmation_delay;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error_msg.set(None);
        success_msg.set(None);
        is_submitting.set(true);

        let request = form.to_form();
        let gateway = services.gateway.clone();
        let session = auth.session();
        spawn_local(async move {
            let outcome = update_profile(&gateway, &session, &request).await;
            is_submitting.set(false);
            match outcome {
                Ok(_) => {
                    form.clear_passwords();
                    auth.refresh();
                    success_msg.set(Some(MSG_SAVED.to_string()));
                    set_timeout(move || dispatch(PageEvent::ProfileSaved), confirmation_delay);
                }
                Err(e) => error_msg.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h1 class="card-title text-2xl">"Paramètres du profil"</h1>

                <ErrorAlert message=error_msg />
                <SuccessAlert message=success_msg />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <TextField id="prenom" label="Prénom" value=form.prenom />
                    <TextField id="nom" label="Nom" value=form.nom />
                </div>
                <TextField id="email" label="Email" input_type="email" value=form.email />

                <div class="divider">"Sécurité"</div>

                <TextField
                    id="current_password"
                    label="Mot de passe actuel"
                    input_type="password"
                    placeholder="Requis pour enregistrer"
                    value=form.current_password
                />
                <TextField
                    id="new_password"
                    label="Nouveau mot de passe"
                    input_type="password"
                    placeholder="Laisser vide pour ne pas changer"
                    value=form.new_password
                />
                <TextField
                    id="confirm_password"
                    label="Confirmer le nouveau mot de passe"
                    input_type="password"
                    value=form.confirm_password
                />

                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Enregistrement..." }.into_any()
                        } else {
                            "Enregistrer".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
