use crate::api::use_services;
use crate::auth::use_auth;
use crate::components::icons::Search;
use crate::components::shell::{AppHeader, ContactFooter, ErrorAlert};
use crate::web::router::use_pages;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::audit_form::{AuditForm, submit_audit};

/// 审计表单草稿
///
/// 提交后表单页会被加载页替换；服务端拒绝时需要回到表单并显示错误，
/// 因此输入与错误信息放在应用级 Context 中，而不是页面局部信号。
#[derive(Clone, Copy)]
pub struct AuditDraft {
    pub name: RwSignal<String>,
    pub location: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl AuditDraft {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> AuditForm {
        AuditForm {
            name: self.name.get_untracked(),
            location: self.location.get_untracked(),
        }
    }
}

pub fn provide_audit_draft() {
    provide_context(AuditDraft::new());
}

fn use_audit_draft() -> AuditDraft {
    use_context::<AuditDraft>().expect("AuditDraft should be provided")
}

#[component]
pub fn AuditFormPage() -> impl IntoView {
    let auth = use_auth();
    let services = use_services();
    let pages = use_pages();
    let draft = use_audit_draft();

    let back_label = Signal::derive(move || {
        if auth.state.with(|s| s.is_authenticated) {
            "Retour au tableau de bord".to_string()
        } else {
            "Retour à l'accueil".to_string()
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        draft.error.set(None);

        let form = draft.to_form();
        let services = services.clone();
        let session = auth.session();
        spawn_local(async move {
            let outcome = submit_audit(
                &services.gateway,
                &session,
                &services.delay,
                &services.config,
                &form,
                move |event| pages.dispatch(event),
            )
            .await;
            match outcome {
                Ok(()) => {
                    draft.name.set(String::new());
                    draft.location.set(String::new());
                }
                Err(e) => draft.error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-2xl mx-auto">
                <AppHeader back_label=back_label on_back=move |_| pages.dispatch(PageEvent::BackToHome) />

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body" on:submit=on_submit>
                        <h1 class="card-title text-2xl justify-center">"Lancer un audit"</h1>
                        <p class="text-center text-base-content/60 mb-4">
                            "Analysez la visibilité locale de votre entreprise en quelques secondes."
                        </p>

                        <ErrorAlert message=draft.error />

                        <div class="form-control">
                            <label class="label" for="company-name">
                                <span class="label-text">"Nom de l'entreprise"</span>
                            </label>
                            <input
                                id="company-name"
                                type="text"
                                placeholder="Ex : Boulangerie Dupont"
                                on:input=move |ev| draft.name.set(event_target_value(&ev))
                                prop:value=draft.name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="company-location">
                                <span class="label-text">"Ville ou adresse"</span>
                            </label>
                            <input
                                id="company-location"
                                type="text"
                                placeholder="Ex : Paris 11e"
                                on:input=move |ev| draft.location.set(event_target_value(&ev))
                                prop:value=draft.location
                                class="input input-bordered"
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary gap-2">
                                <Search attr:class="h-5 w-5" />
                                "Lancer l'audit"
                            </button>
                        </div>
                    </form>
                </div>

                <ContactFooter />
            </div>
        </div>
    }
}
