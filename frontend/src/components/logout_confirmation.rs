use crate::auth::use_auth;
use crate::web::router::{use_dispatch, use_pages};
use leptos::prelude::*;
use localaudit::PageEvent;
use localaudit::flows::confirm_logout;

/// 注销确认对话框，叠加在当前页面之上
#[component]
pub fn LogoutConfirmation() -> impl IntoView {
    let auth = use_auth();
    let pages = use_pages();
    let dispatch = use_dispatch();

    let on_confirm = move |_| {
        let session = auth.session();
        pages.update(|machine| confirm_logout(&session, machine));
        auth.refresh();
    };

    view! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box text-center">
                <h3 class="text-2xl font-bold text-primary mb-2">"Agent Local AI"</h3>
                <p class="py-4">"Êtes-vous sûr de vouloir vous déconnecter ?"</p>
                <div class="modal-action justify-center">
                    <button class="btn btn-primary" on:click=on_confirm>
                        "Confirmer la déconnexion"
                    </button>
                    <button class="btn" on:click=move |_| dispatch(PageEvent::CancelLogout)>
                        "Annuler"
                    </button>
                </div>
            </div>
        </div>
    }
}
