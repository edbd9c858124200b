use crate::components::icons::CheckCircle;
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use localaudit::PageEvent;

#[component]
pub fn AccountConfirmationPage(email: String) -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <div class="card-body items-center text-center">
                    <CheckCircle attr:class="h-12 w-12 text-success" />
                    <h1 class="card-title text-2xl text-primary">
                        "Votre compte a été créé avec succès !"
                    </h1>
                    <p class="text-base-content/70">
                        "Bienvenue dans votre espace d'audit local ! Vous pouvez maintenant vous connecter pour lancer votre premier audit."
                    </p>
                    <p class="font-mono text-sm">{email}</p>
                    <div class="card-actions mt-4">
                        <button class="btn btn-primary" on:click=move |_| dispatch(PageEvent::ProceedToLogin)>
                            "Se connecter"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
