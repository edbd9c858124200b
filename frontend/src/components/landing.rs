use crate::components::icons::{MapPin, Search};
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use localaudit::PageEvent;

const FEATURES: &[(&str, &str)] = &[
    ("Analyse Géolocalisée", "Données locales en temps réel"),
    ("Plan d'action", "Recommandations à court, moyen et long terme"),
    ("Rapport PDF", "Un rapport complet à partager"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-4 md:px-8">
                <div class="flex-1 gap-2">
                    <MapPin attr:class="h-8 w-8 text-primary" />
                    <span class="text-2xl font-bold">"Agent Local AI"</span>
                </div>
                <div class="flex-none gap-3">
                    <button class="btn btn-outline btn-sm" on:click=move |_| dispatch(PageEvent::ShowLogin)>
                        "Se connecter"
                    </button>
                    <button class="btn btn-primary btn-sm" on:click=move |_| dispatch(PageEvent::ShowRegister)>
                        "Créer un compte"
                    </button>
                </div>
            </header>

            <main class="hero py-16">
                <div class="hero-content flex-col max-w-5xl gap-12">
                    <div class="text-center space-y-6">
                        <h1 class="text-5xl font-bold leading-tight">
                            "Visibilité locale " <span class="text-primary">"optimisée"</span>
                            <br />
                            "IA simple"
                            <br />
                            "Résultats " <span class="text-primary">"rapides"</span>
                        </h1>
                        <p class="text-xl text-base-content/70">
                            "Analyse intelligente de votre fiche Google Business"
                        </p>
                        <p class="text-xl text-base-content/70">
                            "Un plan d'action clair pour attirer plus de clients"
                        </p>
                        <button class="btn btn-primary btn-lg gap-2" on:click=move |_| dispatch(PageEvent::StartAudit)>
                            <Search attr:class="h-5 w-5" />
                            "DÉMARRER L'AUDIT"
                        </button>
                    </div>

                    <div class="grid md:grid-cols-3 gap-6 w-full">
                        {FEATURES
                            .iter()
                            .map(|(title, text)| {
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <h3 class="card-title">{*title}</h3>
                                            <p class="text-base-content/70">{*text}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>

            <footer class="footer footer-center p-6 text-base-content/60">
                <p>"© 2025 Agent Local AI"</p>
            </footer>
        </div>
    }
}
