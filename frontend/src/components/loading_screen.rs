use leptos::prelude::*;
use localaudit::CompanyInfo;

#[component]
pub fn LoadingScreen(company: CompanyInfo) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center flex-col gap-6">
                <span class="loading loading-ring loading-lg text-primary"></span>
                <h1 class="text-2xl font-bold">"Analyse en cours..."</h1>
                <p class="text-base-content/70">
                    "Résultats pour : " <span class="font-semibold">{company.name}</span> ", " {company.location}
                </p>
                <progress class="progress progress-primary w-64"></progress>
            </div>
        </div>
    }
}
