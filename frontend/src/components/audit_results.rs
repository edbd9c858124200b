use crate::components::export_options::ExportOptions;
use crate::components::score_display::{BusinessCard, ScoreDisplay};
use crate::components::shell::{AppHeader, ContactFooter};
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use localaudit::normalize::Priority;
use localaudit::{AuditView, CompanyInfo, NormalizedItem, PageEvent, Recommendations};
use serde_json::Value;

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-error badge-sm",
        Priority::Medium => "badge badge-warning badge-sm",
        Priority::Low => "badge badge-info badge-sm",
    }
}

/// 条目列表；为空时显示 `empty_text`
#[component]
pub fn ItemList(
    items: Vec<NormalizedItem>,
    empty_text: &'static str,
    #[prop(optional)] marker_class: &'static str,
) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="text-base-content/50 italic">{empty_text}</p> }.into_any();
    }

    view! {
        <ul class="space-y-3">
            {items
                .into_iter()
                .map(|item| {
                    let description = (!item.description.is_empty()).then(|| view! {
                        <p class="text-sm text-base-content/70">{item.description}</p>
                    });
                    view! {
                        <li class="flex gap-3">
                            <span class=format!("mt-1 h-2 w-2 rounded-full shrink-0 {marker_class}")></span>
                            <div class="space-y-1">
                                <div class="flex items-center gap-2">
                                    <span class="font-medium">{item.titre}</span>
                                    {item.priority.map(|p| view! {
                                        <span class=priority_badge(p)>{p.label()}</span>
                                    })}
                                </div>
                                {description}
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn RecommendationPlan(recommendations: Recommendations) -> impl IntoView {
    if !recommendations.has_phases() {
        return view! {
            <ItemList items=recommendations.flat empty_text="Aucune recommandation" marker_class="bg-primary" />
        }
        .into_any();
    }

    let phases = [
        ("Court terme", recommendations.short_term),
        ("Moyen terme", recommendations.mid_term),
        ("Long terme", recommendations.long_term),
    ];

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {phases
                .into_iter()
                .map(|(title, items)| view! {
                    <div class="bg-base-200 rounded-box p-4">
                        <h4 class="font-semibold mb-3">{title}</h4>
                        <ItemList items=items empty_text="Aucune recommandation" marker_class="bg-primary" />
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// 分数、企业信息、优劣势与建议
///
/// 结果页与历史详情页共用。
#[component]
pub fn AuditSections(view_model: AuditView) -> impl IntoView {
    let label = view_model.score_label();
    let AuditView {
        score,
        business,
        strengths,
        weaknesses,
        recommendations,
        synthetic,
        ..
    } = view_model;

    view! {
        <div class="space-y-6">
            <Show when=move || synthetic>
                <div role="status" class="alert alert-warning">
                    <span class="badge badge-warning badge-outline">"Données de démonstration"</span>
                    <span>"Le service d'audit est injoignable, ces résultats sont fictifs."</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body items-center">
                    <h2 class="card-title">"Score de visibilité locale"</h2>
                    <ScoreDisplay score=score label=label />
                </div>
            </div>

            <BusinessCard business=business />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-success">"Points forts"</h3>
                        <ItemList items=strengths empty_text="Aucune force détectée" marker_class="bg-success" />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-error">"Points faibles"</h3>
                        <ItemList items=weaknesses empty_text="Aucun point faible détecté" marker_class="bg-error" />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"Recommandations"</h3>
                    <RecommendationPlan recommendations=recommendations />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AuditResultsPage(result: Value, company: CompanyInfo) -> impl IntoView {
    let dispatch = use_dispatch();
    let view_model = AuditView::from_payload(&result);
    let pdf_url = view_model.pdf_url.clone();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto">
                <AppHeader
                    back_label="Retour".to_string()
                    on_back=move |_| dispatch(PageEvent::BackToHome)
                />

                <div class="mb-6">
                    <h1 class="text-3xl font-bold">"Résultats de l'audit"</h1>
                    <p class="text-base-content/60">{company.name} " · " {company.location}</p>
                </div>

                <AuditSections view_model=view_model />

                <ExportOptions pdf_url=pdf_url show_new_audit=true />

                <ContactFooter />
            </div>
        </div>
    }
}
