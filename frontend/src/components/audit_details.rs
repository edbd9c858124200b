use crate::components::audit_results::AuditSections;
use crate::components::export_options::ExportOptions;
use crate::components::shell::AppHeader;
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use localaudit::{AuditView, PageEvent};
use localaudit_shared::AuditRecord;

/// 历史审计详情
#[component]
pub fn AuditDetailsPage(audit: AuditRecord) -> impl IntoView {
    let dispatch = use_dispatch();
    let view_model = AuditView::from_payload(audit.raw());
    let pdf_url = audit.pdf_url().map(str::to_string);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto">
                <AppHeader
                    back_label="Retour au tableau de bord".to_string()
                    on_back=move |_| dispatch(PageEvent::BackToDashboard)
                />

                <div class="mb-6">
                    <h1 class="text-3xl font-bold">{audit.display_name().to_string()}</h1>
                    <p class="text-base-content/60">
                        {audit.display_location().to_string()} " · " {audit.display_date()}
                    </p>
                    {audit.id().map(|id| view! {
                        <span class="badge badge-ghost mt-2">{format!("Audit n° {id}")}</span>
                    })}
                </div>

                <AuditSections view_model=view_model />

                <ExportOptions pdf_url=pdf_url />
            </div>
        </div>
    }
}
