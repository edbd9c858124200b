use crate::api::use_services;
use crate::auth::use_auth;
use crate::components::dashboard::{ListingPager, ListingSearch};
use crate::components::icons::FileText;
use crate::components::shell::{AppHeader, ErrorAlert};
use crate::web::download;
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::dashboard::AuditListing;
use localaudit::flows::export::{MSG_DOWNLOADING, export_pdf};
use localaudit::flows::reports::load_reports;

/// 已生成的 PDF 报告列表
#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = use_auth();
    let services = StoredValue::new(use_services());
    let dispatch = use_dispatch();

    let (per_page, notice_duration) =
        services.with_value(|s| (s.config.audits_per_page, s.config.export_notice));
    let listing = RwSignal::new(AuditListing::new(Vec::new(), per_page));
    let (loading, set_loading) = signal(true);
    let error_msg = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    {
        let gateway = services.with_value(|s| s.gateway.clone());
        let session = auth.session();
        spawn_local(async move {
            match load_reports(&gateway, &session, per_page).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    }

    let on_download = move |pdf_url: String| {
        error_msg.set(None);
        notice.set(Some(MSG_DOWNLOADING.to_string()));
        set_timeout(move || notice.set(None), notice_duration);

        let gateway = services.with_value(|s| s.gateway.clone());
        spawn_local(async move {
            let saved = match export_pdf(&gateway, &pdf_url).await {
                Ok(export) => download::save(&export).map_err(|e| format!("{e:?}")),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = saved {
                tracing::error!(error = %e, "report download failed");
                error_msg.set(Some(format!("Erreur lors du téléchargement : {e}")));
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto">
                <AppHeader
                    back_label="Retour au tableau de bord".to_string()
                    on_back=move |_| dispatch(PageEvent::BackToDashboard)
                />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                            <h1 class="card-title text-2xl">"Mes rapports"</h1>
                            <ListingSearch listing=listing />
                        </div>

                        <ErrorAlert message=error_msg />
                        {move || notice.get().map(|msg| view! {
                            <div role="status" class="alert alert-info text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        {move || {
                            if loading.get() {
                                return view! {
                                    <div class="flex justify-center p-10">
                                        <span class="loading loading-spinner loading-lg text-primary"></span>
                                    </div>
                                }
                                .into_any();
                            }
                            if listing.with(AuditListing::is_empty) {
                                return view! {
                                    <p class="text-center p-10 text-base-content/60">
                                        "Aucun rapport disponible"
                                    </p>
                                }
                                .into_any();
                            }
                            view! {
                                <ul class="divide-y divide-base-200">
                                    {move || listing
                                        .with(AuditListing::current_rows)
                                        .into_iter()
                                        .map(|audit| {
                                            let pdf_url = audit.pdf_url().unwrap_or_default().to_string();
                                            view! {
                                                <li class="flex items-center justify-between py-3">
                                                    <div>
                                                        <p class="font-medium">{audit.display_name().to_string()}</p>
                                                        <p class="text-sm text-base-content/60">
                                                            {audit.display_location().to_string()} " · " {audit.display_date()}
                                                        </p>
                                                    </div>
                                                    <button
                                                        class="btn btn-sm btn-outline gap-2"
                                                        on:click=move |_| on_download(pdf_url.clone())
                                                    >
                                                        <FileText attr:class="h-4 w-4" />
                                                        "Télécharger"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <ListingPager listing=listing />
                            }
                            .into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
