use crate::api::use_services;
use crate::components::icons::FileText;
use crate::components::shell::ErrorAlert;
use crate::web::download;
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::export::{MSG_DOWNLOADING, MSG_NO_REPORT, export_pdf};

/// 导出区：下载 PDF，可选的新审计按钮
#[component]
pub fn ExportOptions(
    pdf_url: Option<String>,
    #[prop(optional)] show_new_audit: bool,
) -> impl IntoView {
    let services = use_services();
    let dispatch = use_dispatch();

    let notice = RwSignal::new(Option::<String>::None);
    let error_msg = RwSignal::new(Option::<String>::None);
    let has_report = pdf_url.is_some();
    let pdf_url = StoredValue::new(pdf_url);
    let notice_duration = services.config.export_notice;

    let on_download = move |_| {
        let Some(url) = pdf_url.get_value() else {
            error_msg.set(Some(MSG_NO_REPORT.to_string()));
            return;
        };
        error_msg.set(None);
        notice.set(Some(MSG_DOWNLOADING.to_string()));
        set_timeout(move || notice.set(None), notice_duration);

        let gateway = services.gateway.clone();
        spawn_local(async move {
            let saved = match export_pdf(&gateway, &url).await {
                Ok(export) => download::save(&export).map_err(|e| format!("{e:?}")),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = saved {
                tracing::error!(error = %e, "pdf download failed");
                notice.set(None);
                error_msg.set(Some(format!("Erreur lors du téléchargement : {e}")));
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h3 class="card-title">"Exporter"</h3>
                <ErrorAlert message=error_msg />
                {move || notice.get().map(|msg| view! {
                    <div role="status" class="alert alert-info text-sm py-2">
                        <span class="loading loading-dots loading-sm"></span>
                        <span>{msg}</span>
                    </div>
                })}
                <Show when=move || !has_report>
                    <p class="text-base-content/50 italic">{MSG_NO_REPORT}</p>
                </Show>
                <div class="card-actions justify-end">
                    <button class="btn btn-outline gap-2" disabled=!has_report on:click=on_download>
                        <FileText attr:class="h-4 w-4" />
                        "Télécharger le rapport PDF"
                    </button>
                    <Show when=move || show_new_audit>
                        <button class="btn btn-primary" on:click=move |_| dispatch(PageEvent::NewAudit)>
                            "Nouvel audit"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
