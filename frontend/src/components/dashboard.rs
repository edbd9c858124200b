use crate::api::use_services;
use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::router::use_dispatch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use localaudit::PageEvent;
use localaudit::flows::dashboard::{AuditListing, fetch_audits};

/// 搜索框，输入即过滤
#[component]
pub fn ListingSearch(listing: RwSignal<AuditListing>) -> impl IntoView {
    view! {
        <label class="input input-bordered flex items-center gap-2 w-full md:w-80">
            <Search attr:class="h-4 w-4 opacity-60" />
            <input
                type="text"
                class="grow"
                placeholder="Rechercher une entreprise..."
                prop:value=move || listing.with(|l| l.query().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    listing.update(|l| l.set_query(&query));
                }
            />
        </label>
    }
}

/// 上一页 / 下一页
#[component]
pub fn ListingPager(listing: RwSignal<AuditListing>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-4 mt-4">
            <button
                class="btn btn-sm"
                disabled=move || !listing.with(AuditListing::has_prev)
                on:click=move |_| listing.update(AuditListing::prev)
            >
                "Précédent"
            </button>
            <span class="text-sm">
                "Page " {move || listing.with(AuditListing::page)} " / "
                {move || listing.with(AuditListing::total_pages)}
            </span>
            <button
                class="btn btn-sm"
                disabled=move || !listing.with(AuditListing::has_next)
                on:click=move |_| listing.update(AuditListing::next)
            >
                "Suivant"
            </button>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let services = StoredValue::new(use_services());
    let dispatch = use_dispatch();
    let user = auth.user();

    let per_page = services.with_value(|s| s.config.audits_per_page);
    let listing = RwSignal::new(AuditListing::new(Vec::new(), per_page));
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_audits = move || {
        let services = services.get_value();
        let session = auth.session();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match fetch_audits(&services.gateway, &session, &services.delay, &services.config).await
            {
                Ok(audits) => {
                    tracing::debug!(count = audits.len(), "audits loaded");
                    listing.update(|l| l.set_audits(audits));
                }
                Err(e) => set_error_msg.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load_audits();

    let greeting = move || {
        user.get()
            .map(|u| format!("Bonjour, {}", u.display_name()))
            .unwrap_or_else(|| "Bonjour".to_string())
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <MapPin attr:class="text-primary h-6 w-6" />
                        <span class="text-xl font-bold px-2">"Tableau de bord"</span>
                    </div>
                    <div class="flex-none gap-2">
                        <button class="btn btn-ghost gap-2" on:click=move |_| dispatch(PageEvent::ViewReports)>
                            <FileText attr:class="h-4 w-4" />
                            <span class="hidden md:inline">"Mes rapports"</span>
                        </button>
                        <button class="btn btn-ghost gap-2" on:click=move |_| dispatch(PageEvent::ViewSettings)>
                            <Settings attr:class="h-4 w-4" />
                            <span class="hidden md:inline">"Paramètres"</span>
                        </button>
                        <button class="btn btn-outline btn-error gap-2" on:click=move |_| dispatch(PageEvent::RequestLogout)>
                            <LogOut attr:class="h-4 w-4" />
                            <span class="hidden md:inline">"Déconnexion"</span>
                        </button>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold">{greeting}</h1>
                        <p class="text-base-content/60">"Retrouvez l'historique de vos audits."</p>
                    </div>
                    <button class="btn btn-primary gap-2" on:click=move |_| dispatch(PageEvent::NewAudit)>
                        <Search attr:class="h-4 w-4" />
                        "Nouvel audit"
                    </button>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                            <h2 class="card-title">"Historique des audits"</h2>
                            <ListingSearch listing=listing />
                        </div>

                        {move || {
                            if loading.get() {
                                return view! {
                                    <div class="flex justify-center p-10">
                                        <span class="loading loading-spinner loading-lg text-primary"></span>
                                    </div>
                                }
                                .into_any();
                            }
                            if let Some(msg) = error_msg.get() {
                                return view! {
                                    <div class="flex flex-col items-center gap-4 p-10">
                                        <p class="text-error">{msg}</p>
                                        <button class="btn btn-outline gap-2" on:click=move |_| load_audits()>
                                            <RefreshCw attr:class="h-4 w-4" />
                                            "Réessayer"
                                        </button>
                                    </div>
                                }
                                .into_any();
                            }
                            if listing.with(AuditListing::is_empty) {
                                return view! {
                                    <div class="text-center p-10 text-base-content/60">
                                        "Aucun audit pour le moment. Lancez votre premier audit !"
                                    </div>
                                }
                                .into_any();
                            }
                            view! { <AuditTable listing=listing /> }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AuditTable(listing: RwSignal<AuditListing>) -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>"Entreprise"</th>
                        <th>"Localisation"</th>
                        <th>"Date"</th>
                        <th>"Score"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = listing.with(AuditListing::current_rows);
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="4" class="text-center text-base-content/60">
                                        "Aucun résultat pour cette recherche"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|audit| {
                                let name = audit.display_name().to_string();
                                let location = audit.display_location().to_string();
                                let date = audit.display_date();
                                let score = audit.display_score();
                                view! {
                                    <tr
                                        class="hover cursor-pointer"
                                        on:click=move |_| dispatch(PageEvent::ViewAuditDetails(audit.clone()))
                                    >
                                        <td class="font-medium">{name}</td>
                                        <td>{location}</td>
                                        <td>{date}</td>
                                        <td>{score}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
        <ListingPager listing=listing />
    }
}
