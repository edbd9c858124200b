use leptos::prelude::*;
use localaudit::{BusinessInfo, ScoreBand};

/// 分数圆环与评语
#[component]
pub fn ScoreDisplay(score: f64, label: String) -> impl IntoView {
    let band = ScoreBand::of(score);
    let value = score.clamp(0.0, 100.0) as u32;
    let style = format!("--value:{value}; --size:9rem; --thickness:0.6rem;");

    view! {
        <div class="flex flex-col items-center gap-3">
            <div
                class=format!("radial-progress {}", band.css_class())
                style=style
                role="progressbar"
            >
                <span class="text-2xl font-bold">{label}</span>
            </div>
            <p class=format!("font-medium {}", band.css_class())>{band.message()}</p>
        </div>
    }
}

/// 企业基本信息卡片
#[component]
pub fn BusinessCard(business: BusinessInfo) -> impl IntoView {
    let website = business.website.clone();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{business.name}</h2>
                <dl class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm">
                    <div>
                        <dt class="text-base-content/60">"Adresse"</dt>
                        <dd>{business.address}</dd>
                    </div>
                    <div>
                        <dt class="text-base-content/60">"Note Google"</dt>
                        <dd>{business.rating}</dd>
                    </div>
                    <div>
                        <dt class="text-base-content/60">"Nombre d'avis"</dt>
                        <dd>{business.review_count}</dd>
                    </div>
                    <div>
                        <dt class="text-base-content/60">"Site web"</dt>
                        <dd>
                            {match website {
                                Some(url) => view! {
                                    <a class="link link-primary break-all" href=url.clone() target="_blank" rel="noopener">{url}</a>
                                }.into_any(),
                                None => "Aucun".into_any(),
                            }}
                        </dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}
