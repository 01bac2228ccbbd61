//! Size limits page view.
//!
//! # Design
//! - Render whatever mapping the hook holds; stale data stays visible next to the error.
//! - Mark each threshold as server-provided or defaulted so fallbacks are never silent.

use crate::app::api::ApiCtx;
use crate::core::logic::{FALLBACK_API_BASE, parse_size_input};
use crate::core::settings::{SettingsMap, SettingsState};
use crate::core::thresholds::{SizeThresholds, format_megabytes, uses_default};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use heft_api_models::{SIZE_BLOCKED_MB_KEY, SIZE_DANGER_MB_KEY, SIZE_WARNING_MB_KEY};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::hook::use_settings;

#[function_component(SizeLimitsPage)]
pub(crate) fn size_limits_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(FALLBACK_API_BASE));
    let handle = use_settings(api_ctx.settings_source());
    let preview = use_state(String::new);

    let state = &handle.state;
    let thresholds = state.thresholds();

    let on_refresh = {
        let refetch = handle.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };
    let on_preview = {
        let preview = preview.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                preview.set(input.value());
            }
        })
    };

    html! {
        <section class="mx-auto w-full max-w-4xl px-4 py-10 sm:px-6">
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold">{t("limits.title", "Size limits")}</h2>
                    <p class="text-base-content/70">{t("limits.body", "")}</p>
                    <p class="text-base-content/50 mt-1 text-xs">
                        {format!("{} {}", t("limits.source", "Reading from"), api_ctx.client.base_url())}
                    </p>
                </div>
                <button
                    class="btn btn-sm btn-outline gap-2"
                    disabled={state.loading}
                    onclick={on_refresh.clone()}>
                    {if state.loading {
                        html! { <span class="loading loading-spinner loading-xs"></span> }
                    } else {
                        html! { <span class="iconify lucide--refresh-cw size-4"></span> }
                    }}
                    {t("limits.refresh", "Refresh")}
                </button>
            </div>
            {render_status(&bundle, state, on_refresh.clone())}
            <div class="stats stats-vertical mt-6 w-full shadow sm:stats-horizontal">
                {render_stat(&bundle, &state.settings, "limits.warning", SIZE_WARNING_MB_KEY, thresholds.warning_mb)}
                {render_stat(&bundle, &state.settings, "limits.danger", SIZE_DANGER_MB_KEY, thresholds.danger_mb)}
                {render_stat(&bundle, &state.settings, "limits.blocked", SIZE_BLOCKED_MB_KEY, thresholds.blocked_mb)}
            </div>
            <div class="card bg-base-200 mt-6">
                <div class="card-body gap-3">
                    <label class="font-medium" for="size-preview">{t("limits.preview_label", "Check a size")}</label>
                    <input
                        id="size-preview"
                        class="input input-bordered w-full max-w-xs"
                        type="number"
                        min="0"
                        step="any"
                        placeholder={t("limits.preview_placeholder", "Size in MB")}
                        value={(*preview).clone()}
                        oninput={on_preview}
                    />
                    {render_preview(&bundle, &thresholds, &preview)}
                </div>
            </div>
        </section>
    }
}

fn render_status(bundle: &TranslationBundle, state: &SettingsState, on_retry: Callback<MouseEvent>) -> Html {
    if let Some(err) = &state.error {
        return html! {
            <div role="alert" class="alert alert-error mt-6">
                <span class="iconify lucide--triangle-alert size-5"></span>
                <div>
                    <h3 class="font-semibold">{bundle.text("limits.error_title", "Could not load settings")}</h3>
                    <p class="text-sm">{err.display_message()}</p>
                    <p class="text-sm opacity-80">{bundle.text("limits.error_body", "")}</p>
                </div>
                <button class="btn btn-sm" disabled={state.loading} onclick={on_retry}>
                    {bundle.text("limits.retry", "Retry")}
                </button>
            </div>
        };
    }
    if state.loading {
        return html! {
            <p class="text-base-content/60 mt-6 text-sm">{bundle.text("limits.loading", "Loading settings…")}</p>
        };
    }
    html! {}
}

fn render_stat(
    bundle: &TranslationBundle,
    settings: &SettingsMap,
    label_key: &str,
    settings_key: &str,
    value_mb: f64,
) -> Html {
    let (badge_class, badge_key, badge_fallback) = if uses_default(settings, settings_key) {
        ("badge-ghost", "limits.default_badge", "default")
    } else {
        ("badge-info", "limits.server_badge", "server")
    };
    html! {
        <div class="stat">
            <div class="stat-title">{bundle.text(label_key, settings_key)}</div>
            <div class="stat-value text-2xl">{format_megabytes(value_mb)}</div>
            <div class="stat-desc">
                <span class={classes!("badge", "badge-sm", badge_class)}>
                    {bundle.text(badge_key, badge_fallback)}
                </span>
                <code class="ms-2 opacity-60">{settings_key.to_string()}</code>
            </div>
        </div>
    }
}

fn render_preview(bundle: &TranslationBundle, thresholds: &SizeThresholds, raw: &str) -> Html {
    let Some(size_mb) = parse_size_input(raw) else {
        return html! {
            <p class="text-base-content/60 text-sm">{bundle.text("limits.preview_hint", "")}</p>
        };
    };
    let level = thresholds.classify(size_mb);
    html! {
        <div class="flex items-center gap-3">
            <span class={classes!("badge", "badge-lg", level.badge_class())}>
                {bundle.text(&format!("limits.level.{}", level.as_str()), level.as_str())}
            </span>
            <span class="text-base-content/70 text-sm">{format_megabytes(size_mb)}</span>
        </div>
    }
}
