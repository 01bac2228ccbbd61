//! Root component and boot wiring for the Heft UI.

use crate::app::api::ApiCtx;
use crate::components::shell::AppShell;
use crate::features::landing::LandingPage;
use crate::features::settings::SizeLimitsPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::utils::document;
use preferences::{api_base_url, load_locale, persist_locale};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(HeftApp)]
pub(crate) fn heft_app() -> Html {
    let locale = use_state(load_locale);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                persist_locale(locale);
                apply_document_lang(locale);
                || ()
            },
            locale,
        );
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <AppShell locale={*locale} on_locale_change={on_locale_change}>
                        <Switch<Route> render={switch} />
                    </AppShell>
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Limits => html! { <SizeLimitsPage /> },
        Route::NotFound => html! { <NotFoundPanel /> },
    }
}

#[function_component(NotFoundPanel)]
fn not_found_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <section class="mx-auto flex max-w-xl flex-col items-center gap-3 py-24 text-center">
            <h2 class="text-2xl font-semibold">{bundle.text("not_found.title", "Page not found")}</h2>
            <p class="text-base-content/70">
                {bundle.text("not_found.body", "Use the navigation to return to a supported view.")}
            </p>
            <Link<Route> to={Route::Home} classes="btn btn-primary btn-sm">
                {bundle.text("not_found.back", "Back to home")}
            </Link<Route>>
        </section>
    }
}

fn apply_document_lang(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("lang", locale.code());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<HeftApp>::with_root(root).render();
    } else {
        yew::Renderer::<HeftApp>::new().render();
    }
}
