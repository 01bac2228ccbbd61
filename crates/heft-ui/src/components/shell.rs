//! App shell: navigation bar, routed content, footer.
//!
//! # Design
//! - Section links come from `LandingSection::all()` so the nav never drifts from the page.
//! - Anchors are rooted at `/` so they also work from other routes.

use crate::app::Route;
use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub locale: LocaleCode,
    pub on_locale_change: Callback<LocaleCode>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);

    let on_select = {
        let on_locale_change = props.on_locale_change.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                on_locale_change.emit(next);
            }
        })
    };

    let section_links = LandingSection::all()
        .into_iter()
        .filter(|section| section.in_nav())
        .map(|section| {
            html! {
                <li>
                    <a href={format!("/#{}", section.anchor())}>
                        {t(section.nav_key(), section.anchor())}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex min-h-screen flex-col bg-base-100">
            <header class="navbar sticky top-0 z-30 border-b border-base-300 bg-base-100/90 backdrop-blur">
                <div class="navbar-start">
                    <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg font-bold">
                        {t("nav.brand", "Heft")}
                    </Link<Route>>
                </div>
                <nav class="navbar-center hidden lg:flex">
                    <ul class="menu menu-horizontal gap-1 px-1">
                        {section_links}
                    </ul>
                </nav>
                <div class="navbar-end gap-2">
                    <Link<Route> to={Route::Limits} classes="btn btn-sm btn-outline">
                        {t("nav.limits", "Size limits")}
                    </Link<Route>>
                    <select
                        class="select select-sm select-bordered"
                        aria-label={t("nav.locale", "Language")}
                        onchange={on_select}>
                        {for LocaleCode::all().iter().map(|lc| html! {
                            <option value={lc.code()} selected={*lc == props.locale}>{lc.label()}</option>
                        })}
                    </select>
                </div>
            </header>
            <main class="grow">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center border-t border-base-300 p-6 text-base-content/60">
                <p>{t("footer.tagline", "Heft keeps shared storage lean.")}</p>
            </footer>
        </div>
    }
}
