use crate::app::Route;
use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingHero)]
pub(super) fn landing_hero() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| bundle.text(key, fallback);

    html! {
        <section id={LandingSection::Hero.anchor()} class="hero min-h-[420px] py-16">
            <div class="hero-content text-center">
                <div class="max-w-3xl">
                    <p class="text-primary text-sm font-semibold uppercase tracking-widest">
                        {t("landing.hero.eyebrow", "Size guard for synced workspaces")}
                    </p>
                    <h1 class="mt-4 text-4xl font-bold sm:text-5xl">
                        {t("landing.hero.title", "Catch oversized files before they ship")}
                    </h1>
                    <p class="text-base-content/70 py-6 text-lg">
                        {t("landing.hero.subtitle", "")}
                    </p>
                    <div class="flex flex-wrap justify-center gap-3">
                        <a
                            class="btn btn-primary"
                            href={format!("#{}", LandingSection::Installation.anchor())}>
                            {t("landing.hero.cta_install", "Install Heft")}
                        </a>
                        <Link<Route> to={Route::Limits} classes="btn btn-ghost">
                            {t("landing.hero.cta_limits", "View size limits")}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
