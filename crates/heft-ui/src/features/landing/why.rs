use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

use super::heading::SectionHeading;

const POINTS: [(&str, &str); 3] = [
    ("surprise", "lucide--siren"),
    ("history", "lucide--git-branch"),
    ("budget", "lucide--scale"),
];

#[function_component(LandingWhy)]
pub(super) fn landing_why() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section id={LandingSection::Why.anchor()} class="py-16">
            <SectionHeading
                title={t(LandingSection::Why.title_key())}
                body={Some(AttrValue::from(t("landing.why.body")))}
            />
            <div class="grid gap-6 md:grid-cols-3">
                {for POINTS.iter().map(|(name, icon)| html! {
                    <div class="card bg-base-200">
                        <div class="card-body">
                            <span class={classes!("iconify", *icon, "size-6", "text-primary")}></span>
                            <h3 class="card-title">{t(&format!("landing.why.{name}_title"))}</h3>
                            <p class="text-base-content/70">{t(&format!("landing.why.{name}_body"))}</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
