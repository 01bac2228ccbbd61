use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

use super::heading::SectionHeading;

const FEATURES: [(&str, &str); 6] = [
    ("watch", "lucide--activity"),
    ("levels", "lucide--gauge"),
    ("block", "lucide--ban"),
    ("defaults", "lucide--shield-check"),
    ("central", "lucide--server"),
    ("light", "lucide--feather"),
];

#[function_component(LandingFeatures)]
pub(super) fn landing_features() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section id={LandingSection::Features.anchor()} class="py-16">
            <SectionHeading
                title={t(LandingSection::Features.title_key())}
                body={Some(AttrValue::from(t("landing.features.body")))}
            />
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {for FEATURES.iter().map(|(name, icon)| html! {
                    <div class="card bg-base-100 border border-base-300 shadow-sm">
                        <div class="card-body gap-2">
                            <div class="flex items-center gap-3">
                                <span class={classes!("iconify", *icon, "size-5", "text-primary")}></span>
                                <h3 class="font-semibold">{t(&format!("landing.features.{name}_title"))}</h3>
                            </div>
                            <p class="text-base-content/70 text-sm">{t(&format!("landing.features.{name}_body"))}</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
