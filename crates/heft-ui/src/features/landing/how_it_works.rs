use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

use super::heading::SectionHeading;

const STEPS: [u8; 3] = [1, 2, 3];

#[function_component(LandingHowItWorks)]
pub(super) fn landing_how_it_works() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section id={LandingSection::HowItWorks.anchor()} class="py-16">
            <SectionHeading
                title={t(LandingSection::HowItWorks.title_key())}
                body={Some(AttrValue::from(t("landing.how.body")))}
            />
            <ol class="grid gap-6 md:grid-cols-3">
                {for STEPS.iter().map(|step| html! {
                    <li class="rounded-box border border-base-300 p-6">
                        <span class="badge badge-primary badge-lg">{step.to_string()}</span>
                        <h3 class="mt-4 text-lg font-semibold">{t(&format!("landing.how.step{step}_title"))}</h3>
                        <p class="text-base-content/70 mt-2">{t(&format!("landing.how.step{step}_body"))}</p>
                    </li>
                })}
            </ol>
        </section>
    }
}
