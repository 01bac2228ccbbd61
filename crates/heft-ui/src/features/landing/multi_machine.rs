use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

const POINTS: [&str; 3] = ["server", "join", "consistent"];
const MACHINES: [&str; 3] = ["laptop", "build-01", "nas"];

#[function_component(LandingMultiMachine)]
pub(super) fn landing_multi_machine() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section id={LandingSection::MultiMachine.anchor()} class="py-16">
            <div class="grid items-center gap-10 lg:grid-cols-2">
                <div>
                    <h2 class="text-3xl font-bold tracking-tight">{t(LandingSection::MultiMachine.title_key())}</h2>
                    <p class="text-base-content/70 mt-3 text-lg">{t("landing.multi.body")}</p>
                    <ul class="mt-6 space-y-3">
                        {for POINTS.iter().map(|point| html! {
                            <li class="flex items-start gap-3">
                                <span class="iconify lucide--check text-success mt-1 size-4"></span>
                                <span>{t(&format!("landing.multi.{point}"))}</span>
                            </li>
                        })}
                    </ul>
                </div>
                <div class="rounded-box bg-base-200 flex flex-col items-center gap-4 p-8">
                    <div class="badge badge-primary badge-lg gap-2">
                        <span class="iconify lucide--server size-4"></span>
                        {"heft serve"}
                    </div>
                    <div class="flex flex-wrap justify-center gap-3">
                        {for MACHINES.iter().map(|machine| html! {
                            <div class="badge badge-outline gap-2 p-3">
                                <span class="iconify lucide--monitor size-4"></span>
                                {*machine}
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
