use crate::core::landing::LandingSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

use super::heading::SectionHeading;

const SERVER_COMMANDS: [&str; 2] = ["heft serve --port 7070", "heft settings set size_blocked_mb 250"];
const AGENT_COMMANDS: [&str; 2] = ["heft agent join http://<server>:7070", "heft agent status"];

#[function_component(LandingInstallation)]
pub(super) fn landing_installation() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section id={LandingSection::Installation.anchor()} class="py-16">
            <SectionHeading
                title={t(LandingSection::Installation.title_key())}
                body={Some(AttrValue::from(t("landing.install.body")))}
            />
            <div class="grid gap-6 md:grid-cols-2">
                {render_commands(&t("landing.install.server_label"), &SERVER_COMMANDS)}
                {render_commands(&t("landing.install.agent_label"), &AGENT_COMMANDS)}
            </div>
            <p class="text-base-content/60 mt-6 text-center text-sm">{t("landing.install.note")}</p>
        </section>
    }
}

fn render_commands(label: &str, commands: &[&str]) -> Html {
    html! {
        <div>
            <p class="mb-2 font-medium">{label.to_string()}</p>
            <div class="mockup-code">
                {for commands.iter().map(|command| html! {
                    <pre data-prefix="$"><code>{*command}</code></pre>
                })}
            </div>
        </div>
    }
}
