use crate::core::landing::{LANDING_CONTAINER_CLASS, LandingSection};
use yew::prelude::*;

use super::features_grid::LandingFeatures;
use super::hero::LandingHero;
use super::how_it_works::LandingHowItWorks;
use super::installation::LandingInstallation;
use super::multi_machine::LandingMultiMachine;
use super::why::LandingWhy;

#[function_component(LandingPage)]
pub(crate) fn landing_page() -> Html {
    html! {
        <div class={LANDING_CONTAINER_CLASS}>
            {for LandingSection::all().into_iter().map(render_section)}
        </div>
    }
}

fn render_section(section: LandingSection) -> Html {
    match section {
        LandingSection::Hero => html! { <LandingHero /> },
        LandingSection::Why => html! { <LandingWhy /> },
        LandingSection::HowItWorks => html! { <LandingHowItWorks /> },
        LandingSection::Features => html! { <LandingFeatures /> },
        LandingSection::MultiMachine => html! { <LandingMultiMachine /> },
        LandingSection::Installation => html! { <LandingInstallation /> },
    }
}
