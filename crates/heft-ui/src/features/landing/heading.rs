use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(super) struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub body: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub(super) fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="mx-auto mb-10 max-w-2xl text-center">
            <h2 class="text-3xl font-bold tracking-tight">{props.title.clone()}</h2>
            {props.body.clone().map(|body| html! {
                <p class="text-base-content/70 mt-3 text-lg">{body}</p>
            }).unwrap_or_default()}
        </div>
    }
}
