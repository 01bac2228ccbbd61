//! Routing definitions for the Heft UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/limits")]
    Limits,
    #[not_found]
    #[at("/404")]
    NotFound,
}
