//! Marketing landing page.
//!
//! # Design
//! - Sections are parameterless and self-contained; copy comes from the translation bundle.
//! - The composer owns the order via `LandingSection::all()`.

mod features_grid;
mod heading;
mod hero;
mod how_it_works;
mod installation;
mod multi_machine;
mod view;
mod why;

pub(crate) use view::LandingPage;
