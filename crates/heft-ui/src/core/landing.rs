//! Landing page structure, kept DOM-free so the section order is testable.

/// Classes for the centred, responsively padded landing container.
pub const LANDING_CONTAINER_CLASS: &str = "mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8";

/// Presentational sections of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LandingSection {
    /// Headline and calls to action.
    Hero,
    /// Problem statement.
    Why,
    /// Three-step walkthrough.
    HowItWorks,
    /// Feature grid.
    Features,
    /// Shared thresholds across machines.
    MultiMachine,
    /// Install commands.
    Installation,
}

impl LandingSection {
    /// Sections in render order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Hero,
            Self::Why,
            Self::HowItWorks,
            Self::Features,
            Self::MultiMachine,
            Self::Installation,
        ]
    }

    /// Element id used for in-page navigation.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Why => "why",
            Self::HowItWorks => "how-it-works",
            Self::Features => "features",
            Self::MultiMachine => "multi-machine",
            Self::Installation => "installation",
        }
    }

    /// Translation key for the section heading.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Hero => "landing.hero.title",
            Self::Why => "landing.why.title",
            Self::HowItWorks => "landing.how.title",
            Self::Features => "landing.features.title",
            Self::MultiMachine => "landing.multi.title",
            Self::Installation => "landing.install.title",
        }
    }

    /// Translation key for the short navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Hero => "nav.hero",
            Self::Why => "nav.why",
            Self::HowItWorks => "nav.how",
            Self::Features => "nav.features",
            Self::MultiMachine => "nav.multi",
            Self::Installation => "nav.install",
        }
    }

    /// Whether the section gets a link in the navigation bar.
    #[must_use]
    pub const fn in_nav(self) -> bool {
        !matches!(self, Self::Hero)
    }
}
