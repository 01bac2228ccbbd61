//! `use_settings`: fetch-on-mount settings state for a component.

use crate::core::settings::{ApplyOutcome, SettingsAction, SettingsSource, SettingsState};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for SettingsState {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            ApplyOutcome::Superseded => self,
            _ => Rc::new(next),
        }
    }
}

/// Settings snapshot plus a refetch trigger.
#[derive(Clone, PartialEq)]
pub(crate) struct UseSettingsHandle {
    pub state: SettingsState,
    pub refetch: Callback<()>,
}

/// Read settings once on mount; `refetch` issues another read.
#[hook]
pub(crate) fn use_settings(source: Rc<dyn SettingsSource>) -> UseSettingsHandle {
    let state = use_reducer(SettingsState::default);
    let next_request = use_mut_ref(|| 0_u64);

    let refetch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| {
            let request = {
                let mut counter = next_request.borrow_mut();
                *counter += 1;
                *counter
            };
            dispatcher.dispatch(SettingsAction::Started { request });
            let source = source.clone();
            let dispatcher = dispatcher.clone();
            yew::platform::spawn_local(async move {
                let result = source.read_settings().await;
                if let Err(err) = &result {
                    console::error!("settings fetch failed", err.to_string());
                }
                dispatcher.dispatch(SettingsAction::Settled { request, result });
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with_deps(
            move |_| {
                refetch.emit(());
                || ()
            },
            (),
        );
    }

    UseSettingsHandle {
        state: (*state).clone(),
        refetch,
    }
}
