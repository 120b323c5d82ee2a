/// Plugin application root
use yew::prelude::*;
use yew_router::prelude::*;

use super::pages::{NavBar, PluginRoute, switch};
use super::router::PluginRouter;
use crate::route_sync::{DEFAULT_QUERY_PARAM_KEY, SyncOptions};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// How the in-app route is mirrored onto the parent URL
    #[prop_or_else(default_sync_options)]
    pub sync_options: SyncOptions,
}

impl Default for AppProps {
    fn default() -> Self {
        AppProps {
            sync_options: default_sync_options(),
        }
    }
}

fn default_sync_options() -> SyncOptions {
    SyncOptions::query(DEFAULT_QUERY_PARAM_KEY)
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <PluginRouter sync_options={props.sync_options.clone()}>
            <NavBar />
            <Switch<PluginRoute> render={switch} />
        </PluginRouter>
    }
}
