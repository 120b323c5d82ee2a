/// In-memory router wired to parent-URL synchronization
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::parent::BrowserParent;
use crate::route_sync::{DEFAULT_ROUTE, SyncOptions, derive_initial_route, sync_route_to_parent};

#[derive(Properties, PartialEq)]
pub struct PluginRouterProps {
    pub children: Children,
    /// Explicit starting entries; the parent URL seeds the router otherwise
    #[prop_or_default]
    pub initial_entries: Option<Vec<String>>,
    #[prop_or_default]
    pub sync_options: SyncOptions,
}

/// Wrapper around yew-router that keeps the plugin's routing internal
/// (in-memory) and mirrors route changes onto the parent page's URL.
///
/// The starting location is derived from the parent URL exactly once,
/// before the history stack is constructed, so the first render already
/// shows the parent's route. Later changes to `sync_options` re-subscribe
/// the write path but never re-derive the initial route.
#[function_component(PluginRouter)]
pub fn plugin_router(props: &PluginRouterProps) -> Html {
    let initial_entries = props.initial_entries.clone();
    let sync_options = props.sync_options.clone();

    let history = use_memo((), move |_| {
        let mut entries = initial_entries
            .unwrap_or_else(|| vec![derive_initial_route(&BrowserParent, &sync_options)]);
        if entries.is_empty() {
            entries.push(DEFAULT_ROUTE.to_string());
        }
        AnyHistory::from(MemoryHistory::with_entries(entries))
    });

    html! {
        <Router history={(*history).clone()}>
            <ParentRouterSync history={(*history).clone()} options={props.sync_options.clone()} />
            { props.children.clone() }
        </Router>
    }
}

#[derive(Properties, PartialEq)]
struct ParentRouterSyncProps {
    history: AnyHistory,
    options: SyncOptions,
}

/// Invisible observer that forwards every in-app navigation to the parent
/// URL. Subscribes to history changes when mounted (and again whenever the
/// options change); the listener is dropped on teardown.
#[function_component(ParentRouterSync)]
fn parent_router_sync(props: &ParentRouterSyncProps) -> Html {
    let history = props.history.clone();

    use_effect_with(props.options.clone(), move |options| {
        let options = options.clone();
        let reader = history.clone();

        let listener = history.listen(move || {
            let location = reader.location();
            let route = format!(
                "{}{}{}",
                location.path(),
                location.query_str(),
                location.hash()
            );

            // A failed sync is logged and dropped; the in-app navigation
            // that triggered it has already happened.
            if let Err(e) = sync_route_to_parent(&BrowserParent, &route, &options) {
                log::error!("failed to sync route {route:?} to parent URL: {e}");
            }
        });

        move || drop(listener)
    });

    Html::default()
}
