/// Query-parameter context page
use std::collections::BTreeMap;

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::parent::BrowserParent;
use crate::route_sync::{SyncOptions, sync_route_to_parent};

/// Query parameter mirrored between this page and the parent URL
const QUERY_KEY: &str = "query";

/// Parse this window's own query string into a key/value map
fn own_query_params() -> BTreeMap<String, String> {
    let Some(window) = web_sys::window() else {
        return BTreeMap::new();
    };

    let search = window.location().search().unwrap_or_default();
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Shows the query parameters the plugin was loaded with and lets the
/// user push a `query` value up into the parent URL.
#[function_component(PluginContextPage)]
pub fn plugin_context_page() -> Html {
    let query_params = use_state(BTreeMap::<String, String>::new);
    let sync_error = use_state(|| None::<String>);

    // Read the plugin's own query string once, on mount
    {
        let query_params = query_params.clone();
        use_effect_with((), move |_| {
            query_params.set(own_query_params());
            || ()
        });
    }

    let on_query_input = {
        let query_params = query_params.clone();
        let sync_error = sync_error.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();

                let mut params = (*query_params).clone();
                params.insert(QUERY_KEY.to_string(), value.clone());
                query_params.set(params);

                // The query-mode write path doubles as a single-parameter
                // setter on the parent URL
                let options = SyncOptions::query(QUERY_KEY);
                match sync_route_to_parent(&BrowserParent, &value, &options) {
                    Ok(_) => sync_error.set(None),
                    Err(e) => {
                        log::error!("failed to push query param to parent URL: {e}");
                        sync_error.set(Some(e.to_string()));
                    }
                }
            }
        })
    };

    let params_json =
        serde_json::to_string_pretty(&*query_params).unwrap_or_else(|_| "{}".to_string());
    let query_value = query_params.get(QUERY_KEY).cloned().unwrap_or_default();

    html! {
        <div class="page-container">
            <div class="page-content">
                <h2 class="stats-title">{"Query params"}</h2>

                if let Some(err) = (*sync_error).clone() {
                    <Alert r#type={AlertType::Danger} title={"Parent URL not updated"} inline={true}>
                        {err}
                    </Alert>
                }

                <pre>{params_json}</pre>
                <input
                    type="text"
                    value={query_value}
                    oninput={on_query_input}
                    class="search-input"
                />
            </div>
        </div>
    }
}
