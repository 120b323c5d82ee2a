/// Placeholder pages and navigation for the plugin shell
use yew::prelude::*;
use yew_router::prelude::*;

use super::context::PluginContextPage;

/// In-app routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum PluginRoute {
    #[at("/")]
    Home,
    #[at("/page1")]
    PageOne,
    #[at("/page2")]
    PageTwo,
    #[at("/context")]
    Context,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn page(text: &str) -> Html {
    html! {
        <div class="page-container">
            <div class="page-content">{ text }</div>
        </div>
    }
}

#[function_component(HomePage)]
fn home_page() -> Html {
    page("Home Page")
}

#[function_component(PageOne)]
fn page_one() -> Html {
    page("Page 1")
}

#[function_component(PageTwo)]
fn page_two() -> Html {
    page("Page 2")
}

/// Top navigation bar
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="top-nav">
            <Link<PluginRoute> classes="nav-link" to={PluginRoute::Home}>{"Home"}</Link<PluginRoute>>
            <Link<PluginRoute> classes="nav-link" to={PluginRoute::PageOne}>{"Page 1"}</Link<PluginRoute>>
            <Link<PluginRoute> classes="nav-link" to={PluginRoute::PageTwo}>{"Page 2"}</Link<PluginRoute>>
            <Link<PluginRoute> classes="nav-link" to={PluginRoute::Context}>{"Context"}</Link<PluginRoute>>
        </nav>
    }
}

/// Route table; unknown paths land back on Home
pub fn switch(route: PluginRoute) -> Html {
    match route {
        PluginRoute::Home => html! { <HomePage /> },
        PluginRoute::PageOne => html! { <PageOne /> },
        PluginRoute::PageTwo => html! { <PageTwo /> },
        PluginRoute::Context => html! { <PluginContextPage /> },
        PluginRoute::NotFound => html! { <Redirect<PluginRoute> to={PluginRoute::Home} /> },
    }
}
