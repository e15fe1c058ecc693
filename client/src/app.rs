//! Root application component with routing and the console context.

use std::rc::Rc;

use console::{ApiClient, ConsoleConfig, Session, Transport};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{auth_guard::AuthGuard, nav::Nav};
use crate::net::{session::BrowserSession, transport::GlooTransport};
use crate::pages::{
    jobs::JobsPage, login::LoginPage, runs::RunsPage, settings::SettingsPage, sources::SourcesPage,
};
use crate::state::ApiHandle;

/// Root application component.
///
/// Builds the one [`ApiClient`] for this tab and provides it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let session: Session = BrowserSession::shared();
    let transport: Rc<dyn Transport> = Rc::new(GlooTransport);
    tracing::debug!(api_base = %config.api_base, "console configured");
    let api: ApiHandle = StoredValue::new_local(ApiClient::new(&config, session, transport));
    provide_context(api);

    view! {
        <Title text="jobwatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/jobs"/> }/>
                <Route path=StaticSegment("jobs") view=|| view! { <Protected><JobsPage/></Protected> }/>
                <Route path=StaticSegment("runs") view=|| view! { <Protected><RunsPage/></Protected> }/>
                <Route path=StaticSegment("sources") view=|| view! { <Protected><SourcesPage/></Protected> }/>
                <Route path=StaticSegment("settings") view=|| view! { <Protected><SettingsPage/></Protected> }/>
            </Routes>
        </Router>
    }
}

/// Guarded page chrome: the switcher above the page body.
#[component]
fn Protected(children: Children) -> impl IntoView {
    view! {
        <AuthGuard>
            <Nav/>
            <main class="page-body">{children()}</main>
        </AuthGuard>
    }
}
