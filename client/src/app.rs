//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::manager::SessionManager;
use crate::auth::supabase::SupabaseAuth;
use crate::content::PRODUCT_NAME;
use crate::pages::landing::LandingPage;
use crate::state::{session::SessionState, toast::ToastState, ui::UiState};
use crate::util::dark_mode::{DocumentRoot, ThemeController};
use crate::util::storage::LocalStorage;

/// Session manager bound to the hosted provider, shared via context.
pub type AppSession = SessionManager<SupabaseAuth>;

/// Theme controller bound to browser storage and the `<html>` element.
pub type AppTheme = StoredValue<ThemeController<LocalStorage, DocumentRoot>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns every piece of shared state and provides it to the page: session
/// mirror, UI flags, toast queue, theme controller, and session manager.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme: AppTheme = StoredValue::new(ThemeController::init(LocalStorage, DocumentRoot));
    let ui = RwSignal::new(UiState::default());
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    let manager: AppSession = SessionManager::new(SupabaseAuth::from_build_env());

    // Server markup always renders light; adopt the stored mode once hydrated.
    Effect::new(move || {
        let stored = theme.with_value(|c| c.theme());
        ui.update(|u| u.theme = stored);
    });

    let subscription = manager.attach(session);
    on_cleanup(move || subscription.unsubscribe());

    #[cfg(feature = "hydrate")]
    {
        let manager = manager.clone();
        leptos::task::spawn_local(async move {
            manager.load(&session).await;
        });
    }

    provide_context(theme);
    provide_context(ui);
    provide_context(session);
    provide_context(toasts);
    provide_context(manager);

    view! {
        <Stylesheet id="leptos" href="/pkg/podcastai.css"/>
        <Title text=PRODUCT_NAME/>
        <Meta name="description" content="Turn ideas into professional podcasts with AI."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
