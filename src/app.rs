mod homepage;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{build_year, PROFILE};
use homepage::HomePage;

pub use navbar::{use_page_chrome, PageChrome};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-6 mt-12">
            <div class="max-w-6xl mx-auto px-6 text-sm text-slate-500 flex flex-col md:flex-row justify-between gap-3">
                <div>{format!("© {} {}", build_year(), PROFILE.name)}</div>
                <div class="flex items-center gap-4">
                    <div>"Made with " <span class="text-red-500">"❤"</span></div>
                    <div class="text-xs text-slate-400">"Tailwind + Leptos"</div>
                </div>
            </div>
        </footer>
    }
}
