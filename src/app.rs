mod blog;
mod contact;
mod effects;
mod footer;
mod header;
mod homepage;
mod icon;
mod navigation;
mod projects;

use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::catalog::catalog;
use crate::nav::Screen;
use crate::theme::Theme;
use crate::FAVICON;

use blog::BlogDetail;
use effects::{apply_theme, CustomCursor};
use footer::Footer;
use header::Navbar;
use homepage::MainView;
use navigation::Navigator;
use projects::ProjectDetail;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Navigator::provide();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    Effect::new(move |_| apply_theme(theme.get()));

    let profile = &catalog().profile;

    view! {
        <Title text=format!("{}{}", profile.brand, profile.brand_accent) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The single page. Which screen it shows is driven by the [`Navigator`].
#[component]
fn Portfolio() -> impl IntoView {
    let screen = expect_context::<Navigator>().screen();

    view! {
        <CustomCursor />
        <Navbar />
        <main class="transition-opacity duration-700">
            {move || match screen.get() {
                Screen::Main => EitherOf3::A(view! { <MainView /> }),
                Screen::Project(id) => {
                    EitherOf3::B(
                        catalog().project(id).map(|project| view! { <ProjectDetail project /> }),
                    )
                }
                Screen::Post(id) => {
                    EitherOf3::C(catalog().post(id).map(|post| view! { <BlogDetail post /> }))
                }
            }}
        </main>
        <Footer />
    }
}
