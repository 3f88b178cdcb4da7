use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use crate::catalog::catalog;
use crate::theme::Theme;

use super::icon::Icon;
use super::navigation::Navigator;

/// Vertical scroll after which the navbar turns opaque.
const SCROLLED_PAST: f64 = 20.0;

#[component]
fn ThemeToggle(#[prop(into)] class: String) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    view! {
        <button
            class=class
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || {
                let (name, class) = if theme.get().is_dark() {
                    ("sun", "w-5 h-5 text-neon-cyan")
                } else {
                    ("moon", "w-5 h-5 text-zinc-900")
                };
                view! { <Icon name class /> }
            }}
        </button>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let theme = expect_context::<RwSignal<Theme>>();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let content = catalog();
    let profile = &content.profile;

    let follow = move |ev: MouseEvent, href: &'static str| {
        if nav.follow_link(&ev, href) {
            set_menu_open.set(false);
        }
    };

    let nav_class = move || {
        if scroll_y.get() > SCROLLED_PAST {
            let glass = if theme.get().is_dark() {
                "glass-dark"
            } else {
                "glass-light"
            };
            format!("fixed top-0 w-full z-[200] transition-all duration-700 {glass} py-3")
        } else {
            "fixed top-0 w-full z-[200] transition-all duration-700 bg-transparent py-8".to_string()
        }
    };

    let desktop_links = content
        .nav_links
        .iter()
        .map(|link| {
            let href = link.href.as_str();
            view! {
                <a
                    href=href
                    on:click=move |ev| follow(ev, href)
                    class="text-sm font-semibold tracking-wide transition-all hover:text-neon-cyan relative group text-zinc-500 dark:text-zinc-400 px-2 py-1 rounded-md"
                >
                    {link.name.as_str()}
                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-neon-cyan transition-all group-hover:w-full"></span>
                </a>
            }
        })
        .collect_view();

    let drawer_links = content
        .nav_links
        .iter()
        .map(|link| {
            let href = link.href.as_str();
            view! {
                <a
                    href=href
                    on:click=move |ev| follow(ev, href)
                    class="block text-4xl sm:text-5xl font-display font-bold text-zinc-900 dark:text-white hover:text-neon-cyan transition-colors tracking-tight rounded-xl"
                >
                    {link.name.as_str()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-6 md:px-10 flex justify-between items-center">
                <a
                    href="#"
                    on:click=move |ev| follow(ev, "#")
                    class="flex items-center space-x-3 group rounded-xl p-1"
                >
                    <div class="w-10 h-10 bg-zinc-900 dark:bg-white rounded-xl flex items-center justify-center font-display font-bold text-white dark:text-black transition-transform group-hover:scale-110 shadow-lg">
                        {profile.monogram.as_str()}
                    </div>
                    <span class="font-display font-bold text-2xl tracking-tighter text-zinc-900 dark:text-white">
                        {profile.brand.as_str()}
                        <span class="text-neon-cyan">{profile.brand_accent.as_str()}</span>
                    </span>
                </a>

                <div class="hidden lg:flex items-center space-x-8 xl:space-x-10">
                    {desktop_links}
                    <div class="h-6 w-px bg-zinc-200 dark:bg-white/10"></div>
                    <ThemeToggle class="p-3 rounded-2xl bg-zinc-100 dark:bg-zinc-900/50 border border-zinc-200 dark:border-white/5 transition-all duration-300 active:scale-90 shadow-sm" />
                    <a
                        href="#contact"
                        on:click=move |ev| follow(ev, "#contact")
                        class="px-8 py-3 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-full text-sm font-bold shadow-xl hover:scale-105 active:scale-95 transition-all"
                    >
                        "Start Project"
                    </a>
                </div>

                <div class="flex items-center space-x-4 lg:hidden">
                    <ThemeToggle class="p-2 bg-zinc-100 dark:bg-zinc-900/50 rounded-xl text-zinc-900 dark:text-white" />
                    <button
                        aria-label="Toggle Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="p-2 relative w-12 h-12 flex items-center justify-center rounded-xl bg-zinc-100 dark:bg-white/5 border border-zinc-200 dark:border-white/10 text-zinc-900 dark:text-white"
                    >
                        {move || {
                            let name = if menu_open.get() { "x" } else { "menu" };
                            view! { <Icon name=name class="w-6 h-6" /> }
                        }}
                    </button>
                </div>
            </div>
        </nav>

        <div class=move || {
            if menu_open.get() {
                "fixed inset-0 bg-white dark:bg-black z-[250] transition-all duration-700 lg:hidden flex flex-col items-center justify-center opacity-100 translate-x-0"
            } else {
                "fixed inset-0 bg-white dark:bg-black z-[250] transition-all duration-700 lg:hidden flex flex-col items-center justify-center opacity-0 translate-x-full pointer-events-none"
            }
        }>
            <button
                aria-label="Close Menu"
                on:click=move |_| set_menu_open.set(false)
                class="absolute top-8 right-8 p-4 text-zinc-900 dark:text-white rounded-full"
            >
                <Icon name="x" class="w-10 h-10" />
            </button>
            <div class="space-y-8 text-center px-6">
                {drawer_links}
                <a
                    href="#contact"
                    on:click=move |ev| follow(ev, "#contact")
                    class="inline-block mt-8 px-12 py-6 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-3xl text-xl sm:text-2xl font-bold shadow-2xl"
                >
                    "Let's Talk"
                </a>
            </div>
        </div>
    }
}
