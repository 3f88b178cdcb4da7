use leptos::prelude::*;

use crate::catalog::catalog;

use super::icon::Icon;
use super::navigation::Navigator;

/// Set by `build.rs`, RFC 3339.
const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> &'static str {
    BUILD_TIME.get(..4).unwrap_or_default()
}

#[component]
pub fn Footer() -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let content = catalog();
    let profile = &content.profile;

    let socials = [
        ("twitter", profile.twitter.as_str()),
        ("github", profile.github.as_str()),
        ("linkedin", profile.linkedin.as_str()),
    ];

    view! {
        <footer class="py-20 bg-zinc-50 dark:bg-black border-t border-zinc-100 dark:border-white/5 overflow-hidden transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="flex flex-col md:flex-row justify-between items-center gap-12 mb-20">
                    <a
                        href="#"
                        on:click=move |ev| {
                            nav.follow_link(&ev, "#");
                        }
                        class="flex items-center space-x-4 group p-2 rounded-xl"
                    >
                        <div class="w-12 h-12 bg-zinc-900 dark:bg-white rounded-2xl flex items-center justify-center font-bold text-white dark:text-black text-xl transition-transform group-hover:rotate-12">
                            {profile.monogram.as_str()}
                        </div>
                        <span class="font-display font-bold text-3xl text-zinc-900 dark:text-white tracking-tighter">
                            {format!("{}{}.", profile.brand, profile.brand_accent)}
                        </span>
                    </a>
                    <div class="flex flex-wrap justify-center gap-x-8 sm:gap-x-12 gap-y-6">
                        {content
                            .nav_links
                            .iter()
                            .map(|link| {
                                let href = link.href.as_str();
                                view! {
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            nav.follow_link(&ev, href);
                                        }
                                        class="text-[10px] font-bold text-zinc-400 dark:text-zinc-500 hover:text-zinc-900 dark:hover:text-white transition-colors uppercase tracking-[0.4em] px-2 py-1 rounded-md"
                                    >
                                        {link.name.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex space-x-8 text-zinc-400 dark:text-zinc-500">
                        {socials
                            .into_iter()
                            .map(|(name, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=name
                                        class="hover:text-zinc-900 dark:hover:text-white transition-all hover:scale-125"
                                    >
                                        <Icon name=name class="w-6 h-6" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="pt-12 border-t border-zinc-200 dark:border-white/5 flex flex-col md:flex-row justify-between items-center gap-6 text-zinc-400 dark:text-zinc-600 text-[9px] sm:text-[10px] font-bold uppercase tracking-[0.4em] text-center">
                    <span>
                        {format!(
                            "\u{a9} {} {}{} Studio. All rights reserved.",
                            build_year(),
                            profile.brand,
                            profile.brand_accent,
                        )}
                    </span>
                    <span title=BUILD_TIME>"Crafted for excellence."</span>
                </div>
            </div>
        </footer>
    }
}
