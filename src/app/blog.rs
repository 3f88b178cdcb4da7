use leptos::{ev::KeyboardEvent, prelude::*};

use crate::catalog::{catalog, BlogPost};

use super::effects::Reveal;
use super::icon::Icon;
use super::navigation::Navigator;

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    let nav = expect_context::<Navigator>();
    view! {
        <Reveal>
            <article
                role="button"
                tabindex="0"
                on:click=move |_| nav.open_post(post)
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        nav.open_post(post);
                    }
                }
                class="group cursor-pointer stagger-1 outline-none p-4 rounded-3xl"
            >
                <div class="aspect-[4/3] rounded-3xl overflow-hidden mb-6 sm:mb-8 bg-zinc-100 dark:bg-zinc-900 shadow-xl relative">
                    <img
                        src=post.author.avatar.as_str()
                        alt=post.title.as_str()
                        class="w-full h-full object-cover transition-transform duration-1000 group-hover:scale-110"
                    />
                    <div class="absolute top-4 sm:top-6 left-4 sm:left-6 px-3 py-1.5 sm:px-4 sm:py-2 bg-white/80 dark:bg-black/40 backdrop-blur-md rounded-full text-[8px] sm:text-[10px] font-bold uppercase tracking-widest text-zinc-900 dark:text-white border border-zinc-200 dark:border-white/10">
                        {post.category.as_str()}
                    </div>
                </div>
                <div class="flex items-center space-x-3 mb-4 sm:mb-6 text-[9px] sm:text-[10px] font-bold uppercase tracking-[0.3em] text-zinc-400 dark:text-zinc-500">
                    <Icon name="calendar" class="w-3 h-3" />
                    <span>{post.display_date()}</span>
                    <span class="w-1 h-1 bg-zinc-300 dark:bg-zinc-800 rounded-full"></span>
                    <span>{post.read_time.as_str()}</span>
                </div>
                <h3 class="text-2xl sm:text-3xl font-display font-bold mb-4 sm:mb-6 text-zinc-900 dark:text-white group-hover:text-neon-cyan transition-colors leading-tight tracking-tight">
                    {post.title.as_str()}
                </h3>
                <div class="inline-flex items-center text-[10px] sm:text-xs font-bold text-zinc-900 dark:text-white uppercase tracking-widest group-hover:underline decoration-neon-cyan underline-offset-8">
                    "Open Journal"
                    <Icon name="chevron-right" class="w-4 h-4 ml-2 sm:ml-3" />
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn BlogList() -> impl IntoView {
    view! {
        <section id="blog" class="py-24 sm:py-40 bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <Reveal class="mb-16 sm:mb-24">
                    <div class="text-neon-cyan font-bold uppercase tracking-[0.4em] text-[10px] sm:text-xs mb-6 sm:mb-8">
                        "Journal"
                    </div>
                    <h2 class="text-4xl sm:text-6xl md:text-7xl font-display font-bold tracking-tighter mb-6 sm:mb-8 text-zinc-900 dark:text-white">
                        "Intellectual " <br /> "Property."
                    </h2>
                    <p class="text-lg sm:text-2xl text-zinc-500 max-w-2xl font-medium leading-tight">
                        "Sharing architectural patterns, design philosophies, and engineering deep-dives."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 sm:gap-10">
                    {catalog().posts.iter().map(|post| view! { <PostCard post /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn BlogDetail(post: &'static BlogPost) -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let author = &post.author;

    view! {
        <div class="min-h-screen pt-32 pb-24 bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="max-w-4xl mx-auto px-6">
                <button
                    on:click=move |_| nav.go_back()
                    class="group flex items-center space-x-4 text-zinc-500 hover:text-zinc-900 dark:hover:text-white mb-16 sm:mb-20 transition-all p-2 rounded-lg"
                >
                    <Icon name="arrow-left" class="w-6 h-6 group-hover:-translate-x-2 transition-transform" />
                    <span class="font-bold uppercase tracking-[0.4em] text-[10px] sm:text-xs">
                        "Exit Article"
                    </span>
                </button>

                <div class="mb-12 sm:mb-20">
                    <div class="flex flex-col sm:flex-row sm:items-center gap-6 mb-8 sm:mb-10">
                        <span class="inline-block px-5 py-2 bg-neon-cyan/10 text-neon-cyan text-[9px] sm:text-[10px] font-bold uppercase tracking-[0.3em] rounded-full border border-neon-cyan/20 w-max">
                            {post.category.as_str()}
                        </span>
                        <div class="flex items-center text-zinc-500 text-[10px] sm:text-xs font-bold space-x-6 tracking-widest uppercase">
                            <span class="flex items-center">
                                <Icon name="calendar" class="w-4 h-4 mr-2" />
                                {post.display_date()}
                            </span>
                            <span class="flex items-center">
                                <Icon name="clock" class="w-4 h-4 mr-2" />
                                {post.read_time.as_str()}
                            </span>
                        </div>
                    </div>
                    <h1 class="text-4xl sm:text-7xl lg:text-8xl font-display font-bold mb-8 sm:mb-12 text-zinc-900 dark:text-white leading-[1] sm:leading-[0.9] tracking-tighter">
                        {post.title.as_str()}
                    </h1>
                    <div class="flex items-center space-x-4 sm:space-x-5 py-8 sm:py-10 border-y border-zinc-100 dark:border-white/5">
                        <img
                            src=author.avatar.as_str()
                            alt=author.name.as_str()
                            class="w-12 h-12 sm:w-14 sm:h-14 rounded-2xl border border-zinc-100 dark:border-white/10"
                        />
                        <div>
                            <div class="font-bold text-zinc-900 dark:text-white text-base sm:text-lg leading-tight">
                                {author.name.as_str()}
                            </div>
                            <div class="text-[10px] sm:text-xs text-zinc-500 font-bold uppercase tracking-widest mt-1">
                                {author.role.as_str()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="prose prose-zinc dark:prose-invert prose-lg sm:prose-2xl max-w-none">
                    <p class="text-xl sm:text-3xl text-zinc-500 dark:text-zinc-400 font-medium leading-relaxed mb-12 sm:mb-16 italic border-l-4 border-neon-cyan pl-6 sm:pl-8">
                        {post.excerpt.as_str()}
                    </p>
                    <div
                        class="text-lg sm:text-2xl text-zinc-700 dark:text-zinc-300 leading-relaxed font-medium"
                        inner_html=post.content.as_str()
                    ></div>
                </div>
            </div>
        </div>
    }
}
