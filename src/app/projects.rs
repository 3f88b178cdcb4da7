use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

use crate::catalog::{catalog, ArchiveRepo, Project, PROJECT_FILTERS};

use super::effects::Reveal;
use super::icon::Icon;
use super::navigation::Navigator;

/// Cards at these grid positions span two columns.
fn is_wide(index: usize) -> bool {
    index == 0 || index == 3
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let size = if is_wide(index) {
        "md:col-span-2 md:aspect-[21/9]"
    } else {
        "md:col-span-1 md:aspect-[4/5] lg:aspect-[1/1]"
    };

    view! {
        <div
            role="button"
            tabindex="0"
            aria-label=format!("View details for {}", project.title)
            on:click=move |_| nav.open_project(project)
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    nav.open_project(project);
                }
            }
            class=format!(
                "group relative overflow-hidden transition-all duration-1000 outline-none {size} aspect-[4/5] rounded-3xl bg-zinc-100 dark:bg-zinc-900 border border-zinc-200 dark:border-white/10 shadow-lg hover:shadow-2xl",
            )
        >
            <div class="absolute inset-0 overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="w-full h-full object-cover grayscale transition-all duration-[1.2s] ease-out group-hover:grayscale-0 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-zinc-950/95 via-zinc-950/40 to-transparent opacity-90 group-hover:opacity-60 transition-opacity duration-700" />
            </div>

            <div class="absolute inset-0 p-6 sm:p-12 flex flex-col justify-end">
                <div class="flex flex-wrap gap-2 mb-4 sm:mb-8 translate-y-6 opacity-0 group-hover:translate-y-0 group-hover:opacity-100 transition-all duration-700 ease-out">
                    {project
                        .tags
                        .iter()
                        .take(3)
                        .map(|tag| {
                            view! {
                                <span class="px-2.5 py-1 sm:px-3 sm:py-1.5 bg-white/10 backdrop-blur-xl text-[8px] sm:text-[10px] font-bold uppercase tracking-widest text-white rounded-lg border border-white/20">
                                    {tag.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="space-y-2 sm:space-y-4">
                    <div class="flex items-baseline space-x-2 sm:space-x-4">
                        <span class="text-neon-cyan font-display font-bold text-base sm:text-2xl opacity-60 group-hover:opacity-100 transition-opacity duration-500">
                            {format!("{:02}", index + 1)}
                        </span>
                        <h3 class="text-xl sm:text-3xl lg:text-5xl font-display font-bold text-white tracking-tighter leading-tight group-hover:text-neon-cyan transition-colors duration-500">
                            {project.title.as_str()}
                        </h3>
                    </div>
                    <p class="text-xs sm:text-lg text-zinc-300 max-w-2xl line-clamp-2 font-medium leading-relaxed">
                        {project.description.as_str()}
                    </p>
                </div>

                <div class="mt-6 sm:mt-10 flex items-center space-x-3 sm:space-x-6 translate-y-8 opacity-0 group-hover:translate-y-0 group-hover:opacity-100 transition-all duration-700 ease-in-out">
                    <span class="text-[8px] sm:text-[11px] font-bold text-white uppercase tracking-[0.4em]">
                        "Case Study"
                    </span>
                    <div class="w-8 h-8 sm:w-14 sm:h-14 rounded-full bg-white text-black flex items-center justify-center shadow-2xl transition-all duration-500 group-hover:bg-neon-cyan group-hover:scale-110">
                        <Icon name="arrow-up-right" class="w-4 h-4 sm:w-7 sm:h-7" />
                    </div>
                </div>
            </div>

            <div class="absolute top-6 right-6 sm:top-10 sm:right-10 text-white/20 group-hover:text-neon-cyan transition-colors duration-500">
                <Icon name="plus" class="w-6 h-6 sm:w-10 sm:h-10" />
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(PROJECT_FILTERS[0]);

    let filter_buttons = PROJECT_FILTERS
        .iter()
        .map(|&category| {
            view! {
                <button
                    on:click=move |_| set_filter.set(category)
                    class=move || {
                        if filter.get() == category {
                            "px-4 py-2 sm:px-8 sm:py-3 rounded-xl text-[8px] sm:text-[11px] font-bold uppercase tracking-widest transition-all duration-300 bg-zinc-900 dark:bg-white text-white dark:text-black shadow-xl ring-2 ring-neon-cyan/20"
                        } else {
                            "px-4 py-2 sm:px-8 sm:py-3 rounded-xl text-[8px] sm:text-[11px] font-bold uppercase tracking-widest transition-all duration-300 bg-zinc-50 dark:bg-zinc-900 text-zinc-500 hover:text-zinc-900 dark:hover:text-white border border-zinc-200 dark:border-white/5"
                        }
                    }
                >
                    {category}
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            id="projects"
            class="py-24 sm:py-48 bg-white dark:bg-[#030303] relative transition-colors duration-500 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto px-6 md:px-12 relative z-10">
                <div class="flex flex-col lg:grid lg:grid-cols-12 gap-10 sm:gap-16 mb-16 sm:mb-32">
                    <Reveal class="lg:col-span-8">
                        <div class="text-neon-cyan font-bold uppercase tracking-[0.6em] text-[10px] sm:text-xs mb-8 flex items-center">
                            <span class="w-8 sm:w-12 h-px bg-neon-cyan mr-4"></span>
                            "Selected Portfolios"
                        </div>
                        <h2 class="text-5xl sm:text-8xl lg:text-9xl font-display font-bold tracking-tighter text-zinc-900 dark:text-white leading-[0.85] mb-8 sm:mb-12">
                            "Recent " <br />
                            <span class="text-zinc-200 dark:text-zinc-800">"Artifacts."</span>
                        </h2>
                    </Reveal>

                    <Reveal class="lg:col-span-4 flex flex-col justify-end lg:items-end">
                        <p class="text-lg sm:text-2xl text-zinc-500 dark:text-zinc-400 font-medium leading-relaxed mb-10 lg:text-right max-w-md">
                            "A meticulously curated selection of engineering feats and aesthetic breakthroughs."
                        </p>
                        <div class="flex flex-wrap gap-2 justify-start lg:justify-end">
                            {filter_buttons}
                        </div>
                    </Reveal>
                </div>

                <Reveal class="grid grid-cols-1 md:grid-cols-2 gap-6 sm:gap-12">
                    {move || {
                        let projects = catalog().filtered_projects(filter.get());
                        if projects.is_empty() {
                            Either::Left(
                                view! {
                                    <p class="md:col-span-2 py-16 text-center text-zinc-500 font-bold uppercase tracking-[0.3em] text-xs">
                                        "No artifacts in this category yet."
                                    </p>
                                },
                            )
                        } else {
                            Either::Right(
                                projects
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, project)| view! { <ProjectCard project index /> })
                                    .collect_view(),
                            )
                        }
                    }}
                </Reveal>

                <Archive />
            </div>

            <div class="absolute inset-0 z-0 pointer-events-none opacity-[0.02] dark:opacity-[0.04]">
                <div class="h-full w-full bg-[linear-gradient(to_right,#808080_1px,transparent_1px),linear-gradient(to_bottom,#808080_1px,transparent_1px)] bg-[size:100px_100px]"></div>
            </div>
        </section>
    }
}

#[component]
fn ArchiveCard(repo: &'static ArchiveRepo) -> impl IntoView {
    view! {
        <a
            href=repo.url.as_str()
            target="_blank"
            rel="noopener noreferrer"
            aria-label=format!("Open GitHub repository {}", repo.name)
            class="group p-8 sm:p-10 rounded-3xl bg-zinc-50 dark:bg-zinc-900/50 border border-zinc-200 dark:border-white/5 hover:border-neon-cyan/50 transition-all duration-700 shadow-sm relative overflow-hidden"
        >
            <div class="flex justify-between items-start mb-8 sm:mb-10 relative z-10">
                <div class="w-10 h-10 sm:w-12 sm:h-12 bg-white dark:bg-black rounded-xl flex items-center justify-center text-neon-cyan shadow-sm border border-zinc-100 dark:border-white/5 group-hover:scale-110 transition-transform">
                    <Icon name="hash" class="w-4 h-4 sm:w-5 sm:h-5" />
                </div>
                <div class="text-right">
                    <span class="block text-[8px] sm:text-[9px] font-bold text-zinc-400 uppercase tracking-widest mb-1">
                        "Version"
                    </span>
                    <span class="text-[9px] sm:text-[10px] font-bold text-zinc-900 dark:text-white font-mono">
                        {repo.version.as_str()}
                    </span>
                </div>
            </div>

            <h5 class="text-lg sm:text-xl font-display font-bold text-zinc-900 dark:text-white mb-2 sm:mb-3 group-hover:text-neon-cyan transition-colors relative z-10">
                {repo.name.as_str()}
            </h5>
            <div class="flex items-center space-x-2 sm:space-x-3 mb-8 sm:mb-12 relative z-10">
                <div class="w-1.5 h-1.5 rounded-full bg-neon-cyan animate-pulse"></div>
                <span class="text-[10px] sm:text-xs font-bold text-zinc-500 uppercase tracking-widest">
                    {repo.tech.as_str()}
                </span>
            </div>

            <div class="flex items-center justify-between pt-6 sm:pt-8 border-t border-zinc-200 dark:border-white/5 relative z-10">
                <div class="flex items-center space-x-4 sm:space-x-6 text-zinc-400">
                    <span class="flex items-center space-x-1.5">
                        <Icon name="star" class="w-3.5 h-3.5" />
                        <span class="text-[10px] sm:text-xs font-bold">{repo.stars}</span>
                    </span>
                    <span class="flex items-center space-x-1.5">
                        <Icon name="git-fork" class="w-3.5 h-3.5" />
                        <span class="text-[10px] sm:text-xs font-bold">{repo.forks}</span>
                    </span>
                </div>
                <Icon name="arrow-up-right" class="w-3.5 h-3.5 text-zinc-300 group-hover:text-neon-cyan" />
            </div>
        </a>
    }
}

/// Other public repositories, linked out to GitHub.
#[component]
fn Archive() -> impl IntoView {
    let content = catalog();
    let github = content.profile.github.as_str();

    view! {
        <Reveal class="mt-32 sm:mt-56 pt-20 sm:pt-32 border-t border-zinc-200 dark:border-white/10">
            <div class="flex flex-col lg:flex-row lg:items-end justify-between gap-12 mb-16 sm:mb-24">
                <div class="max-w-2xl">
                    <p class="text-neon-cyan font-bold uppercase tracking-[0.5em] text-[10px] mb-6">
                        "Technical Ecosystem"
                    </p>
                    <h3 class="text-4xl sm:text-6xl lg:text-7xl font-display font-bold text-zinc-900 dark:text-white tracking-tighter leading-[1]">
                        "Explore Global " <br class="hidden sm:block" />
                        <span class="text-zinc-400 dark:text-zinc-600">"Repository Archive."</span>
                    </h3>
                </div>
                <a
                    href=github
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Visit Global GitHub Repository"
                    class="group flex items-center space-x-4 sm:space-x-6 p-2 rounded-2xl"
                >
                    <span class="text-[9px] sm:text-[10px] font-bold text-zinc-400 uppercase tracking-[0.4em]">
                        "Protocol: Master Node"
                    </span>
                    <div class="w-12 h-12 sm:w-20 sm:h-20 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-2xl flex items-center justify-center transition-all duration-700 group-hover:rotate-[360deg] group-hover:scale-110 shadow-2xl">
                        <Icon name="github" class="w-7 h-7 sm:w-10 sm:h-10" />
                    </div>
                </a>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {content.archive.iter().map(|repo| view! { <ArchiveCard repo /> }).collect_view()}
            </div>

            <div class="mt-16 sm:mt-20 flex flex-col md:flex-row items-center justify-between gap-8 py-8 sm:py-10 px-8 sm:px-10 rounded-3xl bg-zinc-900 dark:bg-white text-white dark:text-black">
                <div class="flex items-center space-x-4 sm:space-x-6">
                    <Icon name="cpu" class="w-8 h-8 sm:w-10 sm:h-10 text-neon-cyan" />
                    <div>
                        <div class="text-[8px] sm:text-[10px] font-bold uppercase tracking-[0.4em] opacity-60">
                            "System Status"
                        </div>
                        <div class="text-base sm:text-lg font-display font-bold">
                            "120+ Micro-Modules Active"
                        </div>
                    </div>
                </div>
                <a
                    href=github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="w-full sm:w-auto px-10 py-4 bg-neon-cyan text-black rounded-xl font-bold uppercase text-[10px] sm:text-xs tracking-widest text-center hover:scale-105 active:scale-95 transition-all shadow-2xl"
                >
                    "Sync Repository"
                </a>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let next = catalog().next_project(project.id);

    view! {
        <div class="min-h-screen pt-24 pb-24 sm:pt-32 bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <button
                    on:click=move |_| nav.go_back()
                    class="group flex items-center space-x-4 text-zinc-500 hover:text-zinc-900 dark:hover:text-white mb-12 sm:mb-16 transition-all p-2 rounded-lg"
                >
                    <Icon name="arrow-left" class="w-6 h-6 group-hover:-translate-x-2 transition-transform" />
                    <span class="font-bold uppercase tracking-[0.4em] text-[10px] sm:text-xs">
                        "Archive Gallery"
                    </span>
                </button>

                <div class="flex flex-col lg:grid lg:grid-cols-12 gap-8 sm:gap-16 items-start">
                    <div class="lg:col-span-7 order-2 lg:order-1">
                        <div class="aspect-[16/10] rounded-3xl overflow-hidden shadow-2xl bg-zinc-100 dark:bg-zinc-900 border border-zinc-100 dark:border-white/5 mb-8 sm:mb-12">
                            <img
                                src=project.image.as_str()
                                alt=project.title.as_str()
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <p class="text-xl sm:text-3xl text-zinc-500 dark:text-zinc-400 font-medium leading-relaxed italic border-l-4 border-neon-cyan pl-6 sm:pl-8 mb-8 sm:mb-12">
                            "Exploring the boundaries of digital experience through high-performance engineering and minimal design systems."
                        </p>
                        <div class="text-lg sm:text-2xl text-zinc-700 dark:text-zinc-300 leading-relaxed font-medium">
                            {project.description.as_str()}
                            " This production-grade application was built with a focus on scalability, performance optimization, and high-fidelity motion."
                        </div>
                    </div>

                    <div class="lg:col-span-5 order-1 lg:order-2 lg:sticky lg:top-40 w-full">
                        <div class="p-8 sm:p-12 rounded-[2.5rem] bg-zinc-50 dark:bg-white/5 border border-zinc-100 dark:border-white/10 shadow-xl">
                            <div class="text-neon-cyan font-bold uppercase tracking-[0.4em] text-[10px] mb-4 sm:mb-6">
                                "Technical Specifications"
                            </div>
                            <h1 class="text-3xl sm:text-6xl font-display font-bold mb-6 sm:mb-8 text-zinc-900 dark:text-white tracking-tight leading-none">
                                {project.title.as_str()}
                            </h1>

                            <div class="text-[10px] font-bold uppercase tracking-[0.3em] text-zinc-400 mb-3 sm:mb-4">
                                "Ecosystem Stack"
                            </div>
                            <div class="flex flex-wrap gap-2 mb-10 sm:mb-12">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-3 py-1.5 sm:px-4 sm:py-2 bg-white dark:bg-white/5 border border-zinc-200 dark:border-white/10 text-zinc-600 dark:text-zinc-400 rounded-lg text-[10px] sm:text-xs font-bold uppercase tracking-wider">
                                                {tag.as_str()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="flex flex-col sm:flex-row gap-3 sm:gap-4">
                                <a
                                    href=project.live.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 py-4 sm:py-5 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-xl font-bold text-center flex items-center justify-center space-x-3 shadow-xl"
                                >
                                    <span>"Visit Product"</span>
                                    <Icon name="link" class="w-4 h-4 sm:w-5 sm:h-5" />
                                </a>
                                <a
                                    href=project.github.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 py-4 sm:py-5 bg-white dark:bg-white/5 border border-zinc-200 dark:border-white/10 text-zinc-900 dark:text-white rounded-xl font-bold text-center flex items-center justify-center space-x-3"
                                >
                                    <span>"Open Source"</span>
                                    <Icon name="github" class="w-4 h-4 sm:w-5 sm:h-5" />
                                </a>
                            </div>
                        </div>
                    </div>
                </div>

                {next
                    .map(|next| {
                        view! {
                            <div class="mt-20 sm:mt-32 pt-16 sm:pt-24 border-t border-zinc-100 dark:border-white/5 flex flex-col sm:flex-row justify-between items-center gap-8">
                                <div class="text-center sm:text-left">
                                    <div class="text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-500 mb-2 sm:mb-4">
                                        "Next Entry"
                                    </div>
                                    <h2
                                        role="button"
                                        tabindex="0"
                                        on:click=move |_| nav.open_project(next)
                                        on:keydown=move |ev: KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                nav.open_project(next);
                                            }
                                        }
                                        class="text-2xl sm:text-5xl font-display font-bold text-zinc-900 dark:text-white cursor-pointer hover:text-neon-cyan transition-colors p-2 rounded-xl"
                                    >
                                        {next.title.as_str()}
                                    </h2>
                                </div>
                                <button
                                    aria-label="Next Project"
                                    on:click=move |_| nav.open_project(next)
                                    class="w-16 h-16 sm:w-20 sm:h-20 rounded-full bg-zinc-900 dark:bg-white flex items-center justify-center text-white dark:text-black hover:scale-110 transition-transform shadow-2xl"
                                >
                                    <Icon name="chevron-right" class="w-8 h-8 sm:w-10 sm:h-10" />
                                </button>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

