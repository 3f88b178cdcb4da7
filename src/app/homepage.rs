use leptos::prelude::*;

use crate::catalog::catalog;
use crate::nav::Anchor;

use super::blog::BlogList;
use super::contact::Contact;
use super::effects::{MagneticButton, Reveal, RevealScope};
use super::icon::Icon;
use super::navigation::Navigator;
use super::projects::Projects;

#[component]
pub fn MainView() -> impl IntoView {
    let nav = expect_context::<Navigator>();
    RevealScope::provide();
    Effect::new(move |_| nav.main_mounted());

    view! {
        <Hero />
        <div class="divider-line" />
        <Stats />
        <Expertise />
        <Process />
        <div class="divider-line" />
        <Projects />
        <Experience />
        <Testimonials />
        <BlogList />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let profile = &catalog().profile;
    let to_projects = Callback::new(move |_| nav.navigate(Anchor::from_id("projects")));

    view! {
        <section class="relative min-h-screen flex items-center pt-40 sm:pt-48 lg:pt-32 overflow-hidden bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="absolute top-0 left-0 w-full h-full pointer-events-none z-0">
                <div class="absolute top-[10%] -left-[20%] w-[100vw] h-[100vw] bg-neon-cyan/5 dark:bg-neon-cyan/10 blur-[180px] rounded-full animate-pulse-slow opacity-40" />
                <div class="absolute -bottom-[20%] -right-[20%] w-[80vw] h-[80vw] bg-neon-indigo/5 dark:bg-neon-indigo/10 blur-[180px] rounded-full animate-float opacity-40" />
            </div>

            <div class="max-w-7xl mx-auto px-6 md:px-12 relative z-10 py-12 sm:py-20">
                <div class="max-w-5xl">
                    <Reveal class="inline-flex items-center space-x-3 px-5 py-2.5 rounded-full border border-zinc-200 dark:border-white/10 bg-zinc-100/50 dark:bg-white/5 backdrop-blur-xl text-[10px] sm:text-sm font-bold mb-10 sm:mb-12 text-zinc-900 dark:text-white">
                        <span class="flex h-2.5 w-2.5 rounded-full bg-green-500 animate-pulse"></span>
                        <span class="tracking-widest uppercase opacity-80">
                            {profile.availability.as_str()}
                        </span>
                    </Reveal>

                    <Reveal>
                        <h1 class="text-5xl sm:text-7xl md:text-8xl lg:text-9xl font-display font-bold tracking-tighter mb-8 sm:mb-10 leading-[0.9] text-zinc-900 dark:text-white">
                            "Engineering " <br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-zinc-900 via-zinc-600 to-zinc-400 dark:from-white dark:via-zinc-400 dark:to-zinc-600">
                                "Digital Value."
                            </span>
                        </h1>
                    </Reveal>

                    <Reveal>
                        <p class="text-lg sm:text-2xl md:text-3xl text-zinc-500 dark:text-zinc-400 max-w-3xl mb-12 sm:mb-14 leading-tight font-medium">
                            "I design and build "
                            <span class="text-zinc-900 dark:text-white font-semibold">
                                "ultra-premium production ecosystems"
                            </span>
                            " that combine aesthetic mastery with industrial-grade engineering."
                        </p>
                    </Reveal>

                    <Reveal class="flex flex-col sm:flex-row gap-6 items-start sm:items-center">
                        <MagneticButton
                            class="w-full sm:w-auto px-10 sm:px-12 py-5 sm:py-6 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-2xl font-display font-bold text-lg sm:text-xl flex items-center justify-center group shadow-2xl transition-all hover:scale-105 active:scale-95"
                            on_press=to_projects
                        >
                            "The Portfolio"
                            <Icon name="arrow-up-right" class="ml-3 w-6 h-6" />
                        </MagneticButton>
                        <div class="flex -space-x-3 sm:-space-x-4 items-center">
                            {(1..=3)
                                .map(|i| {
                                    view! {
                                        <img
                                            src=format!("https://picsum.photos/seed/face{i}/100/100")
                                            class="w-10 h-10 sm:w-12 sm:h-12 rounded-full border-4 border-white dark:border-[#030303] shadow-xl"
                                            alt="Client"
                                        />
                                    }
                                })
                                .collect_view()}
                            <div class="ml-4 sm:ml-6 pl-2 flex flex-col">
                                <span class="text-xs sm:text-sm font-bold text-zinc-900 dark:text-white tracking-wide uppercase">
                                    "Trusted by"
                                </span>
                                <span class="text-[9px] sm:text-[10px] font-bold text-zinc-500 uppercase tracking-[0.2em]">
                                    "Top 1% Creators"
                                </span>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 hidden sm:flex flex-col items-center space-y-4 opacity-30 animate-bounce">
                <span class="text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-900 dark:text-white">
                    "Scroll"
                </span>
                <div class="w-px h-12 sm:h-16 bg-gradient-to-b from-zinc-900 dark:from-white to-transparent"></div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-16 sm:py-20 border-y border-zinc-100 dark:border-white/5 bg-white dark:bg-[#030303]">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-2 lg:grid-cols-4 gap-8 sm:gap-12 text-zinc-900 dark:text-white">
                {catalog()
                    .stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <Reveal class="text-center group">
                                <div class="mb-3 sm:mb-4 flex justify-center text-neon-cyan opacity-60 group-hover:opacity-100 transition-all duration-500">
                                    <Icon name=stat.icon.as_str() class="w-6 h-6 sm:w-8 sm:h-8" />
                                </div>
                                <div class="text-3xl sm:text-5xl md:text-6xl font-display font-bold mb-1 sm:mb-2">
                                    {stat.value.as_str()}
                                </div>
                                <div class="text-[9px] sm:text-[10px] md:text-xs font-bold uppercase tracking-[0.3em] text-zinc-500">
                                    {stat.label.as_str()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] accent: String,
) -> impl IntoView {
    view! {
        <div class="text-neon-cyan font-bold uppercase tracking-[0.4em] text-[10px] sm:text-xs mb-6 sm:mb-8">
            {eyebrow}
        </div>
        <h2 class="text-4xl sm:text-6xl md:text-7xl font-display font-bold leading-tight tracking-tighter text-zinc-900 dark:text-white">
            {title}
            " "
            <span class="text-zinc-300 dark:text-zinc-600">{accent}</span>
        </h2>
    }
}

#[component]
fn Expertise() -> impl IntoView {
    view! {
        <section id="about" class="py-24 sm:py-40 relative bg-white dark:bg-[#030303]">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="grid lg:grid-cols-2 gap-12 sm:gap-20 items-end mb-16 sm:mb-24">
                    <Reveal>
                        <SectionHeading
                            eyebrow="Technical Stack"
                            title="The Toolkit of Modern"
                            accent="Product Engineering."
                        />
                    </Reveal>
                    <Reveal>
                        <p class="text-lg sm:text-xl md:text-2xl text-zinc-500 dark:text-zinc-400 font-medium leading-relaxed">
                            "I architect solutions using a stack built for massive scale, extreme performance, and high-fidelity motion."
                        </p>
                    </Reveal>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {catalog()
                        .skill_categories
                        .iter()
                        .map(|category| {
                            view! {
                                <Reveal class="p-8 sm:p-10 rounded-3xl bg-zinc-50 dark:bg-white/5 border border-zinc-100 dark:border-white/10 premium-card">
                                    <div class="w-12 h-12 sm:w-16 sm:h-16 bg-white dark:bg-zinc-900 rounded-2xl flex items-center justify-center mb-8 sm:mb-10 text-neon-cyan shadow-sm">
                                        <Icon name=category.icon.as_str() class="w-6 h-6 sm:w-8 sm:h-8" />
                                    </div>
                                    <h3 class="font-display font-bold text-xl sm:text-2xl mb-6 sm:mb-8 text-zinc-900 dark:text-white">
                                        {category.title.as_str()}
                                    </h3>
                                    <ul class="space-y-4 sm:space-y-5">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="flex items-center text-zinc-500 dark:text-zinc-400 font-bold text-sm sm:text-base group">
                                                        <div class="w-1.5 h-1.5 rounded-full bg-neon-cyan mr-3 sm:mr-4 group-hover:scale-150 transition-transform"></div>
                                                        {skill.name.as_str()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Process() -> impl IntoView {
    view! {
        <section class="py-24 sm:py-40 bg-zinc-50 dark:bg-black transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <Reveal class="mb-20 sm:mb-24">
                    <SectionHeading eyebrow="Methodology" title="How I Deliver Success." />
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 sm:gap-12">
                    {catalog()
                        .process
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <Reveal class="relative p-8 sm:p-10 rounded-3xl bg-white dark:bg-zinc-900/50 border border-zinc-100 dark:border-white/10 shadow-sm">
                                    <div class="text-zinc-100 dark:text-white/5 absolute top-6 sm:top-8 right-6 sm:right-8 text-6xl sm:text-8xl font-display font-bold leading-none select-none">
                                        {format!("{:02}", i + 1)}
                                    </div>
                                    <div class="w-12 h-12 sm:w-14 sm:h-14 bg-neon-cyan/10 rounded-2xl flex items-center justify-center text-neon-cyan mb-8 sm:mb-10 relative z-10">
                                        <Icon name=step.icon.as_str() class="w-6 h-6 sm:w-7 sm:h-7" />
                                    </div>
                                    <h3 class="text-xl sm:text-2xl font-display font-bold text-zinc-900 dark:text-white mb-4 sm:mb-6 relative z-10">
                                        {step.title.as_str()}
                                    </h3>
                                    <p class="text-base sm:text-lg text-zinc-500 dark:text-zinc-400 leading-relaxed font-medium relative z-10">
                                        {step.description.as_str()}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-24 sm:py-40 bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="grid lg:grid-cols-2 gap-12 sm:gap-20 mb-16 sm:mb-24 items-end">
                    <Reveal>
                        <SectionHeading eyebrow="Career Path" title="Industrial Experience." />
                    </Reveal>
                    <Reveal>
                        <p class="text-lg sm:text-xl md:text-2xl text-zinc-500 dark:text-zinc-400 font-medium leading-relaxed">
                            "A history of architecting scalable systems and delivering pixel-perfect interfaces for tech leaders."
                        </p>
                    </Reveal>
                </div>

                <div class="space-y-8 sm:space-y-12">
                    {catalog()
                        .experience
                        .iter()
                        .map(|exp| {
                            view! {
                                <Reveal class="group relative p-8 sm:p-12 rounded-3xl bg-zinc-50 dark:bg-white/5 border border-zinc-100 dark:border-white/10 transition-all hover:bg-zinc-100 dark:hover:bg-white/10 shadow-sm">
                                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-8">
                                        <div class="space-y-3 sm:space-y-4 text-zinc-900 dark:text-white">
                                            <div class="text-neon-cyan font-bold uppercase tracking-widest text-[10px] sm:text-xs">
                                                {exp.period.as_str()}
                                            </div>
                                            <h3 class="text-2xl sm:text-4xl font-display font-bold tracking-tight">
                                                {exp.company.as_str()}
                                            </h3>
                                            <div class="text-lg sm:text-xl text-zinc-500 dark:text-zinc-400 font-bold">
                                                {exp.role.as_str()}
                                            </div>
                                        </div>
                                        <p class="text-base sm:text-lg text-zinc-500 max-w-xl leading-relaxed font-medium">
                                            {exp.description.as_str()}
                                        </p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-24 sm:py-40 bg-zinc-50 dark:bg-[#050505] transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12 text-center mb-16 sm:mb-24">
                <Reveal>
                    <SectionHeading eyebrow="Validation" title="Trust from the Best." />
                </Reveal>
            </div>

            <div class="max-w-7xl mx-auto px-6 md:px-12 grid grid-cols-1 md:grid-cols-3 gap-8 sm:gap-10">
                {catalog()
                    .testimonials
                    .iter()
                    .map(|t| {
                        view! {
                            <Reveal class="p-8 sm:p-10 rounded-3xl bg-white dark:bg-white/5 border border-zinc-100 dark:border-white/10 relative shadow-sm">
                                <div class="mb-8 text-neon-cyan opacity-40 dark:opacity-20">
                                    <Icon name="users" class="w-10 h-10 sm:w-12 sm:h-12" />
                                </div>
                                <p class="text-lg sm:text-xl text-zinc-600 dark:text-zinc-300 italic mb-10 sm:mb-12 leading-relaxed font-medium">
                                    {format!("\u{201c}{}\u{201d}", t.content)}
                                </p>
                                <div class="flex items-center space-x-4">
                                    <img
                                        src=t.avatar.as_str()
                                        alt=t.name.as_str()
                                        class="w-12 h-12 sm:w-14 sm:h-14 rounded-2xl border border-zinc-100 dark:border-white/10 shadow-sm"
                                    />
                                    <div class="text-left">
                                        <div class="font-bold text-zinc-900 dark:text-white text-base sm:text-lg">
                                            {t.name.as_str()}
                                        </div>
                                        <div class="text-[9px] sm:text-[10px] text-zinc-500 font-bold uppercase tracking-widest">
                                            {format!("{} @ {}", t.role, t.company)}
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
