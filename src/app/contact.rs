use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::effects::{MagneticButton, Reveal};
use super::icon::Icon;

const FIELD_CLASS: &str = "w-full bg-white dark:bg-zinc-900 border border-zinc-200 dark:border-white/5 rounded-xl sm:rounded-2xl p-4 sm:p-6 focus:border-neon-cyan/50 text-zinc-900 dark:text-white transition-all font-medium shadow-sm text-sm sm:text-base outline-none";
const LABEL_CLASS: &str =
    "text-[9px] sm:text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-500 ml-2";

/// Contact form. Nothing is sent anywhere; submitting only flips to the
/// confirmation panel.
#[component]
pub fn Contact() -> impl IntoView {
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted");
        set_submitted.set(true);
    };

    view! {
        <section id="contact" class="py-20 sm:py-48 bg-white dark:bg-[#030303] transition-colors duration-500">
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 sm:gap-20 items-center">
                    <Reveal class="lg:col-span-5 text-center lg:text-left">
                        <div class="text-neon-cyan font-bold uppercase tracking-[0.4em] text-[10px] sm:text-xs mb-6 sm:mb-8">
                            "Interaction"
                        </div>
                        <h2 class="text-5xl sm:text-8xl font-display font-bold mb-6 sm:mb-10 text-zinc-900 dark:text-white tracking-tighter leading-none">
                            "Let's build " <br /> "Value."
                        </h2>
                        <p class="text-lg sm:text-2xl text-zinc-500 dark:text-zinc-400 mb-10 sm:mb-16 leading-tight font-medium">
                            "Drop a brief or say hello. I'm usually around for high-end collaboration inquiries."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center justify-center lg:justify-start sm:space-x-6 space-y-6 sm:space-y-0 group">
                            <div class="w-16 h-16 sm:w-20 sm:h-20 rounded-2xl bg-zinc-900 dark:bg-white flex items-center justify-center text-white dark:text-black shadow-2xl transition-transform group-hover:rotate-12">
                                <Icon name="mail" class="w-8 h-8 sm:w-10 sm:h-10" />
                            </div>
                            <div class="text-center sm:text-left">
                                <div class="text-[9px] sm:text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-500 mb-1">
                                    "Electronic Mail"
                                </div>
                                <div class="text-xl sm:text-2xl font-display font-bold text-zinc-900 dark:text-white tracking-tight">
                                    "hello@luxeporto.io"
                                </div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal class="lg:col-span-7">
                        <div class="p-6 sm:p-12 rounded-3xl bg-zinc-50 dark:bg-white/5 border border-zinc-100 dark:border-white/10 transition-all shadow-xl backdrop-blur-3xl overflow-hidden relative">
                            {move || {
                                if submitted.get() {
                                    Either::Left(
                                        view! {
                                            <div class="py-16 sm:py-24 flex flex-col items-center text-center">
                                                <div class="w-16 h-16 sm:w-24 sm:h-24 bg-neon-cyan/10 rounded-full flex items-center justify-center text-neon-cyan mb-8 sm:mb-10 animate-bounce">
                                                    <Icon name="check-circle" class="w-10 h-10 sm:w-12 sm:h-12" />
                                                </div>
                                                <h3 class="text-3xl sm:text-4xl font-display font-bold mb-4 sm:mb-6 text-zinc-900 dark:text-white tracking-tight">
                                                    "Protocol Dispatched."
                                                </h3>
                                                <p class="text-lg sm:text-xl text-zinc-500 dark:text-zinc-400 max-w-sm leading-relaxed mb-10 sm:mb-12 font-medium">
                                                    "Your request has been successfully transmitted. Expect a response within one business cycle."
                                                </p>
                                                <button
                                                    on:click=move |_| set_submitted.set(false)
                                                    class="text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-400 dark:text-zinc-500 hover:text-zinc-900 dark:hover:text-white transition-all py-3 px-8 border border-zinc-200 dark:border-white/10 rounded-full"
                                                >
                                                    "Resubmit Protocol"
                                                </button>
                                            </div>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <form class="space-y-6 sm:space-y-10 relative z-10" on:submit=on_submit>
                                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 sm:gap-8">
                                                    <div class="space-y-2 sm:space-y-3">
                                                        <label class=LABEL_CLASS for="name-field">
                                                            "Identify"
                                                        </label>
                                                        <input
                                                            id="name-field"
                                                            type="text"
                                                            placeholder="Your Name"
                                                            class=FIELD_CLASS
                                                            required=true
                                                        />
                                                    </div>
                                                    <div class="space-y-2 sm:space-y-3">
                                                        <label class=LABEL_CLASS for="email-field">
                                                            "Connection"
                                                        </label>
                                                        <input
                                                            id="email-field"
                                                            type="email"
                                                            placeholder="Email Address"
                                                            class=FIELD_CLASS
                                                            required=true
                                                        />
                                                    </div>
                                                </div>
                                                <div class="space-y-2 sm:space-y-3">
                                                    <label class=LABEL_CLASS for="message-field">
                                                        "Manifesto"
                                                    </label>
                                                    <textarea
                                                        id="message-field"
                                                        rows="4"
                                                        placeholder="Brief details about the project..."
                                                        class=format!("{FIELD_CLASS} resize-none")
                                                        required=true
                                                    ></textarea>
                                                </div>
                                                <MagneticButton
                                                    submit=true
                                                    class="w-full py-6 sm:py-8 bg-zinc-900 dark:bg-white text-white dark:text-black rounded-2xl font-display font-bold text-xl sm:text-2xl flex items-center justify-center group shadow-2xl hover:scale-[1.02] active:scale-95 transition-all"
                                                >
                                                    "Submit Proposal"
                                                    <Icon name="chevron-right" class="ml-3 sm:ml-4 w-6 h-6 sm:w-8 sm:h-8" />
                                                </MagneticButton>
                                            </form>
                                        },
                                    )
                                }
                            }}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
