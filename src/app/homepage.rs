use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    navbar::{use_page_chrome, NavBar},
    projects::Projects,
    skills::Skills,
    Footer,
};
use crate::content::{ContactLink, CONTACT_LINKS, PROFILE};

#[component]
pub fn HomePage() -> impl IntoView {
    let chrome = use_page_chrome();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-slate-50 text-slate-900 antialiased">
            <NavBar chrome />
            <main class="max-w-6xl mx-auto px-6 pt-24 pb-28">
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="grid md:grid-cols-2 gap-8 items-center mt-6">
            <div class="animate-slide-in">
                <h1 class="text-4xl md:text-5xl font-extrabold leading-tight">
                    "Hi, I'm " <span class="text-indigo-600">{PROFILE.name}</span> "."
                </h1>
                <p class="mt-4 text-slate-600 max-w-xl">{PROFILE.pitch}</p>

                <div class="mt-6 flex flex-wrap gap-3">
                    <a
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-lg border border-slate-200 hover:shadow-md transition"
                        href="#projects"
                    >
                        "View projects"
                    </a>
                    <a
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-indigo-600 text-white shadow hover:scale-105 transition"
                        href="#contact"
                    >
                        "Contact me"
                    </a>
                </div>

                <div class="mt-6 flex gap-3 text-slate-500 text-sm">
                    <div>"📍 " {PROFILE.location}</div>
                    <div>"•"</div>
                    <div>{PROFILE.availability}</div>
                </div>
            </div>

            <div class="w-full flex justify-center">
                <div class="w-64 h-64 rounded-2xl bg-gradient-to-tr from-indigo-100 to-pink-50 flex items-center justify-center shadow-2xl overflow-hidden relative">
                    <img
                        src=PROFILE.photo_url
                        alt="profile"
                        class="w-56 h-56 object-cover rounded-xl relative z-10"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="mt-12 bg-white rounded-2xl p-8 shadow-sm">
            <h3 class="text-2xl font-semibold">"About me"</h3>
            <p class="mt-4 text-slate-600">{PROFILE.about}</p>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="mt-12 p-8 rounded-2xl">
            <div class="bg-white p-6 rounded-lg shadow-sm">
                <h3 class="text-2xl font-semibold">"Let’s Connect!"</h3>
                <div class="mt-6 flex flex-wrap gap-3">
                    {CONTACT_LINKS.iter().map(|link| view! { <GlowButton link /> }).collect_view()}
                </div>
                <div class="mt-6 text-sm text-slate-500">
                    "Or send me a message. I typically reply within a few business days."
                </div>
            </div>
        </section>
    }
}

#[component]
fn GlowButton(link: &'static ContactLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="relative inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-indigo-600 text-white shadow-lg transform-gpu transition hover:scale-105"
            style="box-shadow: 0 6px 18px rgba(99,102,241,0.18), inset 0 -4px 12px rgba(0,0,0,0.04)"
        >
            <span
                class="absolute -inset-px rounded-lg opacity-0 hover:opacity-100 transition duration-300"
                style="box-shadow: 0 14px 30px rgba(99,102,241,0.16)"
            ></span>
            {link.label}
        </a>
    }
}
