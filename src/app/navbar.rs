use leptos::prelude::*;

use crate::{chrome::Section, content::PROFILE};

/// Reactive view of the page chrome for components.
#[derive(Clone, Copy)]
pub struct PageChrome {
    pub visible: ReadSignal<bool>,
    pub active: ReadSignal<Section>,
    pub navigate: Callback<Section>,
}

/// Mounts the scroll/section controller for the lifetime of the calling component.
///
/// On the server nothing is mounted: the navbar stays visible and `home` stays active.
pub fn use_page_chrome() -> PageChrome {
    let (visible, set_visible) = signal(true);
    let (active, set_active) = signal(Section::Home);

    #[cfg(feature = "hydrate")]
    let navigate = {
        use crate::chrome::{web::WebHost, ChromeConfig, ChromeError, PageChromeController};

        let controller = StoredValue::new_local(None::<PageChromeController<WebHost>>);

        // effects run after hydration, so the section elements are in the document
        Effect::new(move |_| {
            let mounted = WebHost::new()
                .map_err(ChromeError::from)
                .and_then(|host| {
                    let mut chrome = PageChromeController::new(host, ChromeConfig::default());
                    chrome.on_scroll_change(move |visible| set_visible.set(visible));
                    chrome.on_active_section_change(move |section| set_active.set(section));
                    chrome.mount()?;
                    Ok(chrome)
                });
            match mounted {
                Ok(chrome) => controller.set_value(Some(chrome)),
                Err(err) => log::error!("page chrome unavailable: {err}"),
            }
        });

        on_cleanup(move || {
            controller.try_update_value(|chrome| {
                if let Some(mut chrome) = chrome.take() {
                    chrome.unmount();
                }
            });
        });

        Callback::new(move |section: Section| {
            controller.with_value(|chrome| {
                if let Some(chrome) = chrome {
                    chrome.navigate(section.id());
                }
            });
        })
    };

    #[cfg(not(feature = "hydrate"))]
    let navigate = {
        let _ = (set_visible, set_active);
        Callback::new(|_: Section| {})
    };

    PageChrome {
        visible,
        active,
        navigate,
    }
}

#[component]
pub fn NavBar(chrome: PageChrome) -> impl IntoView {
    let PageChrome {
        visible,
        active,
        navigate,
    } = chrome;

    view! {
        <header
            class="fixed left-0 right-0 z-50 backdrop-blur-md bg-white/60 border-b border-slate-200 transition-all duration-300 ease-out"
            style:transform=move || {
                if visible.get() { "translateY(0px)" } else { "translateY(-80px)" }
            }
            style:opacity=move || if visible.get() { "1" } else { "0" }
        >
            <div class="max-w-6xl mx-auto px-6 py-3 flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <div class="w-10 h-10 rounded-full bg-gradient-to-tr from-indigo-500 to-pink-500 flex items-center justify-center text-white font-bold">
                        {PROFILE.initials}
                    </div>
                    <div>
                        <div class="text-sm font-medium">{PROFILE.name}</div>
                        <div class="text-xs text-slate-600">{PROFILE.title}</div>
                    </div>
                </div>

                <nav class="hidden md:flex gap-6 text-sm text-slate-700">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! { <NavLink section active navigate /> }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-3">
                    <a
                        href=PROFILE.resume_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden md:inline-block bg-green-600 text-white px-4 py-2 rounded-lg text-sm shadow hover:scale-105 transform-gpu transition"
                    >
                        "Resume"
                    </a>
                    <button
                        class="md:hidden p-2 rounded-md bg-white/60 border"
                        on:click=move |_| navigate.run(Section::Contact)
                    >
                        "Contact"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(
    section: Section,
    active: ReadSignal<Section>,
    navigate: Callback<Section>,
) -> impl IntoView {
    let is_active = move || active.get() == section;
    view! {
        <button
            class=move || {
                if is_active() {
                    "relative px-2 py-1 rounded-md hover:text-slate-900 text-indigo-600 font-semibold"
                } else {
                    "relative px-2 py-1 rounded-md hover:text-slate-900"
                }
            }
            on:click=move |_| navigate.run(section)
        >
            {section.label()}
            <Show when=is_active>
                <span class="absolute -bottom-3 left-0 right-0 h-1 bg-indigo-600 rounded-full"></span>
            </Show>
        </button>
    }
}
