use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    chrome::{RevealLatch, REVEAL_THRESHOLD},
    content::{Skill, SKILLS},
};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="mt-12 bg-white rounded-2xl p-8 shadow-sm">
            <h3 class="text-2xl font-semibold">"Skills"</h3>
            <div class="mt-6 space-y-4">
                {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </div>
        </section>
    }
}

/// Fills once when it first scrolls into view and stays filled.
#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let mut latch = RevealLatch::new(revealed.get_untracked());
            if latch.observe(entries.iter().map(|entry| entry.is_intersecting())) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div node_ref=target class="w-full">
            <div class="flex justify-between items-center mb-2">
                <div class="text-sm font-medium">{skill.name}</div>
            </div>
            <div class="w-full bg-slate-100 rounded-full h-3 overflow-hidden">
                <div
                    class="h-3 rounded-full bg-gradient-to-r from-indigo-500 to-pink-500 transition-[width] duration-900 ease-out"
                    style:width=move || {
                        if revealed.get() { skill.width() } else { "0%".to_string() }
                    }
                ></div>
            </div>
        </div>
    }
}
