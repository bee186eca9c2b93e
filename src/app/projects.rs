use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="mt-10">
            <h3 class="text-2xl font-semibold">"Selected projects"</h3>
            <div class="mt-6 grid md:grid-cols-3 gap-6">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (target, rel) = if project.has_link() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=project.link
            target=target
            rel=rel
            class="block bg-white rounded-2xl p-6 shadow-lg transition-transform hover:-translate-y-2 duration-300 will-change-transform"
        >
            <h4 class="font-semibold">{project.title}</h4>
            <p class="mt-2 text-sm text-slate-600">{project.description}</p>
            <div class="mt-4 flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! { <span class="text-xs px-2 py-1 rounded bg-slate-100">{*tag}</span> }
                    })
                    .collect_view()}
            </div>
        </a>
    }
}
