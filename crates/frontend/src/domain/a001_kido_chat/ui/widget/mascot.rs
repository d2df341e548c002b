use leptos::prelude::*;

/// Bouncing panda shown above the title
#[component]
pub fn Mascot() -> impl IntoView {
    view! {
        <div class="kido-mascot">
            <svg
                width="160"
                height="160"
                viewBox="0 0 200 200"
                xmlns="http://www.w3.org/2000/svg"
            >
                <circle cx="100" cy="100" r="90" fill="white" />
                <circle cx="60" cy="80" r="25" fill="#a9e5c1" />
                <circle cx="140" cy="80" r="25" fill="#a9e5c1" />
                <circle cx="70" cy="100" r="15" fill="black" />
                <circle cx="130" cy="100" r="15" fill="black" />
                <circle cx="75" cy="95" r="5" fill="white" />
                <circle cx="135" cy="95" r="5" fill="white" />
                <ellipse cx="100" cy="135" rx="25" ry="15" fill="#a9e5c1" />
            </svg>
        </div>
    }
}
