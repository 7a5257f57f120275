//! Home Page

use leptos::*;
use leptos_router::*;

/// Landing page with feature cards
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="space-y-8">
            <h2 class="text-3xl font-bold">"Welcome to On-Chain LinkTree"</h2>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <FeatureCard
                    title="🔗 Decentralized"
                    body="Store your links on-chain on the Sui blockchain"
                />
                <FeatureCard
                    title="🚀 Hosted on Walrus"
                    body="Your profile is hosted on Walrus decentralized storage"
                />
                <FeatureCard
                    title="📛 Branded with SuiNS"
                    body="Get a .sui domain name for your profile"
                />
            </div>

            <div class="flex space-x-4">
                <A
                    href="/create"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Create Profile"
                </A>
                <A
                    href="/view"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "View Profile"
                </A>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-400">{body}</p>
        </div>
    }
}
