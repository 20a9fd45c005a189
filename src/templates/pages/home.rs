// templates/pages/home.rs

use crate::db::listings::ListingStats;
use crate::db::users::User;
use crate::domain::ListingWithCosts;
use crate::templates::{
    components::{dollars, listing_card, stat_card, SaveAction},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub user: Option<&'a User>,
    pub stats: ListingStats,
    pub featured: Vec<ListingWithCosts>,
}

fn or_dash(v: Option<i64>) -> String {
    v.map(dollars).unwrap_or_else(|| "—".to_string())
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let save = if vm.user.is_some() {
        SaveAction::Save
    } else {
        SaveAction::None
    };

    desktop_layout(
        "Dashboard",
        vm.user,
        html! {
            h1 {
                @if let Some(u) = vm.user {
                    "Welcome back, " (u.name)
                } @else {
                    "Find a home you can afford"
                }
            }

            section class="stats" {
                (stat_card("Total Properties", &vm.stats.total.to_string()))
                (stat_card("Average Price", &or_dash(vm.stats.avg_price)))
                (stat_card("Lowest Price", &or_dash(vm.stats.min_price)))
                (stat_card("Highest Price", &or_dash(vm.stats.max_price)))
            }

            section {
                h2 { "Most affordable listings" }
                @if vm.featured.is_empty() {
                    p class="muted" { "No listings yet." }
                }
                div class="grid" {
                    @for item in &vm.featured {
                        (listing_card(item, save, false))
                    }
                }
                p { a href="/properties" { "Browse all properties →" } }
            }
        },
    )
}

