use crate::db::users::User;
use crate::domain::ListingWithCosts;
use crate::templates::{
    components::{listing_card, SaveAction},
    desktop_layout,
};
use maud::{html, Markup};

pub fn saved_page(user: &User, saved: &[ListingWithCosts]) -> Markup {
    desktop_layout(
        "Saved Properties",
        Some(user),
        html! {
            h1 { "Saved Properties" }
            @if saved.is_empty() {
                div class="card empty" {
                    p { "No saved properties yet. Start exploring and save your favorites!" }
                    a href="/properties" { "Search properties" }
                }
            } @else {
                div class="grid" {
                    @for item in saved {
                        (listing_card(item, SaveAction::Remove, false))
                    }
                }
            }
        },
    )
}
