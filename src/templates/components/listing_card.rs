use crate::domain::ListingWithCosts;
use crate::templates::components::money::dollars;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaveAction {
    /// Visitor isn't signed in; no button.
    None,
    Save,
    Remove,
}

pub fn listing_card(item: &ListingWithCosts, action: SaveAction, best_value: bool) -> Markup {
    let l = &item.listing;
    let b = &item.cost_breakdown;

    html! {
        article class="card listing" id=(format!("listing-{}", l.id)) {
            div class="listing-head" {
                h3 { (dollars(l.price)) }
                @if let Some(county) = &l.county {
                    span class="badge" { (county) }
                }
                @if best_value {
                    span class="badge best" { "Best value" }
                }
            }
            p class="address" { (l.address) }
            p class="facts" {
                (l.bedrooms) " bed · " (l.bathrooms) " bath"
                @if let Some(sqft) = l.square_feet { " · " (sqft) " sqft" }
                @if let Some(n) = &l.neighborhood { " · " (n) }
            }

            div class="costs" {
                p class="muted" { "Total Monthly Cost" }
                p class="total" { (dollars(item.total_monthly_cost)) }
                ul class="breakdown" {
                    li { "Mortgage: " (dollars(b.mortgage)) }
                    li { "Property tax: " (dollars(b.property_tax)) }
                    li { "Insurance: " (dollars(b.insurance)) }
                    li { "Commute: " (dollars(b.commute)) }
                }
            }

            @match action {
                SaveAction::None => {},
                SaveAction::Save => {
                    form method="post" action=(format!("/saved/{}", l.id)) {
                        button type="submit" class="btn" { "Save" }
                    }
                },
                SaveAction::Remove => {
                    form method="post" action=(format!("/saved/{}/remove", l.id)) {
                        button type="submit" class="btn secondary" { "Remove" }
                    }
                },
            }
        }
    }
}
