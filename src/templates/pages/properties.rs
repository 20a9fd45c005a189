use crate::db::listings::ListingFilter;
use crate::db::users::User;
use crate::domain::ListingWithCosts;
use crate::templates::{
    components::{listing_card, SaveAction},
    desktop_layout,
};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub user: Option<&'a User>,
    pub filter: ListingFilter,
    pub counties: Vec<(String, i64)>,
    pub results: Vec<ListingWithCosts>,
    pub best_value_id: Option<i64>,
}

fn num<T: ToString>(v: Option<T>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

pub fn properties_page(vm: &SearchVm) -> Markup {
    let action = if vm.user.is_some() {
        SaveAction::Save
    } else {
        SaveAction::None
    };
    let selected = vm.filter.county.as_deref();

    desktop_layout(
        "Search Properties",
        vm.user,
        html! {
            h1 { "Search Properties" }

            form method="get" action="/properties" class="card filters" {
                input type="number" name="minPrice" placeholder="Min Price" min="0" value=(num(vm.filter.min_price));
                input type="number" name="maxPrice" placeholder="Max Price" min="0" value=(num(vm.filter.max_price));
                input type="number" name="bedrooms" placeholder="Bedrooms" min="0" value=(num(vm.filter.bedrooms));
                select name="county" {
                    option value="" selected[selected.is_none()] { "All Counties" }
                    @for (county, n) in &vm.counties {
                        option value=(county) selected[selected == Some(county.as_str())] {
                            (county) " (" (n) ")"
                        }
                    }
                }
                button type="submit" class="primary" { "Search" }
                a href="/properties" class="btn secondary" { "Clear Filters" }
            }

            p class="muted" { (vm.results.len()) " properties found" }

            div class="grid" {
                @for item in &vm.results {
                    (listing_card(item, action, vm.best_value_id == Some(item.listing.id)))
                }
            }
        },
    )
}
