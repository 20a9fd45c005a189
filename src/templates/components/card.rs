use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="card stat" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}
