use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

/// Routes advertised on the index page, in display order
pub const AVAILABLE_ROUTES: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/start_date",
    "/api/v1.0/start_date/end_date",
];

pub fn home_page() -> Markup {
    let config = PageConfig {
        title: "Climate App API",
    };

    base(&config, content())
}

fn content() -> Markup {
    html! {
        "Welcome to the Climate App API!"
        br;
        br;
        "Available Routes:"
        br;
        @for (i, route) in AVAILABLE_ROUTES.iter().enumerate() {
            @if i > 0 {
                br;
            }
            (route)
        }
    }
}
