use maud::{html, Markup, DOCTYPE};

pub struct PageConfig<'a> {
    pub title: &'a str,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
            }
            body {
                (content)
            }
        }
    }
}
