use maud::{html, Markup};

pub fn render_footer(year: i32) -> Markup {
    html! {
        p {
            "© " span id="year" { (year) } " Neon Nexus Studio. Crafted for the next frontier."
        }
    }
}
