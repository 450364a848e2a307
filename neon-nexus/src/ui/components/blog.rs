use crate::models::BlogPost;
use maud::{html, Markup};

pub fn render_blog_posts(posts: &[BlogPost]) -> Markup {
    html! {
        @for post in posts {
            article class="card" role="listitem" {
                span class="learning__badge" { (post.category) }
                h3 { (post.title) }
                p { (post.excerpt) }
                div class="card__meta" {
                    span { (post.published) }
                    span { (post.reading_time) }
                }
                a class="btn btn--ghost" href=(post.url) { "Read Story" }
            }
        }
    }
}
