use crate::carousel::Carousel;
use crate::models::Testimonial;
use maud::{html, Markup};

pub fn render_testimonials(testimonials: &[Testimonial], carousel: &Carousel) -> Markup {
    let active = carousel.active();
    html! {
        div class="carousel__track" data-active=(active) {
            @for (i, testimonial) in testimonials.iter().enumerate() {
                figure class=(if i == active { "testimonial is-active" } else { "testimonial" })
                    aria-hidden=((i != active).to_string()) {
                    blockquote { (testimonial.quote) }
                    figcaption {
                        strong { (testimonial.author) }
                        span { (testimonial.role) }
                    }
                }
            }
        }
        @if testimonials.len() > 1 {
            div class="carousel__controls" {
                button class="carousel__prev" type="button" aria-label="Previous testimonial" { "‹" }
                @for i in 0..testimonials.len() {
                    button class="carousel__dot" type="button" data-index=(i)
                        aria-label=(format!("Show testimonial {}", i + 1))
                        aria-current=[(i == active).then_some("true")] {}
                }
                button class="carousel__next" type="button" aria-label="Next testimonial" { "›" }
            }
        }
    }
}
