use crate::content::learning_tracks;
use crate::models::{LearningFilter, TrackCategory};
use maud::{html, Markup};

pub fn render_learning_filter(filter: LearningFilter) -> Markup {
    html! {
        label for="learning-filter" { "Filter tracks" }
        select id="learning-filter" name="learning-filter" {
            option value="all" selected[filter == LearningFilter::All] { "All tracks" }
            @for category in TrackCategory::ALL {
                option value=(category.as_str()) selected[filter == LearningFilter::Only(category)] {
                    (category.label())
                }
            }
        }
    }
}

pub fn render_learning_tracks(filter: LearningFilter) -> Markup {
    html! {
        @for track in learning_tracks(filter) {
            article class="learning__card" role="listitem" {
                span class="learning__badge" { (track.category.as_str()) }
                h3 { (track.title) }
                p { (track.description) }
                div class="learning__meta" {
                    span { (track.duration) }
                    span { (track.level) }
                }
                button class="btn btn--ghost" type="button" { "View Syllabus" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_list_only_shows_category() {
        let html = render_learning_tracks(LearningFilter::Only(TrackCategory::Development)).into_string();
        assert_eq!(html.matches("learning__card").count(), 2);
        assert!(html.contains("Edge AI Systems for Brand Ops"));
        assert!(!html.contains("Strategic Foresight Lab"));
    }

    #[test]
    fn filter_select_marks_current_choice() {
        let html = render_learning_filter(LearningFilter::Only(TrackCategory::Strategy)).into_string();
        assert!(html.contains(r#"<option value="strategy" selected>"#));
        assert!(html.contains(r#"<option value="all">"#));
    }
}
