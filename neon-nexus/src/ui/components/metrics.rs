use crate::counter::CounterBoard;
use crate::models::Metric;
use maud::{html, Markup};

pub fn render_metrics(metrics: &[Metric], board: &CounterBoard) -> Markup {
    html! {
        @for metric in metrics {
            div class="metric" {
                p {
                    span class="metric__number" id=(format!("metric-{}", metric.id))
                        data-count=(metric.target) {
                        (board.display(metric.id).unwrap_or(0))
                    }
                    span class="metric__suffix" { (metric.suffix) }
                }
                p class="metric__label" { (metric.label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::METRICS;
    use crate::counter::Intersection;
    use std::time::Duration;

    #[test]
    fn counters_render_zero_until_animated() {
        let mut board = CounterBoard::new(METRICS, Duration::from_millis(1200), 0.6);
        let html = render_metrics(METRICS, &board).into_string();
        assert!(html.contains(r#"data-count="920">0</span>"#));

        board.on_intersection(&[Intersection::new("visitors", 1.0)], Duration::ZERO);
        board.on_frame(Duration::from_millis(1200));
        let html = render_metrics(METRICS, &board).into_string();
        assert!(html.contains(r#"data-count="920">920</span>"#));
    }
}
