//! Timed preview of the animated widgets.
//!
//! Plays the part of the browser: reports every metric as visible, then
//! ticks the page at a fixed frame cadence on the current task and prints
//! carousel transitions and finished counters.

use crate::content::{METRICS, TESTIMONIALS};
use crate::counter::{CounterPhase, Intersection};
use crate::store::KeyValueStore;
use crate::ui::{PageState, Region, UiEvent};
use crate::vault::VaultError;
use std::collections::HashSet;
use std::io::Write;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    pub slides_shown: Vec<usize>,
    pub counters_finished: Vec<String>,
    pub frames: u64,
}

pub async fn run_preview<S, W>(
    page: &mut PageState<S>,
    total: Duration,
    frame: Duration,
    out: &mut W,
) -> Result<PreviewSummary, VaultError>
where
    S: KeyValueStore,
    W: Write,
{
    let mut summary = PreviewSummary::default();
    let start = page.timeline.now();
    let end = start + total;

    let visible: Vec<Intersection> = METRICS
        .iter()
        .map(|metric| Intersection::new(metric.id, 1.0))
        .collect();
    page.dispatch(UiEvent::Intersections(visible))?;
    writeln!(out, "[{}] metrics in view", stamp(Duration::ZERO))?;

    let mut ticker = time::interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;
    let mut last = Instant::now();
    let mut reported: HashSet<String> = HashSet::new();

    while page.timeline.now() < end {
        ticker.tick().await;
        let now = Instant::now();
        let elapsed = (now - last).min(end - page.timeline.now());
        last = now;

        let regions = page.dispatch(UiEvent::Tick(elapsed))?;
        summary.frames += 1;
        let at = page.timeline.now() - start;

        if regions.contains(&Region::Testimonials) {
            let active = page.carousel.active();
            summary.slides_shown.push(active);
            if let Some(testimonial) = TESTIMONIALS.get(active) {
                writeln!(
                    out,
                    "[{}] testimonial {}/{}: {}",
                    stamp(at),
                    active + 1,
                    TESTIMONIALS.len(),
                    testimonial.author
                )?;
            }
        }

        if regions.contains(&Region::Metrics) {
            for counter in page.counters.counters() {
                if counter.phase == CounterPhase::Done && reported.insert(counter.id.clone()) {
                    writeln!(out, "[{}] {} = {}", stamp(at), counter.id, counter.display)?;
                    summary.counters_finished.push(counter.id.clone());
                }
            }
        }
    }

    log::debug!("Preview finished after {} frames", summary.frames);
    Ok(summary)
}

fn stamp(at: Duration) -> String {
    format!("{}.{:03}s", at.as_secs(), at.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::store::MemoryStore;
    use crate::vault::AssetVault;

    fn page() -> PageState<MemoryStore> {
        let config = SiteConfig::default();
        PageState::new(
            AssetVault::new(MemoryStore::new(), &config.storage_key),
            &config,
            2042,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn preview_rotates_and_finishes_counters() {
        let mut page = page();
        let mut out = Vec::new();
        let summary = run_preview(
            &mut page,
            Duration::from_millis(12_500),
            Duration::from_millis(16),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(summary.slides_shown, vec![1, 2]);
        assert_eq!(
            summary.counters_finished,
            vec!["launches", "visitors", "satisfaction"]
        );
        assert_eq!(page.timeline.now(), Duration::from_millis(12_500));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("testimonial 2/3: Mina Castellanos"));
        assert!(text.contains("satisfaction = 98"));
    }

    #[tokio::test(start_paused = true)]
    async fn preview_respects_hover_pause() {
        let mut page = page();
        page.dispatch(UiEvent::CarouselHover(true)).unwrap();
        let mut out = Vec::new();
        let summary = run_preview(
            &mut page,
            Duration::from_millis(7_000),
            Duration::from_millis(16),
            &mut out,
        )
        .await
        .unwrap();

        assert!(summary.slides_shown.is_empty());
        assert_eq!(page.carousel.active(), 0);
    }

    #[test]
    fn stamp_formats_millis() {
        assert_eq!(stamp(Duration::from_millis(6_016)), "6.016s");
    }
}
