use anyhow::{Context, Result};
use vyde_timing::logging::{init_logging, LoggingConfig};
use vyde_timing::render::{HAlign, LogRenderer, TextParams, TextRenderer, VAlign};
use vyde_timing::{interpolate, ClockConfig, Curve, Easing, Progress, Timeline};

const SUBTITLE_SIZE: f32 = 16.0;
const SUBTITLE_SECONDS: f64 = 0.3;

/// A subtitle sliding in from below while its duration runs.
struct Subtitle {
    text: &'static str,
    progress: Progress,
}

impl Subtitle {
    fn cooperative(timeline: &mut Timeline, text: &'static str) -> Result<Self> {
        let duration = timeline
            .seconds(SUBTITLE_SECONDS)
            .with_context(|| format!("failed to schedule subtitle {text:?}"))?;
        Ok(Self {
            text,
            progress: duration.cooperative(),
        })
    }

    /// Draws one frame; returns false once the subtitle is over.
    fn step(&mut self, timeline: &mut Timeline, renderer: &mut impl TextRenderer) -> bool {
        match self.progress.step(timeline) {
            Some(d) => {
                draw(renderer, self.text, d.progress());
                true
            }
            None => {
                log::debug!("subtitle {:?} done at frame {}", self.text, timeline.frame());
                false
            }
        }
    }
}

fn draw(renderer: &mut impl TextRenderer, text: &str, progress: f64) {
    let offset = interpolate(
        SUBTITLE_SIZE,
        -SUBTITLE_SIZE,
        progress,
        Curve::Quintic,
        Easing::Out,
    );
    let params = TextParams::new(text, 0.0, SUBTITLE_SIZE + offset)
        .align(VAlign::Bottom, HAlign::Center);
    renderer.text(&params);
}

/// Plays a subtitle that holds the clock until it is done.
fn blocking_subtitle(
    timeline: &mut Timeline,
    renderer: &mut impl TextRenderer,
    text: &str,
) -> Result<u64> {
    let start = timeline.frame();
    let duration = timeline
        .seconds(SUBTITLE_SECONDS)
        .with_context(|| format!("failed to schedule subtitle {text:?}"))?;

    for d in duration.frames(timeline) {
        draw(renderer, text, d.progress());
    }
    Ok(timeline.frame() - start)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ClockConfig::from_env().context("failed to read clock configuration")?;
    let mut timeline = Timeline::new(config).context("failed to create timeline")?;
    timeline.set_tick_listener(|frame| log::debug!("frame {frame}"));

    let mut renderer = LogRenderer::default();

    // Host frame pump: cooperative subtitles step once per frame, the loop
    // owns the clock.
    let mut overlays = vec![
        Subtitle::cooperative(&mut timeline, "Hello")?,
        Subtitle::cooperative(
            &mut timeline,
            "This is played while the rest of the video keeps playing",
        )?,
    ];
    while !overlays.is_empty() {
        overlays.retain_mut(|subtitle| subtitle.step(&mut timeline, &mut renderer));
        timeline.tick();
    }
    log::info!("overlays finished at frame {}", timeline.frame());

    let paused = blocking_subtitle(
        &mut timeline,
        &mut renderer,
        "But this subtitle will pause the video",
    )?;
    log::info!("blocking subtitle held the clock for {paused} frames");

    log::info!(
        "done: {} frames, {} text draws, {} durations still active",
        timeline.frame(),
        renderer.draws(),
        timeline.registry().len(),
    );
    Ok(())
}
