//! Replays a gesture script through the scroll driver and prints the offset
//! trajectory.
//!
//! ```text
//! gesture-replay [SCRIPT] [--viewport WxH] [--content WxH]
//! ```

mod script;

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use momentum_animation::{Animator, TransitionAnimator};
use momentum_foundation::{
    GestureOutcome, PointerEvent, ScrollConfig, ScrollDriver, ScrollSurface, TrackingRegistry,
};
use momentum_ui_graphics::{Point, Size};

use script::Step;

const FRAME_MILLIS: f64 = 16.0;
const MAX_DRAIN_FRAMES: usize = 1_000;

/// A quick upward flick near the top of a long list.
const BUILT_IN_FLICK: &str = "\
down 200 600 0
move 200 570 16
move 200 520 32
move 200 450 48
up 200 450 64
";

struct ReplaySurface {
    content: Size,
    viewport: Size,
    animator: TransitionAnimator,
}

impl ScrollSurface for ReplaySurface {
    fn content_size(&self) -> Size {
        self.content
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn rendered_offset(&self) -> Point {
        self.animator.rendered_offset()
    }
}

/// Replays a pointer gesture script through the scroll driver.
#[derive(Parser, Debug)]
#[command(name = "gesture-replay")]
#[command(version, about = "Replays a pointer gesture script and prints the offset trajectory")]
struct Cli {
    /// Script to replay; the built-in flick when omitted
    script: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "400x800")]
    viewport: Size,

    /// Content size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "400x3000")]
    content: Size,
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: f32 = width
        .parse()
        .map_err(|_| format!("bad width in '{value}'"))?;
    let height: f32 = height
        .parse()
        .map_err(|_| format!("bad height in '{value}'"))?;
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(format!("size '{value}' must be finite and non-negative"));
    }
    Ok(Size::new(width, height))
}

fn report(label: &str, driver: &ScrollDriver<ReplaySurface, TransitionAnimator>) {
    let rendered = driver.animator().rendered_offset();
    println!(
        "{label:<28} rendered ({:>8.2}, {:>8.2})  offset ({:>8.2}, {:>8.2})  {:?}",
        rendered.x,
        rendered.y,
        driver.offset().x,
        driver.offset().y,
        driver.phase()
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            log::info!("no script given; replaying the built-in flick");
            BUILT_IN_FLICK.to_string()
        }
    };
    let steps = script::parse(&source)?;

    let animator = TransitionAnimator::new(Point::ZERO);
    let surface = ReplaySurface {
        content: cli.content,
        viewport: cli.viewport,
        animator: animator.clone(),
    };
    let registry = Rc::new(TrackingRegistry::new());
    let mut driver = ScrollDriver::new(
        surface,
        animator.clone(),
        registry.clone(),
        ScrollConfig::default(),
    )?;

    let replayed = driver.surface();
    println!(
        "=== Gesture replay: content {}x{} in viewport {}x{} ===",
        replayed.content.width,
        replayed.content.height,
        replayed.viewport.width,
        replayed.viewport.height
    );

    let mut now = 0.0;
    for step in &steps {
        now = step.time_millis();
        let label = match *step {
            Step::Down {
                position,
                time_millis,
            } => {
                driver.dispatch(&PointerEvent::down(position, time_millis));
                format!("{time_millis:>6}ms down")
            }
            Step::Move {
                position,
                time_millis,
            } => {
                let event = PointerEvent::moved(position, time_millis);
                driver.dispatch(&event);
                let suffix = if event.is_consumed() { "" } else { " (passed)" };
                format!("{time_millis:>6}ms move{suffix}")
            }
            Step::Up {
                position,
                time_millis,
            } => {
                let outcome = driver.dispatch(&PointerEvent::up(position, time_millis));
                format!("{time_millis:>6}ms up {}", outcome_label(outcome))
            }
            Step::Cancel { time_millis } => {
                driver.dispatch(&PointerEvent::cancel(time_millis));
                format!("{time_millis:>6}ms cancel")
            }
            Step::Frame { time_millis } => {
                animator.advance(nanos(time_millis));
                format!("{time_millis:>6}ms frame")
            }
        };
        report(&label, &driver);
    }

    let mut frames = 0;
    while animator.is_running() {
        if frames == MAX_DRAIN_FRAMES {
            log::warn!("still animating after {MAX_DRAIN_FRAMES} frames; giving up");
            break;
        }
        now += FRAME_MILLIS;
        animator.advance(nanos(now));
        frames += 1;
        report(&format!("{now:>6}ms frame"), &driver);
    }

    log::info!(
        "settled at {:?} after {} trailing frames ({} gestures tracked)",
        animator.rendered_offset(),
        frames,
        registry.attach_count()
    );
    Ok(())
}

fn outcome_label(outcome: Option<GestureOutcome>) -> String {
    match outcome {
        Some(outcome) => format!("{outcome:?}"),
        None => "(ignored)".to_string(),
    }
}

fn nanos(millis: f64) -> u64 {
    (millis.max(0.0) * 1_000_000.0) as u64
}
