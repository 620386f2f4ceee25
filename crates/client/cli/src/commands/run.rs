//! Simulate one actor and print its event timeline.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use status_content::ContentFactory;
use status_core::{AddOutcome, StatusEvent};
use status_runtime::{Actor, ActorEvent, ActorEventKind, FrameDriver, StateRepository};

use super::SaveArgs;

/// Simulate an actor and print the event timeline
#[derive(Parser)]
pub struct Run {
    /// Directory holding config.toml and statuses.ron
    #[arg(long, value_name = "DIR", env = "STATUS_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Status to apply before the run, as ID:SECONDS (repeatable)
    #[arg(long = "apply", value_name = "ID:SECONDS", value_parser = parse_apply)]
    apply: Vec<(String, f32)>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 5.0)]
    seconds: f32,

    /// Name of the simulated actor
    #[arg(long, default_value = "hero")]
    name: String,

    /// Also print a line for every status tick
    #[arg(long)]
    ticks: bool,

    /// Save the final state into this slot
    #[arg(long, value_name = "SLOT")]
    save: Option<String>,

    #[command(flatten)]
    save_args: SaveArgs,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        if !(self.seconds >= 0.0) {
            bail!("--seconds must not be negative");
        }

        let factory = ContentFactory::new(&self.data_dir);
        let config = factory
            .load_config()
            .with_context(|| format!("loading config from {}", self.data_dir.display()))?;
        let catalog = factory.build_catalog()?;

        let mut driver = FrameDriver::new(config, catalog)?;
        let id = driver.spawn(self.name.clone())?;

        for (status_id, duration) in &self.apply {
            let outcome = driver.actor_mut(id)?.add_status(status_id, *duration)?;
            report_apply(status_id, *duration, outcome);
        }
        self.print_events(0.0, &driver.drain_events());

        let step = driver.config().runtime.frame_step;
        let steps = (self.seconds / step).round() as u64;
        tracing::info!(steps, step, "simulating");

        for _ in 0..steps {
            driver.step()?;
            self.print_events(driver.elapsed(), &driver.drain_events());
        }

        let actor = driver.actor(id)?;
        print_summary(actor);

        if let Some(slot) = &self.save {
            let repo = self.save_args.repository()?;
            repo.save(slot, &actor.to_record())
                .with_context(|| format!("saving slot '{slot}'"))?;
            println!("saved to {}", repo.slot_path(slot).display());
        }

        Ok(())
    }

    fn print_events(&self, elapsed: f64, events: &[ActorEvent]) {
        for event in events {
            let is_tick = matches!(event.kind, ActorEventKind::Status(StatusEvent::Ticked { .. }));
            if is_tick && !self.ticks {
                continue;
            }
            println!("[{elapsed:>7.2}s] {event}");
        }
    }
}

fn report_apply(status_id: &str, duration: f32, outcome: AddOutcome) {
    match outcome {
        AddOutcome::Added { slot } => println!("{status_id} ({duration}s) -> slot {slot}"),
        AddOutcome::Refreshed { slot } => {
            println!("{status_id} ({duration}s) refreshed slot {slot}")
        }
        AddOutcome::Kept { slot } => {
            println!("{status_id} ({duration}s) ignored, slot {slot} lasts longer")
        }
        AddOutcome::Locked => println!("{status_id} ({duration}s) ignored, statuses locked"),
        AddOutcome::Full => println!("{status_id} ({duration}s) dropped, no free slot"),
    }
}

fn print_summary(actor: &Actor) {
    let health = actor.health();
    println!(
        "{} ({}): {:.1}/{:.1} health, {}",
        actor.name(),
        actor.id(),
        health.health(),
        health.max_health(),
        if health.is_alive() { "alive" } else { "dead" }
    );
    for (slot, status) in actor.statuses().iter() {
        println!(
            "  slot {slot}: {} {:.2}s",
            status.identifier(),
            status.remaining_duration()
        );
    }
}

/// Parses `ID:SECONDS`.
fn parse_apply(value: &str) -> Result<(String, f32), String> {
    let (id, seconds) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected ID:SECONDS, got '{value}'"))?;
    if id.is_empty() {
        return Err("status id is empty".into());
    }

    let seconds: f32 = seconds
        .parse()
        .map_err(|e| format!("invalid duration '{seconds}': {e}"))?;
    if !(seconds >= 0.0) {
        return Err(format!("duration must not be negative (got {seconds})"));
    }

    Ok((id.to_owned(), seconds))
}
