//! Fixed-step frame driver.
//!
//! Frame times are accumulated and consumed in whole `frame_step` slices.
//! Every slice evaluates each actor once, in insertion order, so a run is
//! reproducible regardless of how real time was chopped into frames.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use status_core::{GameConfig, StatusCatalog};
use tracing::{debug, info, warn};

use crate::actor::{Actor, ActorId};
use crate::error::{Result, RuntimeError};
use crate::events::{ActorEvent, EventSink};

/// Owns the actors and advances their statuses.
pub struct FrameDriver {
    config: GameConfig,
    catalog: Arc<StatusCatalog>,
    actors: Vec<Actor>,
    next_id: u32,
    accumulator: f32,
    steps: u64,
    sender: Sender<ActorEvent>,
    receiver: Receiver<ActorEvent>,
}

impl FrameDriver {
    pub fn new(config: GameConfig, catalog: Arc<StatusCatalog>) -> Result<Self> {
        if !(config.runtime.frame_step > 0.0) {
            return Err(RuntimeError::InvalidConfig(format!(
                "frame_step must be positive (got {})",
                config.runtime.frame_step
            )));
        }
        if config.runtime.max_steps_per_frame == 0 {
            return Err(RuntimeError::InvalidConfig(
                "max_steps_per_frame must be at least 1".into(),
            ));
        }
        if config.status.max_statuses == 0 {
            return Err(RuntimeError::InvalidConfig(
                "max_statuses must be at least 1".into(),
            ));
        }

        let (sender, receiver) = mpsc::channel();
        Ok(Self {
            config,
            catalog,
            actors: Vec::new(),
            next_id: 0,
            accumulator: 0.0,
            steps: 0,
            sender,
            receiver,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<StatusCatalog> {
        &self.catalog
    }

    /// Creates an actor from the configured defaults.
    ///
    /// Once `ActorId(u32::MAX)` is taken every further spawn fails with
    /// [`RuntimeError::DuplicateActor`].
    pub fn spawn(&mut self, name: impl Into<String>) -> Result<ActorId> {
        let id = ActorId(self.next_id);
        let actor = Actor::new(id, name, Arc::clone(&self.catalog), &self.config)?;
        self.insert(actor)
    }

    /// Registers an externally built actor and starts collecting its events.
    pub fn insert(&mut self, mut actor: Actor) -> Result<ActorId> {
        let id = actor.id();
        if self.actors.iter().any(|a| a.id() == id) {
            return Err(RuntimeError::DuplicateActor(id));
        }

        actor.forward_events(EventSink::new(id, self.sender.clone()));
        self.next_id = self.next_id.max(id.0.saturating_add(1));

        info!(actor = %id, name = actor.name(), "actor registered");
        self.actors.push(actor);
        Ok(id)
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.actors
            .iter()
            .find(|a| a.id() == id)
            .ok_or(RuntimeError::UnknownActor(id))
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor> {
        self.actors
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(RuntimeError::UnknownActor(id))
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Number of fixed steps run so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds elapsed so far.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * f64::from(self.config.runtime.frame_step)
    }

    /// Runs exactly one fixed step.
    pub fn step(&mut self) -> Result<()> {
        let delta = self.config.runtime.frame_step;
        for actor in &mut self.actors {
            actor.evaluate(delta)?;
        }
        self.steps += 1;
        Ok(())
    }

    /// Feeds one frame of real time and runs the whole steps it covers.
    ///
    /// At most `max_steps_per_frame` steps run; any backlog beyond that is
    /// discarded. Returns the number of steps run.
    pub fn advance(&mut self, frame_time: f32) -> Result<u32> {
        let step = self.config.runtime.frame_step;
        let max_steps = self.config.runtime.max_steps_per_frame;
        self.accumulator += frame_time.max(0.0);

        let mut ran = 0;
        while self.accumulator >= step && ran < max_steps {
            self.step()?;
            self.accumulator -= step;
            ran += 1;
        }

        if self.accumulator >= step {
            warn!(
                backlog = self.accumulator,
                "frame ran {max_steps} steps, dropping backlog"
            );
            self.accumulator %= step;
        }

        Ok(ran)
    }

    /// Runs as many fixed steps as fit into `seconds` of simulated time,
    /// without the per-frame cap.
    pub fn run_for(&mut self, seconds: f32) -> Result<u64> {
        let count = (seconds.max(0.0) / self.config.runtime.frame_step).round() as u64;
        debug!(seconds, steps = count, "running fixed steps");
        for _ in 0..count {
            self.step()?;
        }
        Ok(count)
    }

    /// Takes every event raised since the last drain, in emission order.
    pub fn drain_events(&self) -> Vec<ActorEvent> {
        self.receiver.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use status_core::{HealthEvent, RuntimeConfig, StatusEvent};

    use super::*;
    use crate::events::ActorEventKind;

    fn driver(frame_step: f32, max_steps_per_frame: u32) -> FrameDriver {
        let mut catalog = StatusCatalog::new();
        status_content::register_builtin(&mut catalog).unwrap();

        let config = GameConfig {
            runtime: RuntimeConfig {
                frame_step,
                max_steps_per_frame,
            },
            ..GameConfig::default()
        };
        FrameDriver::new(config, Arc::new(catalog)).unwrap()
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut driver = driver(0.25, 8);
        assert_eq!(driver.advance(0.125).unwrap(), 0);
        assert_eq!(driver.advance(0.125).unwrap(), 1);
        assert_eq!(driver.advance(0.5).unwrap(), 2);
        assert_eq!(driver.steps(), 3);
        assert_eq!(driver.elapsed(), 0.75);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut driver = driver(0.25, 2);
        assert_eq!(driver.advance(2.0).unwrap(), 2);
        // Backlog dropped: the next short frame does not catch up.
        assert_eq!(driver.advance(0.0).unwrap(), 0);
    }

    #[test]
    fn events_are_tagged_and_ordered() {
        let mut driver = driver(0.5, 8);
        let a = driver.spawn("a").unwrap();
        let b = driver.spawn("b").unwrap();

        driver.actor_mut(b).unwrap().add_status("burning", 0.5).unwrap();
        driver.actor_mut(a).unwrap().add_status("stunned", 0.5).unwrap();
        driver.step().unwrap();

        let events = driver.drain_events();
        let summary: Vec<_> = events
            .iter()
            .map(|e| (e.actor, matches!(e.kind, ActorEventKind::Health(_))))
            .collect();
        assert_eq!(
            summary,
            vec![
                (b, false), // b gained burning
                (a, false), // a gained stunned
                (a, false), // a stunned ticked
                (b, true),  // b took burn damage inside the tick hook
                (b, false), // b burning ticked
            ]
        );
        assert!(driver.drain_events().is_empty());

        assert_eq!(
            events[3].kind,
            ActorEventKind::Health(HealthEvent::Changed {
                health: 97.5,
                fraction: 0.975
            })
        );
        assert_eq!(
            events[4].kind,
            ActorEventKind::Status(StatusEvent::Ticked {
                id: "burning".into(),
                remaining: 0.0
            })
        );
    }

    #[test]
    fn unknown_and_duplicate_actors_are_rejected() {
        let mut driver = driver(0.5, 8);
        let id = driver.spawn("a").unwrap();

        assert!(matches!(
            driver.actor(ActorId(99)),
            Err(RuntimeError::UnknownActor(ActorId(99)))
        ));

        let clone = Actor::new(
            id,
            "again",
            Arc::clone(driver.catalog()),
            &GameConfig::default(),
        )
        .unwrap();
        assert!(matches!(
            driver.insert(clone),
            Err(RuntimeError::DuplicateActor(_))
        ));
    }

    #[test]
    fn highest_id_does_not_wrap() {
        let mut driver = driver(0.5, 8);
        let first = driver.spawn("a").unwrap();

        let last = Actor::new(
            ActorId(u32::MAX),
            "last",
            Arc::clone(driver.catalog()),
            &GameConfig::default(),
        )
        .unwrap();
        driver.insert(last).unwrap();

        assert!(matches!(
            driver.spawn("b"),
            Err(RuntimeError::DuplicateActor(ActorId(u32::MAX)))
        ));
        assert_eq!(driver.actors().count(), 2);
        assert_eq!(driver.actor(first).unwrap().name(), "a");
    }

    #[test]
    fn invalid_step_is_rejected() {
        let config = GameConfig {
            runtime: RuntimeConfig {
                frame_step: 0.0,
                ..RuntimeConfig::default()
            },
            ..GameConfig::default()
        };
        assert!(FrameDriver::new(config, Arc::new(StatusCatalog::new())).is_err());
    }
}
