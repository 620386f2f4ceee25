use std::sync::Arc;

use status_core::{
    AddOutcome, GameConfig, HealthEvent, RuntimeConfig, StatusCatalog, StatusConfig, StatusEvent,
};
use status_runtime::{ActorEvent, ActorEventKind, ActorId, FrameDriver};

fn catalog() -> Arc<StatusCatalog> {
    let mut catalog = StatusCatalog::new();
    status_content::register_builtin(&mut catalog).expect("built-ins register once");
    Arc::new(catalog)
}

fn driver(max_statuses: usize, frame_step: f32) -> FrameDriver {
    let config = GameConfig {
        status: StatusConfig::with_max_statuses(max_statuses),
        runtime: RuntimeConfig {
            frame_step,
            max_steps_per_frame: 8,
        },
        ..GameConfig::default()
    };
    FrameDriver::new(config, catalog()).expect("valid config")
}

fn status_events(events: &[ActorEvent]) -> Vec<StatusEvent> {
    events
        .iter()
        .filter_map(|e| match &e.kind {
            ActorEventKind::Status(event) => Some(event.clone()),
            ActorEventKind::Health(_) => None,
        })
        .collect()
}

fn slot_ids(driver: &FrameDriver, id: ActorId) -> Vec<Option<(String, f32)>> {
    let statuses = driver.actor(id).unwrap().statuses();
    (0..statuses.capacity())
        .map(|i| {
            statuses
                .status_at(i)
                .map(|s| (s.identifier().to_owned(), s.remaining_duration()))
        })
        .collect()
}

/// Two-slot bar: refresh dominance, overflow drop, then expiry over two
/// evaluations.
#[test]
fn two_slot_bar_fills_refreshes_and_drains() {
    let mut driver = driver(2, 3.0);
    let hero = driver.spawn("hero").unwrap();
    let actor = driver.actor_mut(hero).unwrap();

    assert_eq!(
        actor.add_status("stunned", 3.0).unwrap(),
        AddOutcome::Added { slot: 0 }
    );
    assert_eq!(
        actor.add_status("stunned", 1.0).unwrap(),
        AddOutcome::Kept { slot: 0 }
    );
    assert_eq!(
        actor.add_status("poisoned", 2.0).unwrap(),
        AddOutcome::Added { slot: 1 }
    );
    assert_eq!(
        actor.add_status("burning", 1.0).unwrap(),
        AddOutcome::Full
    );
    assert_eq!(
        status_events(&driver.drain_events()),
        vec![
            StatusEvent::Added {
                id: "stunned".into()
            },
            StatusEvent::Added {
                id: "poisoned".into()
            },
        ]
    );

    driver.step().unwrap();
    assert_eq!(
        slot_ids(&driver, hero),
        vec![
            Some(("stunned".into(), 0.0)),
            Some(("poisoned".into(), 0.0))
        ]
    );

    driver.step().unwrap();
    assert_eq!(slot_ids(&driver, hero), vec![None, None]);

    let removed: Vec<_> = status_events(&driver.drain_events())
        .into_iter()
        .filter(|e| matches!(e, StatusEvent::Removed { .. }))
        .collect();
    assert_eq!(
        removed,
        vec![
            StatusEvent::Removed {
                id: "stunned".into()
            },
            StatusEvent::Removed {
                id: "poisoned".into()
            },
        ]
    );
}

#[test]
fn longer_duration_refreshes_in_place() {
    let mut driver = driver(4, 0.1);
    let hero = driver.spawn("hero").unwrap();
    let actor = driver.actor_mut(hero).unwrap();

    actor.add_status("burning", 1.0).unwrap();
    actor.add_status("stunned", 10.0).unwrap();
    actor.remove_status("burning").unwrap();
    actor.add_status("poisoned", 1.0).unwrap(); // reuses slot 0
    driver.drain_events();

    let actor = driver.actor_mut(hero).unwrap();
    assert_eq!(
        actor.add_status("stunned", 5.0).unwrap(),
        AddOutcome::Kept { slot: 1 }
    );
    assert_eq!(
        actor.add_status("stunned", 15.0).unwrap(),
        AddOutcome::Refreshed { slot: 1 }
    );
    assert_eq!(actor.statuses().status_at(1).unwrap().remaining_duration(), 15.0);
    assert_eq!(actor.statuses().occupied_count(), 2);

    // A refresh is silent.
    assert!(driver.drain_events().is_empty());
}

#[test]
fn sub_threshold_duration_expires_on_next_evaluate() {
    let mut driver = driver(8, 0.1);
    let hero = driver.spawn("hero").unwrap();
    driver
        .actor_mut(hero)
        .unwrap()
        .add_status("burning", 0.005)
        .unwrap();

    let actor = driver.actor_mut(hero).unwrap();
    actor.evaluate(0.0).unwrap();
    assert!(!actor.has_status("burning"));
    assert_eq!(actor.health().health(), 100.0);
}

#[test]
fn lock_blocks_adds_but_not_removals() {
    let mut driver = driver(8, 0.1);
    let hero = driver.spawn("hero").unwrap();
    let actor = driver.actor_mut(hero).unwrap();

    actor.add_status("stunned", 2.0).unwrap();
    actor.set_lock_state(true);

    assert_eq!(
        actor.add_status("burning", 2.0).unwrap(),
        AddOutcome::Locked
    );
    assert!(!actor.has_status("burning"));
    assert!(actor.remove_status("stunned").unwrap());
    assert_eq!(actor.statuses().occupied_count(), 0);

    // Unknown identifiers are content errors even while locked.
    assert!(actor.add_status("frozen", 2.0).is_err());
}

#[test]
fn damage_then_death_through_actor() {
    let mut driver = driver(8, 0.1);
    let hero = driver.spawn("hero").unwrap();
    let health = driver.actor_mut(hero).unwrap().health_mut();

    health.take_damage(20.0, 1.0).unwrap();
    assert_eq!(health.health(), 80.0);
    health.take_damage(90.0, 1.0).unwrap();
    assert_eq!(health.health(), 0.0);

    let health_events: Vec<_> = driver
        .drain_events()
        .into_iter()
        .filter_map(|e| match e.kind {
            ActorEventKind::Health(event) => Some(event),
            ActorEventKind::Status(_) => None,
        })
        .collect();
    assert_eq!(
        health_events,
        vec![
            HealthEvent::Changed {
                health: 80.0,
                fraction: 0.8
            },
            HealthEvent::Death,
        ]
    );
}

#[test]
fn poison_kills_and_regeneration_lapses() {
    let mut driver = driver(8, 1.0);
    let hero = driver.spawn("hero").unwrap();
    {
        let actor = driver.actor_mut(hero).unwrap();
        actor.health_mut().take_fixed_damage(95.0).unwrap();
        actor.add_status("poisoned", 10.0).unwrap();
        actor.add_status("regenerating", 10.0).unwrap();
    }
    driver.drain_events();

    // Tick 1: poison 3 -> 2 health left, regen +4 -> 6.
    driver.step().unwrap();
    assert_eq!(driver.actor(hero).unwrap().health().health(), 6.0);

    // Tick 2: 6 -> 3 -> 7. Tick 3: 7 -> 4 -> 8. The heal outpaces poison.
    driver.step().unwrap();
    driver.step().unwrap();
    assert_eq!(driver.actor(hero).unwrap().health().health(), 8.0);

    // Remove regeneration and let poison finish the job.
    driver
        .actor_mut(hero)
        .unwrap()
        .remove_status("regenerating")
        .unwrap();
    driver.step().unwrap();
    driver.step().unwrap();
    driver.step().unwrap();

    let actor = driver.actor(hero).unwrap();
    assert!(!actor.health().is_alive());
    assert!(
        driver
            .drain_events()
            .iter()
            .any(|e| e.kind == ActorEventKind::Health(HealthEvent::Death))
    );
}

#[test]
fn regeneration_expires_on_dead_host() {
    let mut driver = driver(8, 1.0);
    let hero = driver.spawn("hero").unwrap();
    {
        let actor = driver.actor_mut(hero).unwrap();
        actor.add_status("regenerating", 10.0).unwrap();
        actor.health_mut().take_fixed_damage(100.0).unwrap();
    }

    driver.step().unwrap();
    let actor = driver.actor(hero).unwrap();
    assert!(!actor.has_status("regenerating"));
    assert_eq!(actor.health().health(), 0.0);
}

#[test]
fn frame_times_are_sliced_into_fixed_steps() {
    let mut driver = driver(8, 0.25);
    let hero = driver.spawn("hero").unwrap();
    driver
        .actor_mut(hero)
        .unwrap()
        .add_status("burning", 10.0)
        .unwrap();

    for _ in 0..4 {
        driver.advance(0.125).unwrap();
    }

    // Two whole steps of 0.25s at 5 damage per second.
    assert_eq!(driver.steps(), 2);
    assert_eq!(driver.actor(hero).unwrap().health().health(), 97.5);
}
