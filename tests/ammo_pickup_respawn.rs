mod common;

use common::{open_layout, quiet_config, run, started};
use glam::vec3;
use maze_shooter::core::events::{Cue, GameEvent};
use maze_shooter::core::pickup::PickupId;

#[test]
fn pickup_in_reach_is_collected_and_respawns_after_ten_seconds() {
    let mut game = started(quiet_config(13), open_layout());
    assert_eq!(game.pickups().len(), 6);

    // pickup 0 sits at (2, 0.5, 2); hold it still so the distance is exact
    game.pickups_mut()[0].bounce_height = 0.0;
    // horizontal 0.866 and vertical 1.1 put the eye 1.4 away
    game.player_mut().pos = vec3(2.0 + 0.75f32.sqrt(), 1.6, 2.0);
    game.player_mut().ammo = 12;

    let events = run(&mut game, 1);
    assert!(events.contains(&GameEvent::Cue(Cue::Pickup)));
    assert!(events.contains(&GameEvent::PickupCollected { id: PickupId(0), added: 10, ammo: 22 }));
    assert_eq!(game.player().ammo, 22);
    assert_eq!(game.pickups().len(), 5);
    assert!(game.pickups().iter().all(|p| p.id != PickupId(0)));

    // out of the respawn square so the replacement is not picked up at once
    game.player_mut().pos = vec3(13.0, 1.6, 13.0);
    run(&mut game, 570);
    assert_eq!(game.pickups().len(), 5);

    let events = run(&mut game, 60);
    assert_eq!(game.pickups().len(), 6);
    let spawned: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::PickupSpawned { id, pos } => Some((*id, *pos)),
            _ => None,
        })
        .collect();
    assert_eq!(spawned.len(), 1);
    let (id, pos) = spawned[0];
    assert_eq!(id, PickupId(6));
    assert!(pos.x.abs() <= 10.0 && pos.z.abs() <= 10.0);
    let replacement = game.pickups().iter().find(|p| p.id == id).unwrap();
    assert_eq!(replacement.ammo, 10);
}

#[test]
fn full_clip_still_consumes_the_pickup() {
    let mut game = started(quiet_config(13), open_layout());
    game.pickups_mut()[0].bounce_height = 0.0;
    game.player_mut().pos = vec3(2.0, 1.6, 2.0 + 0.5);

    let events = run(&mut game, 1);
    assert!(events.contains(&GameEvent::PickupCollected { id: PickupId(0), added: 0, ammo: 30 }));
    assert_eq!(game.player().ammo, 30);
    assert_eq!(game.pending_timers(), 1);
}
