mod common;

use common::{open_layout, pull_trigger, quiet_config, run, started};
use glam::vec3;
use maze_shooter::core::enemy::EnemyId;
use maze_shooter::core::events::GameEvent;

#[test]
fn player_bullet_deals_its_damage_once_and_is_removed() {
    let mut game = started(quiet_config(8), open_layout());
    game.player_mut().pos = vec3(0.0, 1.6, 4.0);
    game.enemies_mut()[0].pos = vec3(0.0, 0.9, 0.0);

    let mut events = pull_trigger(&mut game);
    assert_eq!(game.bullets().len(), 1);
    // 30 u/s covers the 3.5 units in about 7 ticks
    events.extend(run(&mut game, 30));

    let damaged: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDamaged { .. }))
        .collect();
    assert_eq!(damaged, vec![&GameEvent::EnemyDamaged { id: EnemyId(0), health: 80 }]);
    assert_eq!(game.enemies()[0].health, 80);
    assert!(game.bullets().is_empty());
}
