use scroll_shooter::config::SimConfig;
use scroll_shooter::cooldown::Category;
use scroll_shooter::entities::*;
use scroll_shooter::init_state;
use scroll_shooter::kinematics::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const VIEW: Rect = Rect::new(0, 0, 400, 400);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn dirs(list: &[Direction]) -> DirectionSet {
    list.iter().copied().collect()
}

fn enemy(vx: i32, vy: i32, entered: bool) -> EnemyState {
    EnemyState {
        vx,
        vy,
        hit: false,
        last_fired: 0,
        entered_viewport: entered,
    }
}

/// Playing state with cooldowns seeded at `now` and the first enemy already
/// accounted for, so a tick spawns nothing unexpected.
fn quiet_state(now: u64) -> GameState {
    let mut s = init_state(&SimConfig::default());
    s.status = GameStatus::Playing;
    s.cooldowns.seed(now);
    s.cooldowns.record(Category::EnemySpawn, now);
    s.enemies_spawned = 1;
    s
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_moves_four_per_axis() {
    let mut p = Point::new(100, 100);
    step_player(&mut p, VIEW, dirs(&[Direction::Right, Direction::Up]));
    assert_eq!(p, Point::new(104, 96));
    step_player(&mut p, VIEW, dirs(&[Direction::Left, Direction::Down]));
    assert_eq!(p, Point::new(100, 100));
}

#[test]
fn player_no_input_stays_put() {
    let mut p = Point::new(100, 100);
    step_player(&mut p, VIEW, DirectionSet::empty());
    assert_eq!(p, Point::new(100, 100));
}

#[test]
fn player_opposing_keys_cancel() {
    let mut p = Point::new(100, 100);
    step_player(&mut p, VIEW, dirs(&[Direction::Left, Direction::Right]));
    assert_eq!(p, Point::new(100, 100));
}

#[test]
fn player_clamps_top_left() {
    let mut p = Point::new(2, 1);
    step_player(&mut p, VIEW, dirs(&[Direction::Left, Direction::Up]));
    assert_eq!(p, Point::new(0, 0));
}

#[test]
fn player_clamps_bottom_right() {
    let mut p = Point::new(358, 381);
    step_player(&mut p, VIEW, dirs(&[Direction::Right, Direction::Down]));
    // far edges touch the viewport's far edges
    assert_eq!(p, Point::new(400 - 40, 400 - 17));
}

#[test]
fn player_clamps_to_offset_viewport() {
    let view = Rect::new(10, 20, 200, 100);
    let mut p = Point::new(11, 21);
    step_player(&mut p, view, dirs(&[Direction::Left, Direction::Up]));
    assert_eq!(p, Point::new(10, 20));
    let mut p = Point::new(169, 82);
    step_player(&mut p, view, dirs(&[Direction::Right, Direction::Down]));
    assert_eq!(p, Point::new(170, 103));
}

// ── Background ────────────────────────────────────────────────────────────────

#[test]
fn background_scrolls_down() {
    let mut p = Point::new(0, -800);
    step_background(&mut p, VIEW);
    assert_eq!(p, Point::new(0, -796));
}

#[test]
fn background_recycles_past_bottom() {
    let mut p = Point::new(0, 398);
    step_background(&mut p, VIEW);
    assert_eq!(p, Point::new(0, -1996));
}

#[test]
fn background_at_bottom_edge_is_not_recycled() {
    let mut p = Point::new(0, 396);
    step_background(&mut p, VIEW);
    assert_eq!(p.y, 400);
}

#[test]
fn two_backgrounds_keep_covering_viewport() {
    let mut tiles = [Point::new(0, 400 - 1200), Point::new(0, -2000)];
    for _ in 0..2000 {
        for t in tiles.iter_mut() {
            step_background(t, VIEW);
        }
        // the two tiles together span every viewport row
        for row in 0..400 {
            assert!(
                tiles.iter().any(|t| t.y <= row && row < t.y + 1200),
                "row {} uncovered with tiles at {:?}",
                row,
                tiles
            );
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_up_by_its_height() {
    let mut p = Point::new(198, 100);
    assert!(step_bullet(&mut p, VIEW));
    assert_eq!(p.y, 92);
}

#[test]
fn bullet_culled_once_fully_above_top() {
    let mut p = Point::new(198, 0);
    assert!(step_bullet(&mut p, VIEW)); // y = -8, bottom edge exactly at top
    assert!(!step_bullet(&mut p, VIEW)); // y = -16, gone
}

#[test]
fn bullet_from_player_culled_exactly_when_leaving_top() {
    // Fired from a player at y=383 → spawned at y=375
    let mut p = Point::new(198, 375);
    let mut ticks = 0;
    while step_bullet(&mut p, VIEW) {
        ticks += 1;
        assert!(p.y + 8 >= 0);
    }
    assert_eq!(ticks, 47);
    assert!(p.y + 8 < 0);
    assert_eq!(p.y, 375 - 48 * 8);
}

#[test]
fn enemy_bullet_moves_down_slower_than_its_height() {
    let mut p = Point::new(100, 100);
    assert!(step_enemy_bullet(&mut p, VIEW));
    assert_eq!(p.y, 106);
}

#[test]
fn enemy_bullet_culled_once_below_bottom() {
    let mut p = Point::new(100, 394);
    assert!(step_enemy_bullet(&mut p, VIEW)); // y = 400, still on the edge
    let mut p = Point::new(100, 395);
    assert!(!step_enemy_bullet(&mut p, VIEW)); // y = 401
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_entry_is_straight_down() {
    let mut rng = seeded_rng();
    let mut p = Point::new(100, -17);
    let mut e = enemy(0, 2, false);
    step_enemy(&mut p, &mut e, VIEW, &mut rng);
    assert_eq!(p, Point::new(100, -15));
    assert!(!e.entered_viewport);
    assert_eq!((e.vx, e.vy), (0, 2));
}

#[test]
fn enemy_gets_random_velocity_on_entering() {
    let mut rng = seeded_rng();
    let mut p = Point::new(100, 1);
    let mut e = enemy(0, 2, false);
    step_enemy(&mut p, &mut e, VIEW, &mut rng);
    assert!(e.entered_viewport);
    assert!((-4..=4).contains(&e.vx));
    assert!((3..=4).contains(&e.vy));
    assert_eq!(p, Point::new(100 + e.vx, 1 + e.vy));
}

#[test]
fn enemy_at_top_edge_has_not_entered() {
    let mut rng = seeded_rng();
    let mut p = Point::new(100, 0);
    let mut e = enemy(0, 2, false);
    step_enemy(&mut p, &mut e, VIEW, &mut rng);
    assert!(!e.entered_viewport);
    assert_eq!(p.y, 2);
}

#[test]
fn enemy_bounces_off_left_wall() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Point::new(2, 100);
        let mut e = enemy(-4, 0, true);
        step_enemy(&mut p, &mut e, VIEW, &mut rng);
        assert_eq!(p, Point::new(0, 100));
        assert!((3..=4).contains(&e.vx), "vx {}", e.vx);
        assert!((-4..=4).contains(&e.vy), "vy {}", e.vy);
    }
}

#[test]
fn enemy_bounces_off_right_wall() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Point::new(358, 100);
        let mut e = enemy(4, 0, true);
        step_enemy(&mut p, &mut e, VIEW, &mut rng);
        assert_eq!(p, Point::new(360, 100));
        assert!((-4..=-3).contains(&e.vx), "vx {}", e.vx);
        assert!((-4..=4).contains(&e.vy), "vy {}", e.vy);
    }
}

#[test]
fn enemy_bounces_off_top_once_entered() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Point::new(100, 2);
        let mut e = enemy(0, -4, true);
        step_enemy(&mut p, &mut e, VIEW, &mut rng);
        assert_eq!(p, Point::new(100, 0));
        assert!((-4..=4).contains(&e.vx), "vx {}", e.vx);
        assert!((3..=4).contains(&e.vy), "vy {}", e.vy);
    }
}

#[test]
fn enemy_bounces_off_bottom_with_fixed_speed() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Point::new(100, 380);
        let mut e = enemy(0, 4, true);
        step_enemy(&mut p, &mut e, VIEW, &mut rng);
        assert_eq!(p, Point::new(100, 383));
        assert!((-4..=4).contains(&e.vx), "vx {}", e.vx);
        assert_eq!(e.vy, -4);
    }
}

#[test]
fn enemy_bounce_is_reproducible_with_same_seed() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = Point::new(180, -17);
        let mut e = enemy(0, 2, false);
        let mut path = Vec::new();
        for _ in 0..500 {
            step_enemy(&mut p, &mut e, VIEW, &mut rng);
            path.push((p, e.vx, e.vy));
        }
        path
    };
    assert_eq!(run(), run());
}

#[test]
fn enemy_stays_inside_viewport_after_entering() {
    let mut rng = seeded_rng();
    let mut p = Point::new(180, -17);
    let mut e = enemy(0, 2, false);
    for _ in 0..2000 {
        step_enemy(&mut p, &mut e, VIEW, &mut rng);
        if e.entered_viewport {
            assert!(VIEW.contains_rect(&Rect::new(p.x, p.y, 40, 17)), "{:?}", p);
        }
    }
}

// ── Whole pass ────────────────────────────────────────────────────────────────

#[test]
fn run_skips_entities_spawned_this_tick() {
    let mut s = quiet_state(0);
    let old = s.store.insert(Point::new(100, 200), EntityKind::Bullet);
    let fresh = s.store.watermark();
    let new = s.store.insert(Point::new(150, 200), EntityKind::Bullet);

    run(&mut s, VIEW, DirectionSet::empty(), fresh, &mut seeded_rng());

    assert_eq!(s.store.get(old).map(|e| e.pos.y), Some(192));
    assert_eq!(s.store.get(new).map(|e| e.pos.y), Some(200));
}

#[test]
fn run_culls_projectiles_without_skipping_neighbours() {
    let mut s = quiet_state(0);
    let gone_up = s.store.insert(Point::new(10, -1), EntityKind::Bullet);
    let stays = s.store.insert(Point::new(20, 200), EntityKind::Bullet);
    let gone_down = s.store.insert(Point::new(30, 395), EntityKind::EnemyBullet);
    let falls = s.store.insert(Point::new(40, 100), EntityKind::EnemyBullet);
    let fresh = s.store.watermark();

    run(&mut s, VIEW, DirectionSet::empty(), fresh, &mut seeded_rng());

    assert!(s.store.get(gone_up).is_none());
    assert!(s.store.get(gone_down).is_none());
    assert_eq!(s.store.get(stays).map(|e| e.pos.y), Some(192));
    assert_eq!(s.store.get(falls).map(|e| e.pos.y), Some(106));
    assert_eq!(s.store.len(), 2);
}

#[test]
fn run_leaves_boom_effects_in_place() {
    let mut s = quiet_state(0);
    let boom = s
        .store
        .insert(Point::new(50, 60), EntityKind::BoomEffect { spawned_at: 0 });
    let fresh = s.store.watermark();
    run(&mut s, VIEW, DirectionSet::empty(), fresh, &mut seeded_rng());
    assert_eq!(s.store.get(boom).map(|e| e.pos), Some(Point::new(50, 60)));
}
