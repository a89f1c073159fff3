//! End-to-end collision scenarios
//!
//! Builds small worlds through the atlas and checks the checker's answers
//! the way game logic consumes them during a tick.

use std::collections::HashSet;

use crate::core::PhysicsConfig;
use crate::foundation::logging;
use crate::foundation::math::{Point2, TileCoord, Vec2};
use crate::physics::collision::Shape;
use crate::physics::{CollisionChecker, ForwardMotion, PhysicalEntity};
use crate::world::{Atlas, LayerKind, ObjectLayer, TileLayer};
use approx::assert_relative_eq;

fn ball(x: f32, y: f32, radius: f32) -> PhysicalEntity {
    PhysicalEntity::new(Point2::new(x, y), Shape::circle(radius))
}

fn open_world(config: &PhysicsConfig) -> Atlas {
    logging::try_init();
    let mut atlas = Atlas::new();
    atlas.insert_layer(LayerKind::Obstacle, TileLayer::new(32, 32, false));
    atlas.insert_layer(LayerKind::Object, ObjectLayer::new(config));
    atlas
}

#[test]
fn overlapping_circles_intersect() {
    let a = ball(0.0, 0.0, 1.0);
    let b = ball(1.0, 0.0, 1.0);
    assert!(a.intersects(&b, 0.0));
    assert!(b.intersects(&a, 0.0));
}

#[test]
fn distant_circles_do_not_intersect() {
    let a = ball(0.0, 0.0, 1.0);
    let b = ball(10.0, 0.0, 1.0);
    assert!(!a.intersects(&b, 0.0));
    assert!(!b.intersects(&a, 0.0));
}

#[test]
fn marking_a_tile_changes_only_the_tile_answer() {
    let config = PhysicsConfig::default();
    let mut atlas = open_world(&config);
    let inside = PhysicalEntity::rectangle(Point2::new(0.5, 0.5), Vec2::new(0.5, 0.5));

    {
        let checker = CollisionChecker::new(&atlas, &config).unwrap();
        assert!(!checker.collides_with_tile(&inside));
    }

    if let Some(obstacles) = atlas.tile_layer_mut(LayerKind::Obstacle) {
        obstacles.set_colliding(TileCoord::new(0, 0), true);
    }

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    assert!(checker.collides_with_tile(&inside));
    assert_eq!(inside.position, Point2::new(0.5, 0.5));
    assert_eq!(inside.cover_tiles(), vec![TileCoord::new(0, 0)]);
}

#[test]
fn collision_threat_reports_other_once_it_overlaps() {
    let config = PhysicsConfig::default();
    let atlas = open_world(&config);
    let checker = CollisionChecker::new(&atlas, &config).unwrap();

    let target = ball(0.0, 0.0, 1.0);
    let mut other = ball(5.0, 0.0, 1.0);
    assert!(checker.collision_threat(&target, &[&target, &other], 0.0).is_empty());

    other.position = Point2::new(0.5, 0.0);
    let threats = checker.collision_threat(&target, &[&target, &other], 0.0);
    assert_eq!(threats.len(), 1);
    assert!(std::ptr::eq(threats[0], &other));
}

#[test]
fn collision_threat_widens_by_eps_and_deduplicates() {
    let config = PhysicsConfig::default();
    let atlas = open_world(&config);
    let checker = CollisionChecker::new(&atlas, &config).unwrap();

    let target = ball(0.0, 0.0, 1.0);
    let near = ball(2.2, 0.0, 1.0);
    let twin = near.clone();

    assert!(checker.collision_threat(&target, &[&near], 0.0).is_empty());
    let threats = checker.collision_threat(&target, &[&near, &near, &twin], 0.25);
    assert_eq!(threats.len(), 2);
    assert!(std::ptr::eq(threats[0], &near));
    assert!(std::ptr::eq(threats[1], &twin));
}

#[test]
fn entity_in_layer_does_not_collide_with_itself() {
    let config = PhysicsConfig::default();
    let mut atlas = open_world(&config);
    let layer = atlas.object_layer_mut().unwrap();
    let lonely = layer.add(ball(4.0, 4.0, 1.0)).unwrap();

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    let layer = atlas.object_layer().unwrap();
    let entity = layer.get(lonely).unwrap();
    assert!(!checker.collides_with_physical_entity(entity));
    assert!(!checker.collides(entity));

    // An equal copy outside the layer is a different entity.
    let copy = entity.clone();
    assert!(checker.collides_with_physical_entity(&copy));
}

#[test]
fn entities_in_layer_see_each_other() {
    let config = PhysicsConfig::default();
    let mut atlas = open_world(&config);
    let layer = atlas.object_layer_mut().unwrap();
    let a = layer.add(ball(4.0, 4.0, 1.0)).unwrap();
    let b = layer.add(ball(5.5, 4.0, 1.0)).unwrap();
    let c = layer.add(ball(12.0, 4.0, 1.0)).unwrap();

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    let layer = atlas.object_layer().unwrap();
    assert!(checker.collides_with_physical_entity(layer.get(a).unwrap()));
    assert!(checker.collides_with_physical_entity(layer.get(b).unwrap()));
    assert!(!checker.collides_with_physical_entity(layer.get(c).unwrap()));
}

#[test]
fn broad_phase_agrees_with_exhaustive_narrow_phase() {
    for config in [PhysicsConfig::default(), PhysicsConfig::default().with_grid(10.0)] {
        let mut atlas = open_world(&config);
        let layer = atlas.object_layer_mut().unwrap();
        for i in 0..40u8 {
            let x = f32::from(i % 8) * 3.1;
            let y = f32::from(i / 8) * 2.7;
            let entity = if i % 3 == 0 {
                PhysicalEntity::rectangle(Point2::new(x, y), Vec2::new(1.5, 2.5))
            } else {
                ball(x, y, 0.5 + f32::from(i % 4) * 0.4)
            };
            layer.add(entity).unwrap();
        }

        let checker = CollisionChecker::new(&atlas, &config).unwrap();
        let all = atlas.object_layer().unwrap().get_all();
        for entity in &all {
            let exhaustive = all
                .iter()
                .any(|other| !std::ptr::eq(*other, *entity) && entity.intersects(other, 0.0));
            assert_eq!(checker.collides_with_physical_entity(entity), exhaustive);
        }
    }
}

#[test]
fn intersection_is_symmetric_for_every_shape_pair() {
    let shapes = [
        ball(0.0, 0.0, 1.0),
        ball(1.9, 0.3, 0.5),
        PhysicalEntity::rectangle(Point2::new(1.0, 1.6), Vec2::new(1.0, 0.8)),
        PhysicalEntity::rectangle(Point2::new(-1.2, 0.0), Vec2::new(0.5, 3.0)),
    ];

    for a in &shapes {
        for b in &shapes {
            for eps in [0.0, 0.05, 0.5] {
                assert_eq!(a.intersects(b, eps), b.intersects(a, eps));
            }
        }
    }
}

#[test]
fn tile_eps_check_leaves_entity_untouched() {
    let config = PhysicsConfig::default();
    let atlas = Atlas::from_obstacle_rows(&["....", "..#.", "...."], &config);
    let checker = CollisionChecker::new(&atlas, &config).unwrap();

    let entity = ball(1.5, 1.5, 0.4);
    let before = entity.clone();

    assert!(!checker.collides_with_tile(&entity));
    assert!(checker.collides_with_tile_eps(&entity, 0.2));
    assert!(!checker.collides_with_tile_eps(&entity, 0.05));
    assert_eq!(entity, before);
    assert_relative_eq!(entity.bounding_radius(), 0.4);
}

#[test]
fn out_of_bounds_tiles_block_by_default() {
    let config = PhysicsConfig::default();
    let atlas = Atlas::from_obstacle_rows(&["...", "...", "..."], &config);
    let checker = CollisionChecker::new(&atlas, &config).unwrap();

    assert!(!checker.collides_with_tile(&ball(1.5, 1.5, 0.4)));
    assert!(checker.collides_with_tile(&ball(0.2, 1.5, 0.4)));
}

#[test]
fn group_checks() {
    let config = PhysicsConfig::default();
    let atlas = Atlas::from_obstacle_rows(&["........", "......#.", "........"], &config);
    let checker = CollisionChecker::new(&atlas, &config).unwrap();

    let a = ball(1.5, 1.5, 0.4);
    let b = ball(3.5, 1.5, 0.4);
    let c = ball(3.9, 1.5, 0.4);
    let walled = ball(6.5, 1.5, 0.4);

    assert!(!checker.collides_with_each_other(&[&a, &b]));
    assert!(checker.collides_with_each_other(&[&a, &b, &c]));
    assert!(!checker.collides_with_each_other(&[]));

    assert!(!checker.collides_group(&[&a, &b]));
    assert!(checker.collides_group(&[&a, &c, &b]));
    assert!(checker.collides_group(&[&a, &walled]));
}

#[test]
fn collision_groups_is_a_single_group() {
    let config = PhysicsConfig::default();
    let mut atlas = open_world(&config);

    {
        let checker = CollisionChecker::new(&atlas, &config).unwrap();
        let groups = checker.collision_groups();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
    }

    let layer = atlas.object_layer_mut().unwrap();
    layer.add(ball(2.0, 2.0, 1.0));
    layer.add(ball(20.0, 20.0, 1.0));
    layer.add(ball(2.5, 2.0, 1.0));

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    let groups = checker.collision_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn tick_moves_then_checks() {
    let config = PhysicsConfig::default().with_grid(10.0);
    let mut atlas = Atlas::from_obstacle_rows(&["..........", "..........", "..........", ".........."], &config);
    let layer = atlas.object_layer_mut().unwrap();
    let runner = layer
        .add(ball(1.5, 1.5, 0.4).with_motion(ForwardMotion::new(2.0, 0.0)))
        .unwrap();
    let wall = layer.add(ball(4.5, 1.5, 0.4)).unwrap();

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    let layer = atlas.object_layer().unwrap();
    assert!(!checker.collides(layer.get(runner).unwrap()));

    let max_speed = checker.max_object_speed();
    let layer = atlas.object_layer_mut().unwrap();
    layer.move_entities(max_speed);
    layer.move_entities(max_speed);

    let checker = CollisionChecker::new(&atlas, &config).unwrap();
    let layer = atlas.object_layer().unwrap();
    let moved = layer.get(runner).unwrap();
    assert_relative_eq!(moved.position, Point2::new(3.5, 1.5), epsilon = 1e-5);
    assert!(!checker.collides(moved));

    let threats = checker.collision_threat(moved, &layer.get_all(), 0.3);
    assert_eq!(threats.len(), 1);
    assert!(std::ptr::eq(threats[0], layer.get(wall).unwrap()));

    let covered: HashSet<TileCoord> = moved.cover_tiles().into_iter().collect();
    assert!(covered.contains(&TileCoord::new(3, 1)));
}
