//! Routing and autopilot behaviour

use last_mile::engine::{
    grid, step_direction, ActOutcome, Autopilot, Color, Command, Coordinate, Direction,
    FloorRouter, Goal, ItemId, Order, WarehouseWorld,
};

#[test]
fn test_route_is_shortest_and_adjacent() {
    let router = FloorRouter::new();
    let from = Coordinate::new(1, 4);
    let to = Coordinate::new(4, 1);

    let path = router.route(from, to).expect("floor is connected");
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    assert_eq!(path.len(), from.manhattan(&to) as usize + 1);
    for pair in path.windows(2) {
        assert_eq!(pair[0].manhattan(&pair[1]), 1);
    }
}

#[test]
fn test_route_avoids_zones_that_are_not_the_goal() {
    let router = FloorRouter::new();
    let path = router
        .route(Coordinate::new(4, 1), Coordinate::new(3, 0))
        .expect("floor is connected");
    assert_eq!(path.len(), 3);
    assert!(!path.iter().any(|cell| grid::is_reset(*cell)));

    let path = router
        .route(Coordinate::new(0, 1), Coordinate::new(3, 1))
        .expect("floor is connected");
    assert!(path.iter().all(|cell| cell.y > 0));
}

#[test]
fn test_route_off_the_floor() {
    let router = FloorRouter::new();
    assert!(router
        .route(Coordinate::new(0, 0), Coordinate::new(9, 9))
        .is_none());
}

#[test]
fn test_step_direction() {
    let origin = Coordinate::new(2, 2);
    assert_eq!(step_direction(origin, Coordinate::new(2, 1)), Some(Direction::Up));
    assert_eq!(step_direction(origin, Coordinate::new(3, 2)), Some(Direction::Right));
    assert_eq!(step_direction(origin, Coordinate::new(3, 3)), None);
}

#[test]
fn test_first_goal_is_nearest_green() {
    let mut world = WarehouseWorld::new_with_seed(3);
    world.start_game();
    let pilot = Autopilot::new();

    // (0,3) and (1,2) are both two steps away; stocking order breaks the tie
    assert_eq!(pilot.goal(&world), Some(Goal::Pickup(Coordinate::new(0, 3))));
    assert!(matches!(
        pilot.next_command(&world),
        Some(Command::Move(Direction::Up | Direction::Left))
    ));
}

#[test]
fn test_wrong_cargo_heads_for_reset() {
    let mut world = WarehouseWorld::new_with_seed(3);
    world.start_game();
    world.move_forklift(Direction::Up);
    world.move_forklift(Direction::Up);
    world.move_forklift(Direction::Right);
    assert_eq!(world.storage.item_at(world.forklift.position()), Some(Color::Blue));
    world.act();

    let pilot = Autopilot::new();
    assert_eq!(pilot.goal(&world), Some(Goal::Reset));
}

#[test]
fn test_idle_outside_play() {
    let world = WarehouseWorld::new();
    assert_eq!(Autopilot::new().next_command(&world), None);
}

#[test]
fn test_autopilot_completes_orders() {
    let mut world = WarehouseWorld::new_with_seed(21);
    world.start_game();
    let pilot = Autopilot::new();

    for _ in 0..20_000 {
        if !world.session.is_playing() {
            break;
        }
        if let Some(command) = pilot.next_command(&world) {
            world.apply(command);
        }
        assert!(grid::in_bounds(world.forklift.position()));
        assert!(world.forklift.cargo.len() <= 5);
        world.advance(100);
    }

    assert!(world.session.completed_orders >= 1);
    assert!(world.session.money >= 2100);
}

#[test]
fn test_idles_on_an_order_the_floor_cannot_fill() {
    let mut world = WarehouseWorld::new_with_seed(3);
    world.start_game();
    // Only three blue items are stocked
    world.order = Order::new(vec![Color::Blue; 4], 2700);
    let pilot = Autopilot::new();

    assert_eq!(pilot.goal(&world), None);
    assert_eq!(pilot.next_command(&world), None);

    // Held items still count towards what can be collected
    world.order = Order::new(vec![Color::Blue; 3], 2400);
    world.move_forklift(Direction::Up);
    world.move_forklift(Direction::Up);
    world.move_forklift(Direction::Right);
    assert_eq!(
        world.act(),
        ActOutcome::PickedUp(ItemId::new(Color::Blue, Coordinate::new(2, 2)))
    );
    assert!(matches!(pilot.goal(&world), Some(Goal::Pickup(_))));
}
