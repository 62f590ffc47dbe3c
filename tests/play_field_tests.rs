//! Play field tests - simulation rules through the public API

use tui_snake3d::core::{InvalidDimension, PlayField};
use tui_snake3d::types::{Direction, Voxel, DEFAULT_DIMENSION, INITIAL_SNAKE_LEN};

/// A reference field with the food pinned away from the snake's first moves.
fn reference_field() -> PlayField {
    let mut field = PlayField::new(DEFAULT_DIMENSION, 1).unwrap();
    field.set_food(Voxel::new(0, 0, 9));
    field
}

#[test]
fn test_construction_rejects_bad_dimension() {
    assert_eq!(PlayField::new(0, 7).unwrap_err(), InvalidDimension(0));
    assert_eq!(PlayField::new(-18, 7).unwrap_err(), InvalidDimension(-18));
    assert!(PlayField::new(1, 7).is_ok());
}

#[test]
fn test_reference_scenario_one_tick_right() {
    // D=18, head (9,9,9), direction right, food elsewhere: one tick moves the
    // head to (10,9,9) and the length stays at 5.
    let mut field = reference_field();
    assert_eq!(field.head(), Voxel::new(9, 9, 9));

    field.update();

    assert_eq!(field.head(), Voxel::new(10, 9, 9));
    assert_eq!(field.snake_len(), INITIAL_SNAKE_LEN);
}

#[test]
fn test_length_changes_only_on_eating_ticks() {
    let mut field = reference_field();

    for _ in 0..40 {
        let before = field.snake_len();
        let eating = field.food() == expected_next_head(&field);

        field.update();

        if eating {
            assert_eq!(field.snake_len(), before + 1);
        } else {
            assert_eq!(field.snake_len(), before);
        }
    }
}

#[test]
fn test_coordinates_never_escape_bounds() {
    let mut field = reference_field();

    // A fixed steering script that criss-crosses every axis and wraps
    // several boundaries. Reversals in the script are ignored by the field.
    let script = [
        Direction::Right,
        Direction::Up,
        Direction::Forward,
        Direction::Left,
        Direction::Backward,
        Direction::Down,
    ];

    for step in 0..200 {
        field.set_direction(script[step % script.len()]);
        field.update();
        if field.game_over() {
            break;
        }
        for segment in field.segments() {
            assert!((0..DEFAULT_DIMENSION).contains(&segment.x));
            assert!((0..DEFAULT_DIMENSION).contains(&segment.y));
            assert!((0..DEFAULT_DIMENSION).contains(&segment.z));
        }
    }
}

#[test]
fn test_food_never_lands_on_the_snake() {
    // Drive the snake into its own food repeatedly; every replacement must
    // land on a free voxel.
    let mut field = PlayField::new(6, 3).unwrap();

    for _ in 0..60 {
        // Teleport the food directly into the snake's path.
        field.set_food(expected_next_head(&field));
        let before = field.snake_len();

        field.update();
        assert!(!field.game_over(), "scripted feeding should stay legal");
        assert_eq!(field.snake_len(), before + 1);

        let food = field.food();
        assert!(
            field.segments().all(|s| s != food),
            "replaced food {:?} collides with the snake",
            food
        );

        // Turn off the straight line so the growing body never blocks us:
        // alternate right/down/forward keeps the head on a fresh diagonal.
        let next = match field.snake_len() % 3 {
            0 => Direction::Right,
            1 => Direction::Down,
            _ => Direction::Forward,
        };
        field.set_direction(next);
        // The staircase path returns to its origin after 18 eats; stop well
        // before the ever-growing body blocks it.
        if field.snake_len() >= 20 {
            break;
        }
    }
}

#[test]
fn test_opposite_direction_is_never_applied() {
    let mut field = reference_field();

    field.set_direction(Direction::Left);
    assert_eq!(field.direction(), Direction::Right);

    field.set_direction(Direction::Up);
    field.set_direction(Direction::Down);
    assert_eq!(field.direction(), Direction::Up);

    field.set_direction(Direction::Backward);
    field.set_direction(Direction::Forward);
    assert_eq!(field.direction(), Direction::Backward);
}

#[test]
fn test_self_collision_sets_game_over_once() {
    let mut field = reference_field();

    // Curl back into the starting column.
    field.update();
    field.set_direction(Direction::Up);
    field.update();
    field.set_direction(Direction::Left);
    field.update();

    assert!(field.game_over());

    // The flag is terminal; ticking further changes nothing.
    let snapshot: Vec<Voxel> = field.segments().collect();
    field.update();
    field.update();
    assert!(field.game_over());
    assert_eq!(field.segments().collect::<Vec<_>>(), snapshot);
}

/// Where the head will be after the next update, given the current direction.
fn expected_next_head(field: &PlayField) -> Voxel {
    let (dx, dy, dz) = field.direction().delta();
    let head = field.head();
    let d = field.dimension();
    Voxel::new(
        (head.x + dx).rem_euclid(d),
        (head.y + dy).rem_euclid(d),
        (head.z + dz).rem_euclid(d),
    )
}
