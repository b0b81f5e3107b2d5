use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use wayfarer::common::{replay, AggregateRoot, DomainError};
use wayfarer::domains::environment::{CellMarker, Environment, EnvironmentEvent, Position};
use wayfarer::domains::navigation::{NavigationEvent, Navigator};

fn open_environment(width: usize, height: usize, goal: Position) -> Environment {
    Environment::with_obstacles("env-1".to_string(), width, height, HashSet::new(), goal)
        .expect("open environment")
}

#[test]
fn test_environment_generation_respects_requested_layout() {
    let mut rng = StdRng::seed_from_u64(42);
    let goal = Position::new(5, 7);
    let environment =
        Environment::new("env-1".to_string(), 8, 6, 10, goal, &mut rng).expect("environment");

    assert_eq!(environment.obstacles.len(), 10);
    assert!(!environment.obstacles.contains(&Environment::START_POSITION));
    assert!(!environment.obstacles.contains(&goal));

    let bounds = environment.grid.bounds();
    for obstacle in &environment.obstacles {
        assert!(bounds.contains(obstacle));
    }
}

#[test]
fn test_environment_creation_emits_provisioned_event() {
    let environment = open_environment(5, 5, Position::new(4, 4));

    assert_eq!(environment.version, 0);
    assert_eq!(environment.uncommitted_events().len(), 1);

    match &environment.uncommitted_events()[0] {
        EnvironmentEvent::EnvironmentProvisioned {
            environment_id,
            width,
            height,
            obstacle_count,
            goal,
            ..
        } => {
            assert_eq!(environment_id, "env-1");
            assert_eq!(*width, 5);
            assert_eq!(*height, 5);
            assert_eq!(*obstacle_count, 0);
            assert_eq!(*goal, Position::new(4, 4));
        }
        _ => panic!("Expected EnvironmentProvisioned event"),
    }
}

#[test]
fn test_environment_rejects_goal_outside_grid() {
    let result = Environment::with_obstacles(
        "env-1".to_string(),
        5,
        5,
        HashSet::new(),
        Position::new(9, 9),
    );

    match result.unwrap_err() {
        DomainError::InvalidCommand { reason } => {
            assert!(reason.contains("Goal (9, 9)"));
        }
        _ => panic!("Expected InvalidCommand error"),
    }
}

#[test]
fn test_environment_rejects_obstacle_on_start_cell() {
    let obstacles = HashSet::from([Position::new(0, 0)]);
    let result =
        Environment::with_obstacles("env-1".to_string(), 5, 5, obstacles, Position::new(4, 4));

    match result.unwrap_err() {
        DomainError::InvalidCommand { reason } => {
            assert!(reason.contains("start or goal"));
        }
        _ => panic!("Expected InvalidCommand error"),
    }
}

#[test]
fn test_update_agent_position_is_idempotent_on_grid() {
    let mut environment = open_environment(5, 5, Position::new(4, 4));

    environment
        .update_agent_position(Position::new(1, 0))
        .expect("first update");
    let after_first = environment.grid.clone();

    environment
        .update_agent_position(Position::new(1, 0))
        .expect("second update");

    assert_eq!(environment.grid, after_first);

    let agent_markers = environment
        .grid
        .rows()
        .flat_map(|row| row.iter())
        .filter(|marker| **marker == CellMarker::Agent)
        .count();
    assert_eq!(agent_markers, 1);
    assert_eq!(environment.agent_position, Position::new(1, 0));
}

#[test]
fn test_update_agent_position_emits_marker_moved_event() {
    let mut environment = open_environment(5, 5, Position::new(4, 4));
    environment.take_uncommitted_events();

    environment
        .update_agent_position(Position::new(0, 1))
        .expect("update");

    assert_eq!(environment.uncommitted_events().len(), 1);
    match &environment.uncommitted_events()[0] {
        EnvironmentEvent::AgentMarkerMoved { from, to, .. } => {
            assert_eq!(*from, Position::new(0, 0));
            assert_eq!(*to, Position::new(0, 1));
        }
        _ => panic!("Expected AgentMarkerMoved event"),
    }
}

#[test]
fn test_perception_snapshot_reflects_world_state() {
    let obstacles = HashSet::from([Position::new(2, 2), Position::new(3, 1)]);
    let environment = Environment::with_obstacles(
        "env-1".to_string(),
        6,
        4,
        obstacles.clone(),
        Position::new(3, 5),
    )
    .expect("environment");

    let perception = environment.perception();
    assert_eq!(perception.agent_position, Environment::START_POSITION);
    assert_eq!(perception.goal_position, Position::new(3, 5));
    assert_eq!(perception.obstacles, obstacles);
    assert_eq!(perception.bounds.width, 6);
    assert_eq!(perception.bounds.height, 4);
}

#[test]
fn test_navigator_creation() {
    let navigator = Navigator::new("nav-1".to_string(), Position::new(0, 0));

    assert_eq!(navigator.id, "nav-1");
    assert_eq!(navigator.position, Position::new(0, 0));
    assert!(navigator.history.contains(&Position::new(0, 0)));
    assert_eq!(navigator.version, 0);
    assert_eq!(navigator.uncommitted_events().len(), 1);

    match &navigator.uncommitted_events()[0] {
        NavigationEvent::NavigatorCreated {
            navigator_id,
            start,
            ..
        } => {
            assert_eq!(navigator_id, "nav-1");
            assert_eq!(*start, Position::new(0, 0));
        }
        _ => panic!("Expected NavigatorCreated event"),
    }
}

#[test]
fn test_update_state_records_previous_position_first() {
    let mut navigator = Navigator::new("nav-1".to_string(), Position::new(0, 0));

    navigator
        .update_state(Position::new(0, 1))
        .expect("first move");
    assert_eq!(navigator.position, Position::new(0, 1));
    assert!(navigator.history.contains(&Position::new(0, 0)));
    assert!(!navigator.history.contains(&Position::new(0, 1)));

    navigator
        .update_state(Position::new(1, 1))
        .expect("second move");
    assert_eq!(navigator.position, Position::new(1, 1));
    assert!(navigator.history.contains(&Position::new(0, 1)));
    assert_eq!(navigator.history.len(), 2);
    assert_eq!(
        navigator.history.positions(),
        &[Position::new(0, 0), Position::new(0, 1)]
    );
}

#[test]
fn test_navigator_state_is_reproducible_from_event_history() {
    let mut navigator = Navigator::new("nav-1".to_string(), Position::new(0, 0));
    navigator
        .update_state(Position::new(1, 0))
        .expect("first move");
    navigator
        .update_state(Position::new(2, 0))
        .expect("second move");

    let events = navigator.uncommitted_events().to_vec();
    let replayed = replay(
        Navigator::new("nav-1".to_string(), Position::new(0, 0)),
        events,
    )
    .expect("replay");

    assert_eq!(replayed.position, navigator.position);
    assert_eq!(replayed.history, navigator.history);
}
