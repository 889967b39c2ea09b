use crate::error::{CopWinError, InputError};
use crate::game::{
    GameConfig, GameGraph, GameGraphBuilder, GameGraphConfig, GameGraphState, GameGraphStep,
    GameVertex, StateSpace, Turn, build_game_graph,
};
use crate::test_utils::{TestGraph, complete, cycle, init_logger, periodic_path3};
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computable, ComputationStep, Incomplete, Stateful};
use std::collections::HashSet;

fn build(graph: &TestGraph, config: &GameConfig) -> Cancellable<GameGraph<u32>> {
    let config = GameGraphConfig::new(graph.graph(), config).unwrap();
    GameGraphBuilder::run(config, GameGraphState::default())
}

fn vertex(cops: &[u32], robber: u32, turn: Turn, time: usize) -> GameVertex<u32> {
    GameVertex {
        cops: cops.to_vec(),
        robber,
        turn,
        time,
    }
}

#[test]
fn test_state_space_encoding() {
    let space = StateSpace::new(4, 2, 3).unwrap();
    assert_eq!(space.layer_size(), 64);
    assert_eq!(space.layer_count(), 6);
    assert_eq!(space.vertex_count(), 384);
    assert_eq!(space.placement_count(), 16);

    let mut positions = [0; 3];
    for id in [0, 17, 100, 383] {
        let (turn, time, code) = space.split(id);
        assert_eq!(space.id(turn, time, code), id);
        space.decode_positions(code, &mut positions);
        assert_eq!(space.encode_positions(&positions), code);
    }

    // Cops (1, 3), robber 3.
    let code = space.encode_positions(&[1, 3, 3]);
    assert_eq!(code, 16 + 12 + 3);
    assert!(space.is_capture(code));
    assert!(!space.is_capture(space.encode_positions(&[1, 2, 3])));
    assert_eq!(space.layer_parts(space.layer(Turn::Robber, 2)), (Turn::Robber, 2));
    assert_eq!(Turn::Cops.next(), Turn::Robber);

    assert_eq!(
        StateSpace::new(usize::MAX, 1, 1),
        Err(InputError::StateSpaceOverflow {
            vertices: usize::MAX,
            cops: 1
        })
    );
}

#[test]
fn test_vertex_count() -> Cancellable<()> {
    init_logger();
    let game = build(&cycle(4), &GameConfig::new(2))?;
    assert_eq!(game.vertex_count(), 4 * 4 * 4 * 2);
    assert_eq!(game.vertices().count(), game.vertex_count());

    let game = build(&periodic_path3(), &GameConfig::new(1))?;
    assert_eq!(game.space().time_horizon(), 2);
    assert_eq!(game.vertex_count(), 3 * 3 * 2 * 2);
    Ok(())
}

#[test]
fn test_arc_counts() -> Cancellable<()> {
    init_logger();
    assert_eq!(build(&complete(3), &GameConfig::new(1))?.arc_count(), 36);
    assert_eq!(build(&complete(2), &GameConfig::new(2))?.arc_count(), 12);
    assert_eq!(build(&cycle(4), &GameConfig::new(1))?.arc_count(), 72);
    assert_eq!(build(&periodic_path3(), &GameConfig::new(1))?.arc_count(), 48);

    let forbid = GameConfig::new(1).robber_may_enter_cop(false);
    assert_eq!(build(&complete(3), &forbid)?.arc_count(), 30);
    assert_eq!(build(&cycle(4), &forbid)?.arc_count(), 64);
    Ok(())
}

#[test]
fn test_robber_moves_advance_time() -> Cancellable<()> {
    init_logger();
    let game = build(&complete(3), &GameConfig::new(1))?;
    let source = game.id_of(&vertex(&[1], 2, Turn::Robber, 0)).unwrap();
    let targets: HashSet<_> = game
        .labelled_arcs()
        .filter(|(from, _)| game.id_of(from) == Some(source))
        .map(|(_, to)| to)
        .collect();
    let expected: HashSet<_> = [
        vertex(&[1], 1, Turn::Cops, 0),
        vertex(&[1], 2, Turn::Cops, 0),
        vertex(&[1], 3, Turn::Cops, 0),
    ]
    .into_iter()
    .collect();
    assert_eq!(targets, expected);
    Ok(())
}

#[test]
fn test_periodic_moves() -> Cancellable<()> {
    init_logger();
    let game = build(&periodic_path3(), &GameConfig::new(1))?;
    let successors = |v: GameVertex<u32>| -> HashSet<GameVertex<u32>> {
        let id = game.id_of(&v).unwrap();
        game.arcs()
            .iter()
            .filter(|(s, _)| *s == id)
            .map(|(_, t)| game.vertex(*t))
            .collect()
    };

    // Edge (2, 3) is absent at time 0.
    assert_eq!(
        successors(vertex(&[3], 1, Turn::Cops, 0)),
        HashSet::from([vertex(&[3], 1, Turn::Robber, 0)])
    );
    assert_eq!(
        successors(vertex(&[3], 1, Turn::Cops, 1)),
        HashSet::from([
            vertex(&[3], 1, Turn::Robber, 1),
            vertex(&[2], 1, Turn::Robber, 1)
        ])
    );
    // Time wraps around after a robber move at the last step.
    assert_eq!(
        successors(vertex(&[1], 3, Turn::Robber, 1)),
        HashSet::from([vertex(&[1], 3, Turn::Cops, 0), vertex(&[1], 2, Turn::Cops, 0)])
    );
    Ok(())
}

#[test]
fn test_arc_structure() -> Cancellable<()> {
    init_logger();
    let game = build(&cycle(4), &GameConfig::new(2))?;
    let mut seen = HashSet::new();
    for (from, to) in game.labelled_arcs() {
        assert!(!from.is_capture());
        assert_eq!(to.turn, from.turn.next());
        match from.turn {
            Turn::Cops => {
                assert_eq!(to.time, from.time);
                assert_eq!(to.robber, from.robber);
            }
            Turn::Robber => {
                assert_eq!(to.time, (from.time + 1) % game.space().time_horizon());
                assert_eq!(to.cops, from.cops);
            }
        }
        assert!(seen.insert((from, to)), "duplicate arc");
    }
    for id in 0..game.vertex_count() {
        assert_eq!(game.is_capture(id), game.vertex(id).is_capture());
    }
    Ok(())
}

#[test]
fn test_vertex_id_roundtrip() -> Cancellable<()> {
    let game = build(&periodic_path3(), &GameConfig::new(2))?;
    for id in 0..game.vertex_count() {
        assert_eq!(game.id_of(&game.vertex(id)), Some(id));
    }
    assert_eq!(game.id_of(&vertex(&[1], 2, Turn::Cops, 0)), None);
    assert_eq!(game.id_of(&vertex(&[1, 4], 2, Turn::Cops, 0)), None);
    assert_eq!(game.id_of(&vertex(&[1, 3], 2, Turn::Cops, 2)), None);
    Ok(())
}

#[test]
fn test_reachability_game_partition() -> Cancellable<()> {
    let game = build(&complete(3), &GameConfig::new(1))?;
    let reachability = game.reachability_game();
    assert_eq!(reachability.vertex_count(), game.vertex_count());
    assert_eq!(reachability.arc_count(), game.arc_count());
    let finals: HashSet<_> = reachability.finals().copied().collect();
    // Three capture positions in each of the two layers.
    assert_eq!(finals.len(), 6);
    assert!(finals.iter().all(|id| game.is_capture(*id)));
    Ok(())
}

#[test]
fn test_time_horizon_override() -> Cancellable<()> {
    let graph = periodic_path3();
    let game = build(&graph, &GameConfig::new(1).time_horizon(4))?;
    assert_eq!(game.vertex_count(), 72);
    assert_eq!(game.arc_count(), 96);

    for horizon in [0, 3] {
        assert_eq!(
            GameGraphConfig::new(graph.graph(), &GameConfig::new(1).time_horizon(horizon))
                .unwrap_err(),
            InputError::HorizonNotMultiple { horizon, period: 2 }
        );
    }
    Ok(())
}

#[test]
fn test_invalid_configuration() {
    assert_eq!(
        GameGraphConfig::new(complete(3).graph(), &GameConfig::new(0)).unwrap_err(),
        InputError::NoCops
    );
    assert!(matches!(
        build_game_graph(&[1, 2], &[(1, 2)], None, 0),
        Err(CopWinError::Input(InputError::NoCops))
    ));
    assert!(matches!(
        build_game_graph(&[1, 2], &[(1, 3)], None, 1),
        Err(CopWinError::Input(InputError::UnknownEndpoint(_, _)))
    ));
}

#[test]
fn test_max_vertices_cancels() {
    init_logger();
    let config = GameConfig::new(2).max_vertices(100);
    let result = build(&cycle(4), &config);
    assert!(result.is_err());
    assert!(build(&cycle(4), &config.max_vertices(128)).is_ok());
}

#[test]
fn test_builder_suspends_per_layer() {
    init_logger();
    let config = GameGraphConfig::new(periodic_path3().graph(), &GameConfig::new(1)).unwrap();
    let mut state = GameGraphState::default();
    let mut suspended = 0;
    let mut halfway = None;
    let game: GameGraph<u32> = loop {
        match GameGraphStep::step(&config, &mut state) {
            Ok(game) => break game,
            Err(Incomplete::Suspended) => suspended += 1,
            Err(_) => panic!("builder cancelled"),
        }
        if suspended == 2 {
            halfway = Some(state.clone());
        }
    };
    assert_eq!(suspended, 4);
    assert_eq!(state.layer, 4);
    assert_eq!(game.arc_count(), 48);
    // The finished graph takes ownership of the arcs.
    assert!(state.arcs.is_empty());

    let halfway = halfway.unwrap();
    assert_eq!(halfway.layer, 2);
    assert!(!halfway.arcs.is_empty());
    let resumed = GameGraphBuilder::configure(config, halfway).compute().unwrap();
    assert_eq!(resumed.arcs(), game.arcs());
}

#[test]
fn test_build_game_graph_free_function() {
    let graph = periodic_path3();
    let game = build_game_graph(&graph.vertices, &graph.edges, graph.presence().as_ref(), 1)
        .unwrap();
    assert_eq!(game.vertex_count(), 36);
    assert_eq!(game.arc_count(), 48);
}
