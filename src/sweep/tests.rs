use crate::error::{CopWinError, InputError};
use crate::game::GameConfig;
use crate::graph::PresencePattern;
use crate::sweep::{
    MappingSpace, SweepConfig, SweepOutcome, SweepSummary, Verdict, presence_mappings, sweep,
};
use crate::test_utils::{cycle, init_logger, path};
use cancel_this::Cancellable;

fn strings(mapping: &[PresencePattern]) -> Vec<String> {
    mapping.iter().map(|it| it.to_string()).collect()
}

#[test]
fn test_mapping_enumeration_order() -> Cancellable<()> {
    let mappings = presence_mappings(2, 2)
        .unwrap()
        .collect::<Cancellable<Vec<_>>>()?;
    assert_eq!(mappings.len(), 9);
    assert_eq!(strings(&mappings[0]), vec!["01", "01"]);
    assert_eq!(strings(&mappings[1]), vec!["01", "10"]);
    assert_eq!(strings(&mappings[3]), vec!["10", "01"]);
    assert_eq!(strings(&mappings[8]), vec!["11", "11"]);
    Ok(())
}

#[test]
fn test_mapping_space_edge_cases() -> Cancellable<()> {
    // A footprint without edges has exactly one (empty) mapping.
    let mappings = presence_mappings(0, 3)
        .unwrap()
        .collect::<Cancellable<Vec<_>>>()?;
    assert_eq!(mappings, vec![Vec::new()]);

    assert_eq!(MappingSpace::new(3, 0), Err(InputError::PatternLength(0)));
    assert_eq!(MappingSpace::new(3, 17), Err(InputError::PatternLength(17)));
    assert_eq!(MappingSpace::new(3, 2).unwrap().mapping_count(), Some(27));
    assert_eq!(MappingSpace::new(4, 16).unwrap().mapping_count(), Some(65535u128.pow(4)));

    let mappings = presence_mappings(1, 16).unwrap();
    assert_eq!(mappings.count(), 65535);
    Ok(())
}

#[test]
fn test_sweep_single_edge() {
    init_logger();
    let config = SweepConfig::new(GameConfig::new(1), 2).workers(2);
    let mut outcomes = Vec::new();
    let summary = sweep(&path(2).graph(), &config, |outcome| {
        outcomes.push(outcome.clone());
        Ok(())
    })
    .unwrap();
    assert_eq!(
        summary,
        SweepSummary {
            instances: 3,
            cop_wins: 3,
            robber_wins: 0,
            timed_out: 0
        }
    );
    assert_eq!(
        outcomes[0],
        SweepOutcome {
            index: 0,
            patterns: vec!["01".parse().unwrap()],
            verdict: Verdict::CopWin
        }
    );
}

#[test]
fn test_sweep_four_cycle_in_order() {
    init_logger();
    let config = SweepConfig::new(GameConfig::new(1), 2)
        .workers(3)
        .batch_size(4);
    let mut outcomes = Vec::new();
    let summary = sweep(&cycle(4).graph(), &config, |outcome| {
        outcomes.push(outcome.clone());
        Ok(())
    })
    .unwrap();
    assert_eq!(summary.instances, 81);
    assert_eq!(summary.cop_wins, 64);
    assert_eq!(summary.robber_wins, 17);

    let indices: Vec<usize> = outcomes.iter().map(|it| it.index).collect();
    assert_eq!(indices, (0..81).collect::<Vec<_>>());
    // All edges "01" and the static cycle are both robber wins.
    assert_eq!(outcomes[0].verdict, Verdict::RobberWin);
    assert_eq!(outcomes[80].verdict, Verdict::RobberWin);
    assert_eq!(strings(&outcomes[80].patterns), vec!["11"; 4]);
}

#[test]
fn test_sweep_cancelled_instances() {
    init_logger();
    let config = SweepConfig::new(GameConfig::new(1).max_vertices(4), 1);
    let summary = sweep(&cycle(4).graph(), &config, |_| Ok(())).unwrap();
    assert_eq!(summary.instances, 1);
    assert_eq!(summary.timed_out, 1);
}

#[test]
fn test_sweep_with_timeout() {
    init_logger();
    let config =
        SweepConfig::new(GameConfig::new(1), 1).timeout(std::time::Duration::from_secs(30));
    let summary = sweep(&path(3).graph(), &config, |_| Ok(())).unwrap();
    assert_eq!(summary.cop_wins, 1);
}

#[test]
fn test_sweep_errors() {
    let config = SweepConfig::new(GameConfig::new(0), 1);
    assert!(matches!(
        sweep(&path(2).graph(), &config, |_| Ok(())),
        Err(CopWinError::Input(InputError::NoCops))
    ));

    let config = SweepConfig::new(GameConfig::new(1), 20);
    assert!(matches!(
        sweep(&path(2).graph(), &config, |_| Ok(())),
        Err(CopWinError::Input(InputError::PatternLength(20)))
    ));

    let config = SweepConfig::new(GameConfig::new(1).time_horizon(2), 3);
    let mut calls = 0;
    let result = sweep(&path(2).graph(), &config, |_| {
        calls += 1;
        Ok(())
    });
    assert!(matches!(
        result,
        Err(CopWinError::Input(InputError::HorizonNotMultiple {
            horizon: 2,
            period: 3
        }))
    ));
    assert_eq!(calls, 0);

    let config = SweepConfig::new(GameConfig::new(1).time_horizon(4), 2);
    let summary = sweep(&path(2).graph(), &config, |_| Ok(())).unwrap();
    assert_eq!(summary.instances, 3);

    let config = SweepConfig::new(GameConfig::new(1), 2);
    let result = sweep(&path(2).graph(), &config, |outcome| {
        if outcome.index == 1 {
            Err(std::io::Error::other("sink closed"))
        } else {
            Ok(())
        }
    });
    assert!(matches!(result, Err(CopWinError::Io(_))));
}
