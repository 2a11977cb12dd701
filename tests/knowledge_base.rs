use std::{sync::Arc, thread};

use maze_logic::{
    config::{Config, PivotPolicy},
    kb::{KnowledgeBase, TellOk},
    procedures::resolution::{resolve, resolve_with},
    structures::{clause::MazeClause, literal::MazeLiteral, proposition::Location},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn lit(symbol: &str, location: Location, polarity: bool) -> MazeLiteral {
    MazeLiteral::fresh((symbol, location), polarity)
}

fn neighbours((x, y): Location, width: i32, height: i32) -> Vec<Location> {
    [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
        .into_iter()
        .filter(|(nx, ny)| 0 <= *nx && *nx < width && 0 <= *ny && *ny < height)
        .collect()
}

/// A breeze at some location iff there is a pit at some neighbour, as clauses.
fn breeze_rules(kb: &mut KnowledgeBase, width: i32, height: i32) {
    for x in 0..width {
        for y in 0..height {
            let around = neighbours((x, y), width, height);

            let mut some_pit = vec![lit("B", (x, y), false)];
            some_pit.extend(around.iter().map(|n| lit("P", *n, true)));
            kb.tell(MazeClause::new(some_pit));

            for n in around {
                kb.tell(MazeClause::new([lit("P", n, false), lit("B", (x, y), true)]));
            }
        }
    }
}

mod grid {
    use super::*;

    #[test]
    fn no_breeze_means_safe_neighbours() {
        init_logger();
        let mut kb = KnowledgeBase::default();
        breeze_rules(&mut kb, 2, 2);

        kb.tell(MazeClause::from(lit("B", (0, 0), false)));

        assert_eq!(kb.ask(&lit("P", (0, 1), false)), Ok(true));
        assert_eq!(kb.ask(&lit("P", (1, 0), false)), Ok(true));
        assert_eq!(kb.ask(&lit("P", (1, 1), false)), Ok(false));
        assert_eq!(kb.ask(&lit("P", (1, 1), true)), Ok(false));
    }

    #[test]
    fn breeze_with_one_unsafe_neighbour() {
        init_logger();
        let mut kb = KnowledgeBase::default();

        // A breeze at (0, 0), with neighbours (0, 1) and (1, 0), and (1, 0) known to be safe.
        kb.tell(MazeClause::new([
            lit("B", (0, 0), false),
            lit("P", (0, 1), true),
            lit("P", (1, 0), true),
        ]));
        kb.tell(MazeClause::from(lit("B", (0, 0), true)));
        kb.tell(MazeClause::from(lit("P", (1, 0), false)));

        assert_eq!(kb.ask(&lit("P", (0, 1), true)), Ok(true));
        assert_eq!(kb.ask(&lit("P", (0, 1), false)), Ok(false));
    }

    #[test]
    fn duplicates_and_tautologies() {
        let mut kb = KnowledgeBase::default();
        let clause = MazeClause::new([lit("S", (1, 1), true), lit("W", (1, 2), false)]);

        assert_eq!(kb.tell(clause.clone()), TellOk::Added);
        assert_eq!(
            kb.tell(MazeClause::new([lit("W", (1, 2), false), lit("S", (1, 1), true)])),
            TellOk::Duplicate
        );
        assert_eq!(
            kb.tell(MazeClause::new([lit("S", (1, 1), true), lit("S", (1, 1), false)])),
            TellOk::Tautology
        );

        assert_eq!(kb.len(), 1);
        assert_eq!(kb.clauses().collect::<Vec<_>>(), vec![&clause]);
    }
}

mod policy {
    use super::*;

    #[test]
    fn cancel_all_gives_union() {
        let mut config = Config::default();
        assert!(config.multiple_pivots.set(PivotPolicy::CancelAll).is_ok());

        let c1 = MazeClause::new([
            lit("X", (1, 1), true),
            lit("Y", (1, 1), false),
            lit("Z", (1, 1), true),
        ]);
        let c2 = MazeClause::new([
            lit("X", (1, 1), false),
            lit("Y", (1, 1), true),
            lit("W", (1, 1), false),
        ]);

        assert!(resolve(&c1, &c2).is_empty());

        let results = resolve_with(&config, &c1, &c2);
        assert_eq!(results.len(), 1);
        assert!(results.contains(&MazeClause::new([lit("Z", (1, 1), true), lit("W", (1, 1), false)])));
    }

    #[test]
    fn knowledge_base_never_cancels_all() {
        let mut config = Config::default();
        assert!(config.multiple_pivots.set(PivotPolicy::CancelAll).is_ok());

        // Satisfiable, and silent on Z.
        let mut kb = KnowledgeBase::from_config(config);
        kb.tell(MazeClause::new([lit("X", (1, 1), true), lit("Y", (1, 1), false)]));
        kb.tell(MazeClause::new([lit("X", (1, 1), false), lit("Y", (1, 1), true)]));

        assert_eq!(kb.ask(&lit("Z", (0, 0), true)), Ok(false));
        assert_eq!(kb.ask(&lit("Z", (0, 0), false)), Ok(false));

        // X and Y agree, so with Y known X follows.
        kb.tell(MazeClause::from(lit("Y", (1, 1), true)));
        assert_eq!(kb.ask(&lit("X", (1, 1), true)), Ok(true));
        assert_eq!(kb.ask(&lit("X", (1, 1), false)), Ok(false));
    }
}

mod shared {
    use super::*;

    #[test]
    fn clauses_across_threads() {
        let clauses = Arc::new(vec![
            MazeClause::new([lit("P", (0, 0), true), lit("P", (0, 1), true)]),
            MazeClause::new([lit("P", (0, 0), false)]),
            MazeClause::new([lit("P", (0, 1), false)]),
        ]);

        let handles = (0..clauses.len())
            .map(|index| {
                let clauses = Arc::clone(&clauses);
                thread::spawn(move || {
                    clauses
                        .iter()
                        .flat_map(|other| resolve(&clauses[index], other))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let derived = handles
            .into_iter()
            .map(|handle| handle.join().expect("resolution thread panicked"))
            .collect::<Vec<_>>();

        assert!(derived[0].contains(&MazeClause::new([lit("P", (0, 1), true)])));
        assert!(derived[0].contains(&MazeClause::new([lit("P", (0, 0), true)])));
        assert!(derived[1].contains(&MazeClause::new([lit("P", (0, 1), true)])));
        assert!(derived[2].contains(&MazeClause::new([lit("P", (0, 0), true)])));
    }
}
