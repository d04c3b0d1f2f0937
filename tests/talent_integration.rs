//! Integration tests for the talent path evaluator over the built-in data.

use talent_forge::core::error::ForgeError;
use talent_forge::data::Database;
use talent_forge::stats::StatKind;
use talent_forge::talents::{evaluate, parse_priorities, Goal, SEARCH_WIDTH};

/// Test 1: a single-goal search over built-in data yields survivors that all
/// share the maximum value of the first priority.
#[test]
fn test_single_goal_survivors_share_maximum() {
    let db = Database::load(&[]).unwrap();
    let class = db.class("barbarian").unwrap();
    let goals = [Goal {
        class,
        priorities: parse_priorities("a").unwrap(),
    }];

    let outcomes = evaluate(&goals, SEARCH_WIDTH).unwrap();
    assert!(!outcomes.is_empty());

    let best = outcomes[0].tallies[0].get(StatKind::Attack);
    for outcome in &outcomes {
        assert_eq!(outcome.path.len(), SEARCH_WIDTH);
        assert_eq!(outcome.tallies[0].get(StatKind::Attack), best);
    }
}

/// Test 2: adding priorities can only shrink the surviving set.
#[test]
fn test_more_priorities_never_grow_survivors() {
    let db = Database::load(&[]).unwrap();
    let class = db.class("cleric").unwrap();

    let loose = evaluate(
        &[Goal {
            class,
            priorities: parse_priorities("l").unwrap(),
        }],
        SEARCH_WIDTH,
    )
    .unwrap();
    let tight = evaluate(
        &[Goal {
            class,
            priorities: parse_priorities("lmh").unwrap(),
        }],
        SEARCH_WIDTH,
    )
    .unwrap();

    assert!(!tight.is_empty());
    assert!(tight.len() <= loose.len());

    // Every tight survivor is also a loose survivor.
    for outcome in &tight {
        assert!(loose.iter().any(|o| o.path == outcome.path));
    }
}

/// Test 3: two goals evaluated simultaneously resolve both classes per path.
#[test]
fn test_two_goal_search() {
    let db = Database::load(&[]).unwrap();
    let goals = [
        Goal {
            class: db.class("fighter").unwrap(),
            priorities: parse_priorities("ad").unwrap(),
        },
        Goal {
            class: db.class("wizard").unwrap(),
            priorities: parse_priorities("mc").unwrap(),
        },
    ];

    let outcomes = evaluate(&goals, SEARCH_WIDTH).unwrap();
    assert!(!outcomes.is_empty());
    for outcome in &outcomes {
        assert_eq!(outcome.tallies.len(), 2);
    }
}

/// Test 4: unknown class names and bad priority codes surface as errors.
#[test]
fn test_lookup_errors() {
    let db = Database::load(&[]).unwrap();
    assert!(matches!(
        db.class("necromancer"),
        Err(ForgeError::UnknownClass(_))
    ));
    assert!(matches!(
        parse_priorities("axd"),
        Err(ForgeError::InvalidPriority('x'))
    ));
}

/// Test 5: an extra input file overrides a built-in class by name.
#[test]
fn test_extra_file_overrides_builtin() {
    let dir = std::env::temp_dir().join("talent_forge_override_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("override.toml");
    std::fs::write(
        &path,
        r#"
[[class]]
name = "barbarian"
grid = ["mana"]
"#,
    )
    .unwrap();

    let db = Database::load(&[path.clone()]).unwrap();
    let barbarian = db.class("barbarian").unwrap();
    assert_eq!(barbarian.base.get(StatKind::Mana), 1);
    assert_eq!(barbarian.base.get(StatKind::Attack), 0);
    assert!(barbarian.branches.is_empty());

    std::fs::remove_file(path).ok();
}
