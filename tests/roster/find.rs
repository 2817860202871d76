use crate::helpers::SeededRoster;

use test_context::test_context;

#[test_context(SeededRoster)]
#[test]
fn should_ignore_case(ctx: &mut SeededRoster) {
    let expected = ctx
        .roster
        .find("Alice Chen")
        .expect("Alice Chen should exist")
        .clone();

    for name in ["alice chen", "ALICE CHEN", "Alice Chen"].iter() {
        assert_eq!(
            ctx.roster.find(name),
            Some(&expected),
            "Failed to find member with name: {}",
            name
        );
    }
}

#[test_context(SeededRoster)]
#[test]
fn should_return_none_for_unknown_names(ctx: &mut SeededRoster) {
    let unknown_names = ["Nonexistent", "Alice", "Alice Chen ", ""];

    for name in unknown_names.iter() {
        assert_eq!(
            ctx.roster.find(name),
            None,
            "Member should not exist: {:?}",
            name
        );
    }
}

#[test_context(SeededRoster)]
#[test]
fn should_find_added_members(ctx: &mut SeededRoster) {
    ctx.roster.add("Dana Kim", "Intern", "Rust");

    let found = ctx.roster.find("DANA KIM").expect("Dana Kim should exist");

    assert_eq!(found.favorite_language, "Rust");
}
