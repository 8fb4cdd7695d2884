use grisaia_space::catalog::{
    CharacterNavigator, Navigator, SharedNavigator, Step, CATALOG_SIZE, CHARACTERS,
};
use proptest::prelude::*;

fn step_strategy() -> impl Strategy<Value = Step> {
    any::<bool>().prop_map(|forward| if forward { Step::Forward } else { Step::Backward })
}

fn walk_strategy() -> impl Strategy<Value = Vec<Step>> {
    proptest::collection::vec(step_strategy(), 0..200)
}

fn navigator_at(position: usize) -> CharacterNavigator {
    let mut nav = CharacterNavigator::default();
    nav.step(position as isize);
    nav
}

proptest! {
    /// Position always matches the net displacement taken modulo the catalog size.
    #[test]
    fn position_stays_in_range_for_any_walk(steps in walk_strategy()) {
        let mut nav = CharacterNavigator::default();
        let mut expected: isize = 0;
        for step in steps {
            nav.go(step);
            expected += step.delta();
            prop_assert!(nav.position() < CATALOG_SIZE);
            prop_assert_eq!(
                nav.position(),
                expected.rem_euclid(CATALOG_SIZE as isize) as usize
            );
        }
    }

    #[test]
    fn returned_entry_matches_current(steps in walk_strategy()) {
        let mut nav = CharacterNavigator::default();
        for step in steps {
            let returned = *nav.go(step);
            prop_assert_eq!(returned, *nav.current());
            prop_assert_eq!(returned, CHARACTERS[nav.position()]);
        }
    }

    #[test]
    fn next_and_previous_undo_each_other(start in 0..CATALOG_SIZE) {
        let mut nav = navigator_at(start);
        nav.next();
        nav.previous();
        prop_assert_eq!(nav.position(), start);

        nav.previous();
        nav.next();
        prop_assert_eq!(nav.position(), start);
    }

    #[test]
    fn full_lap_returns_to_start(start in 0..CATALOG_SIZE, backwards in any::<bool>()) {
        let mut nav = navigator_at(start);
        for _ in 0..CATALOG_SIZE {
            if backwards {
                nav.previous();
            } else {
                nav.next();
            }
        }
        prop_assert_eq!(nav.position(), start);
    }
}

#[test]
fn documented_walk_over_six_cards() {
    let mut nav = CharacterNavigator::default();
    assert_eq!(nav.position(), 0);
    nav.next();
    assert_eq!(nav.position(), 1);
    nav.next();
    assert_eq!(nav.position(), 2);
    nav.previous();
    assert_eq!(nav.position(), 1);
    nav.previous();
    assert_eq!(nav.position(), 0);
    assert_eq!(nav.previous().image.key(), "kazami_kazuki");
    assert_eq!(nav.position(), 5);
    assert_eq!(nav.next().image.key(), "sakaki_yumiko");
    assert_eq!(nav.position(), 0);
}

#[test]
fn laws_hold_for_other_catalog_sizes() {
    static THREE: [char; 3] = ['a', 'b', 'c'];
    static NINE: [u16; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

    let mut three = Navigator::new(&THREE);
    for _ in 0..3 {
        three.next();
    }
    assert_eq!(three.position(), 0);
    assert_eq!(*three.previous(), 'c');

    let mut nine = Navigator::new(&NINE);
    assert_eq!(*nine.previous(), 8);
    assert_eq!(*nine.next(), 0);
    assert_eq!(nine.len(), 9);
}

#[test]
fn shared_navigator_over_builtin_catalog() {
    let shared = SharedNavigator::new(CharacterNavigator::default());
    assert_eq!(shared.previous().name.key(), "name_kazuki");
    assert_eq!(shared.next().name.key(), "name_yumiko");
    assert_eq!(shared.current().name.key(), "name_yumiko");
}
