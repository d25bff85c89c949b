//! Property-based tests for deck assembly and start validation.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::{
    assemble_decks, required_white_cards, test_gens, validate_decks, Decks, RandShuffler, Rule,
    RuleFlags, Shuffler, StartRejection,
};

fn sorted(mut cards: Vec<String>) -> Vec<String> {
    cards.sort();
    cards
}

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: the decks hold exactly the cards of the selected packs.
    #[test]
    fn prop_decks_contain_only_selected_packs((packs, mask) in test_gens::packs_with_mask()) {
        let selected: Vec<_> = packs.iter().zip(&mask).filter(|(_, m)| **m).map(|(p, _)| p).collect();
        let decks = assemble_decks(selected.iter().copied());

        let expected_black: Vec<String> = selected.iter().flat_map(|p| p.cards.black.clone()).collect();
        let expected_white: Vec<String> = selected.iter().flat_map(|p| p.cards.white.clone()).collect();
        prop_assert_eq!(&decks.black, &expected_black);
        prop_assert_eq!(&decks.white, &expected_white);

        let unselected: HashSet<&String> = packs
            .iter()
            .zip(&mask)
            .filter(|(_, m)| !**m)
            .flat_map(|(p, _)| p.cards.black.iter().chain(&p.cards.white))
            .collect();
        prop_assert!(decks.black.iter().chain(&decks.white).all(|c| !unselected.contains(c)));
    }

    /// Property: zero black cards always rejects, regardless of white cards.
    #[test]
    fn prop_no_black_cards_always_rejects(
        white in 0usize..200,
        flags in test_gens::rule_flags(),
        players in 0usize..=20,
        hand in 5u32..=20,
    ) {
        let decks = Decks {
            white: (0..white).map(|i| i.to_string()).collect(),
            black: Vec::new(),
        };
        prop_assert_eq!(validate_decks(&decks, flags, players, hand), Err(StartRejection::NoBlackCards));
    }

    /// Property: without Quiplash or Rando, N×H white cards succeed and one fewer fails.
    #[test]
    fn prop_white_requirement_boundary(players in 1usize..=20, hand in 5u32..=20) {
        let flags = RuleFlags::default();
        let required = players * hand as usize;
        let mut decks = Decks {
            white: (0..required).map(|i| i.to_string()).collect(),
            black: vec!["prompt".to_string()],
        };
        prop_assert_eq!(validate_decks(&decks, flags, players, hand), Ok(()));

        decks.white.pop();
        let rejected = matches!(
            validate_decks(&decks, flags, players, hand),
            Err(StartRejection::NotEnoughWhiteCards { .. })
        );
        prop_assert!(rejected);
    }

    /// Property: Rando adds exactly one card; Quiplash removes the hand term.
    #[test]
    fn prop_rule_contributions(players in 0usize..=20, hand in 5u32..=20) {
        let mut flags = RuleFlags::default();
        let base = required_white_cards(flags, players, hand);

        flags.set(Rule::Rando, true);
        prop_assert_eq!(required_white_cards(flags, players, hand), base + 1);

        flags.set(Rule::Quiplash, true);
        prop_assert_eq!(required_white_cards(flags, players, hand), 1);

        flags.set(Rule::Rando, false);
        prop_assert_eq!(required_white_cards(flags, players, hand), 0);
    }

    /// Property: shuffling is a permutation.
    #[test]
    fn prop_shuffle_is_permutation(cards in prop::collection::vec(".{0,8}", 0..60), seed in any::<u64>()) {
        let mut shuffled = cards.clone();
        RandShuffler::new(Some(seed)).shuffle(&mut shuffled);
        prop_assert_eq!(shuffled.len(), cards.len());
        prop_assert_eq!(sorted(shuffled), sorted(cards));
    }
}
