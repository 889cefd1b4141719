//! Property-based tests for move generation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated puzzles.

use hanoi::core::{Move, Peg, Pegs, Tower};
use hanoi::solver::{solve, SolveError};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_pegs()(
        labels in prop::sample::subsequence(vec!['A', 'B', 'C', 'X', 'Y', 'Z', '1', '2'], 3)
            .prop_shuffle()
    ) -> Pegs {
        Pegs::new(Peg::new(labels[0]), Peg::new(labels[1]), Peg::new(labels[2])).unwrap()
    }
}

fn moves_for(pegs: Pegs, disks: u32) -> Vec<Move> {
    solve(pegs.source(), pegs.helper(), pegs.destination(), i64::from(disks))
        .unwrap()
        .to_vec()
}

proptest! {
    #[test]
    fn move_count_is_two_to_the_n_minus_one(pegs in arbitrary_pegs(), disks in 1u32..=12) {
        let solution = solve(pegs.source(), pegs.helper(), pegs.destination(), i64::from(disks)).unwrap();
        let expected = (1u64 << disks) - 1;

        prop_assert_eq!(solution.len(), expected);
        prop_assert_eq!(solution.to_vec().len() as u64, expected);
    }

    #[test]
    fn non_positive_counts_are_rejected(pegs in arbitrary_pegs(), disks in i64::MIN..=0) {
        let result = solve(pegs.source(), pegs.helper(), pegs.destination(), disks);
        prop_assert_eq!(result, Err(SolveError::InvalidDiskCount { disks }));
    }

    #[test]
    fn moves_use_distinct_known_pegs(pegs in arbitrary_pegs(), disks in 1u32..=10) {
        for mv in moves_for(pegs, disks) {
            prop_assert_ne!(mv.from, mv.to);
            prop_assert!(pegs.contains(mv.from));
            prop_assert!(pegs.contains(mv.to));
        }
    }

    #[test]
    fn moves_follow_the_recursive_structure(pegs in arbitrary_pegs(), disks in 2u32..=10) {
        let (source, helper, destination) = (pegs.source(), pegs.helper(), pegs.destination());
        let first = Pegs::new(source, destination, helper).unwrap();
        let last = Pegs::new(helper, source, destination).unwrap();

        let mut expected = moves_for(first, disks - 1);
        expected.push(Move::new(source, destination));
        expected.extend(moves_for(last, disks - 1));

        prop_assert_eq!(moves_for(pegs, disks), expected);
    }

    #[test]
    fn every_solution_replays_to_a_solved_tower(pegs in arbitrary_pegs(), disks in 1u32..=10) {
        let solution = solve(pegs.source(), pegs.helper(), pegs.destination(), i64::from(disks)).unwrap();
        let tower = Tower::replay(&solution).unwrap();

        let expected: Vec<u32> = (1..=disks).rev().collect();
        prop_assert!(tower.is_solved());
        prop_assert_eq!(tower.disks_on(pegs.destination()), Some(expected.as_slice()));
    }

    #[test]
    fn first_and_last_moves_depend_on_parity(pegs in arbitrary_pegs(), disks in 1u32..=10) {
        let moves = moves_for(pegs, disks);
        let first_target = if disks % 2 == 1 { pegs.destination() } else { pegs.helper() };

        prop_assert_eq!(moves[0], Move::new(pegs.source(), first_target));
        prop_assert_eq!(moves[moves.len() - 1].to, pegs.destination());
    }

    #[test]
    fn duplicate_labels_are_rejected(label in prop::char::range('A', 'Z'), disks in 1i64..=5) {
        let peg = Peg::new(label);
        let result = solve(peg, peg, Peg::new('a'), disks);
        prop_assert_eq!(result, Err(SolveError::DuplicatePeg { peg }));
    }
}
