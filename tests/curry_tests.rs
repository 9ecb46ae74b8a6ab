//! Integration tests for the typed and erased currying surfaces.

#![cfg(feature = "curry")]

use fnkit::curry::{Application, Apply, curry, curry_n, curry_n_with, curry_with};
use rstest::rstest;

fn add_three(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

fn join_four(a: char, b: char, c: char, d: char) -> String {
    [a, b, c, d].iter().collect()
}

// =============================================================================
// Typed tier
// =============================================================================

mod typed_tests {
    use super::*;

    #[test]
    fn every_split_of_three_arguments_gives_six() {
        let curried = curry(add_three);

        assert_eq!(curried.apply((1, 2, 3)), 6);
        assert_eq!(curried.apply((1,)).apply((2, 3)), 6);
        assert_eq!(curried.apply((1, 2)).apply((3,)), 6);
        assert_eq!(curried.apply((1,)).apply((2,)).apply((3,)), 6);
    }

    #[test]
    fn every_split_of_four_arguments_keeps_order() {
        let curried = curry(join_four);
        let expected = "abcd".to_string();

        assert_eq!(curried.apply(('a', 'b', 'c', 'd')), expected);
        assert_eq!(curried.apply(('a',)).apply(('b', 'c', 'd')), expected);
        assert_eq!(curried.apply(('a', 'b')).apply(('c', 'd')), expected);
        assert_eq!(curried.apply(('a', 'b', 'c')).apply(('d',)), expected);
        assert_eq!(curried.apply(('a',)).apply(('b',)).apply(('c', 'd')), expected);
        assert_eq!(curried.apply(('a',)).apply(('b', 'c')).apply(('d',)), expected);
        assert_eq!(curried.apply(('a', 'b')).apply(('c',)).apply(('d',)), expected);
        assert_eq!(
            curried.apply(('a',)).apply(('b',)).apply(('c',)).apply(('d',)),
            expected
        );
    }

    #[test]
    fn preset_composes_with_later_calls() {
        let preset = curry_with(add_three, (1,));
        assert_eq!(preset.apply((2, 3)), add_three(1, 2, 3));
        assert_eq!(preset.apply((2,)).apply((3,)), add_three(1, 2, 3));
    }

    #[test]
    fn zero_argument_calls_are_no_ops() {
        let curried = curry(add_three);
        let same = curried.apply(());
        assert_eq!(same.bound_count(), 0);
        assert_eq!(same.apply((1, 2, 3)), 6);
    }

    #[test]
    fn branches_from_one_partial_are_independent() {
        let base = curry(add_three).apply((100,));
        let left = base.apply((10,));
        let right = base.apply((20,));

        assert_eq!(left.apply((1,)), 111);
        assert_eq!(right.apply((1,)), 121);
        assert_eq!(base.apply((0, 0)), 100);
    }

    #[test]
    fn closures_capture_their_environment() {
        let offset = 1000;
        let curried = curry(move |first: i32, second: i32| first * second + offset);
        assert_eq!(curried.apply((3,)).apply((4,)), 1012);
    }

    #[test]
    fn owned_arguments_are_cloned_per_call() {
        let greet = curry(|greeting: String, name: String| format!("{greeting}, {name}"));
        let hello = greet.apply(("Hello".to_string(),));

        assert_eq!(hello.apply(("Alice".to_string(),)), "Hello, Alice");
        assert_eq!(hello.apply(("Bob".to_string(),)), "Hello, Bob");
    }

    #[test]
    fn target_fires_once_per_complete_call() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let counted = curry(|first: i32, second: i32| {
            calls.set(calls.get() + 1);
            first + second
        });

        let partial = counted.apply((1,));
        assert_eq!(calls.get(), 0);
        assert_eq!(partial.apply((2,)), 3);
        assert_eq!(partial.apply((3,)), 4);
        assert_eq!(calls.get(), 2);
    }
}

// =============================================================================
// Erased tier
// =============================================================================

mod erased_tests {
    use super::*;

    fn add_pair([first, second]: [i32; 2]) -> i32 {
        first + second
    }

    #[test]
    fn extra_arguments_are_dropped() {
        let curried = curry_n(add_pair);
        assert!(matches!(curried.apply([1, 2, 3]), Application::Complete(3)));
    }

    #[rstest]
    #[case(vec![vec![1, 2, 3, 4]])]
    #[case(vec![vec![1], vec![2, 3, 4]])]
    #[case(vec![vec![1, 2], vec![3, 4]])]
    #[case(vec![vec![1, 2, 3], vec![4]])]
    #[case(vec![vec![1], vec![2], vec![3], vec![4]])]
    #[case(vec![vec![1], vec![], vec![2, 3], vec![], vec![4]])]
    fn batches_accumulate_until_arity(#[case] batches: Vec<Vec<i32>>) {
        let curried = curry_n(|values: [i32; 4]| values.iter().fold(0, |acc, n| acc * 10 + n));

        let (last, init) = batches.split_last().expect("at least one batch");
        let partial = init.iter().fold(curried, |partial, batch| {
            partial
                .apply(batch.iter().copied())
                .partial()
                .expect("still partial")
        });

        assert_eq!(partial.apply(last.iter().copied()).complete(), Some(1234));
    }

    #[test]
    fn complete_preset_fires_on_next_call() {
        let curried = curry_n_with(add_pair, [1, 2, 99]);
        assert_eq!(curried.remaining(), 0);
        assert_eq!(curried.apply([]).complete(), Some(3));
    }

    #[test]
    fn partial_preset_waits_for_the_rest() {
        let curried = curry_n_with(add_pair, [40]);
        assert_eq!(curried.accumulated(), &[40]);
        assert!(curried.apply([]).is_partial());
        assert_eq!(curried.apply([2]).complete(), Some(42));
    }

    #[test]
    fn heterogeneous_arguments_through_an_enum() {
        #[derive(Debug, Clone, PartialEq)]
        enum Argument {
            Text(String),
            Count(usize),
        }

        let repeat = curry_n(|[text, count]: [Argument; 2]| match (text, count) {
            (Argument::Text(text), Argument::Count(count)) => Some(text.repeat(count)),
            _ => None,
        });

        let ab = repeat
            .apply([Argument::Text("ab".to_string())])
            .partial()
            .expect("one argument pending");
        assert_eq!(
            ab.apply([Argument::Count(3)]).complete(),
            Some(Some("ababab".to_string()))
        );
        assert_eq!(
            ab.apply([Argument::Text("x".to_string())]).complete(),
            Some(None)
        );
    }
}
