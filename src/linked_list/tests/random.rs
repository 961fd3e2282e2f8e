extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::{
    DoublyLinkedList, SinglyLinkedList,
    list::LinkedList,
    query::Find,
    traits::{Link, NodeWithValue},
};

use super::double::assert_back_links;

const ROUNDS: usize = 2_000;

fn assert_matches_model<N>(list: &LinkedList<N>, model: &VecDeque<u8>)
where
    N: NodeWithValue<Value = u8>,
{
    let values: Vec<u8> = list.values().copied().collect();
    let expected: Vec<u8> = model.iter().copied().collect();
    assert_eq!(values, expected);
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.head().map(|n| *n.value()), model.front().copied());
    assert_eq!(list.tail().map(|n| *n.value()), model.back().copied());
    assert!(list.tail().is_none_or(|tail| tail.next().is_none()));
}

/// Applies one random operation to both the list and the model.
fn step<N>(rng: &mut StdRng, list: &mut LinkedList<N>, model: &mut VecDeque<u8>)
where
    N: NodeWithValue<Value = u8>,
{
    // Few distinct values so deletes regularly hit several nodes.
    let value = rng.random_range(0..6u8);

    match rng.random_range(0..8) {
        0 | 1 => {
            list.append(value);
            model.push_back(value);
        }
        2 | 3 => {
            list.prepend(value);
            model.push_front(value);
        }
        4 => {
            let deleted = list.delete_head().map(|n| n.into_value());
            assert_eq!(deleted, model.pop_front());
        }
        5 => {
            let deleted = list.delete_tail().map(|n| n.into_value());
            assert_eq!(deleted, model.pop_back());
        }
        6 => {
            let count = model.iter().filter(|v| **v == value).count();
            let before = list.len();
            let deleted = list.delete(&value).map(|n| n.into_value());

            assert_eq!(deleted, (count > 0).then_some(value));
            assert_eq!(list.len(), before - count);
            assert!(list.find(Find::value(&value)).is_none());
            model.retain(|v| *v != value);
        }
        _ => {
            list.reverse();
            model.make_contiguous().reverse();
        }
    }
}

#[test]
fn test_single_list_matches_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = SinglyLinkedList::new();
    let mut model = VecDeque::new();

    for _ in 0..ROUNDS {
        step(&mut rng, &mut list, &mut model);
        assert_matches_model(&list, &model);
    }
}

#[test]
fn test_double_list_matches_model() {
    let mut rng = StdRng::seed_from_u64(0xd0b1e);
    let mut list = DoublyLinkedList::new();
    let mut model = VecDeque::new();

    for _ in 0..ROUNDS {
        step(&mut rng, &mut list, &mut model);
        assert_matches_model(&list, &model);
        assert_back_links(&list);
    }
}

#[test]
fn test_append_and_prepend_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<u8> = (0..64).map(|_| rng.random()).collect();

    let mut appended = DoublyLinkedList::new();
    appended.from_array(input.iter().copied());
    assert!(appended.values().eq(input.iter()));
    assert_eq!(appended.tail().map(|n| *n.value()), input.last().copied());

    let mut prepended = SinglyLinkedList::new();
    for value in &input {
        prepended.prepend(*value);
    }
    assert!(prepended.values().eq(input.iter().rev()));
}
