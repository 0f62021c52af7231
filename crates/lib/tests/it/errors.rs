//! Crate-level error tests

use singly::{Error, LinkedList, ListError};

fn pop_twice(list: &mut LinkedList<i32>) -> singly::Result<(i32, i32)> {
    let first = list.try_pop()?;
    let second = list.try_pop()?;
    Ok((first, second))
}

fn drain_front(list: &mut LinkedList<i32>) -> singly::Result<Vec<i32>> {
    let mut values = Vec::new();
    loop {
        values.push(list.try_remove_at(0)?);
    }
}

#[test]
fn test_list_error_propagates_with_question_mark() {
    let mut list: LinkedList<i32> = [1, 2].into_iter().collect();

    let err = pop_twice(&mut list).unwrap_err();
    assert_eq!(err.module(), "list");
    assert!(!err.is_empty_list());
    assert!(!err.is_out_of_bounds());
    assert!(matches!(
        err,
        Error::List(ListError::SingleNode { operation: "pop" })
    ));
    assert_eq!(list.to_vec(), vec![1], "the head must survive a refused pop");
}

#[test]
fn test_empty_list_error_after_draining() {
    let mut list: LinkedList<i32> = [1, 2].into_iter().collect();

    let err = drain_front(&mut list).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(list.is_empty());

    let err: Error = list.try_pop().unwrap_err().into();
    assert!(err.is_empty_list());
    assert!(matches!(
        err,
        Error::List(ListError::Empty { operation: "pop" })
    ));
}

#[test]
fn test_out_of_bounds_error_display() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

    let err: Error = list.try_remove_at(7).unwrap_err().into();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.to_string(), "List index out of bounds: index 7, len 3");
    assert_eq!(list.size(), 3, "failed removal must not change the list");
}
