use singly::{LinkedList, RenderOptions};

use crate::helpers::*;

#[test]
fn test_render_three_values() {
    let list = list_from(&[1, 2, 3]);
    assert_eq!(list.to_string(), "( 1 ) -> ( 2 ) -> ( 3 ) -> null");
}

#[test]
fn test_render_single_value_keeps_end_marker() {
    let list = list_from(&[1]);
    assert_eq!(list.to_string(), "( 1 ) -> null");
}

#[test]
fn test_render_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.to_string(), "null");
}

#[test]
fn test_render_does_not_mutate() {
    let list = list_from(&[4, 5]);
    let first = list.to_string();
    let second = list.to_string();
    assert_eq!(first, second);
    assert_list_values(&list, &[4, 5]);
}

#[test]
fn test_render_with_options() {
    let list: LinkedList<&str> = ["a", "b"].into_iter().collect();
    let options = RenderOptions::new()
        .with_delimiters("<", ">")
        .with_separator(", ")
        .with_end_marker("END");

    assert_eq!(list.render(&options).to_string(), "<a>, <b>, END");
    assert_eq!(list.to_string(), "( a ) -> ( b ) -> null");
}
