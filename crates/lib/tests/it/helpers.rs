use singly::LinkedList;

/// Builds a list by appending each value in order.
pub fn list_from(values: &[i32]) -> LinkedList<i32> {
    let mut list = LinkedList::new();
    for value in values {
        list.append(*value);
    }
    list
}

/// Reads every value back through `at`, the way callers index the list.
pub fn values_by_index<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    (0..list.size())
        .map(|index| {
            list.at(index)
                .unwrap_or_else(|| panic!("index {index} should be in range"))
                .value()
                .clone()
        })
        .collect()
}

/// Assert that a list holds exactly the expected values, head first.
pub fn assert_list_values(list: &LinkedList<i32>, expected: &[i32]) {
    assert_eq!(list.size(), expected.len(), "size mismatch for {list:?}");
    assert_eq!(values_by_index(list), expected, "value mismatch");
}
