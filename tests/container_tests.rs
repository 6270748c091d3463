use gwt_state::{LookupKey, StateContainer, StateError};
use rstest::{fixture, rstest};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct TestClass {
    name: String,
}

impl TestClass {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[fixture]
fn state() -> StateContainer {
    StateContainer::new()
}

#[rstest]
fn test_use_value_is_found(mut state: StateContainer) -> Result<(), StateError> {
    let expected = TestClass::named("expected");
    state.use_value(expected.clone());

    assert_eq!(state.get::<TestClass>()?, &expected);
    Ok(())
}

#[rstest]
fn test_set_to_is_found(mut state: StateContainer) -> Result<(), StateError> {
    let expected = TestClass::named("expected");
    state.set::<TestClass>().to(expected.clone());

    assert_eq!(state.get::<TestClass>()?, &expected);
    Ok(())
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
fn test_indexed_value_is_found(
    mut state: StateContainer,
    #[case] index: usize,
) -> Result<(), StateError> {
    state
        .set::<TestClass>()
        .at_index(index)
        .to(TestClass::named("at index"));

    assert_eq!(state.get_at::<TestClass>(index)?.name, "at index");
    assert!(matches!(
        state.get_at::<TestClass>(index + 1),
        Err(StateError::NotFound { .. })
    ));
    Ok(())
}

#[rstest]
fn test_named_value_is_found(mut state: StateContainer) -> Result<(), StateError> {
    state.set::<TestClass>().named("name").to(TestClass::named("named"));

    assert_eq!(state.get_named::<TestClass>("name")?.name, "named");
    Ok(())
}

#[rstest]
fn test_missing_name_is_not_found(mut state: StateContainer) {
    state.set::<TestClass>().named("name").to(TestClass::named("named"));

    let err = state.get_named::<TestClass>("missing").unwrap_err();
    match &err {
        StateError::NotFound { type_name, key } => {
            assert!(type_name.ends_with("TestClass"));
            assert_eq!(key, &LookupKey::Name("missing".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("\"missing\""));
}

#[rstest]
fn test_two_unkeyed_values_cannot_be_read_singly(mut state: StateContainer) {
    state
        .use_value(TestClass::named("a"))
        .use_value(TestClass::named("b"));

    assert!(matches!(
        state.get::<TestClass>(),
        Err(StateError::AmbiguousOrNotFound { candidates: 2, .. })
    ));

    let names: Vec<&str> = state
        .get_all::<TestClass>()
        .into_iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[rstest]
fn test_get_all_of_unknown_type_is_empty(state: StateContainer) {
    assert!(state.get_all::<TestClass>().is_empty());
    assert_eq!(state.count::<TestClass>(), 0);
}

#[rstest]
fn test_last_write_wins_per_key(mut state: StateContainer) -> Result<(), StateError> {
    state.set::<TestClass>().at_index(0).to(TestClass::named("old"));
    state.set::<TestClass>().at_index(0).to(TestClass::named("new"));
    state.set::<TestClass>().named("n").to(TestClass::named("old"));
    state.set::<TestClass>().named("n").to(TestClass::named("new"));

    assert_eq!(state.count::<TestClass>(), 2);
    assert_eq!(state.get_at::<TestClass>(0)?.name, "new");
    assert_eq!(state.get_named::<TestClass>("n")?.name, "new");
    Ok(())
}

#[rstest]
fn test_sparse_indices_sort_ascending(mut state: StateContainer) {
    state
        .set::<u64>().at_index(9).to(900)
        .set::<u64>().at_index(3).to(300)
        .set::<u64>().at_index(5).to(500);

    let values: Vec<u64> = state.get_all::<u64>().into_iter().copied().collect();
    assert_eq!(values, [300, 500, 900]);
}

#[rstest]
fn test_generic_types_are_distinct(mut state: StateContainer) -> Result<(), StateError> {
    let mut config = HashMap::new();
    config.insert("key".to_string(), "value".to_string());

    state.use_value(config).use_value(vec![1, 2, 3]).use_value(vec!["a"]);

    let value = state.with(|c: &HashMap<String, String>| c.get("key").cloned())?;
    assert_eq!(value, Some("value".to_string()));
    assert_eq!(state.get::<Vec<i32>>()?, &vec![1, 2, 3]);
    assert_eq!(state.get::<Vec<&str>>()?, &vec!["a"]);
    assert_eq!(state.len(), 3);
    Ok(())
}

#[test]
fn test_default_implementation() -> Result<(), StateError> {
    let mut state: StateContainer = Default::default();
    assert!(state.is_empty());

    state.use_value(42);
    assert_eq!(state.get_cloned::<i32>()?, 42);
    Ok(())
}
