mod support;

use precheck::{Expect, FailureKind, Registry, Result, Value};
use support::{Classes, samples};

/// Runs `check` over every sample, asserts that failures carry `kind`, and
/// returns the labels of the samples that passed.
fn passing(kind: FailureKind, check: impl Fn(&Value) -> Result<()>) -> Vec<&'static str> {
   let classes = Classes::new();
   samples(&classes)
      .into_iter()
      .filter(|(label, value)| match check(value) {
         Ok(()) => true,
         Err(err) => {
            assert_eq!(err.kind(), Some(kind), "{label}: {err}");
            false
         },
      })
      .map(|(label, _)| label)
      .collect()
}

#[test]
fn is_true_and_is_false() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);

   expect.is_true(true).unwrap();
   expect.is_false(false).unwrap();

   let err = expect.is_true(false).unwrap_err();
   assert_eq!(err.kind(), Some(FailureKind::Logic));
   assert_eq!(err.message(), Some("Expression must be true"));
   assert_eq!(expect.is_false(true).unwrap_err().kind(), Some(FailureKind::Logic));
}

#[test]
fn is_not_empty() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   assert_eq!(
      passing(FailureKind::InvalidArgument, |v| expect.is_not_empty(v)),
      ["[1,2,3]", "5", "'test'", "'5'", "'5.5'", "5.5", "true", "object", "closure"]
   );
}

#[test]
fn is_numeric() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   assert_eq!(
      passing(FailureKind::InvalidArgument, |v| expect.is_numeric(v)),
      ["0", "5", "'0'", "'0.0'", "'5'", "'5.5'", "0.0", "5.5"]
   );
}

#[test]
fn primitive_type_checks() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let kind = FailureKind::InvalidArgument;

   assert_eq!(passing(kind, |v| expect.is_int(v)), ["0", "5"]);
   assert_eq!(passing(kind, |v| expect.is_float(v)), ["0.0", "5.5"]);
   assert_eq!(passing(kind, |v| expect.is_bool(v)), ["true", "false"]);
   assert_eq!(passing(kind, |v| expect.is_object(v)), ["object"]);
   assert_eq!(
      passing(kind, |v| expect.is_string(v)),
      ["''", "'test'", "'0'", "'0.0'", "'5'", "'5.5'"]
   );
   assert_eq!(passing(kind, |v| expect.is_array(v)), ["[]", "[1,2,3]"]);
   assert_eq!(passing(kind, |v| expect.is_null(v)), ["null"]);
   assert_eq!(passing(kind, |v| expect.is_not_null(v)).len(), 16);
}

#[test]
fn is_not_false_and_is_not_true() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let kind = FailureKind::InvalidArgument;

   let not_false = passing(kind, |v| expect.is_not_false(v));
   assert_eq!(not_false.len(), 16);
   assert!(!not_false.contains(&"false"));
   assert!(not_false.contains(&"0"));

   let not_true = passing(kind, |v| expect.is_not_true(v));
   assert_eq!(not_true.len(), 16);
   assert!(!not_true.contains(&"true"));
}

#[test]
fn range_checks() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let kind = FailureKind::Range;

   assert_eq!(passing(kind, |v| expect.is_lower_than(v, 5)), ["0", "0.0"]);
   assert_eq!(passing(kind, |v| expect.is_lower_than_or_equal(v, 5)), ["0", "5", "0.0"]);
   assert_eq!(passing(kind, |v| expect.is_greater_than(v, 5)), ["5.5"]);
   assert_eq!(passing(kind, |v| expect.is_greater_than_or_equal(v, 5)), ["5", "5.5"]);
}

#[test]
fn range_checks_mix_ints_and_floats() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);

   expect.is_lower_than(&Value::Float(5.0), 5.1).unwrap();
   expect.is_lower_than_or_equal(&Value::Float(5.1), 5.1).unwrap();
   expect.is_greater_than(&Value::Float(5.1), 5.0).unwrap();
   expect.is_greater_than_or_equal(&Value::Float(5.1), 5.1).unwrap();
   expect.is_greater_than(&Value::Int(6), 5.5).unwrap();
   assert!(expect.is_lower_than(&Value::Float(f64::NAN), 5).is_err());
   assert!(expect.is_greater_than(&Value::Int(i64::MAX), i64::MAX).is_err());
}

#[test]
fn range_messages_include_the_bound() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);

   let msg = |r: Result<()>| r.unwrap_err().message().map(str::to_string);
   assert_eq!(
      msg(expect.is_lower_than(&Value::Int(5), 5)).as_deref(),
      Some("Value must be lower than 5")
   );
   assert_eq!(
      msg(expect.is_lower_than_or_equal(&Value::Int(6), 5.5)).as_deref(),
      Some("Value must be lower than or equal to 5.5")
   );
   assert_eq!(
      msg(expect.is_greater_than(&Value::Int(5), 5)).as_deref(),
      Some("Value must be greater than 5")
   );
   assert_eq!(
      msg(expect.is_greater_than_or_equal(&Value::Int(-3), -2)).as_deref(),
      Some("Value must be greater than or equal to -2")
   );
}

#[test]
fn callable_checks() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let classes = Classes::new();
   let kind = FailureKind::BadCallable;

   assert_eq!(passing(kind, |v| expect.is_callable(v)), ["closure"]);
   assert_eq!(passing(kind, |v| expect.is_invokable(v)), ["closure"]);

   let handler = classes.invokable_instance();
   expect.is_callable(&handler).unwrap();
   expect.is_invokable(&handler).unwrap();
   assert_eq!(expect.is_object(&handler).unwrap_err().kind(), Some(FailureKind::InvalidArgument));
}

#[test]
fn has_array_value_is_strict() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let haystack = Value::from(vec![1, 2, 3]);

   assert!(passing(FailureKind::UnexpectedValue, |v| expect.has_array_value(v, &haystack)).is_empty());
   for n in 1..=3 {
      expect.has_array_value(&Value::Int(n), &haystack).unwrap();
   }
   assert!(expect.has_array_value(&Value::from("1"), &haystack).is_err());
   assert!(expect.has_array_value(&Value::Float(1.0), &haystack).is_err());

   let nested = Value::from(vec![Value::from(vec![1, 2]), Value::from("x")]);
   expect.has_array_value(&Value::from(vec![1, 2]), &nested).unwrap();
   assert!(expect.has_array_value(&Value::from(vec![2, 1]), &nested).is_err());
}

#[test]
fn has_array_key() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let map = Value::mapping([(1, 1), (2, 2), (3, 3)]);

   assert!(passing(FailureKind::UnexpectedValue, |v| expect.has_array_key(v, &map)).is_empty());
   expect.has_array_key(&Value::Int(1), &map).unwrap();
   expect.has_array_key(&Value::from("2"), &map).unwrap();
   assert!(expect.has_array_key(&Value::Int(5), &map).is_err());
   assert!(expect.has_array_key(&Value::Float(1.0), &map).is_err());

   let list = Value::from(vec!["a", "b"]);
   expect.has_array_key(&Value::Int(0), &list).unwrap();
   assert!(expect.has_array_key(&Value::Int(2), &list).is_err());

   let named = Value::mapping([("name", "x")]);
   expect.has_array_key(&Value::from("name"), &named).unwrap();
   assert!(expect.has_array_key(&Value::from("Name"), &named).is_err());
}

#[test]
fn countable_and_iterable() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let classes = Classes::new();
   let kind = FailureKind::UnexpectedValue;

   assert_eq!(passing(kind, |v| expect.is_countable(v)), ["[]", "[1,2,3]"]);
   assert_eq!(passing(kind, |v| expect.is_iterable(v)), ["[]", "[1,2,3]"]);

   let iterator = classes.iterator_of(vec![Value::Int(1)]);
   expect.is_countable(&iterator).unwrap();
   expect.is_iterable(&iterator).unwrap();

   let countable_only = Value::object(precheck::Object::new(classes.countable.clone()));
   expect.is_countable(&countable_only).unwrap();
   assert!(expect.is_iterable(&countable_only).is_err());
}

#[test]
fn is_resource() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   assert!(passing(FailureKind::UnexpectedValue, |v| expect.is_resource(v)).is_empty());

   let file = tempfile::tempfile().unwrap();
   let handle = precheck::Resource::file(file);
   let value = Value::from(handle.clone());
   expect.is_resource(&value).unwrap();

   handle.close();
   assert!(expect.is_resource(&value).is_err());
}

#[test]
fn instance_and_subclass_checks() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let classes = Classes::new();
   let kind = FailureKind::UnexpectedValue;

   assert_eq!(passing(kind, |v| expect.is_instance_of(v, &classes.base)), ["object"]);
   assert!(passing(kind, |v| expect.is_subclass_of(v, &classes.base)).is_empty());

   let derived = classes.derived_instance();
   expect.is_instance_of(&derived, &classes.base).unwrap();
   expect.is_instance_of(&derived, &classes.derived).unwrap();
   expect.is_subclass_of(&derived, &classes.base).unwrap();
   expect.is_subclass_of(classes.derived.as_ref(), &classes.base).unwrap();

   let err = expect.is_subclass_of(classes.base.as_ref(), &classes.base).unwrap_err();
   assert_eq!(err.kind(), Some(kind));
   assert_eq!(err.message(), Some("Object must be a subclass of Base"));

   let err = expect.is_instance_of(&Value::Int(1), &classes.derived).unwrap_err();
   assert_eq!(err.message(), Some("Value must be instance of Derived"));
}

#[test]
fn is_iterable_of_classes() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);
   let classes = Classes::new();

   let objects = Value::from(vec![classes.base_instance(), classes.derived_instance()]);
   expect.is_iterable_of(&objects, classes.base.as_ref()).unwrap();

   let wrapped = classes.iterator_of(vec![classes.base_instance(), classes.base_instance()]);
   expect.is_iterable_of(&wrapped, classes.base.as_ref()).unwrap();

   let err = expect
      .is_iterable_of(&Value::from(vec![1, 2, 3]), classes.base.as_ref())
      .unwrap_err();
   assert_eq!(err.kind(), Some(FailureKind::InvalidArgument));
   assert_eq!(err.message(), Some("Iterable contains invalid items"));

   let ints = classes.iterator_of(vec![Value::Int(1)]);
   assert!(expect.is_iterable_of(&ints, classes.derived.as_ref()).is_err());

   expect
      .is_iterable_of(&Value::Sequence(Vec::new()), classes.base.as_ref())
      .unwrap();
   assert!(expect.is_iterable_of(&Value::Int(1), classes.base.as_ref()).is_err());
}

#[test]
fn is_iterable_of_predicates() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);

   let is_positive = |v: &Value| matches!(v, Value::Int(n) if *n > 0);
   expect.is_iterable_of(&Value::from(vec![1, 2, 3]), &is_positive).unwrap();
   assert!(expect.is_iterable_of(&Value::from(vec![1, -2, 3]), &is_positive).is_err());

   let truthy = precheck::Callable::new(|args| args.first().cloned().unwrap_or_default());
   expect.is_iterable_of(&Value::from(vec!["a", "b"]), &truthy).unwrap();
   assert!(expect.is_iterable_of(&Value::from(vec!["a", "0"]), &truthy).is_err());
}

#[test]
fn literal_boundaries() {
   let registry = Registry::new();
   let expect = Expect::new(&registry);

   assert!(expect.is_not_empty(&Value::Int(0)).is_err());
   assert!(expect.is_not_empty(&Value::from("0.0")).is_err());
   expect.is_not_empty(&Value::from(vec![1, 2, 3])).unwrap();
   assert!(expect.is_lower_than(&Value::Int(5), 5).is_err());
   expect.is_lower_than_or_equal(&Value::Int(5), 5).unwrap();
   assert!(expect.is_int(&Value::from("5")).is_err());
}
