#![allow(dead_code)]

use std::sync::Arc;

use precheck::{Capabilities, Class, Object, Value};

pub struct Classes {
   pub base:      Arc<Class>,
   pub derived:   Arc<Class>,
   pub countable: Arc<Class>,
   pub iterator:  Arc<Class>,
   pub invokable: Arc<Class>,
}

impl Classes {
   pub fn new() -> Self {
      let base = Arc::new(Class::new("Base"));
      let derived = Arc::new(Class::new("Derived").extends(Arc::clone(&base)));
      let countable = Arc::new(Class::new("Countable").with_capabilities(Capabilities::COUNT));
      let iterator = Arc::new(
         Class::new("ArrayIterator")
            .implements(Arc::clone(&countable))
            .with_capabilities(Capabilities::ITERATE),
      );
      let invokable = Arc::new(Class::new("Handler").with_capabilities(Capabilities::INVOKE));
      Self { base, derived, countable, iterator, invokable }
   }

   pub fn base_instance(&self) -> Value {
      Value::object(Object::new(Arc::clone(&self.base)))
   }

   pub fn derived_instance(&self) -> Value {
      Value::object(Object::new(Arc::clone(&self.derived)))
   }

   pub fn iterator_of(&self, elements: Vec<Value>) -> Value {
      Value::object(Object::with_elements(Arc::clone(&self.iterator), elements))
   }

   pub fn invokable_instance(&self) -> Value {
      Value::object(Object::new(Arc::clone(&self.invokable)))
   }
}

/// One labelled value per shape the catalog distinguishes.
pub fn samples(classes: &Classes) -> Vec<(&'static str, Value)> {
   vec![
      ("null", Value::Null),
      ("[]", Value::Sequence(Vec::new())),
      ("[1,2,3]", Value::from(vec![1, 2, 3])),
      ("0", Value::Int(0)),
      ("5", Value::Int(5)),
      ("''", Value::from("")),
      ("'test'", Value::from("test")),
      ("'0'", Value::from("0")),
      ("'0.0'", Value::from("0.0")),
      ("'5'", Value::from("5")),
      ("'5.5'", Value::from("5.5")),
      ("0.0", Value::Float(0.0)),
      ("5.5", Value::Float(5.5)),
      ("true", Value::Bool(true)),
      ("false", Value::Bool(false)),
      ("object", classes.base_instance()),
      ("closure", Value::callable(|_| Value::Null)),
   ]
}
