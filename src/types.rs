//! Nominal types and native handles carried by [`Value`](crate::Value).

use std::{
   any::Any,
   fmt,
   sync::{
      Arc,
      atomic::{AtomicBool, AtomicU64, Ordering},
   },
};

use bitflags::bitflags;

use crate::value::Value;

bitflags! {
   /// Structural capabilities a class exposes.
   #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
   pub struct Capabilities: u8 {
      /// Instances can be called like a function.
      const INVOKE  = 1 << 0;
      /// Instances report an element count.
      const COUNT   = 1 << 1;
      /// Instances yield their elements in sequence.
      const ITERATE = 1 << 2;
   }
}

/// A named class with single inheritance and any number of interfaces.
///
/// Class names are unique: two `Class` values with the same name are the same
/// type for [`Class::is_a`] and [`Class::is_subclass_of`], even when built
/// separately.
#[derive(Debug, Clone)]
pub struct Class {
   name:         String,
   parent:       Option<Arc<Class>>,
   interfaces:   Vec<Arc<Class>>,
   capabilities: Capabilities,
}

impl Class {
   pub fn new(name: impl Into<String>) -> Self {
      Self {
         name:         name.into(),
         parent:       None,
         interfaces:   Vec::new(),
         capabilities: Capabilities::empty(),
      }
   }

   pub fn extends(mut self, parent: Arc<Self>) -> Self {
      self.parent = Some(parent);
      self
   }

   pub fn implements(mut self, interface: Arc<Self>) -> Self {
      self.interfaces.push(interface);
      self
   }

   pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
      self.capabilities |= capabilities;
      self
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn parent(&self) -> Option<&Arc<Self>> {
      self.parent.as_ref()
   }

   /// Own capabilities plus everything inherited.
   pub fn capabilities(&self) -> Capabilities {
      self
         .supertypes()
         .fold(self.capabilities, |acc, ty| acc | ty.capabilities)
   }

   pub fn has(&self, capability: Capabilities) -> bool {
      self.capabilities().contains(capability)
   }

   /// True when `other` is a proper ancestor (parent chain or interface).
   pub fn is_subclass_of(&self, other: &Self) -> bool {
      self.supertypes().any(|ty| ty.name == other.name)
   }

   /// True for the class itself or any ancestor.
   pub fn is_a(&self, other: &Self) -> bool {
      self.name == other.name || self.is_subclass_of(other)
   }

   /// Every ancestor, depth first: parent chain and interfaces.
   fn supertypes(&self) -> impl Iterator<Item = &Self> {
      let mut stack: Vec<&Self> = self
         .parent
         .iter()
         .chain(self.interfaces.iter())
         .map(Arc::as_ref)
         .collect();
      std::iter::from_fn(move || {
         let next = stack.pop()?;
         stack.extend(next.parent.iter().chain(next.interfaces.iter()).map(Arc::as_ref));
         Some(next)
      })
   }
}

impl fmt::Display for Class {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.name)
   }
}

/// An instance of a [`Class`].
#[derive(Debug, Clone)]
pub struct Object {
   pub class:    Arc<Class>,
   /// What iterating the object yields; empty for non-iterable classes.
   pub elements: Vec<Value>,
}

impl Object {
   pub fn new(class: Arc<Class>) -> Self {
      Self { class, elements: Vec::new() }
   }

   pub fn with_elements(class: Arc<Class>, elements: Vec<Value>) -> Self {
      Self { class, elements }
   }

   pub fn is_invokable(&self) -> bool {
      self.class.has(Capabilities::INVOKE)
   }
}

type CallFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared function value.
#[derive(Clone)]
pub struct Callable(Arc<CallFn>);

impl Callable {
   pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
      Self(Arc::new(f))
   }

   pub fn call(&self, args: &[Value]) -> Value {
      (self.0)(args)
   }

   pub fn ptr_eq(&self, other: &Self) -> bool {
      Arc::ptr_eq(&self.0, &other.0)
   }
}

impl fmt::Debug for Callable {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("Callable(..)")
   }
}

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// A native handle such as an open file or socket.
#[derive(Clone)]
pub struct Resource {
   id:     u64,
   kind:   &'static str,
   handle: Arc<dyn Any + Send + Sync>,
   open:   Arc<AtomicBool>,
}

impl Resource {
   pub fn new(kind: &'static str, handle: impl Any + Send + Sync) -> Self {
      Self {
         id: NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed),
         kind,
         handle: Arc::new(handle),
         open: Arc::new(AtomicBool::new(true)),
      }
   }

   pub fn file(file: std::fs::File) -> Self {
      Self::new("stream", file)
   }

   pub const fn id(&self) -> u64 {
      self.id
   }

   pub const fn kind(&self) -> &'static str {
      self.kind
   }

   pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
      self.handle.downcast_ref()
   }

   /// Marks the handle closed for every clone.
   pub fn close(&self) {
      self.open.store(false, Ordering::Release);
   }

   pub fn is_open(&self) -> bool {
      self.open.load(Ordering::Acquire)
   }
}

impl fmt::Debug for Resource {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("Resource")
         .field("id", &self.id)
         .field("kind", &self.kind)
         .field("open", &self.is_open())
         .finish()
   }
}
