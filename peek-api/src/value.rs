//! Inspected value model.
//!
//! Scalars are stored inline. Composites are shared, interior-mutable handles
//! so a host can build graphs that point back at themselves, the same way it
//! would in a dynamic language.

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a composite value.
pub type Shared<T> = Rc<RefCell<T>>;

/// A value handed to the inspector.
#[derive(Clone)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text string
    Text(String),
    /// Opaque host handle (file, socket, ...)
    Resource(Resource),
    /// Ordered container with integer and/or string keys
    Container(Shared<Container>),
    /// Structured record with a class name and named properties
    Record(Shared<Record>),
}

/// Key of a container member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

/// An opaque handle, described only by its declared category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub category: String,
    pub id: u64,
}

impl Resource {
    pub fn new(category: impl Into<String>, id: u64) -> Self {
        Self {
            category: category.into(),
            id,
        }
    }
}

/// Insertion-ordered keyed container (list, map, or a mix of both).
pub struct Container {
    members: IndexMap<Key, Value>,
    /// `None` once `i64::MAX` has been used as an index.
    next_index: Option<i64>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            members: IndexMap::new(),
            next_index: Some(0),
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a member, keeping its position on replace.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let (Key::Index(i), Some(next)) = (&key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        self.members.insert(key, value.into())
    }

    /// Append a member under the next free integer index.
    ///
    /// Returns `false` and leaves the container unchanged when no index is
    /// left after `i64::MAX`.
    pub fn push(&mut self, value: impl Into<Value>) -> bool {
        let Some(next) = self.next_index else {
            return false;
        };
        self.insert(Key::Index(next), value);
        true
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.members.get(key)
    }

    /// Remove a member, keeping the order of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.members.shift_remove(key)
    }

    /// Drop every member. Hosts use this to break reference cycles.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.members.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.members.values()
    }
}

/// A structured record: a class name plus properties in declaration order.
pub struct Record {
    class_name: String,
    properties: IndexMap<String, Value>,
}

impl Record {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.properties.iter()
    }
}

impl Value {
    /// Wrap a container in a fresh shared handle.
    pub fn container(container: Container) -> Self {
        Value::Container(Rc::new(RefCell::new(container)))
    }

    /// Build a list-shaped container from an iterator of values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        let mut container = Container::new();
        for item in items {
            container.push(item);
        }
        Value::container(container)
    }

    /// Build a keyed container from `(key, value)` pairs, in order.
    pub fn map<K: Into<Key>, T: Into<Value>>(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        let mut container = Container::new();
        for (key, value) in entries {
            container.insert(key, value);
        }
        Value::container(container)
    }

    /// Wrap a record in a fresh shared handle.
    pub fn record(record: Record) -> Self {
        Value::Record(Rc::new(RefCell::new(record)))
    }

    pub fn resource(category: impl Into<String>, id: u64) -> Self {
        Value::Resource(Resource::new(category, id))
    }

    pub fn as_container(&self) -> Option<&Shared<Container>> {
        match self {
            Value::Container(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Shared<Record>> {
        match self {
            Value::Record(cell) => Some(cell),
            _ => None,
        }
    }

    /// Identity of a composite: the address of its shared allocation.
    ///
    /// Scalars have no identity.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Container(cell) => Some(Rc::as_ptr(cell) as *const () as usize),
            Value::Record(cell) => Some(Rc::as_ptr(cell) as *const () as usize),
            _ => None,
        }
    }

}

// Composites may be cyclic, so Debug never descends into them.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Resource(r) => write!(f, "Resource({}#{})", r.category, r.id),
            Value::Container(cell) => match cell.try_borrow() {
                Ok(c) => write!(f, "Container({:p}, {} members)", Rc::as_ptr(cell), c.len()),
                Err(_) => write!(f, "Container({:p}, borrowed)", Rc::as_ptr(cell)),
            },
            Value::Record(cell) => match cell.try_borrow() {
                Ok(r) => write!(f, "Record({:p}, {})", Rc::as_ptr(cell), r.class_name),
                Err(_) => write!(f, "Record({:p}, borrowed)", Rc::as_ptr(cell)),
            },
        }
    }
}

// Convenient conversions
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<Resource> for Value {
    fn from(r: Resource) -> Self {
        Value::Resource(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(arr) => Value::list(arr),
            serde_json::Value::Object(obj) => Value::map(obj),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_continues_after_highest_index() {
        let mut c = Container::new();
        c.insert(5i64, "five");
        c.push("six");
        c.insert("name", "x");
        c.push("seven");
        let keys: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["5", "6", "name", "7"]);
    }

    #[test]
    fn test_push_refuses_after_max_index() {
        let mut c = Container::new();
        c.insert(i64::MAX, "last");
        assert!(!c.push("after"));
        assert_eq!(c.len(), 1);
        assert!(c.get(&Key::Index(i64::MIN)).is_none());

        // Explicit keys still work
        c.insert(-1i64, "neg");
        c.insert("name", "x");
        assert_eq!(c.len(), 3);
        assert!(!c.push("still no"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut c = Container::new();
        c.insert("a", 1);
        c.insert("b", 2);
        c.insert("c", 3);
        c.remove(&Key::from("b"));
        let keys: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_identity_follows_the_shared_handle() {
        let v = Value::list(vec![1, 2]);
        let alias = v.clone();
        let other = Value::list(vec![1, 2]);
        assert_eq!(v.identity(), alias.identity());
        assert_ne!(v.identity(), other.identity());
        assert_eq!(Value::Int(1).identity(), None);
    }

    #[test]
    fn test_debug_does_not_follow_cycles() {
        let v = Value::container(Container::new());
        v.as_container().unwrap().borrow_mut().insert("self", v.clone());
        let text = format!("{:?}", v);
        assert!(text.contains("1 members"));
        v.as_container().unwrap().borrow_mut().clear();
    }

    #[test]
    fn test_from_json_keeps_object_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": [true, 2.5, null], "m": "x"}"#).unwrap();
        let v = Value::from(json);
        let cell = v.as_container().unwrap().borrow();
        let keys: Vec<String> = cell.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        let inner = cell.get(&Key::from("a")).unwrap().as_container().unwrap().borrow();
        assert!(matches!(inner.get(&Key::Index(0)), Some(Value::Bool(true))));
        assert!(matches!(inner.get(&Key::Index(1)), Some(Value::Float(f)) if *f == 2.5));
        assert!(matches!(inner.get(&Key::Index(2)), Some(Value::Null)));
    }

    #[test]
    fn test_record_keeps_declaration_order() {
        let mut r = Record::new("Point");
        r.set("y", 2);
        r.set("x", 1);
        let names: Vec<&str> = r.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["y", "x"]);
        assert_eq!(r.class_name(), "Point");
    }
}
