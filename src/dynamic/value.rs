//! Dynamically typed values as seen at a duck-typed integration boundary.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// A key in a global symbol registry.
///
/// Two symbols registered under the same key are equal, so independent
/// libraries can agree on a symbolic property without sharing an instance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    key: Cow<'static, str>,
}

impl Symbol {
    /// Returns the registry symbol for `key`.
    pub fn registered(key: impl Into<Cow<'static, str>>) -> Self {
        Self { key: key.into() }
    }

    /// The registry key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Symbol({})", self.key)
    }
}

/// The key of an object property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKey {
    /// A string key, such as `map` or `fantasy-land/map`.
    Name(String),
    /// A symbolic key.
    Symbol(Symbol),
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(formatter, "{name:?}"),
            Self::Symbol(symbol) => write!(formatter, "{symbol}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

type Body = dyn Fn(&Dynamic, Vec<Dynamic>) -> Dynamic;

/// A shared callable taking a receiver and positional arguments.
#[derive(Clone)]
pub struct Function {
    name: Cow<'static, str>,
    body: Rc<Body>,
}

impl Function {
    /// Wraps `body` as an anonymous function.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Dynamic, Vec<Dynamic>) -> Dynamic + 'static,
    {
        Self::named("anonymous", body)
    }

    /// Wraps `body` under `name`, used only for debugging output.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&Dynamic, Vec<Dynamic>) -> Dynamic + 'static,
    {
        Self {
            name: name.into(),
            body: Rc::new(body),
        }
    }

    /// Wraps a one-argument function that ignores its receiver.
    ///
    /// A missing argument is passed as [`Dynamic::Undefined`].
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(Dynamic) -> Dynamic + 'static,
    {
        Self::new(move |_, arguments| body(arguments.into_iter().next().unwrap_or_default()))
    }

    /// The debugging name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function with `receiver` bound as its receiver.
    pub fn call(&self, receiver: &Dynamic, arguments: Vec<Dynamic>) -> Dynamic {
        (self.body)(receiver, arguments)
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function: {}]", self.name)
    }
}

/// A bag of properties, shared on clone.
#[derive(Debug, Clone, Default)]
pub struct Object {
    properties: Rc<BTreeMap<PropertyKey, Dynamic>>,
}

impl Object {
    /// Creates an object without properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<PropertyKey>, value: impl Into<Dynamic>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, copying the property table if it is shared.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: impl Into<Dynamic>) {
        Rc::make_mut(&mut self.properties).insert(key.into(), value.into());
    }

    /// Looks up an own property.
    pub fn get(&self, key: &PropertyKey) -> Option<&Dynamic> {
        self.properties.get(key)
    }

    /// Returns `true` if the object has an own property `key`.
    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterates over the own property keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.properties.keys()
    }

    /// Returns `true` if both handles share one property table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.properties, &other.properties)
    }
}

/// A dynamically typed value.
///
/// `Undefined` and `Null` are the two absent values. Plain data is carried
/// as JSON; objects and functions are reference types compared by identity.
#[derive(Debug, Clone, Default)]
pub enum Dynamic {
    /// No value at all.
    #[default]
    Undefined,
    /// An explicit absent value.
    Null,
    /// Plain data. JSON `null` is normalized to [`Dynamic::Null`] by the
    /// `From<Value>` conversion.
    Data(Value),
    /// An object with properties.
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Dynamic {
    /// Returns `true` for `Undefined` and `Null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Looks up an own property. Only objects have properties.
    pub fn get(&self, key: &PropertyKey) -> Option<&Self> {
        match self {
            Self::Object(object) => object.get(key),
            _ => None,
        }
    }

    /// The plain data, if this is data.
    pub const fn as_data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    /// The object, if this is an object.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The function, if this is a function.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// A short name of the variant, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Data(_) => "data",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Data(left), Self::Data(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl From<Value> for Dynamic {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            other => Self::Data(other),
        }
    }
}

impl From<Object> for Dynamic {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Function> for Dynamic {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}
