// src/quantum/param.rs
//! Gate parameters
//!
//! A parameter is either a concrete real number or a symbolic expression whose
//! symbols are bound later through a [`ParamResolver`]. Arithmetic on concrete
//! operands folds eagerly, so a gate built from a float never carries an
//! expression tree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GateError, Result};

/// A real-valued gate parameter, possibly symbolic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Param {
    /// Concrete value
    Float(f64),

    /// Named placeholder
    Symbol(String),

    /// Negation
    Neg(Box<Param>),

    /// Sum of two expressions
    Add(Box<Param>, Box<Param>),

    /// Product of two expressions
    Mul(Box<Param>, Box<Param>),
}

impl Param {
    /// Create a symbolic placeholder
    pub fn symbol(name: impl Into<String>) -> Self {
        Param::Symbol(name.into())
    }

    /// The concrete value, if the expression contains no symbols
    pub fn value(&self) -> Option<f64> {
        match self {
            Param::Float(v) => Some(*v),
            Param::Symbol(_) => None,
            Param::Neg(x) => x.value().map(|v| -v),
            Param::Add(a, b) => Some(a.value()? + b.value()?),
            Param::Mul(a, b) => Some(a.value()? * b.value()?),
        }
    }

    /// Whether any symbol appears in the expression
    pub fn is_parameterized(&self) -> bool {
        match self {
            Param::Float(_) => false,
            Param::Symbol(_) => true,
            Param::Neg(x) => x.is_parameterized(),
            Param::Add(a, b) | Param::Mul(a, b) => a.is_parameterized() || b.is_parameterized(),
        }
    }

    /// Names of all symbols in the expression, sorted
    pub fn parameter_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, out: &mut BTreeSet<String>) {
        match self {
            Param::Float(_) => {}
            Param::Symbol(name) => {
                out.insert(name.clone());
            }
            Param::Neg(x) => x.collect_names(out),
            Param::Add(a, b) | Param::Mul(a, b) => {
                a.collect_names(out);
                b.collect_names(out);
            }
        }
    }

    /// Substitute every bound symbol and fold the result.
    ///
    /// Symbols missing from `resolver` are left in place.
    pub fn resolve(&self, resolver: &ParamResolver) -> Param {
        match self {
            Param::Float(v) => Param::Float(*v),
            Param::Symbol(name) => match resolver.get(name) {
                Some(v) => Param::Float(v),
                None => self.clone(),
            },
            Param::Neg(x) => -x.resolve(resolver),
            Param::Add(a, b) => a.resolve(resolver) + b.resolve(resolver),
            Param::Mul(a, b) => a.resolve(resolver) * b.resolve(resolver),
        }
    }

    /// Evaluate to a number, requiring every symbol to be bound
    pub fn evaluate(&self, resolver: &ParamResolver) -> Result<f64> {
        match self {
            Param::Float(v) => Ok(*v),
            Param::Symbol(name) => resolver
                .get(name)
                .ok_or_else(|| GateError::UnresolvedParameter(name.clone())),
            Param::Neg(x) => Ok(-x.evaluate(resolver)?),
            Param::Add(a, b) => Ok(a.evaluate(resolver)? + b.evaluate(resolver)?),
            Param::Mul(a, b) => Ok(a.evaluate(resolver)? * b.evaluate(resolver)?),
        }
    }
}

impl Default for Param {
    fn default() -> Self {
        Param::Float(0.0)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Param::Symbol(name.to_string())
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Param::Symbol(name)
    }
}

impl Neg for Param {
    type Output = Param;

    fn neg(self) -> Param {
        match self {
            Param::Float(v) => Param::Float(-v),
            Param::Neg(inner) => *inner,
            other => Param::Neg(Box::new(other)),
        }
    }
}

impl Add for Param {
    type Output = Param;

    fn add(self, rhs: Param) -> Param {
        match (self, rhs) {
            (Param::Float(a), Param::Float(b)) => Param::Float(a + b),
            (Param::Float(z), x) if z == 0.0 => x,
            (x, Param::Float(z)) if z == 0.0 => x,
            (a, b) => Param::Add(Box::new(a), Box::new(b)),
        }
    }
}

impl Sub for Param {
    type Output = Param;

    fn sub(self, rhs: Param) -> Param {
        self + (-rhs)
    }
}

impl Mul for Param {
    type Output = Param;

    fn mul(self, rhs: Param) -> Param {
        match (self, rhs) {
            (Param::Float(a), Param::Float(b)) => Param::Float(a * b),
            // Coefficients go on the left so `-2*p` prints the way it reads.
            (Param::Float(c), x) | (x, Param::Float(c)) => {
                if c == 0.0 {
                    Param::Float(0.0)
                } else if c == 1.0 {
                    x
                } else if c == -1.0 {
                    -x
                } else {
                    Param::Mul(Box::new(Param::Float(c)), Box::new(x))
                }
            }
            (a, b) => Param::Mul(Box::new(a), Box::new(b)),
        }
    }
}

impl Add<f64> for Param {
    type Output = Param;

    fn add(self, rhs: f64) -> Param {
        self + Param::Float(rhs)
    }
}

impl Sub<f64> for Param {
    type Output = Param;

    fn sub(self, rhs: f64) -> Param {
        self + Param::Float(-rhs)
    }
}

impl Mul<f64> for Param {
    type Output = Param;

    fn mul(self, rhs: f64) -> Param {
        self * Param::Float(rhs)
    }
}

impl Mul<Param> for f64 {
    type Output = Param;

    fn mul(self, rhs: Param) -> Param {
        Param::Float(self) * rhs
    }
}

fn fmt_factor(p: &Param, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match p {
        Param::Add(..) => write!(f, "({})", p),
        _ => write!(f, "{}", p),
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Float(v) => write!(f, "{}", v),
            Param::Symbol(name) => write!(f, "{}", name),
            Param::Neg(inner) => {
                write!(f, "-")?;
                fmt_factor(inner, f)
            }
            Param::Add(a, b) => match b.as_ref() {
                Param::Neg(x) => {
                    write!(f, "{} - ", a)?;
                    fmt_factor(x, f)
                }
                Param::Float(v) if v.is_sign_negative() => write!(f, "{} - {}", a, -v),
                _ => write!(f, "{} + {}", a, b),
            },
            Param::Mul(a, b) => {
                fmt_factor(a, f)?;
                write!(f, "*")?;
                fmt_factor(b, f)
            }
        }
    }
}

/// Bindings from symbol names to concrete values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamResolver {
    values: BTreeMap<String, f64>,
}

impl ParamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding (builder style)
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a binding, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        let name = name.into();
        debug!(symbol = %name, value, "binding parameter");
        self.values.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParamResolver {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut resolver = ParamResolver::new();
        for (name, value) in iter {
            resolver.insert(name, value);
        }
        resolver
    }
}
