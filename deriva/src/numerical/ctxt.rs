use crate::funcs::{self, Function};
use levenshtein::levenshtein;
use std::{collections::HashMap, sync::Arc};

/// A context to use when evaluating an expression, containing variables and functions that can
/// be used within the expression.
///
/// Function names resolve against this context's own map first and fall back to the builtin
/// registry, so even the empty context can evaluate calls to builtins. Entries added here shadow
/// builtins of the same name.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// The functions in the context.
    funcs: HashMap<String, Arc<dyn Function>>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Creates an independent copy of this context, pre-populated with all of its variables and
    /// functions.
    ///
    /// The copy is a snapshot, not a live view: mutating the child never affects the parent.
    pub fn child(&self) -> Ctxt {
        self.clone()
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Add a function to the context, keyed by its name.
    pub fn add_func(&mut self, func: Arc<dyn Function>) {
        self.funcs.insert(func.name().to_string(), func);
    }

    /// Get a function by name, looking first in this context's map, then in the builtin
    /// registry.
    pub fn get_func(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.funcs
            .get(name)
            .cloned()
            .or_else(|| funcs::get(name).map(|func| Arc::new(func) as Arc<dyn Function>))
    }

    /// Returns the functions in the context.
    pub fn get_funcs(&self) -> &HashMap<String, Arc<dyn Function>> {
        &self.funcs
    }

    /// Returns all function names reachable from this context with a name similar to the given
    /// name.
    pub fn get_similar_funcs<'a>(&'a self, name: &str) -> Vec<&'a str> {
        self.funcs
            .keys()
            .map(|n| n.as_str())
            .chain(funcs::names().map(|n| -> &'a str { n }))
            .filter(|n| levenshtein(n, name) < 2)
            .collect()
    }
}
