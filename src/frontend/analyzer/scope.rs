//! Scope paths and compound symbol keys.

/// Where the analyzer currently is: at file level, in a function, in a class, or in a method of a class.
///
/// A `ScopePath` is a small `Copy` value. Entering a declaration produces a new path that is passed down the
/// recursive walk, so leaving the declaration needs no bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopePath<'a> {
    class: Option<&'a str>,
    /// Enclosing function, or the method when `class` is set.
    routine: Option<&'a str>,
}

impl<'a> ScopePath<'a> {
    /// File level.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn enter_function(self, name: &'a str) -> Self {
        Self {
            class: None,
            routine: Some(name),
        }
    }

    pub fn enter_class(self, name: &'a str) -> Self {
        Self {
            class: Some(name),
            routine: None,
        }
    }

    pub fn enter_method(self, name: &'a str) -> Self {
        Self {
            class: self.class,
            routine: Some(name),
        }
    }

    pub fn is_global(&self) -> bool {
        self.class.is_none() && self.routine.is_none()
    }

    /// Return `true` inside a method body, where `Self` is bound.
    pub fn in_method(&self) -> bool {
        self.class.is_some() && self.routine.is_some()
    }

    /// Dotted scope name: `C.M`, `C`, `F`, or `""` at file level.
    pub fn name(&self) -> String {
        match (self.class, self.routine) {
            (Some(class), Some(routine)) => format!("{class}.{routine}"),
            (Some(scope), None) | (None, Some(scope)) => scope.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Compound key for `name` declared in this scope.
    pub fn key(&self, name: &str) -> String {
        if self.is_global() {
            name.to_string()
        } else {
            format!("{}.{}", self.name(), name)
        }
    }

    /// Keys to try when resolving `name` here, innermost scope first, ending with the bare global name.
    pub fn candidates(&self, name: &str) -> Vec<String> {
        let mut keys = Vec::with_capacity(3);
        keys.push(self.key(name));
        if let (Some(class), Some(_)) = (self.class, self.routine) {
            keys.push(format!("{class}.{name}"));
        }
        if !self.is_global() {
            keys.push(name.to_string());
        }
        keys
    }
}
