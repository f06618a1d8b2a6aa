//! Form-state manager.
//!
//! Fields are registered with an ordered list of [`FieldRule`]s. Values come
//! in through [`FormState::set_value`] (inputs, or the editor bridge), and
//! [`FormState::handle_submit_with`] only calls its handler once every field
//! passes. The first failing rule of each field is reported.

mod adapters;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

pub use adapters::{LoginForm, PostForm, SignupForm};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Email address must be a valid address";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // `\w` is ASCII-only here, matching browser regex semantics.
        Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
            .expect("email pattern is valid")
    })
}

#[derive(Debug, Clone)]
pub enum FieldRule {
    Required { message: String },
    Pattern { regex: Regex, message: String },
    MinLength { min: u64, message: String },
}

impl FieldRule {
    pub fn required() -> Self {
        Self::Required {
            message: REQUIRED_MESSAGE.to_string(),
        }
    }

    pub fn email() -> Self {
        Self::Pattern {
            regex: email_regex().clone(),
            message: EMAIL_MESSAGE.to_string(),
        }
    }

    pub fn min_length(min: u64) -> Self {
        Self::MinLength {
            min,
            message: format!("Must be at least {min} characters"),
        }
    }

    pub fn check(&self, value: &str) -> Result<(), &str> {
        let ok = match self {
            Self::Required { .. } => !value.is_empty(),
            Self::Pattern { regex, .. } => regex.is_match(value),
            Self::MinLength { min, .. } => validator::validate_length(value, Some(*min), None, None),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Required { message }
            | Self::Pattern { message, .. }
            | Self::MinLength { message, .. } => message,
        }
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validated values handed to a submit handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn take(&mut self, field: &str) -> String {
        self.0.remove(field).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
struct Field {
    name: String,
    rules: Vec<FieldRule>,
    default: String,
    value: String,
    touched: bool,
}

impl Field {
    fn validate(&self) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.check(&self.value).err())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<Field>,
    errors: FieldErrors,
    submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, rules: Vec<FieldRule>) -> &mut Self {
        self.register_with_default(name, rules, "")
    }

    /// Registers a field, replacing any previous registration under the
    /// same name.
    pub fn register_with_default(
        &mut self,
        name: &str,
        rules: Vec<FieldRule>,
        default: &str,
    ) -> &mut Self {
        let field = Field {
            name: name.to_string(),
            rules,
            default: default.to_string(),
            value: default.to_string(),
            touched: false,
        };
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Records a change. After the first submit the field is re-validated
    /// on every change so inline errors clear as the user types.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let revalidate = self.submit_count > 0;
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            tracing::debug!(field = name, "ignoring change for unregistered field");
            return false;
        };
        field.value = value.into();

        if revalidate {
            match field.validate().map(str::to_owned) {
                Some(message) => self.errors.insert(name, message),
                None => self.errors.remove(name),
            }
        }
        true
    }

    pub fn mark_touched(&mut self, name: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.touched = true;
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.touched)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn is_field_dirty(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.value != f.default)
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|f| f.value != f.default)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validates every field and stores the resulting errors.
    pub fn validate(&mut self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in &self.fields {
            if let Some(message) = field.validate() {
                errors.insert(field.name.as_str(), message);
            }
        }
        self.errors = errors;
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Validates and, when every field passes, calls `handler` with the
    /// collected values.
    pub fn handle_submit_with<T, F>(&mut self, handler: F) -> Result<T, FieldErrors>
    where
        F: FnOnce(FormValues) -> T,
    {
        self.submit_count += 1;
        self.validate()?;
        let values = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        Ok(handler(FormValues(values)))
    }

    pub fn handle_submit(&mut self) -> Result<FormValues, FieldErrors> {
        self.handle_submit_with(|values| values)
    }

    /// Restores defaults and forgets errors and submit attempts.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
            field.touched = false;
        }
        self.errors = FieldErrors::default();
        self.submit_count = 0;
    }
}
