//! Translation instance
//!
//! An [`I18n`] owns the active language, options, resource store, event
//! callbacks and logger. Instances never share state; `create_instance`
//! hands out a fresh, uninitialized one.

use crate::error::Result;
use crate::events::{Event, EventRegistry};
use crate::interpolation::{self, InterpolationData};
use crate::logging::{ConsoleLogger, LogLevel, Logger};
use crate::merge::{deep_merge, set_path, shallow_merge_keep_existing};
use crate::options::{InitOptions, LookupOptions};
use crate::resolver;
use crate::resource::{bundle_from_json, Resource, ResourceBundle, ResourceKey};
use crate::DEFAULT_NAMESPACE;
use serde_json::Value;
use std::future::{ready, Ready};
use std::mem;
use std::rc::Rc;

struct Lookup<'a> {
    lng: &'a str,
    ns: &'a str,
    key: &'a str,
    found: Option<&'a ResourceKey>,
}

/// Per-call translation options: language/namespace overrides plus
/// interpolation values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TOptions {
    pub lng: Option<String>,
    pub ns: Option<String>,
    pub values: InterpolationData,
}

impl TOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interpolation value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_lng(mut self, lng: impl Into<String>) -> Self {
        self.lng = Some(lng.into());
        self
    }

    pub fn with_ns(mut self, ns: impl Into<String>) -> Self {
        self.ns = Some(ns.into());
        self
    }
}

impl From<Value> for TOptions {
    /// Builds options from a JSON object. `lng` and `ns` string entries set
    /// the overrides and remain available as interpolation values.
    fn from(value: Value) -> Self {
        let values = match value {
            Value::Object(map) => map,
            _ => InterpolationData::new(),
        };
        TOptions {
            lng: values.get("lng").and_then(Value::as_str).map(str::to_string),
            ns: values.get("ns").and_then(Value::as_str).map(str::to_string),
            values,
        }
    }
}

/// Second argument of [`I18n::t`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TArg {
    #[default]
    None,
    /// Text used when the key has no translation
    Default(String),
    /// Interpolation values and overrides
    Options(TOptions),
}

impl From<&str> for TArg {
    fn from(value: &str) -> Self {
        TArg::Default(value.to_string())
    }
}

impl From<String> for TArg {
    fn from(value: String) -> Self {
        TArg::Default(value)
    }
}

impl From<TOptions> for TArg {
    fn from(options: TOptions) -> Self {
        TArg::Options(options)
    }
}

impl From<Option<TOptions>> for TArg {
    fn from(options: Option<TOptions>) -> Self {
        options.map_or(TArg::None, TArg::Options)
    }
}

/// A translation context
pub struct I18n {
    language: String,
    options: InitOptions,
    store: Option<Resource>,
    events: EventRegistry,
    logger: Rc<dyn Logger>,
    logger_injected: bool,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language)
            .field("options", &self.options)
            .field("store", &self.store)
            .field("events", &self.events)
            .finish()
    }
}

impl I18n {
    /// Uninitialized instance: no language, no store, default options
    pub fn new() -> Self {
        I18n {
            language: String::new(),
            options: InitOptions::default(),
            store: None,
            events: EventRegistry::new(),
            logger: Rc::new(ConsoleLogger::default()),
            logger_injected: false,
        }
    }

    /// A fresh instance sharing nothing with `self`
    pub fn create_instance(&self) -> I18n {
        I18n::new()
    }

    /// Replaces options and store.
    ///
    /// The store is built from `options.resources`, which are then cleared
    /// from the retained options.
    pub fn init(&mut self, mut options: InitOptions) -> &mut Self {
        options.interpolation = options.interpolation.normalized();
        self.language = options.lng.clone().unwrap_or_default();
        self.store = Some(mem::take(&mut options.resources));

        if !self.logger_injected {
            let level = if options.debug {
                LogLevel::Debug
            } else {
                LogLevel::Warn
            };
            self.logger = Rc::new(ConsoleLogger::new(level));
        }
        self.options = options;

        self.logger.debug(&format!(
            "initialized: language={:?}, namespace={:?}",
            self.language,
            self.default_namespace()
        ));
        self
    }

    /// Replaces the logger; `debug` in later `init` calls no longer swaps it
    pub fn set_logger(&mut self, logger: Rc<dyn Logger>) -> &mut Self {
        self.logger = logger;
        self.logger_injected = true;
        self
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Shared handle to the logger, for collaborators that outlive a borrow
    pub fn logger_handle(&self) -> Rc<dyn Logger> {
        self.logger.clone()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn options(&self) -> &InitOptions {
        &self.options
    }

    pub fn store(&self) -> Option<&Resource> {
        self.store.as_ref()
    }

    /// Namespace used by `t` when none is given
    pub fn default_namespace(&self) -> &str {
        self.options.default_ns.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Switches the active language.
    ///
    /// The language is set before returning; the returned future is already
    /// resolved and yields the instance.
    pub fn change_language(&mut self, lng: impl Into<String>) -> Ready<&Self> {
        self.language = lng.into();
        self.logger.debug(&format!("language changed to {:?}", self.language));
        ready(&*self)
    }

    /// Looks up `key` in the (lng, ns) bundle. Never mutates the store.
    pub fn get_resource(
        &self,
        lng: &str,
        ns: &str,
        key: &str,
        options: Option<&LookupOptions>,
    ) -> Option<&ResourceKey> {
        let namespace = self.store.as_ref()?.get(lng)?.get(ns)?;

        let separator = options
            .and_then(|o| o.key_separator.clone())
            .unwrap_or_else(|| self.options.key_separator());
        let ignore_json_structure = options
            .and_then(|o| o.ignore_json_structure)
            .or(self.options.ignore_json_structure)
            .unwrap_or(false);

        resolver::resolve(namespace, key, &separator, ignore_json_structure)
    }

    /// Translates `key`.
    ///
    /// Missing keys fall back to `TArg::Default` text, or to the key itself.
    /// Interpolation runs when values are available: `options` first, then
    /// `TArg::Options`.
    pub fn t(&self, key: &str, arg: TArg, options: Option<&TOptions>) -> String {
        let (default_value, arg_options) = match &arg {
            TArg::None => (None, None),
            TArg::Default(value) => (Some(value.as_str()), None),
            TArg::Options(options) => (None, Some(options)),
        };
        let data = options.or(arg_options);

        let lookup = self.lookup(key, data);
        let raw = match lookup.found {
            Some(ResourceKey::Value(value)) => value.as_str(),
            found => {
                if found.is_some() {
                    self.logger.debug(&format!(
                        "key {:?} in {}/{} resolves to a group, not a string",
                        lookup.key, lookup.lng, lookup.ns
                    ));
                } else {
                    self.logger.debug(&format!(
                        "missing key {:?} in {}/{}",
                        lookup.key, lookup.lng, lookup.ns
                    ));
                }
                default_value.unwrap_or(key)
            }
        };

        match data {
            Some(data) => self.interpolate(raw, &data.values),
            None => raw.to_string(),
        }
    }

    /// True when `key` resolves to a translated string, honoring the
    /// `lng`/`ns` overrides in `options`
    pub fn exists(&self, key: &str, options: Option<&TOptions>) -> bool {
        matches!(self.lookup(key, options).found, Some(ResourceKey::Value(_)))
    }

    /// Interpolates with this instance's delimiters.
    ///
    /// A pattern that fails to compile leaves the template unchanged.
    pub fn interpolate(&self, template: &str, data: &InterpolationData) -> String {
        match interpolation::interpolate(template, data, &self.options.interpolation) {
            Ok(result) => result,
            Err(err) => {
                self.logger.error(&err.to_string());
                template.to_string()
            }
        }
    }

    /// True when `value` contains both of this instance's delimiters
    pub fn has_interpolation(&self, value: &str) -> bool {
        interpolation::has_interpolation(value, &self.options.interpolation)
    }

    /// Merges `resources` into the (lng, ns) bundle and fires `loaded`.
    ///
    /// `deep` merges recursively; otherwise the bundle is replaced
    /// (`overwrite`) or merged at the top level with existing keys winning.
    pub fn add_resource_bundle(
        &mut self,
        lng: &str,
        ns: &str,
        resources: ResourceBundle,
        deep: bool,
        overwrite: bool,
    ) -> &mut Self {
        let slot = self
            .store
            .get_or_insert_with(Resource::new)
            .entry(lng.to_string())
            .or_default()
            .entry(ns.to_string())
            .or_insert_with(ResourceKey::nested);

        if deep {
            if !slot.is_nested() {
                *slot = ResourceKey::nested();
            }
            if let Some(existing) = slot.as_nested_mut() {
                deep_merge(existing, &resources, overwrite);
            }
        } else if overwrite {
            *slot = ResourceKey::Nested(resources);
        } else {
            let existing = slot.as_nested().cloned().unwrap_or_default();
            *slot = ResourceKey::Nested(shallow_merge_keep_existing(&existing, &resources));
        }

        self.logger.debug(&format!("bundle loaded: {}/{}", lng, ns));
        self.events.emit(Event::Loaded, lng, ns);
        self
    }

    /// [`add_resource_bundle`](Self::add_resource_bundle) for JSON input
    pub fn add_resource_bundle_json(
        &mut self,
        lng: &str,
        ns: &str,
        resources: Value,
        deep: bool,
        overwrite: bool,
    ) -> Result<&mut Self> {
        let bundle = bundle_from_json(resources)?;
        Ok(self.add_resource_bundle(lng, ns, bundle, deep, overwrite))
    }

    /// Sets one key, creating groups along the key-separator path, and
    /// fires `added`
    pub fn add_resource(
        &mut self,
        lng: &str,
        ns: &str,
        key: &str,
        value: impl Into<ResourceKey>,
    ) -> &mut Self {
        let separator = self.options.key_separator();
        let segments: Vec<&str> = match separator.as_str() {
            Some(sep) => key.split(sep).collect(),
            None => vec![key],
        };

        let slot = self
            .store
            .get_or_insert_with(Resource::new)
            .entry(lng.to_string())
            .or_default()
            .entry(ns.to_string())
            .or_insert_with(ResourceKey::nested);
        set_path(slot, &segments, value.into());

        self.events.emit(Event::Added, lng, ns);
        self
    }

    /// Drops the (lng, ns) bundle and fires `removed` if it existed
    pub fn remove_resource_bundle(&mut self, lng: &str, ns: &str) -> &mut Self {
        let removed = self
            .store
            .as_mut()
            .and_then(|store| store.get_mut(lng))
            .and_then(|language| language.shift_remove(ns))
            .is_some();

        if removed {
            self.events.emit(Event::Removed, lng, ns);
        }
        self
    }

    pub fn has_resource_bundle(&self, lng: &str, ns: &str) -> bool {
        self.get_resource_bundle(lng, ns).is_some()
    }

    pub fn get_resource_bundle(&self, lng: &str, ns: &str) -> Option<&ResourceKey> {
        self.store.as_ref()?.get(lng)?.get(ns)
    }

    /// Registers the callback for `event`, replacing any previous one
    pub fn on(&mut self, event: Event, callback: impl Fn(&str, &str) + 'static) -> &mut Self {
        self.events.on(event, callback);
        self
    }

    /// Clears the callback for `event`
    pub fn off(&mut self, event: Event) -> &mut Self {
        self.events.off(event);
        self
    }

    /// Picks the namespace for `key`: an `ns:` prefix naming a bundle of the
    /// language wins over `ns_override`, which wins over the default.
    fn lookup<'k>(&'k self, key: &'k str, data: Option<&'k TOptions>) -> Lookup<'k> {
        let lng = data
            .and_then(|o| o.lng.as_deref())
            .unwrap_or(self.language.as_str());
        let (ns, key) = self.split_namespace(lng, key, data.and_then(|o| o.ns.as_deref()));
        Lookup {
            lng,
            ns,
            key,
            found: self.get_resource(lng, ns, key, None),
        }
    }

    fn split_namespace<'k>(
        &'k self,
        lng: &str,
        key: &'k str,
        ns_override: Option<&'k str>,
    ) -> (&'k str, &'k str) {
        let fallback = ns_override.unwrap_or_else(|| self.default_namespace());

        let separator = self.options.ns_separator();
        let Some(sep) = separator.as_str() else {
            return (fallback, key);
        };

        match key.split_once(sep) {
            Some((ns, rest)) if self.has_resource_bundle(lng, ns) => (ns, rest),
            _ => (fallback, key),
        }
    }
}
