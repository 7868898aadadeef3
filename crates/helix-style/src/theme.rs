#![forbid(unsafe_code)]

//! Theme state and presentation-variable publication.
//!
//! [`ThemeService`] owns the process-wide current theme: the name, the dark
//! flag, and the published brand variables. It is an explicitly constructed
//! service with a single-writer contract — no ambient global, no locking.
//! Collaborators arrive through the constructor: a [`PreferenceStore`] for
//! durable persistence and an optional [`BrandColorSource`] supplying the
//! deployment's primary/secondary colors.
//!
//! Failure policy: storage and parse failures are logged and recovered
//! locally. The in-memory state is always authoritative; no public method
//! here returns an error.

use std::fmt;

use ahash::AHashMap;
use web_time::SystemTime;

use crate::color::{Palette, Rgb};
use crate::error::StorageError;

/// Key under which the theme preference is persisted.
pub const PREFERENCE_KEY: &str = "helix-theme-preference";

/// Variable-name prefix for the primary brand palette.
pub const PRIMARY_PREFIX: &str = "insurer-primary-color";

/// Variable-name prefix for the secondary brand palette.
pub const SECONDARY_PREFIX: &str = "insurer-secondary-color";

/// The two supported themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// The persisted literal for this theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact literals `"light"` and
    /// `"dark"` are accepted; anything else is `None`.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for the theme preference.
///
/// The host supplies the backend (browser local storage, a dotfile, a
/// settings database). [`MemoryStore`] ships for tests and hosts without
/// durable storage.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A deployment's brand color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandColors {
    /// Primary brand color, as a hex string.
    pub primary: String,
    /// Secondary brand color, as a hex string.
    pub secondary: String,
}

/// Externally supplied brand colors, per deployment context.
///
/// Absent means "no brand colors configured": [`ThemeService`] publishes
/// nothing and static fallback values are assumed to exist in the styling
/// layer.
pub trait BrandColorSource {
    fn colors(&self) -> BrandColors;
}

/// A fixed [`BrandColorSource`].
#[derive(Debug, Clone)]
pub struct StaticBrandColors(pub BrandColors);

impl BrandColorSource for StaticBrandColors {
    fn colors(&self) -> BrandColors {
        self.0.clone()
    }
}

/// Process-wide theme state: current name, dark flag, published variables.
///
/// Single writer; all mutations are synchronous, and callers observe a
/// consistent value as soon as any setter returns.
pub struct ThemeService {
    name: ThemeName,
    changed_at: Option<SystemTime>,
    store: Box<dyn PreferenceStore>,
    brand: Option<Box<dyn BrandColorSource>>,
    variables: AHashMap<String, String>,
}

impl fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeService")
            .field("name", &self.name)
            .field("changed_at", &self.changed_at)
            .field("brand", &self.brand.is_some())
            .field("variables", &self.variables.len())
            .finish()
    }
}

impl ThemeService {
    /// Create a service over the given store, with no brand color source.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_brand_source(store, None)
    }

    /// Create a service with an optional brand color source.
    pub fn with_brand_source(
        store: Box<dyn PreferenceStore>,
        brand: Option<Box<dyn BrandColorSource>>,
    ) -> Self {
        Self {
            name: ThemeName::Light,
            changed_at: None,
            store,
            brand,
            variables: AHashMap::new(),
        }
    }

    /// Read the persisted preference and apply it as current state.
    ///
    /// Only the literals `"light"`/`"dark"` are honored; anything else —
    /// including a failed read — falls back to light. Applies synchronously,
    /// then publishes the brand palette.
    pub fn initialize(&mut self) {
        self.name = match self.store.load(PREFERENCE_KEY) {
            Ok(Some(value)) => ThemeName::from_persisted(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unrecognized persisted theme, defaulting to light");
                ThemeName::Light
            }),
            Ok(None) => ThemeName::Light,
            Err(err) => {
                tracing::warn!(%err, "theme preference unreadable, defaulting to light");
                ThemeName::Light
            }
        };
        self.apply_brand_palette();
    }

    /// Switch to `name`: update in-memory state, persist, republish.
    ///
    /// A persistence failure is logged and swallowed — the in-memory change
    /// always takes effect.
    pub fn set_theme(&mut self, name: ThemeName) {
        self.name = name;
        self.changed_at = Some(SystemTime::now());
        if let Err(err) = self.store.store(PREFERENCE_KEY, name.as_str()) {
            tracing::warn!(%err, theme = %name, "failed to persist theme preference");
        }
        self.apply_brand_palette();
    }

    /// Switch to the opposite of the current theme.
    pub fn toggle(&mut self) {
        self.set_theme(self.name.opposite());
    }

    /// Derive and publish the brand palettes as named variables.
    ///
    /// No-op when no brand color source is configured. A color that fails to
    /// parse is passed through unchanged into every slot of its variable set
    /// and a diagnostic is logged; this path never raises.
    pub fn apply_brand_palette(&mut self) {
        let Some(brand) = &self.brand else {
            return;
        };
        let colors = brand.colors();
        publish_palette(&mut self.variables, PRIMARY_PREFIX, &colors.primary);
        publish_palette(&mut self.variables, SECONDARY_PREFIX, &colors.secondary);
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn is_dark(&self) -> bool {
        self.name.is_dark()
    }

    /// When the theme was last explicitly changed, if ever.
    pub fn changed_at(&self) -> Option<SystemTime> {
        self.changed_at
    }

    /// Look up a published variable by name.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// All published variables.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Suffixes of one palette's variable set, in publication order.
const PALETTE_SUFFIXES: [&str; 7] = ["", "-light", "-lighter", "-dark", "-darker", "-text", "-rgb"];

fn publish_palette(variables: &mut AHashMap<String, String>, prefix: &str, input: &str) {
    match Rgb::parse(input) {
        Ok(base) => {
            let palette = Palette::derive(base);
            variables.insert(prefix.to_string(), palette.base.to_hex());
            variables.insert(format!("{prefix}-light"), palette.light.to_hex());
            variables.insert(format!("{prefix}-lighter"), palette.lighter.to_hex());
            variables.insert(format!("{prefix}-dark"), palette.dark.to_hex());
            variables.insert(format!("{prefix}-darker"), palette.darker.to_hex());
            variables.insert(format!("{prefix}-text"), palette.text.to_hex());
            variables.insert(format!("{prefix}-rgb"), palette.rgb_triple());
        }
        Err(err) => {
            tracing::warn!(%err, color = input, prefix, "brand color unparseable, passing through");
            for suffix in PALETTE_SUFFIXES {
                variables.insert(format!("{prefix}{suffix}"), input.to_string());
            }
        }
    }
}
