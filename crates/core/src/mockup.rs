//! Mockup catalog: options built from raw records fetched from the mockup
//! provider, plus the lookups the draft and submission logic need.
//!
//! Smart objects whose name contains `"Background"` are never printable and
//! are dropped from every option.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Marker that identifies non-printable background layers.
pub const BACKGROUND_MARKER: &str = "Background";

/// Display text for a mockup with no printable smart objects.
pub const NO_PRINTABLE_OBJECTS: &str = "No printable objects";

/// Name shown for a smart object that arrives without one.
pub const UNNAMED_SMART_OBJECT: &str = "Unnamed";

/// Separator between smart object names in an option's display text.
pub const DISPLAY_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Raw records (provider wire shape)
// ---------------------------------------------------------------------------

/// A smart object as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawSmartObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
}

/// A mockup as returned by the provider. Either `id` or `uuid` identifies it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawMockup {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub smart_objects: Vec<RawSmartObject>,
}

impl RawMockup {
    /// The catalog identifier: `id`, else `uuid`, else empty.
    pub fn identifier(&self) -> &str {
        self.id
            .as_deref()
            .or(self.uuid.as_deref())
            .unwrap_or_default()
    }
}

/// Source of raw mockup records.
#[async_trait]
pub trait MockupSource: Send + Sync {
    async fn fetch_mockups(&self) -> Result<Vec<RawMockup>, CoreError>;
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A printable region within a mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartObject {
    /// Name as reported by the provider; `None` when it sent none.
    pub name: Option<String>,
    pub uuid: Option<String>,
}

impl SmartObject {
    /// Name shown in the selection list.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_SMART_OBJECT)
    }
}

/// A selectable mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockupOption {
    pub id: String,
    pub display_text: String,
    pub smart_objects: Vec<SmartObject>,
}

impl MockupOption {
    pub fn from_raw(raw: &RawMockup) -> Self {
        let smart_objects: Vec<SmartObject> = raw
            .smart_objects
            .iter()
            .filter(|so| !is_background(so.name.as_deref().unwrap_or_default()))
            .map(|so| SmartObject {
                name: so.name.clone(),
                uuid: so.uuid.clone(),
            })
            .collect();

        let display_text = if smart_objects.is_empty() {
            NO_PRINTABLE_OBJECTS.to_string()
        } else {
            smart_objects
                .iter()
                .map(SmartObject::display_name)
                .collect::<Vec<_>>()
                .join(DISPLAY_SEPARATOR)
        };

        Self {
            id: raw.identifier().to_string(),
            display_text,
            smart_objects,
        }
    }
}

/// The set of mockup options available for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MockupCatalog {
    options: Vec<MockupOption>,
}

impl MockupCatalog {
    pub fn new(options: Vec<MockupOption>) -> Self {
        Self { options }
    }

    pub fn from_raw(raw: &[RawMockup]) -> Self {
        Self::new(raw.iter().map(MockupOption::from_raw).collect())
    }

    pub fn options(&self) -> &[MockupOption] {
        &self.options
    }

    /// Display texts as offered for selection, led by the empty option.
    pub fn selection_labels(&self) -> Vec<&str> {
        std::iter::once("")
            .chain(self.options.iter().map(|o| o.display_text.as_str()))
            .collect()
    }

    /// Mockup id for a display text; empty when nothing matches.
    ///
    /// Two mockups can share a display text. The last one wins, mirroring how
    /// the selection list maps labels onto ids.
    pub fn id_for(&self, display_text: &str) -> &str {
        self.options
            .iter()
            .rev()
            .find(|o| o.display_text == display_text)
            .map(|o| o.id.as_str())
            .unwrap_or_default()
    }

    /// The uuid of the printable smart object named `name` in mockup `mockup_id`.
    ///
    /// Only the first option carrying `mockup_id` is searched. Names are
    /// compared as the provider sent them, so the display placeholder for an
    /// unnamed object never matches.
    pub fn smart_object_uuid(&self, mockup_id: &str, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.id == mockup_id)?
            .smart_objects
            .iter()
            .find(|so| {
                let raw = so.name.as_deref().unwrap_or_default();
                raw == name && !is_background(raw)
            })
            .and_then(|so| so.uuid.as_deref())
    }
}

fn is_background(name: &str) -> bool {
    name.contains(BACKGROUND_MARKER)
}

/// Fetch and build the catalog from a source.
pub async fn load_catalog(source: &dyn MockupSource) -> Result<MockupCatalog, CoreError> {
    let raw = source.fetch_mockups().await?;
    Ok(MockupCatalog::from_raw(&raw))
}
