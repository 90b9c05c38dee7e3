//! Device catalog: maps raw device identities to control types and schemas
//!
//! Lookups check the host-registered specific list first (exact id plus OS),
//! then the generic list of substrings and regexes in registration order.
//! Devices that match nothing may still fall back to the unknown standard
//! mapping model, depending on the configured [`FallbackPolicy`].

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::config::FallbackPolicy;
use crate::control_type::ControlType;
use crate::device::{HostOs, RawDeviceSnapshot, ascii_identity};
use crate::error::ValidationError;
use crate::schema::{Schema, logitech_dual_action, standard_gamepad};

/// How a generic entry matches a device identity.
#[derive(Debug, Clone)]
pub enum IdPattern {
    Substring(String),
    Regex(Regex),
}

impl IdPattern {
    pub fn substring(text: impl Into<String>) -> Self {
        IdPattern::Substring(text.into())
    }

    pub fn regex(pattern: &str) -> Result<Self, ValidationError> {
        Regex::new(pattern)
            .map(IdPattern::Regex)
            .map_err(|e| ValidationError::InvalidPattern(e.to_string()))
    }

    pub fn is_match(&self, id: &str) -> bool {
        match self {
            IdPattern::Substring(text) => id.contains(text.as_str()),
            IdPattern::Regex(regex) => regex.is_match(id),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IdPattern::Substring(text) => text,
            IdPattern::Regex(regex) => regex.as_str(),
        }
    }
}

impl From<&str> for IdPattern {
    fn from(text: &str) -> Self {
        IdPattern::substring(text)
    }
}

/// What a model was registered against.
#[derive(Debug, Clone)]
pub enum ModelIdentity {
    /// Host-registered device id on one OS
    Exact { id: String, os: HostOs },
    /// Known substring or regex
    Pattern(IdPattern),
    /// Fallback for unrecognized devices
    UnknownStandard,
    Keyboard,
}

/// A known device: its identity, skin and concrete schema.
#[derive(Debug, Clone)]
pub struct DeviceModel {
    identity: ModelIdentity,
    control_type: Arc<ControlType>,
    schema: Arc<Schema>,
    icon_name: String,
}

impl DeviceModel {
    pub fn new(identity: ModelIdentity, control_type: Arc<ControlType>, schema: Arc<Schema>) -> Self {
        Self {
            identity,
            control_type,
            schema,
            icon_name: "generic".to_string(),
        }
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = icon_name.into();
        self
    }

    /// Model used for the keyboard player, built from the active preset's schema
    pub fn keyboard(control_type: Arc<ControlType>, schema: Arc<Schema>) -> Self {
        Self::new(ModelIdentity::Keyboard, control_type, schema).with_icon("keyboard")
    }

    pub fn identity(&self) -> &ModelIdentity {
        &self.identity
    }

    pub fn control_type(&self) -> &Arc<ControlType> {
        &self.control_type
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    /// Short human description of what this model matches
    pub fn describe(&self) -> String {
        match &self.identity {
            ModelIdentity::Exact { id, os } => format!("{id} ({os})"),
            ModelIdentity::Pattern(IdPattern::Substring(text)) => format!("*{text}*"),
            ModelIdentity::Pattern(IdPattern::Regex(regex)) => format!("/{}/", regex.as_str()),
            ModelIdentity::UnknownStandard => "unknown standard mapping".to_string(),
            ModelIdentity::Keyboard => "keyboard".to_string(),
        }
    }
}

/// Which catalog list produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Specific,
    Generic,
    Fallback,
}

/// Result of looking a device up.
#[derive(Debug, Clone)]
pub struct CatalogMatch<'a> {
    pub model: &'a DeviceModel,
    pub kind: MatchKind,
}

/// Append-only lists of known device models.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    specific: Vec<DeviceModel>,
    generic: Vec<DeviceModel>,
    unknown_standard: DeviceModel,
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::with_builtin_models()
    }
}

impl DeviceCatalog {
    /// Catalog with no specific or generic entries, only the fallback model
    pub fn empty() -> Self {
        Self {
            specific: Vec::new(),
            generic: Vec::new(),
            unknown_standard: DeviceModel::new(
                ModelIdentity::UnknownStandard,
                Arc::new(ControlType::hedgehog()),
                Arc::new(standard_gamepad()),
            ),
        }
    }

    /// Catalog pre-filled with the common XInput, Logitech and standard layouts
    pub fn with_builtin_models() -> Self {
        let mut catalog = Self::empty();
        let hedgehog = Arc::new(ControlType::hedgehog());
        let standard = Arc::new(standard_gamepad());
        let logitech = Arc::new(logitech_dual_action());

        let builtins = [
            ("XInput", "xbox360", &standard),
            ("xinput", "xbox360", &standard),
            ("XBox 360", "xbox360", &standard),
            ("Logitech Rumblepad 2", "generic", &logitech),
            ("Logitech Dual Action", "generic", &logitech),
            ("STANDARD GAMEPAD", "generic", &standard),
        ];
        for (pattern, icon, schema) in builtins {
            catalog.generic.push(
                DeviceModel::new(
                    ModelIdentity::Pattern(IdPattern::substring(pattern)),
                    hedgehog.clone(),
                    Arc::clone(schema),
                )
                .with_icon(icon),
            );
        }
        catalog
    }

    /// Register an exact device id on one OS. Checked before any generic entry.
    pub fn register_specific_model(
        &mut self,
        id: impl Into<String>,
        os: HostOs,
        control_type: Arc<ControlType>,
        schema: Arc<Schema>,
    ) -> Result<&DeviceModel, ValidationError> {
        let model = DeviceModel::new(
            ModelIdentity::Exact {
                id: id.into(),
                os,
            },
            control_type,
            schema,
        );
        Self::push(&mut self.specific, model)
    }

    /// Register a substring or regex match, appended after existing generic entries.
    pub fn register_generic_model(
        &mut self,
        pattern: impl Into<IdPattern>,
        control_type: Arc<ControlType>,
        schema: Arc<Schema>,
    ) -> Result<&DeviceModel, ValidationError> {
        let model = DeviceModel::new(
            ModelIdentity::Pattern(pattern.into()),
            control_type,
            schema,
        );
        Self::push(&mut self.generic, model)
    }

    /// Register a prebuilt model, for hosts that set their own icon.
    ///
    /// Exact identities join the specific list and patterns the generic list.
    pub fn register_model(&mut self, model: DeviceModel) -> Result<&DeviceModel, ValidationError> {
        match model.identity {
            ModelIdentity::Exact { .. } => Self::push(&mut self.specific, model),
            ModelIdentity::Pattern(_) => Self::push(&mut self.generic, model),
            ModelIdentity::UnknownStandard | ModelIdentity::Keyboard => {
                Err(ValidationError::UnregistrableModel(model.describe()))
            }
        }
    }

    fn push(list: &mut Vec<DeviceModel>, model: DeviceModel) -> Result<&DeviceModel, ValidationError> {
        if let Some(name) = model.schema.name() {
            return Err(ValidationError::KeyboardSchemaForDevice(name.to_string()));
        }
        list.push(model);
        Ok(&list[list.len() - 1])
    }

    pub fn specific(&self) -> &[DeviceModel] {
        &self.specific
    }

    pub fn generic(&self) -> &[DeviceModel] {
        &self.generic
    }

    pub fn unknown_standard(&self) -> &DeviceModel {
        &self.unknown_standard
    }

    /// Find the model for `device`, or `None` if the policy leaves it unassigned
    pub fn find(
        &self,
        device: &RawDeviceSnapshot,
        os: HostOs,
        policy: FallbackPolicy,
    ) -> Option<CatalogMatch<'_>> {
        let ascii_id = ascii_identity(&device.id);
        let specific = self.specific.iter().find(|model| match &model.identity {
            ModelIdentity::Exact { id, os: model_os } => {
                *model_os == os && ascii_identity(id) == ascii_id
            }
            _ => false,
        });
        if let Some(model) = specific {
            debug!("Device '{}' matched specific model", device.id);
            return Some(CatalogMatch {
                model,
                kind: MatchKind::Specific,
            });
        }

        let generic = self.generic.iter().find(|model| match &model.identity {
            ModelIdentity::Pattern(pattern) => pattern.is_match(&device.id),
            _ => false,
        });
        if let Some(model) = generic {
            debug!(
                "Device '{}' matched generic model {}",
                device.id,
                model.describe()
            );
            return Some(CatalogMatch {
                model,
                kind: MatchKind::Generic,
            });
        }

        let fallback = match policy {
            FallbackPolicy::Always => true,
            FallbackPolicy::StandardOnly => device.is_standard(),
            FallbackPolicy::Never => false,
        };
        if fallback {
            debug!(
                "Device '{}' unrecognized, using unknown standard mapping",
                device.id
            );
            Some(CatalogMatch {
                model: &self.unknown_standard,
                kind: MatchKind::Fallback,
            })
        } else {
            None
        }
    }
}
