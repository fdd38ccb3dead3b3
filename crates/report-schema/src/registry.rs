//! Host-driven layout registration and per-device binding.
//!
//! The host builds one [`LayoutRegistry`] at startup, explicitly, with every
//! layout it supports. Each newly discovered device gets a [`DeviceBinding`]
//! that is resolved against the registry exactly once: it ends up either
//! matched to a layout for the rest of its connected lifetime or rejected.

use crate::layout::{ReportLayout, ReportLayoutDef};
use crate::state::DecodedState;
use crate::{SchemaError, SchemaResult};
use openpad_hid_common::{DeviceIdentity, DeviceMatcher, RawReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// On-disk unit of registration: a layout and the devices it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub name: String,
    pub matcher: DeviceMatcher,
    pub layout: ReportLayout,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutConfigDef {
    name: String,
    matcher: DeviceMatcher,
    layout: ReportLayoutDef,
}

impl LayoutConfig {
    /// Load a config file. Validation failures surface as their own
    /// [`SchemaError`] variants rather than as parse errors.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let def: LayoutConfigDef = serde_json::from_str(json)?;
        Ok(Self {
            name: def.name,
            matcher: def.matcher,
            layout: ReportLayout::try_from(def.layout)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RegisteredLayout {
    pub name: String,
    pub matcher: DeviceMatcher,
    pub layout: Arc<ReportLayout>,
}

/// Layouts known to the host, consulted in registration order.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    entries: Vec<RegisteredLayout>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the host's full set of layouts.
    pub fn initialize(configs: impl IntoIterator<Item = LayoutConfig>) -> SchemaResult<Self> {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config.name, config.matcher, config.layout)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        matcher: DeviceMatcher,
        layout: ReportLayout,
    ) -> SchemaResult<()> {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(SchemaError::DuplicateLayout(name));
        }
        layout.validate()?;

        debug!(
            layout = %name,
            vendor_id = format_args!("{:#06x}", matcher.vendor_id),
            product_id = format_args!("{:#06x}", matcher.product_id),
            "registered report layout"
        );
        self.entries.push(RegisteredLayout {
            name,
            matcher,
            layout: Arc::new(layout),
        });
        Ok(())
    }

    /// First registered layout whose matcher accepts `identity`.
    pub fn find_for(&self, identity: &DeviceIdentity) -> Option<&RegisteredLayout> {
        self.entries.iter().find(|e| e.matcher.matches(identity))
    }

    pub fn layout(&self, name: &str) -> SchemaResult<Arc<ReportLayout>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| Arc::clone(&e.layout))
            .ok_or_else(|| SchemaError::UnknownLayout(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Binding state of one discovered device.
#[derive(Debug, Clone)]
pub enum BindingState {
    /// Not yet checked against the registry.
    Unmatched,
    /// A layout applies; terminal.
    Matched {
        layout_name: String,
        layout: Arc<ReportLayout>,
    },
    /// No layout applies; terminal.
    Rejected,
}

impl BindingState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// Two-state binding of a device to a layout, decided once at discovery.
#[derive(Debug, Clone)]
pub struct DeviceBinding {
    identity: DeviceIdentity,
    state: BindingState,
}

impl DeviceBinding {
    pub fn new(identity: DeviceIdentity) -> Self {
        Self {
            identity,
            state: BindingState::Unmatched,
        }
    }

    /// Resolve against `registry` on the first call; later calls return the
    /// state decided then, whatever the registry holds now.
    pub fn resolve(&mut self, registry: &LayoutRegistry) -> &BindingState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.state = match registry.find_for(&self.identity) {
            Some(entry) => {
                info!(
                    layout = %entry.name,
                    device = %self.identity.display_name(),
                    vendor_id = format_args!("{:#06x}", self.identity.vendor_id),
                    product_id = format_args!("{:#06x}", self.identity.product_id),
                    "device matched report layout"
                );
                BindingState::Matched {
                    layout_name: entry.name.clone(),
                    layout: Arc::clone(&entry.layout),
                }
            }
            None => {
                debug!(
                    transport = %self.identity.transport,
                    vendor_id = format_args!("{:#06x}", self.identity.vendor_id),
                    product_id = format_args!("{:#06x}", self.identity.product_id),
                    "no report layout for device"
                );
                BindingState::Rejected
            }
        };
        &self.state
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn state(&self) -> &BindingState {
        &self.state
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.state, BindingState::Matched { .. })
    }

    pub fn layout(&self) -> Option<&Arc<ReportLayout>> {
        match &self.state {
            BindingState::Matched { layout, .. } => Some(layout),
            _ => None,
        }
    }

    /// Decode `report` with the bound layout; `None` unless matched.
    pub fn decode(&self, report: &RawReport) -> Option<DecodedState<'_>> {
        self.layout().map(|layout| layout.decode(report))
    }
}
