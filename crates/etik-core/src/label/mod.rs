//! Label planning: expanding an order record into per-package label
//! contents for an external renderer.
//!
//! Planning stops at resolved text and numbers. Cell addresses, merges,
//! borders, and fonts are the renderer's business; the geometry it needs
//! ships as immutable data in [`layout::LabelLayout`].

pub mod layout;

use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::config::LabelConfig;
use crate::models::order::OrderRecord;
use crate::order::rules::optional_field;

pub use layout::LabelLayout;

/// The kind of package a label is printed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// Cabinet body package; the color line shows the carcase finish.
    Carcase,
    /// MDF facade package.
    FacadeMdf,
    /// Plastic facade package.
    FacadePlastic,
    /// Profile / extra component package.
    ExtraComponent,
    /// Hardboard back panel package; always labeled white.
    Hardboard,
    /// A user-defined label type.
    #[serde(untagged)]
    Custom(String),
}

impl LabelKind {
    /// Parse a label-type name as typed by the user, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let upper = name.trim().to_uppercase();
        match upper.as_str() {
            "КОРПУС" => LabelKind::Carcase,
            "ФАСАДЫ МДФ" | "ФАСАД МДФ" => LabelKind::FacadeMdf,
            "ФАСАДЫ ПЛАСТИК" | "ФАСАД ПЛАСТИК" => LabelKind::FacadePlastic,
            "ПРОФИЛЬ/ДОП ЭЛЕМЕНТ" | "ПРОФИЛЬ/ДОП. ЭЛЕМЕНТЫ" => LabelKind::ExtraComponent,
            "ОРГАЛИТ" => LabelKind::Hardboard,
            _ => LabelKind::Custom(name.trim().to_string()),
        }
    }

    /// Display name, matching the type list the original tool seeds.
    pub fn name(&self) -> &str {
        match self {
            LabelKind::Carcase => "КОРПУС",
            LabelKind::FacadeMdf => "ФАСАДЫ МДФ",
            LabelKind::FacadePlastic => "ФАСАДЫ ПЛАСТИК",
            LabelKind::ExtraComponent => "Профиль/доп элемент",
            LabelKind::Hardboard => "Оргалит",
            LabelKind::Custom(name) => name,
        }
    }

    /// Resolve the color line of a label of this kind: carcase packages
    /// show the carcase finish, hardboard is always white, everything else
    /// shows the extra component. Rendered uppercase.
    pub fn color_line(&self, record: &OrderRecord) -> String {
        let value = match self {
            LabelKind::Carcase => record.carcase.clone(),
            LabelKind::Hardboard => "БЕЛЫЙ".to_string(),
            _ => record.extra_component.clone().unwrap_or_default(),
        };
        value.to_uppercase()
    }
}

/// A request for `count` labels of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub kind: LabelKind,
    pub count: u32,
}

impl LabelRequest {
    pub fn new(kind: LabelKind, count: u32) -> Self {
        Self { kind, count }
    }
}

/// User edits applied over an extracted record before planning.
///
/// `None` leaves the record's value in place. The `weight` field uses a
/// second `Option` level because an edit may explicitly clear the weight
/// (an unparseable typed value degrades to absent, not to the old value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOverrides {
    pub store_application_number: Option<String>,
    pub client: Option<String>,
    pub full_name: Option<String>,
    pub item_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub depth: Option<u32>,
    pub carcase: Option<String>,
    pub extra_component: Option<String>,
    pub facade: Option<String>,
    pub weight: Option<Option<Decimal>>,
}

impl FieldOverrides {
    /// Whether no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce a record with the overrides applied.
    pub fn apply(&self, record: &OrderRecord) -> OrderRecord {
        let mut out = record.clone();

        if let Some(v) = &self.store_application_number {
            out.store_application_number = v.clone();
        }
        if let Some(v) = &self.client {
            out.client = v.clone();
        }
        if let Some(v) = &self.full_name {
            out.full_name = v.clone();
        }
        if let Some(v) = &self.item_name {
            out.item_name = v.clone();
        }
        if let Some(v) = &self.carcase {
            out.carcase = v.clone();
        }
        // Edited optional fields obey the same absence markers as the sheet.
        if let Some(v) = &self.extra_component {
            out.extra_component = optional_field(v.clone());
        }
        if let Some(v) = &self.facade {
            out.facade = optional_field(v.clone());
        }

        if self.width.is_some() || self.height.is_some() || self.depth.is_some() {
            let mut dims = out.dimensions_or_zero();
            if let Some(w) = self.width {
                dims.width = w;
            }
            if let Some(h) = self.height {
                dims.height = h;
            }
            if let Some(d) = self.depth {
                dims.depth = d;
            }
            out.dimensions = Some(dims);
        }

        if let Some(w) = self.weight {
            out.weight = w;
        }

        out
    }
}

/// Fully resolved content of one physical package label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelContent {
    /// Label kind this package belongs to.
    pub kind: LabelKind,
    /// Package name header.
    pub item_name: String,
    /// Finish / color line, uppercase.
    pub color_line: String,
    /// Order number line ("№ …").
    pub order_line: String,
    /// Client and application composite line.
    pub client_line: String,
    /// Width in mm (0 when unknown).
    pub width: u32,
    /// Height in mm.
    pub height: u32,
    /// Depth in mm.
    pub depth: u32,
    /// Whole-number weight in kg; empty when unknown or zero.
    pub weight: String,
    /// Total package count across the whole plan.
    pub total_count: u32,
    /// Running package number, 1-based across the whole plan.
    pub ordinal: u32,
    /// Label date, DD.MM.YYYY.
    pub date: String,
}

/// Expands label requests into per-package contents.
pub struct LabelPlanner {
    config: LabelConfig,
}

impl LabelPlanner {
    /// Create a planner with the given label configuration.
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Build the plan dated relative to today.
    pub fn build(&self, record: &OrderRecord, requests: &[LabelRequest]) -> Vec<LabelContent> {
        self.build_on(record, requests, Local::now().date_naive())
    }

    /// Build the plan dated relative to an explicit planning date.
    pub fn build_on(
        &self,
        record: &OrderRecord,
        requests: &[LabelRequest],
        today: NaiveDate,
    ) -> Vec<LabelContent> {
        let date = (today + Duration::days(self.config.date_offset_days))
            .format("%d.%m.%Y")
            .to_string();
        let total_count: u32 = requests.iter().map(|r| r.count).sum();
        let dims = record.dimensions_or_zero();
        let weight = render_weight(record.weight);

        let mut labels = Vec::with_capacity(total_count as usize);
        let mut ordinal = 1u32;

        for request in requests {
            for _ in 0..request.count {
                labels.push(LabelContent {
                    kind: request.kind.clone(),
                    item_name: record.item_name.clone(),
                    color_line: request.kind.color_line(record),
                    order_line: format!("№ {}", record.store_application_number),
                    client_line: format!("{}/{}", record.client, record.store_application_number),
                    width: dims.width,
                    height: dims.height,
                    depth: dims.depth,
                    weight: weight.clone(),
                    total_count,
                    ordinal,
                    date: date.clone(),
                });
                ordinal += 1;
            }
        }

        debug!(labels = labels.len(), "built label plan");
        labels
    }
}

/// Weight as printed on the label: truncated to whole kilograms, empty for
/// unknown or zero weight.
fn render_weight(weight: Option<Decimal>) -> String {
    match weight {
        Some(w) if !w.is_zero() => w.trunc().to_string(),
        _ => String::new(),
    }
}
