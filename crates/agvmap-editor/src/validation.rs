//! Path-form validation.
//!
//! Pre-submission checks for the path creation/edit dialog. Failures are
//! collected into a field-keyed error map and reported through a validity
//! flag; validation never raises an error.

use crate::model::CanvasNode;

/// Form state of the path dialog, before submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathForm {
    pub start_node: Option<i64>,
    pub end_node: Option<i64>,
    /// 0 = straight, 1 = quadratic curve.
    pub line_type: i32,
    pub cpx: Option<f64>,
    pub cpy: Option<f64>,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathFormErrors {
    pub start_node: Option<String>,
    pub end_node: Option<String>,
    pub cpx: Option<String>,
    pub cpy: Option<String>,
}

impl PathFormErrors {
    /// True when no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.start_node.is_none()
            && self.end_node.is_none()
            && self.cpx.is_none()
            && self.cpy.is_none()
    }
}

/// Validates the path form against the live node list.
///
/// Checks, in order: both endpoints selected, endpoints distinct, endpoints
/// resolvable, and — for curved paths — both control-point coordinates
/// present and numeric. Later checks can overwrite a field's earlier
/// message, matching the dialog's display behavior.
pub fn validate_path_form(form: &PathForm, nodes: &[CanvasNode]) -> PathFormErrors {
    let mut errors = PathFormErrors::default();

    if form.start_node.is_none() {
        errors.start_node = Some("please select a start node".to_string());
    }
    if form.end_node.is_none() {
        errors.end_node = Some("please select an end node".to_string());
    }

    if let (Some(start), Some(end)) = (form.start_node, form.end_node) {
        if start == end {
            errors.end_node = Some("start and end node must differ".to_string());
        }
    }

    if let Some(start) = form.start_node {
        if !nodes.iter().any(|n| n.data.node.matches(start)) {
            errors.start_node = Some("start node does not exist".to_string());
        }
    }
    if let Some(end) = form.end_node {
        if !nodes.iter().any(|n| n.data.node.matches(end)) {
            errors.end_node = Some("end node does not exist".to_string());
        }
    }

    if form.line_type == 1 {
        if form.cpx.map_or(true, f64::is_nan) {
            errors.cpx = Some("curved paths require a control point X coordinate".to_string());
        }
        if form.cpy.map_or(true, f64::is_nan) {
            errors.cpy = Some("curved paths require a control point Y coordinate".to_string());
        }
    }

    errors
}
