//! Path-edge import/export normalization.

use uuid::Uuid;

use agvmap_core::constants::PATH_RECORD_TYPE;

use crate::geometry::calculate_distance;
use crate::model::{CanvasPathLine, PathData, PathParams};
use crate::path_graphics::path_graphic_defaults;

/// Converts a persisted record into the runtime form: a fresh opaque id
/// plus graphic defaults looked up from `(line_type, lane_dir)`.
pub fn import_path(data: PathData) -> CanvasPathLine {
    let graphics = path_graphic_defaults(data.line_type, data.lane_dir);
    CanvasPathLine {
        id: Uuid::new_v4(),
        data,
        graphics,
    }
}

/// Batch form of [`import_path`].
pub fn import_paths(data: Vec<PathData>) -> Vec<CanvasPathLine> {
    data.into_iter().map(import_path).collect()
}

/// Projects a runtime edge back to its persisted business record.
/// `export_path(&import_path(d)) == d` for every business field, control
/// points included.
pub fn export_path(path: &CanvasPathLine) -> PathData {
    path.data.clone()
}

/// Batch form of [`export_path`].
pub fn export_paths(paths: &[CanvasPathLine]) -> Vec<PathData> {
    paths.iter().map(export_path).collect()
}

/// Builds a complete runtime edge from caller parameters and the resolved
/// endpoint coordinates. Stamps the fixed record discriminator and computes
/// `distance` as the straight-line endpoint distance.
pub fn create_path(
    params: PathParams,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
) -> CanvasPathLine {
    let graphics = path_graphic_defaults(params.line_type, params.lane_dir);
    let data = PathData {
        type_code: PATH_RECORD_TYPE,
        start_node: params.start_node,
        end_node: params.end_node,
        line_type: params.line_type,
        distance: calculate_distance(start_x, start_y, end_x, end_y),
        lane_dir: params.lane_dir,
        speed: params.speed,
        positive_course: params.positive_course,
        negative_course: params.negative_course,
        car_body_positive_course: params.car_body_positive_course,
        car_body_negative_course: params.car_body_negative_course,
        cpx: params.cpx,
        cpy: params.cpy,
    };
    CanvasPathLine {
        id: Uuid::new_v4(),
        data,
        graphics,
    }
}
