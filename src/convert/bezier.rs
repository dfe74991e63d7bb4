/// Maps control points from the exchange format to the runtime format.
///
/// The exchange format places both control points of a segment in the unit
/// square `(0, 0) - (1, 1)`. The runtime expects them in frames and value
/// units, the first point relative to the segment start and the second one
/// relative to the segment end.
pub fn remap(control_points: [f32; 4], duration: f32, sy: f32, ey: f32) -> [f32; 4] {
    let [x1, y1, x2, y2] = control_points;
    let x_scale = duration;
    let y_scale = ey - sy;
    [
        x1 * x_scale,
        y1 * y_scale,
        x2 * x_scale - duration,
        y2 * y_scale - y_scale,
    ]
}
