//! Bounding-box helpers shared by detection backends.

/// IoU between two bounding boxes represented as `[x1, y1, x2, y2]`.
pub fn bbox_iou(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    let x1 = a[0].max(b[0]);
    let y1 = a[1].max(b[1]);
    let x2 = a[2].min(b[2]);
    let y2 = a[3].min(b[3]);

    let inter = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
    if inter == 0.0 {
        return 0.0;
    }

    let area_a = (a[2] - a[0]) * (a[3] - a[1]);
    let area_b = (b[2] - b[0]) * (b[3] - b[1]);
    inter / (area_a + area_b - inter)
}

/// Greedy non-maximum suppression over `(bbox, score)` pairs.
///
/// Returns the surviving boxes in descending score order.
pub fn nms(mut dets: Vec<([f64; 4], f64)>, iou_thresh: f64) -> Vec<([f64; 4], f64)> {
    dets.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut keep: Vec<([f64; 4], f64)> = Vec::new();
    for det in dets {
        if keep.iter().all(|k| bbox_iou(&k.0, &det.0) <= iou_thresh) {
            keep.push(det);
        }
    }
    keep
}
