pub mod math;
pub mod model_resolver;
pub mod onnx_yolo_detector;
