//! Serialization of the value types, only built with the `serde` feature.
#![cfg(feature = "serde")]

use attitude_geometry::{Attitude, AxisOrder, Quat, QuaternionD, Vec3, Vector3, Vector3D};

#[test]
fn vector_serializes_as_a_triple() {
    let v: Vector3D = Vec3(1.0, -2.5, 0.125);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.0,-2.5,0.125]");
    assert_eq!(serde_json::from_str::<Vector3D>(&json).unwrap(), v);

    let single: Vector3 = serde_json::from_str("[0.5,2.0,-4.0]").unwrap();
    assert_eq!(single, Vec3(0.5, 2.0, -4.0));
}

#[test]
fn quaternion_keeps_component_order() {
    let q = QuaternionD::new(0.5, -0.5, 0.5, 0.5);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, "[0.5,-0.5,0.5,0.5]");
    assert_eq!(serde_json::from_str::<QuaternionD>(&json).unwrap(), q);

    let scalar_last: QuaternionD = serde_json::from_str("[0.0,0.0,0.0,1.0]").unwrap();
    assert_eq!(scalar_last, Quat(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn attitude_uses_named_fields() {
    let attitude = QuaternionD::identity().pitch_heading_roll();
    let json = serde_json::to_string(&attitude).unwrap();
    assert!(json.contains("\"pitch\"") && json.contains("\"heading\"") && json.contains("\"roll\""));
    assert_eq!(serde_json::from_str::<Attitude>(&json).unwrap(), attitude);

    let order = serde_json::to_string(&AxisOrder::Yzx).unwrap();
    assert_eq!(order, "\"Yzx\"");
    assert_eq!(serde_json::from_str::<AxisOrder>(&order).unwrap(), AxisOrder::Yzx);
}
