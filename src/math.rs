//! Camera rotation helpers.

use nalgebra::{Matrix3, Vector3};

pub fn rotate_point(x: f64, y: f64, z: f64, rot: &Matrix3<f64>) -> (f64, f64, f64) {
    let v = rot * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

/// Incremental camera rotation from a pointer drag: yaw about the view's
/// vertical axis, then pitch about the horizontal one.
pub fn rotation_from_drag(dx: f64, dy: f64) -> Matrix3<f64> {
    let rot_y = Matrix3::new(
        dx.cos(), 0.0, dx.sin(),
        0.0, 1.0, 0.0,
        -dx.sin(), 0.0, dx.cos(),
    );
    let rot_x = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, dy.cos(), -dy.sin(),
        0.0, dy.sin(), dy.cos(),
    );
    rot_x * rot_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn identity_rotation_keeps_points() {
        let m = Matrix3::identity();
        let (x, y, z) = rotate_point(1.0, 2.0, 3.0, &m);
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn quarter_yaw_maps_x_to_z() {
        let m = rotation_from_drag(FRAC_PI_2, 0.0);
        let (x, _, z) = rotate_point(1.0, 0.0, 0.0, &m);
        assert!(x.abs() < 1e-12);
        assert!((z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn drag_rotation_preserves_length() {
        let m = rotation_from_drag(0.37, -1.2);
        let (x, y, z) = rotate_point(3.0, -4.0, 12.0, &m);
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 13.0).abs() < 1e-9);
    }
}
