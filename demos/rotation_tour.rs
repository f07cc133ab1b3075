//! Walk through every rotation representation and the conversions between them.
//!
//! ```bash
//! cargo run --example rotation_tour
//! RUST_LOG=spatial_rotations=trace cargo run --example rotation_tour
//! ```

use spatial_rotations::{
    AxisAngle, EulerAngle, MathResult, Permutation, Quaternion, Reflection, RotationMatrix,
    RotationMatrix2, Vec2, Vec3, init_logger,
};
use std::f64::consts::FRAC_PI_2;
use tracing::{info, warn};

fn main() {
    init_logger();

    if let Err(e) = run() {
        warn!("rotation tour failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> MathResult<()> {
    let v = Vec3::new(1.0, 0.0, 0.0);

    info!("=== Euler angles ===");
    let euler = EulerAngle::from_degrees(30.0, 45.0, 60.0);
    info!("{euler} (degrees: {})", euler.to_degrees());

    let q = euler.to_quaternion();
    info!("as quaternion:  {q}");

    let r = euler.to_rotation_matrix("XYZ")?;
    info!("as matrix:      {r}");
    info!("back to Euler:  {}", r.to_euler_angles()?);

    for permutation in Permutation::ALL {
        let r = euler.to_rotation_matrix_with(permutation);
        info!("{permutation}: rotates {v} to {}", r.rotate_vector(&v));
    }

    info!("=== Axis-angle ===");
    let aa = q.to_axis_angle()?;
    info!("{aa}");
    info!("Rodrigues on {v}: {}", aa.rotate_vector(&v)?);
    info!("quaternion on {v}: {}", q.rotate_vector(&v)?);

    match Quaternion::identity().to_axis_angle() {
        Ok(aa) => info!("identity axis-angle: {aa}"),
        Err(d) if d.is_soft() => info!("identity has no axis ({}), using {}", d, d.value()),
        Err(d) => return Err(d.into()),
    }

    info!("=== Gimbal lock ===");
    let locked = RotationMatrix::from_order("XYZ", 0.4, FRAC_PI_2, 0.9)?;
    info!("pitch = 90 deg extracts as {}", locked.to_euler_angles()?);

    info!("=== Incremental composition ===");
    let mut composed = RotationMatrix::identity();
    for step in [
        RotationMatrix::about_z(0.2),
        RotationMatrix::about_x(0.4),
        RotationMatrix::about_y(0.6),
    ] {
        composed.compose_single_axis(&step)?;
        info!("order so far: {}", composed.order());
    }
    if let Err(e) = composed.compose_single_axis(&RotationMatrix::about_x(0.1)) {
        info!("a fourth axis is rejected: {e}");
    }

    info!("=== Interpolation ===");
    let start = Quaternion::identity();
    let end = AxisAngle::about_z(FRAC_PI_2).to_quaternion()?;
    for i in 0..=4 {
        let t = i as f64 / 4.0;
        let q = start.slerp(&end, t)?;
        info!("t = {t:.2}: {q} rotates {v} to {}", q.rotate_vector(&v)?);
    }

    let a = RotationMatrix::about_y(0.1);
    let b = RotationMatrix::about_y(1.1);
    info!("matrix slerp midpoint: {}", a.slerp(&b, 0.5)?);

    let dir = v.slerp(&Vec3::new(0.0, 1.0, 1.0), 0.5)?;
    info!("direction slerp: {dir}");

    info!("=== Reflections ===");
    let reflected = r.reflect(Reflection::XY);
    info!("{reflected}");
    info!("still a rotation? {}", reflected.is_rotation(1e-9));

    info!("=== Planar rotations ===");
    let planar = RotationMatrix2::from_vectors(&Vec2::new(1.0, 0.0), &Vec2::new(1.0, 1.0))?;
    info!("{planar} ({:.1} deg)", planar.angle_degrees());
    info!(
        "rotates (2, 0) about (1, 0) to {}",
        planar.rotate_around_point(&Vec2::new(2.0, 0.0), &Vec2::new(1.0, 0.0))
    );

    Ok(())
}
