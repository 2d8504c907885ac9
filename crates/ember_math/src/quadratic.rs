//! Real roots of `a*t^2 + b*t + c = 0`.

/// The discriminant and both real roots of a quadratic, `near <= far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticRoots {
    pub discriminant: f32,
    pub near: f32,
    pub far: f32,
}

/// Solve `a*t^2 + b*t + c = 0`.
///
/// Returns `None` when there are no real roots (negative discriminant) or
/// when `a == 0`. A zero discriminant gives the repeated root twice.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<QuadraticRoots> {
    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || discriminant.is_nan() {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let t0 = (-b - sqrtd) / (2.0 * a);
    let t1 = (-b + sqrtd) / (2.0 * a);

    Some(QuadraticRoots {
        discriminant,
        near: t0.min(t1),
        far: t0.max(t1),
    })
}
