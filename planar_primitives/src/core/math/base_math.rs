use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Returns the solutions to the quadratic equation.
///
/// Quadratic equation is `-b +/- sqrt(b * b - 4 * a * c) / (2 * a)`.
/// With the `sqrt_discriminant` defined as `sqrt(b * b - 4 * a * c)`.
///
/// The purpose of this function is to minimize error in the process of finding solutions
/// to the quadratic equation.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// # use planar_primitives::core::traits::*;
/// // x^2 - 3x + 2 = (x - 1)(x - 2)
/// let (s1, s2) = quadratic_solutions(1.0, -3.0, 2.0, 1.0);
/// assert!(s1.fuzzy_eq(2.0));
/// assert!(s2.fuzzy_eq(1.0));
/// ```
#[inline]
pub fn quadratic_solutions<T>(a: T, b: T, c: T, sqrt_discriminant: T) -> (T, T)
where
    T: Real,
{
    debug_assert!(
        (b * b - T::four() * a * c)
            .sqrt()
            .fuzzy_eq(sqrt_discriminant),
        "discriminant is not valid"
    );
    // Avoids loss in precision due to taking the difference of two floating point values that are
    // very near each other in value.
    // https://math.stackexchange.com/questions/311382/solving-a-quadratic-equation-with-precision-when-using-floating-point-variables
    let denom = T::two() * a;
    let sol1 = if b < T::zero() {
        (-b + sqrt_discriminant) / denom
    } else {
        (-b - sqrt_discriminant) / denom
    };

    if sol1 == T::zero() {
        // b and the discriminant are both zero, double root at zero
        return (sol1, sol1);
    }

    let sol2 = (c / a) / sol1;

    (sol1, sol2)
}

/// Distance squared between the points `p0` and `p1`.
///
/// Preferred over [distance] when only comparing distances.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Euclidean distance between the points `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// assert_eq!(distance(vec2(0.0, 0.0), vec2(3.0, 4.0)), 5.0);
/// ```
#[inline]
pub fn distance<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the y value of the line through `p0` and `p1` at `x`.
///
/// For a vertical line (`p0.x == p1.x`) the y midpoint is returned. `x` outside of the x range of
/// the points extrapolates.
///
/// # Examples
///
/// ```
/// # use planar_primitives::core::math::*;
/// assert_eq!(line_y_at_x(vec2(0.0, 0.0), vec2(4.0, 2.0), 2.0), 1.0);
/// assert_eq!(line_y_at_x(vec2(1.0, 0.0), vec2(1.0, 6.0), 1.0), 3.0);
/// ```
#[inline]
pub fn line_y_at_x<T>(p0: Vector2<T>, p1: Vector2<T>, x: T) -> T
where
    T: Real,
{
    let dx = p1.x - p0.x;
    if dx == T::zero() {
        return (p0.y + p1.y) / T::two();
    }

    let t = (x - p0.x) / dx;
    p0.y + t * (p1.y - p0.y)
}
