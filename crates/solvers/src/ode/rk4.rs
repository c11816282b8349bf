use tally_core::Vector;

/// Advances `y` by one classic fourth-order Runge–Kutta step of size `h`.
pub(super) fn step<Y, F>(f: &F, t: f64, y: &Y, h: f64) -> Y
where
    Y: Vector,
    F: Fn(f64, &Y) -> Y,
{
    let half = 0.5 * h;
    let k1 = f(t, y);
    let k2 = f(t + half, &y.add_scaled(&k1, half));
    let k3 = f(t + half, &y.add_scaled(&k2, half));
    let k4 = f(t + h, &y.add_scaled(&k3, h));

    let slope = k1
        .add_scaled(&k2, 2.0)
        .add_scaled(&k3, 2.0)
        .add(&k4);
    y.add_scaled(&slope, h / 6.0)
}
