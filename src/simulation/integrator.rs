//! Fixed-step time integrator
//!
//! Semi-implicit (symplectic) Euler driven by an `AccelSet` and `Parameters`:
//! the velocity is kicked with the current acceleration first, then the
//! position drifts with the new velocity.

use log::trace;

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Massive, NVec2, System};

/// Advance every body of the system by one step of `params.dt`
/// and increment `sys.t`
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    let dt = params.dt;
    if n == 0 {
        sys.t += dt;
        return;
    }

    // a_n from x_n
    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        // Kick: v_n+1 = v_n + dt * a_n
        let v = b.velocity() + *a * dt;
        b.set_velocity(v);

        // Drift: x_n+1 = x_n + dt * v_n+1
        let x = b.position() + v * dt;
        b.set_position(x);

        trace!(
            "body {}: vx = {}, vy = {}, x = {}, y = {}",
            b.id().index() + 1,
            v.x,
            v.y,
            x.x,
            x.y
        );
    }

    sys.t += dt;
}
