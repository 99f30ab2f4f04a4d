use argmin::{
    core::{CostFunction, Error as ArgminError, Executor, State},
    solver::brent::BrentRoot,
};
use bevy::prelude::*;

use crate::{
    components::{AircraftConfig, EngineConfig, EngineRunState, EngineState},
    resources::PhysicsConfig,
    systems::{
        aerodynamics::{drag_coefficient, lift_coefficient, stall_angle},
        propulsion::{calculate_power, calculate_thrust, target_rpm},
    },
    utils::{deg_to_rad, rad_to_deg, TrimError, HP_TO_WATTS},
};

const MAX_ITERATIONS: u64 = 100;
/// Bracket width at which a throttle root is accepted.
const THROTTLE_TOLERANCE: f64 = 1e-9;
/// Bracket width (rad) at which a pitch root is accepted.
const PITCH_TOLERANCE: f64 = 1e-10;
/// Largest force imbalance still reported as trimmed (N).
const FORCE_TOLERANCE: f64 = 1.0;
const MIN_TRIM_PITCH_DEG: f64 = -5.0;

/// Controls and attitude for steady, wings-level, unaccelerated flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimSolution {
    pub airspeed: f64,
    /// Pitch attitude (rad); equal to the angle of attack in level flight.
    pub pitch: f64,
    pub throttle: f64,
    pub pitch_trim: f64,
    pub rpm: f64,
    pub thrust: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Remaining vertical force imbalance (N).
    pub residual: f64,
}

impl TrimSolution {
    /// A warm engine settled at the trimmed rpm.
    pub fn engine_state(&self, config: &EngineConfig) -> EngineState {
        EngineState {
            power_hp: calculate_power(config, self.rpm, self.throttle, 1.0),
            ..EngineState::running(config, self.rpm)
        }
    }
}

/// Level flight at one airspeed: the fixed quantities every balance shares.
#[derive(Clone, Copy)]
struct LevelFlight<'a> {
    config: &'a AircraftConfig,
    physics: &'a PhysicsConfig,
    airspeed: f64,
    weight: f64,
    /// Dynamic pressure times wing area (N).
    q_s: f64,
}

impl LevelFlight<'_> {
    /// Lift and drag coefficients with the velocity horizontal, so AOA is pitch.
    fn coefficients(&self, pitch: f64) -> (f64, f64) {
        let lift_curve = &self.config.aero.lift;
        let aoa_deg = rad_to_deg(pitch);
        let cl = lift_coefficient(lift_curve, aoa_deg, 0.0);
        let cd = drag_coefficient(
            &self.config.aero.drag,
            cl,
            aoa_deg,
            stall_angle(lift_curve, 0.0),
            0.0,
            self.config.geometry.aspect_ratio(),
        );
        (cl, cd)
    }

    fn drag(&self, pitch: f64) -> f64 {
        self.q_s * self.coefficients(pitch).1
    }

    /// Thrust and rpm at a throttle setting once the engine has settled.
    fn settled_thrust(&self, throttle: f64) -> (f64, f64) {
        let engine = &self.config.engine;
        let settled = EngineState {
            run_state: EngineRunState::Running,
            ..EngineState::off(engine)
        };
        let rpm = target_rpm(&settled, engine, throttle);
        let power_hp = calculate_power(engine, rpm, throttle, 1.0);
        let output = calculate_thrust(
            &self.config.propeller,
            power_hp * HP_TO_WATTS,
            rpm,
            self.airspeed,
            self.physics.air_density,
        );
        (output.thrust, rpm)
    }

    /// Throttle balancing drag along the flight path at `pitch`.
    ///
    /// Saturates at full throttle; the caller reports the shortfall.
    fn throttle_for(&self, pitch: f64) -> Result<f64, TrimError> {
        let drag = self.drag(pitch);
        let (full_thrust, _) = self.settled_thrust(1.0);
        if full_thrust * pitch.cos() < drag {
            return Ok(1.0);
        }
        find_root(
            ThrottleBalance {
                flight: *self,
                pitch,
                drag,
            },
            0.0,
            1.0,
            THROTTLE_TOLERANCE,
        )
    }

    /// Lift plus the vertical thrust component minus weight (N).
    fn vertical_residual(&self, pitch: f64, throttle: f64) -> f64 {
        let (cl, _) = self.coefficients(pitch);
        let (thrust, _) = self.settled_thrust(throttle);
        self.q_s * cl + thrust * pitch.sin() - self.weight
    }
}

/// Horizontal balance at a fixed pitch, as a function of throttle.
struct ThrottleBalance<'a> {
    flight: LevelFlight<'a>,
    pitch: f64,
    drag: f64,
}

impl CostFunction for ThrottleBalance<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, throttle: &Self::Param) -> Result<Self::Output, ArgminError> {
        let (thrust, _) = self.flight.settled_thrust(*throttle);
        Ok(thrust * self.pitch.cos() - self.drag)
    }
}

/// Vertical balance as a function of pitch, with throttle re-trimmed for
/// every candidate.
struct VerticalBalance<'a> {
    flight: LevelFlight<'a>,
}

impl CostFunction for VerticalBalance<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, pitch: &Self::Param) -> Result<Self::Output, ArgminError> {
        let throttle = self.flight.throttle_for(*pitch)?;
        Ok(self.flight.vertical_residual(*pitch, throttle))
    }
}

/// Brent root of a one-dimensional balance bracketed by `[min, max]`.
fn find_root<P>(problem: P, min: f64, max: f64, tolerance: f64) -> Result<f64, TrimError>
where
    P: CostFunction<Param = f64, Output = f64>,
{
    let result = Executor::new(problem, BrentRoot::new(min, max, tolerance))
        .configure(|state| state.max_iters(MAX_ITERATIONS))
        .run()
        .map_err(solver_error)?;

    let state = result.state();
    match state.get_best_param() {
        Some(root) if state.get_best_cost() <= FORCE_TOLERANCE => Ok(*root),
        _ => Err(TrimError::NotConverged {
            iterations: state.get_iter() as usize,
            residual: state.get_best_cost(),
        }),
    }
}

/// Recovers a trim error raised inside a cost function; anything else is the
/// solver's own failure.
fn solver_error(error: ArgminError) -> TrimError {
    match error.downcast::<TrimError>() {
        Ok(trim) => trim,
        Err(other) => TrimError::Solver(other.to_string()),
    }
}

/// Solves for wings-level, constant-altitude flight at `airspeed`.
///
/// Pitch equals angle of attack with the velocity horizontal. An outer root
/// search on pitch balances lift plus the vertical thrust component against
/// weight; for each pitch an inner root search on throttle balances the
/// horizontal thrust component against drag. Pitch trim then cancels the
/// static stability moment so the elevator can stay neutral.
pub fn solve_level_trim(
    config: &AircraftConfig,
    physics: &PhysicsConfig,
    airspeed: f64,
) -> Result<TrimSolution, TrimError> {
    let weight = config.takeoff_mass() * physics.gravity;
    let q_s = 0.5 * physics.air_density * airspeed * airspeed * config.geometry.wing_area;
    let lift_curve = &config.aero.lift;
    let moments = &config.aero.moments;

    let required_cl = if q_s > 0.0 { weight / q_s } else { f64::INFINITY };
    if required_cl > lift_curve.cl_max {
        return Err(TrimError::BelowStallSpeed {
            airspeed,
            required_cl,
            cl_max: lift_curve.cl_max,
        });
    }

    let flight = LevelFlight {
        config,
        physics,
        airspeed,
        weight,
        q_s,
    };

    // Stay a degree inside the stall where the lift curve is still rising
    let max_pitch = deg_to_rad(stall_angle(lift_curve, 0.0) - 1.0);
    let pitch = find_root(
        VerticalBalance { flight },
        deg_to_rad(MIN_TRIM_PITCH_DEG),
        max_pitch,
        PITCH_TOLERANCE,
    )?;

    let throttle = flight.throttle_for(pitch)?;
    let (thrust, rpm) = flight.settled_thrust(throttle);
    if thrust * pitch.cos() - flight.drag(pitch) < -FORCE_TOLERANCE {
        return Err(TrimError::InsufficientThrust { airspeed });
    }
    let (cl, cd) = flight.coefficients(pitch);
    let pitch_trim =
        (-moments.cm_alpha * (pitch - moments.equilibrium_aoa) / moments.cm_trim).clamp(-1.0, 1.0);

    let solution = TrimSolution {
        airspeed,
        pitch,
        throttle,
        pitch_trim,
        rpm,
        thrust,
        lift_coefficient: cl,
        drag_coefficient: cd,
        residual: flight.vertical_residual(pitch, throttle),
    };

    info!(
        "{} trimmed at {:.1} m/s: pitch={:.2}°, throttle={:.3}, trim={:.3}, rpm={:.0}",
        config.name,
        airspeed,
        rad_to_deg(pitch),
        throttle,
        pitch_trim,
        rpm
    );

    Ok(solution)
}
