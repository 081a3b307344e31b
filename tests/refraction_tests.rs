use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{rngs::StdRng, Rng, SeedableRng};

use snell::{
    diagram,
    materials::Material,
    settings::{self, MAX_INCIDENT_ANGLE},
    simulator::Simulator,
    snell::solve,
};

const SAMPLES: usize = 10_000;
// Keep clear of the critical angle where the TIR decision is rounding sensitive
const CRITICAL_MARGIN: f64 = 1e-6;

fn random_input(rng: &mut StdRng) -> (f64, f64, f64) {
    let n1 = rng.random_range(0.5..3.0);
    let n2 = rng.random_range(0.5..3.0);
    let angle = rng.random_range(0.0..MAX_INCIDENT_ANGLE);
    (n1, n2, angle)
}

#[test]
fn default_config_scenario() {
    let settings = settings::load_default_config().unwrap();
    assert_eq!(settings.n1, Material::Air.index());
    assert_eq!(settings.n2, Material::Water.index());

    let evaluation = Simulator::from_settings(&settings).evaluate();
    assert!(!evaluation.refraction.total_internal_reflection);
    assert_abs_diff_eq!(
        evaluation.refraction.refracted_angle.unwrap(),
        22.04,
        epsilon = 0.01
    );
    assert_eq!(evaluation.refraction.critical_angle, None);
}

#[test]
fn energy_is_conserved() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let (n1, n2, angle) = random_input(&mut rng);
        let result = solve(n1, n2, angle);
        assert!((0.0..=100.0).contains(&result.reflectance));
        assert!((0.0..=100.0).contains(&result.transmittance));
        if result.total_internal_reflection {
            assert_eq!(result.reflectance, 100.0);
            assert_eq!(result.transmittance, 0.0);
            assert_eq!(result.refracted_angle, None);
        } else {
            assert_abs_diff_eq!(
                result.reflectance + result.transmittance,
                100.0,
                epsilon = 1e-9
            );
            let refracted = result.refracted_angle.unwrap();
            assert!((0.0..=90.0).contains(&refracted), "refracted: {}", refracted);
        }
    }
}

#[test]
fn reflection_angle_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let (n1, n2, angle) = random_input(&mut rng);
        assert_eq!(solve(n1, n2, angle).reflection_angle, angle);
    }
}

#[test]
fn critical_angle_decides_total_internal_reflection() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..SAMPLES {
        let (n1, n2, angle) = random_input(&mut rng);
        let result = solve(n1, n2, angle);
        match result.critical_angle {
            Some(critical) => {
                assert!(n1 > n2);
                assert!(critical > 0.0 && critical < 90.0);
                if (angle - critical).abs() > CRITICAL_MARGIN {
                    assert_eq!(result.total_internal_reflection, angle > critical);
                }
            }
            None => {
                assert!(n1 <= n2);
                assert!(!result.total_internal_reflection);
            }
        }
    }
}

#[test]
fn normal_incidence_never_bends() {
    for a in Material::ALL {
        for b in Material::ALL {
            let result = solve(a.index(), b.index(), 0.0);
            assert!(!result.total_internal_reflection);
            assert_eq!(result.refracted_angle, Some(0.0));
        }
    }
}

#[test]
fn snell_is_reversible() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let (n1, n2, angle) = random_input(&mut rng);
        let forward = solve(n1, n2, angle);
        let Some(refracted) = forward.refracted_angle else {
            continue;
        };
        // the way back is ill-conditioned close to grazing refraction
        if refracted > 89.0 {
            continue;
        }
        let back = solve(n2, n1, refracted);
        assert_relative_eq!(
            back.refracted_angle.unwrap(),
            angle,
            epsilon = 1e-7,
            max_relative = 1e-7
        );
    }
}

#[test]
fn glass_to_air_scenarios() {
    let n1 = Material::CrownGlass.index();
    let n2 = Material::Air.index();

    let beyond = solve(n1, n2, 60.0);
    assert_abs_diff_eq!(beyond.critical_angle.unwrap(), 41.15, epsilon = 0.01);
    assert!(beyond.total_internal_reflection);
    assert_eq!(beyond.refracted_angle, None);
    assert_eq!(beyond.reflectance, 100.0);

    let below = solve(n1, n2, 30.0);
    assert!(!below.total_internal_reflection);
    assert!(below.refracted_angle.unwrap().is_finite());
    assert_abs_diff_eq!(below.reflectance + below.transmittance, 100.0, epsilon = 1e-9);
}

#[test]
fn diagram_follows_the_solver() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let (n1, n2, angle) = random_input(&mut rng);
        let result = solve(n1, n2, angle);
        let diagram = diagram::layout(
            angle,
            result.refracted_angle,
            result.total_internal_reflection,
        );
        assert_eq!(diagram.refracted.is_some(), !result.total_internal_reflection);
        assert_eq!(diagram.refracted_arc.is_some(), !result.total_internal_reflection);
        assert!(diagram.incident.start.y <= diagram.origin.y);
        assert!(diagram.reflected.end.y <= diagram.origin.y);
        if let Some(refracted) = diagram.refracted {
            assert!(refracted.end.y >= diagram.origin.y);
        }
    }
}
