/// ============================================================
///  Rooftop Savings Estimator
///
///  Pipeline:
///   1. Bill → monthly consumption at a flat tariff
///   2. Consumption → daily kWh → raw kW at the site's sun hours,
///      padded by the sizing buffer and rounded up to whole kW
///   3. Roof ceiling – one kW per `roof_sq_ft_per_kw` of roof
///   4. Cost         – size × archetype cost per kW
///   5. Savings      – generated units × tariff, capped at a
///                     fraction of the bill
///   6. Payback and carbon offset
/// ============================================================

use crate::config::{EstimatorParams, InputBounds};
use crate::error::AppError;
use crate::models::catalog::{Location, SystemArchetype};
use crate::models::estimate::{EstimateRequest, EstimateResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Unrounded kW needed to cover `monthly_bill`, buffer included.
///
/// Non-decreasing in `monthly_bill` for a fixed site.
pub fn required_capacity_kw(monthly_bill: f64, sun_hours: f64, params: &EstimatorParams) -> f64 {
    let units_per_month = monthly_bill / params.tariff_per_unit;
    let daily_units = units_per_month / params.days_per_month;
    daily_units / sun_hours * params.sizing_buffer
}

/// Largest whole kW the roof can host.
pub fn roof_ceiling_kw(roof_area_sq_ft: f64, params: &EstimatorParams) -> u32 {
    (roof_area_sq_ft / params.roof_sq_ft_per_kw).floor() as u32
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!("{name} must be a positive number")));
    }
    if value < min || value > max {
        return Err(AppError::InvalidInput(format!("{name} must be between {min} and {max}")));
    }
    Ok(())
}

/// Size a system for the given bill and roof and project its return.
///
/// Pure and deterministic: identical inputs always give identical results.
pub fn estimate(
    monthly_bill: f64,
    roof_area_sq_ft: f64,
    location: Location,
    archetype: SystemArchetype,
    params: &EstimatorParams,
    bounds: &InputBounds,
) -> Result<EstimateResult, AppError> {
    check_range("monthly_bill", monthly_bill, bounds.min_monthly_bill, bounds.max_monthly_bill)?;
    check_range(
        "roof_area_sq_ft",
        roof_area_sq_ft,
        bounds.min_roof_area_sq_ft,
        bounds.max_roof_area_sq_ft,
    )?;

    let sun_hours = location.sun_hours();

    // ── Sizing ───────────────────────────────────────────────────────────
    let required_kw = required_capacity_kw(monthly_bill, sun_hours, params).ceil() as u32;
    let system_size_kw = required_kw.min(roof_ceiling_kw(roof_area_sq_ft, params));

    // ── Financials ───────────────────────────────────────────────────────
    let total_cost = u64::from(system_size_kw) * archetype.cost_per_kw();
    let generated_units = f64::from(system_size_kw) * sun_hours * params.days_per_month;
    let monthly_savings =
        (generated_units * params.tariff_per_unit).min(monthly_bill * params.savings_cap_ratio);
    let yearly_savings = monthly_savings * MONTHS_PER_YEAR;
    let payback_years = if yearly_savings > 0.0 {
        total_cost as f64 / yearly_savings
    } else {
        f64::INFINITY
    };

    let carbon_offset_tons = f64::from(system_size_kw) * params.carbon_offset_tons_per_kw;

    tracing::debug!(
        %location, %archetype, monthly_bill, roof_area_sq_ft,
        required_kw, system_size_kw, total_cost, monthly_savings,
        "savings estimate computed"
    );

    Ok(EstimateResult {
        system_size_kw,
        total_cost,
        monthly_bill,
        monthly_savings,
        yearly_savings,
        payback_years,
        carbon_offset_tons,
    })
}

/// Resolve the catalog keys of a request, then [`estimate`].
pub fn estimate_request(
    request: &EstimateRequest,
    params: &EstimatorParams,
    bounds: &InputBounds,
) -> Result<EstimateResult, AppError> {
    let location: Location = request.location.parse()?;
    let archetype: SystemArchetype = request.system_type.parse()?;
    estimate(request.monthly_bill, request.roof_area_sq_ft, location, archetype, params, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bill: f64, roof: f64, location: Location, archetype: SystemArchetype) -> Result<EstimateResult, AppError> {
        estimate(bill, roof, location, archetype, &EstimatorParams::default(), &InputBounds::default())
    }

    #[test]
    fn test_default_calculator_inputs() {
        // 3000 / 6 = 500 units, 16.67/day, / 5.2 h × 1.2 = 3.85 kW → 4 kW
        let r = run(3000.0, 500.0, Location::Bangalore, SystemArchetype::GridTie).unwrap();
        assert_eq!(r.system_size_kw, 4);
        assert_eq!(r.total_cost, 260_000);
        // 4 × 5.2 × 30 = 624 units → 3744, capped at 0.95 × 3000
        assert!((r.monthly_savings - 2850.0).abs() < 1e-9);
        assert!((r.yearly_savings - 34_200.0).abs() < 1e-9);
        assert!((r.payback_years - 260_000.0 / 34_200.0).abs() < 1e-9);
        assert!((r.carbon_offset_tons - 6.0).abs() < 1e-9);
        assert_eq!(r.monthly_bill, 3000.0);
    }

    #[test]
    fn test_roof_ceiling_limits_size() {
        // 20 000 bill needs ~26 kW in Delhi but a 700 sq ft roof fits 7
        let r = run(20_000.0, 700.0, Location::Delhi, SystemArchetype::Hybrid).unwrap();
        assert_eq!(r.system_size_kw, 7);
        assert_eq!(r.total_cost, 7 * 85_000);
        // 7 × 5.1 × 30 × 6 = 6426, below the cap
        assert!((r.monthly_savings - 6426.0).abs() < 1e-6);
    }

    #[test]
    fn test_invariants_over_input_grid() {
        let params = EstimatorParams::default();
        for bill in (1000..=50_000).step_by(1700) {
            for roof in (200..=5000).step_by(350) {
                for location in Location::ALL {
                    for archetype in SystemArchetype::ALL {
                        let (bill, roof) = (f64::from(bill), f64::from(roof));
                        let r = run(bill, roof, location, archetype).unwrap();
                        assert!(r.system_size_kw <= roof_ceiling_kw(roof, &params));
                        assert!(r.monthly_savings <= 0.95 * bill + 1e-9);
                        assert!(r.payback_years.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn test_required_capacity_is_monotonic_in_bill() {
        let params = EstimatorParams::default();
        for location in Location::ALL {
            let mut previous = 0.0;
            for bill in (1000..=50_000).step_by(250) {
                let kw = required_capacity_kw(f64::from(bill), location.sun_hours(), &params);
                assert!(kw >= previous, "{location}: {kw} < {previous} at bill {bill}");
                previous = kw;
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let a = run(12_345.0, 1234.0, Location::Pune, SystemArchetype::OffGrid).unwrap();
        let b = run(12_345.0, 1234.0, Location::Pune, SystemArchetype::OffGrid).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        for (bill, roof) in [(0.0, 500.0), (3000.0, 0.0), (-1.0, 500.0), (f64::NAN, 500.0)] {
            let err = run(bill, roof, Location::Mumbai, SystemArchetype::GridTie).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "bill={bill} roof={roof}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        let err = run(60_000.0, 500.0, Location::Mumbai, SystemArchetype::GridTie).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        let err = run(3000.0, 150.0, Location::Mumbai, SystemArchetype::GridTie).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_size_gives_infinite_payback() {
        // Relaxed bounds let a roof too small for a single kW through
        let bounds = InputBounds { min_roof_area_sq_ft: 1.0, ..InputBounds::default() };
        let r = estimate(
            3000.0,
            50.0,
            Location::Chennai,
            SystemArchetype::GridTie,
            &EstimatorParams::default(),
            &bounds,
        )
        .unwrap();
        assert_eq!(r.system_size_kw, 0);
        assert_eq!(r.monthly_savings, 0.0);
        assert!(r.payback_years.is_infinite());
    }

    #[test]
    fn test_tuned_parameters_are_honoured() {
        let params = EstimatorParams { savings_cap_ratio: 0.5, sizing_buffer: 2.0, ..EstimatorParams::default() };
        let r = estimate(
            3000.0,
            5000.0,
            Location::Bangalore,
            SystemArchetype::GridTie,
            &params,
            &InputBounds::default(),
        )
        .unwrap();
        // 16.67 / 5.2 × 2.0 = 6.41 → 7 kW
        assert_eq!(r.system_size_kw, 7);
        assert!((r.monthly_savings - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_request_with_unknown_keys() {
        let request = EstimateRequest {
            monthly_bill: 3000.0,
            roof_area_sq_ft: 500.0,
            location: "atlantis".into(),
            system_type: "grid-tie".into(),
        };
        let err = estimate_request(&request, &EstimatorParams::default(), &InputBounds::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let request = EstimateRequest { location: "pune".into(), system_type: "micro".into(), ..request };
        let err = estimate_request(&request, &EstimatorParams::default(), &InputBounds::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
