use crate::config::{InputBounds, PricingParams};
use crate::error::AppError;
use crate::models::catalog::{ComponentClass, find_brand};
use crate::models::quotation::{QuotationBreakdown, SystemSelection};

const WATTS_PER_KW: u64 = 1000;

/// Number of inverter units needed, one per started block of capacity.
pub fn inverter_count(system_size_kw: u32, block_kw: u32) -> u32 {
    system_size_kw.div_ceil(block_kw)
}

/// Itemize the cost of a system built from the selected brands.
///
/// All figures are integer currency units, so the total is exactly the sum
/// of the five line items.
pub fn price(
    selection: &SystemSelection,
    pricing: &PricingParams,
    bounds: &InputBounds,
) -> Result<QuotationBreakdown, AppError> {
    let size = selection.system_size_kw;
    if size == 0 {
        return Err(AppError::InvalidInput("system_size_kw must be positive".into()));
    }
    if size < bounds.min_system_size_kw || size > bounds.max_system_size_kw {
        return Err(AppError::InvalidInput(format!(
            "system_size_kw must be between {} and {}",
            bounds.min_system_size_kw, bounds.max_system_size_kw
        )));
    }

    let panel = find_brand(ComponentClass::Panel, &selection.panel_brand)?;
    let inverter = find_brand(ComponentClass::Inverter, &selection.inverter_brand)?;
    let wiring = find_brand(ComponentClass::Wiring, &selection.wiring_brand)?;

    let size_kw = u64::from(size);
    let inverter_count = inverter_count(size, pricing.inverter_block_kw);

    let panel_cost = size_kw * WATTS_PER_KW * panel.unit_price;
    let inverter_cost = u64::from(inverter_count) * inverter.unit_price;
    let wiring_cost = size_kw * wiring.unit_price;
    let installation_cost = size_kw * pricing.installation_rate_per_kw;
    let misc_cost = size_kw * pricing.misc_rate_per_kw;
    let total_cost = panel_cost + inverter_cost + wiring_cost + installation_cost + misc_cost;

    tracing::debug!(
        size_kw = size,
        panel = panel.key,
        inverter = inverter.key,
        wiring = wiring.key,
        total_cost,
        "quotation priced"
    );

    Ok(QuotationBreakdown {
        panel_cost,
        inverter_count,
        inverter_cost,
        wiring_cost,
        installation_cost,
        misc_cost,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(size: u32, panel: &str, inverter: &str, wiring: &str) -> SystemSelection {
        SystemSelection {
            system_size_kw: size,
            panel_brand: panel.into(),
            inverter_brand: inverter.into(),
            wiring_brand: wiring.into(),
        }
    }

    fn run(sel: &SystemSelection) -> Result<QuotationBreakdown, AppError> {
        price(sel, &PricingParams::default(), &InputBounds::default())
    }

    #[test]
    fn test_default_quotation() {
        let b = run(&selection(5, "tata", "luminous", "polycab")).unwrap();
        assert_eq!(b.panel_cost, 125_000);
        assert_eq!(b.inverter_count, 1);
        assert_eq!(b.inverter_cost, 15_000);
        assert_eq!(b.wiring_cost, 10_000);
        assert_eq!(b.installation_cost, 40_000);
        assert_eq!(b.misc_cost, 25_000);
        assert_eq!(b.total_cost, 215_000);
    }

    #[test]
    fn test_inverters_come_in_started_blocks() {
        assert_eq!(inverter_count(1, 5), 1);
        assert_eq!(inverter_count(5, 5), 1);
        assert_eq!(inverter_count(6, 5), 2);
        assert_eq!(inverter_count(50, 5), 10);

        let b = run(&selection(11, "adani", "delta", "kei")).unwrap();
        assert_eq!(b.inverter_count, 3);
        assert_eq!(b.inverter_cost, 54_000);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        for size in 1..=50 {
            let b = run(&selection(size, "waaree", "exide", "finolex")).unwrap();
            assert_eq!(
                b.total_cost,
                b.panel_cost + b.inverter_cost + b.wiring_cost + b.installation_cost + b.misc_cost
            );
        }
    }

    #[test]
    fn test_unknown_brand_is_not_found() {
        for sel in [
            selection(5, "sunpower", "luminous", "polycab"),
            selection(5, "tata", "enphase", "polycab"),
            selection(5, "tata", "luminous", "copper"),
        ] {
            assert!(matches!(run(&sel), Err(AppError::NotFound(_))));
        }
    }

    #[test]
    fn test_size_bounds() {
        assert!(matches!(run(&selection(0, "tata", "luminous", "polycab")), Err(AppError::InvalidInput(_))));
        assert!(matches!(run(&selection(51, "tata", "luminous", "polycab")), Err(AppError::InvalidInput(_))));
        assert!(run(&selection(50, "tata", "luminous", "polycab")).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let sel = selection(17, "vikram", "sukam", "havells");
        assert_eq!(run(&sel).unwrap(), run(&sel).unwrap());
    }
}
