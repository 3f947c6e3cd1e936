//! Greedy shelf placement of cargo on a platform.

use std::time::Instant;

use u_loadplan_core::geometry::{Boundary, Geometry};
use u_loadplan_core::solver::{Config, Solver};
use u_loadplan_core::{LoadPlan, Placement, Result};

use crate::cargo::{validate_cargo, CargoItem};
use crate::centroid::compute_centroid;
use crate::platform::Platform;

/// Assigns every cargo item a lower-left corner on the platform footprint.
///
/// Items are laid left to right in input order. An item that would cross the
/// platform width, or whose width would cross the platform height from the
/// current baseline, opens a new row: x resets to 0 and the baseline moves up
/// by that item's width.
///
/// The bounds checks only decide when to wrap. Items larger than the platform
/// are still placed, and rows may continue past the platform height. Callers
/// that need a feasibility verdict should check footprints against the
/// platform themselves.
pub fn place_cargo<G, B>(cargo: &[G], platform: &B) -> Result<Vec<Placement>>
where
    G: Geometry,
    B: Boundary,
{
    platform.validate()?;
    validate_cargo(cargo)?;

    let mut placements = Vec::with_capacity(cargo.len());

    let mut row_x = 0.0_f64;
    let mut row_y = 0.0_f64;
    let mut row = 0_usize;

    for (index, item) in cargo.iter().enumerate() {
        let length = item.length();
        let width = item.width();

        let fits = row_x + length <= platform.width() && row_y + width <= platform.height();
        if !fits {
            let previous_y = row_y;
            row_x = 0.0;
            row_y += width;
            row += 1;
            log::debug!(
                "Row {} opened by '{}' ({} x {}): baseline {:.3} -> {:.3}",
                row,
                item.id(),
                length,
                width,
                previous_y,
                row_y
            );
        }

        placements.push(
            Placement::new(item.id().clone(), index, row_x, row_y, length, width).with_row(row),
        );

        row_x += length;
    }

    Ok(placements)
}

/// Centroid-annotated shelf placement on a transport platform.
pub struct ShelfPlacer {
    config: Config,
}

impl ShelfPlacer {
    /// Creates a new placer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a placer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn plan<G, B>(&self, cargo: &[G], platform: &B) -> Result<LoadPlan>
    where
        G: Geometry,
        B: Boundary,
    {
        let start = Instant::now();

        let centroid = compute_centroid(cargo)?;
        let placements = place_cargo(cargo, platform)?;

        let mut plan = LoadPlan::new(centroid, placements);
        plan.option_label = self.config.option_label.clone();

        let stats = plan.placement_stats();
        plan.rows_used = stats.rows_used();
        plan.utilization = stats.total_area / platform.measure();
        plan.out_of_bounds = plan
            .placements
            .iter()
            .filter(|p| !platform.contains(&p.footprint()))
            .map(|p| p.cargo_id.clone())
            .collect();

        if !plan.out_of_bounds.is_empty() {
            log::warn!(
                "{} of {} items extend past the {} x {} platform: {:?}",
                plan.out_of_bounds.len(),
                plan.placed_count(),
                platform.width(),
                platform.height(),
                plan.out_of_bounds
            );
        }

        plan.computation_time_ms = start.elapsed().as_millis() as u64;
        Ok(plan)
    }
}

impl Default for ShelfPlacer {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for ShelfPlacer {
    type Cargo = CargoItem;
    type Platform = Platform;

    fn solve(&self, cargo: &[Self::Cargo], platform: &Self::Platform) -> Result<LoadPlan> {
        self.plan(cargo, platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::{Mutex, Once};
    use u_loadplan_core::Error;

    /// Collects formatted log records so tests can inspect diagnostics.
    struct CaptureLogger;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static INIT: Once = Once::new();

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn captured(needle: &str) -> Vec<String> {
        INIT.call_once(|| {
            let _ = log::set_logger(&CaptureLogger);
            log::set_max_level(log::LevelFilter::Debug);
        });
        RECORDS
            .lock()
            .map(|r| r.iter().filter(|m| m.contains(needle)).cloned().collect())
            .unwrap_or_default()
    }

    fn positions(placements: &[Placement]) -> Vec<(f64, f64)> {
        placements.iter().map(Placement::position).collect()
    }

    #[test]
    fn test_row_wrap() {
        let cargo = vec![
            CargoItem::new("1", 1.0, 6.0, 2.0, 1.0),
            CargoItem::new("2", 1.0, 6.0, 2.0, 1.0),
        ];
        let platform = Platform::new(10.0, 10.0);

        let placements = place_cargo(&cargo, &platform).unwrap();

        assert_eq!(positions(&placements), vec![(0.0, 0.0), (0.0, 2.0)]);
        assert_eq!(placements[1].row, 1);
    }

    #[test]
    fn test_single_row_is_contiguous() {
        let cargo = vec![
            CargoItem::new("a", 1.0, 2.0, 1.0, 1.0),
            CargoItem::new("b", 1.0, 3.5, 2.0, 1.0),
            CargoItem::new("c", 1.0, 1.25, 1.5, 1.0),
            CargoItem::new("d", 1.0, 3.25, 0.5, 1.0),
        ];
        let platform = Platform::new(10.0, 2.0);

        let placements = place_cargo(&cargo, &platform).unwrap();

        for pair in placements.windows(2) {
            assert_relative_eq!(pair[1].x, pair[0].x + pair[0].length);
            assert_eq!(pair[1].y, pair[0].y);
            assert!(!pair[0].footprint().overlaps(&pair[1].footprint()));
        }
        assert!(placements.iter().all(|p| p.row == 0));
    }

    #[test]
    fn test_exact_fit_stays_in_row() {
        let cargo = vec![
            CargoItem::new("a", 1.0, 4.0, 2.0, 1.0),
            CargoItem::new("b", 1.0, 6.0, 2.0, 1.0),
        ];
        let platform = Platform::new(10.0, 2.0);

        let placements = place_cargo(&cargo, &platform).unwrap();
        assert_eq!(positions(&placements), vec![(0.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn test_output_order_matches_input() {
        let cargo: Vec<CargoItem> = (0..12)
            .map(|i| CargoItem::new(format!("C{}", i), 1.0, 3.0 + (i % 3) as f64, 1.0, 1.0))
            .collect();
        let platform = Platform::new(10.0, 20.0);

        let placements = place_cargo(&cargo, &platform).unwrap();

        assert_eq!(placements.len(), cargo.len());
        for (i, (p, item)) in placements.iter().zip(&cargo).enumerate() {
            assert_eq!(&p.cargo_id, item.id());
            assert_eq!(p.index, i);
        }
        assert!(placements.last().unwrap().row > 0);
    }

    #[test]
    fn test_baseline_advances_by_wrapping_item_width() {
        let cargo = vec![
            CargoItem::new("a", 1.0, 8.0, 1.0, 1.0),
            CargoItem::new("b", 1.0, 8.0, 3.0, 1.0),
            CargoItem::new("c", 1.0, 8.0, 0.5, 1.0),
        ];
        let platform = Platform::new(10.0, 10.0);

        let placements = place_cargo(&cargo, &platform).unwrap();
        assert_eq!(
            positions(&placements),
            vec![(0.0, 0.0), (0.0, 3.0), (0.0, 3.5)]
        );
    }

    #[test]
    fn test_wrap_log_shows_previous_and_new_baseline() {
        captured("");

        let cargo = vec![
            CargoItem::new("wrap-log-a", 1.0, 8.0, 1.0, 1.0),
            CargoItem::new("wrap-log-b", 1.0, 8.0, 3.0, 1.0),
        ];
        place_cargo(&cargo, &Platform::new(10.0, 10.0)).unwrap();

        let records = captured("wrap-log-b");
        assert_eq!(records.len(), 1);
        assert!(
            records[0].contains("baseline 0.000 -> 3.000"),
            "{}",
            records[0]
        );
    }

    #[test]
    fn test_height_check_wraps_past_platform() {
        // "short" fits the remaining row length, but its width crosses the
        // platform height from baseline 2, so it opens a row at y=4.
        let cargo = vec![
            CargoItem::new("first", 1.0, 6.0, 2.0, 1.0),
            CargoItem::new("second", 1.0, 6.0, 2.0, 1.0),
            CargoItem::new("short", 1.0, 1.0, 2.0, 1.0),
        ];
        let platform = Platform::new(10.0, 3.0);

        let placements = place_cargo(&cargo, &platform).unwrap();
        assert_eq!(
            positions(&placements),
            vec![(0.0, 0.0), (0.0, 2.0), (0.0, 4.0)]
        );
        assert_eq!(placements[2].row, 2);
    }

    #[test]
    fn test_oversized_item_is_still_placed() {
        let cargo = vec![CargoItem::new("long", 1.0, 15.0, 1.0, 1.0)];
        let platform = Platform::new(10.0, 5.0);

        let placements = place_cargo(&cargo, &platform).unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].position(), (0.0, 1.0));
    }

    #[test]
    fn test_empty_cargo_fails() {
        let cargo: Vec<CargoItem> = Vec::new();
        let err = place_cargo(&cargo, &Platform::standard()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_degenerate_item_fails_before_placing() {
        let cargo = vec![
            CargoItem::new("a", 1.0, 2.0, 1.0, 1.0),
            CargoItem::new("b", 1.0, 0.0, 1.0, 1.0),
        ];
        assert!(matches!(
            place_cargo(&cargo, &Platform::standard()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_platform_fails() {
        let cargo = vec![CargoItem::new("a", 1.0, 2.0, 1.0, 1.0)];
        assert!(matches!(
            place_cargo(&cargo, &Platform::new(0.0, 2.0)),
            Err(Error::InvalidPlatform(_))
        ));
    }

    #[test]
    fn test_solve_fills_plan() {
        let cargo = vec![
            CargoItem::new("A", 2.0, 4.0, 2.0, 1.0),
            CargoItem::new("B", 3.0, 5.0, 2.0, 1.0),
        ];
        let placer = ShelfPlacer::new(Config::new().with_option_label("as shown in the chart"));

        let plan = placer.solve(&cargo, &Platform::standard()).unwrap();

        assert_eq!(plan.placed_count(), 2);
        assert_eq!(plan.rows_used, 1);
        assert!(plan.all_within_bounds());
        assert_relative_eq!(plan.utilization, 18.0 / 36.448, epsilon = 1e-12);
        assert_eq!(plan.option_label.as_deref(), Some("as shown in the chart"));
        assert_relative_eq!(plan.centroid.x, 2.3, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_reports_out_of_bounds() {
        let cargo = vec![
            CargoItem::new("fits", 1.0, 4.0, 2.0, 1.0),
            CargoItem::new("too long", 1.0, 12.0, 1.0, 1.0),
            CargoItem::new("spill", 1.0, 4.0, 2.0, 1.0),
        ];
        let plan = ShelfPlacer::default()
            .solve(&cargo, &Platform::new(10.0, 3.0))
            .unwrap();

        assert_eq!(
            plan.out_of_bounds,
            vec!["too long".to_string(), "spill".to_string()]
        );
        assert!(!plan.all_within_bounds());
        assert_eq!(plan.rows_used, 3);
    }
}
