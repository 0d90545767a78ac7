//! Metric store.
//!
//! Six synthetic counters (daily/monthly × commits/issues/lines) that climb
//! toward fixed targets one tick at a time.

/// Reporting period of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Monthly,
}

/// What a metric counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Commits,
    Issues,
    Lines,
}

impl Category {
    /// Display order inside a panel.
    pub const ALL: [Category; 3] = [Category::Commits, Category::Issues, Category::Lines];
}

/// Identity of one counter (and of the bar that shows it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricId {
    pub period: Period,
    pub category: Category,
}

impl MetricId {
    pub const DAILY_COMMITS: MetricId = MetricId::new(Period::Daily, Category::Commits);
    pub const DAILY_ISSUES: MetricId = MetricId::new(Period::Daily, Category::Issues);
    pub const DAILY_LINES: MetricId = MetricId::new(Period::Daily, Category::Lines);
    pub const MONTHLY_COMMITS: MetricId = MetricId::new(Period::Monthly, Category::Commits);
    pub const MONTHLY_ISSUES: MetricId = MetricId::new(Period::Monthly, Category::Issues);
    pub const MONTHLY_LINES: MetricId = MetricId::new(Period::Monthly, Category::Lines);

    /// Every metric, in storage order.
    pub const ALL: [MetricId; 6] = [
        MetricId::DAILY_COMMITS,
        MetricId::DAILY_ISSUES,
        MetricId::DAILY_LINES,
        MetricId::MONTHLY_COMMITS,
        MetricId::MONTHLY_ISSUES,
        MetricId::MONTHLY_LINES,
    ];

    pub const fn new(period: Period, category: Category) -> Self {
        Self { period, category }
    }

    /// Dense index into six-slot tables.
    pub const fn index(self) -> usize {
        let period = match self.period {
            Period::Daily => 0,
            Period::Monthly => 3,
        };
        let category = match self.category {
            Category::Commits => 0,
            Category::Issues => 1,
            Category::Lines => 2,
        };
        period + category
    }

    /// Goal the counter climbs toward. Never zero.
    pub const fn target(self) -> u32 {
        match (self.period, self.category) {
            (Period::Daily, Category::Commits) => 20,
            (Period::Daily, Category::Issues) => 10,
            (Period::Daily, Category::Lines) => 500,
            (Period::Monthly, Category::Commits) => 200,
            (Period::Monthly, Category::Issues) => 80,
            (Period::Monthly, Category::Lines) => 10_000,
        }
    }

    /// Amount added on every tick until the target is reached.
    pub const fn step(self) -> u32 {
        match (self.period, self.category) {
            (Period::Daily, Category::Commits) => 1,
            (Period::Daily, Category::Issues) => 1,
            (Period::Daily, Category::Lines) => 25,
            (Period::Monthly, Category::Commits) => 3,
            (Period::Monthly, Category::Issues) => 2,
            (Period::Monthly, Category::Lines) => 200,
        }
    }
}

/// Seed values for all six counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    pub daily_commits: u32,
    pub daily_issues: u32,
    pub daily_lines: u32,
    pub monthly_commits: u32,
    pub monthly_issues: u32,
    pub monthly_lines: u32,
}

impl Seeds {
    /// Small starting point; also what every reset returns to.
    pub const BASELINE: Seeds = Seeds {
        daily_commits: 2,
        daily_issues: 1,
        daily_lines: 30,
        monthly_commits: 10,
        monthly_issues: 5,
        monthly_lines: 300,
    };

    /// Head start used by the eased variant at launch.
    pub const HEAD_START: Seeds = Seeds {
        daily_commits: 5,
        daily_issues: 3,
        daily_lines: 120,
        monthly_commits: 40,
        monthly_issues: 20,
        monthly_lines: 2_500,
    };

    fn to_table(self) -> [u32; 6] {
        [
            self.daily_commits,
            self.daily_issues,
            self.daily_lines,
            self.monthly_commits,
            self.monthly_issues,
            self.monthly_lines,
        ]
    }
}

/// A counter together with its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub current: u32,
    pub target: u32,
}

impl Counter {
    pub fn percentage(self) -> f64 {
        percentage(self.current, self.target)
    }
}

/// The six counters plus the seeds a reset returns to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSet {
    values: [u32; 6],
    reset_seeds: Seeds,
}

impl MetricSet {
    /// Creates a store starting at `initial` that resets to `reset_seeds`.
    pub fn new(initial: Seeds, reset_seeds: Seeds) -> Self {
        Self {
            values: initial.to_table(),
            reset_seeds,
        }
    }

    pub fn get(&self, id: MetricId) -> Counter {
        Counter {
            current: self.values[id.index()],
            target: id.target(),
        }
    }

    /// Moves every unfinished counter one step toward its target.
    ///
    /// Counters are clamped at their target, so a step that would pass the
    /// goal lands exactly on it. Returns the metrics that changed.
    pub fn advance(&mut self) -> Vec<MetricId> {
        let mut changed = Vec::new();
        for id in MetricId::ALL {
            let value = &mut self.values[id.index()];
            let target = id.target();
            if *value < target {
                *value = value.saturating_add(id.step()).min(target);
                changed.push(id);
            }
        }
        changed
    }

    /// Puts every counter back to its reset seed.
    pub fn reset(&mut self) {
        self.values = self.reset_seeds.to_table();
    }

    /// True once every counter has reached its target.
    pub fn is_complete(&self) -> bool {
        MetricId::ALL
            .iter()
            .all(|id| self.values[id.index()] >= id.target())
    }
}

/// Fraction of `target` reached, clamped to `[0, 1]`.
///
/// A zero target counts as already met.
pub fn percentage(current: u32, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (f64::from(current) / f64::from(target)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> MetricSet {
        MetricSet::new(Seeds::BASELINE, Seeds::BASELINE)
    }

    #[test]
    fn test_indices_are_dense_and_unique() {
        let mut seen = [false; 6];
        for id in MetricId::ALL {
            assert!(!seen[id.index()]);
            seen[id.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_advance_applies_category_steps() {
        let mut metrics = baseline();
        metrics.advance();

        assert_eq!(metrics.get(MetricId::DAILY_COMMITS).current, 3);
        assert_eq!(metrics.get(MetricId::DAILY_ISSUES).current, 2);
        assert_eq!(metrics.get(MetricId::DAILY_LINES).current, 55);
        assert_eq!(metrics.get(MetricId::MONTHLY_COMMITS).current, 13);
        assert_eq!(metrics.get(MetricId::MONTHLY_ISSUES).current, 7);
        assert_eq!(metrics.get(MetricId::MONTHLY_LINES).current, 500);
    }

    #[test]
    fn test_advance_is_monotonic_and_never_overshoots() {
        let mut metrics = baseline();
        let mut previous: Vec<u32> = MetricId::ALL
            .iter()
            .map(|id| metrics.get(*id).current)
            .collect();

        for _ in 0..200 {
            metrics.advance();
            for (id, before) in MetricId::ALL.iter().zip(previous.iter_mut()) {
                let counter = metrics.get(*id);
                assert!(counter.current >= *before, "{id:?} went backwards");
                assert!(counter.current <= counter.target, "{id:?} overshot");
                *before = counter.current;
            }
        }
        assert!(metrics.is_complete());
    }

    #[test]
    fn test_step_that_passes_target_is_clamped() {
        // 10 + 3n never hits 200 exactly; the last step must land on it.
        let mut metrics = baseline();
        for _ in 0..63 {
            metrics.advance();
        }
        assert_eq!(metrics.get(MetricId::MONTHLY_COMMITS).current, 199);
        metrics.advance();
        assert_eq!(metrics.get(MetricId::MONTHLY_COMMITS).current, 200);
    }

    #[test]
    fn test_advance_reports_only_moving_metrics() {
        let mut metrics = baseline();
        for _ in 0..9 {
            metrics.advance();
        }
        // Daily issues reached 10 on the ninth tick.
        let changed = metrics.advance();
        assert!(!changed.contains(&MetricId::DAILY_ISSUES));
        assert!(changed.contains(&MetricId::DAILY_COMMITS));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut metrics = MetricSet::new(Seeds::HEAD_START, Seeds::BASELINE);
        for _ in 0..7 {
            metrics.advance();
        }
        metrics.reset();
        let once = metrics.clone();
        metrics.reset();
        assert_eq!(metrics, once);
        assert_eq!(metrics.get(MetricId::DAILY_COMMITS).current, 2);
    }

    #[test]
    fn test_percentage_bounds() {
        for target in [1, 7, 20, 500, 10_000] {
            for current in [0, 1, target / 2, target, target * 3] {
                let p = percentage(current, target);
                assert!((0.0..=1.0).contains(&p), "{current}/{target} -> {p}");
            }
        }
        assert_eq!(percentage(0, 20), 0.0);
        assert_eq!(percentage(20, 20), 1.0);
        assert_eq!(percentage(600, 500), 1.0);
    }

    #[test]
    fn test_percentage_zero_target() {
        assert_eq!(percentage(0, 0), 1.0);
        assert_eq!(percentage(5, 0), 1.0);
    }
}
