//! Integration tests for fc-sim.

use fc_agent::VisitorTraits;
use fc_core::{AgentRef, CoreError, FestivalConfig, GridPos, Tick, TraitDistribution, VisitorId};

use crate::{Festival, FestivalBuilder, FestivalObserver, NoopObserver, SimError, Snapshot, StepSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A crowded, thirsty festival where every code path fires within a few
/// dozen steps.
fn busy_config(seed: u64) -> FestivalConfig {
    FestivalConfig {
        width: 12,
        height: 12,
        visitors: 20,
        stands: vec![GridPos::new(2, 2), GridPos::new(9, 9)],
        thirst_rate: TraitDistribution::new(12.0, 4.0),
        reluctance: TraitDistribution::new(1.0, 0.6),
        sip_size: TraitDistribution::new(60.0, 15.0),
        collection_awareness: 0.5,
        soil_chance: 0.3,
        initial_litter: 5,
        seed,
        total_steps: 150,
        ..FestivalConfig::default()
    }
}

fn traits(reluctance: f32, thirst_rate: f32, sip_size: f32) -> VisitorTraits {
    VisitorTraits { reluctance, thirst_rate, sip_size }
}

fn build(config: FestivalConfig) -> Festival {
    FestivalBuilder::new(config).build().unwrap()
}

// ── FestivalBuilder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_default_scenario() {
        let f = build(FestivalConfig::default());
        assert_eq!(f.visitors().len(), 8);
        assert_eq!(f.stands().len(), 2);
        assert_eq!(f.schedule().len(), 10);
        assert!(f.cups().is_empty());
        assert_eq!(f.steps(), 0);
        assert_eq!(f.clock.current_tick, Tick::ZERO);
        for v in f.visitors() {
            assert_eq!(v.thirst(), 0.0);
            assert!(v.held_cup.is_none());
            assert!(v.traits.reluctance >= 0.0);
            assert!(f.grid().contains(f.visitor_pos(v.id).unwrap()));
        }
    }

    #[test]
    fn duplicate_stands_rejected() {
        let config = FestivalConfig {
            stands: vec![GridPos::new(1, 1), GridPos::new(4, 4), GridPos::new(1, 1)],
            ..FestivalConfig::default()
        };
        let err = FestivalBuilder::new(config).build().err().unwrap();
        assert_eq!(err, SimError::Config(CoreError::DuplicateStand(GridPos::new(1, 1))));
    }

    #[test]
    fn stand_outside_grid_rejected() {
        let config = FestivalConfig { stands: vec![GridPos::new(10, 0)], ..FestivalConfig::default() };
        let err = FestivalBuilder::new(config).build().err().unwrap();
        assert!(matches!(err, SimError::Config(CoreError::OutOfBounds { .. })));
    }

    #[test]
    fn empty_grid_rejected() {
        let config = FestivalConfig { width: 0, stands: vec![], ..FestivalConfig::default() };
        assert!(matches!(
            FestivalBuilder::new(config).build(),
            Err(SimError::Config(CoreError::EmptyGrid { .. }))
        ));
    }

    #[test]
    fn trait_count_mismatch_errors() {
        let err = FestivalBuilder::new(FestivalConfig::default())
            .visitor_traits(vec![traits(1.0, 1.0, 1.0); 3])
            .build()
            .err()
            .unwrap();
        assert_eq!(err, SimError::VisitorCountMismatch { expected: 8, got: 3, what: "visitor traits" });
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = FestivalBuilder::new(FestivalConfig::default())
            .initial_positions(vec![GridPos::new(0, 0); 9])
            .build();
        assert!(matches!(result, Err(SimError::VisitorCountMismatch { got: 9, .. })));
    }

    #[test]
    fn position_outside_grid_rejected() {
        let config = FestivalConfig { visitors: 1, ..FestivalConfig::default() };
        let result = FestivalBuilder::new(config).initial_positions(vec![GridPos::new(3, 10)]).build();
        assert!(matches!(result, Err(SimError::Config(CoreError::OutOfBounds { .. }))));
    }

    #[test]
    fn initial_positions_and_traits_are_used() {
        let config = FestivalConfig { visitors: 2, ..FestivalConfig::default() };
        let f = FestivalBuilder::new(config)
            .initial_positions(vec![GridPos::new(1, 2), GridPos::new(7, 7)])
            .visitor_traits(vec![traits(0.5, 3.0, 10.0), traits(2.0, 1.0, 40.0)])
            .build()
            .unwrap();
        assert_eq!(f.visitor_pos(VisitorId(0)), Some(GridPos::new(1, 2)));
        assert_eq!(f.visitor_pos(VisitorId(1)), Some(GridPos::new(7, 7)));
        assert_eq!(f.visitor(VisitorId(1)).unwrap().traits, traits(2.0, 1.0, 40.0));
    }

    #[test]
    fn initial_litter_is_on_the_floor_and_scheduled() {
        let config = FestivalConfig { initial_litter: 5, ..FestivalConfig::default() };
        let f = build(config);
        assert_eq!(f.cups().len(), 5);
        assert_eq!(f.counters().cups_on_floor, 5);
        assert_eq!(f.schedule().count_where(AgentRef::is_cup), 5);
        assert!(f.cups().iter().all(|c| c.on_floor() && c.is_empty()));
        f.verify_ledger().unwrap();
    }

    #[test]
    fn same_seed_same_setup() {
        let a = build(busy_config(9));
        let b = build(busy_config(9));
        assert_eq!(a.report(), b.report());
        assert_eq!(
            a.visitors().iter().map(|v| v.traits).collect::<Vec<_>>(),
            b.visitors().iter().map(|v| v.traits).collect::<Vec<_>>()
        );
    }

    #[test]
    fn behavior_can_be_swapped() {
        let f = FestivalBuilder::new(FestivalConfig::default())
            .behavior(fc_behavior::IdleBehavior)
            .build()
            .unwrap();
        assert_eq!(fc_behavior::VisitorBehavior::name(f.behavior()), "idle");
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn thirst_saturates_for_visitor_on_stand() {
        let stand = GridPos::new(3, 3);
        let config = FestivalConfig { visitors: 1, stands: vec![stand], ..FestivalConfig::default() };
        let mut f = FestivalBuilder::new(config)
            .initial_positions(vec![stand])
            .visitor_traits(vec![traits(0.0, 100.0, 25.0)])
            .build()
            .unwrap();

        f.step().unwrap();
        assert_eq!(f.visitors()[0].thirst(), 100.0);
        for _ in 0..30 {
            f.step().unwrap();
            assert_eq!(f.visitors()[0].thirst(), 100.0);
            f.verify_ledger().unwrap();
        }
    }

    #[test]
    fn aware_visitor_collects_through_the_model() {
        // 3x3 torus: every floor cup is in the visitor's neighborhood.
        let config = FestivalConfig {
            width: 3,
            height: 3,
            visitors: 1,
            stands: vec![],
            collection_awareness: 1.0,
            soil_chance: 0.0,
            ..FestivalConfig::default()
        };
        let mut f = FestivalBuilder::new(config)
            .visitor_traits(vec![traits(0.0, 0.0, 25.0)])
            .build()
            .unwrap();
        for pos in [GridPos::new(0, 0), GridPos::new(2, 1), GridPos::new(1, 2)] {
            f.scatter_cup(pos).unwrap();
        }
        let held = f.cups.mint();
        if let Some(cup) = f.cups.get_mut(held) {
            cup.empty_out();
        }
        f.visitors[0].held_cup = Some(held);

        for expected in 1..=3u64 {
            let summary = f.step().unwrap();
            assert_eq!(summary.cups_collected, 1);
            assert_eq!(f.counters().cups_on_floor, 3 - expected);
            f.verify_ledger().unwrap();
        }
        assert_eq!(f.visitors()[0].collected.len(), 3);
        assert_eq!(f.step().unwrap().cups_collected, 0);
    }

    #[test]
    fn idle_crowd_mints_nothing() {
        let mut f = FestivalBuilder::new(busy_config(3))
            .behavior(fc_behavior::IdleBehavior)
            .build()
            .unwrap();
        f.run_steps(50, &mut NoopObserver).unwrap();
        assert_eq!(f.cups().len(), 5);
        assert_eq!(f.counters().drinks_sold, 0);
        f.verify_ledger().unwrap();
    }

    #[test]
    fn scatter_outside_grid_fails() {
        let mut f = build(FestivalConfig::default());
        assert!(matches!(f.scatter_cup(GridPos::new(10, 10)), Err(SimError::Grid(_))));
        assert!(f.cups().is_empty());
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn ledger_holds_at_every_step() {
        for seed in [1, 2, 3, 4, 5] {
            let mut f = build(busy_config(seed));
            f.verify_ledger().unwrap();
            for _ in 0..150 {
                f.step().unwrap();
                f.verify_ledger().unwrap_or_else(|e| panic!("seed {seed}, step {}: {e}", f.steps()));
                let tally = f.tally();
                assert!(tally.balances(), "seed {seed}: {tally:?}");
                assert_eq!(tally.on_floor, f.counters().cups_on_floor);
            }
        }
    }

    #[test]
    fn busy_run_exercises_every_path() {
        let mut f = build(busy_config(11));
        f.run(&mut NoopObserver).unwrap();
        let c = *f.counters();
        assert!(c.drinks_sold > 0);
        assert!(c.cups_returned > 0);
        assert!(c.cups_dropped > 0);
        assert!(c.cups_collected > 0);
        assert!(f.cups().total_reuses() > 0);
    }

    #[test]
    fn every_sale_mints_or_reuses() {
        let config = busy_config(21);
        let litter = config.initial_litter as u64;
        let mut f = build(config);
        for _ in 0..150 {
            f.step().unwrap();
            let s = f.report();
            assert_eq!(s.drinks_sold, (s.cups_minted - litter) + s.total_reuses);
        }
    }

    #[test]
    fn minted_cups_join_roster_after_their_step() {
        let mut f = build(busy_config(5));
        for _ in 0..100 {
            let roster_before = f.schedule().len();
            let summary = f.step().unwrap();
            assert_eq!(summary.activated, roster_before);
            assert_eq!(f.schedule().len(), roster_before + summary.new_cups as usize);
            assert_eq!(f.schedule().count_where(AgentRef::is_cup), f.cups().len());
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = build(busy_config(77));
        let mut b = build(busy_config(77));
        for _ in 0..100 {
            assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
        assert_eq!(a.report(), b.report());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = build(busy_config(1));
        let mut b = build(busy_config(2));
        a.run_steps(50, &mut NoopObserver).unwrap();
        b.run_steps(50, &mut NoopObserver).unwrap();
        assert_ne!(a.report(), b.report());
    }

    #[test]
    fn verbose_does_not_change_outcome() {
        let mut quiet = build(busy_config(8));
        let mut loud = build(FestivalConfig { verbose: true, ..busy_config(8) });
        quiet.run(&mut NoopObserver).unwrap();
        loud.run(&mut NoopObserver).unwrap();
        assert_eq!(quiet.report(), loud.report());
    }

    #[test]
    fn broken_ledger_is_detected() {
        let mut f = build(busy_config(4));
        while f.visitors.iter().all(|v| v.held_cup.is_none()) {
            f.step().unwrap();
        }
        let Some(cup) = f.visitors.iter().find_map(|v| v.held_cup) else { unreachable!() };
        f.stands[0].accept_return(cup);
        assert!(matches!(f.verify_ledger(), Err(SimError::Ledger(_))));
    }

    #[test]
    fn floor_counter_drift_is_detected() {
        let mut f = build(busy_config(4));
        f.counters.cups_on_floor += 1;
        assert!(matches!(f.verify_ledger(), Err(SimError::Ledger(_))));
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::CellCondition;

    #[test]
    fn report_is_idempotent() {
        let mut f = build(busy_config(6));
        f.run_steps(40, &mut NoopObserver).unwrap();
        assert_eq!(f.report(), f.report());
    }

    #[test]
    fn report_counts_match_model() {
        let mut f = build(busy_config(12));
        f.run_steps(80, &mut NoopObserver).unwrap();
        let s = f.report();
        assert_eq!(s.step, 80);
        assert_eq!(s.clock.current_tick, Tick(80));
        assert_eq!(s.cups_minted, f.cups().len() as u64);
        assert_eq!(s.cups_on_floor, s.floor_cups.len() as u64);
        assert_eq!(s.total_reuses, f.cups().total_reuses());
        assert_eq!(s.visitors.len(), 20);
        assert_eq!(s.cells.len(), 144);
        for row in &s.visitors {
            assert_eq!(Some(row.pos), f.visitor_pos(row.id));
            assert!((0.0..=100.0).contains(&row.thirst));
        }
    }

    #[test]
    fn stands_take_cell_precedence() {
        let stand = GridPos::new(4, 4);
        let config = FestivalConfig { visitors: 2, stands: vec![stand], ..FestivalConfig::default() };
        let f = FestivalBuilder::new(config)
            .initial_positions(vec![stand, GridPos::new(0, 0)])
            .build()
            .unwrap();
        let s = f.report();
        assert_eq!(s.cell(stand), CellCondition::Stand);
        assert_eq!(s.cell(GridPos::new(0, 0)), CellCondition::VisitorWithoutCup);
        assert_eq!(s.cell(GridPos::new(5, 5)), CellCondition::Empty);
        assert_eq!(s.cell(GridPos::new(50, 5)), CellCondition::Empty);
        assert_eq!(s.count_cells(CellCondition::Stand), 1);
        assert_eq!(s.visitors_with_cup(), 0);
    }

    #[test]
    fn visitor_with_cup_outranks_visitor_without() {
        assert_eq!(
            CellCondition::VisitorWithoutCup.merge(CellCondition::VisitorWithCup),
            CellCondition::VisitorWithCup
        );
        assert_eq!(CellCondition::Stand.merge(CellCondition::VisitorWithCup), CellCondition::Stand);
        assert_eq!(CellCondition::Empty.merge(CellCondition::Empty), CellCondition::Empty);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Tick>,
        summaries: Vec<StepSummary>,
        snapshots: Vec<(Tick, u64)>,
        end:       Option<(Tick, Snapshot)>,
    }

    impl FestivalObserver for Recorder {
        fn on_step_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_step_end(&mut self, _tick: Tick, summary: &StepSummary) {
            self.summaries.push(*summary);
        }
        fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
            self.snapshots.push((tick, snapshot.step));
        }
        fn on_run_end(&mut self, tick: Tick, snapshot: &Snapshot) {
            self.end = Some((tick, snapshot.clone()));
        }
    }

    #[test]
    fn hooks_fire_at_step_boundaries() {
        let config = FestivalConfig { total_steps: 10, snapshot_interval: 3, ..busy_config(1) };
        let mut f = build(config);
        let mut rec = Recorder::default();
        f.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..10).map(Tick).collect::<Vec<_>>());
        assert_eq!(rec.summaries.len(), 10);
        assert_eq!(rec.summaries[9].step, 10);
        assert_eq!(rec.summaries[9].tick, Tick(9));
        assert_eq!(rec.snapshots, vec![(Tick(3), 3), (Tick(6), 6), (Tick(9), 9)]);
        let (end_tick, end) = rec.end.unwrap();
        assert_eq!(end_tick, Tick(10));
        assert_eq!(end, f.report());
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = FestivalConfig { total_steps: 5, snapshot_interval: 0, ..busy_config(1) };
        let mut rec = Recorder::default();
        build(config).run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert!(rec.end.is_some());
    }

    #[test]
    fn run_stops_at_configured_end() {
        let config = FestivalConfig { total_steps: 7, ..busy_config(1) };
        let mut f = build(config);
        f.run(&mut NoopObserver).unwrap();
        assert_eq!(f.steps(), 7);
        f.run(&mut NoopObserver).unwrap();
        assert_eq!(f.steps(), 7);
        f.run_steps(2, &mut NoopObserver).unwrap();
        assert_eq!(f.steps(), 9);
    }

    #[test]
    fn run_after_overshooting_the_end_is_a_no_op_with_logging_on() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut f = build(FestivalConfig { total_steps: 3, ..busy_config(2) });
            f.run_steps(5, &mut NoopObserver).unwrap();
            let before = f.report();
            f.run(&mut NoopObserver).unwrap();
            assert_eq!(f.steps(), 5);
            assert_eq!(f.report(), before);
        });
    }

    #[test]
    fn summary_deltas_add_up() {
        let mut f = build(busy_config(14));
        let mut rec = Recorder::default();
        f.run(&mut rec).unwrap();
        let c = *f.counters();
        assert_eq!(rec.summaries.iter().map(|s| s.drinks_sold).sum::<u64>(), c.drinks_sold);
        assert_eq!(rec.summaries.iter().map(|s| s.cups_dropped).sum::<u64>(), c.cups_dropped);
        assert_eq!(rec.summaries.iter().map(|s| s.new_cups).sum::<u64>() + 5, f.cups().len() as u64);
    }
}
