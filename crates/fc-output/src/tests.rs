//! Integration tests for fc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{AgentKind, AgentSnapshotRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn visitor_row(agent_id: u32, step: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            step,
            kind:      AgentKind::Visitor,
            agent_id,
            x:         agent_id,
            y:         2,
            condition: "has_no_cup",
            thirst:    Some(12.5),
            inventory: None,
            soil:      None,
        }
    }

    fn summary_row(step: u64) -> StepSummaryRow {
        StepSummaryRow {
            step,
            tick:           step - 1,
            festival_secs:  43_200 + (step - 1) * 60,
            drinks_sold:    2,
            cups_returned:  1,
            cups_dropped:   0,
            cups_collected: 0,
            cups_on_floor:  4,
            cups_minted:    9,
            total_reuses:   3,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("step_summaries.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("step_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir.path().join("step_summaries.csv")), SUMMARY_HEADER);
        assert_eq!(headers(&dir.path().join("agent_snapshots.csv")), SNAPSHOT_HEADER);
    }

    #[test]
    fn snapshot_rows_written_with_empty_optionals() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[visitor_row(0, 5), visitor_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "5");          // step
        assert_eq!(&rows[1][1], "visitor");
        assert_eq!(&rows[1][2], "1");          // agent_id
        assert_eq!(&rows[1][5], "has_no_cup");
        assert_eq!(&rows[1][6], "12.5");       // thirst
        assert_eq!(&rows[1][7], "");           // inventory
        assert_eq!(&rows[1][8], "");           // soil
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "43320");
        assert_eq!(&rows[0][9], "3");
    }

    #[test]
    fn csv_finish_twice_is_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn rows_after_a_finish_are_flushed_by_the_next_finish() {
        let dir = tmp();
        let path = dir.path().join("step_summaries.csv");
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(1)).unwrap();
        w.finish().unwrap();
        w.write_step_summary(&summary_row(2)).unwrap();
        w.finish().unwrap();

        // Writer still alive: both rows must already be on disk.
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let steps: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(steps, ["1", "2"]);
        drop(w);
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use fc_core::{FestivalConfig, GridPos};
    use fc_sim::FestivalBuilder;
    use tempfile::TempDir;

    use crate::{AgentKind, AgentSnapshotRow, CsvWriter, OutputResult, OutputWriter, SnapshotObserver, StepSummaryRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn small_config() -> FestivalConfig {
        FestivalConfig {
            visitors: 4,
            stands: vec![GridPos::new(1, 1), GridPos::new(8, 8)],
            initial_litter: 2,
            total_steps: 6,
            snapshot_interval: 2,
            seed: 3,
            ..FestivalConfig::default()
        }
    }

    #[test]
    fn festival_run_writes_csv() {
        let config = small_config();
        let mut festival = FestivalBuilder::new(config.clone()).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SnapshotObserver::new(writer, &config);
        festival.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[0][2], "43200", "tick 0 starts when the gates open");
        assert_eq!(&summaries[5][0], "6");

        // Snapshots after steps 2, 4, 6; each lists 4 visitors and 2 stands
        // plus whatever cups are on the floor.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        for step in ["2", "4", "6"] {
            let at: Vec<_> = rows.iter().filter(|r| &r[0] == step).collect();
            assert_eq!(at.iter().filter(|r| &r[1] == "visitor").count(), 4);
            assert_eq!(at.iter().filter(|r| &r[1] == "stand").count(), 2);
        }
        assert!(rows.iter().all(|r| ["2", "4", "6"].contains(&&r[0])));
    }

    #[test]
    fn snapshot_rows_follow_report() {
        let mut festival = FestivalBuilder::new(small_config()).build().unwrap();
        festival.run_steps(3, &mut fc_sim::NoopObserver).unwrap();
        let snapshot = festival.report();
        let rows = AgentSnapshotRow::from_snapshot(&snapshot);

        let cups: Vec<_> = rows.iter().filter(|r| r.kind == AgentKind::Cup).collect();
        assert_eq!(cups.len() as u64, snapshot.cups_on_floor);
        assert!(cups.iter().all(|r| r.soil.is_some() && r.thirst.is_none()));
        assert_eq!(rows[0].kind, AgentKind::Visitor);
        assert_eq!(rows[0].thirst, Some(snapshot.visitors[0].thirst));
        assert!(rows.iter().all(|r| r.step == 3));
    }

    /// Writer that fails every call with an I/O error.
    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other(format!("disk full #{}", self.calls)).into())
        }
        fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other(format!("disk full #{}", self.calls)).into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let config = small_config();
        let mut festival = FestivalBuilder::new(config.clone()).build().unwrap();
        let mut obs = SnapshotObserver::new(Broken { calls: 0 }, &config);
        festival.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full #1"), "got {err}");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 1);
    }
}
