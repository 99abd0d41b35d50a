//! CPU scheduling policies and run aggregates.
//!
//! Every policy consumes a batch of processes and produces a [`Schedule`]:
//! one row per process, a Gantt timeline, and [`RunAggregates`].
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | FCFS | no | input order |
//! | SJF | per tick | shortest remaining burst |
//! | Priority | per tick | lowest priority value |
//! | Round-robin | not implemented | - |
//!
//! No policy mutates its input: SJF and Priority sort a private copy, so
//! the order in which policies are run never changes their results.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod heap;
mod kpi;
mod priority;
mod sjf;

pub use fcfs::{Fcfs, FcfsWaitMode};
pub use heap::MinHeap;
pub use kpi::{total_turnaround, total_wait, RunAggregates};
pub use priority::PriorityScheduler;
pub use sjf::Sjf;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::models::{Process, Schedule};

/// A scheduling policy that runs a whole batch to completion.
pub trait CpuScheduler: Debug {
    /// Short policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates the batch and returns the completed schedule.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// The closed set of policies, in the order they are always reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First-come, first-served.
    Fcfs,
    /// Shortest remaining burst first.
    Sjf,
    /// Lowest priority value first, preemptive.
    Priority,
    /// Time-quantum round robin. Declared but not implemented.
    RoundRobin,
}

impl Policy {
    /// All policies in reporting order.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// Section title printed above the policy's results.
    pub fn title(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-come, first-serve",
            Policy::Sjf => "Shortest-job-first",
            Policy::Priority => "Priority",
            Policy::RoundRobin => "Round-robin",
        }
    }

    /// Runs this policy over the batch.
    pub fn run(&self, processes: &[Process], config: &RunConfig) -> PolicyOutcome {
        let scheduler: Box<dyn CpuScheduler> = match self {
            Policy::Fcfs => Box::new(Fcfs::new().with_wait_mode(config.fcfs_wait)),
            Policy::Sjf => Box::new(Sjf::new()),
            Policy::Priority => Box::new(PriorityScheduler::new()),
            Policy::RoundRobin => {
                log::debug!(target: "scheduler", "round-robin is not implemented; skipping");
                return PolicyOutcome::NotImplemented;
            }
        };

        let schedule = scheduler.schedule(processes);
        log::debug!(
            target: "scheduler",
            "{}: {} rows, {} slices, last completion at {}, CPU utilization {:.2}",
            scheduler.name(),
            schedule.row_count(),
            schedule.timeline.len(),
            schedule.aggregates.last_completion,
            schedule.aggregates.cpu_utilization
        );
        PolicyOutcome::Completed(schedule)
    }
}

/// Result of running one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "schedule", rename_all = "kebab-case")]
pub enum PolicyOutcome {
    /// The policy ran to completion.
    Completed(Schedule),
    /// The policy exists but has no implementation; only its title is reported.
    NotImplemented,
}

impl PolicyOutcome {
    /// The schedule, if the policy produced one.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            PolicyOutcome::Completed(schedule) => Some(schedule),
            PolicyOutcome::NotImplemented => None,
        }
    }
}

/// One policy's section of the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    /// Which policy ran.
    pub policy: Policy,
    /// Section title.
    pub title: &'static str,
    /// What it produced.
    pub outcome: PolicyOutcome,
}

/// Runs every policy, in reporting order, over the same batch.
pub fn run_all(processes: &[Process], config: &RunConfig) -> Vec<PolicyReport> {
    Policy::ALL
        .iter()
        .map(|&policy| PolicyReport {
            policy,
            title: policy.title(),
            outcome: policy.run(processes, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn random_batch(rng: &mut StdRng, len: usize) -> Vec<Process> {
        (0..len)
            .map(|i| {
                Process::new(i as i64 + 1, rng.random_range(1..8), rng.random_range(0..15))
                    .with_priority(rng.random_range(0..4))
            })
            .collect()
    }

    fn implemented() -> Vec<Box<dyn CpuScheduler>> {
        vec![
            Box::new(Fcfs::new()),
            Box::new(Sjf::new()),
            Box::new(PriorityScheduler::new()),
        ]
    }

    #[test]
    fn test_policy_order_and_titles() {
        let titles: Vec<&str> = Policy::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec![
                "First-come, first-serve",
                "Shortest-job-first",
                "Priority",
                "Round-robin"
            ]
        );
    }

    #[test]
    fn test_round_robin_not_implemented() {
        let batch = vec![Process::new(1, 3, 0)];
        let outcome = Policy::RoundRobin.run(&batch, &RunConfig::default());
        assert_eq!(outcome, PolicyOutcome::NotImplemented);
        assert!(outcome.schedule().is_none());
    }

    #[test]
    fn test_run_all_reports_four_policies() {
        let batch = vec![Process::new(1, 5, 0), Process::new(2, 2, 0)];
        let reports = run_all(&batch, &RunConfig::default());
        assert_eq!(reports.len(), 4);
        for report in &reports[..3] {
            assert_eq!(report.outcome.schedule().map(|s| s.row_count()), Some(2));
        }
        assert_eq!(reports[3].outcome, PolicyOutcome::NotImplemented);
    }

    #[test]
    fn test_run_order_does_not_matter() {
        let batch = vec![
            Process::new(1, 3, 4).with_priority(1),
            Process::new(2, 2, 0).with_priority(2),
            Process::new(3, 4, 1).with_priority(0),
        ];
        let config = RunConfig::default();
        let forward: Vec<PolicyOutcome> = Policy::ALL.iter().map(|p| p.run(&batch, &config)).collect();
        let backward: Vec<PolicyOutcome> = Policy::ALL
            .iter()
            .rev()
            .map(|p| p.run(&batch, &config))
            .collect();
        let backward: Vec<PolicyOutcome> = backward.into_iter().rev().collect();
        assert_eq!(forward, backward);
        // Input untouched
        assert_eq!(batch[0].id, 1);
    }

    #[test]
    fn test_row_invariants_hold_for_random_batches() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let len = rng.random_range(1..12);
            let batch = random_batch(&mut rng, len);
            for scheduler in implemented() {
                let schedule = scheduler.schedule(&batch);
                assert_eq!(schedule.row_count(), batch.len(), "{}", scheduler.name());
                for row in &schedule.rows {
                    assert_eq!(row.turnaround_time, row.burst_duration + row.wait_time);
                    assert_eq!(row.completion_time, row.arrival_time + row.turnaround_time);
                    assert!(row.wait_time >= 0, "{} negative wait", scheduler.name());
                }
            }
        }
    }

    #[test]
    fn test_timeline_matches_bursts_for_random_batches() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.random_range(1..12);
            let batch = random_batch(&mut rng, len);
            let total_burst: i64 = batch.iter().map(|p| p.burst_duration).sum();
            for scheduler in implemented() {
                let schedule = scheduler.schedule(&batch);
                let timeline = &schedule.timeline;
                assert_eq!(timeline.busy_time(), total_burst, "{}", scheduler.name());
                // Slices never overlap
                for pair in timeline.slices().windows(2) {
                    assert!(pair[0].stop <= pair[1].start, "{}", scheduler.name());
                }
                // A process's last slice ends at its completion
                for row in &schedule.rows {
                    let last = timeline.slices_for(row.process_id).last().map(|s| s.stop);
                    assert_eq!(last, Some(row.completion_time), "{}", scheduler.name());
                }
            }
        }
    }

    #[test]
    fn test_throughput_invariant() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = random_batch(&mut rng, 9);
        for scheduler in implemented() {
            let agg = scheduler.schedule(&batch).aggregates;
            let expected = batch.len() as f64 / agg.last_completion as f64;
            assert!((agg.throughput - expected).abs() < 1e-10);
            assert!(agg.throughput > 0.0);
        }
    }

    #[test]
    fn test_validated_batch_near_time_limit_runs() {
        let batch = vec![Process::new(1, 3, 0), Process::new(2, 2, i64::MAX - 5)];
        assert!(crate::validation::validate_batch(&batch).is_ok());

        for fcfs_wait in [FcfsWaitMode::Corrected, FcfsWaitMode::Legacy] {
            let config = RunConfig::default().with_fcfs_wait(fcfs_wait);
            for report in run_all(&batch, &config) {
                if let Some(schedule) = report.outcome.schedule() {
                    assert_eq!(schedule.row_count(), 2);
                }
            }
        }

        for scheduler in implemented() {
            let schedule = scheduler.schedule(&batch);
            assert_eq!(schedule.aggregates.last_completion, i64::MAX - 3);
            assert_eq!(schedule.timeline.busy_time(), 5);
        }
    }

    #[test]
    fn test_outcome_json_shape() {
        let batch = vec![Process::new(1, 2, 0)];
        let reports = run_all(&batch, &RunConfig::default());
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["policy"], "fcfs");
        assert_eq!(json[0]["outcome"]["status"], "completed");
        assert_eq!(json[0]["outcome"]["schedule"]["rows"][0]["completion_time"], 2);
        assert_eq!(json[0]["outcome"]["schedule"]["timeline"][0]["stop"], 2);
        assert_eq!(json[3]["policy"], "round-robin");
        assert_eq!(json[3]["outcome"]["status"], "not-implemented");
    }
}
