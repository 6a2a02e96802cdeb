use overload_sim::{run_scenario, Catalog, PolicyRun, Scenario, TaskSpec};
use tracing_subscriber::EnvFilter;

const TIMELINE_LINES: usize = 30;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Catalog::new(vec![
        TaskSpec::new("Sensor", 2_000, 50, 1),
        TaskSpec::new("Network", 10_000, 300, 3),
        TaskSpec::new("Display", 5_000, 100, 2),
        TaskSpec::new("Switch", 60_000, 200, 2),
    ])
    .expect("task catalog is well-formed");

    println!("Nominal utilisation: {:.3}", catalog.utilization());

    let scenarios = [
        (
            "moderate burst (x4)",
            Scenario::new(120_000, 30_000, 40_000, 4, false),
        ),
        (
            "severe burst (x10) + sporadic heavy jobs",
            Scenario::new(120_000, 30_000, 35_000, 10, true),
        ),
    ];

    for (description, scenario) in scenarios {
        let scenario = scenario.expect("scenario is well-formed");
        println!("\n{}", "=".repeat(60));
        println!("Scenario: {description}");

        let comparison = run_scenario(&catalog, &scenario);
        print_run(&comparison.baseline);
        print_run(&comparison.edf);

        println!("\n--- KPI SUMMARY ---");
        println!("policy, total_jobs, total_misses, miss_rate");
        for run in [&comparison.baseline, &comparison.edf] {
            println!(
                "{}, {}, {}, {:.3}",
                run.policy,
                run.kpi.total_jobs,
                run.kpi.total_misses,
                run.kpi.overall_miss_rate()
            );
        }
    }
}

fn print_run(run: &PolicyRun) {
    println!("\n--- {} timeline (first {TIMELINE_LINES} entries) ---", run.policy);
    let mut entries: Vec<_> = run.timeline.iter().collect();
    entries.sort_by_key(|entry| (entry.start, entry.arrival));
    for entry in entries.iter().take(TIMELINE_LINES) {
        println!(
            "t={:6} start={:6} finish={:6} dl={:6} task={:10} {}",
            entry.arrival,
            entry.start,
            entry.finish,
            entry.deadline,
            entry.task,
            if entry.hit { "HIT" } else { "MISS" }
        );
    }

    println!("\nPer-task KPIs (task, count, misses, miss_rate, avg_resp_ms, max_lateness_ms)");
    for kpi in &run.kpi.per_task {
        println!(
            "{:10} {:5} {:5} {:.3} {:9.1} {:6}",
            kpi.task,
            kpi.count,
            kpi.misses,
            kpi.miss_rate(),
            kpi.mean_response(),
            kpi.max_lateness
        );
    }
}
