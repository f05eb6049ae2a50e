use dynsim::{ModelConfig, PendulumScenario, Scenario, ScenarioConfig};
use dynsim::{bench_forces, bench_integrators};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "projectile.yaml")]
    file_name: String,

    /// Run the throughput benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_integrators();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match scenario_cfg.engine.model {
        ModelConfig::Particle => {
            let mut scenario = Scenario::build_scenario(scenario_cfg)?;
            let trace = scenario.run();

            let n = trace.len();
            println!("particle: {n} steps recorded");
            println!(
                "  final position = ({:.4}, {:.4}), velocity = ({:.4}, {:.4})",
                scenario.particle.x.x,
                scenario.particle.x.y,
                scenario.particle.v.x,
                scenario.particle.v.y
            );
            if n > 0 {
                println!(
                    "  kinetic energy: {:.4} -> {:.4}",
                    trace.kinetic_energy[0],
                    trace.kinetic_energy[n - 1]
                );
            }
        }
        ModelConfig::Pendulum => {
            let mut scenario = PendulumScenario::build_scenario(scenario_cfg)?;
            let trace = scenario.run();

            let n = trace.len();
            println!("pendulum: {n} steps recorded");
            println!(
                "  final angle = {:.4} rad, angular velocity = {:.4} rad/s",
                scenario.pendulum.angle, scenario.pendulum.angular_velocity
            );
            if n > 0 {
                println!(
                    "  total energy: {:.6} -> {:.6}",
                    trace.total_energy[0],
                    trace.total_energy[n - 1]
                );
            }
        }
    }

    Ok(())
}
