//! Four-Panel Synchronization Walkthrough
//!
//! Seeds a scenario, applies scripted plain-language edits through the real
//! engine, and prints the resulting four-panel state after each round.

use clap::Parser;
use console::style;
use quartet_ir::{Audience, Payload, RepKind, RepresentationState};
use quartet_sync::{EntryOptions, SyncConfig, SyncEngine};
use quartet_translate::TranslationCoordinator;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "demo-walkthrough")]
#[command(about = "Walk the four-representation sync engine through a scenario")]
struct Args {
    /// Audience for plain-language output (executive, technical, stakeholder, client)
    #[arg(short, long, default_value = "technical")]
    audience: String,

    /// Scenario label recorded in session metadata
    #[arg(short, long, default_value = "walkthrough")]
    scenario: String,

    /// Debounce interval in milliseconds
    #[arg(long, default_value = "300")]
    debounce_ms: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_audience(name: &str) -> Audience {
    match name {
        "executive" => Audience::Executive,
        "stakeholder" => Audience::Stakeholder,
        "client" => Audience::Client,
        _ => Audience::Technical,
    }
}

fn print_panels(state: &RepresentationState) {
    println!("{}", style("plainspeak").cyan().bold());
    println!("{}\n", state.plainspeak);

    println!("{}", style("code").cyan().bold());
    println!("{}\n", state.code);

    println!("{}", style("circuit").cyan().bold());
    match &state.circuit {
        Some(model) => {
            for op in model.ops_in_time_order() {
                match op.target {
                    Some(target) => {
                        println!("  t{}  {}  q{} -> q{}", op.time, op.kind.name(), op.qubit, target);
                    }
                    None => println!("  t{}  {}  q{}", op.time, op.kind.name(), op.qubit),
                }
            }
        }
        None => println!("  (no circuit yet)"),
    }
    println!();

    println!("{}", style("notation").cyan().bold());
    println!("{}\n", state.notation);
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = SyncConfig {
        debounce: std::time::Duration::from_millis(args.debounce_ms),
        ..Default::default()
    };
    let engine = SyncEngine::with_config(TranslationCoordinator::new(), config);

    engine.set_contextual_entry(
        args.scenario.clone(),
        RepKind::Plainspeak,
        EntryOptions {
            audience: Some(parse_audience(&args.audience)),
            seed: Some(Payload::text("create superposition")),
            ..Default::default()
        },
    );

    println!(
        "{}",
        style("== seeded entry: create superposition ==").green().bold()
    );
    print_panels(&engine.state());

    let edits = [
        "create superposition and entangle the pair",
        "This creates superposition and then measures the qubit",
    ];

    for edit in edits {
        engine.notify_edit(RepKind::Plainspeak, Payload::text(edit));
        engine.drain().await;

        println!("{}", style(format!("== after edit: {edit} ==")).green().bold());
        print_panels(&engine.state());

        if let Some(record) = engine.history().last() {
            println!("round quality: {:.2}\n", record.overall_quality);
        }
    }
}
