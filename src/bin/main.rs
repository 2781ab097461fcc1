use std::path::PathBuf;

use clap::Parser;
use log::info;

use prefix2asn::csv;
use prefix2asn::models::AddressFamily;
use prefix2asn::origin::OriginPolicy;
use prefix2asn::snapshot::resolve_snapshot;
use prefix2asn::speaker::SpeakerClient;

/// Dump a BGP speaker's announced prefixes with their origin ASNs to CSV.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// gRPC endpoint of the BGP speaker. Example: 127.0.0.1:50051
    #[clap(short, long)]
    endpoint: String,

    /// Address family: inet or inet6
    #[clap(short, long)]
    family: AddressFamily,

    /// CSV file destination
    #[clap(short, long)]
    csv_file: PathBuf,

    /// AS path segment the origin is read from: first-segment (historical
    /// output) or last-segment (conventional BGP origin)
    #[clap(long, default_value_t)]
    origin_policy: OriginPolicy,
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    if let Err(err) = run(opts) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> Result<(), Box<dyn std::error::Error>> {
    // probe the destination before spending time on the fetch
    csv::check_writable(&opts.csv_file)
        .map_err(|e| format!("unable to write {}: {}", opts.csv_file.display(), e))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let routes = runtime.block_on(async {
        let mut client = SpeakerClient::connect(&opts.endpoint).await?;
        client.list_rib(opts.family).await
    })?;

    let report = resolve_snapshot(&routes, opts.origin_policy);
    csv::write_csv(&report.table, &opts.csv_file)
        .map_err(|e| format!("unable to write {}: {}", opts.csv_file.display(), e))?;

    info!(
        "wrote {} entries to {}, skipped {} of {} routes",
        report.table.len(),
        opts.csv_file.display(),
        report.diagnostics.len(),
        routes.len()
    );

    Ok(())
}
