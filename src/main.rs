use std::io::{BufWriter, Write};

use anyhow::{bail, Result};
use clap::Parser;
use log::{error, info};
use simple_logger::init_with_level;

use rs_cigar::{batch::reconstruct_batch, cli::Args};

fn main() -> Result<()> {
    let start = std::time::Instant::now();
    let args: Args = Args::parse();
    init_with_level(args.log_level())?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let records = args.records()?;
    let config = args.config();
    info!(
        "Reconstructing {} record(s) in {} mode",
        records.len(),
        config.mode
    );

    let results = reconstruct_batch(&records, &config);

    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut failed = 0;
    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(alignment) => writeln!(
                out,
                "{}\n{}\n{}\n",
                record.cigar, alignment.reference_track(), alignment.query_track()
            )?,
            Err(err) => {
                error!("{}: {err}", record.cigar);
                failed += 1;
            }
        }
    }
    out.flush()?;

    info!("Elapsed time: {:?}", start.elapsed());

    if failed > 0 {
        bail!("{failed} of {} record(s) failed", records.len());
    }
    Ok(())
}
