//! Command-line front end for the simulator.
//!
//! ```text
//! pagesim -f <frames> [-v <pages>] (-r "<refs>" | -p <path> | -n <len> [--seed <u64>])
//!         [-a fifo|opt|lru|lfu|all]
//! ```

use anyhow::{bail, Context};
use log::info;

use pagesim::{
    Policy, ReferenceString, ReplacementEngine, Report, DEFAULT_VIRTUAL_PAGES,
    MAX_PHYSICAL_FRAMES,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let frames: usize = args
        .value_from_str(["-f", "--frames"])
        .context("-f <frames> must be given as an integer")?;
    if frames > MAX_PHYSICAL_FRAMES {
        bail!(
            "Number of physical frames must be at most {}, got {}",
            MAX_PHYSICAL_FRAMES,
            frames
        );
    }

    let virtual_pages: usize = args
        .opt_value_from_str(["-v", "--virtual-pages"])
        .context("-v should be an integer")?
        .unwrap_or(DEFAULT_VIRTUAL_PAGES);

    let algorithm: String = args
        .opt_value_from_str(["-a", "--algorithm"])?
        .unwrap_or_else(|| "all".to_string());
    let policies: Vec<Policy> = if algorithm.eq_ignore_ascii_case("all") {
        Policy::ALL.to_vec()
    } else {
        vec![algorithm.parse()?]
    };

    let refs = read_references(&mut args, virtual_pages)?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("Unrecognized arguments: {:?}", remaining);
    }

    info!("Number of physical frames set to {}", frames);
    println!("Reference String:");
    println!("{}", refs);
    println!();

    let mut engine = ReplacementEngine::new(refs, frames, virtual_pages)?;
    for policy in policies {
        engine.run(policy);
        println!("{}", Report::new(&engine));
        if let Some(summary) = engine.summary() {
            info!("{}", summary);
        }
    }

    Ok(())
}

/// Take the reference string from `-r`, `-p` or `-n`, in that order.
fn read_references(
    args: &mut pico_args::Arguments,
    virtual_pages: usize,
) -> anyhow::Result<ReferenceString> {
    if let Some(text) = args.opt_value_from_str::<_, String>(["-r", "--refs"])? {
        return Ok(ReferenceString::parse(&text, virtual_pages)?);
    }

    if let Some(path) = args.opt_value_from_str::<_, String>(["-p", "--path"])? {
        return ReferenceString::from_file(&path, virtual_pages)
            .with_context(|| format!("Could not load reference string from {}", path));
    }

    if let Some(len) = args
        .opt_value_from_str::<_, usize>(["-n", "--random"])
        .context("-n should be an integer")?
    {
        let mut rng = match args.opt_value_from_str::<_, u64>("--seed")? {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        return Ok(ReferenceString::generate(len, virtual_pages, &mut rng)?);
    }

    bail!("Must provide a reference string with -r <refs>, -p <path> or -n <len>")
}
