//! Command-line driver: replay a page reference string through one policy.
//!
//! ```text
//! pagecache --policy clock --capacity 4 1 2 3 4 5
//! ```

use anyhow::{bail, Context};
use clap::Parser;

use pagecache::{PageCache, PageId, PolicyKind, DEFAULT_CAPACITY};

#[derive(Parser, Debug)]
#[command(name = "pagecache", about = "Replay page accesses through an eviction policy")]
struct Args {
    /// Eviction policy: fifo, lru, clock or lfu
    #[arg(short, long, default_value = "lru")]
    policy: PolicyKind,

    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Only print the final frame state
    #[arg(short, long)]
    quiet: bool,

    /// Page reference string
    pages: Vec<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.pages.is_empty() {
        bail!("no pages given");
    }

    let mut cache = PageCache::with_policy(args.policy, args.capacity)
        .with_context(|| format!("building {} cache", args.policy))?;

    for &page in &args.pages {
        let outcome = cache.access(PageId::new(page));
        if !args.quiet {
            println!("access {}: {}", page, outcome);
            print_frames(&cache);
        }
    }

    if args.quiet {
        print_frames(&cache);
    }
    println!("{}", cache.stats());

    cache.teardown();
    Ok(())
}

fn print_frames(cache: &PageCache) {
    println!("{} frames ({}/{}):", cache.policy(), cache.len(), cache.capacity());
    for view in cache.snapshot() {
        println!("  {}", view);
    }
    println!();
}
