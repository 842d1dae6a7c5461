use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use interview_prep::{Queue, Stack};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollectionKind {
    Queue,
    Stack,
}

#[derive(Parser)]
#[command(name = "interview_prep")]
#[command(version, about = "Fill a linked queue or stack and drain it", long_about = None)]
struct Cli {
    /// Values to add, in order
    #[arg(long, value_delimiter = ',', default_value = "1,2,3,4,5", allow_hyphen_values = true)]
    values: Vec<i32>,

    /// Which collection to drain
    #[arg(long, value_enum, default_value_t = CollectionKind::Queue)]
    collection: CollectionKind,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match cli.collection {
        CollectionKind::Queue => drain_queue(&cli.values)?,
        CollectionKind::Stack => drain_stack(&cli.values)?,
    }

    Ok(())
}

fn drain_queue(values: &[i32]) -> Result<()> {
    let mut queue = Queue::new();

    info!(?values, "entering values into an integer queue");
    for val in values {
        queue.enqueue(*val);
    }

    info!("dequeuing each item from the queue while is_empty() == false");
    while !queue.is_empty() {
        let val = queue.dequeue().context("queue drained early")?;
        debug!(remaining = queue.len(), "dequeued");
        println!("{}", val);
    }

    info!("the queue is now empty");
    Ok(())
}

fn drain_stack(values: &[i32]) -> Result<()> {
    let mut stack = Stack::new();

    info!(?values, "pushing values onto an integer stack");
    for val in values {
        stack.push(*val);
    }

    info!("popping each item from the stack while is_empty() == false");
    while !stack.is_empty() {
        let val = stack.pop().context("stack drained early")?;
        debug!(remaining = stack.len(), "popped");
        println!("{}", val);
    }

    info!("the stack is now empty");
    Ok(())
}
