use std::io::{self, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use eyre::Context;
use ring_fifo::ring_buffer::{OverflowPolicy, RingBuffer};

/// Interactive driver for a single ring buffer, for poking at overflow and
/// wraparound behavior from a terminal.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of slots in the buffer.
    #[arg(short, long)]
    capacity: usize,
    /// Evict the oldest element instead of rejecting pushes when full.
    #[arg(short, long)]
    overwrite: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let policy = if args.overwrite {
        OverflowPolicy::Overwrite
    } else {
        OverflowPolicy::Reject
    };

    let mut buffer: RingBuffer<i64> =
        RingBuffer::with_policy(args.capacity, policy).wrap_err("creating buffer")?;

    println!(
        "ring buffer with {} slots, {:?} on overflow",
        buffer.capacity(),
        buffer.policy(),
    );
    println!("commands: push <n>, pop, peek, show, quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().wrap_err("flushing stdout")?;
        line.clear();
        if stdin.read_line(&mut line).wrap_err("reading command")? == 0 {
            // EOF, e.g. piped input ran out.
            break;
        }

        let command = line.trim();
        if command == "quit" {
            break;
        }
        if !command.is_empty() {
            run_command(&mut buffer, command);
        }
    }

    Ok(())
}

fn run_command(buffer: &mut RingBuffer<i64>, command: &str) {
    let mut parts = command.split_whitespace();

    match (parts.next(), parts.next()) {
        (Some("push"), Some(raw)) => match raw.parse::<i64>() {
            Ok(value) => {
                match buffer.push(value) {
                    Ok(None) => {}
                    Ok(Some(evicted)) => println!("evicted {evicted}"),
                    Err(error) => println!("push failed: {error}"),
                }
                show(buffer);
            }
            Err(_) => println!("push needs an integer, got '{raw}'"),
        },
        (Some("push"), None) => println!("push needs a value"),
        (Some("pop"), None) => {
            match buffer.pop() {
                Ok(value) => println!("popped {value}"),
                Err(error) => println!("pop failed: {error}"),
            }
            show(buffer);
        }
        (Some("peek"), None) => match buffer.peek() {
            Ok(value) => println!("oldest is {value}"),
            Err(error) => println!("peek failed: {error}"),
        },
        (Some("show"), None) => show(buffer),
        _ => println!("unknown command '{command}'"),
    }
}

fn show(buffer: &RingBuffer<i64>) {
    println!(
        "{:?} ({} of {} slots)",
        buffer,
        buffer.len(),
        buffer.capacity(),
    );
    log::debug!(
        "occupancy {}/{}, empty={}, full={}",
        buffer.len(),
        buffer.capacity(),
        buffer.is_empty(),
        buffer.is_full(),
    );
}
