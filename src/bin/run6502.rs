//! Headless 6502 runner.
//!
//! Loads a raw binary image into flat memory, resets the CPU and clocks it for
//! a fixed number of ticks, then prints the register file.
//!
//! Usage: `run6502 <image.bin> [origin-hex] [ticks]`

use anyhow::{bail, Context, Result};
use cpu6502::{verify_table, Cpu, FlatMemory, Vector};
use std::env;
use std::fs;

const DEFAULT_ORIGIN: u16 = 0x8000;
const DEFAULT_TICKS: u64 = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image.bin> [origin-hex] [ticks]", args[0]);
        std::process::exit(1);
    }

    let image_path = &args[1];
    let origin = match args.get(2) {
        Some(hex) => parse_origin(hex)?,
        None => DEFAULT_ORIGIN,
    };
    let ticks = match args.get(3) {
        Some(count) => count
            .parse::<u64>()
            .with_context(|| format!("invalid tick count: {}", count))?,
        None => DEFAULT_TICKS,
    };

    verify_table()?;

    let image = fs::read(image_path).with_context(|| format!("failed to read {}", image_path))?;
    if image.is_empty() {
        bail!("{} is empty", image_path);
    }
    log::info!("Loading {} ({} bytes) at ${:04X}", image_path, image.len(), origin);

    let mut memory = FlatMemory::new();
    memory.load(origin, &image)?;

    // Images that carry their own vectors keep them
    let end = origin as usize + image.len();
    let reset = Vector::Reset.address() as usize;
    if !(origin as usize <= reset && reset + 1 < end) {
        memory.set_vector(Vector::Reset, origin);
    }

    let mut cpu = Cpu::new(memory);
    log::info!("Reset to ${:04X}, running {} ticks", cpu.pc(), ticks);

    for _ in 0..ticks {
        cpu.clock();
    }

    println!(
        "PC=${:04X} A=${:02X} X=${:02X} Y=${:02X} SP=${:02X} P={:08b} last={} cycles={}",
        cpu.pc(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        cpu.status().bits(),
        cpu.mnemonic(),
        cpu.cycles()
    );

    Ok(())
}

fn parse_origin(text: &str) -> Result<u16> {
    let digits = text
        .trim_start_matches('$')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid origin address: {}", text))
}
