use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use cycleboy::{RunOptions, DEFAULT_MAX_CYCLES};
use cycleboy_gb::Model;

const USAGE: &str =
    "Usage: cycleboy <rom> [max-cycles] [--cgb] [--boot-rom <path>] [--seed <n>]";

fn parse_args() -> Result<RunOptions> {
    let mut rom_path: Option<PathBuf> = None;
    let mut max_cycles = DEFAULT_MAX_CYCLES;
    let mut model = Model::Dmg;
    let mut boot_rom_path: Option<PathBuf> = None;
    let mut ram_seed: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cgb" => model = Model::Cgb,
            "--boot-rom" => {
                let path = args.next().context("--boot-rom needs a path")?;
                boot_rom_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let seed = args.next().context("--seed needs a value")?;
                ram_seed = Some(seed.parse().with_context(|| format!("invalid seed '{seed}'"))?);
            }
            _ if rom_path.is_none() => rom_path = Some(PathBuf::from(arg)),
            _ => {
                max_cycles = arg
                    .parse()
                    .with_context(|| format!("invalid max-cycles '{arg}'"))?;
            }
        }
    }

    let Some(rom_path) = rom_path else {
        bail!("{USAGE}");
    };

    let builder = RunOptions::builder()
        .rom_path(rom_path)
        .max_cycles(max_cycles)
        .model(model);
    Ok(match (boot_rom_path, ram_seed) {
        (Some(boot), Some(seed)) => builder.boot_rom_path(boot).ram_seed(seed).build(),
        (Some(boot), None) => builder.boot_rom_path(boot).build(),
        (None, Some(seed)) => builder.ram_seed(seed).build(),
        (None, None) => builder.build(),
    })
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let options = parse_args()?;
    log::info!("Running ROM '{}'", options.rom_path.display());
    let report = cycleboy::run(&options)?;

    print!("{}", String::from_utf8_lossy(&report.serial));
    println!();
    println!(
        "-- \"{}\" on {:?}: {} cycles{}",
        report.title,
        report.model,
        report.cycles,
        if report.locked { ", CPU locked" } else { "" }
    );

    Ok(match report.verdict() {
        Some(false) => ExitCode::FAILURE,
        _ if report.locked => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
