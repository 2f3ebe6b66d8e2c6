use std::path::PathBuf;

use anyhow::{Context, Result};
use cycleboy_gb::{Device, DeviceConfig, Model, CYCLES_PER_FRAME};
use typed_builder::TypedBuilder;

/// Default budget: one minute of emulated time.
pub const DEFAULT_MAX_CYCLES: u64 = CYCLES_PER_FRAME as u64 * 60 * 60;

#[derive(Debug, TypedBuilder)]
pub struct RunOptions {
    pub rom_path: PathBuf,
    #[builder(default = DEFAULT_MAX_CYCLES)]
    pub max_cycles: u64,
    #[builder(default)]
    pub model: Model,
    #[builder(default, setter(strip_option))]
    pub boot_rom_path: Option<PathBuf>,
    #[builder(default, setter(strip_option))]
    pub ram_seed: Option<u64>,
}

#[derive(Debug)]
pub struct RunReport {
    pub title: String,
    pub model: Model,
    pub cycles: u64,
    pub serial: Vec<u8>,
    pub locked: bool,
}

impl RunReport {
    /// Verdict printed over serial by test ROMs, if any.
    pub fn verdict(&self) -> Option<bool> {
        verdict(&self.serial)
    }
}

fn verdict(serial: &[u8]) -> Option<bool> {
    let text = String::from_utf8_lossy(serial);
    if text.contains("Passed") {
        Some(true)
    } else if text.contains("Failed") {
        Some(false)
    } else {
        None
    }
}

/// Load the ROM (and boot ROM), then run until the budget is spent, the CPU
/// locks up or the program reports a verdict over the serial port.
pub fn run(options: &RunOptions) -> Result<RunReport> {
    let rom = std::fs::read(&options.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", options.rom_path.display()))?;

    let config = DeviceConfig::builder()
        .model(options.model)
        .skip_boot_rom(options.boot_rom_path.is_none());
    let config = match options.ram_seed {
        Some(seed) => config.ram_seed(seed).build(),
        None => config.build(),
    };
    let mut device = Device::new(config, &rom);

    if let Some(path) = &options.boot_rom_path {
        let image = std::fs::read(path)
            .with_context(|| format!("failed to read boot ROM '{}'", path.display()))?;
        device
            .load_boot_rom(image)
            .with_context(|| format!("unusable boot ROM '{}'", path.display()))?;
    }

    // Check the serial port once per frame's worth of cycles.
    let mut cycles = 0u64;
    while cycles < options.max_cycles {
        let slice = (options.max_cycles - cycles).min(CYCLES_PER_FRAME as u64);
        let ran = device.step_cycles(slice);
        cycles += ran;
        if device.cpu.is_locked() {
            log::warn!("CPU locked at PC=0x{:04X}", device.cpu.regs.pc);
            break;
        }
        if verdict(device.serial_output()).is_some() {
            break;
        }
    }

    log::info!("ran {cycles} cycles");
    Ok(RunReport {
        title: device.mmu().cartridge().title(),
        model: device.model(),
        cycles,
        serial: device.serial_output().to_vec(),
        locked: device.cpu.is_locked(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_from_serial_text() {
        assert_eq!(verdict(b"cpu_instrs\n\nPassed all tests\n"), Some(true));
        assert_eq!(verdict(b"01:ok 02:Failed"), Some(false));
        assert_eq!(verdict(b"01:ok "), None);
    }

    #[test]
    fn spinning_rom_runs_out_its_budget() {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0134..0x0139].copy_from_slice(b"SPIN!");
        // 0x0100: JR -2
        rom[0x0100] = 0x18;
        rom[0x0101] = 0xFE;
        let path = std::env::temp_dir().join("cycleboy-spin.gb");
        std::fs::write(&path, &rom).unwrap();

        let budget = CYCLES_PER_FRAME as u64 * 2;
        let options = RunOptions::builder()
            .rom_path(path.clone())
            .max_cycles(budget)
            .build();
        let report = run(&options).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(report.title, "SPIN!");
        assert_eq!(report.model, Model::Dmg);
        assert!(report.cycles >= budget);
        assert!(!report.locked);
        assert_eq!(report.verdict(), None);
    }

    #[test]
    fn missing_rom_is_an_error() {
        let options = RunOptions::builder()
            .rom_path(PathBuf::from("does/not/exist.gb"))
            .build();
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.gb"));
    }
}
