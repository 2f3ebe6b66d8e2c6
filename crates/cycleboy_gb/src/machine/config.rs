use typed_builder::TypedBuilder;

use super::Model;

/// Construction-time options for a [`Device`](super::Device).
///
/// ```
/// use cycleboy_gb::{DeviceConfig, Model};
///
/// let config = DeviceConfig::builder().model(Model::Cgb).ram_seed(7).build();
/// assert!(config.skip_boot_rom);
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeviceConfig {
    #[builder(default)]
    pub model: Model,
    /// Start at 0x0100 with post-boot register values instead of running a
    /// boot ROM.
    #[builder(default = true)]
    pub skip_boot_rom: bool,
    /// Seed for the power-on garbage in WRAM/HRAM. `None` leaves them zeroed.
    #[builder(default, setter(strip_option))]
    pub ram_seed: Option<u64>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
