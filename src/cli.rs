use clap::{Args, Parser, Subcommand};

use crate::model::{BitWidth, Screen};
use crate::viewmodel::{ExhibitViewModel, Preset};

#[derive(Parser, Debug)]
#[command(name = "epoch-exhibit", about = "Show how computers count time, and how 32 bits run out in 2038")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the byte-grouped binary form of a value
    Bits {
        #[arg(allow_hyphen_values = true)]
        value: i128,

        /// Width in bits (a multiple of 8, up to 128)
        #[arg(short, long, default_value = "32")]
        width: BitWidth,
    },

    /// Print a Unix timestamp as a UTC date, or its approximate year
    Date {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Print one readout of an exhibit screen
    Show(ScreenArgs),

    /// Reprint an exhibit screen once per second
    Watch {
        #[command(flatten)]
        screen: ScreenArgs,

        /// Stop after this many refreshes (runs until Ctrl-C otherwise)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    /// clock (32-bit), overflow (2038 rollover) or wide (64-bit)
    #[arg(short, long, default_value = "clock")]
    pub screen: Screen,

    /// Slider position in seconds since 1970
    #[arg(long, allow_hyphen_values = true, conflicts_with = "preset")]
    pub value: Option<i64>,

    /// Jump the slider like the on-screen buttons do
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Emit JSON instead of captioned text
    #[arg(long)]
    pub json: bool,
}

impl ScreenArgs {
    pub fn viewmodel(&self) -> ExhibitViewModel {
        let mut vm = ExhibitViewModel::new(self.screen);
        if let Some(value) = self.value {
            vm.slide_to(value);
        }
        if let Some(preset) = self.preset {
            vm.apply_preset(preset);
        }
        vm
    }
}
