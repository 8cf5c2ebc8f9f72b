use clap::Parser;

use crate::core::state::view::PresenterKind;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of animation ticks per second",
        default_value_t = 8.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_enum,
        value_name = "PRESENTER",
        help = "Presenter shown at startup, overriding the configuration"
    )]
    pub presenter: Option<PresenterKind>,
}
