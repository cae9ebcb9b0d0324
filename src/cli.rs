use clap::{Command, arg, builder::PossibleValuesParser, crate_version};
use strum::VariantNames;

use crate::executor::ExecMode;

pub fn cli() -> Command {
    Command::new("wlset")
        .about("Apply WiFi networks submitted from a web form")
        .version(crate_version!())
        .arg(
            arg!(--config <path>)
                .short('c')
                .required(false)
                .help("Config file, defaults to ~/.config/wlset/config.toml"),
        )
        .arg(
            arg!(--interface <name>)
                .short('i')
                .required(false)
                .help("Wireless interface, overrides the config"),
        )
        .arg(
            arg!(--mode <mode>)
                .short('m')
                .required(false)
                .help("How the script is passed to the privileged shell")
                .value_parser(PossibleValuesParser::new(ExecMode::VARIANTS.iter().copied())),
        )
        .arg(arg!(--"dry-run" "Log the script instead of running it"))
        .arg(arg!(--print "Print the composed script and exit"))
        .arg(arg!([field] ... "Form fields as FIELD=VALUE, e.g. WIFIssid_0='My Net'"))
}
