// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        width: args.opt_value_from_str("--width").unwrap_or(None),
        height: args.opt_value_from_str("--height").unwrap_or(None),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    log::info!(
        "starting viewer (image: {})",
        flags.file_path.as_deref().unwrap_or("none")
    );

    app::run(flags)
}
