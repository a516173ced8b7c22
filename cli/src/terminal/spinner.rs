use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct SpinnerHandle {
    spinner: ProgressBar,
}

impl SpinnerHandle {
    pub fn finish_and_clear(self) {
        self.spinner.finish_and_clear();
    }
}

/// Starts a ticking spinner with the given message; hidden in quiet mode.
pub fn start(msg: &str, q_level: u8) -> SpinnerHandle {
    if q_level > 0 {
        return SpinnerHandle {
            spinner: ProgressBar::hidden(),
        };
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    SpinnerHandle { spinner: pb }
}
